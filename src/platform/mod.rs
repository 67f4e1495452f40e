//! Platform abstraction layer
//!
//! The boundary with the host window/event loop:
//! - Input: pressed-key snapshot and discrete key-down events
//! - Time: monotonic millisecond clock with frame-rate capping

pub mod clock;
pub mod input;

pub use clock::{FrameClock, SimulatedTime, SystemTime, TimeSource};
pub use input::{EventQueue, InputEvent, Key, KeyState};
