//! Rendering boundary
//!
//! The core never touches a graphics API. Each frame it produces a list of
//! [`DrawCommand`]s, and [`shapes`] turns the geometric ones into colored
//! triangle vertices a host can upload as-is.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Align, DrawCommand, TextSize, build_scene};
pub use vertex::Vertex;
