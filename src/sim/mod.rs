//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only
//! - Seeded RNG only
//! - Time comes in through [`FrameTime`], never read from a clock
//! - No rendering or platform dependencies

pub mod ai;
pub mod collision;
pub mod kinematics;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::{AiController, predict_y};
pub use collision::{BounceParams, resolve_paddle_collision, resolve_wall_collision};
pub use kinematics::integrate;
pub use rect::Rect;
pub use state::{
    Ball, Controller, GameEvent, MatchState, Paddle, PaddleCommand, RallyPhase, Score, Side,
    table_center,
};
pub use tick::{FrameTime, TickInput, tick};
