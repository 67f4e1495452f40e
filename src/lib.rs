//! Polished Pong - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, rally state, AI)
//! - `settings`: Match configuration chosen from the menu
//! - `app`: Menu / match state machine driven by key events
//! - `platform`: Input snapshot, event queue and frame clock
//! - `renderer`: Draw-command and vertex generation for the host renderer
//! - `audio`: Fire-and-forget sound triggers

pub mod app;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppScreen};
pub use settings::{Difficulty, PlayMode, Settings};

/// Game configuration constants
///
/// Velocities and paddle speeds are in pixels per frame.
pub mod consts {
    use std::f32::consts::PI;

    /// Target frame rate
    pub const FPS: u32 = 60;
    /// Fixed integration step (one frame)
    pub const SIM_STEP: f32 = 1.0;
    /// Cap on the elapsed time a single frame reports
    pub const MAX_FRAME_MS: u32 = 100;

    /// Table dimensions
    pub const TABLE_WIDTH: f32 = 900.0;
    pub const TABLE_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    /// Distance from the table edge to the paddle center
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    pub const PADDLE_MIN_SPEED: f32 = 1.0;
    pub const PADDLE_MAX_SPEED: f32 = 14.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_START_SPEED: f32 = 5.0;
    pub const BALL_MIN_SPEED: f32 = 3.0;
    pub const BALL_MAX_SPEED: f32 = 14.0;
    /// Speed boost when ball hits paddle (multiplicative)
    pub const BALL_SPEEDUP: f32 = 1.06;
    /// Steepest bounce off a paddle edge (~67.5 degrees)
    pub const MAX_BOUNCE_ANGLE: f32 = 3.0 * PI / 8.0;
    /// Serve angle range, symmetric around horizontal
    pub const SERVE_ANGLE: f32 = PI / 4.0;

    /// Pause between a point and the next serve
    pub const SERVE_DELAY_MS: u64 = 900;

    /// Match length
    pub const WIN_SCORE: u32 = 7;
    pub const MIN_WIN_SCORE: u32 = 1;
    pub const MAX_WIN_SCORE: u32 = 15;

    /// AI holds when its target is within this distance of the paddle center
    pub const AI_DEAD_ZONE: f32 = 6.0;
}
