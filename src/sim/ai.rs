//! Computer opponent
//!
//! Re-evaluates its target only every `reaction_ms` of simulated time and
//! extrapolates the ball in a straight line. Wall bounces between now and
//! arrival are not modeled.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle, PaddleCommand};
use crate::consts::AI_DEAD_ZONE;
use crate::settings::Difficulty;

/// AI state for one paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiController {
    pub difficulty: Difficulty,
    /// Minimum simulated time between target re-evaluations
    pub reaction_ms: f32,
    /// Blend weight of the predicted position (0 = chase the ball, 1 = full look-ahead)
    pub prediction_strength: f32,
    /// Time accumulated since the last re-evaluation
    pub accumulator_ms: f32,
    /// Target chosen at the last re-evaluation
    pub target_y: Option<f32>,
}

impl AiController {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            reaction_ms: difficulty.reaction_ms(),
            prediction_strength: difficulty.prediction_strength(),
            accumulator_ms: 0.0,
            target_y: None,
        }
    }

    /// Give the controlled paddle this difficulty's step speed
    pub fn apply_speed(&self, paddle: &mut Paddle) {
        paddle.set_speed(self.difficulty.paddle_speed());
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
        self.target_y = None;
    }

    /// Advance by `elapsed_ms` and decide this frame's move.
    ///
    /// The paddle only moves on frames where the reaction timer fires, at
    /// most one step per `reaction_ms`.
    pub fn update(&mut self, ball: &Ball, paddle: &Paddle, elapsed_ms: f32) -> PaddleCommand {
        self.accumulator_ms += elapsed_ms;
        if self.accumulator_ms < self.reaction_ms {
            return PaddleCommand::Hold;
        }
        self.accumulator_ms = 0.0;

        let target = self.target_for(ball, paddle.pos.x);
        self.target_y = Some(target);
        steer(target, paddle.pos.y)
    }

    /// Blend of the ball's current y and its straight-line prediction
    pub fn target_for(&self, ball: &Ball, paddle_x: f32) -> f32 {
        let predicted = predict_y(ball, paddle_x);
        ball.pos.y * (1.0 - self.prediction_strength) + predicted * self.prediction_strength
    }
}

/// Straight-line projection of the ball's y when it reaches `paddle_x`
pub fn predict_y(ball: &Ball, paddle_x: f32) -> f32 {
    let frames = (ball.pos.x - paddle_x).abs() / ball.vel.x.abs().max(1.0);
    ball.pos.y + ball.vel.y * frames
}

/// Step toward `target` unless it is inside the dead zone around `paddle_y`
pub fn steer(target: f32, paddle_y: f32) -> PaddleCommand {
    if target < paddle_y - AI_DEAD_ZONE {
        PaddleCommand::Up
    } else if target > paddle_y + AI_DEAD_ZONE {
        PaddleCommand::Down
    } else {
        PaddleCommand::Hold
    }
}
