//! Collision detection and response
//!
//! Pure axis-aligned overlap tests. There is no continuous collision
//! detection: `BALL_MAX_SPEED` keeps per-frame travel near one paddle width,
//! and tunneling past that is accepted.

use glam::Vec2;

use super::state::{Ball, Paddle};
use crate::consts::{BALL_MAX_SPEED, BALL_MIN_SPEED, BALL_SPEEDUP, MAX_BOUNCE_ANGLE};

/// Tuning for paddle bounces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceParams {
    pub speedup: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub max_angle: f32,
}

impl Default for BounceParams {
    fn default() -> Self {
        Self {
            speedup: BALL_SPEEDUP,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            max_angle: MAX_BOUNCE_ANGLE,
        }
    }
}

/// Bounce off the top/bottom walls at `min_y` / `max_y`
///
/// Returns true if a wall was hit. The ball is clamped exactly onto the
/// wall and `vy` is negated. Left/right edges are scoring lines, not walls.
pub fn resolve_wall_collision(ball: &mut Ball, min_y: f32, max_y: f32) -> bool {
    let half_h = ball.size.y / 2.0;

    if ball.pos.y - half_h <= min_y {
        ball.pos.y = min_y + half_h;
        ball.vel.y = -ball.vel.y;
        true
    } else if ball.pos.y + half_h >= max_y {
        ball.pos.y = max_y - half_h;
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Speed after a paddle contact
#[inline]
pub fn bounce_speed(speed: f32, params: &BounceParams) -> f32 {
    (speed * params.speedup).clamp(params.min_speed, params.max_speed)
}

/// Relative hit position on the paddle: -1 at the top edge, 1 at the bottom
#[inline]
pub fn relative_hit(ball: &Ball, paddle: &Paddle) -> f32 {
    ((ball.pos.y - paddle.pos.y) / (paddle.size.y / 2.0)).clamp(-1.0, 1.0)
}

/// Bounce the ball off a paddle if their rectangles overlap
///
/// Returns true on a hit. The ball is pushed horizontally clear of the
/// paddle so a second call on the same pair is a no-op. The outgoing angle
/// depends on where the ball struck; speed ramps by `params.speedup`.
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle, params: &BounceParams) -> bool {
    let paddle_rect = paddle.as_rect();
    if !ball.as_rect().overlaps(&paddle_rect) {
        return false;
    }

    let incoming = if ball.vel.x < 0.0 { -1.0 } else { 1.0 };
    if incoming < 0.0 {
        ball.set_left(paddle_rect.right());
    } else {
        ball.set_right(paddle_rect.left());
    }

    let angle = relative_hit(ball, paddle) * params.max_angle;
    let speed = bounce_speed(ball.speed, params);
    let direction = -incoming;

    ball.vel = Vec2::new(direction * speed * angle.cos(), speed * angle.sin());
    ball.speed = speed;
    true
}
