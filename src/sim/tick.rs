//! Per-frame simulation tick
//!
//! The rally controller: serve scheduling, ball physics, scoring and win
//! detection, applied once per frame to a [`MatchState`].

use rand::Rng;

use super::collision::{BounceParams, resolve_paddle_collision, resolve_wall_collision};
use super::kinematics::integrate;
use super::state::{Controller, GameEvent, MatchState, PaddleCommand, RallyPhase, Side, table_center};
use crate::consts::*;

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left paddle intent (ignored when the AI drives it)
    pub left: PaddleCommand,
    /// Right paddle intent (ignored when the AI drives it)
    pub right: PaddleCommand,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    pub fn command(&self, side: Side) -> PaddleCommand {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Clock reading for a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTime {
    /// Monotonic milliseconds
    pub now_ms: u64,
    /// Milliseconds since the previous frame
    pub elapsed_ms: u32,
}

impl FrameTime {
    pub fn new(now_ms: u64, elapsed_ms: u32) -> Self {
        Self { now_ms, elapsed_ms }
    }
}

/// Advance the match by one frame
pub fn tick(state: &mut MatchState, input: &TickInput, time: FrameTime) {
    state.events.clear();

    if input.pause && state.phase != RallyPhase::MatchOver {
        toggle_pause(state, time.now_ms);
    }

    // Frozen until resumed or reset
    if state.paused || state.phase == RallyPhase::MatchOver {
        return;
    }

    state.frame += 1;

    move_paddles(state, input, time.elapsed_ms as f32);

    if state.phase == RallyPhase::Serving {
        if time.now_ms < state.serve_at_ms {
            state.ball.pos = table_center();
            state.ball.vel = glam::Vec2::ZERO;
            return;
        }
        serve(state);
    }

    if state.phase == RallyPhase::Rallying {
        advance_ball(state);
        if let Some(scorer) = check_scoring(state) {
            state.phase = RallyPhase::PointScored;
            award_point(state, scorer, time.now_ms);
        }
    }
}

fn toggle_pause(state: &mut MatchState, now_ms: u64) {
    if state.paused {
        if let Some(paused_at) = state.paused_at_ms.take() {
            // Keep the countdown where it was when the pause began
            if state.phase == RallyPhase::Serving {
                state.serve_at_ms += now_ms.saturating_sub(paused_at);
            }
        }
        state.paused = false;
        log::debug!("Resumed");
    } else {
        state.paused = true;
        state.paused_at_ms = Some(now_ms);
        log::debug!("Paused");
    }
}

/// Human input or AI decision for each paddle
fn move_paddles(state: &mut MatchState, input: &TickInput, elapsed_ms: f32) {
    for side in [Side::Left, Side::Right] {
        let i = side.index();
        let command = match &mut state.controllers[i] {
            Controller::Human => input.command(side),
            Controller::Ai(ai) => ai.update(&state.ball, &state.paddles[i], elapsed_ms),
        };
        state.paddles[i].apply(command);
    }
}

/// Launch from center toward the pending side (random if unset)
fn serve(state: &mut MatchState) {
    let mut rng = state.rng_state.next_rng();
    let toward = state.serve_toward.take().unwrap_or_else(|| {
        if rng.random_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        }
    });
    let angle = rng.random_range(-SERVE_ANGLE..=SERVE_ANGLE);

    state.ball.pos = table_center();
    state.ball.launch(toward, BALL_START_SPEED, angle);
    state.phase = RallyPhase::Rallying;
    state.events.push(GameEvent::Served { toward });
    log::debug!("Serve toward {:?} at {:.2} rad", toward, angle);
}

/// Integrate, then resolve walls and paddles
fn advance_ball(state: &mut MatchState) {
    let ball = &mut state.ball;
    ball.pos = integrate(ball.pos, ball.vel, SIM_STEP);

    if resolve_wall_collision(ball, 0.0, TABLE_HEIGHT) {
        state.events.push(GameEvent::WallHit);
    }

    let params = BounceParams::default();
    for side in [Side::Left, Side::Right] {
        if resolve_paddle_collision(ball, &state.paddles[side.index()], &params) {
            state.events.push(GameEvent::PaddleHit(side));
            break;
        }
    }
}

/// Side that scored, if the ball crossed a scoring line
fn check_scoring(state: &MatchState) -> Option<Side> {
    let rect = state.ball.as_rect();
    if rect.left() <= 0.0 {
        Some(Side::Right)
    } else if rect.right() >= TABLE_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// Resolve `PointScored` into `MatchOver` or the next `Serving`
fn award_point(state: &mut MatchState, scorer: Side, now_ms: u64) {
    state.score.increment(scorer);
    state.events.push(GameEvent::PointScored(scorer));
    state.ball.park();
    log::debug!(
        "Point to {:?}: {} - {}",
        scorer,
        state.score.left,
        state.score.right
    );

    if let Some(winner) = state.score.winner(state.win_score) {
        state.winner = Some(winner);
        state.phase = RallyPhase::MatchOver;
        state.events.push(GameEvent::MatchWon(winner));
        log::info!(
            "{:?} wins {} - {}",
            winner,
            state.score.left,
            state.score.right
        );
        return;
    }

    state.serve_toward = Some(scorer.opposite());
    state.serve_at_ms = now_ms + SERVE_DELAY_MS;
    state.phase = RallyPhase::Serving;
}
