//! Match state and core simulation types
//!
//! Everything the rally controller mutates lives in [`MatchState`]; there is
//! no ambient global state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ai::AiController;
use super::kinematics::clamp_extent;
use super::rect::Rect;
use crate::consts::*;
use crate::settings::{PlayMode, Settings};

/// Table side / player identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of travel toward this side
    pub fn direction(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Rally phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Ball frozen at center until the serve time
    Serving,
    /// Ball in motion
    Rallying,
    /// A side has scored this frame; resolved to `Serving` or `MatchOver`
    /// before the tick returns
    PointScored,
    /// Winner decided, waiting for an explicit play-again
    MatchOver,
}

/// Something that happened during a tick (audio/feedback triggers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Served { toward: Side },
    WallHit,
    PaddleHit(Side),
    PointScored(Side),
    MatchWon(Side),
}

/// Per-frame vertical intent for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleCommand {
    Up,
    Down,
    #[default]
    Hold,
}

/// A player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Center position
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical step per frame
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => TABLE_WIDTH - PADDLE_MARGIN,
        };
        Self {
            side,
            pos: Vec2::new(x, TABLE_HEIGHT / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Set step speed, clamped to the allowed paddle range
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(PADDLE_MIN_SPEED, PADDLE_MAX_SPEED);
    }

    pub fn move_up(&mut self) {
        self.move_by(-self.speed);
    }

    pub fn move_down(&mut self) {
        self.move_by(self.speed);
    }

    pub fn apply(&mut self, command: PaddleCommand) {
        match command {
            PaddleCommand::Up => self.move_up(),
            PaddleCommand::Down => self.move_down(),
            PaddleCommand::Hold => {}
        }
    }

    fn move_by(&mut self, dy: f32) {
        self.pos.y = clamp_extent(self.pos.y + dy, self.size.y / 2.0, 0.0, TABLE_HEIGHT);
    }

    pub fn recenter(&mut self) {
        self.pos.y = TABLE_HEIGHT / 2.0;
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Scalar speed; equals `vel.length()` whenever the ball is moving
    pub speed: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: table_center(),
            vel: Vec2::ZERO,
            size: Vec2::splat(BALL_SIZE),
            speed: BALL_START_SPEED,
        }
    }
}

impl Ball {
    pub fn as_rect(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Freeze at the table center with base speed
    pub fn park(&mut self) {
        self.pos = table_center();
        self.vel = Vec2::ZERO;
        self.speed = BALL_START_SPEED;
    }

    /// Launch from the current position at `speed`, `angle` radians off
    /// horizontal, toward `toward`
    pub fn launch(&mut self, toward: Side, speed: f32, angle: f32) {
        self.speed = speed;
        self.vel = Vec2::new(
            toward.direction() * speed * angle.cos(),
            speed * angle.sin(),
        );
    }

    /// Shift horizontally so the left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    /// Shift horizontally so the right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }
}

/// Center of the table
#[inline]
pub fn table_center() -> Vec2 {
    Vec2::new(TABLE_WIDTH / 2.0, TABLE_HEIGHT / 2.0)
}

/// Who drives a paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Controller {
    Human,
    Ai(AiController),
}

/// Score pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side whose score has reached `win_score`, if any
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// RNG state wrapper for serialization
///
/// Each draw reseeds from `seed` and the number of draws so far, so the
/// sequence is reproducible from the serialized fields alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream));
        self.stream += 1;
        rng
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: RallyPhase,
    pub paused: bool,
    /// When the pause started (ms), for pushing the serve time back
    pub paused_at_ms: Option<u64>,
    pub score: Score,
    pub win_score: u32,
    pub winner: Option<Side>,
    /// Absolute time (ms) at which the ball launches
    pub serve_at_ms: u64,
    /// Side the next serve travels toward (`None` = random)
    pub serve_toward: Option<Side>,
    pub paddles: [Paddle; 2],
    pub controllers: [Controller; 2],
    pub ball: Ball,
    /// Frames simulated (excludes paused frames)
    pub frame: u64,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Start a match at time `now_ms`; the first serve goes in a random
    /// direction after the serve delay
    pub fn new(settings: &Settings, now_ms: u64) -> Self {
        let settings = settings.clamped();
        let mut paddles = [Paddle::new(Side::Left), Paddle::new(Side::Right)];
        let controllers = [Side::Left, Side::Right].map(|side| {
            if settings.mode.ai_drives(side) {
                let ai = AiController::new(settings.difficulty);
                ai.apply_speed(&mut paddles[side.index()]);
                Controller::Ai(ai)
            } else {
                Controller::Human
            }
        });

        Self {
            seed: settings.seed,
            rng_state: RngState::new(settings.seed),
            phase: RallyPhase::Serving,
            paused: false,
            paused_at_ms: None,
            score: Score::default(),
            win_score: settings.win_score,
            winner: None,
            serve_at_ms: now_ms + SERVE_DELAY_MS,
            serve_toward: None,
            paddles,
            controllers,
            ball: Ball::default(),
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == RallyPhase::MatchOver
    }

    /// Whole seconds left before the serve, for the countdown overlay
    pub fn serve_countdown(&self, now_ms: u64) -> Option<u64> {
        if self.phase != RallyPhase::Serving || now_ms >= self.serve_at_ms {
            return None;
        }
        Some((self.serve_at_ms - now_ms) / 1000 + 1)
    }

    /// Reset for a new match with the same mode and difficulty
    pub fn play_again(&mut self, now_ms: u64) {
        if self.phase != RallyPhase::MatchOver {
            return;
        }
        self.score = Score::default();
        self.winner = None;
        for paddle in &mut self.paddles {
            paddle.recenter();
        }
        for controller in &mut self.controllers {
            if let Controller::Ai(ai) = controller {
                ai.reset();
            }
        }
        self.ball.park();
        self.serve_toward = None;
        self.serve_at_ms = now_ms + SERVE_DELAY_MS;
        self.paused = false;
        self.paused_at_ms = None;
        self.phase = RallyPhase::Serving;
        log::info!("New match started (first to {})", self.win_score);
    }
}
