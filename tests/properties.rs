//! Property tests for the simulation invariants

use glam::Vec2;
use proptest::prelude::*;

use polished_pong::consts::*;
use polished_pong::sim::{
    Ball, BounceParams, FrameTime, MatchState, Paddle, PaddleCommand, RallyPhase, Side, TickInput,
    resolve_paddle_collision, resolve_wall_collision, table_center, tick,
};
use polished_pong::{Difficulty, PlayMode, Settings};

fn command() -> impl Strategy<Value = PaddleCommand> {
    prop_oneof![
        Just(PaddleCommand::Up),
        Just(PaddleCommand::Down),
        Just(PaddleCommand::Hold),
    ]
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Left), Just(Side::Right)]
}

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Normal),
        Just(Difficulty::Hard),
    ]
}

/// Ball overlapping `paddle`, travelling toward it at `speed`
fn ball_into(paddle: &Paddle, offset_y: f32, speed: f32, angle: f32) -> Ball {
    let toward = paddle.side.direction();
    let x = paddle.pos.x - toward * (PADDLE_WIDTH / 2.0 + BALL_SIZE / 2.0 - 2.0);
    Ball {
        pos: Vec2::new(x, paddle.pos.y + offset_y),
        vel: Vec2::new(toward * speed * angle.cos(), speed * angle.sin()),
        speed,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn paddle_never_leaves_table(
        speed in 0.0f32..30.0,
        commands in prop::collection::vec(command(), 0..300),
    ) {
        let mut paddle = Paddle::new(Side::Left);
        paddle.set_speed(speed);
        for cmd in commands {
            paddle.apply(cmd);
            let rect = paddle.as_rect();
            prop_assert!(rect.top() >= 0.0);
            prop_assert!(rect.bottom() <= TABLE_HEIGHT);
        }
    }

    #[test]
    fn paddle_bounce_ramps_speed_and_reverses(
        side in side(),
        paddle_y in PADDLE_HEIGHT / 2.0..TABLE_HEIGHT - PADDLE_HEIGHT / 2.0,
        offset_y in -60.0f32..60.0,
        speed in BALL_MIN_SPEED..BALL_MAX_SPEED,
        angle in -1.0f32..1.0,
    ) {
        let mut paddle = Paddle::new(side);
        paddle.pos.y = paddle_y;
        let mut ball = ball_into(&paddle, offset_y, speed, angle);
        let params = BounceParams::default();

        prop_assert!(resolve_paddle_collision(&mut ball, &paddle, &params));

        let expected = (speed * BALL_SPEEDUP).clamp(BALL_MIN_SPEED, BALL_MAX_SPEED);
        prop_assert!((ball.speed - expected).abs() < 1e-4);
        prop_assert!((ball.vel.length() - ball.speed).abs() < 1e-3);
        // Leaves in the opposite direction
        prop_assert_eq!(ball.vel.x.signum(), -side.direction());
        prop_assert!(ball.vel.y.atan2(ball.vel.x.abs()).abs() <= MAX_BOUNCE_ANGLE + 1e-4);
    }

    #[test]
    fn paddle_bounce_is_idempotent(
        side in side(),
        offset_y in -60.0f32..60.0,
        speed in BALL_MIN_SPEED..BALL_MAX_SPEED,
    ) {
        let paddle = Paddle::new(side);
        let mut ball = ball_into(&paddle, offset_y, speed, 0.3);
        let params = BounceParams::default();

        prop_assert!(resolve_paddle_collision(&mut ball, &paddle, &params));
        let after = ball.clone();
        prop_assert!(!resolve_paddle_collision(&mut ball, &paddle, &params));
        prop_assert_eq!(ball.pos, after.pos);
        prop_assert_eq!(ball.vel, after.vel);
        prop_assert_eq!(ball.speed, after.speed);
    }

    #[test]
    fn wall_bounce_flips_vy_and_clamps(
        x in 100.0f32..800.0,
        depth in 0.0f32..10.0,
        vx in -8.0f32..8.0,
        vy in 0.5f32..10.0,
        top in any::<bool>(),
    ) {
        let half = BALL_SIZE / 2.0;
        let (y, vy) = if top {
            (half - depth, -vy)
        } else {
            (TABLE_HEIGHT - half + depth, vy)
        };
        let mut ball = Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::new(vx, vy),
            ..Default::default()
        };

        prop_assert!(resolve_wall_collision(&mut ball, 0.0, TABLE_HEIGHT));
        prop_assert_eq!(ball.vel, Vec2::new(vx, -vy));
        let rect = ball.as_rect();
        prop_assert!(rect.top() >= 0.0);
        prop_assert!(rect.bottom() <= TABLE_HEIGHT);
    }

    #[test]
    fn ball_frozen_at_center_before_serve(
        seed in any::<u64>(),
        difficulty in difficulty(),
        inputs in prop::collection::vec((command(), command()), 1..50),
    ) {
        let settings = Settings {
            mode: PlayMode::OnePlayer,
            difficulty,
            seed,
            ..Settings::default()
        };
        let mut state = MatchState::new(&settings, 0);

        let mut now = 0;
        for (left, right) in inputs {
            now += 16;
            if now >= state.serve_at_ms {
                break;
            }
            tick(&mut state, &TickInput { left, right, pause: false }, FrameTime::new(now, 16));
            prop_assert_eq!(state.phase, RallyPhase::Serving);
            prop_assert_eq!(state.ball.pos, table_center());
            prop_assert_eq!(state.ball.vel, Vec2::ZERO);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn scores_only_grow_and_match_freezes(
        seed in any::<u64>(),
        difficulty in difficulty(),
        win_score in 1u32..4,
    ) {
        let settings = Settings {
            mode: PlayMode::Attract,
            difficulty,
            win_score,
            seed,
        };
        let mut state = MatchState::new(&settings, 0);
        let input = TickInput::default();

        let mut now = 0;
        let (mut left, mut right) = (0, 0);
        for _ in 0..60 * 60 * 5 {
            now += 16;
            tick(&mut state, &input, FrameTime::new(now, 16));
            prop_assert!(state.score.left >= left && state.score.right >= right);
            prop_assert!(state.score.left + state.score.right <= left + right + 1);
            left = state.score.left;
            right = state.score.right;

            let speed = state.ball.speed;
            prop_assert!((BALL_MIN_SPEED..=BALL_MAX_SPEED).contains(&speed));
            if state.is_over() {
                break;
            }
        }

        if state.is_over() {
            let winner = state.winner;
            prop_assert!(winner.is_some());
            prop_assert!(state.score.left.min(state.score.right) < win_score);

            let frozen = (state.score, state.ball.pos, state.paddles[0].pos, state.paddles[1].pos);
            for _ in 0..30 {
                now += 16;
                tick(&mut state, &input, FrameTime::new(now, 16));
            }
            prop_assert_eq!(state.winner, winner);
            prop_assert_eq!(
                (state.score, state.ball.pos, state.paddles[0].pos, state.paddles[1].pos),
                frozen
            );
        }
    }
}
