//! Per-frame draw command list
//!
//! Coordinates are table pixels with the origin at the top-left. Text
//! positions are the top of the line; `Align::Center` centers on `pos.x`.

use glam::Vec2;

use super::vertex::colors;
use crate::app::{App, AppScreen};
use crate::consts::{TABLE_HEIGHT, TABLE_WIDTH};
use crate::settings::{PlayMode, Settings};
use crate::sim::{MatchState, RallyPhase, Rect, Side};

/// Dash pitch of the center line
const DASH_STEP: f32 = 22.0;
const DASH_SIZE: Vec2 = Vec2::new(2.0, 12.0);
const DASH_OFFSET: f32 = 6.0;

/// Font size classes; the host maps them to real fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Title,
    Score,
    Menu,
    Hud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole frame
    Clear([f32; 4]),
    Rect {
        rect: Rect,
        color: [f32; 4],
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        text: String,
        pos: Vec2,
        size: TextSize,
        align: Align,
        color: [f32; 4],
    },
}

impl DrawCommand {
    fn centered(text: impl Into<String>, y_frac: f32, size: TextSize, color: [f32; 4]) -> Self {
        DrawCommand::Text {
            text: text.into(),
            pos: Vec2::new(TABLE_WIDTH / 2.0, TABLE_HEIGHT * y_frac),
            size,
            align: Align::Center,
            color,
        }
    }

    /// Text content, if this is a text command
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Build the draw list for the current frame
pub fn build_scene(app: &App, now_ms: u64) -> Vec<DrawCommand> {
    let mut commands = vec![DrawCommand::Clear(colors::BACKGROUND)];
    match &app.screen {
        AppScreen::Menu => menu(&app.settings, &mut commands),
        AppScreen::Playing(state) => {
            table(state, &mut commands);
            hud(&app.settings, &mut commands);
            overlay(state, &app.settings, now_ms, &mut commands);
        }
    }
    commands
}

fn menu(settings: &Settings, out: &mut Vec<DrawCommand>) {
    let mode = match settings.mode {
        PlayMode::TwoPlayer => "2-Player",
        _ => "1-Player (AI)",
    };
    out.extend([
        DrawCommand::centered("POLISHED PONG", 0.18, TextSize::Title, colors::WHITE),
        DrawCommand::centered(
            "Press 1 for Single Player  •  2 for Two Player",
            0.34,
            TextSize::Menu,
            colors::GRAY,
        ),
        DrawCommand::centered(format!("Mode: {mode}"), 0.44, TextSize::Menu, colors::CYAN),
        DrawCommand::centered(
            format!("Difficulty (UP/DOWN): {}", settings.difficulty.as_str()),
            0.52,
            TextSize::Menu,
            colors::MAGENTA,
        ),
        DrawCommand::centered(
            format!("Win Score (LEFT/RIGHT): {}", settings.win_score),
            0.60,
            TextSize::Menu,
            colors::WHITE,
        ),
        DrawCommand::centered(
            "P: Pause during game • R: Restart • ESC: Quit",
            0.72,
            TextSize::Hud,
            colors::GRAY,
        ),
        DrawCommand::centered("Press SPACE or Enter to Start", 0.85, TextSize::Menu, colors::WHITE),
        DrawCommand::Text {
            text: "Player 1: W / S".into(),
            pos: Vec2::new(40.0, TABLE_HEIGHT - 60.0),
            size: TextSize::Menu,
            align: Align::Left,
            color: colors::CYAN,
        },
        DrawCommand::Text {
            text: "Player 2: Up / Down".into(),
            pos: Vec2::new(TABLE_WIDTH * 0.75, TABLE_HEIGHT - 60.0),
            size: TextSize::Menu,
            align: Align::Center,
            color: colors::MAGENTA,
        },
    ]);
}

fn side_color(side: Side) -> [f32; 4] {
    match side {
        Side::Left => colors::CYAN,
        Side::Right => colors::MAGENTA,
    }
}

fn table(state: &MatchState, out: &mut Vec<DrawCommand>) {
    let mut y = 0.0;
    while y < TABLE_HEIGHT {
        out.push(DrawCommand::Rect {
            rect: Rect::from_min_size(
                Vec2::new(TABLE_WIDTH / 2.0 - DASH_SIZE.x / 2.0, y + DASH_OFFSET),
                DASH_SIZE,
            ),
            color: colors::GRAY,
        });
        y += DASH_STEP;
    }

    for paddle in &state.paddles {
        out.push(DrawCommand::Rect {
            rect: paddle.as_rect(),
            color: side_color(paddle.side),
        });
    }

    out.push(DrawCommand::Circle {
        center: state.ball.pos,
        radius: state.ball.size.x / 2.0,
        color: colors::WHITE,
    });

    for (side, x) in [(Side::Left, 0.25), (Side::Right, 0.75)] {
        out.push(DrawCommand::Text {
            text: state.score.get(side).to_string(),
            pos: Vec2::new(TABLE_WIDTH * x, 18.0),
            size: TextSize::Score,
            align: Align::Center,
            color: side_color(side),
        });
    }
}

fn hud(settings: &Settings, out: &mut Vec<DrawCommand>) {
    out.push(DrawCommand::Text {
        text: format!(
            "Mode: {} • Difficulty: {} • First to {}",
            settings.mode.as_str(),
            settings.difficulty.as_str(),
            settings.win_score
        ),
        pos: Vec2::new(20.0, TABLE_HEIGHT - 34.0),
        size: TextSize::Hud,
        align: Align::Left,
        color: colors::WHITE,
    });
}

fn overlay(state: &MatchState, settings: &Settings, now_ms: u64, out: &mut Vec<DrawCommand>) {
    if state.paused {
        out.push(DrawCommand::centered(
            "PAUSED - Press P to resume",
            0.5,
            TextSize::Menu,
            colors::WHITE,
        ));
        return;
    }

    match state.phase {
        RallyPhase::Serving => {
            if let Some(secs) = state.serve_countdown(now_ms) {
                out.push(DrawCommand::centered(
                    format!("Serve in {secs}"),
                    0.45,
                    TextSize::Menu,
                    colors::WHITE,
                ));
            }
        }
        RallyPhase::MatchOver => {
            if let Some(winner) = state.winner {
                out.push(DrawCommand::centered(
                    format!("{} WINS!", settings.mode.winner_label(winner)),
                    0.35,
                    TextSize::Title,
                    colors::WHITE,
                ));
            }
            out.extend([
                DrawCommand::centered(
                    format!("Final Score: {} - {}", state.score.left, state.score.right),
                    0.50,
                    TextSize::Menu,
                    colors::GRAY,
                ),
                DrawCommand::centered(
                    "Press R to return to menu or SPACE to play again",
                    0.68,
                    TextSize::Hud,
                    colors::WHITE,
                ),
            ]);
        }
        RallyPhase::Rallying | RallyPhase::PointScored => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands.iter().filter_map(DrawCommand::text).collect()
    }

    fn playing_app(mode: PlayMode) -> App {
        let mut app = App::new(Settings {
            mode,
            ..Settings::default()
        });
        app.start_match(0);
        app
    }

    fn state_mut(app: &mut App) -> &mut MatchState {
        match &mut app.screen {
            AppScreen::Playing(state) => &mut **state,
            AppScreen::Menu => panic!("no match"),
        }
    }

    #[test]
    fn test_menu_lists_settings() {
        let app = App::new(Settings::default());
        let commands = build_scene(&app, 0);
        let lines = texts(&commands);

        assert_eq!(commands[0], DrawCommand::Clear(colors::BACKGROUND));
        assert!(lines.contains(&"POLISHED PONG"));
        assert!(lines.contains(&"Mode: 1-Player (AI)"));
        assert!(lines.contains(&"Difficulty (UP/DOWN): Normal"));
        assert!(lines.contains(&"Win Score (LEFT/RIGHT): 7"));
    }

    #[test]
    fn test_table_geometry() {
        let app = playing_app(PlayMode::OnePlayer);
        let commands = build_scene(&app, 0);

        let rects = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        let dashes = (TABLE_HEIGHT / DASH_STEP).ceil() as usize;
        assert_eq!(rects, dashes + 2);

        let circles: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect();
        assert_eq!(circles, vec![Vec2::new(TABLE_WIDTH / 2.0, TABLE_HEIGHT / 2.0)]);
    }

    #[test]
    fn test_serve_countdown_and_hud() {
        let app = playing_app(PlayMode::OnePlayer);
        let commands = build_scene(&app, 100);
        let lines = texts(&commands);

        assert!(lines.contains(&"Serve in 1"));
        assert!(lines.contains(&"Mode: 1P (AI) • Difficulty: Normal • First to 7"));
        assert_eq!(lines.iter().filter(|t| **t == "0").count(), 2);
    }

    #[test]
    fn test_paused_overlay_replaces_countdown() {
        let mut app = playing_app(PlayMode::TwoPlayer);
        state_mut(&mut app).paused = true;
        let commands = build_scene(&app, 100);
        let lines = texts(&commands);

        assert!(lines.contains(&"PAUSED - Press P to resume"));
        assert!(!lines.iter().any(|t| t.starts_with("Serve in")));
    }

    #[test]
    fn test_match_over_overlay() {
        let mut app = playing_app(PlayMode::OnePlayer);
        let state = state_mut(&mut app);
        state.phase = RallyPhase::MatchOver;
        state.winner = Some(Side::Right);
        state.score.left = 3;
        state.score.right = 7;

        let commands = build_scene(&app, 10_000);
        let lines = texts(&commands);
        assert!(lines.contains(&"COMPUTER WINS!"));
        assert!(lines.contains(&"Final Score: 3 - 7"));
    }
}
