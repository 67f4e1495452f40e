//! Menu / match state machine
//!
//! Discrete key events drive transitions between the menu and a match;
//! held keys drive the paddles. One call to [`App::frame`] per host frame.

use crate::platform::{InputEvent, Key, KeyState};
use crate::settings::{PlayMode, Settings};
use crate::sim::{FrameTime, GameEvent, MatchState, PaddleCommand, TickInput, tick};

/// Top-level screen
#[derive(Debug, Clone)]
pub enum AppScreen {
    /// Choosing mode, difficulty and match length
    Menu,
    /// A match in progress (including paused and finished)
    Playing(Box<MatchState>),
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    pub settings: Settings,
    pub screen: AppScreen,
    /// Cleared by Escape or window close
    pub running: bool,
    matches_started: u64,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: settings.clamped(),
            screen: AppScreen::Menu,
            running: true,
            matches_started: 0,
        }
    }

    pub fn match_state(&self) -> Option<&MatchState> {
        match &self.screen {
            AppScreen::Playing(state) => Some(&**state),
            AppScreen::Menu => None,
        }
    }

    /// Start a match with the current settings
    pub fn start_match(&mut self, now_ms: u64) {
        let settings = Settings {
            seed: self.settings.seed.wrapping_add(self.matches_started),
            ..self.settings.clone()
        };
        self.matches_started += 1;
        log::info!(
            "Match started: {} / {} / first to {}",
            settings.mode.as_str(),
            settings.difficulty.as_str(),
            settings.win_score
        );
        self.screen = AppScreen::Playing(Box::new(MatchState::new(&settings, now_ms)));
    }

    /// Process one frame: discrete events first, then the simulation tick.
    /// Returns the simulation events of this frame.
    pub fn frame(&mut self, keys: &KeyState, events: &[InputEvent], time: FrameTime) -> Vec<GameEvent> {
        let mut pause = false;

        for &event in events {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => {
                    log::info!("Quit requested");
                    self.running = false;
                    return Vec::new();
                }
                InputEvent::KeyDown(key) => {
                    if matches!(self.screen, AppScreen::Menu) {
                        self.menu_key(key, time.now_ms);
                    } else if self.match_key(key, time.now_ms) {
                        pause = !pause;
                    }
                }
                InputEvent::KeyUp(_) => {}
            }
        }

        let AppScreen::Playing(state) = &mut self.screen else {
            return Vec::new();
        };

        let input = TickInput {
            left: command(keys, Key::W, Key::S),
            right: match self.settings.mode {
                PlayMode::TwoPlayer => command(keys, Key::Up, Key::Down),
                _ => PaddleCommand::Hold,
            },
            pause,
        };
        tick(state, &input, time);
        state.events.clone()
    }

    fn menu_key(&mut self, key: Key, now_ms: u64) {
        match key {
            Key::Num1 => self.settings.mode = PlayMode::OnePlayer,
            Key::Num2 => self.settings.mode = PlayMode::TwoPlayer,
            Key::Up => self.settings.difficulty = self.settings.difficulty.harder(),
            Key::Down => self.settings.difficulty = self.settings.difficulty.easier(),
            Key::Left => self.settings.decrease_win_score(),
            Key::Right => self.settings.increase_win_score(),
            Key::Space | Key::Enter => self.start_match(now_ms),
            _ => {}
        }
    }

    /// In-match keys; returns true for a pause toggle
    fn match_key(&mut self, key: Key, now_ms: u64) -> bool {
        match key {
            Key::P => return true,
            Key::R => {
                log::info!("Back to menu");
                self.screen = AppScreen::Menu;
            }
            Key::Space => {
                if let AppScreen::Playing(state) = &mut self.screen {
                    if state.is_over() {
                        state.play_again(now_ms);
                    }
                }
            }
            _ => {}
        }
        false
    }
}

/// Held-key pair to a paddle command; both or neither held means hold
fn command(keys: &KeyState, up: Key, down: Key) -> PaddleCommand {
    match (keys.is_pressed(up), keys.is_pressed(down)) {
        (true, false) => PaddleCommand::Up,
        (false, true) => PaddleCommand::Down,
        _ => PaddleCommand::Hold,
    }
}
