//! Match settings chosen from the menu
//!
//! Held in memory for the session. Serializable so a host can hand a
//! configuration in as JSON; values are clamped before a match starts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_WIN_SCORE, MIN_WIN_SCORE, WIN_SCORE};
use crate::sim::state::Side;

/// AI difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Paddle step per frame
    pub fn paddle_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 6.0,
            Difficulty::Normal => 8.0,
            Difficulty::Hard => 12.0,
        }
    }

    /// Milliseconds between target re-evaluations
    pub fn reaction_ms(&self) -> f32 {
        match self {
            Difficulty::Easy => 200.0,
            Difficulty::Normal => 110.0,
            Difficulty::Hard => 40.0,
        }
    }

    /// Weight of the predicted ball position in the target
    pub fn prediction_strength(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.45,
            Difficulty::Normal => 0.75,
            Difficulty::Hard => 0.98,
        }
    }

    /// One step harder (saturating)
    pub fn harder(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            _ => Difficulty::Hard,
        }
    }

    /// One step easier (saturating)
    pub fn easier(self) -> Self {
        match self {
            Difficulty::Hard => Difficulty::Normal,
            _ => Difficulty::Easy,
        }
    }
}

/// Who plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlayMode {
    /// Human on the left, computer on the right
    #[default]
    OnePlayer,
    /// Two humans
    TwoPlayer,
    /// Computer on both sides (demo)
    Attract,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::OnePlayer => "1P (AI)",
            PlayMode::TwoPlayer => "2P",
            PlayMode::Attract => "Demo",
        }
    }

    /// Whether the computer drives the paddle on `side`
    pub fn ai_drives(&self, side: Side) -> bool {
        match self {
            PlayMode::OnePlayer => side == Side::Right,
            PlayMode::TwoPlayer => false,
            PlayMode::Attract => true,
        }
    }

    /// Display name of the winner on `side`
    pub fn winner_label(&self, side: Side) -> &'static str {
        match (self, side) {
            (PlayMode::OnePlayer, Side::Right) => "COMPUTER",
            (_, Side::Left) => "PLAYER 1",
            (_, Side::Right) => "PLAYER 2",
        }
    }
}

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mode: PlayMode,
    pub difficulty: Difficulty,
    /// First to this many points wins
    pub win_score: u32,
    /// RNG seed for serve angles
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: PlayMode::OnePlayer,
            difficulty: Difficulty::Normal,
            win_score: WIN_SCORE,
            seed: 0x5EED,
        }
    }
}

/// Settings could not be parsed
#[derive(Debug)]
pub struct SettingsError(serde_json::Error);

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid settings: {}", self.0)
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl Settings {
    /// Copy with out-of-range values pulled back into range
    pub fn clamped(&self) -> Self {
        Self {
            win_score: self.win_score.clamp(MIN_WIN_SCORE, MAX_WIN_SCORE),
            ..self.clone()
        }
    }

    pub fn increase_win_score(&mut self) {
        self.win_score = (self.win_score + 1).min(MAX_WIN_SCORE);
    }

    pub fn decrease_win_score(&mut self) {
        self.win_score = self.win_score.saturating_sub(1).max(MIN_WIN_SCORE);
    }

    /// Parse from JSON; missing fields take their defaults and the result is clamped
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json).map_err(SettingsError)?;
        Ok(settings.clamped())
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(SettingsError)
    }
}
