//! Sound effect triggers
//!
//! Fire-and-forget: the host supplies a backend if it has one. A missing or
//! failing backend mutes the game, it never interrupts a match.

use std::error::Error;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top/bottom wall
    WallHit,
    /// Ball launched from center
    Serve,
    /// A point was scored
    Score,
    /// Match decided
    MatchWon,
}

impl SoundEffect {
    /// Sound to play for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::PaddleHit(_) => SoundEffect::PaddleHit,
            GameEvent::WallHit => SoundEffect::WallHit,
            GameEvent::Served { .. } => SoundEffect::Serve,
            GameEvent::PointScored(_) => SoundEffect::Score,
            GameEvent::MatchWon(_) => SoundEffect::MatchWon,
        }
    }
}

/// Host audio output
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), Box<dyn Error>>;
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect; errors are logged and dropped
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        if let Err(e) = backend.play(effect, vol) {
            log::debug!("Failed to play {:?}: {}", effect, e);
        }
    }

    /// Play the sounds for a tick's events
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            self.play(SoundEffect::for_event(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<(SoundEffect, f32)>>>);

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) -> Result<(), Box<dyn Error>> {
            self.0.borrow_mut().push((effect, volume));
            Ok(())
        }
    }

    struct Broken;

    impl AudioBackend for Broken {
        fn play(&mut self, _: SoundEffect, _: f32) -> Result<(), Box<dyn Error>> {
            Err("device unplugged".into())
        }
    }

    #[test]
    fn test_events_map_to_sounds() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Some(Box::new(Recorder(played.clone()))));

        audio.play_events(&[GameEvent::PaddleHit(Side::Left), GameEvent::PointScored(Side::Right)]);

        let played = played.borrow();
        assert_eq!(played.len(), 2);
        assert_eq!(played[0].0, SoundEffect::PaddleHit);
        assert_eq!(played[1].0, SoundEffect::Score);
        assert!((played[0].1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_volume_scales_and_clamps() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Some(Box::new(Recorder(played.clone()))));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(3.0);
        audio.play(SoundEffect::Serve);
        audio.set_sfx_volume(0.0);
        audio.play(SoundEffect::Serve);

        let played = played.borrow();
        assert_eq!(played.len(), 1);
        assert!((played[0].1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Some(Box::new(Recorder(played.clone()))));
        audio.set_muted(true);
        audio.play(SoundEffect::WallHit);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn test_missing_or_failing_backend_is_silent() {
        let mut audio = AudioManager::default();
        assert!(!audio.is_available());
        audio.play(SoundEffect::PaddleHit);

        let mut audio = AudioManager::new(Some(Box::new(Broken)));
        audio.play(SoundEffect::MatchWon);
    }
}
