//! Frame pacing
//!
//! [`FrameClock`] caps the loop at a target rate and reports the monotonic
//! time and elapsed milliseconds for each frame. The time source is pluggable
//! so headless runs can simulate time instead of sleeping.

use std::time::{Duration, Instant};

use crate::consts::{FPS, MAX_FRAME_MS};
use crate::sim::FrameTime;

/// Monotonic millisecond source
pub trait TimeSource {
    fn now_ms(&self) -> u64;
    /// Block (or pretend to) for `ms`
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall-clock time
#[derive(Debug, Clone)]
pub struct SystemTime {
    start: Instant,
}

impl Default for SystemTime {
    fn default() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimeSource for SystemTime {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(Duration::from_millis(ms));
    }
}

/// Virtual time that only advances when slept
#[derive(Debug, Clone, Default)]
pub struct SimulatedTime {
    now: u64,
}

impl SimulatedTime {
    pub fn new(start_ms: u64) -> Self {
        Self { now: start_ms }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl TimeSource for SimulatedTime {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.advance(ms);
    }
}

/// Rate-capped frame clock
///
/// Frame deadlines are `origin + n * 1000 / fps` in whole milliseconds, so
/// the rate averages exactly `fps` even though single frames are 16 or 17 ms.
#[derive(Debug, Clone)]
pub struct FrameClock<T: TimeSource> {
    source: T,
    fps: u64,
    origin_ms: u64,
    frames: u64,
    last_ms: u64,
}

impl<T: TimeSource> FrameClock<T> {
    pub fn new(source: T) -> Self {
        Self::with_fps(source, FPS)
    }

    pub fn with_fps(source: T, fps: u32) -> Self {
        let now = source.now_ms();
        Self {
            source,
            fps: fps.max(1) as u64,
            origin_ms: now,
            frames: 0,
            last_ms: now,
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.source.now_ms()
    }

    /// Wait out the rest of the frame, then report the frame's time
    pub fn tick(&mut self) -> FrameTime {
        let deadline = self.origin_ms + (self.frames + 1) * 1000 / self.fps;
        let before = self.source.now_ms();
        if before < deadline {
            self.source.sleep_ms(deadline - before);
            self.frames += 1;
        } else {
            // Overran: restart the schedule from here instead of bursting
            self.origin_ms = before;
            self.frames = 0;
        }

        let now = self.source.now_ms();
        let elapsed = now.saturating_sub(self.last_ms).min(MAX_FRAME_MS as u64) as u32;
        self.last_ms = now;
        FrameTime::new(now, elapsed)
    }

    pub fn source_mut(&mut self) -> &mut T {
        &mut self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caps_frame_rate() {
        let mut clock = FrameClock::new(SimulatedTime::new(0));
        let t1 = clock.tick();
        assert_eq!(t1.elapsed_ms, 16);
        assert_eq!(t1.now_ms, 16);

        let t2 = clock.tick();
        assert_eq!(t2.now_ms, 33);
        assert_eq!(t2.elapsed_ms, 17);
    }

    #[test]
    fn test_sixty_frames_per_second() {
        let mut clock = FrameClock::new(SimulatedTime::new(0));
        let mut last = FrameTime::new(0, 0);
        for _ in 0..FPS {
            last = clock.tick();
        }
        assert_eq!(last.now_ms, 1_000);

        for _ in 0..FPS * 9 {
            last = clock.tick();
        }
        assert_eq!(last.now_ms, 10_000);
    }

    #[test]
    fn test_slow_frame_not_padded() {
        let mut clock = FrameClock::new(SimulatedTime::new(0));
        clock.source_mut().advance(40);
        let t = clock.tick();
        assert_eq!(t.elapsed_ms, 40);
        assert_eq!(t.now_ms, 40);
    }

    #[test]
    fn test_stall_capped() {
        let mut clock = FrameClock::new(SimulatedTime::new(0));
        clock.source_mut().advance(5_000);
        let t = clock.tick();
        assert_eq!(t.elapsed_ms, MAX_FRAME_MS);
        assert_eq!(t.now_ms, 5_000);
    }
}
