//! Frame clock for push-based render loops.

use web_time::{Duration, Instant};

/// Timing of one frame, handed to render hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame.
    pub delta: f32,
    /// Seconds since the clock started.
    pub elapsed: f32,
}

/// Frame clock with delta/elapsed time and a smoothed FPS readout.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last_frame: Instant,
    /// Longest delta reported; long stalls are clamped to this.
    max_delta: Duration,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
    frames: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Start the clock now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            max_delta: Duration::from_millis(250),
            smoothed_fps: 60.0,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Clamp reported deltas (default 250 ms).
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Advance one frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.frames += 1;
        self.advance(delta.min(self.max_delta), now.duration_since(self.start))
    }

    fn advance(&mut self, delta: Duration, elapsed: Duration) -> FrameTime {
        let frame_time = delta.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            let keep = self.smoothed_fps * (1.0 - self.smoothing);
            self.smoothed_fps = keep + instant_fps * self.smoothing;
        }
        FrameTime {
            delta: frame_time,
            elapsed: elapsed.as_secs_f32(),
        }
    }

    /// Smoothed frames per second.
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Seconds since the clock started.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(a.delta >= 0.0);
        assert!(b.elapsed >= a.elapsed);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_fps_converges() {
        let mut clock = FrameClock::new();
        for _ in 0..400 {
            let _ = clock.advance(Duration::from_millis(10), Duration::ZERO);
        }
        assert!((clock.fps() - 100.0).abs() < 1.0, "fps {}", clock.fps());
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut clock = FrameClock::new().with_max_delta(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));
        assert_eq!(clock.tick().delta, 0.0);
        assert_eq!(clock.fps(), 60.0);
    }
}
