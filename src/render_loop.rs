//! Push-based frame driver.
//!
//! Each frame ticks the clock, then calls `pre_render`, the render
//! callback and `post_render`, in that order, all on the calling thread.

use web_time::{Duration, Instant};

use crate::util::frame_timing::{FrameClock, FrameTime};

/// Per-frame callbacks around rendering.
///
/// Both methods receive the frame delta and total elapsed time in seconds.
/// The usual split is: update poses and rebuild dynamic geometry in
/// `pre_render`, read back or log in `post_render`.
pub trait FrameHooks {
    /// Called before the frame is rendered.
    fn pre_render(&mut self, _delta: f32, _elapsed: f32) {}

    /// Called after the frame is rendered.
    fn post_render(&mut self, _delta: f32, _elapsed: f32) {}
}

/// Drives [`FrameHooks`] with a [`FrameClock`].
#[derive(Debug, Default)]
pub struct RenderLoop {
    clock: FrameClock,
    /// Minimum frame duration (zero = unlimited).
    min_frame: Duration,
}

impl RenderLoop {
    /// Unlimited frame rate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the frame rate of [`Self::run`] (0 = unlimited).
    #[must_use]
    pub fn with_target_fps(mut self, target_fps: u32) -> Self {
        self.min_frame = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        self
    }

    /// Run one frame: pre → render → post.
    pub fn frame<A, F>(&mut self, app: &mut A, render: F) -> FrameTime
    where
        A: FrameHooks + ?Sized,
        F: FnOnce(&mut A, FrameTime),
    {
        let time = self.clock.tick();
        app.pre_render(time.delta, time.elapsed);
        render(app, time);
        app.post_render(time.delta, time.elapsed);
        time
    }

    /// Run `frames` frames, sleeping as needed to honor the target FPS.
    pub fn run<A, F>(&mut self, app: &mut A, frames: u64, mut render: F)
    where
        A: FrameHooks + ?Sized,
        F: FnMut(&mut A, FrameTime),
    {
        for _ in 0..frames {
            let started = Instant::now();
            let _ = self.frame(app, &mut render);
            let spent = started.elapsed();
            if spent < self.min_frame {
                std::thread::sleep(self.min_frame - spent);
            }
        }
        log::debug!(
            "render loop finished {frames} frames at {:.1} fps",
            self.clock.fps()
        );
    }

    /// The frame clock.
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
