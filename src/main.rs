//! Headless demo: orbiting bodies drawn through debug points and lines.
//!
//! Usage: `protogfx [options.toml] [frames]`

use std::f32::consts::TAU;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use protogfx::geometry::{GeometryResource, HostGeometry, VisDebug};
use protogfx::math::{Easing, Quat, Transform, Vec3};
use protogfx::options::Options;
use protogfx::render_loop::{FrameHooks, RenderLoop};
use protogfx::util::{set_timeout, Color};

const BODIES: usize = 24;
const DEFAULT_FRAMES: u64 = 240;

struct OrbitDemo {
    debug: VisDebug<HostGeometry>,
    pivot: Transform,
    pulse: Easing,
    banner: Arc<AtomicBool>,
}

impl OrbitDemo {
    fn new(options: &Options) -> Self {
        Self {
            debug: VisDebug::host(options),
            pivot: Transform::IDENTITY,
            pulse: Easing::SineInOut,
            banner: Arc::new(AtomicBool::new(false)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn body(&self, i: usize, elapsed: f32) -> Transform {
        let phase = i as f32 / BODIES as f32;
        let t = (elapsed * 0.25 + phase).fract();
        let radius = 2.0 + self.pulse.evaluate((t * 2.0 - 1.0).abs());
        let spin = Quat::from_axis_angle(Vec3::Y, phase * TAU);
        let offset = Vec3::new(radius, 0.0, 0.0);
        let local = Transform::new(offset, spin, Vec3::ONE);
        Transform::from_mul(self.pivot, Transform::from_rotation(spin)) * local
    }
}

impl FrameHooks for OrbitDemo {
    fn pre_render(&mut self, delta: f32, elapsed: f32) {
        let _ = self
            .pivot
            .rotation
            .pmul(Quat::from_axis_angle(Vec3::Y, delta * 0.5))
            .norm();

        let _ = self.debug.reset().axes(Vec3::ZERO, 1.0);
        let mut prev: Option<Vec3> = None;
        for i in 0..BODIES {
            let pos = self.body(i, elapsed).position;
            let _ = self.debug.point(pos);
            if let Some(p) = prev {
                let lines = &mut self.debug.lines;
                let _ = lines.add(p, pos, Color::BLUE, Color::YELLOW);
            }
            prev = Some(pos);
        }
        let _ = self.debug.sync();
    }

    fn post_render(&mut self, _delta: f32, elapsed: f32) {
        if self.banner.swap(false, Ordering::Relaxed) {
            let points = self.debug.points.resource();
            log::info!(
                "t={elapsed:.2}s: {} points (generation {}), {} line vertices",
                self.debug.points.len(),
                points.generation(),
                self.debug.lines.resource().draw_range().len()
            );
        }
    }
}

fn parse_args() -> (Options, u64) {
    let mut options = Options::default();
    let mut frames = DEFAULT_FRAMES;
    for arg in std::env::args().skip(1) {
        if let Ok(n) = arg.parse::<u64>() {
            frames = n;
            continue;
        }
        match Options::load(Path::new(&arg)) {
            Ok(opts) => {
                log::info!("Loaded options from {arg}");
                options = opts;
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }
    (options, frames)
}

fn main() {
    env_logger::init();

    let (options, frames) = parse_args();
    let mut demo = OrbitDemo::new(&options);

    let banner = Arc::clone(&demo.banner);
    if let Err(e) = set_timeout(Duration::from_millis(500), move || {
        banner.store(true, Ordering::Relaxed);
    }) {
        log::error!("{e}");
    }

    let mut render_loop = RenderLoop::new().with_target_fps(60);
    render_loop.run(&mut demo, frames, |demo, time| {
        let points = demo.debug.points.resource();
        let drawn = points.drawn("position").map_or(0, <[f32]>::len);
        log::trace!("frame at {:.3}s: {} floats drawn", time.elapsed, drawn);
    });

    demo.banner.store(true, Ordering::Relaxed);
    demo.post_render(0.0, render_loop.clock().elapsed());
    log::info!(
        "Done: {} frames, {:.1} fps",
        render_loop.clock().frames(),
        render_loop.clock().fps()
    );
}
