//! Shared utilities: colors, frame timing and delayed callbacks.

pub mod color;
pub mod frame_timing;
pub mod timeout;

pub use color::Color;
pub use frame_timing::{FrameClock, FrameTime};
pub use timeout::set_timeout;
