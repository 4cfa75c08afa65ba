use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::{DEFAULT_POINT_COLOR, DEFAULT_POINT_SIZE};
use crate::util::color::Color;

/// Debug-draw defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Debug", inline)]
#[serde(default)]
pub struct DebugOptions {
    /// Depth-test debug geometry against the scene.
    #[schemars(title = "Depth Test")]
    pub use_depth: bool,
    /// Size of debug points.
    #[schemars(
        title = "Point Size",
        range(min = 0.01, max = 5.0),
        extend("step" = 0.01)
    )]
    pub point_size: f32,
    /// Color of debug points and lines (`#rrggbb`).
    #[schemars(title = "Color", with = "String")]
    pub color: Color,
}

impl Default for DebugOptions {
    fn default() -> Self {
        Self {
            use_depth: true,
            point_size: DEFAULT_POINT_SIZE,
            color: DEFAULT_POINT_COLOR,
        }
    }
}
