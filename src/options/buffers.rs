use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geometry::DEFAULT_CAPACITY;

/// Initial sizing of dynamic geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Buffers", inline)]
#[serde(default)]
pub struct BufferOptions {
    /// Points allocated up front.
    #[schemars(title = "Point Capacity", range(min = 1))]
    pub point_capacity: usize,
    /// Line segments allocated up front.
    #[schemars(title = "Line Capacity", range(min = 1))]
    pub line_capacity: usize,
    /// Elements added whenever a buffer fills up.
    #[schemars(title = "Growth Step", range(min = 1))]
    pub grow_step: usize,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            point_capacity: DEFAULT_CAPACITY,
            line_capacity: DEFAULT_CAPACITY,
            grow_step: DEFAULT_CAPACITY,
        }
    }
}
