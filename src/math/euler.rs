use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GfxError;

/// Axis order for Euler-angle rotations.
///
/// `Xyz` composes as `qx * qy * qz`, i.e. the Z rotation is applied first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum EulerOrder {
    /// X, then Y, then Z.
    Xyz,
    /// Y, then X, then Z (yaw-pitch-roll for a Y-up camera).
    #[default]
    Yxz,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
    /// Y, then Z, then X.
    Yzx,
    /// X, then Z, then Y.
    Xzy,
}

impl EulerOrder {
    /// Every supported order.
    pub const ALL: [Self; 6] =
        [Self::Xyz, Self::Yxz, Self::Zxy, Self::Zyx, Self::Yzx, Self::Xzy];

    /// Upper-case name, e.g. `"YXZ"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "XYZ",
            Self::Yxz => "YXZ",
            Self::Zxy => "ZXY",
            Self::Zyx => "ZYX",
            Self::Yzx => "YZX",
            Self::Xzy => "XZY",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EulerOrder {
    type Err = GfxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GfxError::UnknownEulerOrder(s.to_owned()))
    }
}
