//! Crate-level error types.

use std::fmt;

/// Errors produced by the protogfx crate.
///
/// Numerical edge cases (zero-length normalization, zero quaternion
/// inversion, parallel look vectors) are resolved silently by the math
/// types and never show up here.
#[derive(Debug)]
pub enum GfxError {
    /// A color string was not `#rgb`, `#rrggbb` or `#rrggbbaa` hex.
    ColorParse(String),
    /// An Euler axis order other than XYZ, YXZ, ZXY, ZYX, YZX or XZY.
    UnknownEulerOrder(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn a background timer thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Element values did not match the buffer's attribute layout.
    ElementShape(String),
}

impl fmt::Display for GfxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorParse(input) => {
                write!(f, "invalid color '{input}'")
            }
            Self::UnknownEulerOrder(input) => {
                write!(f, "unknown Euler order '{input}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ElementShape(msg) => {
                write!(f, "malformed element: {msg}")
            }
        }
    }
}

impl std::error::Error for GfxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GfxError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GfxError::ColorParse("#12".into());
        assert_eq!(err.to_string(), "invalid color '#12'");

        let err = GfxError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");

        let err = GfxError::ElementShape("expected 2 attributes, got 1".into());
        assert_eq!(
            err.to_string(),
            "malformed element: expected 2 attributes, got 1"
        );
    }

    #[test]
    fn test_io_source_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GfxError = io.into();
        assert!(matches!(err, GfxError::Io(_)));
        assert!(err.source().is_some());
        assert!(GfxError::ColorParse(String::new()).source().is_none());
    }
}
