//! Buffer sizing and debug-draw defaults with TOML preset support.
//!
//! Options serialize to/from TOML. Every table is `#[serde(default)]`, so a
//! preset only needs the keys it overrides.

mod buffers;
mod debug;

use std::path::Path;

pub use buffers::BufferOptions;
pub use debug::DebugOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GfxError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial capacities and growth step of dynamic geometry.
    pub buffers: BufferOptions,
    /// Debug-draw defaults.
    pub debug: DebugOptions,
}

impl Options {
    /// JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GfxError> {
        let content = std::fs::read_to_string(path).map_err(GfxError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GfxError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), GfxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GfxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GfxError::Io)?;
        }
        std::fs::write(path, content).map_err(GfxError::Io)
    }

    /// Load `<dir>/<name>.toml`, logging the outcome.
    pub fn load_preset(name: &str, dir: &Path) -> Result<Self, GfxError> {
        let path = dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(opts) => {
                log::info!("Loaded options preset '{name}'");
                Ok(opts)
            }
            Err(e) => {
                log::error!("Failed to load options preset '{name}': {e}");
                Err(e)
            }
        }
    }

    /// Save as `<dir>/<name>.toml`, logging the outcome.
    pub fn save_preset(&self, name: &str, dir: &Path) -> Result<(), GfxError> {
        let path = dir.join(format!("{name}.toml"));
        let result = self.save(&path);
        match &result {
            Ok(()) => log::info!("Saved options preset '{name}'"),
            Err(e) => {
                log::error!("Failed to save options preset '{name}': {e}");
            }
        }
        result
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    let stem = path.file_stem().and_then(|s| s.to_str());
                    if let Some(stem) = stem {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
