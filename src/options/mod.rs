//! Camera tuning and key bindings with TOML preset support.
//!
//! Options serialize to/from TOML so a host can keep named presets in a
//! directory and hand the loaded [`CameraOptions`] to a new controller.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Camera movement, smoothing, and projection parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CameraError> {
        let content = std::fs::read_to_string(path).map_err(CameraError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CameraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CameraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CameraError::Io)?;
        }
        std::fs::write(path, content).map_err(CameraError::Io)
    }

    /// Load the named preset from `presets_dir`, logging the outcome.
    #[must_use]
    pub fn load_preset(presets_dir: &Path, name: &str) -> Option<Self> {
        let path = presets_dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(opts) => {
                log::info!("Loaded camera preset '{name}'");
                Some(opts)
            }
            Err(e) => {
                log::error!("Failed to load camera preset '{name}': {e}");
                None
            }
        }
    }

    /// Save these options as the named preset in `presets_dir`.
    /// Returns true on success.
    pub fn save_preset(&self, presets_dir: &Path, name: &str) -> bool {
        let path = presets_dir.join(format!("{name}.toml"));
        match self.save(&path) {
            Ok(()) => {
                log::info!("Saved camera preset '{name}'");
                true
            }
            Err(e) => {
                log::error!("Failed to save camera preset '{name}': {e}");
                false
            }
        }
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
