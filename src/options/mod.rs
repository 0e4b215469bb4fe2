//! Camera and input configuration with TOML preset support.
//!
//! All tweakable settings (movement speed, sensitivity, projection
//! parameters, key bindings) are consolidated here. Options serialize
//! to/from TOML so applications can ship view presets or persist a user's
//! tuning between runs.

mod camera;

use std::path::Path;

pub use camera::CameraOptions;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;
use crate::input::KeyBindings;

/// Top-level options container. All sections use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera control and projection parameters.
    pub camera: CameraOptions,
    /// Movement key bindings.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options =
            toml::from_str(&content).map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)?;
        log::debug!("saved options to {}", path.display());
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let parsed: Options = toml::from_str(
            r#"
            [camera]
            movement_speed = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(parsed.camera.movement_speed, 5.0);
        // Untouched fields keep their defaults
        assert_eq!(parsed.camera.fovy, 45.0);
        assert_eq!(parsed.keybindings, KeyBindings::default());
    }

    #[test]
    fn save_then_load_round_trips_through_disk() {
        let path = std::env::temp_dir()
            .join("flycam-options-tests")
            .join("roundtrip.toml");
        let opts = Options {
            camera: CameraOptions {
                movement_speed: 4.0,
                ..CameraOptions::default()
            },
            ..Options::default()
        };
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn keybindings_parse_from_toml_table() {
        use crate::camera::MoveDirection;

        let parsed: Options = toml::from_str(
            r#"
            [keybindings]
            ArrowUp = "forward"
            ArrowDown = "backward"
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed.keybindings.lookup("ArrowUp"),
            Some(MoveDirection::Forward)
        );
        assert_eq!(
            parsed.keybindings.lookup("ArrowDown"),
            Some(MoveDirection::Backward)
        );
    }
}
