//! Centralized navigation options with TOML preset support.
//!
//! Flight timing, initial camera placement, marker feedback, model framing
//! and key bindings are consolidated here. Options serialize to/from TOML so
//! a viewer can ship presets next to its point registry.

mod camera;
mod framing;
mod markers;
mod transition;

use std::path::Path;

pub use camera::CameraOptions;
pub use framing::FramingOptions;
pub use markers::MarkerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::VantageError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[transition]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera flight timing.
    pub transition: TransitionOptions,
    /// Initial camera placement.
    pub camera: CameraOptions,
    /// Marker size and hover feedback.
    pub markers: MarkerOptions,
    /// Model normalization.
    #[schemars(skip)]
    pub framing: FramingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`VantageError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, VantageError> {
        toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`VantageError::Io`] if the file cannot be read,
    /// [`VantageError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path).map_err(VantageError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`VantageError::OptionsParse`] if serialization fails,
    /// [`VantageError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), VantageError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VantageError::Io)?;
        }
        std::fs::write(path, content).map_err(VantageError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
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
    use std::time::Duration;

    use super::*;
    use crate::navigator::NavCommand;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let opts = Options::from_toml_str(
            r#"
[transition]
duration_ms = 800
easing = "quadratic_out"
"#,
        )
        .unwrap();
        assert_eq!(opts.transition.duration(), Duration::from_millis(800));
        assert_eq!(opts.transition.easing, EasingFunction::QuadraticOut);
        // Everything else should be default
        assert_eq!(opts.markers.hover_scale, 1.3);
        assert_eq!(opts.camera.position, [0.0, 0.0, 5.0]);
    }

    #[test]
    fn default_duration_is_fixed_flight_time() {
        assert_eq!(
            Options::default().transition.duration(),
            crate::transition::FIXED_DURATION
        );
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(NavCommand::CancelTransition)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let result = Options::from_toml_str("[transition\nduration_ms = ");
        assert!(matches!(result, Err(VantageError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "vantage-options-{}",
            std::process::id()
        ));
        let path = dir.join("fast.toml");
        let mut opts = Options::default();
        opts.transition.duration_ms = 400;
        opts.save(&path).unwrap();

        assert_eq!(Options::load(&path).unwrap(), opts);
        assert_eq!(Options::list_presets(&dir), vec!["fast".to_owned()]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("transition"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("markers"));

        // Skipped sections should be absent
        assert!(!props.contains_key("framing"));
        assert!(!props.contains_key("keybindings"));

        let markers = &props["markers"]["properties"];
        assert!(markers.get("hover_scale").is_some());
        assert!(markers.get("scale_lerp").is_none());
    }
}
