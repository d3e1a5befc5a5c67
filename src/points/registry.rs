//! Authored viewpoints and lookup by id.

use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::VantageError;

/// Marker tint used when a point does not specify one.
pub const DEFAULT_MARKER_COLOR: &str = "#f37321";

/// Viewing distance used by points that do not specify one.
pub const DEFAULT_VIEW_DISTANCE: f32 = 2.5;

fn default_view_distance() -> f32 {
    DEFAULT_VIEW_DISTANCE
}

/// Where the camera goes when a point of interest is selected.
///
/// Immutable once built; the registry hands out shared references only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewpointDescriptor {
    id: String,
    #[serde(default)]
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    target_anchor: Vec3,
    #[serde(default)]
    look_at: Vec3,
    #[serde(default = "default_view_distance")]
    view_distance: f32,
}

impl ViewpointDescriptor {
    /// Viewpoint looking at `look_at` from the side of `target_anchor`.
    pub fn new(
        id: impl Into<String>,
        target_anchor: Vec3,
        look_at: Vec3,
        view_distance: f32,
    ) -> Self {
        Self {
            id: id.into(),
            label: String::new(),
            color: None,
            target_anchor,
            look_at,
            view_distance,
        }
    }

    /// Attach a display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Attach a `#rrggbb` marker color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Unique key.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label (falls back to the id).
    #[must_use]
    pub fn label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }

    /// Model-space point the camera direction is derived from.
    #[must_use]
    pub fn target_anchor(&self) -> Vec3 {
        self.target_anchor
    }

    /// Point the camera faces at the end of the flight.
    #[must_use]
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Distance from `look_at` the camera ends at.
    #[must_use]
    pub fn view_distance(&self) -> f32 {
        self.view_distance
    }

    /// Marker color as the authored hex string.
    #[must_use]
    pub fn color(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_MARKER_COLOR)
    }

    /// Marker color as linear `[r, g, b]` in `[0, 1]`.
    ///
    /// Colors are validated when the registry is built, so a registered
    /// point always parses; an unregistered malformed one falls back to the
    /// default tint.
    #[must_use]
    pub fn color_rgb(&self) -> [f32; 3] {
        parse_hex_color(self.color())
            .or_else(|| parse_hex_color(DEFAULT_MARKER_COLOR))
            .unwrap_or([1.0; 3])
    }

    fn validate(&self) -> Result<(), VantageError> {
        if !(self.view_distance.is_finite() && self.view_distance > 0.0) {
            return Err(VantageError::InvalidParameter {
                name: "view_distance",
                value: self.view_distance,
            });
        }
        VantageError::check_finite("target_anchor", self.target_anchor)?;
        VantageError::check_finite("look_at", self.look_at)?;
        if parse_hex_color(self.color()).is_none() {
            return Err(VantageError::InvalidColor(self.color().to_owned()));
        }
        Ok(())
    }
}

/// Parse `#rrggbb` into `[r, g, b]` in `[0, 1]`.
#[must_use]
pub fn parse_hex_color(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| f32::from(v) / 255.0)
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

#[derive(Serialize, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    points: Vec<ViewpointDescriptor>,
}

/// Ordered, read-only set of viewpoints.
#[derive(Debug, Clone)]
pub struct PointRegistry {
    points: Vec<ViewpointDescriptor>,
    index: FxHashMap<String, usize>,
}

impl PointRegistry {
    /// Build a registry, keeping authoring order.
    ///
    /// # Errors
    ///
    /// - [`VantageError::DuplicatePoint`] when two points share an id.
    /// - [`VantageError::InvalidParameter`] for a non-positive distance or a
    ///   non-finite anchor or look-at point.
    /// - [`VantageError::InvalidColor`] for a malformed marker color.
    pub fn new(points: Vec<ViewpointDescriptor>) -> Result<Self, VantageError> {
        let mut index = FxHashMap::default();
        for (i, point) in points.iter().enumerate() {
            point.validate()?;
            if index.insert(point.id.clone(), i).is_some() {
                return Err(VantageError::DuplicatePoint(point.id.clone()));
            }
        }
        Ok(Self { points, index })
    }

    /// The six points authored around the demo model: front, back, top,
    /// left, right and center, all looking at the origin.
    #[must_use]
    pub fn builtin() -> Self {
        let at = |id: &str, label: &str, color: &str, anchor: [f32; 3]| {
            ViewpointDescriptor::new(
                id,
                Vec3::from_array(anchor),
                Vec3::ZERO,
                DEFAULT_VIEW_DISTANCE,
            )
            .with_label(label)
            .with_color(color)
        };
        let points = vec![
            at("front", "Front", "#ff6b6b", [0.0, 1.0, 2.0]),
            at("back", "Back", "#4ecdc4", [0.0, 1.0, -2.0]),
            at("top", "Top", "#45b7d1", [0.0, 3.0, 0.0]),
            at("left", "Left", "#96ceb4", [-2.0, 1.0, 0.0]),
            at("right", "Right", "#feca57", [2.0, 1.0, 0.0]),
            at("center", "Center", "#ff9ff3", [0.0, 0.0, 0.0]),
        ];
        let index = points
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { points, index }
    }

    /// Parse a registry from TOML (`[[points]]` tables).
    ///
    /// # Errors
    ///
    /// [`VantageError::OptionsParse`] on malformed TOML, otherwise the same
    /// validation errors as [`new`](Self::new).
    pub fn from_toml_str(content: &str) -> Result<Self, VantageError> {
        let file: RegistryFile = toml::from_str(content)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))?;
        Self::new(file.points)
    }

    /// Load a registry from a TOML file.
    ///
    /// # Errors
    ///
    /// [`VantageError::Io`] when the file cannot be read, otherwise the
    /// same errors as [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self, VantageError> {
        let content = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&content)?;
        log::info!(
            "loaded {} viewpoints from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Serialize to the TOML format read by [`from_toml_str`](Self::from_toml_str).
    ///
    /// # Errors
    ///
    /// [`VantageError::OptionsParse`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, VantageError> {
        let file = RegistryFile {
            points: self.points.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| VantageError::OptionsParse(e.to_string()))
    }

    /// All viewpoints in authoring order.
    #[must_use]
    pub fn all(&self) -> &[ViewpointDescriptor] {
        &self.points
    }

    /// Viewpoint by id.
    ///
    /// # Errors
    ///
    /// [`VantageError::NotFound`] if no point has that id.
    pub fn get(&self, id: &str) -> Result<&ViewpointDescriptor, VantageError> {
        self.index
            .get(id)
            .map(|&i| &self.points[i])
            .ok_or_else(|| VantageError::NotFound(id.to_owned()))
    }

    /// Number of viewpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the registry holds no viewpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for PointRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_authoring_order() {
        let registry = PointRegistry::builtin();
        let ids: Vec<&str> = registry.all().iter().map(ViewpointDescriptor::id).collect();
        assert_eq!(ids, ["front", "back", "top", "left", "right", "center"]);
        for point in registry.all() {
            assert!(point.validate().is_ok(), "{} invalid", point.id());
        }
    }

    #[test]
    fn lookup_by_id() {
        let registry = PointRegistry::builtin();
        let top = registry.get("top").unwrap();
        assert_eq!(top.target_anchor(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(top.look_at(), Vec3::ZERO);
        assert_eq!(top.view_distance(), 2.5);
        assert_eq!(top.label(), "Top");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let registry = PointRegistry::builtin();
        assert!(matches!(
            registry.get("underside"),
            Err(VantageError::NotFound(id)) if id == "underside"
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let points = vec![
            ViewpointDescriptor::new("a", Vec3::X, Vec3::ZERO, 1.0),
            ViewpointDescriptor::new("a", Vec3::Y, Vec3::ZERO, 1.0),
        ];
        assert!(matches!(
            PointRegistry::new(points),
            Err(VantageError::DuplicatePoint(id)) if id == "a"
        ));
    }

    #[test]
    fn non_positive_distance_is_rejected() {
        let points = vec![ViewpointDescriptor::new("a", Vec3::X, Vec3::ZERO, 0.0)];
        assert!(matches!(
            PointRegistry::new(points),
            Err(VantageError::InvalidParameter { name: "view_distance", .. })
        ));
    }

    #[test]
    fn toml_points_fill_defaults() {
        let registry = PointRegistry::from_toml_str(
            r##"
[[points]]
id = "nose"
target_anchor = [0.0, 0.5, 3.0]

[[points]]
id = "tail"
label = "Tail fin"
color = "#00ff00"
target_anchor = [0.0, 1.0, -3.0]
look_at = [0.0, 1.0, 0.0]
view_distance = 4.0
"##,
        )
        .unwrap();

        let nose = registry.get("nose").unwrap();
        assert_eq!(nose.look_at(), Vec3::ZERO);
        assert_eq!(nose.view_distance(), DEFAULT_VIEW_DISTANCE);
        assert_eq!(nose.label(), "nose");
        assert_eq!(nose.color(), DEFAULT_MARKER_COLOR);

        let tail = registry.get("tail").unwrap();
        assert_eq!(tail.label(), "Tail fin");
        assert_eq!(tail.color_rgb(), [0.0, 1.0, 0.0]);
        assert_eq!(tail.view_distance(), 4.0);
    }

    #[test]
    fn toml_round_trip_preserves_order() {
        let registry = PointRegistry::builtin();
        let text = registry.to_toml_string().unwrap();
        let parsed = PointRegistry::from_toml_str(&text).unwrap();
        assert_eq!(parsed.all(), registry.all());
    }

    #[test]
    fn non_finite_points_are_rejected() {
        let result = PointRegistry::from_toml_str(
            r#"
[[points]]
id = "x"
target_anchor = [1.0, 0.0, 0.0]
look_at = [nan, 0.0, 0.0]
"#,
        );
        assert!(matches!(
            result,
            Err(VantageError::InvalidParameter { name: "look_at", .. })
        ));

        let points = vec![ViewpointDescriptor::new(
            "y",
            Vec3::new(0.0, 0.0, f32::INFINITY),
            Vec3::ZERO,
            1.0,
        )];
        assert!(matches!(
            PointRegistry::new(points),
            Err(VantageError::InvalidParameter { name: "target_anchor", .. })
        ));
    }

    #[test]
    fn malformed_color_is_rejected() {
        let result = PointRegistry::from_toml_str(
            r#"
[[points]]
id = "x"
color = "orange"
target_anchor = [1.0, 0.0, 0.0]
"#,
        );
        assert!(matches!(result, Err(VantageError::InvalidColor(_))));
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#ffffff"), Some([1.0, 1.0, 1.0]));
        assert_eq!(parse_hex_color("#000000"), Some([0.0, 0.0, 0.0]));
        assert_eq!(parse_hex_color("ffffff"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }
}
