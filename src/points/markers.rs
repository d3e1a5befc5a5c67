//! Hover feedback for point markers.
//!
//! Each registered point has a marker whose scale eases toward an enlarged
//! size while hovered and back to 1.0 otherwise. The renderer reads
//! [`MarkerStates::scale`] and [`MarkerStates::emissive_intensity`] each
//! frame; this module only tracks the numbers.

use rustc_hash::FxHashMap;

use super::registry::PointRegistry;
use crate::options::MarkerOptions;

/// Pointer cursor the host should show over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    /// Regular arrow.
    #[default]
    Default,
    /// Hand cursor: a marker is under the pointer.
    Pointer,
}

/// Hover state and animated scale for every marker.
#[derive(Debug, Clone)]
pub struct MarkerStates {
    scales: FxHashMap<String, f32>,
    hovered: Option<String>,
    options: MarkerOptions,
}

impl MarkerStates {
    /// One resting marker per registered point.
    #[must_use]
    pub fn new(registry: &PointRegistry, options: MarkerOptions) -> Self {
        let scales = registry
            .all()
            .iter()
            .map(|point| (point.id().to_owned(), 1.0))
            .collect();
        Self {
            scales,
            hovered: None,
            options,
        }
    }

    /// Pointer entered the marker for `id`. Unknown ids are ignored.
    pub fn hover(&mut self, id: &str) {
        if self.scales.contains_key(id) {
            self.hovered = Some(id.to_owned());
        }
    }

    /// Pointer left the marker for `id`.
    pub fn unhover(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    /// Id of the hovered marker.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Cursor to display.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        if self.hovered.is_some() {
            CursorIcon::Pointer
        } else {
            CursorIcon::Default
        }
    }

    /// Step every marker's scale one frame toward its goal.
    pub fn update(&mut self) {
        let rate = self.options.scale_lerp.clamp(0.0, 1.0);
        for (id, scale) in &mut self.scales {
            let goal = if self.hovered.as_deref() == Some(id.as_str()) {
                self.options.hover_scale
            } else {
                1.0
            };
            *scale += (goal - *scale) * rate;
        }
    }

    /// Current scale of the marker for `id` (1.0 for unknown ids).
    #[must_use]
    pub fn scale(&self, id: &str) -> f32 {
        self.scales.get(id).copied().unwrap_or(1.0)
    }

    /// Emissive intensity of the marker for `id`.
    #[must_use]
    pub fn emissive_intensity(&self, id: &str) -> f32 {
        if self.hovered.as_deref() == Some(id) {
            self.options.hover_emissive
        } else {
            self.options.idle_emissive
        }
    }

    /// World-space radius of the marker sphere for `id`.
    #[must_use]
    pub fn radius(&self, id: &str) -> f32 {
        self.options.radius * self.scale(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> MarkerStates {
        MarkerStates::new(&PointRegistry::builtin(), MarkerOptions::default())
    }

    #[test]
    fn hovered_marker_grows_toward_hover_scale() {
        let mut markers = markers();
        markers.hover("top");
        markers.update();
        // One 10% step from 1.0 toward 1.3.
        assert!((markers.scale("top") - 1.03).abs() < 1e-6);
        assert_eq!(markers.scale("front"), 1.0);

        for _ in 0..200 {
            markers.update();
        }
        assert!((markers.scale("top") - 1.3).abs() < 1e-3);
    }

    #[test]
    fn unhovered_marker_shrinks_back() {
        let mut markers = markers();
        markers.hover("left");
        for _ in 0..200 {
            markers.update();
        }
        markers.unhover("left");
        for _ in 0..200 {
            markers.update();
        }
        assert!((markers.scale("left") - 1.0).abs() < 1e-3);
    }

    #[test]
    fn hover_drives_cursor_and_emissive() {
        let mut markers = markers();
        assert_eq!(markers.cursor(), CursorIcon::Default);
        markers.hover("back");
        assert_eq!(markers.cursor(), CursorIcon::Pointer);
        assert_eq!(markers.emissive_intensity("back"), 1.5);
        assert_eq!(markers.emissive_intensity("front"), 0.2);

        // Leaving a different marker keeps the hover.
        markers.unhover("front");
        assert_eq!(markers.hovered(), Some("back"));
        markers.unhover("back");
        assert_eq!(markers.hovered(), None);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut markers = markers();
        markers.hover("nowhere");
        assert_eq!(markers.hovered(), None);
        assert_eq!(markers.scale("nowhere"), 1.0);
    }
}
