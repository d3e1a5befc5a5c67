//! Recentering and rescaling a loaded model so authored viewpoints, which
//! assume a model of a few units around the origin, line up with it.

use glam::Vec3;

use crate::options::FramingOptions;

/// Translation and uniform scale that normalize a model.
///
/// Applied as `(p + offset) * scale`: the bounding-box center moves to the
/// origin, then the model is scaled about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFraming {
    /// Translation moving the bounding-box center to the origin.
    pub offset: Vec3,
    /// Uniform scale applied after centering.
    pub scale: f32,
}

impl Default for ModelFraming {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl ModelFraming {
    /// Framing for an axis-aligned bounding box.
    ///
    /// A model whose largest side exceeds `max_extent` shrinks to exactly
    /// `max_extent`; one smaller than `min_extent` grows to `small_target`.
    /// Anything in between keeps its size. A degenerate (zero-size) box is
    /// only recentered.
    #[must_use]
    pub fn from_bounds(min: Vec3, max: Vec3, options: &FramingOptions) -> Self {
        let center = (min + max) * 0.5;
        let max_dim = (max - min).max_element();

        let scale = if max_dim > options.max_extent {
            options.max_extent / max_dim
        } else if max_dim > 0.0 && max_dim < options.min_extent {
            options.small_target / max_dim
        } else {
            1.0
        };

        Self {
            offset: -center,
            scale,
        }
    }

    /// Framing for the bounding box of `positions`, or `None` when empty.
    #[must_use]
    pub fn from_positions(
        positions: &[Vec3],
        options: &FramingOptions,
    ) -> Option<Self> {
        let first = *positions.first()?;
        let (min, max) = positions
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p)));
        Some(Self::from_bounds(min, max, options))
    }

    /// Map a model-space point into the normalized frame.
    #[must_use]
    pub fn apply(&self, point: Vec3) -> Vec3 {
        (point + self.offset) * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> FramingOptions {
        FramingOptions::default()
    }

    #[test]
    fn large_model_shrinks_to_max_extent() {
        let framing = ModelFraming::from_bounds(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(20.0, 10.0, 4.0),
            &opts(),
        );
        assert_eq!(framing.offset, Vec3::new(-10.0, -5.0, -2.0));
        assert!((framing.scale - 0.25).abs() < 1e-6);
        let corner = framing.apply(Vec3::new(20.0, 10.0, 4.0));
        assert!((corner - Vec3::new(2.5, 1.25, 0.5)).length() < 1e-5);
    }

    #[test]
    fn small_model_grows_to_target() {
        let framing = ModelFraming::from_bounds(
            Vec3::splat(-0.25),
            Vec3::splat(0.25),
            &opts(),
        );
        assert_eq!(framing.offset, Vec3::ZERO);
        assert!((framing.scale - 4.0).abs() < 1e-6);
    }

    #[test]
    fn mid_sized_model_is_only_centered() {
        let framing =
            ModelFraming::from_bounds(Vec3::ONE, Vec3::splat(4.0), &opts());
        assert_eq!(framing.scale, 1.0);
        assert_eq!(framing.apply(Vec3::splat(2.5)), Vec3::ZERO);
    }

    #[test]
    fn degenerate_box_keeps_scale() {
        let framing =
            ModelFraming::from_bounds(Vec3::ONE, Vec3::ONE, &opts());
        assert_eq!(framing.scale, 1.0);
        assert_eq!(framing.offset, -Vec3::ONE);
    }

    #[test]
    fn positions_use_their_bounds() {
        let positions = [
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(3.0, 2.0, 0.5),
            Vec3::new(0.0, -2.0, 0.0),
        ];
        let framing = ModelFraming::from_positions(&positions, &opts()).unwrap();
        assert_eq!(framing.offset, Vec3::new(-1.0, 0.0, -0.25));
        assert_eq!(framing.scale, 1.0);
        assert!(ModelFraming::from_positions(&[], &opts()).is_none());
    }
}
