//! Easing functions for camera transitions.
//!
//! Every curve maps progress in `[0, 1]` onto eased progress in `[0, 1]`
//! with `f(0) = 0` and `f(1) = 1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Ease-in-out with zero velocity at both endpoints.
    ///
    /// `2t²` below the midpoint, `1 - (-2t + 2)³ / 2` above it.
    CubicInOut,
}

impl EasingFunction {
    /// Default curve for camera flights.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let r = -2.0 * t + 2.0;
                    1.0 - r * r * r / 2.0
                }
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
