use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Markers", inline)]
#[serde(default)]
/// Point marker size and hover feedback.
pub struct MarkerOptions {
    /// Marker sphere radius at rest.
    #[schemars(title = "Radius", range(min = 0.005, max = 0.2), extend("step" = 0.005))]
    pub radius: f32,
    /// Scale a hovered marker grows to.
    #[schemars(title = "Hover Scale", range(min = 1.0, max = 2.0), extend("step" = 0.05))]
    pub hover_scale: f32,
    /// Fraction of the remaining scale change applied per frame.
    #[schemars(skip)]
    pub scale_lerp: f32,
    /// Emissive intensity of a marker at rest.
    #[schemars(skip)]
    pub idle_emissive: f32,
    /// Emissive intensity of the hovered marker.
    #[schemars(skip)]
    pub hover_emissive: f32,
    /// Marker opacity.
    #[schemars(title = "Opacity", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            radius: 0.02,
            hover_scale: 1.3,
            scale_lerp: 0.1,
            idle_emissive: 0.2,
            hover_emissive: 1.5,
            opacity: 0.9,
        }
    }
}
