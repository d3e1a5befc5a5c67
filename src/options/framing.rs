use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Framing", inline)]
#[serde(default)]
/// Normalization applied to a freshly loaded model.
pub struct FramingOptions {
    /// Models larger than this (largest bounding-box side) shrink to it.
    #[schemars(skip)]
    pub max_extent: f32,
    /// Models smaller than this grow to `small_target`.
    #[schemars(skip)]
    pub min_extent: f32,
    /// Size a small model is scaled up to.
    #[schemars(skip)]
    pub small_target: f32,
}

impl Default for FramingOptions {
    fn default() -> Self {
        Self {
            max_extent: 5.0,
            min_extent: 1.0,
            small_target: 2.0,
        }
    }
}
