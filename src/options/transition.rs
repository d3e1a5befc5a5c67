use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Camera flight timing.
pub struct TransitionOptions {
    /// Flight duration in milliseconds for point selections.
    #[schemars(title = "Duration (ms)", range(min = 100, max = 5000), extend("step" = 50))]
    pub duration_ms: u64,
    /// Easing curve applied to flight progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl TransitionOptions {
    /// Flight duration as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1500,
            easing: EasingFunction::DEFAULT,
        }
    }
}
