use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement.
pub struct CameraOptions {
    /// Eye position before any point is selected.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Look-at target before any point is selected.
    #[schemars(skip)]
    pub look_at: [f32; 3],
}

impl CameraOptions {
    /// The configured starting pose.
    #[must_use]
    pub fn initial_pose(&self) -> CameraPose {
        CameraPose::new(
            Vec3::from_array(self.position),
            Vec3::from_array(self.look_at),
        )
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 5.0],
            look_at: [0.0, 0.0, 0.0],
        }
    }
}
