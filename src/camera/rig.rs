use glam::Vec3;

use super::controls::{LookAtControls, OrbitControls};
use super::core::CameraPose;
use crate::options::CameraOptions;

/// The host's live camera: an eye position plus the control helper that
/// owns the look-at target.
///
/// Controls may arrive after the camera exists (they are usually created
/// once the rendering surface is ready). Until then the rig has no complete
/// pose and transitions cannot start from it.
#[derive(Debug, Clone)]
pub struct CameraRig<C = OrbitControls> {
    position: Vec3,
    controls: Option<C>,
}

impl<C: LookAtControls> CameraRig<C> {
    /// Camera at `position` with no controls attached yet.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            controls: None,
        }
    }

    /// Camera at `position` driven by `controls`.
    #[must_use]
    pub fn with_controls(position: Vec3, controls: C) -> Self {
        let mut rig = Self::new(position);
        rig.attach_controls(controls);
        rig
    }

    /// Attach (or replace) the look-at controls.
    pub fn attach_controls(&mut self, mut controls: C) {
        controls.update(self.position);
        self.controls = Some(controls);
    }

    /// Whether look-at controls are attached.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.controls.is_some()
    }

    /// The attached controls, if any.
    #[must_use]
    pub fn controls(&self) -> Option<&C> {
        self.controls.as_ref()
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the eye directly (manual navigation). Any scripted transition
    /// should be cancelled first.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        if let Some(controls) = self.controls.as_mut() {
            controls.update(position);
        }
    }

    /// Full pose, or `None` while no controls are attached.
    #[must_use]
    pub fn pose(&self) -> Option<CameraPose> {
        self.controls
            .as_ref()
            .map(|controls| CameraPose::new(self.position, controls.target()))
    }

    /// Write a pose and run the controls' update hook.
    pub(crate) fn apply(&mut self, pose: CameraPose) {
        self.position = pose.position;
        if let Some(controls) = self.controls.as_mut() {
            controls.set_target(pose.look_at);
            controls.update(pose.position);
        }
    }
}

impl CameraRig<OrbitControls> {
    /// Orbit camera placed according to `options`.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let pose = options.initial_pose();
        Self::with_controls(pose.position, OrbitControls::new(pose.look_at))
    }
}
