use glam::{Mat4, Quat, Vec3};

use super::core::CameraPose;

/// Host-side control helper that owns the camera's look-at target.
///
/// Scripted transitions write the target through [`set_target`] and then
/// call [`update`] so the helper can resynchronize whatever it derives from
/// the eye/target pair (orbit radius, orientation, cached matrices).
///
/// [`set_target`]: LookAtControls::set_target
/// [`update`]: LookAtControls::update
pub trait LookAtControls {
    /// Current look-at target.
    fn target(&self) -> Vec3;

    /// Replace the look-at target.
    fn set_target(&mut self, target: Vec3);

    /// Resynchronize derived state after the eye or target moved.
    fn update(&mut self, _eye: Vec3) {}
}

/// Orbit-style controls: the camera circles a focus point.
///
/// Keeps the orbit radius, orientation and view matrix consistent with the
/// eye/target pair it was last updated with.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    target: Vec3,
    up: Vec3,
    orientation: Quat,
    distance: f32,
    view: Mat4,
}

impl OrbitControls {
    /// Controls orbiting `target` with +Y up.
    #[must_use]
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            up: Vec3::Y,
            orientation: Quat::IDENTITY,
            distance: 0.0,
            view: Mat4::IDENTITY,
        }
    }

    /// Controls already synchronized with `pose`.
    #[must_use]
    pub fn from_pose(pose: CameraPose) -> Self {
        let mut controls = Self::new(pose.look_at);
        controls.update(pose.position);
        controls
    }

    /// Orbit radius at the last update.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Rotation taking +Z onto the target-to-eye direction.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// View matrix at the last update.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl LookAtControls for OrbitControls {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn update(&mut self, eye: Vec3) {
        let pose = CameraPose::new(eye, self.target);
        self.distance = pose.distance();
        // A collapsed orbit keeps its previous orientation.
        if let Some(dir) = pose.bearing_from(self.target) {
            self.orientation = Quat::from_rotation_arc(Vec3::Z, dir);
            self.view = pose.view_matrix(self.up);
        }
    }
}
