use glam::{Mat4, Vec3};

/// Camera eye position together with the point it looks at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraPose {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Look-at target position.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Pose from an eye position and a look-at target.
    #[must_use]
    pub const fn new(position: Vec3, look_at: Vec3) -> Self {
        Self { position, look_at }
    }

    /// Linear interpolation of both points by the same factor.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }

    /// Unit direction from `origin` toward the eye, if the two differ.
    #[must_use]
    pub fn bearing_from(&self, origin: Vec3) -> Option<Vec3> {
        (self.position - origin).try_normalize()
    }

    /// Distance between the eye and its look-at target.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.position.distance(self.look_at)
    }

    /// Right-handed view matrix for this pose.
    #[must_use]
    pub fn view_matrix(&self, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, up)
    }
}
