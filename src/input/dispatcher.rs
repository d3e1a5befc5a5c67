//! Turns point selections into transition requests.

use std::time::Duration;

use crate::camera::{CameraRig, LookAtControls};
use crate::error::VantageError;
use crate::points::{PointRegistry, ViewpointDescriptor};
use crate::transition::{FrameHandle, TransitionController, FIXED_DURATION};

/// Maps a selected point to a flight of fixed duration.
///
/// The dispatcher never touches the camera itself; it only asks the
/// controller for a transition and reports whatever the controller says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickDispatcher {
    duration: Duration,
}

impl Default for ClickDispatcher {
    fn default() -> Self {
        Self::new(FIXED_DURATION)
    }
}

impl ClickDispatcher {
    /// Dispatcher requesting flights of `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Flight duration used for every selection.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fly to an already resolved viewpoint.
    ///
    /// # Errors
    ///
    /// Whatever [`TransitionController::request_transition`] rejects.
    pub fn on_point_selected<C: LookAtControls>(
        &self,
        viewpoint: &ViewpointDescriptor,
        controller: &mut TransitionController,
        camera: &CameraRig<C>,
    ) -> Result<FrameHandle, VantageError> {
        log::debug!("point selected: {} ({})", viewpoint.id(), viewpoint.label());
        controller.request_transition(
            camera,
            viewpoint.target_anchor(),
            viewpoint.look_at(),
            viewpoint.view_distance(),
            self.duration,
        )
    }

    /// Resolve `id` in `registry` and fly to it.
    ///
    /// # Errors
    ///
    /// [`VantageError::NotFound`] for an unknown id, otherwise whatever
    /// [`on_point_selected`](Self::on_point_selected) returns.
    pub fn select_by_id<C: LookAtControls>(
        &self,
        registry: &PointRegistry,
        id: &str,
        controller: &mut TransitionController,
        camera: &CameraRig<C>,
    ) -> Result<FrameHandle, VantageError> {
        let viewpoint = registry.get(id)?;
        self.on_point_selected(viewpoint, controller, camera)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::OrbitControls;

    fn camera() -> CameraRig {
        CameraRig::with_controls(Vec3::new(0.0, 0.0, 5.0), OrbitControls::default())
    }

    #[test]
    fn selection_requests_fixed_duration_flight() {
        let camera = camera();
        let mut controller = TransitionController::new();
        let registry = PointRegistry::builtin();
        let dispatcher = ClickDispatcher::default();

        let handle = dispatcher
            .select_by_id(&registry, "right", &mut controller, &camera)
            .unwrap();

        let state = controller.state().unwrap();
        assert_eq!(state.handle(), handle);
        assert_eq!(state.duration(), FIXED_DURATION);
        let expected = Vec3::new(2.0, 1.0, 0.0).normalize() * 2.5;
        assert!((state.end().position - expected).length() < 1e-5);
        assert_eq!(state.end().look_at, Vec3::ZERO);
        // The dispatcher itself never moves the camera.
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn unknown_id_leaves_controller_idle() {
        let camera = camera();
        let mut controller = TransitionController::new();
        let result = ClickDispatcher::default().select_by_id(
            &PointRegistry::builtin(),
            "nowhere",
            &mut controller,
            &camera,
        );
        assert!(matches!(result, Err(VantageError::NotFound(_))));
        assert!(!controller.is_animating());
    }

    #[test]
    fn controller_errors_bubble_up() {
        let camera = CameraRig::<OrbitControls>::new(Vec3::Z);
        let mut controller = TransitionController::new();
        let viewpoint = ViewpointDescriptor::new("a", Vec3::X, Vec3::ZERO, 1.0);
        let result = ClickDispatcher::new(Duration::from_millis(200))
            .on_point_selected(&viewpoint, &mut controller, &camera);
        assert!(matches!(result, Err(VantageError::MissingControls)));
    }
}
