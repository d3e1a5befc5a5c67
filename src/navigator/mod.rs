//! The navigator ties the point registry, click dispatch, marker hover state
//! and the transition controller to one host camera.
//!
//! The host calls [`Navigator::execute`] for every command produced by its
//! input layer and [`Navigator::frame`] once per rendered frame.

mod command;

use std::time::Duration;

pub use command::NavCommand;

use crate::camera::{CameraRig, LookAtControls, OrbitControls};
use crate::error::VantageError;
use crate::input::ClickDispatcher;
use crate::options::Options;
use crate::points::{MarkerStates, PointRegistry};
use crate::transition::{FrameHandle, TickOutcome, TransitionController};

/// Point-of-interest camera navigation for a single viewport.
#[derive(Debug)]
pub struct Navigator<C = OrbitControls> {
    registry: PointRegistry,
    controller: TransitionController,
    dispatcher: ClickDispatcher,
    markers: MarkerStates,
    camera: CameraRig<C>,
    /// Index of the last successfully selected point.
    current: Option<usize>,
}

impl<C: LookAtControls> Navigator<C> {
    /// Navigator over `registry` driving `camera`, configured by `options`.
    #[must_use]
    pub fn new(
        registry: PointRegistry,
        options: &Options,
        camera: CameraRig<C>,
    ) -> Self {
        let markers = MarkerStates::new(&registry, options.markers.clone());
        Self {
            registry,
            controller: TransitionController::with_easing(
                options.transition.easing,
            ),
            dispatcher: ClickDispatcher::new(options.transition.duration()),
            markers,
            camera,
            current: None,
        }
    }

    /// Run one command.
    ///
    /// Returns the handle of the flight a selection started, `None` for
    /// commands that do not start one.
    ///
    /// # Errors
    ///
    /// Selection errors from the registry or the transition controller
    /// ([`VantageError::NotFound`], [`VantageError::InvalidParameter`],
    /// [`VantageError::MissingControls`]). The camera does not move on
    /// error.
    pub fn execute(
        &mut self,
        command: NavCommand,
    ) -> Result<Option<FrameHandle>, VantageError> {
        match command {
            NavCommand::SelectPoint { id } => self.select(&id).map(Some),
            NavCommand::NextPoint => self.step(1).map(Some),
            NavCommand::PreviousPoint => self.step(-1).map(Some),
            NavCommand::CancelTransition => {
                self.cancel();
                Ok(None)
            }
            NavCommand::HoverPoint { id } => {
                self.markers.hover(&id);
                Ok(None)
            }
            NavCommand::UnhoverPoint { id } => {
                self.markers.unhover(&id);
                Ok(None)
            }
        }
    }

    /// Fly to the registered point `id`.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub fn select(&mut self, id: &str) -> Result<FrameHandle, VantageError> {
        let handle = self.dispatcher.select_by_id(
            &self.registry,
            id,
            &mut self.controller,
            &self.camera,
        )?;
        self.current = self.registry.all().iter().position(|p| p.id() == id);
        Ok(handle)
    }

    /// Fly `offset` points forward (negative = backward) from the last
    /// selection, wrapping around. Starts at the first point when nothing
    /// was selected yet.
    fn step(&mut self, offset: isize) -> Result<FrameHandle, VantageError> {
        let len = self.registry.len();
        if len == 0 {
            return Err(VantageError::NotFound("<empty registry>".to_owned()));
        }
        let next = match self.current {
            Some(i) => (i as isize + offset).rem_euclid(len as isize) as usize,
            None => 0,
        };
        let id = self.registry.all()[next].id().to_owned();
        self.select(&id)
    }

    /// Stop the running flight where it is.
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    /// Advance marker animation and the running flight by one frame.
    pub fn frame(&mut self, dt: Duration) -> TickOutcome {
        self.markers.update();
        self.controller.tick(dt, &mut self.camera)
    }

    /// Take manual control of the camera (e.g. an orbit drag).
    ///
    /// Cancels the running flight first so the transition and the caller
    /// never both write the camera.
    pub fn manual_camera(&mut self) -> &mut CameraRig<C> {
        self.controller.cancel();
        &mut self.camera
    }

    /// Attach look-at controls once the host has created them.
    pub fn attach_controls(&mut self, controls: C) {
        self.camera.attach_controls(controls);
    }

    /// The viewpoint registry.
    #[must_use]
    pub fn registry(&self) -> &PointRegistry {
        &self.registry
    }

    /// The transition controller.
    #[must_use]
    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    /// Marker hover state.
    #[must_use]
    pub fn markers(&self) -> &MarkerStates {
        &self.markers
    }

    /// The live camera.
    #[must_use]
    pub fn camera(&self) -> &CameraRig<C> {
        &self.camera
    }

    /// Id of the last selected point.
    #[must_use]
    pub fn current_point(&self) -> Option<&str> {
        self.current.map(|i| self.registry.all()[i].id())
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::transition::TransitionPhase;

    const FRAME: Duration = Duration::from_millis(16);

    fn navigator() -> Navigator {
        let options = Options::default();
        Navigator::new(
            PointRegistry::builtin(),
            &options,
            CameraRig::from_options(&options.camera),
        )
    }

    fn settle(nav: &mut Navigator) {
        while nav.controller().is_animating() {
            let _ = nav.frame(FRAME);
        }
    }

    #[test]
    fn select_flies_to_point() {
        let mut nav = navigator();
        let _ = nav
            .execute(NavCommand::SelectPoint { id: "top".into() })
            .unwrap();
        assert_eq!(nav.controller().phase(), TransitionPhase::Animating);
        settle(&mut nav);

        let pose = nav.camera().pose().unwrap();
        assert!((pose.position - Vec3::new(0.0, 2.5, 0.0)).length() < 1e-5);
        assert_eq!(pose.look_at, Vec3::ZERO);
        assert_eq!(nav.current_point(), Some("top"));
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut nav = navigator();
        let _ = nav.execute(NavCommand::NextPoint).unwrap();
        assert_eq!(nav.current_point(), Some("front"));
        let _ = nav.execute(NavCommand::PreviousPoint).unwrap();
        assert_eq!(nav.current_point(), Some("center"));
        let _ = nav.execute(NavCommand::NextPoint).unwrap();
        assert_eq!(nav.current_point(), Some("front"));
    }

    #[test]
    fn failed_selection_keeps_current_point() {
        let mut nav = navigator();
        let _ = nav.select("left").unwrap();
        assert!(nav.select("nowhere").is_err());
        assert_eq!(nav.current_point(), Some("left"));
    }

    #[test]
    fn manual_camera_cancels_flight() {
        let mut nav = navigator();
        let _ = nav.select("front").unwrap();
        let _ = nav.frame(FRAME);
        nav.manual_camera().set_position(Vec3::new(9.0, 0.0, 0.0));
        assert!(!nav.controller().is_animating());
        assert_eq!(nav.frame(FRAME), TickOutcome::Idle);
        assert_eq!(nav.camera().position(), Vec3::new(9.0, 0.0, 0.0));
    }

    #[test]
    fn hover_commands_update_markers() {
        let mut nav = navigator();
        let _ = nav
            .execute(NavCommand::HoverPoint { id: "back".into() })
            .unwrap();
        let _ = nav.frame(FRAME);
        assert_eq!(nav.markers().hovered(), Some("back"));
        assert!(nav.markers().scale("back") > 1.0);
        let _ = nav
            .execute(NavCommand::UnhoverPoint { id: "back".into() })
            .unwrap();
        assert_eq!(nav.markers().hovered(), None);
    }

    #[test]
    fn selection_waits_for_controls() {
        let options = Options::default();
        let mut nav = Navigator::new(
            PointRegistry::builtin(),
            &options,
            CameraRig::<OrbitControls>::new(Vec3::new(0.0, 0.0, 5.0)),
        );
        assert!(matches!(
            nav.select("top"),
            Err(VantageError::MissingControls)
        ));
        assert_eq!(nav.current_point(), None);

        nav.attach_controls(OrbitControls::default());
        assert!(nav.select("top").is_ok());
    }
}
