use std::time::Duration;

use glam::Vec3;

use super::state::{FrameHandle, TransitionPhase, TransitionState};
use crate::camera::{CameraPose, CameraRig, LookAtControls};
use crate::error::VantageError;
use crate::points::ViewpointDescriptor;
use crate::util::easing::EasingFunction;

/// Flight duration used for point selections unless options override it.
pub const FIXED_DURATION: Duration = Duration::from_millis(1500);

/// Result of advancing the controller by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing was scheduled; the camera was not touched.
    Idle,
    /// The camera moved and the flight continues next frame.
    Animating {
        /// Linear progress after this tick.
        progress: f32,
    },
    /// The camera reached the end pose and the flight was retired.
    Completed(FrameHandle),
}

/// Where the camera ends up when flying to `look_at` from the direction of
/// `target_anchor`, `view_distance` away from `look_at`.
///
/// When the anchor coincides with the look-at point there is no direction
/// to fly along; `fallback` (normally the camera's current bearing) is used
/// instead, then +Z.
#[must_use]
pub fn end_position(
    target_anchor: Vec3,
    look_at: Vec3,
    view_distance: f32,
    fallback: Option<Vec3>,
) -> Vec3 {
    let direction = (target_anchor - look_at)
        .try_normalize()
        .or(fallback)
        .unwrap_or(Vec3::Z);
    look_at + direction * view_distance
}

/// Drives scripted camera flights.
///
/// At most one transition is ever scheduled. A new request retires the
/// running one before the replacement exists, and the replacement starts
/// from wherever the camera currently sits. The host advances flights by
/// calling [`tick`](Self::tick) once per frame.
///
/// ```ignore
/// let handle = controller.request_transition(
///     &rig,
///     Vec3::new(0.0, 1.0, 2.0),
///     Vec3::ZERO,
///     2.5,
///     FIXED_DURATION,
/// )?;
/// while controller.is_animating() {
///     controller.tick(frame_dt, &mut rig);
/// }
/// ```
#[derive(Debug)]
pub struct TransitionController {
    state: Option<TransitionState>,
    easing: EasingFunction,
    next_handle: u64,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionController {
    /// Idle controller using the default ease-in-out curve.
    #[must_use]
    pub fn new() -> Self {
        Self::with_easing(EasingFunction::DEFAULT)
    }

    /// Idle controller using `easing` for every flight.
    #[must_use]
    pub fn with_easing(easing: EasingFunction) -> Self {
        Self {
            state: None,
            easing,
            next_handle: 1,
        }
    }

    /// Curve applied to flights started from now on.
    #[must_use]
    pub fn easing(&self) -> EasingFunction {
        self.easing
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        if self.state.is_some() {
            TransitionPhase::Animating
        } else {
            TransitionPhase::Idle
        }
    }

    /// Whether a flight is scheduled.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_some()
    }

    /// Handle of the scheduled flight.
    #[must_use]
    pub fn active_handle(&self) -> Option<FrameHandle> {
        self.state.as_ref().map(TransitionState::handle)
    }

    /// The scheduled flight, if any.
    #[must_use]
    pub fn state(&self) -> Option<&TransitionState> {
        self.state.as_ref()
    }

    /// Linear progress of the scheduled flight.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.state.as_ref().map(TransitionState::progress)
    }

    /// Pose the scheduled flight ends at.
    #[must_use]
    pub fn end_pose(&self) -> Option<CameraPose> {
        self.state.as_ref().map(TransitionState::end)
    }

    /// Schedule a flight toward `look_at`, ending `view_distance` away from
    /// it on the side of `target_anchor`.
    ///
    /// Returns immediately; the camera only moves on later
    /// [`tick`](Self::tick) calls. A running flight is superseded and the
    /// new one starts from the camera's live pose.
    ///
    /// # Errors
    ///
    /// - [`VantageError::InvalidParameter`] when `view_distance` is not a
    ///   positive finite number, either point has a non-finite component,
    ///   or `duration` is zero.
    /// - [`VantageError::MissingControls`] when the camera has no look-at
    ///   controls yet.
    ///
    /// On error nothing changes: a running flight keeps running.
    pub fn request_transition<C: LookAtControls>(
        &mut self,
        camera: &CameraRig<C>,
        target_anchor: Vec3,
        look_at: Vec3,
        view_distance: f32,
        duration: Duration,
    ) -> Result<FrameHandle, VantageError> {
        if !(view_distance.is_finite() && view_distance > 0.0) {
            return Err(VantageError::InvalidParameter {
                name: "view_distance",
                value: view_distance,
            });
        }
        VantageError::check_finite("target_anchor", target_anchor)?;
        VantageError::check_finite("look_at", look_at)?;
        if duration.is_zero() {
            return Err(VantageError::InvalidParameter {
                name: "duration",
                value: 0.0,
            });
        }
        let Some(start) = camera.pose() else {
            log::warn!("camera controls not ready; ignoring transition");
            return Err(VantageError::MissingControls);
        };

        let end = CameraPose::new(
            end_position(
                target_anchor,
                look_at,
                view_distance,
                start.bearing_from(look_at),
            ),
            look_at,
        );

        if let Some(previous) = self.state.take() {
            log::debug!(
                "transition {} superseded at {:.0}%",
                previous.handle().id(),
                previous.progress() * 100.0
            );
        }

        let handle = FrameHandle::new(self.next_handle);
        self.next_handle += 1;
        log::debug!(
            "transition {} to {} (look at {}) over {:?}",
            handle.id(),
            end.position,
            end.look_at,
            duration
        );
        self.state = Some(TransitionState::new(
            start,
            end,
            duration,
            self.easing,
            handle,
        ));
        Ok(handle)
    }

    /// Schedule a flight to a registered viewpoint.
    ///
    /// # Errors
    ///
    /// Same as [`request_transition`](Self::request_transition).
    pub fn request_viewpoint<C: LookAtControls>(
        &mut self,
        camera: &CameraRig<C>,
        viewpoint: &ViewpointDescriptor,
        duration: Duration,
    ) -> Result<FrameHandle, VantageError> {
        self.request_transition(
            camera,
            viewpoint.target_anchor(),
            viewpoint.look_at(),
            viewpoint.view_distance(),
            duration,
        )
    }

    /// Stop the scheduled flight, leaving the camera where it is.
    /// Does nothing when idle.
    pub fn cancel(&mut self) {
        if let Some(state) = self.state.take() {
            log::debug!(
                "transition {} cancelled at {:.0}%",
                state.handle().id(),
                state.progress() * 100.0
            );
        }
    }

    /// Advance the scheduled flight by `dt` and write the resulting pose
    /// into `camera`.
    pub fn tick<C: LookAtControls>(
        &mut self,
        dt: Duration,
        camera: &mut CameraRig<C>,
    ) -> TickOutcome {
        let Some(state) = self.state.as_mut() else {
            return TickOutcome::Idle;
        };

        let progress = state.advance(dt);
        camera.apply(state.pose_at(progress));

        if progress < 1.0 {
            return TickOutcome::Animating { progress };
        }

        let handle = state.handle();
        self.state = None;
        log::debug!("transition {} complete", handle.id());
        TickOutcome::Completed(handle)
    }
}
