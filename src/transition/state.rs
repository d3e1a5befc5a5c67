//! Per-flight state owned by the transition controller.

use std::time::Duration;

use crate::camera::CameraPose;
use crate::util::easing::EasingFunction;

/// Identifies one scheduled flight.
///
/// Every accepted request gets a fresh handle. A handle that is no longer
/// the controller's [`active_handle`](super::TransitionController::active_handle)
/// has been retired (completed, cancelled or superseded) and will never tick
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw sequence number (strictly increasing per controller).
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Whether a flight is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// No transition scheduled.
    Idle,
    /// A transition is moving the camera.
    Animating,
}

/// Interpolation from a start snapshot to a computed end pose.
#[derive(Debug, Clone)]
pub struct TransitionState {
    start: CameraPose,
    end: CameraPose,
    elapsed: Duration,
    duration: Duration,
    easing: EasingFunction,
    handle: FrameHandle,
}

impl TransitionState {
    /// `duration` must be non-zero; the controller validates it.
    pub(crate) fn new(
        start: CameraPose,
        end: CameraPose,
        duration: Duration,
        easing: EasingFunction,
        handle: FrameHandle,
    ) -> Self {
        Self {
            start,
            end,
            elapsed: Duration::ZERO,
            duration,
            easing,
            handle,
        }
    }

    /// Pose captured when the transition began.
    #[must_use]
    pub fn start(&self) -> CameraPose {
        self.start
    }

    /// Pose the transition ends at.
    #[must_use]
    pub fn end(&self) -> CameraPose {
        self.end
    }

    /// Time accumulated from ticks so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Requested duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Handle of this flight.
    #[must_use]
    pub fn handle(&self) -> FrameHandle {
        self.handle
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let total = self.duration.as_secs_f64();
        if total == 0.0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / total).clamp(0.0, 1.0) as f32
    }

    /// Accumulate `dt` and return the new progress.
    pub(crate) fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.progress()
    }

    /// Pose at the given linear progress.
    ///
    /// Full progress returns the end pose exactly rather than a lerp result.
    #[must_use]
    pub fn pose_at(&self, progress: f32) -> CameraPose {
        if progress >= 1.0 {
            return self.end;
        }
        self.start.lerp(&self.end, self.easing.evaluate(progress))
    }
}
