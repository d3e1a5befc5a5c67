//! Scripted camera flights.
//!
//! [`TransitionController`] owns the `Idle → Animating → Idle` state
//! machine. Requests capture the live camera pose, compute the end pose from
//! a viewpoint, and the host advances the flight with
//! [`TransitionController::tick`] once per frame.

mod controller;
mod state;

pub use controller::{
    end_position, TickOutcome, TransitionController, FIXED_DURATION,
};
pub use state::{FrameHandle, TransitionPhase, TransitionState};
