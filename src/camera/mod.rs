//! Camera state shared between the host and scripted transitions.
//!
//! The host owns a [`CameraRig`]: an eye position plus a [`LookAtControls`]
//! helper holding the look-at target. Transitions read a [`CameraPose`]
//! snapshot from it and write poses back while they run.

/// Look-at control helpers and the orbit implementation.
pub mod controls;
/// Camera pose value type.
pub mod core;
/// The host-owned live camera.
pub mod rig;

pub use self::controls::{LookAtControls, OrbitControls};
pub use self::core::CameraPose;
pub use self::rig::CameraRig;
