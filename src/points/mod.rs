//! Points of interest: the authored viewpoint registry and marker hover
//! state.

pub mod markers;
pub mod registry;

pub use markers::{CursorIcon, MarkerStates};
pub use registry::{PointRegistry, ViewpointDescriptor};
