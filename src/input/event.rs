/// Platform-agnostic pointer events, already hit-tested against the point
/// markers by the host.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`NavCommand`](crate::NavCommand) values.
///
/// # Example
///
/// ```ignore
/// let cmd = input_processor.handle_event(InputEvent::PointerUp {
///     point: Some("front".into()),
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved onto a marker.
    PointerEnter {
        /// Id of the marker.
        point: String,
    },
    /// Pointer moved off a marker.
    PointerLeave {
        /// Id of the marker.
        point: String,
    },
    /// Primary button pressed.
    PointerDown {
        /// Marker under the pointer, `None` for the background.
        point: Option<String>,
    },
    /// Primary button released.
    PointerUp {
        /// Marker under the pointer, `None` for the background.
        point: Option<String>,
    },
    /// Pointer moved by a delta in physical pixels.
    PointerMoved {
        /// Horizontal movement.
        dx: f32,
        /// Vertical movement.
        dy: f32,
    },
}
