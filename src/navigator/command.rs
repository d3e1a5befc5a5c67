//! The navigator's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a pointer, a key press
//! or a programmatic call, is represented as a `NavCommand`. Consumers
//! construct commands and pass them to
//! [`Navigator::execute`](super::Navigator::execute).

/// A discrete operation the navigator can perform.
///
/// ```ignore
/// navigator.execute(NavCommand::SelectPoint { id: "top".into() })?;
/// navigator.execute(NavCommand::CancelTransition)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    /// Fly the camera to the registered point `id`.
    SelectPoint {
        /// Registry id.
        id: String,
    },
    /// Fly to the point after the last selected one (authoring order).
    NextPoint,
    /// Fly to the point before the last selected one.
    PreviousPoint,
    /// Stop the running flight where it is.
    CancelTransition,
    /// The pointer is over the marker for `id`.
    HoverPoint {
        /// Registry id.
        id: String,
    },
    /// The pointer left the marker for `id`.
    UnhoverPoint {
        /// Registry id.
        id: String,
    },
}
