//! Input handling: pointer events, the processor that converts them into
//! navigator commands, and the dispatcher that turns selections into
//! camera flights.

/// Click-to-transition dispatch.
pub mod dispatcher;
/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into navigator commands.
pub mod processor;

pub use dispatcher::ClickDispatcher;
pub use event::InputEvent;
pub use processor::{InputProcessor, KeyBindings, KeyCommandTag};
