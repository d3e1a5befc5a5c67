//! Converts raw pointer and key events into navigator commands.
//!
//! The `InputProcessor` owns all transient input state (press tracking,
//! drag detection) and the key-binding map. It is the only thing that sits
//! between raw window events and
//! [`Navigator::execute`](crate::Navigator::execute).

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::navigator::NavCommand;

/// Squared pixel distance after which a press becomes a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Maps physical key strings to [`NavCommand`] variants.
///
/// Key strings use the `KeyboardEvent.code` / `winit::keyboard::KeyCode`
/// debug format: `"Tab"`, `"Escape"`, `"BracketLeft"`, etc.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command tag.
    bindings: HashMap<String, KeyCommandTag>,
}

/// Serializable tag for the parameterless subset of [`NavCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCommandTag {
    /// Fly to the next point.
    NextPoint,
    /// Fly to the previous point.
    PreviousPoint,
    /// Stop the running flight.
    Cancel,
}

impl KeyCommandTag {
    fn to_command(self) -> NavCommand {
        match self {
            Self::NextPoint => NavCommand::NextPoint,
            Self::PreviousPoint => NavCommand::PreviousPoint,
            Self::Cancel => NavCommand::CancelTransition,
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Tab".into(), KeyCommandTag::NextPoint),
            ("BracketRight".into(), KeyCommandTag::NextPoint),
            ("BracketLeft".into(), KeyCommandTag::PreviousPoint),
            ("Escape".into(), KeyCommandTag::Cancel),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<NavCommand> {
        self.bindings.get(key).map(|tag| tag.to_command())
    }

    /// Bind `key` to `tag`, replacing any previous binding for that key.
    pub fn bind(&mut self, key: impl Into<String>, tag: KeyCommandTag) {
        let _ = self.bindings.insert(key.into(), tag);
    }
}

/// Converts raw pointer events into [`NavCommand`]s.
///
/// A click selects a point only when the press and the release land on the
/// same marker without a drag in between. Dragging on the background hands
/// the camera to manual control, so it cancels any running flight.
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     navigator.execute(cmd)?;
/// }
/// ```
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Marker under the pointer at press time (`None` = background).
    pressed_on: Option<Option<String>>,
    /// Whether the current press has turned into a drag.
    dragging: bool,
    /// Key string → command mapping.
    key_bindings: KeyBindings,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn pointer_pressed(&self) -> bool {
        self.pressed_on.is_some()
    }

    /// Whether the current press has become a drag.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<NavCommand> {
        self.key_bindings.lookup(key)
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::PointerEnter { point } => {
                Some(NavCommand::HoverPoint { id: point })
            }
            InputEvent::PointerLeave { point } => {
                Some(NavCommand::UnhoverPoint { id: point })
            }
            InputEvent::PointerDown { point } => {
                self.pressed_on = Some(point);
                self.dragging = false;
                None
            }
            InputEvent::PointerMoved { dx, dy } => {
                self.handle_pointer_moved(Vec2::new(dx, dy))
            }
            InputEvent::PointerUp { point } => self.handle_pointer_up(point),
        }
    }

    fn handle_pointer_moved(&mut self, delta: Vec2) -> Option<NavCommand> {
        // Only a background press can become an orbit drag.
        let Some(None) = self.pressed_on else {
            return None;
        };
        if self.dragging || delta.length_squared() <= DRAG_THRESHOLD_SQ {
            return None;
        }
        self.dragging = true;
        Some(NavCommand::CancelTransition)
    }

    fn handle_pointer_up(&mut self, point: Option<String>) -> Option<NavCommand> {
        let pressed_on = self.pressed_on.take()?;
        let was_dragging = std::mem::take(&mut self.dragging);
        if was_dragging {
            return None;
        }
        match (pressed_on, point) {
            (Some(down), Some(up)) if down == up => {
                Some(NavCommand::SelectPoint { id: up })
            }
            _ => None,
        }
    }
}
