//! JavaScript bindings for browser hosts.
//!
//! The page owns rendering and hit-testing; it forwards pointer events and
//! `requestAnimationFrame` timestamps here and reads the camera pose back
//! each frame.
//!
//! ```js
//! const nav = new WebNavigator(pointsToml, optionsToml);
//! marker.addEventListener("click", () => nav.select(marker.dataset.id));
//! function frame(t) {
//!   nav.tick(t - last);
//!   camera.position.fromArray(nav.cameraPosition());
//!   controls.target.fromArray(nav.cameraLookAt());
//! }
//! ```

use std::time::Duration;

use glam::Vec3;
use wasm_bindgen::prelude::*;

use crate::camera::CameraRig;
use crate::error::VantageError;
use crate::framing::ModelFraming;
use crate::input::{InputEvent, InputProcessor};
use crate::navigator::{NavCommand, Navigator};
use crate::options::Options;
use crate::points::{CursorIcon, PointRegistry};
use crate::transition::TickOutcome;

impl From<VantageError> for JsValue {
    fn from(e: VantageError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Browser-facing navigator.
#[wasm_bindgen]
pub struct WebNavigator {
    navigator: Navigator,
    input: InputProcessor,
    options: Options,
}

#[wasm_bindgen]
impl WebNavigator {
    /// Build from optional TOML registry and options text. Missing text
    /// falls back to the built-in points and default options.
    ///
    /// # Errors
    ///
    /// Parse or validation errors, as a string.
    #[wasm_bindgen(constructor)]
    pub fn new(
        points_toml: Option<String>,
        options_toml: Option<String>,
    ) -> Result<WebNavigator, JsValue> {
        let registry = match points_toml {
            Some(text) => PointRegistry::from_toml_str(&text)?,
            None => PointRegistry::builtin(),
        };
        let options = match options_toml {
            Some(text) => Options::from_toml_str(&text)?,
            None => Options::default(),
        };
        let camera = CameraRig::from_options(&options.camera);
        log::info!("navigator ready with {} points", registry.len());
        Ok(Self {
            navigator: Navigator::new(registry, &options, camera),
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            options,
        })
    }

    /// Fly to the point `id`.
    ///
    /// # Errors
    ///
    /// Unknown id or rejected transition, as a string.
    pub fn select(&mut self, id: &str) -> Result<(), JsValue> {
        let _ = self.navigator.select(id)?;
        Ok(())
    }

    /// Stop the running flight.
    pub fn cancel(&mut self) {
        self.navigator.cancel();
    }

    /// Pointer entered the marker `id`.
    #[wasm_bindgen(js_name = pointerEnter)]
    pub fn pointer_enter(&mut self, id: String) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerEnter { point: id })
    }

    /// Pointer left the marker `id`.
    #[wasm_bindgen(js_name = pointerLeave)]
    pub fn pointer_leave(&mut self, id: String) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerLeave { point: id })
    }

    /// Primary button pressed over `id` (or the background).
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, id: Option<String>) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerDown { point: id })
    }

    /// Primary button released over `id` (or the background).
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, id: Option<String>) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerUp { point: id })
    }

    /// Pointer moved by `(dx, dy)` pixels.
    #[wasm_bindgen(js_name = pointerMoved)]
    pub fn pointer_moved(&mut self, dx: f32, dy: f32) -> Result<(), JsValue> {
        self.dispatch(InputEvent::PointerMoved { dx, dy })
    }

    /// Key pressed (`KeyboardEvent.code`).
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, code: &str) -> Result<(), JsValue> {
        match self.input.handle_key_press(code) {
            Some(command) => self.run(command),
            None => Ok(()),
        }
    }

    /// Advance by `dt_ms` milliseconds. Returns whether a flight is still
    /// running.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let dt = Duration::from_secs_f64(dt_ms.max(0.0) / 1000.0);
        matches!(self.navigator.frame(dt), TickOutcome::Animating { .. })
    }

    /// Eye position as `[x, y, z]`.
    #[wasm_bindgen(js_name = cameraPosition)]
    pub fn camera_position(&self) -> Vec<f32> {
        self.navigator.camera().position().to_array().to_vec()
    }

    /// Look-at target as `[x, y, z]` (the start pose before controls load).
    #[wasm_bindgen(js_name = cameraLookAt)]
    pub fn camera_look_at(&self) -> Vec<f32> {
        self.navigator
            .camera()
            .pose()
            .map_or(self.options.camera.look_at, |pose| {
                pose.look_at.to_array()
            })
            .to_vec()
    }

    /// Current scale of the marker `id`.
    #[wasm_bindgen(js_name = markerScale)]
    pub fn marker_scale(&self, id: &str) -> f32 {
        self.navigator.markers().scale(id)
    }

    /// Current emissive intensity of the marker `id`.
    #[wasm_bindgen(js_name = markerEmissive)]
    pub fn marker_emissive(&self, id: &str) -> f32 {
        self.navigator.markers().emissive_intensity(id)
    }

    /// CSS cursor for the canvas.
    pub fn cursor(&self) -> String {
        match self.navigator.markers().cursor() {
            CursorIcon::Pointer => "pointer".to_owned(),
            CursorIcon::Default => "auto".to_owned(),
        }
    }

    /// JSON Schema of the UI-exposed options, for building a settings panel.
    ///
    /// # Errors
    ///
    /// Serialization failure, as a string.
    #[wasm_bindgen(js_name = optionsSchema)]
    pub fn options_schema() -> Result<String, JsValue> {
        serde_json::to_string(&Options::json_schema())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Registered point ids in authoring order.
    #[wasm_bindgen(js_name = pointIds)]
    pub fn point_ids(&self) -> js_sys::Array {
        self.navigator
            .registry()
            .all()
            .iter()
            .map(|point| JsValue::from_str(point.id()))
            .collect()
    }

    /// Normalizing transform for a model with the given bounds, as
    /// `[offset_x, offset_y, offset_z, scale]`.
    #[wasm_bindgen(js_name = frameModel)]
    pub fn frame_model(&self, min: &[f32], max: &[f32]) -> Vec<f32> {
        let to_vec3 = |v: &[f32]| match v {
            [x, y, z, ..] => Vec3::new(*x, *y, *z),
            _ => Vec3::ZERO,
        };
        let framing = ModelFraming::from_bounds(
            to_vec3(min),
            to_vec3(max),
            &self.options.framing,
        );
        let [x, y, z] = framing.offset.to_array();
        vec![x, y, z, framing.scale]
    }
}

impl WebNavigator {
    fn dispatch(&mut self, event: InputEvent) -> Result<(), JsValue> {
        match self.input.handle_event(event) {
            Some(command) => self.run(command),
            None => Ok(()),
        }
    }

    fn run(&mut self, command: NavCommand) -> Result<(), JsValue> {
        let _ = self.navigator.execute(command)?;
        Ok(())
    }
}
