#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod controls;
pub mod knot;
pub mod scene;

use std::fmt;

use controls::{ParameterSpec, PARAMETER_SPECS};
use knot::{CurveParameters, KnotResult};
use scene::{Camera, CameraPreset, Scene, SceneOptions};
use serde::Serialize;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

#[derive(Debug, Serialize)]
struct ParameterExport {
    id: &'static str,
    name: &'static str,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
}

impl ParameterExport {
    fn new(spec: &ParameterSpec, params: &CurveParameters) -> Self {
        Self {
            id: spec.id.key(),
            name: spec.name,
            min: spec.min,
            max: spec.max,
            step: spec.step,
            value: controls::parameter_value(params, spec.id),
        }
    }
}

/// Berekent een volledige scène voor een parametertuple.
///
/// Dit is de enkelvoudige request/response-stap achter elke UI-wijziging:
/// samplen, offsets bepalen en de scène opbouwen.
pub fn render_scene(params: &CurveParameters, options: &SceneOptions) -> KnotResult<Scene> {
    let (curve, offsets) = knot::sample_knot(params)?;
    scene::build_scene_with_options(&curve, &offsets, options)
}

/// Publiek toegangspunt voor de browser.
#[wasm_bindgen]
pub struct Engine {
    initialized: bool,
    params: CurveParameters,
    options: SceneOptions,
    scene: Option<Scene>,
    active_camera: Camera,
    dirty: bool,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Engine {
        Engine {
            initialized: true,
            params: CurveParameters::default(),
            options: SceneOptions::default(),
            scene: None,
            active_camera: scene::default_camera(),
            dirty: true,
        }
    }

    /// Geeft terug of de engine de minimale initialisatie heeft doorlopen.
    #[wasm_bindgen]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Haal parameter-specificaties op voor UI-generatie.
    #[wasm_bindgen]
    pub fn get_parameters(&self) -> Result<JsValue, JsValue> {
        let exports: Vec<ParameterExport> = PARAMETER_SPECS
            .iter()
            .map(|spec| ParameterExport::new(spec, &self.params))
            .collect();
        serde_wasm_bindgen::to_value(&exports).map_err(to_js_error)
    }

    /// Stel een parameterwaarde in op basis van id of naam.
    #[wasm_bindgen]
    pub fn set_parameter(&mut self, id_or_name: &str, value: f64) -> Result<f64, JsValue> {
        self.update_parameter(id_or_name, value).map_err(to_js_error)
    }

    /// Vervang de figuuropties (titel, afmetingen, lijnstijlen).
    #[wasm_bindgen]
    pub fn set_scene_options(&mut self, options: JsValue) -> Result<(), JsValue> {
        let options: SceneOptions = serde_wasm_bindgen::from_value(options).map_err(to_js_error)?;
        self.update_options(options);
        Ok(())
    }

    /// Evalueer de huidige parameters; doet niets als er niets gewijzigd is.
    #[wasm_bindgen]
    pub fn evaluate(&mut self) -> Result<(), JsValue> {
        self.evaluate_scene().map_err(to_js_error)
    }

    /// Haalt de scène van de laatste evaluatie op.
    #[wasm_bindgen]
    pub fn get_scene(&self) -> Result<JsValue, JsValue> {
        let scene = self
            .scene()
            .ok_or_else(|| js_error("scène is nog niet geëvalueerd"))?;
        serde_wasm_bindgen::to_value(scene).map_err(to_js_error)
    }

    /// Zet alle zes parameters in één keer, evalueer en geef de scène terug.
    #[wasm_bindgen]
    pub fn render(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        phi1: f64,
        phi2: f64,
        n_points: f64,
    ) -> Result<JsValue, JsValue> {
        let params = controls::parameters_from_inputs(a, b, c, phi1, phi2, n_points)
            .map_err(to_js_error)?;
        self.replace_parameters(params);
        self.evaluate()?;
        self.get_scene()
    }

    /// Lijst van beschikbare camerastanden.
    #[wasm_bindgen]
    pub fn get_camera_presets(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&scene::CAMERA_PRESETS).map_err(to_js_error)
    }

    /// Wissel van camerastand zonder de curve opnieuw te berekenen.
    #[wasm_bindgen]
    pub fn select_camera(&mut self, name: &str) -> Result<JsValue, JsValue> {
        let preset = self
            .choose_camera(name)
            .ok_or_else(|| js_error("onbekende camerastand"))?;
        serde_wasm_bindgen::to_value(&preset.camera).map_err(to_js_error)
    }

    /// Camera die als laatste gekozen is.
    #[wasm_bindgen]
    pub fn get_active_camera(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.active_camera).map_err(to_js_error)
    }
}

impl Engine {
    /// Huidige parametertuple.
    #[must_use]
    pub fn parameters(&self) -> &CurveParameters {
        &self.params
    }

    /// Scène van de laatste evaluatie, `None` zolang er wijzigingen openstaan.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        if self.dirty { None } else { self.scene.as_ref() }
    }

    #[must_use]
    pub fn active_camera(&self) -> Camera {
        self.active_camera
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Begrenst, kwantiseert en bewaart een parameter; geeft de opgeslagen
    /// waarde terug.
    pub fn update_parameter(
        &mut self,
        id_or_name: &str,
        value: f64,
    ) -> Result<f64, controls::ControlError> {
        let spec = controls::find_parameter(id_or_name)
            .ok_or_else(|| controls::ControlError::UnknownParameter(id_or_name.trim().to_owned()))?;
        let stored = controls::apply_parameter(&mut self.params, spec, value)?;
        self.dirty = true;
        Ok(stored)
    }

    pub fn replace_parameters(&mut self, params: CurveParameters) {
        if params != self.params {
            self.params = params;
            self.dirty = true;
        }
    }

    pub fn update_options(&mut self, options: SceneOptions) {
        if options != self.options {
            self.options = options;
            self.dirty = true;
        }
    }

    /// Herberekent sampler en scène, alleen als er iets gewijzigd is.
    pub fn evaluate_scene(&mut self) -> KnotResult<()> {
        if !self.dirty && self.scene.is_some() {
            return Ok(());
        }

        let scene = render_scene(&self.params, &self.options)?;
        debug_log!(
            "knoop geëvalueerd: {} segmenten voor {} punten",
            scene.segment_count(),
            self.params.n_points
        );
        self.scene = Some(scene);
        self.dirty = false;
        Ok(())
    }

    /// Kiest een camerastand; de scène blijft ongemoeid.
    pub fn choose_camera(&mut self, name: &str) -> Option<&'static CameraPreset> {
        let preset = scene::camera_preset(name)?;
        self.active_camera = preset.camera;
        Some(preset)
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen::JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, render_scene};
    use crate::knot::CurveParameters;
    use crate::scene::{GroupKind, SceneOptions};

    #[test]
    fn scene_requires_evaluation() {
        let mut engine = Engine::new();
        assert!(engine.scene().is_none());
        engine.evaluate_scene().expect("default parameters are valid");
        assert_eq!(
            engine.scene().map(|scene| scene.groups.len()),
            Some(GroupKind::ALL.len())
        );
    }

    #[test]
    fn parameter_update_marks_dirty() {
        let mut engine = Engine::new();
        engine.evaluate_scene().expect("evaluates");
        assert!(!engine.is_dirty());

        let stored = engine.update_parameter("n_points", 42.0).expect("known id");
        assert_eq!(stored, 40.0);
        assert!(engine.is_dirty());
        assert!(engine.scene().is_none());

        engine.evaluate_scene().expect("evaluates");
        let knot = engine
            .scene()
            .and_then(|scene| scene.group(GroupKind::Knot))
            .expect("knot group");
        assert_eq!(knot.segments.len(), 40);
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let mut engine = Engine::new();
        assert!(engine.update_parameter("onbekend", 1.0).is_err());
        assert!(engine.set_parameter("onbekend", 1.0).is_err());
    }

    #[test]
    fn camera_switch_keeps_scene() {
        let mut engine = Engine::new();
        engine.evaluate_scene().expect("evaluates");
        let before = engine.scene().cloned();

        let preset = engine.choose_camera("Rear").expect("rear preset");
        assert_eq!(preset.camera.up, [0.0, 1.0, 1.0]);
        assert_eq!(engine.active_camera().eye, [0.0, -2.5, 0.0]);
        assert!(!engine.is_dirty());
        assert_eq!(engine.scene().cloned(), before);
        assert!(engine.choose_camera("Sideways").is_none());
    }

    #[test]
    fn render_scene_is_deterministic() {
        let params = CurveParameters::default();
        let options = SceneOptions::default();
        let first = render_scene(&params, &options).expect("renders");
        let second = render_scene(&params, &options).expect("renders");
        assert_eq!(first, second);
    }
}
