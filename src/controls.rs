//! Parameterbesturing voor de knoop-UI.
//!
//! Elke parameter gedraagt zich als een slider met een minimum, maximum en
//! stapgrootte. Waarden worden eerst begrensd en daarna op de stap
//! gekwantiseerd, net zoals een UI-slider dat zou doen.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use serde::Serialize;
use thiserror::Error;

use crate::knot::CurveParameters;

/// Fouten bij het instellen van een parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    /// Geen parameter met deze id of naam.
    #[error("onbekende parameterreferentie `{0}`")]
    UnknownParameter(String),
    /// De waarde is NaN of oneindig.
    #[error("waarde voor `{0}` moet een eindig getal zijn")]
    NonFinite(&'static str),
}

/// Identificatie van de zes instelbare parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterId {
    A,
    B,
    C,
    Phi1,
    Phi2,
    NPoints,
}

impl ParameterId {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::Phi1 => "phi1",
            Self::Phi2 => "phi2",
            Self::NPoints => "n_points",
        }
    }
}

/// Slider-specificatie van een parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    pub id: ParameterId,
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// De parametertabel, in UI-volgorde.
pub const PARAMETER_SPECS: [ParameterSpec; 6] = [
    ParameterSpec {
        id: ParameterId::A,
        name: "A",
        min: 1.0,
        max: 20.0,
        step: 1.0,
        default: 3.0,
    },
    ParameterSpec {
        id: ParameterId::B,
        name: "B",
        min: 1.0,
        max: 20.0,
        step: 1.0,
        default: 4.0,
    },
    ParameterSpec {
        id: ParameterId::C,
        name: "C",
        min: 1.0,
        max: 20.0,
        step: 1.0,
        default: 2.0,
    },
    ParameterSpec {
        id: ParameterId::Phi1,
        name: "ϕ1 [0 to 2π]",
        min: 0.0,
        max: TAU,
        step: FRAC_PI_4,
        default: FRAC_PI_2,
    },
    ParameterSpec {
        id: ParameterId::Phi2,
        name: "ϕ2 [0 to 2π]",
        min: 0.0,
        max: TAU,
        step: FRAC_PI_4,
        default: FRAC_PI_2,
    },
    ParameterSpec {
        id: ParameterId::NPoints,
        name: "Number of points",
        min: 10.0,
        max: 600.0,
        step: 10.0,
        default: 100.0,
    },
];

impl ParameterSpec {
    /// Begrenst `value` tot `[min, max]` en rondt af op de stapgrootte.
    pub fn quantise(&self, value: f64) -> Result<f64, ControlError> {
        if !value.is_finite() {
            return Err(ControlError::NonFinite(self.id.key()));
        }

        let mut clamped = clamp(value, self.min, self.max);
        if self.step > 0.0 {
            let steps = ((clamped - self.min) / self.step).round();
            clamped = clamp(self.min + steps * self.step, self.min, self.max);
        }
        Ok(clamped)
    }
}

/// Zoekt een parameter op id (`"phi1"`) of naam (`"ϕ1 [0 to 2π]"`).
#[must_use]
pub fn find_parameter(id_or_name: &str) -> Option<&'static ParameterSpec> {
    let trimmed = id_or_name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = normalize_name(trimmed);

    PARAMETER_SPECS
        .iter()
        .find(|spec| spec.id.key() == normalized || normalize_name(spec.name) == normalized)
}

/// Huidige waarde van een parameter.
#[must_use]
pub fn parameter_value(params: &CurveParameters, id: ParameterId) -> f64 {
    match id {
        ParameterId::A => params.a,
        ParameterId::B => params.b,
        ParameterId::C => params.c,
        ParameterId::Phi1 => params.phi1,
        ParameterId::Phi2 => params.phi2,
        ParameterId::NPoints => params.n_points as f64,
    }
}

/// Zet een parameter na begrenzing en kwantisatie; geeft de opgeslagen
/// waarde terug.
pub fn apply_parameter(
    params: &mut CurveParameters,
    spec: &ParameterSpec,
    value: f64,
) -> Result<f64, ControlError> {
    let value = spec.quantise(value)?;
    match spec.id {
        ParameterId::A => params.a = value,
        ParameterId::B => params.b = value,
        ParameterId::C => params.c = value,
        ParameterId::Phi1 => params.phi1 = value,
        ParameterId::Phi2 => params.phi2 = value,
        // quantise houdt de waarde binnen [10, 600] op een veelvoud van 10
        ParameterId::NPoints => params.n_points = value as usize,
    }
    Ok(value)
}

/// Bouwt parameters uit ruwe UI-waarden, elk via zijn slider-specificatie.
pub fn parameters_from_inputs(
    a: f64,
    b: f64,
    c: f64,
    phi1: f64,
    phi2: f64,
    n_points: f64,
) -> Result<CurveParameters, ControlError> {
    let mut params = CurveParameters::default();
    for (spec, value) in PARAMETER_SPECS.iter().zip([a, b, c, phi1, phi2, n_points]) {
        apply_parameter(&mut params, spec, value)?;
    }
    Ok(params)
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
