//! Input normalization: the only gate between loosely typed caller input
//! and the property engine.

use std::fmt;
use std::str::FromStr;

use crate::error::*;

/// Accepted concentration percentage, both kinds.
pub const CONCENTRATION_RANGE: (f64, f64) = (10.0, 90.0);

/// Accepted query temperature (°C).
pub const TEMPERATURE_RANGE: (f64, f64) = (-35.0, 125.0);

/// Which axis a concentration percentage is expressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConcentrationKind {
    Mass,
    Volume,
}

impl ConcentrationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConcentrationKind::Mass => "mass",
            ConcentrationKind::Volume => "volume",
        }
    }
}

impl fmt::Display for ConcentrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConcentrationKind {
    type Err = EgaspError;

    fn from_str(s: &str) -> Result<Self> {
        normalize_concentration_kind(s)
    }
}

/// Map a caller token onto a [`ConcentrationKind`].
///
/// Case-insensitive, surrounding whitespace ignored.  Accepted:
/// `mass`, `m`, `wt`, `weight`, `mass fraction` and `volume`, `v`, `vol`,
/// `volume fraction`.  Anything else is rejected; there is no default.
pub fn normalize_concentration_kind(token: &str) -> Result<ConcentrationKind> {
    let norm = token.trim().to_lowercase().replace(['_', '-'], " ");
    match norm.as_str() {
        "mass" | "m" | "wt" | "weight" | "mass fraction" | "mass concentration" => {
            Ok(ConcentrationKind::Mass)
        }
        "volume" | "v" | "vol" | "volume fraction" | "volume concentration" => {
            Ok(ConcentrationKind::Volume)
        }
        _ => Err(EgaspError::InvalidArgument {
            field: "concentration kind (expected volume/mass or v/m)",
            value: token.to_string(),
        }),
    }
}

/// Closed-interval check.  Never clamps.
///
/// NaN fails every comparison, so it is rejected as well.
pub fn validate_range(value: f64, min: f64, max: f64, label: &'static str) -> Result<f64> {
    if value >= min && value <= max {
        Ok(value)
    } else {
        Err(EgaspError::OutOfRange { field: label, value, min, max })
    }
}

// ── Validated inputs ────────────────────────────────────────────────

/// A concentration that passed [`CONCENTRATION_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentrationInput {
    kind: ConcentrationKind,
    value: f64,
}

impl ConcentrationInput {
    pub fn new(kind: ConcentrationKind, value: f64) -> Result<Self> {
        let (min, max) = CONCENTRATION_RANGE;
        let value = validate_range(value, min, max, "concentration")?;
        Ok(Self { kind, value })
    }

    /// Normalize a raw token and validate the percentage in one step.
    pub fn parse(raw_kind: &str, raw_value: f64) -> Result<Self> {
        Self::new(normalize_concentration_kind(raw_kind)?, raw_value)
    }

    pub fn kind(&self) -> ConcentrationKind { self.kind }

    /// Percentage, 0–100 scale.
    pub fn value(&self) -> f64 { self.value }
}

/// A temperature (°C) that passed [`TEMPERATURE_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureInput(f64);

impl TemperatureInput {
    pub fn new(celsius: f64) -> Result<Self> {
        let (min, max) = TEMPERATURE_RANGE;
        validate_range(celsius, min, max, "temperature").map(Self)
    }

    pub fn celsius(&self) -> f64 { self.0 }
}
