use std::fmt;
use std::str::FromStr;

use crate::error::*;

// ── Property keys ───────────────────────────────────────────────────

/// The four (temperature, concentration) dependent properties held in
/// the correlation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Density,
    SpecificHeat,
    ThermalConductivity,
    Viscosity,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 4] = [
        PropertyKey::Density,
        PropertyKey::SpecificHeat,
        PropertyKey::ThermalConductivity,
        PropertyKey::Viscosity,
    ];

    /// Canonical name, also the dataset field name.
    pub fn name(self) -> &'static str {
        match self {
            PropertyKey::Density => "density",
            PropertyKey::SpecificHeat => "specific_heat",
            PropertyKey::ThermalConductivity => "thermal_conductivity",
            PropertyKey::Viscosity => "viscosity",
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PropertyKey {
    type Err = EgaspError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "density" | "rho" => Ok(PropertyKey::Density),
            "specific_heat" | "cp" => Ok(PropertyKey::SpecificHeat),
            "thermal_conductivity" | "k" => Ok(PropertyKey::ThermalConductivity),
            "viscosity" | "mu" => Ok(PropertyKey::Viscosity),
            _ => Err(EgaspError::InvalidArgument {
                field: "property key (expected density/specific_heat/thermal_conductivity/viscosity)",
                value: s.to_string(),
            }),
        }
    }
}

// ── Concentration-only results ──────────────────────────────────────

/// Both concentration representations plus the two phase-change
/// temperatures of the mixture.
///
/// Concentrations are percentages.  `freezing` and `boiling` are in °C
/// from the [`PropertyEngine`](crate::PropertyEngine), and in the
/// temperature unit of the [`UnitSystem`](converter::UnitSystem) when
/// returned by [`Glycol`](crate::Glycol).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcentrationProps {
    pub mass_pct: f64,
    pub volume_pct: f64,
    /// Freezing point
    pub freezing: f64,
    /// Boiling point at atmospheric pressure
    pub boiling: f64,
}

impl fmt::Display for ConcentrationProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "w   = {:.2} % (mass)", self.mass_pct)?;
        writeln!(f, "phi = {:.2} % (volume)", self.volume_pct)?;
        writeln!(f, "T_f = {:.2}", self.freezing)?;
        write!(f, "T_b = {:.2}", self.boiling)
    }
}

// ── Full query result ───────────────────────────────────────────────

/// Everything known about the mixture at one (concentration,
/// temperature) point.
///
/// Units follow the [`UnitSystem`](converter::UnitSystem) of the
/// [`Glycol`](crate::Glycol) that produced it; the default is
/// °C, kg/m³, J/(kg·K), W/(m·K), Pa·s.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQueryResult {
    pub mass_pct: f64,
    pub volume_pct: f64,
    pub freezing_point: f64,
    pub boiling_point: f64,
    pub density: f64,
    pub specific_heat: f64,
    pub thermal_conductivity: f64,
    pub viscosity: f64,
}

impl PropertyQueryResult {
    pub fn get(&self, key: PropertyKey) -> f64 {
        match key {
            PropertyKey::Density => self.density,
            PropertyKey::SpecificHeat => self.specific_heat,
            PropertyKey::ThermalConductivity => self.thermal_conductivity,
            PropertyKey::Viscosity => self.viscosity,
        }
    }
}

impl fmt::Display for PropertyQueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "w   = {:.2} %", self.mass_pct)?;
        writeln!(f, "phi = {:.2} %", self.volume_pct)?;
        writeln!(f, "T_f = {:.2}", self.freezing_point)?;
        writeln!(f, "T_b = {:.2}", self.boiling_point)?;
        writeln!(f, "rho = {:.2}", self.density)?;
        writeln!(f, "cp  = {:.2}", self.specific_heat)?;
        writeln!(f, "k   = {:.4}", self.thermal_conductivity)?;
        write!(f, "mu  = {:.8}", self.viscosity)
    }
}
