use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::interp::{Curve, Grid};
use crate::error::*;
use crate::properties::PropertyKey;

/// Dataset compiled into the library.
const BUNDLED_JSON: &str = include_str!("../../data/eg_water.json");

// ── On-disk form ────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct RawCurve {
    volume_pct: Vec<f64>,
    values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RawAxes {
    temperature_c: Vec<f64>,
    volume_pct: Vec<f64>,
}

type RawGrid = Vec<Vec<Option<f64>>>;

#[derive(Debug, Deserialize)]
struct RawTable {
    name: String,
    version: String,
    reference: Reference,
    freezing: RawCurve,
    boiling: RawCurve,
    grid: RawAxes,
    density: RawGrid,
    specific_heat: RawGrid,
    thermal_conductivity: RawGrid,
    viscosity: RawGrid,
}

// ── Mass ↔ volume reference ─────────────────────────────────────────

/// Pure-component densities at the reference temperature.
///
/// Volume concentration is the glycol volume over the summed volumes of
/// the unmixed components, both at `temperature_c`:
///
/// ```text
/// φ = (w/ρ_g) / (w/ρ_g + (1 − w)/ρ_w)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Reference {
    /// Reference temperature (°C)
    pub temperature_c: f64,
    /// Pure glycol density at the reference temperature (kg/m³)
    pub glycol_density: f64,
    /// Pure water density at the reference temperature (kg/m³)
    pub water_density: f64,
}

impl Reference {
    /// Mass percentage → volume percentage.
    pub fn mass_to_volume(&self, mass_pct: f64) -> f64 {
        let w = mass_pct / 100.0;
        let vg = w / self.glycol_density;
        let vw = (1.0 - w) / self.water_density;
        100.0 * vg / (vg + vw)
    }

    /// Volume percentage → mass percentage.
    pub fn volume_to_mass(&self, volume_pct: f64) -> f64 {
        let phi = volume_pct / 100.0;
        let mg = phi * self.glycol_density;
        let mw = (1.0 - phi) * self.water_density;
        100.0 * mg / (mg + mw)
    }
}

// ── Validated, immutable table ──────────────────────────────────────

/// The read-only correlation dataset backing every lookup.
///
/// Build it once with [`bundled`](Self::bundled),
/// [`from_path`](Self::from_path) or [`from_json_str`](Self::from_json_str);
/// every constructor runs the full integrity check, so an existing
/// table is always internally consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationTable {
    name: String,
    version: String,
    reference: Reference,
    freezing: Curve,
    boiling: Curve,
    density: Grid,
    specific_heat: Grid,
    thermal_conductivity: Grid,
    viscosity: Grid,
}

impl CorrelationTable {
    /// The dataset shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_JSON, "<bundled>")
    }

    /// Load a dataset file with the same layout as the bundled one.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EgaspError::Dataset(format!("{}: {e}", path.display())))?;
        Self::parse(&text, &path.display().to_string())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::parse(json, "<string>")
    }

    fn parse(json: &str, source: &str) -> Result<Self> {
        let raw: RawTable = serde_json::from_str(json)
            .map_err(|e| EgaspError::Dataset(format!("{source}: {e}")))?;
        let table = Self::from_raw(raw)?;
        info!(
            name = %table.name,
            version = %table.version,
            source,
            temperatures = table.density.temperature_axis().len(),
            concentrations = table.density.concentration_axis().len(),
            "correlation dataset loaded"
        );
        Ok(table)
    }

    fn from_raw(raw: RawTable) -> Result<Self> {
        check_reference(&raw.reference)?;

        let freezing = build_curve("freezing", raw.freezing)?;
        let boiling = build_curve("boiling", raw.boiling)?;

        check_axis("grid.temperature_c", &raw.grid.temperature_c)?;
        check_axis("grid.volume_pct", &raw.grid.volume_pct)?;
        let axes = &raw.grid;

        Ok(Self {
            name: raw.name,
            version: raw.version,
            reference: raw.reference,
            freezing,
            boiling,
            density: build_grid(PropertyKey::Density, axes, raw.density)?,
            specific_heat: build_grid(PropertyKey::SpecificHeat, axes, raw.specific_heat)?,
            thermal_conductivity: build_grid(
                PropertyKey::ThermalConductivity,
                axes,
                raw.thermal_conductivity,
            )?,
            viscosity: build_grid(PropertyKey::Viscosity, axes, raw.viscosity)?,
        })
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    /// Freezing point (°C) against volume concentration (%).
    ///
    /// Falls with concentration down to the eutectic (60 % volume in the
    /// bundled data) and rises again beyond it.
    pub fn freezing(&self) -> &Curve {
        &self.freezing
    }

    /// Boiling point (°C) against volume concentration (%).
    pub fn boiling(&self) -> &Curve {
        &self.boiling
    }

    /// Raw samples of one property, in table units (viscosity in µPa·s).
    pub fn grid(&self, key: PropertyKey) -> &Grid {
        match key {
            PropertyKey::Density => &self.density,
            PropertyKey::SpecificHeat => &self.specific_heat,
            PropertyKey::ThermalConductivity => &self.thermal_conductivity,
            PropertyKey::Viscosity => &self.viscosity,
        }
    }
}

// ── Integrity checks ────────────────────────────────────────────────

fn corrupt(msg: String) -> EgaspError {
    EgaspError::Dataset(msg)
}

fn check_axis(field: &str, axis: &[f64]) -> Result<()> {
    if axis.is_empty() {
        return Err(corrupt(format!("{field}: axis is empty")));
    }
    if let Some(x) = axis.iter().find(|x| !x.is_finite()) {
        return Err(corrupt(format!("{field}: non-finite axis value {x}")));
    }
    if let Some(w) = axis.windows(2).find(|w| w[0] >= w[1]) {
        return Err(corrupt(format!(
            "{field}: axis must be strictly increasing, found {} then {}",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn check_reference(r: &Reference) -> Result<()> {
    for (field, v) in [
        ("reference.temperature_c", r.temperature_c),
        ("reference.glycol_density", r.glycol_density),
        ("reference.water_density", r.water_density),
    ] {
        if !v.is_finite() {
            return Err(corrupt(format!("{field}: non-finite value {v}")));
        }
    }
    if r.glycol_density <= 0.0 || r.water_density <= 0.0 {
        return Err(corrupt(format!(
            "reference densities must be positive, got glycol {} and water {}",
            r.glycol_density, r.water_density
        )));
    }
    // both conversions must pin the ends of the percentage scale
    for (from, to) in [
        (0.0, r.mass_to_volume(0.0)),
        (100.0, r.mass_to_volume(100.0)),
        (0.0, r.volume_to_mass(0.0)),
        (100.0, r.volume_to_mass(100.0)),
    ] {
        if (to - from).abs() > 1e-9 {
            return Err(corrupt(format!(
                "reference conversion maps {from} % to {to} %, expected {from} %"
            )));
        }
    }
    Ok(())
}

fn build_curve(field: &str, raw: RawCurve) -> Result<Curve> {
    check_axis(&format!("{field}.volume_pct"), &raw.volume_pct)?;
    if raw.values.len() != raw.volume_pct.len() {
        return Err(corrupt(format!(
            "{field}: {} values for {} concentrations",
            raw.values.len(),
            raw.volume_pct.len()
        )));
    }
    if let Some(v) = raw.values.iter().find(|v| !v.is_finite()) {
        return Err(corrupt(format!("{field}: non-finite value {v}")));
    }
    Ok(Curve::new(raw.volume_pct, raw.values))
}

fn build_grid(key: PropertyKey, axes: &RawAxes, rows: RawGrid) -> Result<Grid> {
    let field = key.name();
    let (nt, nc) = (axes.temperature_c.len(), axes.volume_pct.len());
    if rows.len() != nt {
        return Err(corrupt(format!(
            "{field}: {} rows for {nt} temperatures",
            rows.len()
        )));
    }

    let mut values = Vec::with_capacity(nt * nc);
    for (row, t) in rows.into_iter().zip(&axes.temperature_c) {
        if row.len() != nc {
            return Err(corrupt(format!(
                "{field}: row at {t} °C has {} values for {nc} concentrations",
                row.len()
            )));
        }
        for (v, c) in row.into_iter().zip(&axes.volume_pct) {
            if let Some(v) = v {
                if !(v.is_finite() && v > 0.0) {
                    return Err(corrupt(format!(
                        "{field}: sample at ({t} °C, {c} %) must be finite and positive, got {v}"
                    )));
                }
            }
            values.push(v);
        }
    }
    if values.iter().all(Option::is_none) {
        return Err(corrupt(format!("{field}: grid holds no samples")));
    }

    Ok(Grid::new(axes.temperature_c.clone(), axes.volume_pct.clone(), values))
}
