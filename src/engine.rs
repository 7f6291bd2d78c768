use tracing::debug;

use crate::backend::table::CorrelationTable;
use crate::error::*;
use crate::properties::*;
use crate::validate::ConcentrationKind;

/// Table viscosity (µPa·s) → canonical output (Pa·s).  Applied once,
/// after interpolation.
pub const VISCOSITY_TABLE_TO_PA_S: f64 = 1.0e-6;

/// Pure lookups against one [`CorrelationTable`].
///
/// The engine trusts its inputs to have passed the validator; the only
/// failures it raises itself are envelope misses
/// ([`EgaspError::Domain`]).  Results are in canonical units:
/// °C, kg/m³, J/(kg·K), W/(m·K), Pa·s.
#[derive(Debug, Clone)]
pub struct PropertyEngine {
    table: CorrelationTable,
}

impl PropertyEngine {
    pub fn new(table: CorrelationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CorrelationTable {
        &self.table
    }

    /// `(mass_pct, volume_pct)` for a concentration given on either axis,
    /// via the dataset's reference densities.
    pub fn convert(&self, value: f64, from: ConcentrationKind) -> (f64, f64) {
        let r = self.table.reference();
        match from {
            ConcentrationKind::Mass => (value, r.mass_to_volume(value)),
            ConcentrationKind::Volume => (r.volume_to_mass(value), value),
        }
    }

    /// Freezing point (°C) at a volume concentration (%).
    pub fn freezing_point(&self, volume_pct: f64) -> Result<f64> {
        let curve = self.table.freezing();
        curve.eval(volume_pct).ok_or_else(|| curve_miss("freezing point", curve.domain(), volume_pct))
    }

    /// Boiling point (°C) at atmospheric pressure and a volume
    /// concentration (%).
    pub fn boiling_point(&self, volume_pct: f64) -> Result<f64> {
        let curve = self.table.boiling();
        curve.eval(volume_pct).ok_or_else(|| curve_miss("boiling point", curve.domain(), volume_pct))
    }

    /// Interpolated property at (temperature °C, volume %).
    pub fn property_value(&self, temperature: f64, volume_pct: f64, key: PropertyKey) -> Result<f64> {
        let raw = self
            .table
            .grid(key)
            .eval(temperature, volume_pct)
            .map_err(|miss| EgaspError::Domain {
                property: key.name(),
                temperature: Some(temperature),
                volume_pct,
                detail: miss.to_string(),
            })?;

        let value = match key {
            PropertyKey::Viscosity => raw * VISCOSITY_TABLE_TO_PA_S,
            _ => raw,
        };
        debug!(property = key.name(), temperature, volume_pct, value, "property resolved");
        Ok(value)
    }

    /// Mass/volume concentration plus freezing and boiling points.
    pub fn concentration_props(&self, value: f64, from: ConcentrationKind) -> Result<ConcentrationProps> {
        let (mass_pct, volume_pct) = self.convert(value, from);
        let props = ConcentrationProps {
            mass_pct,
            volume_pct,
            freezing: self.freezing_point(volume_pct)?,
            boiling: self.boiling_point(volume_pct)?,
        };
        debug!(kind = %from, value, ?props, "concentration resolved");
        Ok(props)
    }
}

fn curve_miss(property: &'static str, (min, max): (f64, f64), volume_pct: f64) -> EgaspError {
    EgaspError::Domain {
        property,
        temperature: None,
        volume_pct,
        detail: format!("volume concentration outside sampled range [{min}, {max}] %"),
    }
}
