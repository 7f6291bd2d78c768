use converter::{Converter, UnitSystem};
use tracing::warn;

use crate::backend::table::CorrelationTable;
use crate::engine::PropertyEngine;
use crate::error::*;
use crate::properties::*;
use crate::validate::*;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Once;

/// Environment variable naming an external dataset file.
pub const DATA_ENV: &str = "EGASP_DATA";

/// High‑level entry point for ethylene-glycol/water property queries.
///
/// Validates raw caller input, then delegates to a [`PropertyEngine`].
/// An optional [`UnitSystem`] selects output units; query temperatures
/// are always given in °C.
///
/// # Quick example
/// ```
/// use egasp::{Glycol, PropertyKey};
///
/// let eg = Glycol::new()?;
/// let c = eg.resolve_concentrations("volume", 50.0)?;
/// let rho = eg.resolve_property(20.0, c.volume_pct, PropertyKey::Density)?;
/// println!("freezes at {:.1} °C, density {rho:.1} kg/m³", c.freezing);
/// # Ok::<(), egasp::EgaspError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Glycol {
    engine: PropertyEngine,
    conv: Converter,
}

impl Glycol {
    // ── Constructors ─────────────────────────────────────────────────

    /// Bundled dataset, canonical units.
    pub fn new() -> Result<Self> {
        Self::with_units(UnitSystem::table())
    }

    /// Bundled dataset with a **custom unit system**.
    ///
    /// ```
    /// use egasp::{Glycol, UnitSystem};
    ///
    /// let eg = Glycol::with_units(UnitSystem::engineering())?;
    /// let mu = eg.get("mu", 20.0, 50.0)?;   // mPa·s
    /// # Ok::<(), egasp::EgaspError>(())
    /// ```
    pub fn with_units(units: UnitSystem) -> Result<Self> {
        Ok(Self::from_table_with_units(CorrelationTable::bundled()?, units))
    }

    /// Dataset chosen by the environment: the file named by
    /// `EGASP_DATA` (also read from `.env`), else the bundled one.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_units(UnitSystem::table())
    }

    pub fn from_env_with_units(units: UnitSystem) -> Result<Self> {
        Self::load_dotenv();
        let table = match Self::find_data_path()? {
            Some(path) => CorrelationTable::from_path(&path)?,
            None => CorrelationTable::bundled()?,
        };
        Ok(Self::from_table_with_units(table, units))
    }

    /// Caller-supplied table (e.g. a synthetic one in tests).
    pub fn from_table(table: CorrelationTable) -> Self {
        Self::from_table_with_units(table, UnitSystem::table())
    }

    pub fn from_table_with_units(table: CorrelationTable, units: UnitSystem) -> Self {
        Self { engine: PropertyEngine::new(table), conv: Converter::new(units) }
    }

    // ── .env loading (once) ──────────────────────────────────────────

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            match dotenvy::dotenv() {
                Ok(_) => return,
                Err(e) if !e.not_found() => warn!("ignoring unreadable .env: {e}"),
                Err(_) => {}
            }
            if let Ok(dir) = env::var("CARGO_MANIFEST_DIR") {
                let p = PathBuf::from(dir).join(".env");
                if p.exists() {
                    if let Err(e) = dotenvy::from_path(&p) {
                        warn!("ignoring unreadable {}: {e}", p.display());
                    }
                    return;
                }
            }
            if let Ok(exe) = env::current_exe() {
                if let Some(dir) = exe.parent() {
                    let p = dir.join(".env");
                    if p.exists() {
                        if let Err(e) = dotenvy::from_path(&p) {
                            warn!("ignoring unreadable {}: {e}", p.display());
                        }
                    }
                }
            }
        });
    }

    // ── Path discovery ───────────────────────────────────────────────

    /// `Ok(None)` when no external dataset is configured.
    fn find_data_path() -> Result<Option<PathBuf>> {
        let Ok(path) = env::var(DATA_ENV) else {
            return Ok(None);
        };
        if Path::new(&path).is_file() {
            return Ok(Some(PathBuf::from(path)));
        }
        Err(EgaspError::Dataset(format!(
            "{DATA_ENV}={path} does not name a readable file.\n\
             Unset {DATA_ENV} to use the bundled dataset, or point it at a \
             JSON file with the same layout as data/eg_water.json."
        )))
    }

    // ── Public API ───────────────────────────────────────────────────

    /// Normalize the kind, validate the percentage against [10, 90] and
    /// resolve both representations plus freezing/boiling points.
    ///
    /// Freezing and boiling points are in the configured temperature unit.
    pub fn resolve_concentrations(&self, raw_kind: &str, raw_pct: f64) -> Result<ConcentrationProps> {
        let input = ConcentrationInput::parse(raw_kind, raw_pct)?;
        let props = self.engine.concentration_props(input.value(), input.kind())?;
        Ok(ConcentrationProps {
            freezing: self.conv.t_from_table(props.freezing),
            boiling: self.conv.t_from_table(props.boiling),
            ..props
        })
    }

    /// Validate the temperature (°C) against [−35, 125], then interpolate
    /// `key` at `(temperature_c, volume_pct)`.
    pub fn resolve_property(&self, temperature_c: f64, volume_pct: f64, key: PropertyKey) -> Result<f64> {
        let t = TemperatureInput::new(temperature_c)?;
        let raw = self.engine.property_value(t.celsius(), volume_pct, key)?;
        Ok(self.conv.output_from_table(key.name(), raw))
    }

    /// **Generic property lookup** by name — `"rho"`, `"cp"`, `"k"`,
    /// `"mu"` or the long names.
    ///
    /// ```
    /// # use egasp::Glycol;
    /// let eg = Glycol::new()?;
    /// let cp = eg.get("cp", 40.0, 30.0)?;   // J/(kg·K)
    /// # Ok::<(), egasp::EgaspError>(())
    /// ```
    pub fn get(&self, key: &str, temperature_c: f64, volume_pct: f64) -> Result<f64> {
        self.resolve_property(temperature_c, volume_pct, key.parse()?)
    }

    /// Whole query in one call: concentrations, phase-change points and
    /// all four properties at the resolved volume concentration.
    pub fn query(&self, raw_kind: &str, raw_pct: f64, temperature_c: f64) -> Result<PropertyQueryResult> {
        let c = self.resolve_concentrations(raw_kind, raw_pct)?;
        let t = TemperatureInput::new(temperature_c)?;

        let [density, specific_heat, thermal_conductivity, viscosity] =
            PropertyKey::ALL.map(|key| self.resolve_property(t.celsius(), c.volume_pct, key));

        Ok(PropertyQueryResult {
            mass_pct: c.mass_pct,
            volume_pct: c.volume_pct,
            freezing_point: c.freezing,
            boiling_point: c.boiling,
            density: density?,
            specific_heat: specific_heat?,
            thermal_conductivity: thermal_conductivity?,
            viscosity: viscosity?,
        })
    }

    /// The underlying engine (canonical units, no validation).
    pub fn engine(&self) -> &PropertyEngine {
        &self.engine
    }

    /// Access the active converter (useful for labels and manual
    /// conversions).
    pub fn converter(&self) -> &Converter {
        &self.conv
    }
}
