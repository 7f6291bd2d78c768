//! # egasp
//!
//! Property lookup for **ethylene-glycol / water** mixtures: freezing
//! and boiling points, density, specific heat, thermal conductivity and
//! viscosity, interpolated from a fixed correlation table.
//!
//! ## Highlights
//!
//! * **Either concentration axis** — give mass or volume percent, get both back
//! * **Strict inputs** — concentration 10–90 %, temperature −35–125 °C, rejected (never clamped) outside
//! * **No extrapolation** — points outside the sampled envelope fail with [`EgaspError::Domain`]
//! * **Configurable units** — canonical °C, kg/m³, J/(kg·K), W/(m·K), Pa·s, or any [`UnitSystem`]
//! * **Immutable data** — the table is validated once at load and shared freely across threads
//!
//! ## Quick example
//!
//! ```
//! use egasp::Glycol;
//!
//! let eg = Glycol::new()?;
//! let r = eg.query("volume", 50.0, -15.0)?;
//! println!("w = {:.2} %, T_f = {:.1} °C", r.mass_pct, r.freezing_point);
//! println!("rho = {:.2} kg/m³, mu = {:.6} Pa·s", r.density, r.viscosity);
//! # Ok::<(), egasp::EgaspError>(())
//! ```
//!
//! ## Unit system
//!
//! ```
//! use egasp::{Glycol, UnitSystem, TempUnit, ViscosityUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Kelvin)
//!     .viscosity(ViscosityUnit::MilliPaS);
//! let eg = Glycol::with_units(units)?;
//! let mu = eg.get("viscosity", 20.0, 40.0)?;   // mPa·s
//! # Ok::<(), egasp::EgaspError>(())
//! ```
//!
//! ## Custom datasets
//!
//! The bundled table follows the layout of the usual handbook tables, but
//! its glycol columns come from smooth synthetic correlations (the dataset
//! name says so).  Check the values against a vetted source before using
//! them for design work.
//!
//! [`Glycol::from_env`] reads the dataset named by `EGASP_DATA` (also
//! picked up from a `.env` file); [`Glycol::from_table`] takes any
//! [`CorrelationTable`], e.g. a synthetic one built with
//! [`CorrelationTable::from_json_str`].

// ── Internal modules ─────────────────────────────────────────────────
pub mod backend;
pub mod engine;
pub mod error;
pub mod glycol;
pub mod properties;
pub mod validate;

// ── Public re-exports ────────────────────────────────────────────────
pub use backend::interp::{Curve, Grid, GridMiss};
pub use backend::table::{CorrelationTable, Reference};
pub use engine::{PropertyEngine, VISCOSITY_TABLE_TO_PA_S};
pub use error::{EgaspError, Result};
pub use glycol::{DATA_ENV, Glycol};
pub use properties::{ConcentrationProps, PropertyKey, PropertyQueryResult};
pub use validate::{
    CONCENTRATION_RANGE, ConcentrationInput, ConcentrationKind, TEMPERATURE_RANGE,
    TemperatureInput, normalize_concentration_kind, validate_range,
};

pub use converter::{
    Converter, UnitSystem,
    TempUnit, DensityUnit, HeatCapacityUnit, ViscosityUnit, ConductivityUnit,
};
