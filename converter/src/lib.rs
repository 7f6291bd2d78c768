//! Configurable unit conversion for glycol property values.
//!
//! The correlation engine always answers in its canonical units:
//! **°C, kg/m³, J/(kg·K), W/(m·K), Pa·s**.  This crate lets you work in
//! whatever units you prefer (K, kJ/(kg·K), mPa·s, …) and handles the
//! conversion transparently.
//!
//! # Presets
//!
//! | Preset          | T   | D     | Cp         | k        | µ     |
//! |-----------------|-----|-------|------------|----------|-------|
//! | `table()`       | °C  | kg/m³ | J/(kg·K)   | W/(m·K)  | Pa·s  |
//! | `engineering()` | °C  | kg/m³ | kJ/(kg·K)  | W/(m·K)  | mPa·s |
//! | `si()`          | K   | kg/m³ | J/(kg·K)   | W/(m·K)  | Pa·s  |
//!
//! # Builder
//!
//! ```
//! use converter::{UnitSystem, TempUnit, ViscosityUnit};
//!
//! let units = UnitSystem::new()
//!     .temperature(TempUnit::Kelvin)
//!     .viscosity(ViscosityUnit::MilliPaS);
//! ```

// ────────────────────────────────────────────────────────────────────
//  Unit enums
// ────────────────────────────────────────────────────────────────────

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    /// Degrees Celsius (table native)
    Celsius,
    /// Kelvin
    Kelvin,
    /// Degrees Fahrenheit
    Fahrenheit,
}

/// Density unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnit {
    /// kg/m³ (table native)
    KgPerM3,
    /// g/cm³
    GPerCm3,
}

/// Specific heat capacity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatCapacityUnit {
    /// J/(kg·K) (table native)
    JPerKgK,
    /// kJ/(kg·K)
    KJPerKgK,
}

/// Dynamic viscosity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViscosityUnit {
    /// Pa·s (engine canonical)
    PaS,
    /// mPa·s (= centipoise)
    MilliPaS,
    /// µPa·s
    MicroPaS,
}

/// Thermal conductivity unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConductivityUnit {
    /// W/(m·K) (table native)
    WPerMK,
    /// mW/(m·K)
    MilliWPerMK,
}

impl TempUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TempUnit::Celsius    => "°C",
            TempUnit::Kelvin     => "K",
            TempUnit::Fahrenheit => "°F",
        }
    }
}

impl DensityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KgPerM3 => "kg/m³",
            DensityUnit::GPerCm3 => "g/cm³",
        }
    }
}

impl HeatCapacityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            HeatCapacityUnit::JPerKgK  => "J/(kg·K)",
            HeatCapacityUnit::KJPerKgK => "kJ/(kg·K)",
        }
    }
}

impl ViscosityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ViscosityUnit::PaS      => "Pa·s",
            ViscosityUnit::MilliPaS => "mPa·s",
            ViscosityUnit::MicroPaS => "µPa·s",
        }
    }
}

impl ConductivityUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            ConductivityUnit::WPerMK      => "W/(m·K)",
            ConductivityUnit::MilliWPerMK => "mW/(m·K)",
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  UnitSystem — user configuration
// ────────────────────────────────────────────────────────────────────

/// Describes the set of units the user wants results in.
///
/// Create one with a preset (`table()`, `engineering()`, `si()`) or
/// customise individual quantities with the builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitSystem {
    pub temperature:   TempUnit,
    pub density:       DensityUnit,
    pub heat_capacity: HeatCapacityUnit,
    pub conductivity:  ConductivityUnit,
    pub viscosity:     ViscosityUnit,
}

impl UnitSystem {
    /// Start from the canonical table units.  Use the builder methods
    /// to change individual quantities.
    pub fn new() -> Self { Self::table() }

    // ── Presets ──────────────────────────────────────────────────────

    /// Canonical: °C, kg/m³, J/(kg·K), W/(m·K), Pa·s.
    pub fn table() -> Self {
        Self {
            temperature:   TempUnit::Celsius,
            density:       DensityUnit::KgPerM3,
            heat_capacity: HeatCapacityUnit::JPerKgK,
            conductivity:  ConductivityUnit::WPerMK,
            viscosity:     ViscosityUnit::PaS,
        }
    }

    /// Engineering / HVAC: °C, kg/m³, kJ/(kg·K), W/(m·K), mPa·s.
    pub fn engineering() -> Self {
        Self {
            temperature:   TempUnit::Celsius,
            density:       DensityUnit::KgPerM3,
            heat_capacity: HeatCapacityUnit::KJPerKgK,
            conductivity:  ConductivityUnit::WPerMK,
            viscosity:     ViscosityUnit::MilliPaS,
        }
    }

    /// Strict SI: K, kg/m³, J/(kg·K), W/(m·K), Pa·s.
    pub fn si() -> Self {
        Self {
            temperature:   TempUnit::Kelvin,
            density:       DensityUnit::KgPerM3,
            heat_capacity: HeatCapacityUnit::JPerKgK,
            conductivity:  ConductivityUnit::WPerMK,
            viscosity:     ViscosityUnit::PaS,
        }
    }

    // ── Builder methods ─────────────────────────────────────────────

    pub fn temperature(mut self, u: TempUnit) -> Self { self.temperature = u; self }
    pub fn density(mut self, u: DensityUnit) -> Self { self.density = u; self }
    pub fn heat_capacity(mut self, u: HeatCapacityUnit) -> Self { self.heat_capacity = u; self }
    pub fn conductivity(mut self, u: ConductivityUnit) -> Self { self.conductivity = u; self }
    pub fn viscosity(mut self, u: ViscosityUnit) -> Self { self.viscosity = u; self }
}

impl Default for UnitSystem {
    fn default() -> Self { Self::table() }
}

// ────────────────────────────────────────────────────────────────────
//  Converter — maps canonical table units to a UnitSystem
// ────────────────────────────────────────────────────────────────────

/// Performs conversions between user units and the canonical table units.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub units: UnitSystem,
}

impl Converter {
    pub fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    /// Identity converter: every value passes through unchanged.
    pub fn identity() -> Self {
        Self { units: UnitSystem::table() }
    }

    // ── Temperature ─────────────────────────────────────────────────

    /// User → table (°C)
    pub fn t_to_table(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius    => t,
            TempUnit::Kelvin     => t - 273.15,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
        }
    }

    /// Table (°C) → user
    pub fn t_from_table(&self, t: f64) -> f64 {
        match self.units.temperature {
            TempUnit::Celsius    => t,
            TempUnit::Kelvin     => t + 273.15,
            TempUnit::Fahrenheit => t * 9.0 / 5.0 + 32.0,
        }
    }

    // ── Density ─────────────────────────────────────────────────────

    /// Table (kg/m³) → user
    pub fn d_from_table(&self, d: f64) -> f64 {
        match self.units.density {
            DensityUnit::KgPerM3 => d,
            DensityUnit::GPerCm3 => d / 1000.0,
        }
    }

    // ── Specific heat ───────────────────────────────────────────────

    /// Table (J/(kg·K)) → user
    pub fn cp_from_table(&self, cp: f64) -> f64 {
        match self.units.heat_capacity {
            HeatCapacityUnit::JPerKgK  => cp,
            HeatCapacityUnit::KJPerKgK => cp / 1000.0,
        }
    }

    // ── Thermal conductivity ────────────────────────────────────────

    /// Table (W/(m·K)) → user
    pub fn k_from_table(&self, k: f64) -> f64 {
        match self.units.conductivity {
            ConductivityUnit::WPerMK      => k,
            ConductivityUnit::MilliWPerMK => k * 1000.0,
        }
    }

    // ── Viscosity ───────────────────────────────────────────────────

    /// Canonical (Pa·s) → user
    pub fn mu_from_table(&self, mu: f64) -> f64 {
        match self.units.viscosity {
            ViscosityUnit::PaS      => mu,
            ViscosityUnit::MilliPaS => mu * 1000.0,
            ViscosityUnit::MicroPaS => mu * 1_000_000.0,
        }
    }

    // ── Generic key‑based conversion ────────────────────────────────

    /// Convert a canonical output value to user units, choosing the
    /// conversion from the property key (e.g. `"rho"`, `"cp"`, `"mu"`).
    /// Unknown keys (concentrations, …) pass through unchanged.
    pub fn output_from_table(&self, key: &str, val: f64) -> f64 {
        match key.to_lowercase().as_str() {
            "t" | "temperature" | "freezing" | "boiling" => self.t_from_table(val),
            "rho" | "d" | "density"                      => self.d_from_table(val),
            "cp" | "specific_heat"                       => self.cp_from_table(val),
            "k" | "thermal_conductivity"                 => self.k_from_table(val),
            "mu" | "eta" | "viscosity"                   => self.mu_from_table(val),
            _                                            => val,
        }
    }

    /// Unit label for a property key under the active unit system.
    pub fn unit_label(&self, key: &str) -> &'static str {
        match key.to_lowercase().as_str() {
            "t" | "temperature" | "freezing" | "boiling" => self.units.temperature.symbol(),
            "rho" | "d" | "density"                      => self.units.density.symbol(),
            "cp" | "specific_heat"                       => self.units.heat_capacity.symbol(),
            "k" | "thermal_conductivity"                 => self.units.conductivity.symbol(),
            "mu" | "eta" | "viscosity"                   => self.units.viscosity.symbol(),
            _                                            => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_passes_values_through() {
        let c = Converter::identity();
        assert_eq!(c.output_from_table("rho", 1067.67), 1067.67);
        assert_eq!(c.output_from_table("mu", 0.005398), 0.005398);
        assert_eq!(c.t_from_table(-15.0), -15.0);
    }

    #[test]
    fn temperature_round_trip() {
        for units in [UnitSystem::si(), UnitSystem::new().temperature(TempUnit::Fahrenheit)] {
            let c = Converter::new(units);
            let t = c.t_to_table(c.t_from_table(-35.0));
            assert!((t + 35.0).abs() < 1e-12, "got {t}");
        }
    }

    #[test]
    fn engineering_preset_scales_cp_and_mu() {
        let c = Converter::new(UnitSystem::engineering());
        assert!((c.output_from_table("cp", 3252.0) - 3.252).abs() < 1e-12);
        assert!((c.output_from_table("viscosity", 0.005398) - 5.398).abs() < 1e-12);
        assert_eq!(c.unit_label("cp"), "kJ/(kg·K)");
        assert_eq!(c.unit_label("mu"), "mPa·s");
    }

    #[test]
    fn concentrations_are_never_converted() {
        let c = Converter::new(UnitSystem::si());
        assert_eq!(c.output_from_table("mass_pct", 52.7), 52.7);
        assert_eq!(c.unit_label("volume_pct"), "");
    }
}
