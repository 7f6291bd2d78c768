use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use egasp::{EgaspError, Glycol, PropertyKey, PropertyQueryResult, UnitSystem};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "egasp", version)]
#[command(about = "Ethylene-glycol/water property lookup", long_about = None)]
struct Cli {
    /// Query temperature in °C (range: -35 ~ 125)
    #[arg(allow_negative_numbers = true)]
    query_temp: f64,

    /// Concentration type (volume/mass or v/m)
    #[arg(long, default_value = "volume")]
    query_type: String,

    /// Concentration in % (range: 10 ~ 90)
    #[arg(long, default_value_t = 50.0)]
    query_value: f64,

    /// Output unit preset
    #[arg(long, value_enum, default_value_t = Units::Table)]
    units: Units,

    /// Log resolved values (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Units {
    /// °C, kg/m³, J/(kg·K), W/(m·K), Pa·s
    Table,
    /// K, kg/m³, J/(kg·K), W/(m·K), Pa·s
    Si,
    /// °C, kg/m³, kJ/(kg·K), W/(m·K), mPa·s
    Engineering,
}

impl From<Units> for UnitSystem {
    fn from(u: Units) -> Self {
        match u {
            Units::Table => UnitSystem::table(),
            Units::Si => UnitSystem::si(),
            Units::Engineering => UnitSystem::engineering(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_fatal() { ExitCode::from(2) } else { ExitCode::FAILURE }
        }
    }
}

fn run(cli: &Cli) -> Result<(), EgaspError> {
    let eg = Glycol::from_env_with_units(cli.units.into())?;

    println!("query type:  {}", cli.query_type);
    println!("query value: {} %", cli.query_value);
    println!("query temp:  {} °C", cli.query_temp);
    println!("----------------------------------");

    let r = eg.query(&cli.query_type, cli.query_value, cli.query_temp)?;
    print_table(&eg, &r);
    Ok(())
}

fn print_table(eg: &Glycol, r: &PropertyQueryResult) {
    let conv = eg.converter();
    let rows = [
        ("mass concentration", "%", format!("{:.2}", r.mass_pct)),
        ("volume concentration", "%", format!("{:.2}", r.volume_pct)),
        ("freezing point", conv.unit_label("freezing"), format!("{:.2}", r.freezing_point)),
        ("boiling point", conv.unit_label("boiling"), format!("{:.2}", r.boiling_point)),
        ("density", conv.unit_label("density"), format!("{:.2}", r.density)),
        ("specific heat", conv.unit_label("specific_heat"), format!("{:.2}", r.specific_heat)),
        (
            "thermal conductivity",
            conv.unit_label("thermal_conductivity"),
            format!("{:.4}", r.thermal_conductivity),
        ),
        ("viscosity", conv.unit_label("viscosity"), viscosity_text(eg, r.get(PropertyKey::Viscosity))),
    ];

    println!("{:<22} {:<10} {}", "property", "unit", "value");
    println!("{}", "=".repeat(44));
    for (name, unit, value) in rows {
        println!("{name:<22} {unit:<10} {value}");
    }
}

/// Pa·s values need eight decimals to stay readable; scaled units do not.
fn viscosity_text(eg: &Glycol, mu: f64) -> String {
    match eg.converter().units.viscosity {
        egasp::ViscosityUnit::PaS => format!("{mu:.8}"),
        _ => format!("{mu:.4}"),
    }
}
