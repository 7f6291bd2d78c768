use approx::assert_relative_eq;
use egasp::{CorrelationTable, DATA_ENV, EgaspError, Glycol, PropertyKey, UnitSystem};
use serde_json::{Value, json};

/// Tiny table: v = T + c on a 3×2 grid, (0 °C, 10 %) missing.
fn synthetic() -> Value {
    let grid = json!([
        [null, 20.0],
        [20.0, 30.0],
        [30.0, 40.0],
    ]);
    json!({
        "name": "synthetic",
        "version": "0.0.1",
        "reference": { "temperature_c": 20.0, "glycol_density": 1100.0, "water_density": 1000.0 },
        "freezing": { "volume_pct": [0.0, 50.0], "values": [0.0, -30.0] },
        "boiling":  { "volume_pct": [0.0, 50.0], "values": [100.0, 110.0] },
        "grid": { "temperature_c": [0.0, 10.0, 20.0], "volume_pct": [10.0, 20.0] },
        "density": grid,
        "specific_heat": grid,
        "thermal_conductivity": grid,
        "viscosity": grid,
    })
}

fn load(v: &Value) -> egasp::Result<CorrelationTable> {
    CorrelationTable::from_json_str(&v.to_string())
}

fn assert_corrupt(v: &Value, needle: &str) {
    match load(v) {
        Err(e @ EgaspError::Dataset(_)) => {
            assert!(e.is_fatal());
            assert!(e.to_string().contains(needle), "{e} (expected {needle:?})");
        }
        other => panic!("expected dataset error containing {needle:?}, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Bundled and on-disk data
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bundled_dataset_shape() {
    let t = CorrelationTable::bundled().unwrap();
    assert_eq!(t.version(), "1.1.0");
    assert!(t.name().contains("synthetic"), "{}", t.name());
    let g = t.grid(PropertyKey::Density);
    assert_eq!(g.temperature_axis().len(), 33);
    assert_eq!(
        g.concentration_axis(),
        &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]
    );
    assert_eq!(t.reference().temperature_c, 20.0);
}

#[test]
fn file_on_disk_matches_bundled_copy() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/eg_water.json");
    let from_disk = CorrelationTable::from_path(path).unwrap();
    assert_eq!(from_disk, CorrelationTable::bundled().unwrap());
}

#[test]
fn missing_file_is_fatal() {
    let err = CorrelationTable::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.is_fatal());
    assert!(err.to_string().contains("/definitely/not/here.json"), "{err}");
}

/// All `EGASP_DATA` cases live in one test: the variable is process-wide.
#[test]
fn data_env_selects_the_dataset() {
    let bundled = CorrelationTable::bundled().unwrap();

    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe { std::env::set_var(DATA_ENV, "/definitely/not/here.json") };
    let err = Glycol::from_env().unwrap_err();
    assert!(err.is_fatal(), "{err:?}");
    let msg = err.to_string();
    assert!(msg.contains(DATA_ENV), "{msg}");
    assert!(msg.contains("/definitely/not/here.json"), "{msg}");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/eg_water.json");
    unsafe { std::env::set_var(DATA_ENV, path) };
    let eg = Glycol::from_env().unwrap();
    assert_eq!(eg.engine().table(), &bundled);

    unsafe { std::env::remove_var(DATA_ENV) };
    let eg = Glycol::from_env_with_units(UnitSystem::si()).unwrap();
    assert_eq!(eg.engine().table(), &bundled);
    assert_eq!(eg.converter().units, UnitSystem::si());
}

// ═══════════════════════════════════════════════════════════════════
//  Synthetic tables
// ═══════════════════════════════════════════════════════════════════

#[test]
fn synthetic_table_drives_the_whole_pipeline() {
    let eg = Glycol::from_table(load(&synthetic()).unwrap());
    assert_eq!(eg.engine().table().name(), "synthetic");

    let c = eg.resolve_concentrations("volume", 25.0).unwrap();
    assert_relative_eq!(c.freezing, -15.0, max_relative = 1e-12);
    assert_relative_eq!(c.boiling, 105.0, max_relative = 1e-12);

    assert_relative_eq!(eg.get("rho", 15.0, 15.0).unwrap(), 30.0, max_relative = 1e-12);
    assert_relative_eq!(eg.get("mu", 15.0, 15.0).unwrap(), 30.0e-6, max_relative = 1e-12);
    assert!(matches!(eg.get("rho", 5.0, 15.0), Err(EgaspError::Domain { .. })));
}

// ═══════════════════════════════════════════════════════════════════
//  Corruption is caught at load time
// ═══════════════════════════════════════════════════════════════════

#[test]
fn malformed_json() {
    let err = CorrelationTable::from_json_str("{ not json").unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn missing_property_field() {
    let mut v = synthetic();
    v.as_object_mut().unwrap().remove("viscosity");
    assert_corrupt(&v, "viscosity");
}

#[test]
fn unsorted_axis() {
    let mut v = synthetic();
    v["grid"]["temperature_c"] = json!([0.0, 20.0, 10.0]);
    assert_corrupt(&v, "strictly increasing");
}

#[test]
fn ragged_row() {
    let mut v = synthetic();
    v["specific_heat"][1] = json!([20.0]);
    assert_corrupt(&v, "specific_heat");
}

#[test]
fn wrong_row_count() {
    let mut v = synthetic();
    v["density"] = json!([[10.0, 20.0]]);
    assert_corrupt(&v, "1 rows for 3 temperatures");
}

#[test]
fn non_positive_sample() {
    let mut v = synthetic();
    v["thermal_conductivity"][2][0] = json!(-0.4);
    assert_corrupt(&v, "finite and positive");
}

#[test]
fn curve_length_mismatch() {
    let mut v = synthetic();
    v["boiling"]["values"] = json!([100.0]);
    assert_corrupt(&v, "boiling");
}

#[test]
fn empty_grid() {
    let mut v = synthetic();
    v["density"] = json!([[null, null], [null, null], [null, null]]);
    assert_corrupt(&v, "no samples");
}

#[test]
fn bad_reference_density() {
    let mut v = synthetic();
    v["reference"]["water_density"] = json!(0.0);
    assert_corrupt(&v, "positive");
}
