use egasp::{
    ConcentrationInput, ConcentrationKind, EgaspError, TemperatureInput,
    normalize_concentration_kind, validate_range,
};

// ═══════════════════════════════════════════════════════════════════
//  Concentration kind tokens
// ═══════════════════════════════════════════════════════════════════

#[test]
fn kind_tokens_are_case_insensitive() {
    for token in ["mass", "M", "Mass", "  m  ", "wt", "weight", "mass_fraction"] {
        assert_eq!(
            normalize_concentration_kind(token).unwrap(),
            ConcentrationKind::Mass,
            "token {token:?}"
        );
    }
    for token in ["volume", "V", "VOLUME", "vol", "volume-fraction"] {
        assert_eq!(
            normalize_concentration_kind(token).unwrap(),
            ConcentrationKind::Volume,
            "token {token:?}"
        );
    }
}

#[test]
fn unknown_kind_token_is_rejected() {
    for token in ["", "x", "molar", "mv", "volumes"] {
        let err = normalize_concentration_kind(token).unwrap_err();
        assert!(
            matches!(err, EgaspError::InvalidArgument { .. }),
            "token {token:?} gave {err:?}"
        );
    }
}

#[test]
fn kind_parses_via_from_str() {
    let kind: ConcentrationKind = "v".parse().unwrap();
    assert_eq!(kind, ConcentrationKind::Volume);
    assert_eq!(kind.to_string(), "volume");
}

// ═══════════════════════════════════════════════════════════════════
//  Closed-interval range checks
// ═══════════════════════════════════════════════════════════════════

#[test]
fn range_bounds_are_inclusive() {
    assert_eq!(validate_range(10.0, 10.0, 90.0, "concentration").unwrap(), 10.0);
    assert_eq!(validate_range(90.0, 10.0, 90.0, "concentration").unwrap(), 90.0);
}

#[test]
fn range_rejects_just_outside() {
    for v in [9.999, 90.001] {
        let err = validate_range(v, 10.0, 90.0, "concentration").unwrap_err();
        assert_eq!(
            err,
            EgaspError::OutOfRange { field: "concentration", value: v, min: 10.0, max: 90.0 }
        );
    }
}

#[test]
fn range_rejects_nan() {
    assert!(validate_range(f64::NAN, -35.0, 125.0, "temperature").is_err());
}

#[test]
fn out_of_range_message_names_field_and_bounds() {
    let err = validate_range(95.0, 10.0, 90.0, "concentration").unwrap_err();
    assert_eq!(err.to_string(), "concentration must be between 10 and 90, got 95");
}

// ═══════════════════════════════════════════════════════════════════
//  Validated inputs
// ═══════════════════════════════════════════════════════════════════

#[test]
fn concentration_input_checks_both_token_and_value() {
    let c = ConcentrationInput::parse("m", 35.0).unwrap();
    assert_eq!(c.kind(), ConcentrationKind::Mass);
    assert_eq!(c.value(), 35.0);

    assert!(matches!(
        ConcentrationInput::parse("mass", 5.0),
        Err(EgaspError::OutOfRange { field: "concentration", .. })
    ));
    assert!(matches!(
        ConcentrationInput::parse("weird", 50.0),
        Err(EgaspError::InvalidArgument { .. })
    ));
}

#[test]
fn temperature_input_domain() {
    assert_eq!(TemperatureInput::new(-35.0).unwrap().celsius(), -35.0);
    assert_eq!(TemperatureInput::new(125.0).unwrap().celsius(), 125.0);
    let err = TemperatureInput::new(-35.5).unwrap_err();
    assert_eq!(err.to_string(), "temperature must be between -35 and 125, got -35.5");
    assert!(TemperatureInput::new(125.01).is_err());
}
