//! Tests for sentinel-aware value parsing

use super::*;
use crate::Error;

#[test]
fn test_marker_returns_sentinel() {
    for sentinel in [-9999.9, 0.0, -1.0, 1e300, f64::INFINITY] {
        assert_eq!(parse_val("NAN", Some(sentinel)).unwrap(), sentinel);
    }
    assert_eq!(parse_val("NAN", None).unwrap(), DEFAULT_SENTINEL);
    assert_eq!(parse_val_or_default("NAN").unwrap(), -9999.9);
}

#[test]
fn test_nan_sentinel_is_returned_unchanged() {
    let value = parse_val("NAN", Some(f64::NAN)).unwrap();
    assert!(value.is_nan());
}

#[test]
fn test_well_formed_numbers() {
    assert!((parse_val("3.14", None).unwrap() - 3.14).abs() < 1e-12);
    assert_eq!(parse_val("42", None).unwrap(), 42.0);
    assert_eq!(parse_val("-2.5", None).unwrap(), -2.5);
    assert_eq!(parse_val("1e3", None).unwrap(), 1000.0);
    assert_eq!(parse_val("-7.5E-1", None).unwrap(), -0.75);
    assert_eq!(parse_val(".5", None).unwrap(), 0.5);
}

#[test]
fn test_marker_is_exact_and_case_sensitive() {
    // Not the marker: these reach the float parser, which reads "nan" as NaN
    assert!(parse_val("nan", Some(-1.0)).unwrap().is_nan());
    assert!(parse_val("NaN", Some(-1.0)).unwrap().is_nan());

    let parser = ValueParser::<f64>::new();
    assert!(parser.is_marker("NAN"));
    assert!(!parser.is_marker("nan"));
    assert!(!parser.is_marker(" NAN"));
    assert!(!parser.is_marker("NAN "));
}

#[test]
fn test_reject_policy() {
    for token in ["", "abc", "1.5x", " NAN", "NAN ", " 1", "1 ", "1,5"] {
        match parse_val(token, None) {
            Err(Error::MalformedNumber { token: t }) => assert_eq!(t, token),
            other => panic!("expected malformed error for {:?}, got {:?}", token, other),
        }
    }
}

#[test]
fn test_zero_policy_matches_atof() {
    let parser = ValueParser::with_config(ValueConfig::<f64>::lenient());
    assert_eq!(parser.parse("").unwrap(), 0.0);
    assert_eq!(parser.parse("abc").unwrap(), 0.0);
    assert_eq!(parser.parse("1.5x").unwrap(), 1.5);
    assert_eq!(parser.parse("  -8").unwrap(), -8.0);
    assert_eq!(parser.parse("\u{b}5").unwrap(), 5.0);
    assert_eq!(parser.parse("NAN").unwrap(), -9999.9);

    assert_eq!(parse_val_lenient("", None), 0.0);
    assert_eq!(parse_val_lenient(" 12abc", None), 12.0);
    assert_eq!(parse_val_lenient("NAN", Some(-5.0)), -5.0);
    assert_eq!(parse_val_lenient("6.5", Some(-5.0)), 6.5);
}

#[test]
fn test_sentinel_policy() {
    let config = ValueConfig::<f64>::new()
        .with_sentinel(-1.0)
        .with_malformed(MalformedPolicy::Sentinel);
    let parser = ValueParser::from(config);
    assert_eq!(parser.parse("garbage").unwrap(), -1.0);
    assert_eq!(parser.parse("").unwrap(), -1.0);
    assert_eq!(parser.parse("2").unwrap(), 2.0);
    assert_eq!(parser.read("garbage").unwrap(), Reading::Missing);
}

#[test]
fn test_custom_marker() {
    let parser = ValueParser::with_config(ValueConfig::<f64>::new().with_marker("N/A").with_sentinel(-99.0));
    assert_eq!(parser.parse("N/A").unwrap(), -99.0);
    // The default marker is now an ordinary float literal
    assert!(parser.parse("NAN").unwrap().is_nan());
    assert!(parser.parse("n/a").is_err());
}

#[test]
fn test_read_reports_missing() {
    let parser = ValueParser::<f64>::new();
    assert_eq!(parser.read("NAN").unwrap(), Reading::Missing);
    assert_eq!(parser.read("4.5").unwrap(), Reading::Value(4.5));
    assert!(parser.read("x").is_err());
}

#[test]
fn test_f32_parser() {
    let parser = ValueParser::<f32>::new();
    assert_eq!(parser.parse("NAN").unwrap(), -9999.9f32);
    assert_eq!(parser.parse("0.1").unwrap(), 0.1f32);
    assert_eq!(parser.parse_bytes(b"-2.5").unwrap(), -2.5f32);
}

#[test]
fn test_parse_bytes_rejects_invalid_utf8() {
    let parser = ValueParser::<f64>::new();
    assert!(matches!(parser.parse_bytes(&[0xff, b'1']), Err(Error::MalformedNumber { .. })));
}

#[test]
fn test_parse_is_idempotent() {
    let parser = ValueParser::<f64>::new();
    for token in ["3.14", "NAN", "-0", "1e-300"] {
        assert_eq!(parser.parse(token).unwrap().to_bits(), parser.parse(token).unwrap().to_bits());
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_finite_values_round_trip(value in prop::num::f64::NORMAL | prop::num::f64::ZERO) {
            let text = format!("{}", value);
            prop_assert_eq!(parse_val(&text, None).unwrap(), value);
        }

        #[test]
        fn prop_marker_yields_any_sentinel(sentinel in prop::num::f64::ANY) {
            let value = parse_val("NAN", Some(sentinel)).unwrap();
            prop_assert_eq!(value.to_bits(), sentinel.to_bits());
        }

        #[test]
        fn prop_parsing_is_deterministic(token in ".{0,16}") {
            let parser = ValueParser::with_config(ValueConfig::<f64>::lenient());
            let first = parser.parse(&token).unwrap();
            let second = parser.parse(&token).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
            prop_assert_eq!(parse_val(&token, None).is_ok(), parse_val(&token, None).is_ok());
        }
    }
}
