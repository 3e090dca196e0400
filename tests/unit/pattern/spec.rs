use super::*;

use crate::LinemarkError;

#[test]
fn solid_is_the_exact_sentinel() {
    assert_eq!(Pattern::parse("solid").unwrap(), Pattern::Solid);
    assert_eq!(Pattern::Solid.to_string(), "solid");
    // anything else is a part list; a padded sentinel is a path parse
    // error, not Solid
    assert!(matches!(
        Pattern::parse(" solid"),
        Err(LinemarkError::InvalidCharacter { found: 's', .. })
    ));
}

#[test]
fn fully_explicit_parts_round_trip_losslessly() {
    let cases = [
        "M-5 5L0 -5M5 5L0 -5,40,80,T",
        "M0 0L0 -5,0,25%,T",
        "M-3 0L3 0,10%,10%,F",
        "M0 -3L0 3,0,100%,T",
        "M-2 0A2 2 0 1 1 2 0,5,20,F;M0 0L0 -5,0,25%,T",
        "M0 0,0,100%,F",
    ];
    for case in cases {
        let pattern = Pattern::parse(case).unwrap();
        assert_eq!(pattern.to_string(), case, "case {case:?}");
    }
}

#[test]
fn omitted_fields_are_filled_with_defaults() {
    let cases = [
        ("", "M0 0,0,100%,F"),
        ("M0 0L5 5", "M0 0L5 5,0,100%,F"),
        ("M0 0L5 5,40", "M0 0L5 5,40,100%,F"),
        ("M0 0L5 5,40,", "M0 0L5 5,40,100%,F"),
        ("M0 0L5 5,,25%", "M0 0L5 5,0,25%,F"),
        ("M0 0L5 5,40,80", "M0 0L5 5,40,80,F"),
        ("M0 0L5 5,\t40 ,\t80 ,T", "M0 0L5 5,40,80,T"),
        // negative zero prints as zero
        ("M0 0,-0,100%,F", "M0 0,0,100%,F"),
        (";", "M0 0,0,100%,F;M0 0,0,100%,F"),
    ];
    for (input, expected) in cases {
        let pattern = Pattern::parse(input).unwrap();
        assert_eq!(pattern.to_string(), expected, "input {input:?}");
    }
}

#[test]
fn kind_token_must_be_exactly_capital_t() {
    for token in ["t", " T", "T ", "F", "X", ""] {
        let pattern = Pattern::parse(&format!("M0 0L1 0,0,50,{token}")).unwrap();
        assert!(!pattern.has_trace(), "token {token:?}");
    }
    assert!(Pattern::parse("M0 0L1 0,0,50,T").unwrap().has_trace());
}

#[test]
fn has_trace_scans_every_part() {
    assert!(!Pattern::Solid.has_trace());
    assert!(!Pattern::parse("M0 0,0,50,F;M0 0,0,50,F").unwrap().has_trace());
    assert!(Pattern::parse("M0 0,0,50,F;M0 0,0,50,T").unwrap().has_trace());
}

#[test]
fn too_many_fields_is_an_error() {
    assert!(matches!(
        Pattern::parse("M0 0,1,2,T,extra"),
        Err(LinemarkError::InvalidPatternPart(_))
    ));
}

#[test]
fn bad_fields_surface_the_underlying_error() {
    assert!(matches!(
        Pattern::parse("M0 0,abc"),
        Err(LinemarkError::InvalidNumber(_))
    ));
    assert!(matches!(
        Pattern::parse("M0 0,10,1.2.3%"),
        Err(LinemarkError::InvalidNumber(_))
    ));
    assert!(matches!(
        Pattern::parse("M0 0#L1 1,10"),
        Err(LinemarkError::InvalidCharacter { found: '#', .. })
    ));
}

#[test]
fn resolve_passes_pixels_through_and_floors_percentages() {
    assert_eq!(PixelOrPercent::px(12.5).resolve(1000.0), 12.5);
    assert_eq!(PixelOrPercent::percent(33.0).resolve(100.0), 33.0);
    assert_eq!(PixelOrPercent::percent(12.5).resolve(81.0), 10.0);
    assert_eq!(PixelOrPercent::FULL_LENGTH.resolve(33.7), 33.0);
    assert_eq!(PixelOrPercent::ZERO_PX.resolve(500.0), 0.0);
}

#[test]
fn lengths_display_in_their_own_unit() {
    assert_eq!(PixelOrPercent::px(2.5).to_string(), "2.5");
    assert_eq!(PixelOrPercent::px(-10.0).to_string(), "-10");
    assert_eq!(PixelOrPercent::percent(10.0).to_string(), "10%");
    assert_eq!(PixelOrPercent::px(-0.0).to_string(), "0");
}

#[test]
fn patterns_survive_a_serde_round_trip() {
    let pattern = Pattern::parse("M-5 5L0 -5M5 5L0 -5,40,80%,T;M0 0L0 -5").unwrap();
    let json = serde_json::to_string(&pattern).unwrap();
    let back: Pattern = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pattern);
}
