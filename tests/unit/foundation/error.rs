use super::*;

#[test]
fn display_messages_are_stable() {
    assert_eq!(
        LinemarkError::InvalidCharacter {
            found: '#',
            text: "M0 0#".to_string()
        }
        .to_string(),
        "path contains non-allowed character '#': M0 0#"
    );
    assert_eq!(
        LinemarkError::invalid_number("1.2.3").to_string(),
        "path parameter is not a number: 1.2.3"
    );
    assert_eq!(
        LinemarkError::InvalidParameterCount {
            operator: 'L',
            arity: 2,
            got: 3
        }
        .to_string(),
        "invalid parameter count for L: expected a multiple of 2, got 3"
    );
    assert_eq!(
        LinemarkError::InvalidOperator('x').to_string(),
        "invalid path operator: x"
    );
    assert!(
        LinemarkError::invalid_rotation_input("H command survived normalization")
            .to_string()
            .contains("rotation requires")
    );
    assert!(
        LinemarkError::invalid_pattern_part("too many fields")
            .to_string()
            .contains("invalid pattern part")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LinemarkError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
