use super::*;

#[test]
fn operator_letters_round_trip_case_insensitively() {
    for letter in "MLHVCSQTAZ".chars() {
        let op = Operator::from_letter(letter).unwrap();
        assert_eq!(op.letter(), letter);
        assert_eq!(
            Operator::from_letter(letter.to_ascii_lowercase()).unwrap(),
            op
        );
    }
    assert!(matches!(
        Operator::from_letter('x'),
        Err(LinemarkError::InvalidOperator('x'))
    ));
}

#[test]
fn arities_match_the_language() {
    assert_eq!(Operator::Move.arity(), 2);
    assert_eq!(Operator::Line.arity(), 2);
    assert_eq!(Operator::SmoothQuadratic.arity(), 2);
    assert_eq!(Operator::Horizontal.arity(), 1);
    assert_eq!(Operator::Vertical.arity(), 1);
    assert_eq!(Operator::Cubic.arity(), 6);
    assert_eq!(Operator::SmoothCubic.arity(), 4);
    assert_eq!(Operator::Quadratic.arity(), 4);
    assert_eq!(Operator::Arc.arity(), 7);
    assert_eq!(Operator::Close.arity(), 0);
}

#[test]
fn parameter_count_validation() {
    // close takes nothing
    assert!(Operator::Close.accepts_parameter_count(0));
    assert!(!Operator::Close.accepts_parameter_count(1));
    // horizontal/vertical take any positive count
    assert!(Operator::Horizontal.accepts_parameter_count(1));
    assert!(Operator::Horizontal.accepts_parameter_count(3));
    assert!(!Operator::Vertical.accepts_parameter_count(0));
    // everything else takes positive multiples of its arity
    assert!(Operator::Move.accepts_parameter_count(2));
    assert!(Operator::Move.accepts_parameter_count(6));
    assert!(!Operator::Move.accepts_parameter_count(0));
    assert!(!Operator::Move.accepts_parameter_count(3));
    assert!(Operator::Arc.accepts_parameter_count(14));
    assert!(!Operator::Arc.accepts_parameter_count(13));
}

#[test]
fn command_constructor_rejects_bad_counts() {
    assert!(PathCommand::new(true, Operator::Line, vec![1.0, 2.0]).is_ok());
    assert!(matches!(
        PathCommand::new(true, Operator::Line, vec![1.0]),
        Err(LinemarkError::InvalidParameterCount {
            operator: 'L',
            arity: 2,
            got: 1
        })
    ));
}

#[test]
fn default_path_is_a_move_to_origin() {
    let path = SvgPath::default();
    assert_eq!(path.commands().len(), 1);
    assert_eq!(path.to_string(), "M0 0");
}
