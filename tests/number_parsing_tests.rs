use poweq::{ExprError, Token, tokenize};

fn single(text: &str) -> f64 {
    match tokenize(text).unwrap().as_slice() {
        [Token::Number(v)] => *v,
        other => panic!("expected one number, got {:?}", other),
    }
}

#[test]
fn parses_integer() {
    assert_eq!(single("42"), 42.0);
}

#[test]
fn parses_leading_point() {
    assert_eq!(single(".5"), 0.5);
}

#[test]
fn parses_trailing_point() {
    assert_eq!(single("3."), 3.0);
}

#[test]
fn parses_scientific_notation_basic() {
    assert_eq!(single("1e3"), 1000.0);
}

#[test]
fn parses_scientific_notation_with_negative_exponent() {
    let out = single("2.5e-4");
    assert!((out - 0.00025).abs() < 1e-12);
}

#[test]
fn parses_scientific_notation_with_plus_exponent() {
    assert_eq!(single("3.2E+2"), 320.0);
}

#[test]
fn dangling_exponent_is_not_part_of_number() {
    // "1e" leaves the 'e' behind, which is not a valid character.
    assert!(tokenize("1e").is_err());
    assert!(tokenize("1e+").is_err());
}

#[test]
fn adjacent_numbers_stay_separate() {
    assert_eq!(
        tokenize("1 2").unwrap(),
        vec![Token::Number(1.0), Token::Number(2.0)]
    );
}

#[test]
fn overflowing_literal_is_rejected() {
    match tokenize("1+1e400").unwrap_err() {
        ExprError::InvalidInput {
            position, fragment, ..
        } => {
            assert_eq!(position, 2);
            assert_eq!(fragment, "1e400");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn large_finite_literal_is_kept() {
    assert_eq!(single("1e300"), 1e300);
}
