use poweq::{BinaryOp, ExprError, Token, parse, parse_str, tokenize};

#[test]
fn missing_right_operand() {
    let err = parse(&tokenize("1+").unwrap()).unwrap_err();
    match err {
        ExprError::Parse { expected, found } => {
            assert_eq!(expected, "number");
            assert_eq!(found, "end of input");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn empty_input() {
    let err = parse(&tokenize("").unwrap()).unwrap_err();
    assert!(matches!(err, ExprError::Parse { expected: "number", .. }));
}

#[test]
fn leading_operator() {
    match parse_str("*2").unwrap_err() {
        ExprError::Parse { found, .. } => assert_eq!(found, "operator '*'"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn doubled_operator() {
    assert!(matches!(
        parse_str("1+*2").unwrap_err(),
        ExprError::Parse { expected: "number", .. }
    ));
}

#[test]
fn trailing_tokens() {
    let tokens = vec![Token::Number(1.0), Token::Number(2.0)];
    match parse(&tokens).unwrap_err() {
        ExprError::Parse { expected, found } => {
            assert_eq!(expected, "operator or end of input");
            assert_eq!(found, "number 2");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn trailing_after_complete_expression() {
    let tokens = vec![
        Token::Number(1.0),
        Token::Operator(BinaryOp::Times),
        Token::Number(2.0),
        Token::Number(3.0),
    ];
    assert!(matches!(parse(&tokens), Err(ExprError::Parse { .. })));
}

#[test]
fn tokenizer_errors_pass_through_unchanged() {
    let direct = tokenize("4*y").unwrap_err();
    let piped = parse_str("4*y").unwrap_err();
    assert_eq!(direct, piped);
}

#[test]
fn error_display() {
    let err = parse_str("1+").unwrap_err();
    assert_eq!(
        err.to_string(),
        "parse error: expected number, found end of input"
    );
}
