use intcalc::calc_engine::{apply, evaluate, tokenize, CalcError, Token, TokenKind, MAX_DEPTH};
use intcalc::{evaluate_traced, EvaluationTrace};

fn syntax_message(input: &str) -> String {
    match evaluate(input) {
        Err(e @ CalcError::Syntax(_)) => e.to_string(),
        other => panic!("expected a syntax error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn binary_operators_match_integer_arithmetic() {
    let operands = [0, 1, 7, 12, 250, 9999];
    for a in operands {
        for b in operands {
            assert_eq!(evaluate(&format!("{} + {}", a, b)), Ok(a + b));
            assert_eq!(evaluate(&format!("{} - {}", a, b)), Ok(a - b));
            assert_eq!(evaluate(&format!("{} * {}", a, b)), Ok(a * b));
            if b != 0 {
                assert_eq!(evaluate(&format!("{} / {}", a, b)), Ok(a / b));
            }
        }
    }
}

#[test]
fn negative_division_truncates() {
    assert_eq!(evaluate("7 / (0 - 2)"), Ok(-3));
    assert_eq!(evaluate("(0 - 7) / 2"), Ok(-3));
    assert_eq!(
        apply(&Token::Op('/'), &Token::Integer(7), &Token::Integer(-2)),
        Ok(Token::Integer(-3))
    );
}

#[test]
fn precedence_and_grouping() {
    assert_eq!(evaluate("2 + 3 * 4"), Ok(14));
    assert_eq!(evaluate("(2 + 3) * 4"), Ok(20));
    assert_eq!(evaluate("10 - 4 - 3"), Ok(3));
    assert_eq!(evaluate("1+2"), evaluate(" 1 + 2 "));
}

#[test]
fn parenthesis_balance() {
    assert_eq!(evaluate("(1+2)"), Ok(3));
    assert_eq!(
        syntax_message("3+2)"),
        "Error parsing expression: 3 + 2 [)]"
    );
    assert_eq!(
        syntax_message("((1+2)"),
        "Error parsing expression: unexpected end of input: ( ( 1 + 2 ) []"
    );
}

#[test]
fn trailing_garbage_is_rejected() {
    assert_eq!(syntax_message("3 2"), "Error parsing expression: 3 [2]");
    assert_eq!(syntax_message("4 ^ 2"), "Error parsing expression: 4 [^] 2");
    assert_eq!(syntax_message("x"), "Error parsing expression: [x]");
}

#[test]
fn nesting_depth_is_capped() {
    let nested = |depth: usize| format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert_eq!(evaluate(&nested(MAX_DEPTH)), Ok(1));
    assert_eq!(
        evaluate(&nested(MAX_DEPTH + 1)),
        Err(CalcError::NestingTooDeep { limit: MAX_DEPTH })
    );
    assert!(evaluate(&nested(200_000)).is_err());

    // A rejected line leaves nothing behind for the next one.
    assert_eq!(evaluate("1 + 1"), Ok(2));
}

#[test]
fn division_by_zero() {
    assert_eq!(evaluate("5/0"), Err(CalcError::DivisionByZero));
}

#[test]
fn scanning_always_terminates_with_eof() {
    for input in ["", "   ", "1 + 2", "((((", "abc 12 ))", "\u{0}\u{7f}"] {
        let stream = tokenize(input);
        assert_eq!(stream.tokens().last().map(Token::kind), Some(TokenKind::Eof));
    }
}

#[test]
fn rendered_tokens_rescan_to_the_same_stream() {
    for input in ["1+2*3", "( 4-(5 / 6))", "7*  (8)", "9 + + )"] {
        let stream = tokenize(input);
        assert_eq!(tokenize(&stream.to_source()), stream);
    }
}

#[test]
fn traced_evaluation() {
    let mut trace = EvaluationTrace::new(true);
    assert_eq!(evaluate_traced("2 * (3 + 4)", &mut trace), Ok(14));
    let ops: Vec<_> = trace.steps.iter().map(|s| s.operation.clone()).collect();
    assert_eq!(ops, vec!["3 + 4", "2 * 7"]);
}

#[test]
fn independent_requests_in_parallel() {
    let handles: Vec<_> = (1..=8)
        .map(|n: i64| std::thread::spawn(move || evaluate(&format!("({} + 1) * {}", n, n))))
        .collect();

    for (n, handle) in (1..=8i64).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok((n + 1) * n));
    }
}
