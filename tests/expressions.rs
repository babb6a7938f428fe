use std::{cell::Cell, rc::Rc};

use pretty_assertions::assert_eq;
use qualex::{Error, Evaluator, Limits, ParseError, RuntimeError, Scope, Value, evaluate};
use serde_json::json;

fn scope() -> Scope {
    Scope::new().with_variable("x", "5")
                .with_variable("env", json!({ "mode": "production", "replicas": 3 }))
                .with_callback("isEnabled", || true)
                .with_callback("isDisabled", || false)
}

fn eval(src: &str) -> Value {
    match evaluate(src, &scope()) {
        Ok(outcome) => outcome.value,
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn eval_err(src: &str) -> Error {
    match evaluate(src, &scope()) {
        Ok(outcome) => panic!("Expression {src:?} succeeded with {} but was expected to fail",
                              outcome.value),
        Err(e) => e,
    }
}

#[test]
fn single_literal_is_returned_unchanged() {
    assert_eq!(eval("production"), Value::from("production"));
    assert_eq!(eval("  some.key  "), Value::from("some.key"));
    assert_eq!(eval("hello world"), Value::from("hello world"));
    assert_eq!(eval("007"), Value::from("007"));
    assert_eq!(eval(" 2024.10 "), Value::from("2024.10"));
}

#[test]
fn numeric_literals_still_compute_inside_expressions() {
    assert_eq!(eval("007 + 1"), Value::Number(8.0));
    assert_eq!(eval("(007)"), Value::Number(7.0));
    assert_eq!(eval("007 == 7"), Value::Bool(true));
}

#[test]
fn alias_keeps_literal_spelling() {
    for (source, alias) in [("on as 007", "007"),
                            ("on as 2024.10", "2024.10"),
                            ("on as 1e3", "1e3"),
                            ("on as (007)", "7")]
    {
        let outcome = evaluate(source, &scope()).unwrap();
        assert_eq!(outcome.value, Value::from("on"));
        assert_eq!(outcome.alias, alias, "alias of {source:?}");
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(eval("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(eval("(2 + 3) * 4"), Value::Number(20.0));
    assert_eq!(eval("2 * (3 + 4) * 2"), Value::Number(28.0));
}

#[test]
fn same_tier_is_left_to_right() {
    assert_eq!(eval("10 - 2 - 3"), Value::Number(5.0));
    assert_eq!(eval("12 / 2 / 3"), Value::Number(2.0));
    assert_eq!(eval("10 - (2 - 3)"), Value::Number(11.0));
}

#[test]
fn strict_and_loose_equality_differ() {
    assert_eq!(eval("$x == 5"), Value::Bool(true));
    assert_eq!(eval("$x === 5"), Value::Bool(false));
    assert_eq!(eval("$x !== 5"), Value::Bool(true));
    assert_eq!(eval("$x <> 5"), Value::Bool(false));
    assert_eq!(eval("$env.replicas === 3"), Value::Bool(true));
}

#[test]
fn section_qualifier_applies_and_renames() {
    let outcome =
        evaluate("$env.mode == production && @isEnabled as live", &scope()).unwrap();
    assert!(outcome.applies());
    assert_eq!(outcome.alias, "live");

    let outcome = evaluate("$env.mode == staging && @isEnabled as live", &scope()).unwrap();
    assert!(!outcome.applies());
    assert_eq!(outcome.alias, "live");
}

#[test]
fn alias_is_reassigned_by_as() {
    let mut evaluator = Evaluator::new("1 == 1 as renamed");
    assert_eq!(evaluator.evaluate(&scope()).unwrap(), Value::Bool(true));
    assert_eq!(evaluator.alias(), "renamed");
}

#[test]
fn alias_defaults_to_expression_text() {
    let mut evaluator = Evaluator::new("1 == 1");
    assert_eq!(evaluator.alias(), "1 == 1");
    evaluator.evaluate(&scope()).unwrap();
    assert_eq!(evaluator.alias(), "1 == 1");
}

#[test]
fn alias_takes_text_of_right_operand() {
    assert_eq!(evaluate("on as $env.mode", &scope()).unwrap().alias, "production");
    assert_eq!(evaluate("on as (2 * 3)", &scope()).unwrap().alias, "6");
    assert_eq!(evaluate("on as $missing", &scope()).unwrap().alias, "");
}

#[test]
fn as_passes_left_operand_through() {
    assert_eq!(eval("7 as 1 + 1"), Value::Number(7.0));
    assert_eq!(evaluate("7 as 1 + 1", &scope()).unwrap().alias, "2");
}

#[test]
fn missing_variable_path_is_null() {
    assert_eq!(eval("$y.deep.path"), Value::Null);
    assert_eq!(eval("$y.deep.path == $z"), Value::Bool(true));
    assert_eq!(eval("@unknown"), Value::Null);
}

#[test]
fn unbalanced_parentheses_are_parse_errors() {
    assert_eq!(eval_err("(1 + 2"), Error::Parse(ParseError::UnclosedParen { position: 0 }));
    assert_eq!(eval_err("1 + 2)"),
               Error::Parse(ParseError::UnmatchedClosingParen { position: 5 }));
    assert!(matches!(eval_err("((1)"), Error::Parse(ParseError::UnclosedParen { .. })));
}

#[test]
fn misplaced_operators_are_parse_errors() {
    assert!(matches!(eval_err("1 +"), Error::Parse(ParseError::MissingOperand { .. })));
    assert!(matches!(eval_err("&& 1"), Error::Parse(ParseError::MissingOperand { .. })));
    assert!(matches!(eval_err("1 == == 2"), Error::Parse(ParseError::MissingOperand { .. })));
    assert!(matches!(eval_err("(1) (2)"), Error::Parse(ParseError::UnexpectedOperand { .. })));
    assert!(matches!(eval_err(""), Error::Parse(ParseError::EmptyExpression { .. })));
    assert!(matches!(eval_err("1 + ()"), Error::Parse(ParseError::EmptyExpression { .. })));
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(eval_err("1 / 0"),
               Error::Runtime(RuntimeError::DivisionByZero { position: Some(2) }));
    assert!(matches!(eval_err("1 / $missing"),
                     Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert!(matches!(eval_err("1 / abc"), Error::Runtime(RuntimeError::DivisionByZero { .. })));
}

#[test]
fn evaluating_twice_gives_the_same_result() {
    let mut evaluator = Evaluator::new("($env.replicas + 1) * 2 > 7");
    let first = evaluator.evaluate(&scope()).unwrap();
    let second = evaluator.evaluate(&scope()).unwrap();
    assert_eq!(first, Value::Bool(true));
    assert_eq!(first, second);
}

#[test]
fn failed_evaluation_keeps_previous_alias() {
    let counter = Rc::new(Cell::new(0));
    let calls = Rc::clone(&counter);
    let scope = Scope::new().with_callback("divisor", move || {
                                calls.set(calls.get() + 1);
                                calls.get() - 1
                            });

    let mut evaluator = Evaluator::new("10 / @divisor as divided");
    assert!(evaluator.evaluate(&scope).is_err());
    assert_eq!(evaluator.alias(), "10 / @divisor as divided");

    assert_eq!(evaluator.evaluate(&scope).unwrap(), Value::Number(10.0));
    assert_eq!(evaluator.alias(), "divided");
    assert_eq!(counter.get(), 2);
}

#[test]
fn logical_operators_do_not_short_circuit() {
    let counter = Rc::new(Cell::new(0));
    let calls = Rc::clone(&counter);
    let scope = Scope::new().with_callback("touch", move || {
                                calls.set(calls.get() + 1);
                                true
                            });

    let outcome = evaluate("@isMissing && @touch", &scope).unwrap();
    assert_eq!(outcome.value, Value::Bool(false));
    assert_eq!(counter.get(), 1);
}

#[test]
fn boolean_results_are_never_taken_for_operators() {
    assert_eq!(eval("(1 == 1) && (2 == 3)"), Value::Bool(false));
    assert_eq!(eval("(1 == 1) == (2 == 2)"), Value::Bool(true));
    assert_eq!(eval("@isEnabled || @isDisabled"), Value::Bool(true));
}

#[test]
fn nesting_limit_is_enforced() {
    let source = "((((1))))";
    let mut evaluator = Evaluator::new(source).with_limits(Limits { max_depth: 3 });
    assert_eq!(evaluator.evaluate(&scope()),
               Err(Error::Parse(ParseError::NestingTooDeep { limit:    3,
                                                             position: 3, })));

    let mut evaluator = Evaluator::new(source).with_limits(Limits { max_depth: 4 });
    assert_eq!(evaluator.evaluate(&scope()), Ok(Value::Number(1.0)));
}

#[test]
fn parse_errors_point_into_the_source() {
    let mut evaluator = Evaluator::new("$x == (1 + ) as y");
    assert_eq!(evaluator.source(), "$x == (1 + ) as y");

    let Err(Error::Parse(error)) = evaluator.evaluate(&scope()) else {
        panic!("Expression was expected to fail to parse");
    };
    assert_eq!(error.position(), 9);
    assert_eq!(error.pointer(evaluator.source()), "$x == (1 + ) as y\n         ^");
}

#[test]
fn errors_render_with_positions() {
    assert_eq!(eval_err("1 + 2)").to_string(),
               "Error at position 5: Closing parenthesis ')' has no matching '('.");
    assert_eq!(eval_err("4 / 0").to_string(), "Error at position 2: Division by zero.");
}
