//! # qualex
//!
//! qualex evaluates the small conditional and aliasing expressions that
//! qualify configuration sections, such as a section header reading
//! `some.key == $env.mode && @isEnabled as production`. A configuration loader
//! hands the expression text to qualex and gets back a value (does the section
//! apply?) and an alias (what is the section called?).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the operators and operand queue entries.
///
/// This module declares the `BinaryOperator` enum with its precedence tiers
/// and the `QueueEntry` type that parenthesis levels are flattened into before
/// reduction.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing or
/// reducing an expression. Unresolved variables and callbacks are not errors;
/// they evaluate to `null`.
///
/// # Responsibilities
/// - Defines error enums for both failure phases (parser, evaluator).
/// - Attaches source positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation of qualifier expressions.
///
/// This module ties together lexing, parsing, operand resolution, reduction
/// and the host environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, resolver, evaluator and
///   value types.
/// - Provides the `Evaluator` entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Helpers for numeric text.
pub mod util;

pub use error::{Error, EvalResult, ParseError, RuntimeError};
pub use interpreter::{
    environment::{Callback, Environment, Scope},
    evaluator::core::{Evaluator, Limits, Outcome},
    value::core::Value,
};

/// Evaluates a qualifier expression in one call.
///
/// # Errors
/// Returns an error if the expression is malformed or an operator fails (for
/// example division by zero).
///
/// # Examples
/// ```
/// use qualex::{Scope, evaluate};
/// use serde_json::json;
///
/// let scope = Scope::new().with_variable("env", json!({ "mode": "staging" }));
///
/// let outcome = evaluate("$env.mode == staging as preview", &scope).unwrap();
/// assert!(outcome.applies());
/// assert_eq!(outcome.alias, "preview");
///
/// // Unbalanced parentheses are rejected.
/// assert!(evaluate("(1 + 2", &scope).is_err());
/// ```
pub fn evaluate(source: &str, env: &dyn Environment) -> EvalResult<Outcome> {
    let mut evaluator = Evaluator::new(source);
    let value = evaluator.evaluate(env)?;
    Ok(Outcome { value,
                 alias: evaluator.alias().to_string() })
}
