use tracing::instrument;

use crate::{
    error::EvalResult,
    interpreter::{
        environment::Environment,
        lexer::{Lexeme, tokenize},
        parser::core::Parser,
        value::core::Value,
    },
};

/// Default maximum parenthesis nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Limits applied while evaluating an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest parenthesis nesting accepted. Each level costs one recursive
    /// call, so this bounds stack usage.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// Evaluates one qualifier expression.
///
/// The expression is tokenized once, at construction. Each call to
/// [`Evaluator::evaluate`] parses the tokens from the start, so calling it
/// again gives the same result as long as the environment is unchanged.
///
/// ## Alias
///
/// The alias starts out as the raw expression text. A successful evaluation
/// sets it to the right operand of the last `as` applied, or back to the raw
/// text if the expression has no `as`. A failed evaluation leaves it as it
/// was.
///
/// # Example
/// ```
/// use qualex::interpreter::{environment::Scope, evaluator::core::Evaluator, value::core::Value};
/// use serde_json::json;
///
/// let scope = Scope::new().with_variable("env", json!({ "mode": "production" }))
///                         .with_callback("isEnabled", || true);
///
/// let mut evaluator = Evaluator::new("$env.mode == production && @isEnabled as live");
/// assert_eq!(evaluator.alias(), "$env.mode == production && @isEnabled as live");
///
/// assert_eq!(evaluator.evaluate(&scope).unwrap(), Value::Bool(true));
/// assert_eq!(evaluator.alias(), "live");
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    source:  String,
    lexemes: Vec<Lexeme>,
    alias:   String,
    limits:  Limits,
}

impl Evaluator {
    /// Tokenizes `source` and creates an evaluator for it.
    ///
    /// Tokenization accepts any text; structural problems such as unbalanced
    /// parentheses are reported by [`Evaluator::evaluate`].
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let lexemes = tokenize(&source);
        Self { alias: source.clone(),
               source,
               lexemes,
               limits: Limits::default() }
    }

    /// Replaces the evaluation limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// The raw expression text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The current alias.
    #[must_use]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    /// Evaluates the expression against `env`.
    ///
    /// # Errors
    /// - `ParseError` if the expression is malformed: a `)` without a
    ///   matching `(`, a `(` never closed, an operator missing an operand,
    ///   adjacent operands, an empty group, or nesting deeper than
    ///   [`Limits::max_depth`].
    /// - `RuntimeError::DivisionByZero` for `/` with a divisor that coerces to
    ///   zero.
    #[instrument(level = "debug", skip_all, fields(expression = %self.source))]
    pub fn evaluate(&mut self, env: &dyn Environment) -> EvalResult<Value> {
        let parser = Parser::new(&self.lexemes, env, self.limits, self.source.clone());
        let (value, alias) = parser.parse()?;
        self.alias = alias;
        Ok(value)
    }
}

/// The two results a configuration loader consumes for a section qualifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The value the expression reduced to.
    pub value: Value,
    /// The alias after evaluation.
    pub alias: String,
}

impl Outcome {
    /// Whether the qualified section applies, i.e. whether the value is
    /// truthy.
    #[must_use]
    pub fn applies(&self) -> bool {
        self.value.to_bool()
    }
}
