/// Parsing errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// operand queues: unbalanced parentheses, misplaced operators and operands,
/// and nesting beyond the configured limit.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing a queue, such
/// as division by zero or an operator symbol that is not recognized.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Result type used by every fallible entry point of the crate.
pub type EvalResult<T> = Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure raised while evaluating a qualifier expression.
///
/// Variable and callback lookups never fail; they resolve to
/// [`Value::Null`](crate::interpreter::value::core::Value::Null) instead.
pub enum Error {
    /// The expression is structurally malformed.
    Parse(ParseError),
    /// An operator could not be applied to its operands.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
