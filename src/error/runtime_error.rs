#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing an operand queue.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// Offset of the `/` operator, or `None` when applied outside of a
        /// parsed expression.
        position: Option<usize>,
    },
    /// An operator symbol does not name any known operator.
    UnknownOperator {
        /// The unrecognized symbol.
        operator: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position: Some(position) } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::DivisionByZero { position: None } => write!(f, "Error: Division by zero."),
            Self::UnknownOperator { operator } => {
                write!(f, "Error: Unknown operator '{operator}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
