#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a qualifier expression.
///
/// Every variant carries the byte offset in the source text where the problem
/// was detected.
pub enum ParseError {
    /// Found a `)` with no open parenthesis to close.
    UnmatchedClosingParen {
        /// Offset of the stray `)`.
        position: usize,
    },
    /// Reached the end of input while a `(` was still open.
    UnclosedParen {
        /// Offset of the `(` that was never closed.
        position: usize,
    },
    /// An operator has no operand on one of its sides.
    MissingOperand {
        /// The operator lacking an operand.
        operator: String,
        /// Offset of the operator.
        position: usize,
    },
    /// Two operands follow each other with no operator between them.
    UnexpectedOperand {
        /// Offset of the second operand.
        position: usize,
    },
    /// An expression or parenthesized group contains nothing to evaluate.
    EmptyExpression {
        /// Offset where the empty group starts.
        position: usize,
    },
    /// Parentheses are nested deeper than the configured limit allows.
    NestingTooDeep {
        /// The configured maximum depth.
        limit:    usize,
        /// Offset of the `(` that exceeded the limit.
        position: usize,
    },
}

impl ParseError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnmatchedClosingParen { position }
            | Self::UnclosedParen { position }
            | Self::MissingOperand { position, .. }
            | Self::UnexpectedOperand { position }
            | Self::EmptyExpression { position }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Renders `source` with a caret under the offending character.
    ///
    /// # Example
    /// ```
    /// use qualex::ParseError;
    ///
    /// let error = ParseError::UnmatchedClosingParen { position: 5 };
    /// assert_eq!(error.pointer("1 + 2)"), "1 + 2)\n     ^");
    /// ```
    #[must_use]
    pub fn pointer(&self, source: &str) -> String {
        let column = source.get(..self.position())
                           .map_or(0, |prefix| prefix.chars().count());
        format!("{source}\n{}^", " ".repeat(column))
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedClosingParen { position } => write!(f,
                                                               "Error at position {position}: Closing parenthesis ')' has no matching '('."),

            Self::UnclosedParen { position } => write!(f,
                                                       "Error at position {position}: Opening parenthesis '(' is never closed."),

            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Error at position {position}: Operator '{operator}' is missing an operand."),

            Self::UnexpectedOperand { position } => write!(f,
                                                           "Error at position {position}: Expected an operator between two operands."),

            Self::EmptyExpression { position } => {
                write!(f, "Error at position {position}: Expression is empty.")
            },

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Parentheses nested deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
