use std::str::FromStr;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Represents the binary operators available in qualifier expressions.
///
/// There are no unary operators; every operator takes the operand to its
/// left and the operand to its right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `===`
    Identical,
    /// `!==`
    NotIdentical,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `<>`
    LessGreater,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `as`
    As,
}

/// Precedence groups, highest first.
///
/// Operators in the same tier are applied left to right before any operator
/// of the next tier is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// `*` and `/`.
    Multiplicative,
    /// `+` and `-`.
    Additive,
    /// Equality and relational comparisons.
    Comparison,
    /// `&&` and `||`.
    Logical,
    /// `as`.
    Alias,
}

impl Tier {
    /// Every tier in reduction order.
    pub const ALL: [Self; 5] = [Self::Multiplicative,
                                Self::Additive,
                                Self::Comparison,
                                Self::Logical,
                                Self::Alias];
}

impl BinaryOperator {
    /// Returns the precedence tier the operator belongs to.
    ///
    /// # Example
    /// ```
    /// use qualex::ast::{BinaryOperator, Tier};
    ///
    /// assert_eq!(BinaryOperator::Mul.tier(), Tier::Multiplicative);
    /// assert!(BinaryOperator::Add.tier() < BinaryOperator::As.tier());
    /// ```
    #[must_use]
    pub const fn tier(self) -> Tier {
        use BinaryOperator::{
            Add, And, As, Div, Equal, Greater, GreaterEqual, Identical, Less, LessEqual,
            LessGreater, Mul, NotEqual, NotIdentical, Or, Sub,
        };
        match self {
            Mul | Div => Tier::Multiplicative,
            Add | Sub => Tier::Additive,
            Equal | NotEqual | Identical | NotIdentical | Less | Greater | GreaterEqual
            | LessEqual | LessGreater => Tier::Comparison,
            And | Or => Tier::Logical,
            As => Tier::Alias,
        }
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        use BinaryOperator::{
            Add, And, As, Div, Equal, Greater, GreaterEqual, Identical, Less, LessEqual,
            LessGreater, Mul, NotEqual, NotIdentical, Or, Sub,
        };
        match self {
            Mul => "*",
            Div => "/",
            Add => "+",
            Sub => "-",
            Equal => "==",
            NotEqual => "!=",
            Identical => "===",
            NotIdentical => "!==",
            Less => "<",
            Greater => ">",
            GreaterEqual => ">=",
            LessEqual => "<=",
            LessGreater => "<>",
            And => "&&",
            Or => "||",
            As => "as",
        }
    }
}

impl FromStr for BinaryOperator {
    type Err = RuntimeError;

    /// Maps an operator spelling back to the operator.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnknownOperator`] for any other text.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        use BinaryOperator::{
            Add, And, As, Div, Equal, Greater, GreaterEqual, Identical, Less, LessEqual,
            LessGreater, Mul, NotEqual, NotIdentical, Or, Sub,
        };
        Ok(match symbol {
            "*" => Mul,
            "/" => Div,
            "+" => Add,
            "-" => Sub,
            "==" => Equal,
            "!=" => NotEqual,
            "===" => Identical,
            "!==" => NotIdentical,
            "<" => Less,
            ">" => Greater,
            ">=" => GreaterEqual,
            "<=" => LessEqual,
            "<>" => LessGreater,
            "&&" => And,
            "||" => Or,
            "as" => As,
            _ => {
                return Err(RuntimeError::UnknownOperator { operator: symbol.to_string() });
            },
        })
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One entry of an operand queue.
///
/// A queue alternates operands and operators and is reduced to a single value
/// per parenthesis level. Operators are a separate variant, so an operand
/// whose text happens to spell an operator is never applied as one.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueEntry {
    /// A resolved operand, or the reduced value of a parenthesized group.
    Operand {
        /// The operand value.
        value:    Value,
        /// The token as written, when the operand is a literal. Computed
        /// results and `$`/`@` references have none.
        literal:  Option<String>,
        /// Offset of the operand in the source text.
        position: usize,
    },
    /// An operator waiting to be applied.
    Operator {
        /// The operator.
        op:       BinaryOperator,
        /// Offset of the operator in the source text.
        position: usize,
    },
}

impl QueueEntry {
    /// Returns the source offset of the entry.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Operand { position, .. } | Self::Operator { position, .. } => *position,
        }
    }
}
