use tracing::debug;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{
            arithmetic::eval_arithmetic, comparison::eval_comparison, logic::eval_logic,
        },
        value::core::Value,
    },
};

/// Evaluates a binary operation between two values.
///
/// Arithmetic operators go to [`eval_arithmetic`], comparisons to
/// [`eval_comparison`] and `&&`/`||` to [`eval_logic`]. The `as` operator
/// overwrites `alias` with the right operand's text and yields the left
/// operand unchanged.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator, reported on failure.
/// - `alias`: The alias of the running evaluation.
///
/// # Errors
/// Returns `DivisionByZero` for `/` with a zero divisor.
///
/// # Example
/// ```
/// use qualex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
/// };
///
/// let mut alias = String::from("original");
/// let result = eval_binary(BinaryOperator::As,
///                          &Value::Bool(true),
///                          &Value::from("renamed"),
///                          None,
///                          &mut alias);
///
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// assert_eq!(alias, "renamed");
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   position: Option<usize>,
                   alias: &mut String)
                   -> Result<Value, RuntimeError> {
    use BinaryOperator::{
        Add, And, As, Div, Equal, Greater, GreaterEqual, Identical, Less, LessEqual, LessGreater,
        Mul, NotEqual, NotIdentical, Or, Sub,
    };

    match op {
        Add | Sub | Mul | Div => eval_arithmetic(op, left, right, position),

        Equal | NotEqual | Identical | NotIdentical | Less | Greater | GreaterEqual | LessEqual
        | LessGreater => eval_comparison(op, left, right),

        And | Or => eval_logic(op, left, right),

        As => {
            let renamed = right.to_text();
            debug!(from = %alias, to = %renamed, "alias reassigned");
            *alias = renamed;
            Ok(left.clone())
        },
    }
}

/// Applies an operator given by its spelling.
///
/// This is the entry point for hosts that hold operators as text rather than
/// as [`BinaryOperator`] values.
///
/// # Errors
/// - `UnknownOperator` if `symbol` is not an operator spelling.
/// - Any error [`eval_binary`] raises.
///
/// # Example
/// ```
/// use qualex::{
///     error::RuntimeError,
///     interpreter::{evaluator::binary::core::apply_operator, value::core::Value},
/// };
///
/// let mut alias = String::new();
/// let sum = apply_operator("+", &Value::from("2"), &Value::from("3"), &mut alias);
/// assert_eq!(sum.unwrap(), Value::Number(5.0));
///
/// let unknown = apply_operator("%", &Value::Null, &Value::Null, &mut alias);
/// assert_eq!(unknown, Err(RuntimeError::UnknownOperator { operator: "%".to_string() }));
/// ```
pub fn apply_operator(symbol: &str,
                      left: &Value,
                      right: &Value,
                      alias: &mut String)
                      -> Result<Value, RuntimeError> {
    let op: BinaryOperator = symbol.parse()?;
    eval_binary(op, left, right, None, alias)
}
