use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Value};

/// Maps an equality-style operator and an equality result to the final
/// boolean.
///
/// The negated variants (`!=`, `<>`, `!==`) invert the result.
#[must_use]
pub const fn equality_op_result(op: BinaryOperator, is_equal: bool) -> bool {
    match op {
        BinaryOperator::NotEqual | BinaryOperator::LessGreater | BinaryOperator::NotIdentical => {
            !is_equal
        },
        _ => is_equal,
    }
}

/// Compares two values with loose equality.
///
/// - If either side is a boolean, both sides are compared as booleans.
/// - `Null` equals `Null`, the empty string and zero.
/// - If both sides are numbers or numeric-looking text, they are compared as
///   numbers.
/// - Otherwise both sides are compared as text.
///
/// # Example
/// ```
/// use qualex::interpreter::{evaluator::binary::comparison::loose_eq, value::core::Value};
///
/// assert!(loose_eq(&Value::from("5"), &Value::Number(5.0)));
/// assert!(loose_eq(&Value::from("1.0"), &Value::from("1")));
/// assert!(loose_eq(&Value::Null, &Value::from("")));
/// assert!(!loose_eq(&Value::from("abc"), &Value::Number(0.0)));
/// ```
#[must_use]
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(_), _) | (_, Value::Bool(_)) => left.to_bool() == right.to_bool(),
        (Value::Null, Value::Null) => true,
        (Value::Null, other) | (other, Value::Null) => is_blank(other),
        _ => match (left.as_numeric(), right.as_numeric()) {
            (Some(l), Some(r)) => l == r,
            _ => left.to_text() == right.to_text(),
        },
    }
}

/// Compares two values with strict equality: same variant and same payload.
#[must_use]
pub fn strict_eq(left: &Value, right: &Value) -> bool {
    left == right
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Number(n) => *n == 0.0,
        Value::Null => true,
        Value::Bool(b) => !b,
    }
}

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// `==`, `!=` and `<>` use [`loose_eq`]; `===` and `!==` use [`strict_eq`];
/// `<`, `>`, `<=` and `>=` compare both sides after [`Value::to_number`].
///
/// # Errors
/// Returns `UnknownOperator` if `op` is not a comparison.
///
/// # Example
/// ```
/// use qualex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let five = Value::from("5");
/// let result = eval_comparison(BinaryOperator::Identical, &five, &Value::Number(5.0));
/// assert_eq!(result.unwrap(), Value::Bool(false));
///
/// let result = eval_comparison(BinaryOperator::Less, &five, &Value::from("10"));
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value)
                       -> Result<Value, RuntimeError> {
    Ok(Value::Bool(match op {
                       BinaryOperator::Equal
                       | BinaryOperator::NotEqual
                       | BinaryOperator::LessGreater => {
                           equality_op_result(op, loose_eq(left, right))
                       },

                       BinaryOperator::Identical | BinaryOperator::NotIdentical => {
                           equality_op_result(op, strict_eq(left, right))
                       },

                       BinaryOperator::Less
                       | BinaryOperator::Greater
                       | BinaryOperator::LessEqual
                       | BinaryOperator::GreaterEqual => {
                           let left = left.to_number();
                           let right = right.to_number();

                           match op {
                               BinaryOperator::Less => left < right,
                               BinaryOperator::Greater => left > right,
                               BinaryOperator::LessEqual => left <= right,
                               _ => left >= right,
                           }
                       },

                       _ => {
                           return Err(RuntimeError::UnknownOperator { operator:
                                                                          op.to_string() });
                       },
                   }))
}
