use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Value};

/// Evaluates a logical operation between two values.
///
/// The operands are converted with [`Value::to_bool`]. Both were resolved
/// before the operator is applied, so there is no short-circuiting.
///
/// # Errors
/// Returns `UnknownOperator` if `op` is neither `&&` nor `||`.
///
/// # Example
/// ```
/// use qualex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::logic::eval_logic, value::core::Value},
/// };
///
/// let result = eval_logic(BinaryOperator::Or, &Value::Null, &Value::from("yes"));
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// ```
pub fn eval_logic(op: BinaryOperator, left: &Value, right: &Value) -> Result<Value, RuntimeError> {
    match op {
        BinaryOperator::And => Ok(Value::Bool(left.to_bool() && right.to_bool())),
        BinaryOperator::Or => Ok(Value::Bool(left.to_bool() || right.to_bool())),
        _ => Err(RuntimeError::UnknownOperator { operator: op.to_string() }),
    }
}
