use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::value::core::Value};

/// Applies an arithmetic operator after coercing both operands to numbers.
///
/// # Parameters
/// - `op`: One of `+`, `-`, `*`, `/`.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator, reported on failure.
///
/// # Returns
/// A [`Value::Number`].
///
/// # Errors
/// - `DivisionByZero` if `op` is `/` and the right operand coerces to zero.
/// - `UnknownOperator` if `op` is not arithmetic.
///
/// # Example
/// ```
/// use qualex::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::core::Value},
/// };
///
/// let result = eval_arithmetic(BinaryOperator::Mul, &Value::from("3"), &Value::Number(4.0), None);
/// assert_eq!(result.unwrap(), Value::Number(12.0));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       position: Option<usize>)
                       -> Result<Value, RuntimeError> {
    let left = left.to_number();
    let right = right.to_number();

    Ok(Value::Number(match op {
                         BinaryOperator::Add => left + right,
                         BinaryOperator::Sub => left - right,
                         BinaryOperator::Mul => left * right,
                         BinaryOperator::Div => {
                             if right == 0.0 {
                                 return Err(RuntimeError::DivisionByZero { position });
                             }
                             left / right
                         },
                         _ => {
                             return Err(RuntimeError::UnknownOperator { operator:
                                                                            op.to_string() });
                         },
                     }))
}
