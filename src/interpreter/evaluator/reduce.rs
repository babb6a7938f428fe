use tracing::trace;

use crate::{
    ast::{BinaryOperator, QueueEntry, Tier},
    error::{EvalResult, ParseError},
    interpreter::{evaluator::binary::core::eval_binary, value::core::Value},
};

/// Reduces an operand queue to a single value.
///
/// Tiers are processed from highest to lowest precedence. Within a tier the
/// leftmost operator is applied first: its two neighbouring operands and the
/// operator itself are replaced by the result, and the scan restarts from
/// the front of the shortened queue. Only [`QueueEntry::Operator`] entries
/// are ever applied, so an operand whose value spells an operator is never
/// mistaken for one.
///
/// # Parameters
/// - `queue`: An alternating operand/operator queue, as checked by
///   [`validate_queue`](crate::interpreter::parser::queue::validate_queue).
/// - `alias`: The alias of the running evaluation, updated by `as`.
///
/// # Errors
/// - `ParseError` if the queue does not alternate properly.
/// - Any error raised while applying an operator.
pub fn reduce(mut queue: Vec<QueueEntry>, alias: &mut String) -> EvalResult<Value> {
    for tier in Tier::ALL {
        while let Some((index, op, position)) = find_operator(&queue, tier) {
            let (left, _, left_position) =
                operand_at(&queue, index.checked_sub(1), op, position)?;
            let (right, right_literal, _) = operand_at(&queue, Some(index + 1), op, position)?;

            // `as` names the alias with a literal exactly as it was written.
            let spelled;
            let right = if op == BinaryOperator::As
                           && let Some(text) = right_literal
            {
                spelled = Value::from(text);
                &spelled
            } else {
                right
            };

            let result = eval_binary(op, left, right, Some(position), alias)?;
            trace!(%op, %left, %right, %result, "reduced");

            queue[index - 1] = QueueEntry::Operand { value:    result,
                                                     literal:  None,
                                                     position: left_position, };
            queue.drain(index..=index + 1);
        }
    }

    match queue.as_slice() {
        [QueueEntry::Operand { value, .. }] => Ok(value.clone()),
        [] => Err(ParseError::EmptyExpression { position: 0 }.into()),
        [_, second, ..] => {
            Err(ParseError::UnexpectedOperand { position: second.position() }.into())
        },
        [QueueEntry::Operator { op, position }] => {
            Err(ParseError::MissingOperand { operator: op.to_string(),
                                             position: *position, }.into())
        },
    }
}

/// Finds the leftmost operator of `tier`.
fn find_operator(queue: &[QueueEntry], tier: Tier) -> Option<(usize, BinaryOperator, usize)> {
    queue.iter().enumerate().find_map(|(index, entry)| match entry {
                                 QueueEntry::Operator { op, position } if op.tier() == tier => {
                                     Some((index, *op, *position))
                                 },
                                 _ => None,
                             })
}

/// Returns the operand at `index` with its literal spelling, or a
/// `MissingOperand` error naming `op`.
fn operand_at(queue: &[QueueEntry],
              index: Option<usize>,
              op: BinaryOperator,
              position: usize)
              -> Result<(&Value, Option<&str>, usize), ParseError> {
    match index.and_then(|i| queue.get(i)) {
        Some(QueueEntry::Operand { value,
                                   literal,
                                   position, }) => Ok((value, literal.as_deref(), *position)),
        _ => Err(ParseError::MissingOperand { operator: op.to_string(),
                                              position }),
    }
}
