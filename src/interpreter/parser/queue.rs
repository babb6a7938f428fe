use crate::{ast::QueueEntry, error::ParseError};

/// Checks that a queue alternates operands and operators, starting and
/// ending with an operand.
///
/// # Parameters
/// - `queue`: The queue built for one parenthesis level.
/// - `position`: Offset reported when the queue is empty (the start of the
///   group).
///
/// # Errors
/// - `EmptyExpression` if the queue has no entries.
/// - `MissingOperand` if an operator leads, trails or follows another
///   operator.
/// - `UnexpectedOperand` if two operands are adjacent.
pub fn validate_queue(queue: &[QueueEntry], position: usize) -> Result<(), ParseError> {
    let mut expect_operand = true;
    let mut last_operator = None;

    for entry in queue {
        match (expect_operand, entry) {
            (true, QueueEntry::Operand { .. }) => expect_operand = false,
            (false, QueueEntry::Operator { op, position }) => {
                expect_operand = true;
                last_operator = Some((*op, *position));
            },
            (true, QueueEntry::Operator { op, position }) => {
                return Err(ParseError::MissingOperand { operator: op.to_string(),
                                                        position: *position, });
            },
            (false, QueueEntry::Operand { position, .. }) => {
                return Err(ParseError::UnexpectedOperand { position: *position });
            },
        }
    }

    match last_operator {
        _ if queue.is_empty() => Err(ParseError::EmptyExpression { position }),
        Some((op, position)) if expect_operand => {
            Err(ParseError::MissingOperand { operator: op.to_string(),
                                             position })
        },
        _ => Ok(()),
    }
}
