/// Recursive descent over the token sequence.
///
/// Builds one operand queue per parenthesis level, resolving operands as it
/// goes and reducing each completed queue to a single value.
pub mod core;
/// Operand queue shape checks.
///
/// Verifies that a queue alternates operands and operators before it is
/// handed to reduction.
pub mod queue;
