/// Binary operator evaluation logic.
///
/// Applies arithmetic, comparison, logical and alias operators to two
/// already-resolved values.
pub mod binary;

/// Evaluator entry point and its configuration.
///
/// Holds the tokenized expression, the current alias and the nesting limit,
/// and runs one parse-and-reduce pass per call to `evaluate`.
pub mod core;

/// Precedence-tier reduction of an operand queue.
pub mod reduce;
