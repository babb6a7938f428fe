/// Arithmetic operators: `+`, `-`, `*` and `/`.
pub mod arithmetic;
/// Comparison operators, loose and strict equality.
pub mod comparison;
/// Operator dispatch and the `as` operator.
pub mod core;
/// Logical operators: `&&` and `||`.
pub mod logic;
