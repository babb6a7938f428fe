/// The host-supplied variables and callbacks operands are resolved against.
///
/// Defines the `Environment` and `Callback` traits the evaluator reads from,
/// and `Scope`, a hash map backed implementation hosts can use directly.
pub mod environment;
/// The evaluator module reduces parsed expressions to values.
///
/// It owns the tokenized expression and the alias, applies operators tier by
/// tier, and reports runtime errors such as division by zero.
///
/// # Responsibilities
/// - Runs one parse-and-reduce pass per evaluation.
/// - Applies arithmetic, comparison, logical and alias operators.
/// - Keeps the alias in sync with the last successful evaluation.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer splits the raw text on operators and parentheses, keeping them
/// as standalone tokens, and folds everything between them into trimmed
/// operand tokens.
pub mod lexer;
/// The parser module walks the token sequence level by level.
///
/// Each parenthesis level is parsed by its own recursive call into a flat
/// operand queue, which is checked and reduced to one value.
///
/// # Responsibilities
/// - Matches parentheses and enforces the nesting limit.
/// - Resolves operands as they are encountered.
/// - Rejects queues that do not alternate operands and operators.
pub mod parser;
/// Operand resolution.
///
/// Turns a single operand token into a value: `$` for variables, `@` for
/// callbacks, anything else as a literal.
pub mod resolver;
/// The value module defines the runtime data type for evaluation.
pub mod value;
