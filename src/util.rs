/// Numeric text helpers.
///
/// This module decides which pieces of text count as numbers and how numbers
/// are written back as text. Both directions are used by operand resolution
/// and by the loose coercions applied at operator boundaries, so they live in
/// one place to keep the two consistent.
pub mod num;
