/// Runtime value representation and the coercions applied at operator
/// boundaries.
pub mod core;
