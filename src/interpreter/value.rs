/// Runtime value representation.
///
/// Defines the `Value` enum produced by expression evaluation and stored in
/// variables and sample collections.
pub mod core;
