/// Built-in dispatch table and call evaluation.
pub mod core;
/// Math built-ins: `sqrt` and `pow`.
pub mod math;
/// Random draws from the interpreter's generator: `uniform` and `normal`.
pub mod random;
/// The explicit statistics query `get_stat`.
pub mod stat;
