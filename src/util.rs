/// Numeric conversion helpers.
///
/// Script values are all `f64`; these helpers turn them into counts and
/// orders without silently accepting NaN, infinities, negative values or
/// fractions where those make no sense.
pub mod num;
