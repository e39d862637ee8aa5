use std::collections::HashMap;

use tracing::debug;

use crate::interpreter::value::core::Value;

/// Mutable execution state of one script run.
///
/// Holds a single flat variable namespace (last write wins, blocks do not
/// scope) and the named sample collections filled by `collect`. Samples are
/// created empty on first use and only ever appended to.
#[derive(Debug, Default, Clone)]
pub struct Environment {
    variables: HashMap<String, Value>,
    samples:   HashMap<String, Vec<Value>>,
}

impl Environment {
    /// Creates an environment with no variables and no samples.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Value> {
        self.variables.get(name).copied()
    }

    /// Creates or overwrites a variable.
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns `true` if `collect` has created the sample.
    #[must_use]
    pub fn has_sample(&self, name: &str) -> bool {
        self.samples.contains_key(name)
    }

    /// Borrows a sample's values in collection order.
    #[must_use]
    pub fn sample(&self, name: &str) -> Option<&[Value]> {
        self.samples.get(name).map(Vec::as_slice)
    }

    /// Copies a sample out as plain numbers for the statistics engine.
    ///
    /// A missing sample yields an empty vector; statistics treat both the
    /// same way.
    #[must_use]
    pub fn sample_numbers(&self, name: &str) -> Vec<f64> {
        self.sample(name)
            .map(|values| values.iter().map(Value::as_number).collect())
            .unwrap_or_default()
    }

    /// Appends a value to a sample, creating the sample on first use.
    ///
    /// # Example
    /// ```
    /// use probscript::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// assert!(!env.has_sample("s"));
    ///
    /// env.collect("s", Value::Number(1.0));
    /// env.collect("s", Value::Number(2.0));
    /// assert_eq!(env.sample("s"), Some(&[Value::Number(1.0), Value::Number(2.0)][..]));
    /// ```
    pub fn collect(&mut self, name: &str, value: Value) {
        if let Some(sample) = self.samples.get_mut(name) {
            sample.push(value);
            return;
        }
        debug!(sample = name, "created sample");
        self.samples.insert(name.to_string(), vec![value]);
    }

    /// Iterates over sample names and their lengths.
    pub fn sample_sizes(&self) -> impl Iterator<Item = (&str, usize)> {
        self.samples.iter().map(|(name, values)| (name.as_str(), values.len()))
    }
}
