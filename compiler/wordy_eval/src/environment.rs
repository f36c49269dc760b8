//! Variable storage for the evaluator.
//!
//! The evaluator only talks to [`EvaluationContext`]; embedders with their
//! own storage implement the trait, everyone else uses [`Environment`].

use rustc_hash::FxHashMap;

use crate::errors::{undefined_variable, EvalResult};

/// Mutable mapping from variable name to value.
///
/// Errors returned by [`get`](Self::get) pass through the evaluator
/// untouched.
pub trait EvaluationContext {
    /// Look up a variable.
    fn get(&self, name: &str) -> EvalResult<f64>;

    /// Bind or rebind a variable.
    fn set(&mut self, name: &str, value: f64);
}

/// In-memory, flat variable store.
///
/// Wordy has a single global scope, so there is no scope stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    variables: FxHashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style binding, for setting up inputs.
    #[must_use]
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.set(name, value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings, sorted by name.
    pub fn bindings(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<_> = self
            .variables
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
            .collect();
        bindings.sort_unstable_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}

impl EvaluationContext for Environment {
    fn get(&self, name: &str) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| undefined_variable(name))
    }

    fn set(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }
}
