//! Evaluation errors.
//!
//! Arithmetic never fails in Wordy, so the only error the evaluator can
//! surface is one raised by the evaluation context.

use thiserror::Error;

/// Error raised while evaluating an expression or running a statement.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A variable was read before anything was assigned to it.
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },
}

/// Result type for evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Create an undefined variable error.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::UndefinedVariable {
        name: name.to_string(),
    }
}
