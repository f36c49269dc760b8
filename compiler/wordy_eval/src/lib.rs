//! Wordy Eval - Tree-walking evaluator for the Wordy language.
//!
//! # Architecture
//!
//! - [`EvaluationContext`]: the variable store the evaluator reads and writes.
//!   [`Environment`] is the in-memory implementation.
//! - [`Evaluate`]: computes the `f64` value of an [`Expr`](wordy_ir::Expr).
//! - [`Run`]: executes a [`Stmt`](wordy_ir::Stmt) for its effect on the context.
//! - [`evaluate_binary`] / [`evaluate_comparison`]: direct enum-based operator
//!   dispatch.
//!
//! Numeric edge cases are not errors: division by zero and invalid powers
//! produce IEEE-754 infinities and NaNs. The only failure is a lookup the
//! context cannot satisfy, and that error reaches the caller unchanged.
//!
//! # Tracing
//!
//! Branch selection and assignments are reported at `trace` level.
//! Enable with `RUST_LOG=wordy_eval=trace` after calling [`init_tracing`].

mod environment;
pub mod errors;
mod exec;
mod operators;

use std::sync::Once;

pub use environment::{Environment, EvaluationContext};
pub use errors::{EvalError, EvalResult};
pub use exec::{Evaluate, Run};
pub use operators::{evaluate_binary, evaluate_comparison};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
