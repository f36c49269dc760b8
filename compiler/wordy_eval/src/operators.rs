//! Operator implementations for the evaluator.
//!
//! The operator sets are closed, so dispatch is a plain exhaustive match.
//! All arithmetic follows IEEE-754: nothing here can fail.

use std::cmp::Ordering;

use wordy_ir::{BinaryOp, ComparisonOp};

/// Apply an arithmetic operator to two already-evaluated operands.
#[inline]
pub fn evaluate_binary(op: BinaryOp, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinaryOp::Addition => lhs + rhs,
        BinaryOp::Subtraction => lhs - rhs,
        BinaryOp::Multiplication => lhs * rhs,
        // x / 0 is +-inf, 0 / 0 is NaN
        BinaryOp::Division => lhs / rhs,
        BinaryOp::Exponentiation => lhs.powf(rhs),
    }
}

/// Decide a conditional's comparison.
///
/// `Equals` uses the IEEE-754 total order rather than `==`, so `-0.0`
/// differs from `0.0`, except that every NaN equals every other NaN whatever
/// its sign or payload. A NaN computed at run time and a NaN constant then
/// compare the same way on every target. The ordering comparisons are the
/// usual strict ones (false if either side is NaN).
#[inline]
pub fn evaluate_comparison(op: ComparisonOp, lhs: f64, rhs: f64) -> bool {
    match op {
        ComparisonOp::Equals => {
            (lhs.is_nan() && rhs.is_nan()) || lhs.total_cmp(&rhs) == Ordering::Equal
        }
        ComparisonOp::LessThan => lhs < rhs,
        ComparisonOp::GreaterThan => lhs > rhs,
    }
}
