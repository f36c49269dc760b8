//! Operator Types
//!
//! Wordy has five arithmetic operators and three comparisons. There are no
//! boolean operators: a conditional compares exactly two expressions.

use std::fmt;

/// Arithmetic operators joining two expressions ("x plus y").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
}

impl BinaryOp {
    /// Every arithmetic operator, in declaration order.
    pub const ALL: [BinaryOp; 5] = [
        Self::Addition,
        Self::Subtraction,
        Self::Multiplication,
        Self::Division,
        Self::Exponentiation,
    ];

    /// The operator's name as shown in debug output and tree dumps.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Addition => "ADDITION",
            Self::Subtraction => "SUBTRACTION",
            Self::Multiplication => "MULTIPLICATION",
            Self::Division => "DIVISION",
            Self::Exponentiation => "EXPONENTIATION",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparisons allowed in a conditional ("If x is less than y then ...").
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparisonOp {
    Equals,
    LessThan,
    GreaterThan,
}

impl ComparisonOp {
    /// Every comparison operator, in declaration order.
    pub const ALL: [ComparisonOp; 3] = [Self::Equals, Self::LessThan, Self::GreaterThan];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Equals => "EQUALS",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThan => "GREATER_THAN",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
