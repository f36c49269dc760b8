//! Expression Types
//!
//! Expressions evaluate to an `f64`. Wordy has no other value type.

use std::fmt;

use super::operators::BinaryOp;

/// Expression node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Numeric literal
    Constant(Constant),
    /// Variable reference
    Variable(Variable),
    /// Two expressions joined by an operator ("x plus y")
    Binary(BinaryExpr),
}

impl Expr {
    pub fn constant(value: f64) -> Self {
        Expr::Constant(Constant::new(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable::new(name))
    }

    pub fn binary(operator: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary(BinaryExpr::new(operator, lhs, rhs))
    }
}

/// Drops a deep tree without recursing once per level.
///
/// Nested binary operands are moved onto a work list and dropped one at a
/// time, each already stripped of its own nested operands.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_operands(self, &mut pending);
        while let Some(mut expr) = pending.pop() {
            detach_operands(&mut expr, &mut pending);
        }
    }
}

/// Move the binary operands of `expr` onto `pending`, leaving leaves behind.
fn detach_operands(expr: &mut Expr, pending: &mut Vec<Expr>) {
    if let Expr::Binary(binary) = expr {
        for operand in [&mut binary.lhs, &mut binary.rhs] {
            if matches!(**operand, Expr::Binary(_)) {
                pending.push(std::mem::replace(&mut **operand, Expr::constant(0.0)));
            }
        }
    }
}

impl From<Constant> for Expr {
    fn from(constant: Constant) -> Self {
        Expr::Constant(constant)
    }
}

impl From<Variable> for Expr {
    fn from(variable: Variable) -> Self {
        Expr::Variable(variable)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(binary: BinaryExpr) -> Self {
        Expr::Binary(binary)
    }
}

/// A numeric literal.
///
/// The value is stored as raw bits so `Eq` and `Hash` are total: two
/// constants are equal iff their bit patterns match. NaNs are canonicalised
/// on construction, so every NaN constant equals every other, and `0.0`
/// differs from `-0.0`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cache", serde(from = "f64", into = "f64"))]
pub struct Constant {
    bits: u64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() { f64::NAN } else { value };
        Constant {
            bits: value.to_bits(),
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        f64::from_bits(self.bits)
    }
}

impl From<f64> for Constant {
    fn from(value: f64) -> Self {
        Constant::new(value)
    }
}

impl From<Constant> for f64 {
    fn from(constant: Constant) -> Self {
        constant.value()
    }
}

impl fmt::Debug for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant({:?})", self.value())
    }
}

/// A named variable, resolved against the evaluation context at run time.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Two expressions joined by an arithmetic operator.
///
/// Both operands are always present; the type makes a missing operand
/// unrepresentable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct BinaryExpr {
    operator: BinaryOp,
    lhs: Box<Expr>,
    rhs: Box<Expr>,
}

impl BinaryExpr {
    pub fn new(operator: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        BinaryExpr {
            operator,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[inline]
    pub fn operator(&self) -> BinaryOp {
        self.operator
    }

    #[inline]
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}
