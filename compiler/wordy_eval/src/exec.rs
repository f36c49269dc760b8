//! Expression evaluation and statement execution.

use wordy_ir::{Assignment, BinaryExpr, Block, Conditional, Expr, Stmt};
use wordy_stack::ensure_sufficient_stack;

use crate::environment::EvaluationContext;
use crate::errors::EvalResult;
use crate::operators::{evaluate_binary, evaluate_comparison};

/// Computes the numeric value of a node.
pub trait Evaluate {
    fn evaluate<C: EvaluationContext + ?Sized>(&self, context: &C) -> EvalResult<f64>;
}

/// Executes a node for its effect on the context.
pub trait Run {
    fn run<C: EvaluationContext + ?Sized>(&self, context: &mut C) -> EvalResult<()>;
}

impl Evaluate for Expr {
    fn evaluate<C: EvaluationContext + ?Sized>(&self, context: &C) -> EvalResult<f64> {
        match self {
            Expr::Constant(constant) => Ok(constant.value()),
            Expr::Variable(variable) => context.get(variable.name()),
            Expr::Binary(binary) => binary.evaluate(context),
        }
    }
}

impl Evaluate for BinaryExpr {
    fn evaluate<C: EvaluationContext + ?Sized>(&self, context: &C) -> EvalResult<f64> {
        ensure_sufficient_stack(|| {
            let lhs = self.lhs().evaluate(context)?;
            let rhs = self.rhs().evaluate(context)?;
            Ok(evaluate_binary(self.operator(), lhs, rhs))
        })
    }
}

impl Run for Stmt {
    fn run<C: EvaluationContext + ?Sized>(&self, context: &mut C) -> EvalResult<()> {
        ensure_sufficient_stack(|| match self {
            Stmt::Assignment(assignment) => assignment.run(context),
            Stmt::Block(block) => block.run(context),
            Stmt::Conditional(cond) => cond.run(context),
        })
    }
}

impl Run for Assignment {
    fn run<C: EvaluationContext + ?Sized>(&self, context: &mut C) -> EvalResult<()> {
        let value = self.value().evaluate(&*context)?;
        tracing::trace!(name = self.variable().name(), value, "assign");
        context.set(self.variable().name(), value);
        Ok(())
    }
}

impl Run for Block {
    fn run<C: EvaluationContext + ?Sized>(&self, context: &mut C) -> EvalResult<()> {
        for stmt in self.statements() {
            stmt.run(context)?;
        }
        Ok(())
    }
}

impl Run for Conditional {
    fn run<C: EvaluationContext + ?Sized>(&self, context: &mut C) -> EvalResult<()> {
        let lhs = self.lhs().evaluate(&*context)?;
        let rhs = self.rhs().evaluate(&*context)?;
        let holds = evaluate_comparison(self.operator(), lhs, rhs);
        tracing::trace!(operator = %self.operator(), lhs, rhs, holds, "conditional");

        // At most one branch runs.
        let branch = if holds {
            Some(self.if_true())
        } else {
            self.if_false()
        };
        match branch {
            Some(stmt) => stmt.run(context),
            None => Ok(()),
        }
    }
}
