//! Tests for expression evaluation and statement execution.

use crate::{Environment, EvalError, EvalResult, Evaluate, EvaluationContext, Run};
use pretty_assertions::assert_eq;
use wordy_ir::{BinaryOp, ComparisonOp, Expr, Stmt};

/// Context that records every write, to observe which branches ran.
#[derive(Default)]
struct RecordingContext {
    env: Environment,
    writes: Vec<(String, f64)>,
}

impl EvaluationContext for RecordingContext {
    fn get(&self, name: &str) -> EvalResult<f64> {
        self.env.get(name)
    }

    fn set(&mut self, name: &str, value: f64) {
        self.writes.push((name.to_string(), value));
        self.env.set(name, value);
    }
}

fn num(value: f64) -> Expr {
    Expr::constant(value)
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

fn mark(name: &str) -> Stmt {
    Stmt::assign(name, num(1.0))
}

fn run_conditional(op: ComparisonOp, lhs: f64, rhs: f64, with_else: bool) -> Vec<String> {
    let stmt = Stmt::conditional(
        op,
        num(lhs),
        num(rhs),
        mark("ifTrue"),
        with_else.then(|| mark("ifFalse")),
    );
    let mut context = RecordingContext::default();
    stmt.run(&mut context).unwrap();
    context.writes.into_iter().map(|(name, _)| name).collect()
}

#[test]
fn test_constant_and_variable() {
    let env = Environment::new().with("x", 7.0);
    assert_eq!(num(2.5).evaluate(&env), Ok(2.5));
    assert_eq!(var("x").evaluate(&env), Ok(7.0));
}

#[test]
fn test_binary_evaluates_both_operands() {
    let env = Environment::new().with("x", 3.0).with("y", 4.0);
    let expr = Expr::binary(
        BinaryOp::Addition,
        Expr::binary(BinaryOp::Multiplication, var("x"), var("x")),
        Expr::binary(BinaryOp::Multiplication, var("y"), var("y")),
    );
    assert_eq!(expr.evaluate(&env), Ok(25.0));
}

#[test]
fn test_binary_edge_cases_propagate_as_values() {
    let env = Environment::new();
    let div = Expr::binary(BinaryOp::Division, num(1.0), num(0.0));
    assert_eq!(div.evaluate(&env), Ok(f64::INFINITY));

    let pow = Expr::binary(BinaryOp::Exponentiation, num(-1.0), num(0.5));
    assert!(pow.evaluate(&env).unwrap().is_nan());
}

#[test]
fn test_undefined_variable_reaches_caller_unchanged() {
    let env = Environment::new().with("x", 1.0);
    let expr = Expr::binary(BinaryOp::Subtraction, var("x"), var("missing"));
    assert_eq!(
        expr.evaluate(&env),
        Err(EvalError::UndefinedVariable {
            name: "missing".to_string()
        })
    );
}

#[test]
fn test_lhs_error_wins_over_rhs_error() {
    let env = Environment::new();
    let expr = Expr::binary(BinaryOp::Addition, var("first"), var("second"));
    assert_eq!(
        expr.evaluate(&env),
        Err(EvalError::UndefinedVariable {
            name: "first".to_string()
        })
    );
}

#[test]
fn test_assignment_sets_variable() {
    let mut env = Environment::new().with("x", 2.0);
    Stmt::assign("y", Expr::binary(BinaryOp::Exponentiation, var("x"), num(3.0)))
        .run(&mut env)
        .unwrap();
    assert_eq!(env.get("y"), Ok(8.0));
}

#[test]
fn test_block_runs_in_order() {
    let mut env = Environment::new();
    Stmt::block(vec![
        Stmt::assign("x", num(1.0)),
        Stmt::assign("x", Expr::binary(BinaryOp::Addition, var("x"), num(10.0))),
        Stmt::assign("y", Expr::binary(BinaryOp::Multiplication, var("x"), num(2.0))),
    ])
    .run(&mut env)
    .unwrap();
    assert_eq!(env.bindings(), [("x", 11.0), ("y", 22.0)]);
}

#[test]
fn test_block_stops_at_first_error() {
    let mut env = Environment::new();
    let result = Stmt::block(vec![
        Stmt::assign("a", num(1.0)),
        Stmt::assign("b", var("undefined")),
        Stmt::assign("c", num(3.0)),
    ])
    .run(&mut env);
    assert!(result.is_err());
    assert!(env.contains("a"));
    assert!(!env.contains("c"));
}

#[test]
fn test_equals_runs_only_if_true() {
    assert_eq!(run_conditional(ComparisonOp::Equals, 3.0, 3.0, true), ["ifTrue"]);
}

#[test]
fn test_greater_than_false_runs_else() {
    assert_eq!(run_conditional(ComparisonOp::GreaterThan, 1.0, 2.0, true), ["ifFalse"]);
}

#[test]
fn test_false_condition_without_else_runs_nothing() {
    assert!(run_conditional(ComparisonOp::GreaterThan, 1.0, 2.0, false).is_empty());
}

#[test]
fn test_less_than_selects_branch() {
    assert_eq!(run_conditional(ComparisonOp::LessThan, 1.0, 2.0, true), ["ifTrue"]);
    assert_eq!(run_conditional(ComparisonOp::LessThan, 2.0, 2.0, true), ["ifFalse"]);
}

#[test]
fn test_equals_treats_signed_zeros_as_distinct() {
    assert_eq!(run_conditional(ComparisonOp::Equals, 0.0, -0.0, true), ["ifFalse"]);
    assert_eq!(
        run_conditional(ComparisonOp::Equals, f64::NAN, f64::NAN, true),
        ["ifTrue"]
    );
}

#[test]
fn test_nested_conditionals() {
    // if x < 10 then (if x > 5 then size = 2 else size = 1) else size = 3
    let program = Stmt::conditional(
        ComparisonOp::LessThan,
        var("x"),
        num(10.0),
        Stmt::conditional(
            ComparisonOp::GreaterThan,
            var("x"),
            num(5.0),
            Stmt::assign("size", num(2.0)),
            Some(Stmt::assign("size", num(1.0))),
        ),
        Some(Stmt::assign("size", num(3.0))),
    );

    for (x, size) in [(1.0, 1.0), (7.0, 2.0), (12.0, 3.0)] {
        let mut env = Environment::new().with("x", x);
        program.run(&mut env).unwrap();
        assert_eq!(env.get("size"), Ok(size), "x = {x}");
    }
}

#[test]
fn test_conditional_operand_error_runs_no_branch() {
    let stmt = Stmt::conditional(
        ComparisonOp::Equals,
        var("missing"),
        num(0.0),
        mark("ifTrue"),
        Some(mark("ifFalse")),
    );
    let mut context = RecordingContext::default();
    assert!(stmt.run(&mut context).is_err());
    assert!(context.writes.is_empty());
}

#[test]
fn test_deeply_nested_expression_evaluates_and_drops() {
    let mut expr = num(0.0);
    for _ in 0..200_000 {
        expr = Expr::binary(BinaryOp::Addition, expr, num(1.0));
    }
    let env = Environment::new();
    assert_eq!(expr.evaluate(&env), Ok(200_000.0));
    drop(expr);
}

#[test]
fn test_computed_nan_matches_nan_constant() {
    // 0 / 0 carries a different sign bit than f64::NAN on x86.
    let computed = Expr::binary(BinaryOp::Division, num(0.0), num(0.0));
    for constant in [f64::NAN, -f64::NAN] {
        let stmt = Stmt::conditional(
            ComparisonOp::Equals,
            computed.clone(),
            num(constant),
            mark("ifTrue"),
            Some(mark("ifFalse")),
        );
        let mut context = RecordingContext::default();
        stmt.run(&mut context).unwrap();
        assert_eq!(context.writes, [("ifTrue".to_string(), 1.0)]);
    }
}

#[test]
fn test_context_supplied_nan_matches_computed_nan() {
    let stmt = Stmt::conditional(
        ComparisonOp::Equals,
        Expr::binary(BinaryOp::Exponentiation, num(-1.0), num(0.5)),
        var("missing_value"),
        mark("ifTrue"),
        Some(mark("ifFalse")),
    );
    let mut context = RecordingContext {
        env: Environment::new().with("missing_value", -f64::NAN),
        writes: Vec::new(),
    };
    stmt.run(&mut context).unwrap();
    assert_eq!(context.writes, [("ifTrue".to_string(), 1.0)]);
}
