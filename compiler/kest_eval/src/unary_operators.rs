//! Unary operator implementations for the evaluator.

use kest_ir::UnaryOp;
use kest_value::{integer_overflow, invalid_unary_op, EvalResult, Value};

/// Evaluate a unary operation using direct pattern matching.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Mirrors evaluate_binary: callers hand over the evaluated operand"
)]
pub fn evaluate_unary(value: Value, op: UnaryOp) -> EvalResult {
    match (&value, op) {
        // `-MIN` has no representation.
        (Value::Number(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| integer_overflow("negation")),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        _ => Err(invalid_unary_op(value.type_name(), op)),
    }
}
