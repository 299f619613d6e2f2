//! Binary operator implementations for the evaluator.
//!
//! The operand families are fixed, so dispatch is a direct match on the
//! operand pair. Every arithmetic result goes through `Number`'s checked
//! methods; a result that does not fit is a domain error, never a wrapped
//! value.
//!
//! `and`/`or` are short-circuited by the interpreter before reaching here;
//! `evaluate_binary` implements their value-level meaning on two booleans.

use kest_ir::BinaryOp;
use kest_value::{
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op_for,
    modulo_by_zero, negative_exponent, EvalResult, Number, Text, Value,
};

// Helper functions for repetitive checked arithmetic patterns

/// Overflow is the only failure.
#[inline]
fn checked_arith(result: Option<Number>, op_name: &'static str) -> EvalResult {
    result
        .map(Value::Number)
        .ok_or_else(|| integer_overflow(op_name))
}

#[inline]
fn checked_div(
    divisor: Number,
    op: impl FnOnce() -> Option<Number>,
    op_name: &'static str,
) -> EvalResult {
    if divisor.is_zero() {
        Err(division_by_zero())
    } else {
        checked_arith(op(), op_name)
    }
}

#[inline]
fn checked_mod(
    divisor: Number,
    op: impl FnOnce() -> Option<Number>,
    op_name: &'static str,
) -> EvalResult {
    if divisor.is_zero() {
        Err(modulo_by_zero())
    } else {
        checked_arith(op(), op_name)
    }
}

/// Evaluate a binary operation using direct pattern matching.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> EvalResult {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => eval_number_binary(*a, *b, op),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op),
        (Value::Text(a), Value::Text(b)) => eval_text_binary(a, b, op),
        _ if left.family().is_some() && left.family() == right.family() => {
            eval_structural_binary(&left, &right, op)
        }
        _ => Err(binary_type_mismatch(left.type_name(), right.type_name())),
    }
}

/// Binary operations on numbers.
pub(crate) fn eval_number_binary(a: Number, b: Number, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div => checked_div(b, || a.checked_div(b), "division"),
        BinaryOp::Mod => checked_mod(b, || a.checked_modulo(b), "modulo"),
        BinaryOp::Pow => {
            if b.is_negative() {
                return Err(negative_exponent(b.raw()));
            }
            checked_arith(a.checked_pow(b), "exponentiation")
        }
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::LtEq => Ok(Value::Bool(a <= b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::GtEq => Ok(Value::Bool(a >= b)),
        BinaryOp::Concat | BinaryOp::And | BinaryOp::Or => {
            Err(invalid_binary_op_for("Number", op))
        }
    }
}

/// Binary operations on booleans.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::And => Ok(Value::Bool(a && b)),
        BinaryOp::Or => Ok(Value::Bool(a || b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op_for("Bool", op)),
    }
}

/// Binary operations on text.
pub(crate) fn eval_text_binary(a: &Text, b: &Text, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Concat => Ok(Value::from_text(a.concat(b))),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::NotEq => Ok(Value::Bool(a != b)),
        _ => Err(invalid_binary_op_for("Text", op)),
    }
}

/// Sequences, records and tags support only the equality operators.
fn eval_structural_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left.equals(right))),
        BinaryOp::NotEq => Ok(Value::Bool(left.not_equals(right))),
        _ => Err(invalid_binary_op_for(left.type_name(), op)),
    }
}
