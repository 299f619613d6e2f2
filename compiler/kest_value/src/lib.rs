#![deny(clippy::arithmetic_side_effects)]
//! Kest Value - the value model of the Kest language.
//!
//! Five value families (Number, Text, Sequence, Record, Tag) plus the
//! first-class optional and result tags and function values. Every value is
//! immutable; operations that "modify" a value return a new one and heap
//! data is shared through `Heap<T>`.
//!
//! This crate also owns `EvalError`, the error type every evaluation step
//! reports through.

mod errors;
mod value;

pub use errors::{
    arity_mismatch, binary_type_mismatch, budget_exceeded, division_by_zero, integer_overflow,
    invalid_binary_op_for, invalid_unary_op, modulo_by_zero, negative_exponent,
    non_exhaustive_match, not_callable, recursion_limit_exceeded, type_mismatch,
    undefined_field, undefined_method, undefined_variable, unknown_variant, EvalError,
    EvalErrorKind, EvalNote, EvalResult,
};
pub use value::{
    Discriminant, FunctionValue, Heap, Number, RecordValue, TagValue, Text, Value, ValueDisplay,
};

pub use kest_ir::{Name, StringInterner};
