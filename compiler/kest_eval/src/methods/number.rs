//! Number methods: one per arithmetic and comparison operator.

use kest_value::{undefined_method, EvalResult, Number, Value};

use super::helpers::{number_arg, operator_for_method};
use crate::operators::eval_number_binary;

pub(super) fn dispatch_number_method(receiver: Number, method: &str, args: &[Value]) -> EvalResult {
    let Some(op) = operator_for_method(method) else {
        return Err(undefined_method(method, "Number"));
    };
    eval_number_binary(receiver, number_arg(args, 0)?, op)
}
