//! Argument validation and extraction.

use kest_ir::builtin_methods::{MethodDef, ParamSpec};
use kest_ir::BinaryOp;
use kest_value::{
    integer_overflow, type_mismatch, EvalError, EvalNote, EvalResult, Number, Text, Value,
};

/// Operators that have a runtime library method name.
const OPERATOR_METHODS: [BinaryOp; 13] = [
    BinaryOp::Add,
    BinaryOp::Sub,
    BinaryOp::Mul,
    BinaryOp::Div,
    BinaryOp::Mod,
    BinaryOp::Pow,
    BinaryOp::Concat,
    BinaryOp::Eq,
    BinaryOp::NotEq,
    BinaryOp::Lt,
    BinaryOp::LtEq,
    BinaryOp::Gt,
    BinaryOp::GtEq,
];

/// The operator a method name such as `"lessThan"` stands for.
pub(super) fn operator_for_method(method: &str) -> Option<BinaryOp> {
    OPERATOR_METHODS
        .into_iter()
        .find(|op| op.runtime_method() == Some(method))
}

/// Check each argument against the method's parameter specs.
pub(super) fn check_args(def: &MethodDef, receiver: &Value, args: &[Value]) -> Result<(), EvalError> {
    for (position, (param, arg)) in def.params.iter().zip(args).enumerate() {
        let accepted = match param {
            ParamSpec::SelfType => arg.family() == receiver.family(),
            ParamSpec::Number => matches!(arg, Value::Number(_)),
            ParamSpec::Text => matches!(arg, Value::Text(_)),
            ParamSpec::Record => matches!(arg, Value::Record(_)),
            ParamSpec::Function => matches!(arg, Value::Function(_)),
            ParamSpec::Any => true,
        };
        if !accepted {
            let expected = match param {
                ParamSpec::SelfType => receiver.type_name(),
                ParamSpec::Number => "Number",
                ParamSpec::Text => "Text",
                ParamSpec::Record => "Record",
                ParamSpec::Function => "Function",
                ParamSpec::Any => "any value",
            };
            return Err(type_mismatch(expected, arg.type_name()).with_note(EvalNote::new(
                format!("argument {position} of {}:{}", receiver.type_name(), def.name),
            )));
        }
    }
    Ok(())
}

pub(super) fn arg(args: &[Value], position: usize) -> Result<&Value, EvalError> {
    args.get(position)
        .ok_or_else(|| EvalError::new(format!("missing argument {position}")))
}

pub(super) fn number_arg(args: &[Value], position: usize) -> Result<Number, EvalError> {
    let value = arg(args, position)?;
    value
        .as_number()
        .ok_or_else(|| type_mismatch("Number", value.type_name()))
}

pub(super) fn text_arg(args: &[Value], position: usize) -> Result<&Text, EvalError> {
    let value = arg(args, position)?;
    value
        .as_text()
        .ok_or_else(|| type_mismatch("Text", value.type_name()))
}

/// A length as a `Number`.
pub(super) fn size_value(len: usize) -> EvalResult {
    i64::try_from(len)
        .map(Value::number)
        .map_err(|_| integer_overflow("size"))
}
