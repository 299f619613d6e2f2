//! The runtime library: methods every value family answers to.
//!
//! Dispatch is validated against `kest_ir::builtin_methods` first, so an
//! unknown method, a wrong argument count and a wrong argument type are
//! reported uniformly before any family-specific code runs.
//!
//! # Module Structure
//!
//! - [`helpers`]: argument validation and extraction
//! - [`number`]: operator methods on numbers
//! - [`text`]: `size`, `getCharCode`, `concat`
//! - [`sequence`]: `get`, `append`, `size`, `mapWithResult`
//! - [`record`]: both shapes of `set`
//!
//! `clone`, `equals` and `notEquals` are uniform across families and are
//! handled here.

mod helpers;
mod number;
mod record;
mod sequence;
mod text;

use kest_ir::builtin_methods::{find_method, find_overload};
use kest_value::{arity_mismatch, undefined_method, EvalResult, StringInterner, Value};

pub use sequence::map_with_result;

/// Invokes function values on behalf of runtime library methods.
///
/// `mapWithResult` needs to call back into the language; the interpreter
/// implements this, and hosts can supply a native closure via `NativeCaller`.
pub trait FunctionCaller {
    fn call(&mut self, func: &Value, args: Vec<Value>) -> EvalResult;
}

/// Adapts a Rust closure to `FunctionCaller`.
pub struct NativeCaller<F>(pub F);

impl<F> FunctionCaller for NativeCaller<F>
where
    F: FnMut(&Value, Vec<Value>) -> EvalResult,
{
    fn call(&mut self, func: &Value, args: Vec<Value>) -> EvalResult {
        (self.0)(func, args)
    }
}

/// Dispatch a runtime library call on `receiver`.
pub fn dispatch_builtin_method(
    receiver: Value,
    method: &str,
    args: Vec<Value>,
    interner: &StringInterner,
    caller: &mut dyn FunctionCaller,
) -> EvalResult {
    let Some(family) = receiver.family() else {
        return Err(undefined_method(method, receiver.type_name()));
    };
    let Some(def) = find_overload(family, method, args.len()) else {
        return Err(match find_method(family, method) {
            Some(def) => arity_mismatch(method, def.arity(), args.len()),
            None => undefined_method(method, receiver.type_name()),
        });
    };
    helpers::check_args(def, &receiver, &args)?;
    tracing::trace!(family = family.as_str(), method, "runtime library call");

    match method {
        "clone" => return Ok(receiver.clone_value()),
        "equals" => return Ok(Value::Bool(receiver.equals(helpers::arg(&args, 0)?))),
        "notEquals" => return Ok(Value::Bool(receiver.not_equals(helpers::arg(&args, 0)?))),
        _ => {}
    }

    match &receiver {
        Value::Number(n) => number::dispatch_number_method(*n, method, &args),
        Value::Text(t) => text::dispatch_text_method(t, method, &args),
        Value::List(items) => sequence::dispatch_sequence_method(items, method, args, caller),
        Value::Record(r) => record::dispatch_record_method(r, method, &args, interner),
        _ => Err(undefined_method(method, receiver.type_name())),
    }
}

