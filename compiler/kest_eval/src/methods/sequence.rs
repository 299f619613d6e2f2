//! Sequence methods.

use kest_value::{
    arity_mismatch, type_mismatch, undefined_method, Discriminant, EvalResult, Name, Value,
};

use super::helpers::{number_arg, size_value};
use super::FunctionCaller;

pub(super) fn dispatch_sequence_method(
    items: &[Value],
    method: &str,
    args: Vec<Value>,
    caller: &mut dyn FunctionCaller,
) -> EvalResult {
    match method {
        "get" => {
            let index = number_arg(&args, 0)?;
            Ok(Value::option(element_at(items, index.raw()).cloned()))
        }
        "append" => {
            let mut out = Vec::with_capacity(items.len().saturating_add(1));
            out.extend_from_slice(items);
            out.extend(args);
            Ok(Value::list(out))
        }
        "size" => size_value(items.len()),
        "mapWithResult" => {
            let Some(func) = args.into_iter().next() else {
                return Err(type_mismatch("Function", "nothing"));
            };
            map_with_result(items, |item| caller.call(&func, vec![item]))
        }
        _ => Err(undefined_method(method, "Sequence")),
    }
}

/// Element at a 0-based index; negative or past-the-end is absent.
fn element_at(items: &[Value], index: i64) -> Option<&Value> {
    usize::try_from(index).ok().and_then(|i| items.get(i))
}

/// Apply `f` to each element in order, collecting the `ok` payloads.
///
/// Stops at the first `error` tag, whatever its payload, and returns it
/// unchanged; later elements are never visited. An `ok` must carry exactly
/// one payload. Any other callback result is a type mismatch.
pub fn map_with_result(
    items: &[Value],
    mut f: impl FnMut(Value) -> EvalResult,
) -> EvalResult {
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let result = f(item.clone())?;
        match result.discriminant() {
            Some(Discriminant::Named(Name::ERROR)) => {
                tracing::trace!(index, "mapWithResult stopped at error");
                return Ok(result);
            }
            Some(Discriminant::Named(Name::OK)) => {
                let Value::Ok(v) = &result else {
                    return Err(arity_mismatch("ok", 1, result.payload().len()));
                };
                out.push((**v).clone());
            }
            _ => return Err(type_mismatch("Result", result.type_name())),
        }
    }
    Ok(Value::ok(Value::list(out)))
}
