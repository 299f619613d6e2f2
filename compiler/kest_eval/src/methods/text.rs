//! Text methods.

use kest_value::{undefined_method, EvalResult, Text, Value};

use super::helpers::{number_arg, size_value, text_arg};

pub(super) fn dispatch_text_method(text: &Text, method: &str, args: &[Value]) -> EvalResult {
    match method {
        "size" => size_value(text.size()),
        // Code point of the nth character; negative counts from the end.
        "getCharCode" => {
            let n = number_arg(args, 0)?;
            let code = text.char_code_at(n.raw());
            Ok(Value::option(code.map(|c| Value::number(i64::from(c)))))
        }
        "concat" => Ok(Value::from_text(text.concat(text_arg(args, 0)?))),
        _ => Err(undefined_method(method, "Text")),
    }
}
