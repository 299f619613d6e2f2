//! Record methods.

use kest_value::{undefined_method, EvalError, EvalResult, RecordValue, StringInterner, Value};

pub(super) fn dispatch_record_method(
    record: &RecordValue,
    method: &str,
    args: &[Value],
    interner: &StringInterner,
) -> EvalResult {
    match (method, args) {
        // `set(name, value)`: the field name arrives as text.
        ("set", [Value::Text(name), value]) => {
            let Ok(name) = String::from_utf16(name.units()) else {
                return Err(EvalError::new("field name contains an unpaired surrogate"));
            };
            let field = interner
                .try_intern(&name)
                .map_err(|e| EvalError::new(e.to_string()))?;
            Ok(Value::Record(record.with_field(field, value.clone())))
        }
        // `set(updates)`: every field of `updates` is applied.
        ("set", [Value::Record(updates)]) => Ok(Value::Record(
            record.with_fields(updates.fields().iter().cloned()),
        )),
        _ => Err(undefined_method(method, "Record")),
    }
}
