#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(
    clippy::arithmetic_side_effects,
    reason = "Tests compute expected values with plain arithmetic"
)]

use std::cell::Cell;
use std::sync::Arc;

use kest_ir::{ExprArena, ExprId, Name};
use kest_value::{EvalErrorKind, EvalResult, FunctionValue, StringInterner, Text, Value};
use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use crate::methods::{dispatch_builtin_method, map_with_result, FunctionCaller, NativeCaller};

/// A caller for methods that never call back.
struct NoCallbacks;

impl FunctionCaller for NoCallbacks {
    fn call(&mut self, _func: &Value, _args: Vec<Value>) -> EvalResult {
        panic!("no callback expected")
    }
}

fn call(interner: &StringInterner, receiver: Value, method: &str, args: Vec<Value>) -> EvalResult {
    dispatch_builtin_method(receiver, method, args, interner, &mut NoCallbacks)
}

/// A function value whose body is never evaluated by these tests.
fn placeholder_function() -> Value {
    Value::Function(FunctionValue::new(
        Name::EMPTY,
        vec![Name::EMPTY],
        ExprId::INVALID,
        FxHashMap::default(),
        Arc::new(ExprArena::new()),
    ))
}

mod number {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn operator_methods_mirror_operators() {
        let i = StringInterner::new();
        let n = Value::number;
        assert_eq!(call(&i, n(7), "add", vec![n(3)]).unwrap(), n(10));
        assert_eq!(call(&i, n(7), "subtract", vec![n(3)]).unwrap(), n(4));
        assert_eq!(call(&i, n(7), "multiply", vec![n(3)]).unwrap(), n(21));
        assert_eq!(call(&i, n(7), "divide", vec![n(3)]).unwrap(), n(2));
        assert_eq!(call(&i, n(-7), "modulo", vec![n(3)]).unwrap(), n(2));
        assert_eq!(call(&i, n(3), "power", vec![n(3)]).unwrap(), n(27));
        assert_eq!(
            call(&i, n(1), "lessThan", vec![n(2)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            call(&i, n(2), "greaterThanOrEquals", vec![n(2)]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(call(&i, n(2), "equals", vec![n(2)]).unwrap(), Value::Bool(true));
        assert_eq!(
            call(&i, n(2), "notEquals", vec![n(2)]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn domain_errors_propagate() {
        let i = StringInterner::new();
        let err = call(&i, Value::number(1), "divide", vec![Value::number(0)]).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
        let err = call(&i, Value::number(2), "power", vec![Value::number(-1)]).unwrap_err();
        assert_eq!(err.kind, EvalErrorKind::NegativeExponent { exponent: -1 });
    }

    #[test]
    fn argument_must_be_a_number() {
        let i = StringInterner::new();
        let err = call(&i, Value::number(1), "add", vec![Value::text("1")]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "Number".to_string(),
                got: "Text".to_string(),
            }
        );
        assert_eq!(err.notes[0].message, "argument 0 of Number:add");
    }
}

mod text {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn size_counts_characters() {
        let i = StringInterner::new();
        assert_eq!(
            call(&i, Value::text("a\u{1F600}b"), "size", vec![]).unwrap(),
            Value::number(3)
        );
    }

    #[test]
    fn get_char_code_is_optional() {
        let i = StringInterner::new();
        let hello = Value::text("hello");
        assert_eq!(
            call(&i, hello.clone(), "getCharCode", vec![Value::number(0)]).unwrap(),
            Value::some(Value::number(104))
        );
        assert_eq!(
            call(&i, hello.clone(), "getCharCode", vec![Value::number(-1)]).unwrap(),
            Value::some(Value::number(111))
        );
        assert_eq!(
            call(&i, hello, "getCharCode", vec![Value::number(5)]).unwrap(),
            Value::None
        );
    }

    #[test]
    fn concat_requires_text() {
        let i = StringInterner::new();
        assert_eq!(
            call(&i, Value::text("ab"), "concat", vec![Value::text("c")]).unwrap(),
            Value::text("abc")
        );
        assert!(call(&i, Value::text("ab"), "concat", vec![Value::number(1)]).is_err());
    }
}

mod sequence {
    use super::*;
    use pretty_assertions::assert_eq;

    fn items() -> Value {
        Value::list(vec![Value::number(10), Value::number(20), Value::number(30)])
    }

    #[test]
    fn get_returns_optional_element() {
        let i = StringInterner::new();
        assert_eq!(
            call(&i, items(), "get", vec![Value::number(0)]).unwrap(),
            Value::some(Value::number(10))
        );
        assert_eq!(
            call(&i, items(), "get", vec![Value::number(2)]).unwrap(),
            Value::some(Value::number(30))
        );
    }

    #[test]
    fn get_past_the_end_or_negative_is_none() {
        let i = StringInterner::new();
        for index in [3, 4, 100, -1, i64::MIN] {
            assert_eq!(
                call(&i, items(), "get", vec![Value::number(index)]).unwrap(),
                Value::None,
                "index {index}"
            );
        }
    }

    #[test]
    fn append_leaves_receiver_unchanged() {
        let i = StringInterner::new();
        let original = items();
        let appended = call(&i, original.clone(), "append", vec![Value::text("x")]).unwrap();
        assert_eq!(appended.as_list().unwrap().len(), 4);
        assert_eq!(appended.as_list().unwrap()[3], Value::text("x"));
        assert_eq!(original.as_list().unwrap().len(), 3);
    }

    #[test]
    fn size_and_equality() {
        let i = StringInterner::new();
        assert_eq!(call(&i, items(), "size", vec![]).unwrap(), Value::number(3));
        assert_eq!(
            call(&i, items(), "equals", vec![items()]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            call(&i, items(), "notEquals", vec![Value::list(vec![])]).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn map_with_result_collects_ok_payloads() {
        let i = StringInterner::new();
        let mut caller = NativeCaller(|_: &Value, args: Vec<Value>| {
            let n = args[0].as_number().unwrap().raw();
            Ok(Value::ok(Value::number(n / 10)))
        });
        let result = dispatch_builtin_method(
            items(),
            "mapWithResult",
            vec![placeholder_function()],
            &i,
            &mut caller,
        )
        .unwrap();
        assert_eq!(
            result,
            Value::ok(Value::list(vec![
                Value::number(1),
                Value::number(2),
                Value::number(3)
            ]))
        );
    }

    #[test]
    fn map_with_result_stops_at_first_error() {
        let visits = Cell::new(0);
        let result = map_with_result(
            &[Value::number(1), Value::number(-1), Value::number(2)],
            |item| {
                visits.set(visits.get() + 1);
                let n = item.as_number().unwrap();
                Ok(if n.is_negative() {
                    Value::err(Value::text("negative"))
                } else {
                    Value::ok(item)
                })
            },
        )
        .unwrap();
        assert_eq!(result, Value::err(Value::text("negative")));
        assert_eq!(visits.get(), 2);
    }

    #[test]
    fn map_with_result_returns_the_error_of_the_second_element() {
        let visits = Cell::new(0);
        let result = map_with_result(
            &[Value::number(1), Value::number(2), Value::number(3)],
            |item| {
                visits.set(visits.get() + 1);
                Ok(if item == Value::number(2) {
                    Value::err(Value::text("two"))
                } else {
                    Value::ok(item)
                })
            },
        )
        .unwrap();
        assert_eq!(result, Value::err(Value::text("two")));
        assert_eq!(visits.get(), 2);
    }

    #[test]
    fn map_with_result_forwards_error_tags_of_any_arity() {
        let multi = Value::tag(Name::ERROR, vec![Value::number(404), Value::text("nf")]);
        let bare = Value::tag(Name::ERROR, vec![]);
        for error in [multi, bare] {
            let visits = Cell::new(0);
            let result = map_with_result(&[Value::number(1), Value::number(2)], |_| {
                visits.set(visits.get() + 1);
                Ok(error.clone())
            })
            .unwrap();
            assert_eq!(result, error);
            assert_eq!(visits.get(), 1);
        }
    }

    #[test]
    fn map_with_result_rejects_ok_without_single_payload() {
        let err = map_with_result(&[Value::number(1)], |_| {
            Ok(Value::tag(Name::OK, vec![Value::number(1), Value::number(2)]))
        })
        .unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "ok".to_string(),
                expected: 1,
                got: 2,
            }
        );
    }

    #[test]
    fn map_with_result_on_empty_is_ok_empty() {
        let result = map_with_result(&[], |_| panic!("no elements")).unwrap();
        assert_eq!(result, Value::ok(Value::list(vec![])));
    }

    #[test]
    fn map_with_result_rejects_non_result_callbacks() {
        let err = map_with_result(&[Value::number(1)], Ok).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::TypeMismatch {
                expected: "Result".to_string(),
                got: "Number".to_string(),
            }
        );
    }

    #[test]
    fn map_with_result_requires_a_function() {
        let i = StringInterner::new();
        let err = call(&i, items(), "mapWithResult", vec![Value::number(1)]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
    }
}

mod record {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_by_name_replaces_or_appends() {
        let i = StringInterner::new();
        let x = i.intern("x");
        let y = i.intern("y");
        let r = Value::record([(x, Value::number(1))]);

        let replaced = call(&i, r.clone(), "set", vec![Value::text("x"), Value::number(5)]).unwrap();
        assert_eq!(replaced, Value::record([(x, Value::number(5))]));

        let appended = call(&i, r.clone(), "set", vec![Value::text("y"), Value::number(2)]).unwrap();
        assert_eq!(
            appended,
            Value::record([(x, Value::number(1)), (y, Value::number(2))])
        );
        assert_eq!(r, Value::record([(x, Value::number(1))]));
    }

    #[test]
    fn set_with_record_applies_every_field() {
        let i = StringInterner::new();
        let x = i.intern("x");
        let y = i.intern("y");
        let point = i.intern("Point");
        let r = Value::named_record(point, [(x, Value::number(1)), (y, Value::number(2))]);
        let updates = Value::record([(y, Value::number(20))]);
        let updated = call(&i, r, "set", vec![updates]).unwrap();
        let record = updated.as_record().unwrap();
        assert_eq!(record.type_name(), Some(point));
        assert_eq!(record.get(x), Some(&Value::number(1)));
        assert_eq!(record.get(y), Some(&Value::number(20)));
    }

    #[test]
    fn set_rejects_field_names_with_unpaired_surrogates() {
        let i = StringInterner::new();
        let replacement = i.intern("\u{FFFD}");
        let r = Value::record([(replacement, Value::number(1))]);
        let name = Value::from_text(Text::from_units(vec![0xD800]));
        let err = call(&i, r.clone(), "set", vec![name, Value::number(2)]).unwrap_err();
        assert_eq!(err.message, "field name contains an unpaired surrogate");
        assert_eq!(r, Value::record([(replacement, Value::number(1))]));
    }

    #[test]
    fn set_checks_argument_shapes() {
        let i = StringInterner::new();
        let r = Value::record(Vec::<(Name, Value)>::new());
        let err = call(&i, r.clone(), "set", vec![Value::number(1), Value::number(2)]).unwrap_err();
        assert!(matches!(err.kind, EvalErrorKind::TypeMismatch { .. }));
        let err = call(&i, r, "set", vec![]).unwrap_err();
        assert_eq!(
            err.kind,
            EvalErrorKind::ArityMismatch {
                name: "set".to_string(),
                expected: 2,
                got: 0,
            }
        );
    }
}

#[test]
fn clone_copies_every_family() {
    let i = StringInterner::new();
    let tag = Value::tag(i.intern("circle"), vec![Value::number(1)]);
    for value in [
        Value::number(1),
        Value::text("t"),
        Value::list(vec![Value::number(1)]),
        Value::record([(i.intern("x"), Value::number(1))]),
        tag,
        Value::some(Value::number(1)),
        Value::Bool(true),
    ] {
        let copy = call(&i, value.clone(), "clone", vec![]).unwrap();
        assert_eq!(copy, value);
    }
}

#[test]
fn tag_equality_methods_ignore_payload() {
    let i = StringInterner::new();
    let a = Value::tag(i.intern("circle"), vec![Value::number(1)]);
    let b = Value::tag(i.intern("circle"), vec![Value::number(2)]);
    assert_eq!(call(&i, a.clone(), "equals", vec![b]).unwrap(), Value::Bool(true));
    assert_eq!(
        call(&i, a, "notEquals", vec![Value::None]).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn unknown_methods_are_reported() {
    let i = StringInterner::new();
    let err = call(&i, Value::number(1), "size", vec![]).unwrap_err();
    assert_eq!(err.message, "no method 'size' on Number");
    let err = call(&i, placeholder_function(), "clone", vec![]).unwrap_err();
    assert_eq!(err.message, "no method 'clone' on Function");
}

#[test]
fn wrong_arity_is_reported() {
    let i = StringInterner::new();
    let err = call(&i, Value::number(1), "add", vec![]).unwrap_err();
    assert_eq!(err.message, "add expects 1 argument, got 0");
}
