//! Runtime values.
//!
//! # Heap Enforcement
//!
//! `Heap<T>` has a constructor private to this module, so heap values can
//! only be built through the factory methods on `Value`:
//!
//! ```text
//! let s = Value::text("hello");                 // OK
//! let list = Value::list(vec![]);               // OK
//! let opt = Value::some(Value::number(42));     // OK
//! let s = Value::Text(Heap::new(...));          // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Two equalities
//!
//! `Value::equals` is the language's equality: tags compare by discriminant
//! only, records ignore field order. The Rust `PartialEq` impl is exact
//! structural equality and exists for host code and tests.
//!
//! # Thread Safety
//!
//! All heap data is behind `Arc` and never mutated, so `Value` is
//! `Send + Sync` and can be shared freely.

mod composite;
mod heap;
mod number;
mod text;

use std::fmt;

use kest_ir::builtin_methods::ValueFamily;
use kest_ir::{EnumId, EnumLayout, EnumRegistry, Name, StringInterner};

use crate::errors::{arity_mismatch, unknown_variant, EvalError};

pub use composite::{Discriminant, FunctionValue, RecordValue, TagValue};
pub use heap::Heap;
pub use number::Number;
pub use text::Text;

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    // Primitives
    /// Integer (checked arithmetic only).
    Number(Number),
    /// The canonical `true`/`false` tags.
    Bool(bool),

    // Heap types
    Text(Heap<Text>),
    /// Sequence of values.
    List(Heap<Vec<Value>>),
    Record(RecordValue),
    /// Any tag that is not a boolean, optional or result.
    Tag(TagValue),

    // First-class optional and result tags
    Some(Heap<Value>),
    None,
    Ok(Heap<Value>),
    Err(Heap<Value>),

    Function(FunctionValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(Number::new(n))
    }

    #[inline]
    pub fn text(s: &str) -> Self {
        Value::Text(Heap::new(Text::new(s)))
    }

    #[inline]
    pub fn from_text(t: Text) -> Self {
        Value::Text(Heap::new(t))
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    pub fn record(fields: impl IntoIterator<Item = (Name, Value)>) -> Self {
        Value::Record(RecordValue::new(fields))
    }

    /// Record built under a nominal alias.
    pub fn named_record(type_name: Name, fields: impl IntoIterator<Item = (Name, Value)>) -> Self {
        Value::Record(RecordValue::named(type_name, fields))
    }

    #[inline]
    pub fn some(v: Value) -> Self {
        Value::Some(Heap::new(v))
    }

    #[inline]
    pub fn ok(v: Value) -> Self {
        Value::Ok(Heap::new(v))
    }

    #[inline]
    pub fn err(v: Value) -> Self {
        Value::Err(Heap::new(v))
    }

    /// `some(v)` or `none`.
    pub fn option(v: Option<Value>) -> Self {
        v.map_or(Value::None, Value::some)
    }

    /// Construct a named tag.
    ///
    /// The canonical shapes collapse to their first-class forms: payload-free
    /// `true`/`false` become `Bool`, payload-free `none` becomes `None`, and
    /// single-payload `some`/`ok`/`error` become `Some`/`Ok`/`Err`.
    pub fn tag(name: Name, mut payload: Vec<Value>) -> Self {
        match (name, payload.len()) {
            (Name::TRUE, 0) => Value::Bool(true),
            (Name::FALSE, 0) => Value::Bool(false),
            (Name::NONE, 0) => Value::None,
            (Name::SOME | Name::OK | Name::ERROR, 1) => {
                let inner = payload.pop().unwrap_or(Value::None);
                match name {
                    Name::SOME => Value::some(inner),
                    Name::OK => Value::ok(inner),
                    _ => Value::err(inner),
                }
            }
            _ => Value::Tag(TagValue::new(Discriminant::Named(name), payload)),
        }
    }

    /// Construct a variant of a declared enum, encoded by its dense code.
    pub fn enum_variant(
        layout: &EnumLayout,
        enum_id: EnumId,
        variant: Name,
        payload: Vec<Value>,
        interner: &StringInterner,
    ) -> Result<Self, EvalError> {
        let Some(code) = layout.code_of(variant) else {
            return Err(unknown_variant(
                interner.lookup(layout.name()),
                interner.lookup(variant),
            ));
        };
        if let Some(def) = layout.variant(code) {
            if def.arity != payload.len() {
                return Err(arity_mismatch(
                    interner.lookup(variant),
                    def.arity,
                    payload.len(),
                ));
            }
        }
        Ok(Value::Tag(TagValue::new(
            Discriminant::Dense { enum_id, code },
            payload,
        )))
    }
}

// Value Methods

impl Value {
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Bool(_) => "Bool",
            Value::Text(_) => "Text",
            Value::List(_) => "Sequence",
            Value::Record(_) => "Record",
            Value::Tag(_) => "Tag",
            Value::Some(_) | Value::None => "Option",
            Value::Ok(_) | Value::Err(_) => "Result",
            Value::Function(_) => "Function",
        }
    }

    /// Family whose runtime library methods this value answers to.
    pub fn family(&self) -> Option<ValueFamily> {
        match self {
            Value::Number(_) => Some(ValueFamily::Number),
            Value::Text(_) => Some(ValueFamily::Text),
            Value::List(_) => Some(ValueFamily::Sequence),
            Value::Record(_) => Some(ValueFamily::Record),
            Value::Bool(_)
            | Value::Tag(_)
            | Value::Some(_)
            | Value::None
            | Value::Ok(_)
            | Value::Err(_) => Some(ValueFamily::Tag),
            Value::Function(_) => None,
        }
    }

    /// Discriminant of any tag-shaped value.
    pub fn discriminant(&self) -> Option<Discriminant> {
        let name = match self {
            Value::Bool(true) => Name::TRUE,
            Value::Bool(false) => Name::FALSE,
            Value::Some(_) => Name::SOME,
            Value::None => Name::NONE,
            Value::Ok(_) => Name::OK,
            Value::Err(_) => Name::ERROR,
            Value::Tag(tag) => return Some(tag.discriminant()),
            _ => return None,
        };
        Some(Discriminant::Named(name))
    }

    /// Payload of a tag-shaped value; empty for everything else.
    pub fn payload(&self) -> Vec<Value> {
        match self {
            Value::Some(v) | Value::Ok(v) | Value::Err(v) => vec![(**v).clone()],
            Value::Tag(tag) => tag.payload().to_vec(),
            _ => Vec::new(),
        }
    }

    /// Language-level equality.
    ///
    /// - Number: numeric equality
    /// - Text: code-unit equality
    /// - Sequence: same length and element-wise `equals`
    /// - Record: same field set and field-wise `equals`
    /// - Tags (including booleans, optionals, results): discriminant only
    /// - Different families are never equal
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a.units() == b.units(),
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equals(y))
            }
            (Value::Record(a), Value::Record(b)) => a.equals(b),
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => match (self.discriminant(), other.discriminant()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    #[inline]
    pub fn not_equals(&self, other: &Value) -> bool {
        !self.equals(other)
    }

    /// Copy construction.
    ///
    /// Containers get a fresh allocation holding the same elements
    /// (shallow); nested containers stay shared because they are immutable.
    /// The variant and any nominal record alias are preserved.
    #[must_use]
    pub fn clone_value(&self) -> Value {
        match self {
            Value::Text(t) => Value::from_text((**t).clone()),
            Value::List(items) => Value::list(items.to_vec()),
            Value::Record(r) => Value::Record(r.copy()),
            Value::Tag(t) => Value::Tag(t.copy()),
            Value::Some(v) => Value::some((**v).clone()),
            Value::Ok(v) => Value::ok((**v).clone()),
            Value::Err(v) => Value::err((**v).clone()),
            Value::Number(_) | Value::Bool(_) | Value::None | Value::Function(_) => self.clone(),
        }
    }

    /// Display with names resolved through an interner.
    pub fn display<'a>(
        &'a self,
        interner: &'a StringInterner,
        enums: Option<&'a EnumRegistry>,
    ) -> ValueDisplay<'a> {
        ValueDisplay {
            value: self,
            interner,
            enums,
        }
    }
}

// Trait Implementations

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => a == b,
            (Value::Tag(a), Value::Tag(b)) => a == b,
            (Value::Some(a), Value::Some(b))
            | (Value::Ok(a), Value::Ok(b))
            | (Value::Err(a), Value::Err(b)) => a == b,
            (Value::None, Value::None) => true,
            (Value::Function(a), Value::Function(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Text(t) => write!(f, "Text({:?})", &**t),
            Value::List(items) => write!(f, "List({:?})", &**items),
            Value::Record(r) => {
                write!(f, "Record(")?;
                if let Some(type_name) = r.type_name() {
                    write!(f, "{type_name:?} ")?;
                }
                f.debug_map()
                    .entries(r.fields().iter().map(|(k, v)| (k, v)))
                    .finish()?;
                write!(f, ")")
            }
            Value::Tag(t) => write!(f, "Tag({:?}, {:?})", t.discriminant(), t.payload()),
            Value::Some(v) => write!(f, "Some({:?})", &**v),
            Value::None => write!(f, "None"),
            Value::Ok(v) => write!(f, "Ok({:?})", &**v),
            Value::Err(v) => write!(f, "Err({:?})", &**v),
            Value::Function(func) => write!(f, "Function({func:?})"),
        }
    }
}

/// Formats a value in source-like syntax.
pub struct ValueDisplay<'a> {
    value: &'a Value,
    interner: &'a StringInterner,
    enums: Option<&'a EnumRegistry>,
}

impl ValueDisplay<'_> {
    fn nested<'b>(&'b self, value: &'b Value) -> ValueDisplay<'b> {
        ValueDisplay {
            value,
            interner: self.interner,
            enums: self.enums,
        }
    }

    fn tag_name(&self, discriminant: Discriminant) -> String {
        match discriminant {
            Discriminant::Named(name) => self.interner.lookup(name).to_string(),
            Discriminant::Dense { enum_id, code } => {
                let resolved = self.enums.and_then(|enums| {
                    let layout = enums.get(enum_id)?;
                    let variant = layout.variant(code)?;
                    Some(format!(
                        "{}.{}",
                        self.interner.lookup(layout.name()),
                        self.interner.lookup(variant.name)
                    ))
                });
                resolved.unwrap_or_else(|| format!("<enum {}:{code}>", enum_id.index()))
            }
        }
    }

    fn write_tag(&self, f: &mut fmt::Formatter<'_>, name: &str, payload: &[Value]) -> fmt::Result {
        write!(f, "#{name}")?;
        if payload.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, item) in payload.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.nested(item))?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for ValueDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(t) => write!(f, "\"{}\"", &**t),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", self.nested(item))?;
                }
                write!(f, "]")
            }
            Value::Record(r) => {
                if let Some(type_name) = r.type_name() {
                    write!(f, "{} ", self.interner.lookup(type_name))?;
                }
                write!(f, "{{")?;
                for (i, (name, value)) in r.fields().iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {}: {}", self.interner.lookup(*name), self.nested(value))?;
                }
                if r.is_empty() {
                    write!(f, "}}")
                } else {
                    write!(f, " }}")
                }
            }
            Value::Tag(t) => {
                let name = self.tag_name(t.discriminant());
                self.write_tag(f, &name, t.payload())
            }
            Value::Some(v) => self.write_tag(f, "some", std::slice::from_ref(&**v)),
            Value::None => write!(f, "#none"),
            Value::Ok(v) => self.write_tag(f, "ok", std::slice::from_ref(&**v)),
            Value::Err(v) => self.write_tag(f, "error", std::slice::from_ref(&**v)),
            Value::Function(_) => write!(f, "<function>"),
        }
    }
}
