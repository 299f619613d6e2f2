//! Composite value types: records, tags, and functions.

use std::fmt;

use kest_ir::{EnumId, ExprId, Name, SharedArena};
use rustc_hash::FxHashMap;

use super::{Heap, Value};

/// Structural record: field name to value.
///
/// Fields keep insertion order for display; equality ignores order.
/// `type_name` is the nominal alias the record was built under, if any, and
/// survives `clone` and `set`.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordValue {
    type_name: Option<Name>,
    fields: Heap<Vec<(Name, Value)>>,
}

impl RecordValue {
    /// Build a record. A repeated field name keeps its first position and
    /// its last value.
    pub fn new(fields: impl IntoIterator<Item = (Name, Value)>) -> Self {
        Self::build(None, fields)
    }

    pub fn named(type_name: Name, fields: impl IntoIterator<Item = (Name, Value)>) -> Self {
        Self::build(Some(type_name), fields)
    }

    fn build(type_name: Option<Name>, fields: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let mut out: Vec<(Name, Value)> = Vec::new();
        for (name, value) in fields {
            upsert(&mut out, name, value);
        }
        RecordValue {
            type_name,
            fields: Heap::new(out),
        }
    }

    pub fn type_name(&self) -> Option<Name> {
        self.type_name
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> &[(Name, Value)] {
        &self.fields
    }

    pub fn get(&self, field: Name) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(name, value)| (*name == field).then_some(value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// A new record with one field replaced.
    ///
    /// A field the record does not have is appended.
    #[must_use]
    pub fn with_field(&self, field: Name, value: Value) -> Self {
        self.with_fields([(field, value)])
    }

    /// A new record with every update applied; `self` is unchanged.
    #[must_use]
    pub fn with_fields(&self, updates: impl IntoIterator<Item = (Name, Value)>) -> Self {
        let mut fields = self.fields.to_vec();
        for (name, value) in updates {
            if self.get(name).is_none() {
                tracing::trace!(field = name.raw(), "record update appends a new field");
            }
            upsert(&mut fields, name, value);
        }
        RecordValue {
            type_name: self.type_name,
            fields: Heap::new(fields),
        }
    }

    /// Shallow copy into a fresh allocation.
    #[must_use]
    pub fn copy(&self) -> Self {
        RecordValue {
            type_name: self.type_name,
            fields: Heap::new(self.fields.to_vec()),
        }
    }

    /// Language-level equality: identical field sets, field-wise `equals`.
    pub fn equals(&self, other: &RecordValue) -> bool {
        self.len() == other.len()
            && self
                .fields
                .iter()
                .all(|(name, value)| other.get(*name).is_some_and(|v| value.equals(v)))
    }
}

fn upsert(fields: &mut Vec<(Name, Value)>, name: Name, value: Value) {
    if let Some(slot) = fields.iter_mut().find(|(n, _)| *n == name) {
        slot.1 = value;
    } else {
        fields.push((name, value));
    }
}

/// Identity of a tag case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Discriminant {
    /// Open tag identified by name.
    Named(Name),
    /// Variant of a declared enum, identified by its dense code.
    Dense { enum_id: EnumId, code: u32 },
}

/// A tag value: discriminant plus payload.
#[derive(Clone, Debug, PartialEq)]
pub struct TagValue {
    discriminant: Discriminant,
    payload: Heap<Vec<Value>>,
}

impl TagValue {
    pub(super) fn new(discriminant: Discriminant, payload: Vec<Value>) -> Self {
        TagValue {
            discriminant,
            payload: Heap::new(payload),
        }
    }

    pub fn discriminant(&self) -> Discriminant {
        self.discriminant
    }

    pub fn payload(&self) -> &[Value] {
        &self.payload
    }

    #[must_use]
    pub fn copy(&self) -> Self {
        TagValue::new(self.discriminant, self.payload.to_vec())
    }
}

/// Function value (closure).
///
/// Captures are an immutable snapshot of the defining scope. A non-empty
/// `name` is re-bound to the function itself on every call.
#[derive(Clone)]
pub struct FunctionValue {
    pub name: Name,
    pub params: Vec<Name>,
    pub body: ExprId,
    captures: Heap<FxHashMap<Name, Value>>,
    arena: SharedArena,
}

impl FunctionValue {
    pub fn new(
        name: Name,
        params: Vec<Name>,
        body: ExprId,
        captures: FxHashMap<Name, Value>,
        arena: SharedArena,
    ) -> Self {
        FunctionValue {
            name,
            params,
            body,
            captures: Heap::new(captures),
            arena,
        }
    }

    pub fn captures(&self) -> &FxHashMap<Name, Value> {
        &self.captures
    }

    /// Arena holding `body`.
    pub fn arena(&self) -> &SharedArena {
        &self.arena
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl PartialEq for FunctionValue {
    /// Functions are equal only when they are the same closure.
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
            && std::sync::Arc::ptr_eq(&self.arena, &other.arena)
            && Heap::ptr_eq(&self.captures, &other.captures)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("body", &self.body)
            .field("captures", &self.captures.len())
            .finish_non_exhaustive()
    }
}
