//! Call shapes of the runtime library.
//!
//! One table describes which methods exist on which value family, how many
//! arguments each takes and what they must be. The evaluator checks calls
//! against it before dispatching, so arity and argument-family errors are
//! reported the same way for every method.
//!
//! A method may appear more than once with different parameter lists
//! (`Record.set` takes either a name and a value or a record of updates).

/// Value family a method is defined on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueFamily {
    Number,
    Text,
    Sequence,
    Record,
    /// Tags, including booleans, optionals and results.
    Tag,
}

impl ValueFamily {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "Number",
            Self::Text => "Text",
            Self::Sequence => "Sequence",
            Self::Record => "Record",
            Self::Tag => "Tag",
        }
    }
}

/// Specification for a method parameter.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParamSpec {
    /// Same family as the receiver.
    SelfType,
    Number,
    Text,
    Record,
    /// A callable value.
    Function,
    Any,
}

/// Specification for a method's return value.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReturnSpec {
    SelfType,
    Number,
    Bool,
    /// `some(code point)` or `none`.
    OptionCodePoint,
    /// `some(element)` or `none`.
    OptionElement,
    /// `ok(sequence)` or the first `error`.
    ResultSequence,
}

/// Definition of a runtime library method.
#[derive(Clone, Debug)]
pub struct MethodDef {
    pub receiver: ValueFamily,
    pub name: &'static str,
    /// Parameters, excluding the receiver.
    pub params: &'static [ParamSpec],
    pub returns: ReturnSpec,
}

impl MethodDef {
    const fn new(
        receiver: ValueFamily,
        name: &'static str,
        params: &'static [ParamSpec],
        returns: ReturnSpec,
    ) -> Self {
        Self {
            receiver,
            name,
            params,
            returns,
        }
    }

    const fn clone_method(receiver: ValueFamily) -> Self {
        Self::new(receiver, "clone", &[], ReturnSpec::SelfType)
    }

    const fn equality(receiver: ValueFamily, name: &'static str) -> Self {
        Self::new(receiver, name, &[ParamSpec::SelfType], ReturnSpec::Bool)
    }

    const fn arithmetic(name: &'static str) -> Self {
        Self::new(
            ValueFamily::Number,
            name,
            &[ParamSpec::SelfType],
            ReturnSpec::SelfType,
        )
    }

    /// Number of arguments, excluding the receiver.
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Every runtime library method.
pub static METHODS: &[MethodDef] = &[
    // Number
    MethodDef::clone_method(ValueFamily::Number),
    MethodDef::arithmetic("add"),
    MethodDef::arithmetic("subtract"),
    MethodDef::arithmetic("multiply"),
    MethodDef::arithmetic("divide"),
    MethodDef::arithmetic("modulo"),
    MethodDef::arithmetic("power"),
    MethodDef::equality(ValueFamily::Number, "equals"),
    MethodDef::equality(ValueFamily::Number, "notEquals"),
    MethodDef::equality(ValueFamily::Number, "lessThan"),
    MethodDef::equality(ValueFamily::Number, "lessThanOrEquals"),
    MethodDef::equality(ValueFamily::Number, "greaterThan"),
    MethodDef::equality(ValueFamily::Number, "greaterThanOrEquals"),
    // Text
    MethodDef::clone_method(ValueFamily::Text),
    MethodDef::new(ValueFamily::Text, "size", &[], ReturnSpec::Number),
    MethodDef::new(
        ValueFamily::Text,
        "getCharCode",
        &[ParamSpec::Number],
        ReturnSpec::OptionCodePoint,
    ),
    MethodDef::new(
        ValueFamily::Text,
        "concat",
        &[ParamSpec::SelfType],
        ReturnSpec::SelfType,
    ),
    MethodDef::equality(ValueFamily::Text, "equals"),
    MethodDef::equality(ValueFamily::Text, "notEquals"),
    // Sequence
    MethodDef::clone_method(ValueFamily::Sequence),
    MethodDef::equality(ValueFamily::Sequence, "equals"),
    MethodDef::equality(ValueFamily::Sequence, "notEquals"),
    MethodDef::new(
        ValueFamily::Sequence,
        "get",
        &[ParamSpec::Number],
        ReturnSpec::OptionElement,
    ),
    MethodDef::new(
        ValueFamily::Sequence,
        "append",
        &[ParamSpec::Any],
        ReturnSpec::SelfType,
    ),
    MethodDef::new(ValueFamily::Sequence, "size", &[], ReturnSpec::Number),
    MethodDef::new(
        ValueFamily::Sequence,
        "mapWithResult",
        &[ParamSpec::Function],
        ReturnSpec::ResultSequence,
    ),
    // Record
    MethodDef::clone_method(ValueFamily::Record),
    MethodDef::new(
        ValueFamily::Record,
        "set",
        &[ParamSpec::Text, ParamSpec::Any],
        ReturnSpec::SelfType,
    ),
    MethodDef::new(
        ValueFamily::Record,
        "set",
        &[ParamSpec::Record],
        ReturnSpec::SelfType,
    ),
    MethodDef::equality(ValueFamily::Record, "equals"),
    MethodDef::equality(ValueFamily::Record, "notEquals"),
    // Tag
    MethodDef::clone_method(ValueFamily::Tag),
    MethodDef::equality(ValueFamily::Tag, "equals"),
    MethodDef::equality(ValueFamily::Tag, "notEquals"),
];

/// Find the first definition of a method on a family.
pub fn find_method(receiver: ValueFamily, name: &str) -> Option<&'static MethodDef> {
    METHODS
        .iter()
        .find(|m| m.receiver == receiver && m.name == name)
}

/// Find the definition of a method taking exactly `arity` arguments.
pub fn find_overload(receiver: ValueFamily, name: &str, arity: usize) -> Option<&'static MethodDef> {
    METHODS
        .iter()
        .find(|m| m.receiver == receiver && m.name == name && m.arity() == arity)
}

/// All methods defined on a family.
pub fn methods_for(receiver: ValueFamily) -> impl Iterator<Item = &'static MethodDef> {
    METHODS.iter().filter(move |m| m.receiver == receiver)
}

pub fn has_method(receiver: ValueFamily, name: &str) -> bool {
    find_method(receiver, name).is_some()
}
