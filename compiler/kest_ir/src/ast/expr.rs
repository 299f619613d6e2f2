//! Expression nodes.
//!
//! Children are `ExprId` indices into the owning `ExprArena`; variable-length
//! children (arguments, fields, arms, parameters) are `ListRange`s into the
//! arena's side tables.

use crate::{EnumId, ExprId, ListRange, Name, Span};

use super::operators::{BinaryOp, UnaryOp};

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub const fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

/// Expression kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// Integer literal: `42`
    Int(i64),

    /// Text literal; the content is interned.
    Text(Name),

    /// Named tag construction: `#circle(r)`.
    ///
    /// `payload` is an expression list.
    Tag { name: Name, payload: ListRange },

    /// Variant of a declared enum: `Shape.circle(r)`.
    ///
    /// Evaluates to a tag with a dense discriminant code.
    EnumVariant {
        enum_id: EnumId,
        variant: Name,
        payload: ListRange,
    },

    /// Variable reference.
    Ident(Name),

    /// Binary operation: `left op right`.
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Unary operation: `op operand`.
    Unary { op: UnaryOp, operand: ExprId },

    /// Conditional. `else_branch` is `ExprId::INVALID` when absent, in which
    /// case the expression produces an optional.
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Tag pattern dispatch: `when scrutinee is ...`.
    ///
    /// `arms` ranges over the arena's arm table.
    When { scrutinee: ExprId, arms: ListRange },

    /// Sequence literal: `[a, b, c]`.
    List(ListRange),

    /// Record literal: `{ x: 1, y: 2 }`.
    ///
    /// `type_name` is the nominal alias the record was built under, if any.
    Record {
        type_name: Option<Name>,
        fields: ListRange,
    },

    /// Structural update: `{ base | x: 1 }`.
    RecordUpdate { base: ExprId, fields: ListRange },

    /// Field access: `receiver.field`.
    Field { receiver: ExprId, field: Name },

    /// Runtime library call: `receiver:method(args)`.
    MethodCall {
        receiver: ExprId,
        method: Name,
        args: ListRange,
    },

    /// Function application: `func(args)`.
    Call { func: ExprId, args: ListRange },

    /// Function literal.
    ///
    /// A non-empty `name` is bound to the function itself inside its body,
    /// which is how recursive definitions are expressed.
    Lambda {
        name: Name,
        params: ListRange,
        body: ExprId,
    },

    /// Local binding: `let name = init in body`.
    Let {
        name: Name,
        init: ExprId,
        body: ExprId,
    },
}

/// `name: value` inside a record literal or update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldInit {
    pub name: Name,
    pub value: ExprId,
}

/// One arm of a `when` expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WhenArm {
    pub pattern: WhenPattern,
    pub body: ExprId,
}

/// What a `when` arm matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WhenPattern {
    /// Matches a tag whose discriminant is `name`; payload positions are bound
    /// to `bindings` (a range into the arena's name table).
    Tag { name: Name, bindings: ListRange },
    /// Matches anything.
    Default,
}
