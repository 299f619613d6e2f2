//! Flat expression tree and its arena.

mod expr;
mod operators;

use std::sync::Arc;

use crate::{EnumId, EnumLayout, EnumRegistry, ExprId, ListRange, Name, Span};

pub use expr::{Expr, ExprKind, FieldInit, WhenArm, WhenPattern};
pub use operators::{Associativity, BinaryOp, UnaryOp};

/// Arena shared by the interpreter and the function values it creates.
pub type SharedArena = Arc<ExprArena>;

/// Owns every expression of one program plus the side tables that
/// `ListRange`s point into.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    expr_lists: Vec<ExprId>,
    field_inits: Vec<FieldInit>,
    arms: Vec<WhenArm>,
    names: Vec<Name>,
    enums: EnumRegistry,
}

fn to_u32(len: usize, table: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("{table} table exceeded u32 capacity"))
}

fn push_all<T>(table: &mut Vec<T>, items: impl IntoIterator<Item = T>, what: &str) -> ListRange {
    let start = to_u32(table.len(), what);
    table.extend(items);
    let end = to_u32(table.len(), what);
    ListRange::new(start, end.saturating_sub(start))
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap for sharing with function values.
    pub fn into_shared(self) -> SharedArena {
        Arc::new(self)
    }

    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(Expr::new(kind, span));
        id
    }

    /// Allocate an expression with no source location.
    pub fn alloc(&mut self, kind: ExprKind) -> ExprId {
        self.alloc_expr(kind, Span::DUMMY)
    }

    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ListRange {
        push_all(&mut self.expr_lists, ids, "expression list")
    }

    pub fn alloc_field_inits(&mut self, fields: impl IntoIterator<Item = FieldInit>) -> ListRange {
        push_all(&mut self.field_inits, fields, "field")
    }

    pub fn alloc_arms(&mut self, arms: impl IntoIterator<Item = WhenArm>) -> ListRange {
        push_all(&mut self.arms, arms, "arm")
    }

    pub fn alloc_names(&mut self, names: impl IntoIterator<Item = Name>) -> ListRange {
        push_all(&mut self.names, names, "name")
    }

    pub fn register_enum(&mut self, layout: EnumLayout) -> EnumId {
        self.enums.register(layout)
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn get_expr_list(&self, range: ListRange) -> &[ExprId] {
        &self.expr_lists[range.as_range()]
    }

    #[inline]
    pub fn get_field_inits(&self, range: ListRange) -> &[FieldInit] {
        &self.field_inits[range.as_range()]
    }

    #[inline]
    pub fn get_arms(&self, range: ListRange) -> &[WhenArm] {
        &self.arms[range.as_range()]
    }

    #[inline]
    pub fn get_names(&self, range: ListRange) -> &[Name] {
        &self.names[range.as_range()]
    }

    #[inline]
    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
