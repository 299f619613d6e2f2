//! Kest IR - Intermediate representation types for the Kest language.
//!
//! This crate holds everything the value model and the evaluator share but
//! that carries no runtime behavior of its own:
//!
//! - `Name` / `StringInterner`: interned identifiers (field names, tag names)
//! - `BinaryOp` / `UnaryOp`: operators with precedence and associativity
//! - `ExprArena` / `ExprKind`: a flat expression tree the interpreter walks
//! - `EnumLayout`: dense discriminant codes for declared enums
//! - `builtin_methods`: the call shapes the runtime library exposes

pub mod ast;
pub mod builtin_methods;
mod enum_layout;
mod expr_id;
mod interner;
mod name;
mod operator_chain;
mod span;

pub use ast::{
    Associativity, BinaryOp, Expr, ExprArena, ExprKind, FieldInit, SharedArena, UnaryOp,
    WhenArm, WhenPattern,
};
pub use enum_layout::{EnumId, EnumLayout, EnumRegistry, LayoutError, VariantDef};
pub use expr_id::{ExprId, ListRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use operator_chain::{fold_operator_chain, ChainError};
pub use span::Span;
