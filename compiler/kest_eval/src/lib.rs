#![deny(clippy::arithmetic_side_effects)]
//! Kest Eval - Tree-walking evaluator for the Kest language.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: lexical scoping with a scope stack
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `dispatch_builtin_method`: the runtime library, one module per value family
//! - `exec::control`: `if` and `when` semantics shared by every caller
//! - `Interpreter`: walks an `ExprArena` and ties the pieces together
//!
//! Value types come from `kest_value` and are re-exported here.

mod environment;
mod eval_mode;
pub mod exec;
pub mod interpreter;
mod methods;
mod operators;
mod stack;
mod unary_operators;

use std::sync::Once;

pub use environment::{Environment, Scope};
pub use eval_mode::{BudgetExceeded, EvalMode, ModeState};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use methods::{dispatch_builtin_method, map_with_result, FunctionCaller, NativeCaller};
pub use operators::evaluate_binary;
pub use stack::ensure_sufficient_stack;
pub use unary_operators::evaluate_unary;

pub use kest_value::{
    Discriminant, EvalError, EvalErrorKind, EvalResult, FunctionValue, Heap, Number, RecordValue,
    TagValue, Text, Value,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// The filter is read from `KEST_LOG`, falling back to `RUST_LOG`
/// (`KEST_LOG=kest_eval=debug`). With `KEST_LOG_TREE` set, spans render as an
/// indented call tree instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Ok(filter) =
            EnvFilter::try_from_env("KEST_LOG").or_else(|_| EnvFilter::try_from_default_env())
        else {
            return;
        };

        let tree = std::env::var_os("KEST_LOG_TREE")
            .map(|_| HierarchicalLayer::new(2).with_targets(true));
        let flat = tree
            .is_none()
            .then(|| fmt::layer().with_target(true).with_level(true));

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(flat)
            .with(tree)
            .try_init();
    });
}

#[cfg(test)]
mod tests;
