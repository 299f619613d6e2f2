//! `InterpreterBuilder` for creating `Interpreter` instances.

use kest_ir::{SharedArena, SharedInterner};

use super::Interpreter;
use crate::eval_mode::{EvalMode, ModeState};
use crate::Environment;

/// Builder for `Interpreter`.
///
/// The mode defaults to `EvalMode::Interpret` and the environment to an
/// empty global scope.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    arena: SharedArena,
    env: Option<Environment>,
    mode: EvalMode,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner, arena: SharedArena) -> Self {
        Self {
            interner,
            arena,
            env: None,
            mode: EvalMode::default(),
        }
    }

    /// Set the evaluation mode.
    ///
    /// Controls the recursion limit and the call budget.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Start from a pre-populated environment (host-provided globals).
    #[must_use]
    pub fn env(mut self, env: Environment) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter {
        let mode_state = ModeState::new(&self.mode);
        tracing::debug!(mode = ?self.mode, exprs = self.arena.len(), "building interpreter");
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            env: self.env.unwrap_or_default(),
            mode: self.mode,
            mode_state,
            call_depth: 0,
        }
    }
}
