//! Evaluation modes.
//!
//! An `EvalMode` picks the evaluation policy; `ModeState` carries the
//! mutable counters that policy needs while a program runs.

/// How the interpreter bounds a run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Ordinary evaluation. Recursion is bounded only by the (growable) stack.
    #[default]
    Interpret,
    /// Bounded evaluation: aborts after `budget` function calls.
    ConstEval {
        /// Maximum number of function calls before aborting.
        budget: u32,
    },
    /// Evaluation under a test harness: a generous but finite recursion limit.
    TestRun,
}

impl EvalMode {
    /// Maximum function call depth, or `None` when unbounded.
    ///
    /// - `Interpret`: `None` on native (stacker grows the stack), 200 on WASM
    /// - `ConstEval`: 64
    /// - `TestRun`: 500
    #[inline]
    pub fn max_recursion_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::ConstEval { .. } => Some(64),
            Self::TestRun => Some(500),
        }
    }

    /// Whether function calls are counted against a budget.
    #[inline]
    pub fn is_budgeted(&self) -> bool {
        matches!(self, Self::ConstEval { .. })
    }
}

/// Per-run mutable state for the active `EvalMode`.
#[derive(Debug)]
pub struct ModeState {
    /// Function calls made so far (counted only when budgeted).
    pub call_count: usize,
    budget: Option<u32>,
}

impl ModeState {
    pub fn new(mode: &EvalMode) -> Self {
        let budget = match mode {
            EvalMode::ConstEval { budget } => Some(*budget),
            EvalMode::Interpret | EvalMode::TestRun => None,
        };
        Self {
            call_count: 0,
            budget,
        }
    }

    /// Count one call against the budget.
    ///
    /// Always `Ok` for unbudgeted modes.
    #[inline]
    pub fn check_budget(&mut self) -> Result<(), BudgetExceeded> {
        if let Some(budget) = self.budget {
            self.call_count = self.call_count.saturating_add(1);
            if self.call_count > budget as usize {
                return Err(BudgetExceeded {
                    budget,
                    calls: self.call_count,
                });
            }
        }
        Ok(())
    }
}

/// The `ConstEval` call budget ran out.
#[derive(Debug)]
pub struct BudgetExceeded {
    pub budget: u32,
    pub calls: usize,
}
