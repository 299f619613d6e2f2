//! RAII scope guard for the interpreter's environment.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so code inside a
//! scope calls interpreter methods as usual. Dropping the guard pops the
//! scope, including during unwinding.

use std::ops::{Deref, DerefMut};

use kest_value::{Name, Value};

use super::Interpreter;

pub struct ScopedInterpreter<'guard> {
    interpreter: &'guard mut Interpreter,
}

impl Drop for ScopedInterpreter<'_> {
    fn drop(&mut self) {
        self.interpreter.env.pop_scope();
    }
}

impl Deref for ScopedInterpreter<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Push a scope that is popped when the returned guard drops.
    pub(super) fn scoped(&mut self) -> ScopedInterpreter<'_> {
        self.env.push_scope();
        ScopedInterpreter { interpreter: self }
    }

    /// Run `f` in a fresh scope holding `bindings`.
    pub(super) fn with_bindings<R>(
        &mut self,
        bindings: impl IntoIterator<Item = (Name, Value)>,
        f: impl FnOnce(&mut Interpreter) -> R,
    ) -> R {
        let mut scoped = self.scoped();
        for (name, value) in bindings {
            scoped.env.define(name, value);
        }
        f(&mut scoped)
    }
}
