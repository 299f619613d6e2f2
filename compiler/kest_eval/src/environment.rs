//! Variable scoping for the interpreter.
//!
//! Instead of cloning environments, we keep a stack of scopes that is pushed
//! and popped around `let`, `when` arms and function bodies. Bindings are
//! immutable; an inner definition shadows an outer one.

use kest_value::{Name, Value};
use rustc_hash::FxHashMap;

/// A single lexical scope.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Scope stack. The bottom scope is the global scope and is never popped.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::new()],
        }
    }

    /// An environment whose global scope holds a closure's captures.
    pub fn from_captures(captures: &FxHashMap<Name, Value>) -> Self {
        Environment {
            scopes: vec![Scope {
                bindings: captures.clone(),
            }],
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    #[inline]
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Pop the innermost scope. The global scope stays.
    #[inline]
    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Define a variable in the innermost scope.
    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.define(name, value);
        }
    }

    /// Define a variable in the global scope.
    pub fn define_global(&mut self, name: Name, value: Value) {
        if let Some(scope) = self.scopes.first_mut() {
            scope.define(name, value);
        }
    }

    /// Look up a variable, innermost scope first.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<Value> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .cloned()
    }

    /// Snapshot every visible binding for a closure.
    ///
    /// Inner bindings win over the outer ones they shadow.
    pub fn capture(&self) -> FxHashMap<Name, Value> {
        let mut captures = FxHashMap::default();
        for scope in &self.scopes {
            for (name, value) in &scope.bindings {
                captures.insert(*name, value.clone());
            }
        }
        captures
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
