//! Scoped symbol bindings for semantic analysis.
//!
//! The checker maintains two independent instances per class: one mapping
//! identifiers to their declared types, one mapping method names to the
//! class that defines them. The binder pushes one scope per ancestor
//! (root-most first), so an inherited binding always sits in an outer
//! scope of the class's own.

use std::collections::HashMap;

use cool_core::Symbol;

/// A stack of scopes mapping an identifier to a bound symbol.
#[derive(Debug)]
pub struct ScopeStack {
    /// Stack of scopes, with the current scope at the top
    scopes: Vec<HashMap<Symbol, Symbol>>,
}

impl ScopeStack {
    /// Creates a new stack with a single empty outermost scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scopes: vec![HashMap::new()],
        }
    }

    /// Enters a new scope.
    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Exits the current scope.
    ///
    /// # Panics
    /// Panics if attempting to exit the outermost scope.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() <= 1 {
            panic!("Cannot exit outermost scope");
        }
        self.scopes.pop();
    }

    /// Binds a name in the current scope, replacing any existing binding
    /// there. Callers that must reject duplicates probe first.
    pub fn define(&mut self, name: Symbol, value: Symbol) {
        self.scopes
            .last_mut()
            .expect("scope stack always has an outermost scope")
            .insert(name, value);
    }

    /// Looks up a name in the current scope only.
    #[must_use]
    pub fn probe(&self, name: Symbol) -> Option<Symbol> {
        self.scopes
            .last()
            .expect("scope stack always has an outermost scope")
            .get(&name)
            .copied()
    }

    /// Looks up a name from the current scope outwards.
    #[must_use]
    pub fn lookup(&self, name: Symbol) -> Option<Symbol> {
        for scope in self.scopes.iter().rev() {
            if let Some(&value) = scope.get(&name) {
                return Some(value);
            }
        }
        None
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}
