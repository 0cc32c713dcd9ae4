//! String interning.
//!
//! Every identifier, type name, and string constant in a Cool program is
//! interned once and handled as a [`Symbol`] afterwards. Two occurrences of
//! the same textual name always produce the same `Symbol`, so name equality
//! throughout the compiler is a plain integer comparison.

use std::collections::HashMap;

/// An interned string handle with identity equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

/// Interns strings to unique [`Symbol`] handles.
#[derive(Debug, Default)]
pub struct Interner {
    map: HashMap<String, Symbol>,
    strings: Vec<String>,
}

impl Interner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a string, returning the existing handle if it was seen before.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.map.get(s) {
            return sym;
        }

        let sym = Symbol(self.strings.len() as u32);
        self.strings.push(s.to_string());
        self.map.insert(s.to_string(), sym);
        sym
    }

    /// Returns the text a symbol was interned from.
    ///
    /// # Panics
    /// Panics if the symbol came from a different interner.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> &str {
        &self.strings[sym.0 as usize]
    }
}
