//! Core type checker structure.

use cool_core::{Interner, Names, Span, Symbol};

use crate::diagnostics::{Diagnostics, ErrorLocation, SemanticError, SemanticErrorKind};
use crate::hierarchy::ClassTable;
use crate::scope::ScopeStack;

/// Type checker for Cool programs.
///
/// Owns the validated class hierarchy and the error accumulator for one
/// run. The scope stacks and the current class/file are per-class state,
/// rebuilt from scratch for every class checked; nothing mutable survives
/// from one class to the next.
pub struct TypeChecker<'a> {
    /// The validated class hierarchy, read-only for the rest of the run
    pub(crate) hierarchy: ClassTable,
    pub(crate) names: &'a Names,
    pub(crate) interner: &'a Interner,
    pub(crate) diagnostics: Diagnostics,

    /// Identifier -> declared type, one scope per ancestor plus block scopes
    pub(crate) attributes: ScopeStack,
    /// Method name -> defining class
    pub(crate) methods: ScopeStack,
    /// The class whose features are currently being checked; resolves
    /// `SELF_TYPE` at each use
    pub(crate) current_class: Symbol,
    pub(crate) current_file: Symbol,
}

impl<'a> TypeChecker<'a> {
    /// Creates a checker over a successfully built hierarchy.
    #[must_use]
    pub fn new(hierarchy: ClassTable, names: &'a Names, interner: &'a Interner) -> Self {
        Self {
            hierarchy,
            names,
            interner,
            diagnostics: Diagnostics::new(),
            attributes: ScopeStack::new(),
            methods: ScopeStack::new(),
            current_class: names.object,
            current_file: names.basic_class_file,
        }
    }

    /// The errors accumulated so far.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub(crate) fn name(&self, symbol: Symbol) -> String {
        self.interner.resolve(symbol).to_string()
    }

    /// Resolves `SELF_TYPE` to the enclosing class; other types pass through.
    pub(crate) fn resolve_self_type(&self, ty: Symbol) -> Symbol {
        if ty == self.names.self_type {
            self.current_class
        } else {
            ty
        }
    }

    /// Whether `found` conforms to `declared` (`declared` is an ancestor of
    /// `found` once `SELF_TYPE` on the found side is resolved).
    pub(crate) fn conforms(&self, found: Symbol, declared: Symbol) -> bool {
        if found == declared {
            return true;
        }
        self.hierarchy
            .is_ancestor(declared, self.resolve_self_type(found))
    }

    /// Reports an error at a position within the current class's file.
    pub(crate) fn error(&mut self, span: Span, kind: SemanticErrorKind) {
        let file = self.name(self.current_file);
        self.diagnostics.report(SemanticError::new(
            Some(ErrorLocation {
                file,
                line: span.start.line,
            }),
            kind,
        ));
    }

    /// Reports an error against an arbitrary file and optional position;
    /// used by the binder, which may be reporting about an ancestor class.
    pub(crate) fn error_at(&mut self, file: Symbol, span: Option<Span>, kind: SemanticErrorKind) {
        let file = self.name(file);
        self.diagnostics.report(SemanticError::new(
            span.map(|span| ErrorLocation {
                file,
                line: span.start.line,
            }),
            kind,
        ));
    }
}
