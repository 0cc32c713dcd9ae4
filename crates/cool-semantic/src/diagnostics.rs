//! Semantic error records and accumulation.
//!
//! Per-class errors are collected, not thrown: the checker reports each at
//! its point of occurrence and keeps going with a fallback type so sibling
//! expressions can still be checked. There is no warning tier; everything
//! detected is an error.

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Every kind of error the semantic phase can report.
///
/// Names are resolved to strings at construction time so a record can
/// outlive the checker and its interner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticErrorKind {
    // Structural hierarchy errors: fatal to hierarchy construction.
    #[error("Class {class}, or an ancestor of {class}, is involved in an inheritance cycle.")]
    InheritanceCycle { class: String },

    #[error("Redefinition of basic class SELF_TYPE.")]
    SelfTypeRedefinition,

    #[error("Class {class} cannot inherit from class {parent}.")]
    IllegalParent { class: String, parent: String },

    #[error("Class {class} was previously defined.")]
    DuplicateClass { class: String },

    #[error("Class Main is not defined.")]
    MissingMain,

    #[error("Class {class} inherits from an undefined class {parent}.")]
    UndefinedParent { class: String, parent: String },

    // Feature binding errors.
    #[error("Method {method} is multiply defined.")]
    DuplicateMethod { method: String },

    #[error("Incompatible number of formal parameters in redefined method {method}.")]
    OverrideArityMismatch { method: String },

    #[error(
        "In redefined method {method}, parameter type {found} is different from original type {expected}."
    )]
    OverrideParamMismatch {
        method: String,
        found: String,
        expected: String,
    },

    #[error(
        "In redefined method {method}, return type {found} is different from original return type {expected}."
    )]
    OverrideReturnMismatch {
        method: String,
        found: String,
        expected: String,
    },

    #[error("'self' cannot be the name of an attribute.")]
    SelfAttributeName,

    #[error("Attribute {attribute} is multiply defined in class.")]
    DuplicateAttribute { attribute: String },

    #[error("Attribute {attribute} is an attribute of an inherited class.")]
    AttributeOverride { attribute: String },

    // Feature validation errors.
    #[error("'main' method in class Main should have no arguments.")]
    MainMethodArity,

    #[error("'self' cannot be the name of a formal parameter.")]
    SelfFormalName,

    #[error("Formal parameter {formal} cannot have type SELF_TYPE.")]
    SelfTypeFormal { formal: String },

    #[error("Formal parameter {formal} is multiply defined.")]
    DuplicateFormal { formal: String },

    #[error(
        "Inferred return type {found} of method {method} does not conform to declared return type {declared}."
    )]
    ReturnTypeMismatch {
        method: String,
        found: String,
        declared: String,
    },

    #[error("Class {class} of attribute {attribute} is undefined.")]
    UndefinedAttributeType { class: String, attribute: String },

    #[error(
        "Inferred type {found} of initialization of attribute {attribute} does not conform to declared type {declared}."
    )]
    AttributeInitMismatch {
        attribute: String,
        found: String,
        declared: String,
    },

    // Expression errors.
    #[error("Assignment to undeclared variable {name}.")]
    AssignToUndeclared { name: String },

    #[error(
        "Type {found} of assigned expression does not conform to declared type {declared} of identifier {name}."
    )]
    AssignTypeMismatch {
        name: String,
        found: String,
        declared: String,
    },

    #[error("Undeclared identifier {name}.")]
    UndeclaredIdentifier { name: String },

    #[error("Dispatch on undefined class {class}.")]
    DispatchOnUndefinedClass { class: String },

    #[error("Dispatch to undefined method {method}.")]
    UndefinedMethod { method: String },

    #[error("Static dispatch to undefined class {class}.")]
    StaticDispatchUndefinedClass { class: String },

    #[error("Static dispatch to undefined method {method}.")]
    StaticDispatchUndefinedMethod { method: String },

    #[error("Method {method} called with wrong number of arguments.")]
    DispatchArityMismatch { method: String },

    #[error(
        "In call of method {method}, type {found} of parameter {formal} does not conform to declared type {declared}."
    )]
    ArgumentTypeMismatch {
        method: String,
        formal: String,
        found: String,
        declared: String,
    },

    #[error(
        "Expression type {found} does not conform to declared static dispatch type {declared}."
    )]
    StaticDispatchTypeMismatch { found: String, declared: String },

    #[error("Predicate of 'if' does not have type Bool.")]
    NonBoolIfPredicate,

    #[error("Loop condition does not have type Bool.")]
    NonBoolLoopCondition,

    #[error("Class {class} of case branch is undefined.")]
    UndefinedBranchType { class: String },

    #[error("Duplicate branch {class} in case statement.")]
    DuplicateBranchType { class: String },

    #[error(
        "Inferred type {found} of branch {name} does not conform to declared branch type {declared}."
    )]
    BranchTypeMismatch {
        name: String,
        found: String,
        declared: String,
    },

    #[error("'self' cannot be bound in a 'let' expression.")]
    SelfInLet,

    #[error(
        "Inferred type {found} of 'let' initialization does not conform to declared type {declared}."
    )]
    LetInitMismatch { found: String, declared: String },

    #[error("non-Int arguments: {left} {op} {right}")]
    NonIntArguments {
        left: String,
        op: String,
        right: String,
    },

    #[error("Argument of '{op}' has type {found} instead of {expected}.")]
    UnaryTypeMismatch {
        op: String,
        found: String,
        expected: String,
    },

    #[error("Illegal comparison with a basic type.")]
    IllegalComparison,

    #[error("'new' used with undefined class {class}.")]
    NewUndefinedClass { class: String },
}

/// Source position of a semantic error.
///
/// Whole-hierarchy structural errors (a missing `Main`) have no single
/// associated location, hence the `Option` at the use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    pub file: String,
    pub line: usize,
}

/// A single reported semantic error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.render())]
pub struct SemanticError {
    pub location: Option<ErrorLocation>,
    pub kind: SemanticErrorKind,
}

impl SemanticError {
    #[must_use]
    pub fn new(location: Option<ErrorLocation>, kind: SemanticErrorKind) -> Self {
        Self { location, kind }
    }

    fn render(&self) -> String {
        match &self.location {
            Some(loc) => format!("{}:{}: {}", loc.file, loc.line, self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Ordered accumulator for semantic errors.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<SemanticError>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error. Errors are kept in reporting order.
    pub fn report(&mut self, error: SemanticError) {
        self.errors.push(error);
    }

    /// Running count of errors reported so far.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[SemanticError] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<SemanticError> {
        self.errors
    }
}

/// The failure value of a whole semantic-analysis run.
///
/// Carries every error reported during the run, in order. Its display
/// form is the fixed summary line the compiler driver prints before
/// exiting with a non-zero status.
#[derive(Debug, Error, Diagnostic)]
#[error("Compilation halted due to static semantic errors.")]
#[diagnostic(code(cool::semantic))]
pub struct SemanticErrors {
    errors: Vec<SemanticError>,
}

impl SemanticErrors {
    #[must_use]
    pub fn new(errors: Vec<SemanticError>) -> Self {
        Self { errors }
    }

    #[must_use]
    pub fn errors(&self) -> &[SemanticError] {
        &self.errors
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl From<SemanticErrors> for cool_core::Error {
    fn from(errors: SemanticErrors) -> Self {
        let mut message = String::new();
        for error in errors.errors() {
            message.push_str(&error.to_string());
            message.push('\n');
        }
        message.push_str("Compilation halted due to static semantic errors.");
        cool_core::Error::Semantic(message)
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}
