//! Semantic analysis for Cool programs.
//!
//! This crate implements the type-checking phase of the compiler: it
//! builds and validates the class inheritance hierarchy, resolves every
//! identifier, dispatch, and type annotation against that hierarchy, and
//! infers and checks the static type of every expression, decorating the
//! AST in place. Every semantic error found is reported, not just the
//! first, and checking stays robust to earlier errors.

mod checker;
mod diagnostics;
mod hierarchy;
mod scope;

pub use checker::TypeChecker;
pub use diagnostics::{
    Diagnostics, ErrorLocation, SemanticError, SemanticErrorKind, SemanticErrors,
};
pub use hierarchy::{AttributeInfo, ClassInfo, ClassTable, FormalInfo, MethodInfo};
pub use scope::ScopeStack;

use cool_ast::Program;
use cool_core::{Interner, Names};

/// Performs semantic analysis on a parsed Cool program.
///
/// Runs in two checkpointed stages. First the class hierarchy is built and
/// globally validated; a structural error (inheritance cycle, missing
/// `Main`, class redefinition, illegal or undefined parent) aborts the run
/// immediately and no per-class checking is attempted. Otherwise every
/// class is checked against fresh scope stacks and each expression node's
/// `ty` field is filled in, best effort even around errors, defaulting to
/// `Object` wherever inference failed.
///
/// # Errors
/// Returns [`SemanticErrors`] carrying every reported error, in order,
/// when the error count is nonzero at either checkpoint. Callers should
/// only hand the decorated tree to code generation on `Ok`.
pub fn analyze(program: &mut Program, interner: &mut Interner) -> Result<(), SemanticErrors> {
    let names = Names::install(interner);

    // Checkpoint 1: a malformed hierarchy is unusable, so per-class
    // checking is skipped entirely.
    let table = match ClassTable::build(program, &names, interner) {
        Ok(table) => table,
        Err(error) => return Err(SemanticErrors::new(vec![error])),
    };

    let mut checker = TypeChecker::new(table, &names, interner);
    for class in &mut program.classes {
        checker.check_class(class);
    }

    // Checkpoint 2: any per-class error halts the pipeline here.
    checker.finish()
}
