//! Conditional, loop, and case checking.

use std::collections::HashSet;

use cool_ast::{CaseBranch, Expr};
use cool_core::{Span, Symbol};

use crate::checker::core::TypeChecker;
use crate::diagnostics::SemanticErrorKind;

impl TypeChecker<'_> {
    /// An `if` types as the nearest common ancestor of its branches, with
    /// `SELF_TYPE` branches resolved to the enclosing class first. A
    /// non-`Bool` predicate is fatal for the construct.
    pub(crate) fn check_cond(
        &mut self,
        pred: &mut Expr,
        then_branch: &mut Expr,
        else_branch: &mut Expr,
        span: Span,
    ) -> Symbol {
        let pred_ty = self.check_expr(pred);
        if pred_ty != self.names.boolean {
            self.error(span, SemanticErrorKind::NonBoolIfPredicate);
            return self.names.object;
        }

        let then_ty = self.check_expr(then_branch);
        let else_ty = self.check_expr(else_branch);
        let then_ty = self.resolve_self_type(then_ty);
        let else_ty = self.resolve_self_type(else_ty);
        self.hierarchy.join(then_ty, else_ty)
    }

    /// Loops always type as `Object`; the body is checked even when the
    /// predicate is wrong.
    pub(crate) fn check_loop(&mut self, pred: &mut Expr, body: &mut Expr, span: Span) -> Symbol {
        let pred_ty = self.check_expr(pred);
        if pred_ty != self.names.boolean {
            self.error(span, SemanticErrorKind::NonBoolLoopCondition);
        }
        self.check_expr(body);
        self.names.object
    }

    /// A `case` types as the fold of nearest common ancestors over its
    /// branch result types, left to right. Undefined or duplicated branch
    /// types and non-conforming branch bodies are fatal for the construct.
    pub(crate) fn check_case(
        &mut self,
        scrutinee: &mut Expr,
        branches: &mut [CaseBranch],
    ) -> Symbol {
        // Checked for its errors only; the scrutinee's type does not
        // constrain the branches.
        self.check_expr(scrutinee);

        let mut seen = HashSet::new();
        let mut result: Option<Symbol> = None;

        for branch in branches.iter_mut() {
            if !self.hierarchy.contains(branch.declared_type) {
                self.error(
                    branch.span,
                    SemanticErrorKind::UndefinedBranchType {
                        class: self.name(branch.declared_type),
                    },
                );
                return self.names.object;
            }
            if !seen.insert(branch.declared_type) {
                self.error(
                    branch.span,
                    SemanticErrorKind::DuplicateBranchType {
                        class: self.name(branch.declared_type),
                    },
                );
                return self.names.object;
            }

            self.attributes.enter_scope();
            self.attributes.define(branch.name, branch.declared_type);
            let body_ty = self.check_expr(&mut branch.body);
            self.attributes.exit_scope();

            let found = self.resolve_self_type(body_ty);
            if !self.hierarchy.is_ancestor(branch.declared_type, found) {
                self.error(
                    branch.span,
                    SemanticErrorKind::BranchTypeMismatch {
                        name: self.name(branch.name),
                        found: self.name(found),
                        declared: self.name(branch.declared_type),
                    },
                );
                return self.names.object;
            }

            result = Some(match result {
                Some(acc) => self.hierarchy.join(acc, found),
                None => found,
            });
        }

        result.unwrap_or(self.names.object)
    }
}
