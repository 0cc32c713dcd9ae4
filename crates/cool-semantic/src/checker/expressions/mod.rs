//! Expression type checking.
//!
//! One rule per expression kind. Every rule computes the node's static
//! type, stores it on the node, and returns it, so parent rules and the
//! downstream code generator consume already-computed types. On an error
//! the rule reports it and falls back to `Object` (or `Bool` for the
//! boolean-valued constructs) so checking can continue.
//!
//! Submodules:
//! - `operators`: binary and unary operator checking
//! - `dispatch`: dynamic and static dispatch

mod dispatch;
mod operators;

use cool_ast::{Expr, ExprKind};
use cool_core::{Span, Symbol};

use crate::checker::core::TypeChecker;
use crate::diagnostics::SemanticErrorKind;

impl TypeChecker<'_> {
    /// Checks an expression, decorates the node, and returns its type.
    ///
    /// This is the main entry point for expression type checking; the
    /// match is exhaustive over `ExprKind`, so adding an expression kind
    /// forces a checking rule.
    pub(crate) fn check_expr(&mut self, expr: &mut Expr) -> Symbol {
        let span = expr.span;
        let ty = match &mut expr.kind {
            // Literals have fixed types and always succeed.
            ExprKind::IntLit { .. } => self.names.int,
            ExprKind::BoolLit { .. } => self.names.boolean,
            ExprKind::StrLit { .. } => self.names.string,

            // The "absent expression" sentinel, distinct from every class.
            ExprKind::NoExpr => self.names.no_type,

            ExprKind::Ident { name } => self.check_ident(*name, span),

            ExprKind::Assign { target, value } => self.check_assign(*target, value, span),

            ExprKind::Binary { op, lhs, rhs } => self.check_binary(*op, lhs, rhs, span),
            ExprKind::Unary { op, operand } => self.check_unary(*op, operand, span),

            ExprKind::Dispatch {
                receiver,
                method,
                args,
            } => self.check_dispatch(receiver, *method, args, span),
            ExprKind::StaticDispatch {
                receiver,
                class,
                method,
                args,
            } => self.check_static_dispatch(receiver, *class, *method, args, span),

            ExprKind::Cond {
                pred,
                then_branch,
                else_branch,
            } => self.check_cond(pred, then_branch, else_branch, span),
            ExprKind::Loop { pred, body } => self.check_loop(pred, body, span),
            ExprKind::Case {
                scrutinee,
                branches,
            } => self.check_case(scrutinee, branches),

            ExprKind::Block { body } => self.check_block(body),
            ExprKind::Let {
                name,
                declared_type,
                init,
                body,
            } => self.check_let(*name, *declared_type, init, body, span),

            ExprKind::New { class } => self.check_new(*class, span),
        };
        expr.ty = Some(ty);
        ty
    }

    /// `self` types as `SELF_TYPE`; other identifiers resolve through the
    /// scope stack outwards.
    fn check_ident(&mut self, name: Symbol, span: Span) -> Symbol {
        if name == self.names.self_name {
            return self.names.self_type;
        }
        match self.attributes.lookup(name) {
            Some(ty) => ty,
            None => {
                self.error(
                    span,
                    SemanticErrorKind::UndeclaredIdentifier {
                        name: self.name(name),
                    },
                );
                self.names.object
            }
        }
    }

    fn check_assign(&mut self, target: Symbol, value: &mut Expr, span: Span) -> Symbol {
        let Some(declared) = self.attributes.lookup(target) else {
            self.error(
                span,
                SemanticErrorKind::AssignToUndeclared {
                    name: self.name(target),
                },
            );
            return self.names.object;
        };

        let value_ty = self.check_expr(value);
        if !self.conforms(value_ty, declared) {
            self.error(
                span,
                SemanticErrorKind::AssignTypeMismatch {
                    name: self.name(target),
                    found: self.name(value_ty),
                    declared: self.name(declared),
                },
            );
            return self.names.object;
        }
        value_ty
    }

    /// A block types as its last expression; the ones before it are
    /// checked for their errors only.
    fn check_block(&mut self, body: &mut [Expr]) -> Symbol {
        let mut last = self.names.object;
        for expr in body.iter_mut() {
            last = self.check_expr(expr);
        }
        last
    }

    /// The initializer is checked before the new scope opens, so a `let`
    /// binding is never visible to its own initializer.
    fn check_let(
        &mut self,
        name: Symbol,
        declared_type: Symbol,
        init: &mut Expr,
        body: &mut Expr,
        span: Span,
    ) -> Symbol {
        if name == self.names.self_name {
            self.error(span, SemanticErrorKind::SelfInLet);
            return self.names.object;
        }

        let init_ty = self.check_expr(init);

        self.attributes.enter_scope();
        self.attributes.define(name, declared_type);

        if init_ty != self.names.no_type && !self.conforms(init_ty, declared_type) {
            self.error(
                span,
                SemanticErrorKind::LetInitMismatch {
                    found: self.name(init_ty),
                    declared: self.name(declared_type),
                },
            );
            self.attributes.exit_scope();
            return self.names.object;
        }

        let body_ty = self.check_expr(body);
        self.attributes.exit_scope();
        body_ty
    }

    /// `new SELF_TYPE` stays polymorphic; any other operand must name an
    /// existing class.
    fn check_new(&mut self, class: Symbol, span: Span) -> Symbol {
        if class == self.names.self_type {
            self.names.self_type
        } else if !self.hierarchy.contains(class) {
            self.error(
                span,
                SemanticErrorKind::NewUndefinedClass {
                    class: self.name(class),
                },
            );
            self.names.object
        } else {
            class
        }
    }
}
