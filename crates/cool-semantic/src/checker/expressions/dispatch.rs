//! Dynamic and static dispatch type checking.

use cool_ast::Expr;
use cool_core::{Span, Symbol};

use crate::checker::core::TypeChecker;
use crate::diagnostics::SemanticErrorKind;
use crate::hierarchy::MethodInfo;

impl TypeChecker<'_> {
    /// Checks `expr.method(args)`.
    ///
    /// A `SELF_TYPE` receiver resolves the method against the enclosing
    /// class but keeps the call polymorphic: a declared `SELF_TYPE` return
    /// type then stays `SELF_TYPE`. Any failure types the call as `Object`
    /// and skips the remaining steps.
    pub(super) fn check_dispatch(
        &mut self,
        receiver: &mut Expr,
        method: Symbol,
        args: &mut [Expr],
        span: Span,
    ) -> Symbol {
        let receiver_ty = self.check_expr(receiver);
        let resolved = self.resolve_self_type(receiver_ty);

        if receiver_ty != self.names.self_type && !self.hierarchy.contains(resolved) {
            self.error(
                span,
                SemanticErrorKind::DispatchOnUndefinedClass {
                    class: self.name(resolved),
                },
            );
            return self.names.object;
        }

        let Some(signature) = self.hierarchy.resolve_method(resolved, method).cloned() else {
            self.error(
                span,
                SemanticErrorKind::UndefinedMethod {
                    method: self.name(method),
                },
            );
            return self.names.object;
        };

        if !self.check_call_arguments(method, &signature, args, span) {
            return self.names.object;
        }

        if signature.return_type == self.names.self_type {
            receiver_ty
        } else {
            signature.return_type
        }
    }

    /// Checks `expr@Class.method(args)`: like dynamic dispatch, but the
    /// method is resolved from the named class, and the receiver must
    /// conform to that class.
    pub(super) fn check_static_dispatch(
        &mut self,
        receiver: &mut Expr,
        class: Symbol,
        method: Symbol,
        args: &mut [Expr],
        span: Span,
    ) -> Symbol {
        if !self.hierarchy.contains(class) {
            self.error(
                span,
                SemanticErrorKind::StaticDispatchUndefinedClass {
                    class: self.name(class),
                },
            );
            return self.names.object;
        }

        let Some(signature) = self.hierarchy.resolve_method(class, method).cloned() else {
            self.error(
                span,
                SemanticErrorKind::StaticDispatchUndefinedMethod {
                    method: self.name(method),
                },
            );
            return self.names.object;
        };

        let receiver_ty = self.check_expr(receiver);
        if !self.conforms(receiver_ty, class) {
            self.error(
                span,
                SemanticErrorKind::StaticDispatchTypeMismatch {
                    found: self.name(self.resolve_self_type(receiver_ty)),
                    declared: self.name(class),
                },
            );
            return self.names.object;
        }

        if !self.check_call_arguments(method, &signature, args, span) {
            return self.names.object;
        }

        if signature.return_type == self.names.self_type {
            receiver_ty
        } else {
            signature.return_type
        }
    }

    /// Shared arity and argument-conformance walk. The first argument
    /// mismatch is fatal for the call; later arguments stay unchecked.
    fn check_call_arguments(
        &mut self,
        method: Symbol,
        signature: &MethodInfo,
        args: &mut [Expr],
        span: Span,
    ) -> bool {
        if args.len() != signature.formals.len() {
            self.error(
                span,
                SemanticErrorKind::DispatchArityMismatch {
                    method: self.name(method),
                },
            );
            return false;
        }

        for (arg, formal) in args.iter_mut().zip(&signature.formals) {
            let arg_ty = self.check_expr(arg);
            if !self.conforms(arg_ty, formal.declared_type) {
                self.error(
                    span,
                    SemanticErrorKind::ArgumentTypeMismatch {
                        method: self.name(method),
                        formal: self.name(formal.name),
                        found: self.name(self.resolve_self_type(arg_ty)),
                        declared: self.name(formal.declared_type),
                    },
                );
                return false;
            }
        }
        true
    }
}
