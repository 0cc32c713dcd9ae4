//! Binary and unary operator type checking.

use cool_ast::{BinaryOp, Expr, UnaryOp};
use cool_core::{Span, Symbol};

use crate::checker::core::TypeChecker;
use crate::diagnostics::SemanticErrorKind;

impl TypeChecker<'_> {
    /// Checks a binary operation.
    ///
    /// Arithmetic requires exactly `Int` on both sides and yields `Int`;
    /// the relational operators require `Int` and yield `Bool`. Equality
    /// is special-cased: the basic types `Int`, `Bool`, and `String` may
    /// only be compared with themselves, any other pair of types is
    /// comparable, and the result is `Bool` even when the comparison was
    /// illegal.
    pub(super) fn check_binary(
        &mut self,
        op: BinaryOp,
        lhs: &mut Expr,
        rhs: &mut Expr,
        span: Span,
    ) -> Symbol {
        let left = self.check_expr(lhs);
        let right = self.check_expr(rhs);

        match op {
            BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div => {
                if left != self.names.int || right != self.names.int {
                    self.report_non_int(op, left, right, span);
                    self.names.object
                } else {
                    self.names.int
                }
            }
            BinaryOp::Lt | BinaryOp::Le => {
                if left != self.names.int || right != self.names.int {
                    self.report_non_int(op, left, right, span);
                    self.names.object
                } else {
                    self.names.boolean
                }
            }
            BinaryOp::Eq => {
                let basic = [self.names.int, self.names.boolean, self.names.string];
                if (basic.contains(&left) || basic.contains(&right)) && left != right {
                    self.error(span, SemanticErrorKind::IllegalComparison);
                }
                self.names.boolean
            }
        }
    }

    /// Checks a unary operation. `isvoid` accepts any operand and is
    /// always `Bool`.
    pub(super) fn check_unary(&mut self, op: UnaryOp, operand: &mut Expr, span: Span) -> Symbol {
        let operand_ty = self.check_expr(operand);

        match op {
            UnaryOp::Neg => {
                if operand_ty != self.names.int {
                    self.error(
                        span,
                        SemanticErrorKind::UnaryTypeMismatch {
                            op: op.to_string(),
                            found: self.name(operand_ty),
                            expected: "Int".to_string(),
                        },
                    );
                    self.names.object
                } else {
                    self.names.int
                }
            }
            UnaryOp::Not => {
                if operand_ty != self.names.boolean {
                    self.error(
                        span,
                        SemanticErrorKind::UnaryTypeMismatch {
                            op: op.to_string(),
                            found: self.name(operand_ty),
                            expected: "Bool".to_string(),
                        },
                    );
                    self.names.object
                } else {
                    self.names.boolean
                }
            }
            UnaryOp::IsVoid => self.names.boolean,
        }
    }

    fn report_non_int(&mut self, op: BinaryOp, left: Symbol, right: Symbol, span: Span) {
        self.error(
            span,
            SemanticErrorKind::NonIntArguments {
                left: self.name(left),
                op: op.to_string(),
                right: self.name(right),
            },
        );
    }
}
