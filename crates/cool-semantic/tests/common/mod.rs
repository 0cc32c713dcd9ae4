//! Common test utilities for semantic analysis tests.
//!
//! The parser is an external collaborator, so tests construct ASTs
//! programmatically through a small builder that owns the interner.

#![allow(dead_code)]

use cool_ast::{
    Attribute, BinaryOp, CaseBranch, ClassDecl, Expr, ExprKind, Feature, Formal, Method, Program,
    UnaryOp,
};
use cool_core::{Interner, Span, Symbol};
use cool_semantic::{SemanticError, analyze};

pub struct AstBuilder {
    pub interner: Interner,
    file: Symbol,
}

impl AstBuilder {
    pub fn new() -> Self {
        let mut interner = Interner::new();
        let file = interner.intern("test.cl");
        Self { interner, file }
    }

    pub fn sym(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    fn span(&self) -> Span {
        Span::at_line(1)
    }

    fn expr(&self, kind: ExprKind) -> Expr {
        Expr::new(kind, self.span())
    }

    pub fn class(&mut self, name: &str, parent: &str, features: Vec<Feature>) -> ClassDecl {
        ClassDecl {
            name: self.sym(name),
            parent: self.sym(parent),
            features,
            file: self.file,
            span: self.span(),
        }
    }

    pub fn method(
        &mut self,
        name: &str,
        formals: &[(&str, &str)],
        return_type: &str,
        body: Expr,
    ) -> Feature {
        let formals = formals
            .iter()
            .map(|&(name, declared_type)| Formal {
                name: self.sym(name),
                declared_type: self.sym(declared_type),
                span: self.span(),
            })
            .collect();
        Feature::Method(Method {
            name: self.sym(name),
            formals,
            return_type: self.sym(return_type),
            body,
            span: self.span(),
        })
    }

    pub fn attr(&mut self, name: &str, declared_type: &str, init: Expr) -> Feature {
        Feature::Attribute(Attribute {
            name: self.sym(name),
            declared_type: self.sym(declared_type),
            init,
            span: self.span(),
        })
    }

    pub fn no_expr(&mut self) -> Expr {
        Expr::no_expr(self.span())
    }

    pub fn int(&mut self, value: i64) -> Expr {
        self.expr(ExprKind::IntLit { value })
    }

    pub fn boolean(&mut self, value: bool) -> Expr {
        self.expr(ExprKind::BoolLit { value })
    }

    pub fn string(&mut self, value: &str) -> Expr {
        let value = self.sym(value);
        self.expr(ExprKind::StrLit { value })
    }

    pub fn ident(&mut self, name: &str) -> Expr {
        let name = self.sym(name);
        self.expr(ExprKind::Ident { name })
    }

    pub fn self_ref(&mut self) -> Expr {
        self.ident("self")
    }

    pub fn new_of(&mut self, class: &str) -> Expr {
        let class = self.sym(class);
        self.expr(ExprKind::New { class })
    }

    pub fn assign(&mut self, target: &str, value: Expr) -> Expr {
        let target = self.sym(target);
        self.expr(ExprKind::Assign {
            target,
            value: Box::new(value),
        })
    }

    pub fn binary(&mut self, op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
        self.expr(ExprKind::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    pub fn unary(&mut self, op: UnaryOp, operand: Expr) -> Expr {
        self.expr(ExprKind::Unary {
            op,
            operand: Box::new(operand),
        })
    }

    pub fn dispatch(&mut self, receiver: Expr, method: &str, args: Vec<Expr>) -> Expr {
        let method = self.sym(method);
        self.expr(ExprKind::Dispatch {
            receiver: Box::new(receiver),
            method,
            args,
        })
    }

    pub fn static_dispatch(
        &mut self,
        receiver: Expr,
        class: &str,
        method: &str,
        args: Vec<Expr>,
    ) -> Expr {
        let class = self.sym(class);
        let method = self.sym(method);
        self.expr(ExprKind::StaticDispatch {
            receiver: Box::new(receiver),
            class,
            method,
            args,
        })
    }

    pub fn cond(&mut self, pred: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        self.expr(ExprKind::Cond {
            pred: Box::new(pred),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        })
    }

    pub fn while_loop(&mut self, pred: Expr, body: Expr) -> Expr {
        self.expr(ExprKind::Loop {
            pred: Box::new(pred),
            body: Box::new(body),
        })
    }

    pub fn case(&mut self, scrutinee: Expr, branches: Vec<CaseBranch>) -> Expr {
        self.expr(ExprKind::Case {
            scrutinee: Box::new(scrutinee),
            branches,
        })
    }

    pub fn branch(&mut self, name: &str, declared_type: &str, body: Expr) -> CaseBranch {
        CaseBranch {
            name: self.sym(name),
            declared_type: self.sym(declared_type),
            body,
            span: self.span(),
        }
    }

    pub fn block(&mut self, body: Vec<Expr>) -> Expr {
        self.expr(ExprKind::Block { body })
    }

    pub fn let_in(&mut self, name: &str, declared_type: &str, init: Expr, body: Expr) -> Expr {
        let name = self.sym(name);
        let declared_type = self.sym(declared_type);
        self.expr(ExprKind::Let {
            name,
            declared_type,
            init: Box::new(init),
            body: Box::new(body),
        })
    }

    /// A minimal legal `Main` class: `class Main { main() : Int { 0 } }`.
    pub fn main_class(&mut self) -> ClassDecl {
        let body = self.int(0);
        let main = self.method("main", &[], "Int", body);
        self.class("Main", "Object", vec![main])
    }
}

pub fn program(classes: Vec<ClassDecl>) -> Program {
    Program { classes }
}

/// Runs semantic analysis, returning the reported errors (empty on success).
pub fn errors_of(builder: &mut AstBuilder, mut program: Program) -> Vec<SemanticError> {
    match analyze(&mut program, &mut builder.interner) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.errors().to_vec(),
    }
}

/// Runs semantic analysis and returns the decorated program on success.
pub fn analyze_ok(builder: &mut AstBuilder, mut program: Program) -> Program {
    let result = analyze(&mut program, &mut builder.interner);
    assert!(result.is_ok(), "expected clean analysis: {result:?}");
    program
}

pub fn should_pass(builder: &mut AstBuilder, program: Program) {
    let errors = errors_of(builder, program);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}
