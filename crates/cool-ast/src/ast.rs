//! Abstract Syntax Tree (AST) definitions for Cool.

use std::fmt;

use cool_core::{Span, Symbol};

/// A complete Cool program (single translation unit).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
}

/// Class declaration.
///
/// `parent` is a name, not a reference; it is resolved against the class
/// table during semantic analysis. The root class uses `_no_class` as its
/// parent name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: Symbol,
    pub parent: Symbol,
    pub features: Vec<Feature>,
    /// Source file the class was parsed from, for diagnostics.
    pub file: Symbol,
    pub span: Span,
}

/// A class feature: either a method or an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Method(Method),
    Attribute(Attribute),
}

/// Method declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub name: Symbol,
    pub formals: Vec<Formal>,
    pub return_type: Symbol,
    pub body: Expr,
    pub span: Span,
}

/// Attribute declaration. An absent initializer is the `NoExpr` node.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: Symbol,
    pub declared_type: Symbol,
    pub init: Expr,
    pub span: Span,
}

/// Formal parameter of a method.
#[derive(Debug, Clone, PartialEq)]
pub struct Formal {
    pub name: Symbol,
    pub declared_type: Symbol,
    pub span: Span,
}

/// An expression node.
///
/// `ty` is the single piece of mutable decoration produced by semantic
/// analysis: the inferred static type of the expression, `None` until the
/// checker has visited the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub ty: Option<Symbol>,
}

impl Expr {
    #[must_use]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self {
            kind,
            span,
            ty: None,
        }
    }

    /// The absent-expression node (e.g. an attribute without initializer).
    #[must_use]
    pub fn no_expr(span: Span) -> Self {
        Self::new(ExprKind::NoExpr, span)
    }
}

/// Expressions in Cool.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Assignment: `name <- expr`
    Assign { target: Symbol, value: Box<Expr> },

    /// Dynamic dispatch: `expr.method(args)`
    Dispatch {
        receiver: Box<Expr>,
        method: Symbol,
        args: Vec<Expr>,
    },

    /// Static dispatch: `expr@Class.method(args)`
    StaticDispatch {
        receiver: Box<Expr>,
        class: Symbol,
        method: Symbol,
        args: Vec<Expr>,
    },

    /// Conditional: `if pred then ... else ... fi`
    Cond {
        pred: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },

    /// Loop: `while pred loop body pool`
    Loop { pred: Box<Expr>, body: Box<Expr> },

    /// Case analysis: `case expr of branches esac`
    Case {
        scrutinee: Box<Expr>,
        branches: Vec<CaseBranch>,
    },

    /// Sequence block: `{ e1; e2; ... }`
    Block { body: Vec<Expr> },

    /// Let binding: `let name : T [<- init] in body`
    Let {
        name: Symbol,
        declared_type: Symbol,
        init: Box<Expr>,
        body: Box<Expr>,
    },

    /// Binary operation
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Unary operation
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// Object allocation: `new Class`
    New { class: Symbol },

    /// Identifier reference
    Ident { name: Symbol },

    /// Integer literal
    IntLit { value: i64 },

    /// Boolean literal
    BoolLit { value: bool },

    /// String literal (interned by the lexer)
    StrLit { value: Symbol },

    /// Absent expression
    NoExpr,
}

/// A branch of a `case` expression: `name : Class => body`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseBranch {
    pub name: Symbol,
    pub declared_type: Symbol,
    pub body: Expr,
    pub span: Span,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Le,
    Eq,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Eq => "=",
        };
        f.write_str(op)
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Arithmetic negation: `~expr`
    Neg,
    /// Logical complement: `not expr`
    Not,
    /// Void test: `isvoid expr`
    IsVoid,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            UnaryOp::Neg => "~",
            UnaryOp::Not => "not",
            UnaryOp::IsVoid => "isvoid",
        };
        f.write_str(op)
    }
}
