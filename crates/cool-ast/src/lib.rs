//! Abstract syntax tree for Cool programs.
//!
//! This crate is the contract between the parser and the later compiler
//! stages: the parser produces this tree, the semantic phase decorates
//! every expression with its inferred static type, and code generation
//! consumes the decorated tree.

mod ast;

pub use ast::{
    Attribute, BinaryOp, CaseBranch, ClassDecl, Expr, ExprKind, Feature, Formal, Method, Program,
    UnaryOp,
};
