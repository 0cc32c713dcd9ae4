//! Core types and utilities for the Cool compiler.
//!
//! This crate provides the fundamental types shared across all compiler
//! stages: source spans, the compiler-wide error type, the string interner
//! that backs `Symbol` identity, and the table of well-known names.

pub mod error;
pub mod names;
pub mod span;
pub mod symbol;

pub use error::{Error, Result};
pub use names::Names;
pub use span::{Location, Span};
pub use symbol::{Interner, Symbol};
