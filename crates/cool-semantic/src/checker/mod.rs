//! The type checker.
//!
//! This module is split into focused submodules:
//! - `core`: the checker structure and shared helpers
//! - `program`: per-class driving loop and checkpoints
//! - `features`: the feature binder and method/attribute validation
//! - `expressions`: expression rules (one per `ExprKind`)
//! - `control_flow`: conditional, loop, and case checking

mod control_flow;
mod core;
mod expressions;
mod features;
mod program;

pub use self::core::TypeChecker;
