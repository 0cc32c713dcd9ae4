//! Error type and result alias for the Cool compiler.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level failure of a compiler run.
///
/// The semantic stage folds its accumulated diagnostics into the
/// `Semantic` variant once checking has finished; the variant's payload
/// is the full rendered error listing plus the summary line.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    #[error("Semantic error: {0}")]
    #[diagnostic(code(cool::semantic))]
    Semantic(String),
}

/// Result type alias using the Cool Error type.
pub type Result<T> = std::result::Result<T, Error>;
