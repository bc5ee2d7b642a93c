// Tue Aug 25 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("line {line}: indented line appears before any directive")]
    OrphanBodyLine { line: usize },
    #[error("missing required output_guard directive")]
    MissingOutputGuard,
    #[error("missing semicolon in field def {line:?}")]
    MissingTerminator { line: String },
    #[error("bad autodetected name {name:?} in field def {line:?}")]
    InvalidFieldName { name: String, line: String },
    #[error("@@check and @@emit both given in field def {line:?}")]
    ConflictingAttributes { line: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
