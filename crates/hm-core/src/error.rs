//! Core error type.
//!
//! Sub-crates define their own error enums (`GraphError`, `RegistryError`);
//! this one covers parsing and configuration of the shared types.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown specialty {0:?}")]
    UnknownSpecialty(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
