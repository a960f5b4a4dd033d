//! Resolution error types.
//!
//! Recoverable conditions are accumulated as diagnostics on the
//! `Resolution`; these variants are the hard failures that abort an
//! operation outright.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("library directory not found: {path}")]
    LibraryDirNotFound { path: PathBuf },

    #[error("sources file not found: {path}")]
    SourcesFileNotFound { path: PathBuf },

    #[error("sources file could not be parsed: {path}")]
    SourcesFileUnreadable { path: PathBuf },
}
