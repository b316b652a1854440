//! Error types for `finsort-core`.
//!
//! Comparisons never fail. Only configuration loading, locale parsing and
//! explicit engine construction return [`CoreResult<T>`], which is an alias
//! for `Result<T, CoreError>`.

use std::path::PathBuf;

/// Unified error type for all fallible core operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// A locale name could not be turned into a collation locale.
    #[error("invalid locale: {0}")]
    InvalidLocale(String),

    /// A sort strategy identifier is not recognised.
    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),

    /// The collation engine could not be built.
    #[error("collation engine unavailable: {0}")]
    Collation(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `finsort-core`.
pub type CoreResult<T> = Result<T, CoreError>;
