//! Error types for gamepack
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundling operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Main error type for bundling operations
///
/// A missing input file is not an error: it is reported through the
/// [`BundleSink`](crate::report::BundleSink) and the run continues.
#[derive(Error, Debug)]
pub enum BundleError {
    /// An input file exists but could not be read
    #[error("failed to read asset {path}: {source}")]
    AssetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output document could not be written
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML or has the wrong shape
    #[error("invalid manifest {file}: {message}")]
    InvalidManifest { file: PathBuf, message: String },

    /// The same key appears twice in the asset list
    #[error("duplicate asset key '{key}'")]
    DuplicateKey { key: String },

    /// Key cannot be emitted inside a single-quoted literal
    #[error("invalid asset key {key:?} - keys must be non-empty and must not contain quotes, backslashes or line breaks")]
    InvalidKey { key: String },

    /// Global name is not a script identifier
    #[error("invalid global name {name:?} - expected an identifier like GAME_ASSETS")]
    InvalidGlobal { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
