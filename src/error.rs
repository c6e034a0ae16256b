//! Error types for the library

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while tokenizing
///
/// Tokenizing is total over its inputs: empty input, empty pattern lists and
/// inert patterns all have defined results. The only failure is running out of
/// memory for the output.
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// The output buffer could not be allocated
    #[error("failed to allocate room for {requested} token(s): {source}")]
    AllocationFailure {
        /// Token slots requested
        requested: usize,
        /// Underlying allocator error
        #[source]
        source: TryReserveError,
    },
}

/// Errors that can occur while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// IO error reading or writing the config file
    #[error("io error on {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {path}: {source}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The config could not be serialized
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
