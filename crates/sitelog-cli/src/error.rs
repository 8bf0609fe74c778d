//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extractor initialization error
    #[error("Extractor error: {0}")]
    Extractor(#[from] sitelog_extractor::ExtractorError),

    /// A document could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        /// Document path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Document format the loader does not handle
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A background extraction task did not finish
    #[error("Extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
