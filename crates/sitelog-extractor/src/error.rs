//! Error types for the Extractor

use thiserror::Error;

/// Errors raised while building an [`Extractor`](crate::Extractor).
///
/// Extraction itself never fails; only initialization does.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Gazetteer resource missing or malformed
    #[error("Gazetteer error: {0}")]
    Gazetteer(String),

    /// I/O error while reading a resource file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

impl From<toml::de::Error> for ExtractorError {
    fn from(e: toml::de::Error) -> Self {
        ExtractorError::TomlParse(e.to_string())
    }
}
