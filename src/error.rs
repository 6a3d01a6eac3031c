//! Error types for the deck-list crate
//!
//! Parsing and validation report problems as data on their result objects.
//! `DeckListError` only covers the outer plumbing: loading format rules from
//! configuration and serializing results to JSON.

use thiserror::Error;

/// Errors raised while configuring rules or serializing results
#[derive(Error, Debug)]
pub enum DeckListError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for configuration and serialization operations
pub type Result<T> = std::result::Result<T, DeckListError>;

#[cfg(feature = "python")]
impl From<DeckListError> for pyo3::PyErr {
    fn from(err: DeckListError) -> Self {
        match err {
            DeckListError::Config(e) => pyo3::exceptions::PyRuntimeError::new_err(e.to_string()),
            DeckListError::Serialization(e) => {
                pyo3::exceptions::PyValueError::new_err(e.to_string())
            }
        }
    }
}
