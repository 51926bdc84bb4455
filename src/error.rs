//! Error types for Postbox
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::validation::FieldErrors;

/// Result type alias using PostboxError
pub type Result<T> = std::result::Result<T, PostboxError>;

/// Unified error type for Postbox operations
#[derive(Debug, Error)]
pub enum PostboxError {
    // -------------------------------------------------------------------------
    // Validation Errors
    // -------------------------------------------------------------------------
    #[error("Invalid post fields: {0}")]
    FieldErrors(#[from] FieldErrors),

    #[error("Invalid sort query: {message}")]
    InvalidQuery {
        message: String,
        accepted_fields: &'static [&'static str],
        accepted_directions: &'static [&'static str],
    },

    #[error("At least one search term (title or content) must be provided")]
    MissingQuery,

    #[error("Invalid search query: {0}")]
    InvalidSearch(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Request body too large: {0}")]
    BodyTooLarge(String),

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Post with id {0} not found")]
    PostNotFound(String),

    #[error("No posts match the search terms")]
    NoMatches,

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PostboxError {
    /// True for both "unknown id" and "search found nothing"
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostboxError::PostNotFound(_) | PostboxError::NoMatches)
    }
}
