//! Error types for the Vista search engine.
//!
//! Provider failures are non-fatal by design: adapters convert every
//! HTTP-level problem into a structured `SearchError`, and the aggregator
//! downgrades those to "zero results from this provider for this call".

use crate::types::ProviderKind;
use thiserror::Error;

/// Top-level error type for Vista operations.
#[derive(Error, Debug)]
pub enum VistaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Search and provider errors
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised at the provider boundary or by query validation.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Credential exchange with a provider's token endpoint failed.
    /// The provider is unavailable for this call; retry is a user-initiated
    /// new search, never automatic.
    #[error("{provider} authentication failed: {message}")]
    Auth {
        provider: ProviderKind,
        message: String,
        status_code: Option<u16>,
    },

    /// A search call failed (transport error, non-success status, or an
    /// unparseable response body).
    #[error("{provider} search failed: {message}")]
    Provider {
        provider: ProviderKind,
        message: String,
        status_code: Option<u16>,
    },

    /// A search was attempted with a blank required query.
    #[error("query text is empty; fill in the search fields first")]
    EmptyQuery,
}

impl SearchError {
    /// The provider this error names, when it names one.
    pub fn provider(&self) -> Option<ProviderKind> {
        match self {
            SearchError::Auth { provider, .. } | SearchError::Provider { provider, .. } => {
                Some(*provider)
            }
            SearchError::EmptyQuery => None,
        }
    }
}

/// Convenience type alias for Vista results.
pub type Result<T> = std::result::Result<T, VistaError>;

/// Convenience type alias for search-specific results.
pub type SearchResult<T> = std::result::Result<T, SearchError>;
