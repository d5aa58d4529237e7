//! Sub-configuration structs with defaults matching the providers' limits.

use serde::{Deserialize, Serialize};

/// Search and pagination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Records shown per display page
    pub page_size: usize,

    /// Provider fetch pages issued per search before giving up
    pub max_pages: u32,

    /// Records requested per provider call (both APIs cap at 100)
    pub fetch_batch_size: u32,

    /// Drop records whose description or tags match the exclusion vocabulary
    pub content_filter: bool,

    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            max_pages: 5,
            fetch_batch_size: 30,
            content_filter: false,
            request_timeout_ms: 15_000,
        }
    }
}

/// Provider configurations.
///
/// A provider set to `None` is simply not queried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Unsplash configuration
    pub unsplash: Option<UnsplashConfig>,

    /// Getty Images configuration
    pub getty: Option<GettyConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            unsplash: Some(UnsplashConfig::default()),
            getty: Some(GettyConfig::default()),
        }
    }
}

/// Unsplash configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnsplashConfig {
    /// Search endpoint
    pub endpoint: String,

    /// Access key (supports ${ENV_VAR} syntax)
    pub access_key: String,
}

impl Default for UnsplashConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.unsplash.com".to_string(),
            access_key: "${UNSPLASH_ACCESS_KEY}".to_string(),
        }
    }
}

/// Getty Images configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GettyConfig {
    /// Search endpoint
    pub endpoint: String,

    /// OAuth2 token endpoint
    pub token_endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Client secret (supports ${ENV_VAR} syntax)
    pub client_secret: String,
}

impl Default for GettyConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.gettyimages.com".to_string(),
            token_endpoint: "https://authentication.gettyimages.com/oauth2/token".to_string(),
            api_key: "${GETTY_API_KEY}".to_string(),
            client_secret: "${GETTY_CLIENT_SECRET}".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
