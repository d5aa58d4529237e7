//! Provider adapters for the stock-photo APIs.
//!
//! Each adapter translates a normalized query into a provider-specific HTTP
//! request and converts the response into `ImageRecord`s at this boundary.
//! Downstream components (aggregator, filter, session) never see
//! provider-specific JSON.

pub(crate) mod getty;
pub(crate) mod token;
pub(crate) mod unsplash;

pub use getty::GettyProvider;
pub use token::CredentialManager;
pub use unsplash::UnsplashProvider;

use crate::config::Config;
use crate::error::{SearchError, SearchResult};
use crate::types::{Orientation, ProviderKind, SearchBatch};
use async_trait::async_trait;
use std::time::Duration;

/// Trait that all image providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn ImageProvider>` for dynamic dispatch).
#[async_trait]
pub trait ImageProvider: Send + Sync + std::fmt::Debug {
    /// Which API this adapter talks to.
    fn kind(&self) -> ProviderKind;

    /// Run one search call and normalize the response.
    ///
    /// `page` is 1-based. An orientation of `Portrait` is never forwarded to
    /// the API; portrait selection always happens in the filter engine.
    async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
        orientation: Option<Orientation>,
    ) -> SearchResult<SearchBatch>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok()
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Factory that builds the configured providers in their fixed query order.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Build one adapter per configured provider, Unsplash before Getty.
    ///
    /// A provider section that is present but missing its credentials is an
    /// error: silently skipping it would turn a misconfiguration into
    /// permanently empty results.
    pub fn from_config(config: &Config) -> SearchResult<Vec<Box<dyn ImageProvider>>> {
        let timeout = Duration::from_millis(config.search.request_timeout_ms);
        let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

        if let Some(cfg) = &config.providers.unsplash {
            let access_key =
                resolve_env_var(&cfg.access_key).ok_or_else(|| SearchError::Auth {
                    provider: ProviderKind::Unsplash,
                    message: "Unsplash access key not set. Set UNSPLASH_ACCESS_KEY env var."
                        .to_string(),
                    status_code: None,
                })?;
            providers.push(Box::new(UnsplashProvider::new(
                &cfg.endpoint,
                &access_key,
                timeout,
            )?));
        }

        if let Some(cfg) = &config.providers.getty {
            let api_key = resolve_env_var(&cfg.api_key).ok_or_else(|| SearchError::Auth {
                provider: ProviderKind::Getty,
                message: "Getty API key not set. Set GETTY_API_KEY env var.".to_string(),
                status_code: None,
            })?;
            let client_secret =
                resolve_env_var(&cfg.client_secret).ok_or_else(|| SearchError::Auth {
                    provider: ProviderKind::Getty,
                    message: "Getty client secret not set. Set GETTY_CLIENT_SECRET env var."
                        .to_string(),
                    status_code: None,
                })?;
            providers.push(Box::new(GettyProvider::new(
                &cfg.endpoint,
                &cfg.token_endpoint,
                &api_key,
                &client_secret,
                timeout,
            )?));
        }

        Ok(providers)
    }
}

/// Build a reqwest client with the configured per-request timeout.
pub(crate) fn http_client(
    kind: ProviderKind,
    timeout: Duration,
) -> SearchResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| SearchError::Provider {
            provider: kind,
            message: format!("failed to build HTTP client: {e}"),
            status_code: None,
        })
}
