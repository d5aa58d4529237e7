//! Getty credential manager: bearer-token cache with refresh-before-expiry.
//!
//! Tokens are interchangeable within their validity window, so a concurrent
//! refresh is harmless (last write wins); the mutex only keeps the
//! check-then-refresh sequence coherent.

use crate::error::{SearchError, SearchResult};
use crate::types::ProviderKind;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// How long before expiry a cached token stops being handed out.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// A bearer token with its computed expiry instant.
#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    /// A token is fresh while `now < expires_at - margin`.
    fn is_fresh(&self, now: Instant) -> bool {
        now + REFRESH_MARGIN < self.expires_at
    }
}

/// Token endpoint response body.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// Owns the cached Getty bearer token and the client-credentials exchange.
#[derive(Debug)]
pub struct CredentialManager {
    client: reqwest::Client,
    token_endpoint: String,
    api_key: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

impl CredentialManager {
    pub fn new(
        client: reqwest::Client,
        token_endpoint: &str,
        api_key: &str,
        client_secret: &str,
    ) -> Self {
        Self {
            client,
            token_endpoint: token_endpoint.to_string(),
            api_key: api_key.to_string(),
            client_secret: client_secret.to_string(),
            cached: Mutex::new(None),
        }
    }

    /// Return a valid bearer token, exchanging credentials only when the
    /// cached one is missing or inside the refresh margin.
    ///
    /// A failed exchange means "provider unavailable for this call"; the
    /// caller must not retry automatically mid-request.
    pub async fn token(&self) -> SearchResult<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if token.is_fresh(Instant::now()) {
                return Ok(token.access_token.clone());
            }
        }

        tracing::debug!("exchanging Getty client credentials for a fresh token");
        let fresh = self.exchange().await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    /// Basic-auth client-credentials exchange against the token endpoint.
    async fn exchange(&self) -> SearchResult<CachedToken> {
        let resp = self
            .client
            .post(&self.token_endpoint)
            .basic_auth(&self.api_key, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| SearchError::Auth {
                provider: ProviderKind::Getty,
                message: format!("token request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(SearchError::Auth {
                provider: ProviderKind::Getty,
                message: format!("token endpoint returned HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let token: TokenResponse = resp.json().await.map_err(|e| SearchError::Auth {
            provider: ProviderKind::Getty,
            message: format!("failed to parse token response: {e}"),
            status_code: None,
        })?;

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(token.expires_in),
        })
    }

    /// Seed the cache directly, bypassing the exchange. Test-only.
    #[cfg(test)]
    async fn prime(&self, access_token: &str, expires_in: Duration) {
        *self.cached.lock().await = Some(CachedToken {
            access_token: access_token.to_string(),
            expires_at: Instant::now() + expires_in,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> CredentialManager {
        // Unroutable endpoint: any test that hits the network here is a bug.
        CredentialManager::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/oauth2/token",
            "key",
            "secret",
        )
    }

    #[test]
    fn test_token_fresh_inside_margin() {
        let token = CachedToken {
            access_token: "abc".to_string(),
            expires_at: Instant::now() + Duration::from_secs(3600),
        };
        assert!(token.is_fresh(Instant::now()));
    }

    #[test]
    fn test_token_stale_inside_refresh_margin() {
        // 30s of validity left is inside the 60s margin
        let token = CachedToken {
            access_token: "abc".to_string(),
            expires_at: Instant::now() + Duration::from_secs(30),
        };
        assert!(!token.is_fresh(Instant::now()));
    }

    #[tokio::test]
    async fn test_cached_token_returned_without_exchange() {
        let manager = manager();
        manager.prime("cached-token", Duration::from_secs(3600)).await;

        // Both calls must come from the cache; an exchange attempt against
        // the unroutable endpoint would error out.
        let first = manager.token().await.unwrap();
        let second = manager.token().await.unwrap();
        assert_eq!(first, "cached-token");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_expired_token_triggers_exchange() {
        let manager = manager();
        manager.prime("stale-token", Duration::from_secs(10)).await;

        // Inside the margin the cache is unusable, so the manager attempts
        // a real exchange, which fails against the unroutable endpoint.
        let err = manager.token().await.unwrap_err();
        assert_eq!(err.provider(), Some(ProviderKind::Getty));
    }
}
