//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.search.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "search.page_size must be > 0".into(),
            ));
        }
        if self.search.max_pages == 0 {
            return Err(ConfigError::ValidationError(
                "search.max_pages must be > 0".into(),
            ));
        }
        if self.search.fetch_batch_size == 0 || self.search.fetch_batch_size > 100 {
            return Err(ConfigError::ValidationError(
                "search.fetch_batch_size must be between 1 and 100".into(),
            ));
        }
        if self.search.request_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "search.request_timeout_ms must be > 0".into(),
            ));
        }
        if self.providers.unsplash.is_none() && self.providers.getty.is_none() {
            return Err(ConfigError::ValidationError(
                "at least one provider must be configured".into(),
            ));
        }
        Ok(())
    }
}
