//! Fan-out across providers with per-provider pagination.
//!
//! Provider failures never escape this module as errors: a failing provider
//! contributes zero records for the call and its error is collected for
//! user-facing reporting.

use crate::error::SearchError;
use crate::provider::ImageProvider;
use crate::types::{ImageRecord, Orientation, ProviderKind};

/// Knobs for one aggregated fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Server-side orientation hint, forwarded to providers that support it
    pub orientation: Option<Orientation>,

    /// Fetch pages issued per provider before giving up
    pub max_pages: u32,

    /// Records requested per provider call
    pub page_size: u32,
}

/// The merged outcome of one fetch: records in fixed provider order plus
/// any non-fatal provider failures.
#[derive(Debug, Default)]
pub struct AggregateResult {
    pub records: Vec<ImageRecord>,
    pub failures: Vec<SearchError>,
}

/// Fans a query out to the configured providers and concatenates results.
pub struct Aggregator {
    providers: Vec<Box<dyn ImageProvider>>,
}

impl Aggregator {
    /// Providers are queried in the order given; the factory hands them
    /// over Unsplash-first so merged output ordering is stable.
    pub fn new(providers: Vec<Box<dyn ImageProvider>>) -> Self {
        Self { providers }
    }

    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    /// Fetch up to `max_pages` batches from every provider.
    ///
    /// A provider is short-circuited on its first error or on a page with
    /// fewer than `page_size` records (exhaustion); other providers are
    /// unaffected.
    pub async fn fetch(&self, query: &str, options: &FetchOptions) -> AggregateResult {
        let mut result = AggregateResult::default();

        for provider in &self.providers {
            for page in 1..=options.max_pages {
                match provider
                    .search(query, page, options.page_size, options.orientation)
                    .await
                {
                    Ok(batch) => {
                        let exhausted = (batch.records.len() as u32) < options.page_size;
                        result.records.extend(batch.records);
                        if exhausted {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(
                            provider = %provider.kind(),
                            page,
                            error = %e,
                            "provider call failed, skipping remaining pages"
                        );
                        result.failures.push(e);
                        break;
                    }
                }
            }
        }

        tracing::debug!(
            query = %query,
            records = result.records.len(),
            failures = result.failures.len(),
            "aggregated fetch completed"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockProvider;
    use crate::types::ProviderKind;

    fn options(max_pages: u32, page_size: u32) -> FetchOptions {
        FetchOptions {
            orientation: None,
            max_pages,
            page_size,
        }
    }

    #[tokio::test]
    async fn test_fetch_stops_after_short_page() {
        // 12 results arrive as pages of 5, 5, 2; the short page must end
        // pagination before a fourth request goes out.
        let provider = MockProvider::with_results(ProviderKind::Unsplash, 12);
        let calls = provider.call_counter();
        let aggregator = Aggregator::new(vec![Box::new(provider)]);

        let result = aggregator.fetch("Paris", &options(5, 5)).await;
        assert_eq!(result.records.len(), 12);
        assert!(result.failures.is_empty());
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_fetch_respects_max_pages() {
        let provider = MockProvider::with_results(ProviderKind::Unsplash, 100);
        let calls = provider.call_counter();
        let aggregator = Aggregator::new(vec![Box::new(provider)]);

        let result = aggregator.fetch("Paris", &options(2, 5)).await;
        assert_eq!(result.records.len(), 10);
        assert_eq!(calls.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failing_provider_does_not_stop_others() {
        let failing = MockProvider::failing(ProviderKind::Getty);
        let healthy = MockProvider::with_results(ProviderKind::Unsplash, 3);
        let aggregator = Aggregator::new(vec![Box::new(failing), Box::new(healthy)]);

        let result = aggregator.fetch("Paris", &options(5, 5)).await;
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].provider(), Some(ProviderKind::Getty));
    }

    #[test]
    fn test_provider_kinds_follow_registration_order() {
        let first = MockProvider::with_results(ProviderKind::Unsplash, 0);
        let second = MockProvider::with_results(ProviderKind::Getty, 0);
        let aggregator = Aggregator::new(vec![Box::new(first), Box::new(second)]);

        assert_eq!(
            aggregator.provider_kinds(),
            vec![ProviderKind::Unsplash, ProviderKind::Getty]
        );
    }

    #[tokio::test]
    async fn test_merged_order_is_provider_order() {
        let first = MockProvider::with_results(ProviderKind::Unsplash, 2);
        let second = MockProvider::with_results(ProviderKind::Getty, 2);
        let aggregator = Aggregator::new(vec![Box::new(first), Box::new(second)]);

        let result = aggregator.fetch("Paris", &options(1, 5)).await;
        let providers: Vec<_> = result.records.iter().map(|r| r.provider).collect();
        assert_eq!(
            providers,
            vec![
                ProviderKind::Unsplash,
                ProviderKind::Unsplash,
                ProviderKind::Getty,
                ProviderKind::Getty
            ]
        );
    }
}
