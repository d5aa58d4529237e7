//! Shared test doubles for aggregator and session tests.

use crate::error::{SearchError, SearchResult};
use crate::provider::ImageProvider;
use crate::types::{ImageRecord, Orientation, ProviderKind, SearchBatch};
use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A scripted provider: serves `total` landscape records page by page and
/// can be told to start failing after a number of successful calls.
#[derive(Debug)]
pub(crate) struct MockProvider {
    kind: ProviderKind,
    total: usize,
    fail_after: Option<u32>,
    calls: Arc<AtomicU32>,
}

impl MockProvider {
    pub(crate) fn with_results(kind: ProviderKind, total: usize) -> Self {
        Self {
            kind,
            total,
            fail_after: None,
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    /// Fails every call.
    pub(crate) fn failing(kind: ProviderKind) -> Self {
        Self::with_results(kind, 0).fail_after(0)
    }

    /// Succeed for `calls` calls, then fail.
    pub(crate) fn fail_after(mut self, calls: u32) -> Self {
        self.fail_after = Some(calls);
        self
    }

    /// Shared counter of search calls issued against this provider.
    pub(crate) fn call_counter(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }

    fn record(&self, index: usize) -> ImageRecord {
        ImageRecord {
            id: format!("{}-{index}", self.kind),
            description: Some(format!("sample {index}")),
            thumbnail_url: format!("https://mock.example/{index}/thumb"),
            full_url: format!("https://mock.example/{index}/full"),
            width: Some(800),
            height: Some(600),
            attribution: "Mock Photographer".to_string(),
            tags: vec![],
            provider: self.kind,
        }
    }
}

#[async_trait]
impl ImageProvider for MockProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn search(
        &self,
        _query: &str,
        page: u32,
        page_size: u32,
        _orientation: Option<Orientation>,
    ) -> SearchResult<SearchBatch> {
        let completed = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_after {
            if completed >= limit {
                return Err(SearchError::Provider {
                    provider: self.kind,
                    message: "HTTP 503: scripted failure".to_string(),
                    status_code: Some(503),
                });
            }
        }

        let start = ((page - 1) * page_size) as usize;
        let end = (start + page_size as usize).min(self.total);
        let records = (start..end.max(start)).map(|i| self.record(i)).collect();

        Ok(SearchBatch {
            records,
            total_count: self.total as u64,
        })
    }
}
