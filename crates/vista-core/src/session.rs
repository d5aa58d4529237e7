//! Per-topic search session state machine.
//!
//! Each topic (city, attraction, second attraction) owns one `TopicState`
//! slot: draft query text, cached results, current page, and selection.
//! Topics are independent; a fetch for one never touches another's state.

use crate::aggregate::{Aggregator, FetchOptions};
use crate::config::{Config, SearchConfig};
use crate::error::{SearchError, SearchResult};
use crate::filter;
use crate::provider::ProviderFactory;
use crate::types::{ImageRecord, Orientation, ProviderKind, ResultPage, Topic};

/// Where a topic is in its request/display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No query issued yet
    #[default]
    Idle,
    /// Query issued, results pending
    Loading,
    /// Results cached, current page in range
    Ready,
}

/// All mutable state for one topic.
#[derive(Debug)]
struct TopicState {
    /// Query text as currently entered
    draft: String,
    /// The topic's own text at the last applied search
    submitted: Option<String>,
    /// Filtered, merged records from the last applied search
    records: Vec<ImageRecord>,
    /// 1-based display page
    current_page: usize,
    selection: Option<ImageRecord>,
    phase: Phase,
    /// Human-readable provider failure from the last search, if any
    last_error: Option<String>,
}

impl Default for TopicState {
    fn default() -> Self {
        Self {
            draft: String::new(),
            submitted: None,
            records: Vec::new(),
            current_page: 1,
            selection: None,
            phase: Phase::default(),
            last_error: None,
        }
    }
}

/// Session driving the query → fetch → filter → paginate → select loop.
pub struct SearchSession {
    aggregator: Aggregator,
    page_size: usize,
    max_pages: u32,
    fetch_batch_size: u32,
    content_filter: bool,
    topics: [TopicState; 3],
}

fn slot(topic: Topic) -> usize {
    match topic {
        Topic::City => 0,
        Topic::Attraction1 => 1,
        Topic::Attraction2 => 2,
    }
}

impl SearchSession {
    pub fn new(aggregator: Aggregator, search: &SearchConfig) -> Self {
        Self {
            aggregator,
            page_size: search.page_size,
            max_pages: search.max_pages,
            fetch_batch_size: search.fetch_batch_size,
            content_filter: search.content_filter,
            topics: Default::default(),
        }
    }

    /// Build a session with providers constructed from config.
    pub fn from_config(config: &Config) -> SearchResult<Self> {
        let providers = ProviderFactory::from_config(config)?;
        Ok(Self::new(Aggregator::new(providers), &config.search))
    }

    /// Providers this session queries, in their fixed query order.
    pub fn provider_kinds(&self) -> Vec<ProviderKind> {
        self.aggregator.provider_kinds()
    }

    fn state(&self, topic: Topic) -> &TopicState {
        &self.topics[slot(topic)]
    }

    fn state_mut(&mut self, topic: Topic) -> &mut TopicState {
        &mut self.topics[slot(topic)]
    }

    /// Store new query text for a topic.
    ///
    /// Text distinct from the previously submitted value invalidates the
    /// topic's selection; other topics are untouched.
    pub fn set_query(&mut self, topic: Topic, text: &str) {
        let state = self.state_mut(topic);
        if state.submitted.as_deref() != Some(text) {
            state.selection = None;
        }
        state.draft = text.to_string();
    }

    pub fn query(&self, topic: Topic) -> &str {
        &self.state(topic).draft
    }

    /// The query text actually sent to providers for a topic.
    ///
    /// Attraction topics combine the city text with their own, space-joined
    /// and trimmed. The combination is computed at search time; a later city
    /// change does not invalidate already-fetched attraction results.
    pub fn effective_query(&self, topic: Topic) -> String {
        let own = self.state(topic).draft.trim();
        match topic {
            Topic::City => own.to_string(),
            Topic::Attraction1 | Topic::Attraction2 => {
                let city = self.state(Topic::City).draft.trim();
                format!("{city} {own}").trim().to_string()
            }
        }
    }

    /// Run a search for one topic: fetch via the aggregator, filter, cache,
    /// and reset to page 1.
    ///
    /// An empty effective query is rejected before any provider call. When
    /// the fetch yields nothing *and* a provider failed, the previous
    /// results and selection are preserved and the failure is only recorded
    /// as the topic's last error.
    pub async fn search(
        &mut self,
        topic: Topic,
        orientation: Option<Orientation>,
    ) -> SearchResult<()> {
        let query = self.effective_query(topic);
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        self.state_mut(topic).phase = Phase::Loading;

        let options = FetchOptions {
            orientation,
            max_pages: self.max_pages,
            page_size: self.fetch_batch_size,
        };
        let outcome = self.aggregator.fetch(&query, &options).await;
        let records = filter::apply(outcome.records, orientation, self.content_filter);

        let failure = if outcome.failures.is_empty() {
            None
        } else {
            let messages: Vec<String> =
                outcome.failures.iter().map(ToString::to_string).collect();
            Some(messages.join("; "))
        };

        let state = self.state_mut(topic);

        if records.is_empty() && failure.is_some() {
            // Failed refresh: keep the previous ResultPage and Selection.
            state.phase = if state.records.is_empty() {
                Phase::Idle
            } else {
                Phase::Ready
            };
            state.last_error = failure;
            return Ok(());
        }

        state.submitted = Some(state.draft.clone());
        state.records = records;
        state.current_page = 1;
        state.selection = None;
        state.phase = Phase::Ready;
        state.last_error = failure;
        Ok(())
    }

    /// Jump to a page. Out-of-range targets are silently ignored.
    pub fn goto_page(&mut self, topic: Topic, page: usize) {
        let last = self.result_page(topic).last_page();
        let state = self.state_mut(topic);
        if (1..=last).contains(&page) {
            state.current_page = page;
        }
    }

    pub fn next_page(&mut self, topic: Topic) {
        self.goto_page(topic, self.state(topic).current_page + 1);
    }

    pub fn prev_page(&mut self, topic: Topic) {
        let current = self.state(topic).current_page;
        if current > 1 {
            self.goto_page(topic, current - 1);
        }
    }

    /// View over the topic's current display page.
    pub fn result_page(&self, topic: Topic) -> ResultPage<'_> {
        let state = self.state(topic);
        let start = (state.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(state.records.len());
        let records = if start < state.records.len() {
            &state.records[start..end]
        } else {
            &[]
        };
        ResultPage {
            records,
            total_count: state.records.len(),
            current_page: state.current_page,
            page_size: self.page_size,
        }
    }

    /// Record the `index`-th record of the current page as the topic's
    /// selection. Leaves the page and cached records untouched.
    pub fn select(&mut self, topic: Topic, index: usize) -> Option<&ImageRecord> {
        let page_size = self.page_size;
        let state = self.state_mut(topic);
        if index >= page_size {
            return None;
        }
        let start = (state.current_page - 1) * page_size;
        let record = state.records.get(start + index).cloned()?;
        state.selection = Some(record);
        state.selection.as_ref()
    }

    pub fn selection(&self, topic: Topic) -> Option<&ImageRecord> {
        self.state(topic).selection.as_ref()
    }

    pub fn phase(&self, topic: Topic) -> Phase {
        self.state(topic).phase
    }

    pub fn last_error(&self, topic: Topic) -> Option<&str> {
        self.state(topic).last_error.as_deref()
    }
}
