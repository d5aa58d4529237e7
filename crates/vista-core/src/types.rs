//! Core data types for the Vista search engine.
//!
//! Provider responses are normalized into these shapes at the adapter
//! boundary; nothing downstream of an adapter inspects provider-specific
//! JSON again.

use serde::{Deserialize, Serialize};

/// The stock-photo APIs Vista can query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Unsplash,
    Getty,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Unsplash => write!(f, "Unsplash"),
            ProviderKind::Getty => write!(f, "Getty Images"),
        }
    }
}

/// Orientation classification by pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// The three independent search slots of one session.
///
/// Each topic owns its own query text, cached results, and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    City,
    Attraction1,
    Attraction2,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::City, Topic::Attraction1, Topic::Attraction2];
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Topic::City => write!(f, "City"),
            Topic::Attraction1 => write!(f, "Attraction"),
            Topic::Attraction2 => write!(f, "Second attraction"),
        }
    }
}

/// A provider-agnostic image search result.
///
/// `full_url` is resolved from fields already present in the provider
/// response at normalization time; displaying a record never requires an
/// extra network call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Provider-assigned identifier
    pub id: String,

    /// Title or description, when the provider supplies one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Small preview URL
    pub thumbnail_url: String,

    /// Largest available display URL
    pub full_url: String,

    /// Pixel width, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Pixel height, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Human-readable credit line (photographer + profile, or title + "Getty Images")
    pub attribution: String,

    /// Provider-supplied tags, lowercased at normalization
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Which API produced this record
    pub provider: ProviderKind,
}

impl ImageRecord {
    /// Orientation of this record, or `None` when dimensions are missing
    /// or square. Ambiguity means the record matches neither filter.
    pub fn orientation(&self) -> Option<Orientation> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > w => Some(Orientation::Portrait),
            (Some(w), Some(h)) if w > h => Some(Orientation::Landscape),
            _ => None,
        }
    }
}

/// The normalized output of one provider search call.
#[derive(Debug, Clone, Default)]
pub struct SearchBatch {
    /// Records in the provider's own ranking order
    pub records: Vec<ImageRecord>,

    /// Total matches the provider reports for the query, across all pages
    pub total_count: u64,
}

/// A read-only view over one page of a topic's cached results.
#[derive(Debug, Clone)]
pub struct ResultPage<'a> {
    /// Records on the current page, in merged provider order
    pub records: &'a [ImageRecord],

    /// Total records cached for the topic after filtering
    pub total_count: usize,

    /// 1-based page index
    pub current_page: usize,

    /// Display page size
    pub page_size: usize,
}

impl ResultPage<'_> {
    /// Index of the last page, or 0 when there are no results.
    pub fn last_page(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }
}
