//! Filter engine: content exclusion and orientation narrowing.

use crate::types::{ImageRecord, Orientation};

/// Vocabulary of subjects excluded by the content filter.
pub const EXCLUDED_TERMS: [&str; 11] = [
    "person",
    "people",
    "man",
    "woman",
    "boy",
    "girl",
    "logo",
    "brand",
    "advertisement",
    "face",
    "group",
];

/// True when the record's description or any tag contains an excluded term,
/// case-insensitively.
fn matches_excluded(record: &ImageRecord) -> bool {
    let description = record
        .description
        .as_deref()
        .map(str::to_lowercase)
        .unwrap_or_default();

    EXCLUDED_TERMS.iter().any(|term| {
        description.contains(term)
            || record
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(term))
    })
}

/// Drop records matching the exclusion vocabulary.
pub fn exclude_content(records: Vec<ImageRecord>) -> Vec<ImageRecord> {
    records.into_iter().filter(|r| !matches_excluded(r)).collect()
}

/// Keep only records with the requested orientation.
///
/// Square records and records with missing dimensions match neither
/// orientation; ambiguity means excluded.
pub fn by_orientation(records: Vec<ImageRecord>, orientation: Orientation) -> Vec<ImageRecord> {
    records
        .into_iter()
        .filter(|r| r.orientation() == Some(orientation))
        .collect()
}

/// Apply the configured filters: content exclusion first, then orientation.
pub fn apply(
    records: Vec<ImageRecord>,
    orientation: Option<Orientation>,
    content_filter: bool,
) -> Vec<ImageRecord> {
    let records = if content_filter {
        exclude_content(records)
    } else {
        records
    };
    match orientation {
        Some(orientation) => by_orientation(records, orientation),
        None => records,
    }
}
