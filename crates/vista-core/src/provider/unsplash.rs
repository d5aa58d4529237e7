//! Unsplash provider adapter.
//!
//! Single GET against `/search/photos` with a `Client-ID` header. Unsplash
//! can narrow to landscape server-side; portrait filtering is deferred to
//! the filter engine.

use super::ImageProvider;
use crate::error::{SearchError, SearchResult};
use crate::types::{ImageRecord, Orientation, ProviderKind, SearchBatch};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug)]
pub struct UnsplashProvider {
    endpoint: String,
    access_key: String,
    client: reqwest::Client,
}

impl UnsplashProvider {
    pub fn new(endpoint: &str, access_key: &str, timeout: Duration) -> SearchResult<Self> {
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            access_key: access_key.to_string(),
            client: super::http_client(ProviderKind::Unsplash, timeout)?,
        })
    }
}

// --- Response types ---

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
    total: u64,
}

#[derive(Deserialize)]
struct Photo {
    id: String,
    description: Option<String>,
    alt_description: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    urls: PhotoUrls,
    user: User,
    #[serde(default)]
    tags: Vec<PhotoTag>,
}

#[derive(Deserialize)]
struct PhotoUrls {
    thumb: String,
    regular: Option<String>,
    full: Option<String>,
}

#[derive(Deserialize)]
struct User {
    name: String,
    links: UserLinks,
}

#[derive(Deserialize)]
struct UserLinks {
    html: String,
}

#[derive(Deserialize)]
struct PhotoTag {
    title: Option<String>,
}

/// Server-side orientation parameter, when the API supports the request.
/// Only landscape is narrowed at the API; portrait never is.
fn orientation_param(orientation: Option<Orientation>) -> Option<&'static str> {
    match orientation {
        Some(Orientation::Landscape) => Some("landscape"),
        _ => None,
    }
}

fn normalize(photo: Photo) -> ImageRecord {
    let full_url = photo
        .urls
        .full
        .or(photo.urls.regular)
        .unwrap_or_else(|| photo.urls.thumb.clone());

    let tags = photo
        .tags
        .into_iter()
        .filter_map(|t| t.title)
        .map(|t| t.to_lowercase())
        .collect();

    ImageRecord {
        id: photo.id,
        description: photo.description.or(photo.alt_description),
        thumbnail_url: photo.urls.thumb,
        full_url,
        width: photo.width,
        height: photo.height,
        attribution: format!("{} ({})", photo.user.name, photo.user.links.html),
        tags,
        provider: ProviderKind::Unsplash,
    }
}

#[async_trait]
impl ImageProvider for UnsplashProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Unsplash
    }

    async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
        orientation: Option<Orientation>,
    ) -> SearchResult<SearchBatch> {
        let url = format!("{}/search/photos", self.endpoint);

        let mut params = vec![
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("per_page", page_size.to_string()),
        ];
        if let Some(value) = orientation_param(orientation) {
            params.push(("orientation", value.to_string()));
        }

        tracing::debug!(query = %query, page, "querying Unsplash");

        let resp = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Provider {
                provider: ProviderKind::Unsplash,
                message: format!("request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(SearchError::Provider {
                provider: ProviderKind::Unsplash,
                message: format!("HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let body: SearchResponse = resp.json().await.map_err(|e| SearchError::Provider {
            provider: ProviderKind::Unsplash,
            message: format!("failed to parse response: {e}"),
            status_code: None,
        })?;

        Ok(SearchBatch {
            total_count: body.total,
            records: body.results.into_iter().map(normalize).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_photo() -> Photo {
        serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "description": "Eiffel Tower at dusk",
            "alt_description": "tower under clouds",
            "width": 4000,
            "height": 6000,
            "urls": {
                "thumb": "https://images.unsplash.com/abc123?w=200",
                "regular": "https://images.unsplash.com/abc123?w=1080",
                "full": "https://images.unsplash.com/abc123"
            },
            "user": {
                "name": "Jane Doe",
                "links": { "html": "https://unsplash.com/@janedoe" }
            },
            "tags": [
                { "title": "Paris" },
                { "type": "landing_page" },
                { "title": "Architecture" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_normalize_maps_urls_and_attribution() {
        let record = normalize(sample_photo());
        assert_eq!(record.id, "abc123");
        assert_eq!(record.thumbnail_url, "https://images.unsplash.com/abc123?w=200");
        assert_eq!(record.full_url, "https://images.unsplash.com/abc123");
        assert_eq!(record.attribution, "Jane Doe (https://unsplash.com/@janedoe)");
        assert_eq!(record.width, Some(4000));
        assert_eq!(record.height, Some(6000));
        assert_eq!(record.provider, ProviderKind::Unsplash);
    }

    #[test]
    fn test_normalize_lowercases_tags_and_skips_untitled() {
        let record = normalize(sample_photo());
        assert_eq!(record.tags, vec!["paris", "architecture"]);
    }

    #[test]
    fn test_normalize_falls_back_to_regular_url() {
        let mut photo = sample_photo();
        photo.urls.full = None;
        let record = normalize(photo);
        assert_eq!(record.full_url, "https://images.unsplash.com/abc123?w=1080");
    }

    #[test]
    fn test_normalize_prefers_description_over_alt() {
        let record = normalize(sample_photo());
        assert_eq!(record.description.as_deref(), Some("Eiffel Tower at dusk"));

        let mut photo = sample_photo();
        photo.description = None;
        let record = normalize(photo);
        assert_eq!(record.description.as_deref(), Some("tower under clouds"));
    }

    #[test]
    fn test_orientation_param_only_for_landscape() {
        assert_eq!(
            orientation_param(Some(Orientation::Landscape)),
            Some("landscape")
        );
        // The API cannot narrow to portrait; that happens in the filter engine.
        assert_eq!(orientation_param(Some(Orientation::Portrait)), None);
        assert_eq!(orientation_param(None), None);
    }
}
