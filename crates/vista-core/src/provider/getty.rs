//! Getty Images provider adapter.
//!
//! Obtains a bearer token from the credential manager, then queries the
//! creative image search endpoint. Getty reports every rendition in a
//! `display_sizes` list; the full-size URL is resolved by name with a
//! largest-area fallback.

use super::token::CredentialManager;
use super::ImageProvider;
use crate::error::{SearchError, SearchResult};
use crate::types::{ImageRecord, Orientation, ProviderKind, SearchBatch};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Fields requested from the search endpoint.
const SEARCH_FIELDS: &str = "id,title,caption,display_sizes,max_dimensions,keywords";

#[derive(Debug)]
pub struct GettyProvider {
    endpoint: String,
    api_key: String,
    credentials: CredentialManager,
    client: reqwest::Client,
}

impl GettyProvider {
    pub fn new(
        endpoint: &str,
        token_endpoint: &str,
        api_key: &str,
        client_secret: &str,
        timeout: Duration,
    ) -> SearchResult<Self> {
        let client = super::http_client(ProviderKind::Getty, timeout)?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            credentials: CredentialManager::new(
                client.clone(),
                token_endpoint,
                api_key,
                client_secret,
            ),
            client,
        })
    }
}

// --- Response types ---

#[derive(Deserialize)]
struct SearchResponse {
    images: Vec<GettyImage>,
    result_count: u64,
}

#[derive(Deserialize)]
struct GettyImage {
    id: String,
    title: Option<String>,
    caption: Option<String>,
    #[serde(default)]
    display_sizes: Vec<DisplaySize>,
    max_dimensions: Option<MaxDimensions>,
    #[serde(default)]
    keywords: Vec<Keyword>,
}

#[derive(Deserialize)]
struct DisplaySize {
    name: String,
    uri: String,
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Deserialize)]
struct MaxDimensions {
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Deserialize)]
struct Keyword {
    text: Option<String>,
}

/// Pick the display size to show at full resolution.
///
/// Preference order is `comp`, `preview`, `thumb`; when none of those names
/// is present, the entry with the largest pixel area wins. Deterministic
/// regardless of list order.
fn full_size_uri(sizes: &[DisplaySize]) -> Option<&str> {
    for name in ["comp", "preview", "thumb"] {
        if let Some(size) = sizes.iter().find(|s| s.name == name) {
            return Some(&size.uri);
        }
    }
    sizes
        .iter()
        .max_by_key(|s| u64::from(s.width.unwrap_or(0)) * u64::from(s.height.unwrap_or(0)))
        .map(|s| s.uri.as_str())
}

/// The thumbnail rendition, falling back to the full-size pick.
fn thumb_uri(sizes: &[DisplaySize]) -> Option<&str> {
    sizes
        .iter()
        .find(|s| s.name == "thumb")
        .map(|s| s.uri.as_str())
        .or_else(|| full_size_uri(sizes))
}

fn normalize(image: GettyImage) -> Option<ImageRecord> {
    let full_url = full_size_uri(&image.display_sizes)?.to_string();
    let thumbnail_url = thumb_uri(&image.display_sizes)?.to_string();

    let title = image.title.unwrap_or_default();
    let attribution = if title.is_empty() {
        "Getty Images".to_string()
    } else {
        format!("{title} (Getty Images)")
    };

    let (width, height) = image
        .max_dimensions
        .map(|d| (d.width, d.height))
        .unwrap_or((None, None));

    let tags = image
        .keywords
        .into_iter()
        .filter_map(|k| k.text)
        .map(|t| t.to_lowercase())
        .collect();

    Some(ImageRecord {
        id: image.id,
        description: image.caption.or(if title.is_empty() {
            None
        } else {
            Some(title)
        }),
        thumbnail_url,
        full_url,
        width,
        height,
        attribution,
        tags,
        provider: ProviderKind::Getty,
    })
}

#[async_trait]
impl ImageProvider for GettyProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Getty
    }

    async fn search(
        &self,
        query: &str,
        page: u32,
        page_size: u32,
        _orientation: Option<Orientation>,
    ) -> SearchResult<SearchBatch> {
        // AuthError propagates as-is: the aggregator treats it like any
        // other provider failure for this call.
        let token = self.credentials.token().await?;

        let url = format!("{}/v3/search/images/creative", self.endpoint);

        tracing::debug!(query = %query, page, "querying Getty Images");

        let resp = self
            .client
            .get(&url)
            .header("Api-Key", &self.api_key)
            .header("Authorization", format!("Bearer {token}"))
            .query(&[
                ("phrase", query),
                ("page", &page.to_string()),
                ("page_size", &page_size.to_string()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Provider {
                provider: ProviderKind::Getty,
                message: format!("request failed: {e}"),
                status_code: None,
            })?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(SearchError::Provider {
                provider: ProviderKind::Getty,
                message: format!("HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let body: SearchResponse = resp.json().await.map_err(|e| SearchError::Provider {
            provider: ProviderKind::Getty,
            message: format!("failed to parse response: {e}"),
            status_code: None,
        })?;

        let records = body
            .images
            .into_iter()
            .filter_map(|image| {
                let id = image.id.clone();
                let record = normalize(image);
                if record.is_none() {
                    tracing::warn!(id = %id, "Getty record without display sizes, dropping");
                }
                record
            })
            .collect();

        Ok(SearchBatch {
            records,
            total_count: body.result_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(name: &str, uri: &str, width: Option<u32>, height: Option<u32>) -> DisplaySize {
        DisplaySize {
            name: name.to_string(),
            uri: uri.to_string(),
            width,
            height,
        }
    }

    #[test]
    fn test_full_size_prefers_comp_regardless_of_order() {
        let forward = [
            size("thumb", "https://g.example/t", Some(170), Some(113)),
            size("preview", "https://g.example/p", Some(341), Some(227)),
            size("comp", "https://g.example/c", Some(508), Some(339)),
        ];
        let reversed = [
            size("comp", "https://g.example/c", Some(508), Some(339)),
            size("preview", "https://g.example/p", Some(341), Some(227)),
            size("thumb", "https://g.example/t", Some(170), Some(113)),
        ];
        assert_eq!(full_size_uri(&forward), Some("https://g.example/c"));
        assert_eq!(full_size_uri(&reversed), Some("https://g.example/c"));
    }

    #[test]
    fn test_full_size_falls_back_to_preview_then_thumb() {
        let sizes = [
            size("thumb", "https://g.example/t", None, None),
            size("preview", "https://g.example/p", None, None),
        ];
        assert_eq!(full_size_uri(&sizes), Some("https://g.example/p"));

        let sizes = [size("thumb", "https://g.example/t", None, None)];
        assert_eq!(full_size_uri(&sizes), Some("https://g.example/t"));
    }

    #[test]
    fn test_full_size_unnamed_entries_pick_largest_area() {
        let sizes = [
            size("small", "https://g.example/s", Some(100), Some(100)),
            size("large", "https://g.example/l", Some(800), Some(600)),
            size("medium", "https://g.example/m", Some(400), Some(300)),
        ];
        assert_eq!(full_size_uri(&sizes), Some("https://g.example/l"));
    }

    #[test]
    fn test_full_size_empty_list() {
        assert_eq!(full_size_uri(&[]), None);
    }

    #[test]
    fn test_normalize_maps_dimensions_and_attribution() {
        let image: GettyImage = serde_json::from_value(serde_json::json!({
            "id": "g-42",
            "title": "Louvre Pyramid",
            "caption": "The glass pyramid at night",
            "display_sizes": [
                { "name": "thumb", "uri": "https://g.example/t" },
                { "name": "comp", "uri": "https://g.example/c" }
            ],
            "max_dimensions": { "width": 5616, "height": 3744 },
            "keywords": [ { "text": "Paris" }, {} ]
        }))
        .unwrap();

        let record = normalize(image).unwrap();
        assert_eq!(record.full_url, "https://g.example/c");
        assert_eq!(record.thumbnail_url, "https://g.example/t");
        assert_eq!(record.width, Some(5616));
        assert_eq!(record.height, Some(3744));
        assert_eq!(record.attribution, "Louvre Pyramid (Getty Images)");
        assert_eq!(record.tags, vec!["paris"]);
        assert_eq!(record.provider, ProviderKind::Getty);
    }

    #[test]
    fn test_normalize_drops_record_without_sizes() {
        let image: GettyImage = serde_json::from_value(serde_json::json!({
            "id": "g-43",
            "title": "No renditions"
        }))
        .unwrap();
        assert!(normalize(image).is_none());
    }
}
