use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::{ImageProvider, ProviderError, Result};
use crate::models::Item;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PixabayResponse {
    #[serde(default)]
    total_hits: u64,
    hits: Vec<Item>,
}

/// Pixabay image search client.
///
/// Results are requested newest first so that appended pages stay stable
/// while a category is cached.
pub struct PixabayClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    per_page: u32,
}

impl PixabayClient {
    pub fn new(api_key: String, base_url: String, per_page: u32) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("image-page-cache/0.1.0"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            per_page,
        })
    }

    fn search_request(&self, category: &str, page: u32) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/api/", self.base_url))
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", category),
                ("per_page", &self.per_page.to_string()),
                ("page", &page.to_string()),
                ("order", "latest"),
            ])
    }
}

#[async_trait]
impl ImageProvider for PixabayClient {
    async fn fetch_page(&self, category: &str, page: u32) -> Result<Vec<Item>> {
        let response = self.search_request(category, page).send().await?;
        let status = response.status();

        if status == 429 {
            return Err(ProviderError::RateLimitExceeded);
        }

        let body = response.text().await?;

        if !status.is_success() {
            // Pixabay answers 400 for pages past the last available hit.
            if status == 400 && page > 1 && body.contains("out of valid range") {
                debug!("Pixabay has no page {} for '{}'", page, category);
                return Ok(Vec::new());
            }
            return Err(ProviderError::RequestFailed(format!(
                "Status {}: {}",
                status, body
            )));
        }

        let parsed: PixabayResponse = serde_json::from_str(&body)?;
        debug!(
            "Pixabay page {} for '{}': {} hits of {} total",
            page,
            category,
            parsed.hits.len(),
            parsed.total_hits
        );
        Ok(parsed.hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_query() {
        let client =
            PixabayClient::new("secret".into(), "https://pixabay.com/".into(), 50).unwrap();
        let request = client.search_request("red cats", 3).build().unwrap();
        let url = request.url();

        assert_eq!(url.path(), "/api/");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("key".into(), "secret".into())));
        assert!(pairs.contains(&("q".into(), "red cats".into())));
        assert!(pairs.contains(&("per_page".into(), "50".into())));
        assert!(pairs.contains(&("page".into(), "3".into())));
        assert!(pairs.contains(&("order".into(), "latest".into())));
    }

    #[test]
    fn test_parse_response_shape() {
        let body = r#"{"total": 2, "totalHits": 2, "hits": [{"id": 1, "views": 5}, {"id": 2, "views": 9, "tags": "sky"}]}"#;
        let parsed: PixabayResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.total_hits, 2);
        assert_eq!(parsed.hits.len(), 2);
        assert_eq!(parsed.hits[1].extra["tags"], "sky");
    }

    #[test]
    fn test_parse_unexpected_shape_fails() {
        let result: std::result::Result<PixabayResponse, _> =
            serde_json::from_str(r#"{"error": "bad key"}"#);
        assert!(result.is_err());
    }
}
