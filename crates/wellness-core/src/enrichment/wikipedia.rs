//! MediaWiki action API client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use super::{Article, EncyclopediaClient, EnrichmentError, EnrichmentResult, SearchHit};
use crate::config::WellnessConfig;

/// Wikipedia (or any MediaWiki) client over `api.php`.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    base_url: String,
    client: reqwest::Client,
}

impl WikipediaClient {
    /// Create a client for an `api.php` endpoint.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> EnrichmentResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from runtime configuration.
    pub fn from_config(config: &WellnessConfig) -> EnrichmentResult<Self> {
        Self::new(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    async fn get(&self, params: &[(&str, &str)]) -> EnrichmentResult<String> {
        let response = self.client.get(&self.base_url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl EncyclopediaClient for WikipediaClient {
    async fn search(&self, query: &str) -> EnrichmentResult<Vec<SearchHit>> {
        let body = self
            .get(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;
        parse_search(&body)
    }

    async fn fetch_article(&self, title: &str) -> EnrichmentResult<Option<Article>> {
        let body = self
            .get(&[
                ("action", "query"),
                ("prop", "extracts|pageimages"),
                ("explaintext", "1"),
                ("piprop", "original|thumbnail"),
                ("titles", title),
                ("redirects", "1"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;
        parse_article(&body)
    }
}

// =========================================================================
// Response bodies
// =========================================================================

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    query: Option<SearchQuery>,
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchEntry>,
}

#[derive(Deserialize)]
struct SearchEntry {
    title: String,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    query: Option<ContentQuery>,
}

#[derive(Deserialize)]
struct ContentQuery {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    original: Option<ImageRef>,
    #[serde(default)]
    thumbnail: Option<ImageRef>,
}

#[derive(Deserialize)]
struct ImageRef {
    source: String,
}

fn parse_search(body: &str) -> EnrichmentResult<Vec<SearchHit>> {
    let parsed: SearchResponse =
        serde_json::from_str(body).map_err(|e| EnrichmentError::Parse(e.to_string()))?;

    Ok(parsed
        .query
        .map(|q| q.search)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| SearchHit { title: entry.title })
        .collect())
}

fn parse_article(body: &str) -> EnrichmentResult<Option<Article>> {
    let parsed: ContentResponse =
        serde_json::from_str(body).map_err(|e| EnrichmentError::Parse(e.to_string()))?;

    let page = match parsed.query.and_then(|q| q.pages.into_iter().next()) {
        Some(page) if !page.missing => page,
        _ => return Ok(None),
    };

    // Prefer the full-size image over the thumbnail
    let image_url = page
        .original
        .or(page.thumbnail)
        .map(|image| image.source);

    Ok(Some(Article {
        title: page.title,
        extract: page.extract.unwrap_or_default(),
        image_url,
    }))
}
