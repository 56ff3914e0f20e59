//! Remote condition enrichment.
//!
//! An [`EncyclopediaClient`] searches a public encyclopedia and fetches
//! plain-text articles. [`ConditionLookup`] merges that text with the curated
//! condition records; remote failures never reach its callers.

mod merger;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod wikipedia;

pub use merger::*;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEncyclopedia;
pub use wikipedia::WikipediaClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enrichment errors.
#[derive(Error, Debug)]
pub enum EnrichmentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from encyclopedia")]
    Status { status: u16 },

    #[error("Malformed response: {0}")]
    Parse(String),
}

pub type EnrichmentResult<T> = Result<T, EnrichmentError>;

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

/// Plain-text article body with an optional lead image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Full plain text, paragraphs separated by newlines
    pub extract: String,
    pub image_url: Option<String>,
}

impl Article {
    /// First non-blank paragraph of the body.
    pub fn first_paragraph(&self) -> Option<&str> {
        self.extract
            .split('\n')
            .map(str::trim)
            .find(|p| !p.is_empty())
    }
}

/// Source of encyclopedia articles.
#[async_trait]
pub trait EncyclopediaClient: Send + Sync {
    /// Ranked article titles for a query, best first.
    async fn search(&self, query: &str) -> EnrichmentResult<Vec<SearchHit>>;

    /// Full article for an exact title, `None` if the page does not exist.
    async fn fetch_article(&self, title: &str) -> EnrichmentResult<Option<Article>>;
}

#[async_trait]
impl<T: EncyclopediaClient + ?Sized> EncyclopediaClient for Box<T> {
    async fn search(&self, query: &str) -> EnrichmentResult<Vec<SearchHit>> {
        (**self).search(query).await
    }

    async fn fetch_article(&self, title: &str) -> EnrichmentResult<Option<Article>> {
        (**self).fetch_article(title).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_paragraph_skips_blank_lines() {
        let article = Article {
            title: "Asthma".into(),
            extract: "\n  \nAsthma is a long-term inflammatory disease.\nSecond paragraph.".into(),
            image_url: None,
        };
        assert_eq!(
            article.first_paragraph(),
            Some("Asthma is a long-term inflammatory disease.")
        );
    }

    #[test]
    fn test_first_paragraph_empty_body() {
        let article = Article {
            title: "Empty".into(),
            extract: "   ".into(),
            image_url: None,
        };
        assert!(article.first_paragraph().is_none());
    }
}
