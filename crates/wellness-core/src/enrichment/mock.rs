//! In-memory encyclopedia for tests and offline use.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{Article, EncyclopediaClient, EnrichmentError, EnrichmentResult, SearchHit};

/// Canned articles searched by case-insensitive substring on the title.
#[derive(Debug, Default)]
pub struct MockEncyclopedia {
    articles: Vec<Article>,
    offline: bool,
    searches: Mutex<Vec<String>>,
}

impl MockEncyclopedia {
    /// Empty encyclopedia: every search returns no hits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Encyclopedia whose every call fails like a dropped connection.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    /// Add an article.
    pub fn with_article(
        mut self,
        title: impl Into<String>,
        extract: impl Into<String>,
        image_url: Option<&str>,
    ) -> Self {
        self.articles.push(Article {
            title: title.into(),
            extract: extract.into(),
            image_url: image_url.map(str::to_string),
        });
        self
    }

    /// Queries passed to `search`, in call order.
    pub fn searches(&self) -> Vec<String> {
        self.searches
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    fn check_online(&self) -> EnrichmentResult<()> {
        if self.offline {
            return Err(EnrichmentError::Parse("encyclopedia offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl EncyclopediaClient for MockEncyclopedia {
    async fn search(&self, query: &str) -> EnrichmentResult<Vec<SearchHit>> {
        if let Ok(mut searches) = self.searches.lock() {
            searches.push(query.to_string());
        }
        self.check_online()?;

        let lowered = query.to_lowercase();
        Ok(self
            .articles
            .iter()
            .filter(|a| {
                let title = a.title.to_lowercase();
                !lowered.is_empty() && (lowered.contains(&title) || title.contains(&lowered))
            })
            .map(|a| SearchHit {
                title: a.title.clone(),
            })
            .collect())
    }

    async fn fetch_article(&self, title: &str) -> EnrichmentResult<Option<Article>> {
        self.check_online()?;
        Ok(self.articles.iter().find(|a| a.title == title).cloned())
    }
}
