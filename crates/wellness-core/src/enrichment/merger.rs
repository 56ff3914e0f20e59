//! Merge curated condition records with remote encyclopedia text.
//!
//! Curated fields always win. The remote article contributes the summary,
//! the image, and (for conditions with no curated record) every section.

use wellness_extract::{ExtractionConfig, Extractor, SectionCategory};

use super::{Article, EncyclopediaClient, EnrichmentResult};
use crate::lexicon::Lexicon;
use crate::models::{ConditionInfo, ConditionRecord};

/// Summary returned when neither source knows the query.
pub const NOT_FOUND_SUMMARY: &str = "I'm searching my global records, but I couldn't find a detailed match. Please try a common disease name.";

/// Used when remote text yields no symptom sentences.
pub const GENERIC_SYMPTOMS: &str = "Symptoms vary from person to person. Consult a healthcare professional for an accurate assessment.";

/// Used when remote text yields no self-care sentences.
pub const GENERIC_HOME_REMEDY: &str = "Rest and stay well hydrated while following your doctor's advice.";

/// Summary for a curated condition when no remote summary is available.
pub fn local_summary(name: &str) -> String {
    format!(
        "{} is a recognized medical condition. Details below are drawn from curated reference data.",
        name
    )
}

/// Condition lookup over a curated lexicon and a remote encyclopedia.
pub struct ConditionLookup<C> {
    client: C,
    extractor: Extractor,
}

impl<C: EncyclopediaClient> ConditionLookup<C> {
    /// Create a lookup with the default extraction window.
    pub fn new(client: C) -> Self {
        Self::with_extraction(client, ExtractionConfig::default())
    }

    /// Create a lookup with a custom extraction window and cap.
    pub fn with_extraction(client: C, config: ExtractionConfig) -> Self {
        Self {
            client,
            extractor: Extractor::new(config),
        }
    }

    /// The underlying encyclopedia client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Look up a condition. Never fails: remote errors degrade to local-only
    /// or not-found results.
    pub async fn lookup(&self, lexicon: &Lexicon, query: &str) -> ConditionInfo {
        let local = lexicon.find_condition(query);
        if let Some(record) = local {
            tracing::debug!(alias = %record.alias, "Matched curated condition");
        }

        let search_term = local.map(|r| r.name.as_str()).unwrap_or(query);
        let article = self.fetch_remote(search_term).await;

        self.merge(query, local, article.as_ref())
    }

    /// Combine a curated record and a remote article into one result.
    pub fn merge(
        &self,
        query: &str,
        local: Option<&ConditionRecord>,
        article: Option<&Article>,
    ) -> ConditionInfo {
        let remote = article.and_then(|a| a.first_paragraph().map(|summary| (a, summary)));

        match (local, remote) {
            (Some(record), _) => self.from_record(record, article),
            (None, Some((article, summary))) => self.from_article(article, summary),
            (None, None) => {
                tracing::info!(query, "No curated or remote match");
                ConditionInfo::bare(query, NOT_FOUND_SUMMARY)
            }
        }
    }

    fn from_record(&self, record: &ConditionRecord, article: Option<&Article>) -> ConditionInfo {
        let summary = article.and_then(Article::first_paragraph);
        let disease_knowledge = match &record.disease_knowledge {
            Some(knowledge) => non_empty(knowledge.clone()),
            None => article.and_then(|a| {
                non_empty(self.extract_category(&a.extract, SectionCategory::DiseaseKnowledge))
            }),
        };

        let mut info = ConditionInfo::bare(
            record.name.clone(),
            summary
                .map(str::to_string)
                .unwrap_or_else(|| local_summary(&record.name)),
        );
        info.image_url = article.and_then(|a| a.image_url.clone());
        info.causes = non_empty(record.causes.clone());
        info.symptoms = non_empty(record.symptoms.clone());
        info.precautions = non_empty(record.precautions.clone());
        info.medications = non_empty(record.medications.clone());
        info.home_remedies = non_empty(record.home_remedies.clone());
        info.disease_knowledge = disease_knowledge;
        info
    }

    fn from_article(&self, article: &Article, summary: &str) -> ConditionInfo {
        let text = article.extract.as_str();
        let section = |category| non_empty(self.extract_category(text, category));

        let mut info = ConditionInfo::bare(article.title.clone(), summary);
        info.image_url = article.image_url.clone();
        info.causes = section(SectionCategory::Causes);
        info.symptoms = section(SectionCategory::Symptoms)
            .or_else(|| Some(vec![GENERIC_SYMPTOMS.to_string()]));
        info.precautions = section(SectionCategory::Precautions);
        info.medications = section(SectionCategory::Medications);
        info.home_remedies = section(SectionCategory::HomeRemedies)
            .or_else(|| Some(vec![GENERIC_HOME_REMEDY.to_string()]));
        info.disease_knowledge = section(SectionCategory::DiseaseKnowledge);
        info
    }

    /// Keyword pass for a category. A category with its own article
    /// section (background knowledge) reads that section first.
    fn extract_category(&self, text: &str, category: SectionCategory) -> Vec<String> {
        if let Some(strategy) = category.section_strategy() {
            let headed = self.extractor.extract(text, strategy);
            if !headed.is_empty() {
                return headed;
            }
        }
        self.extractor.extract(text, category.keyword_strategy())
    }

    async fn fetch_remote(&self, term: &str) -> Option<Article> {
        match self.try_fetch(term).await {
            Ok(article) => article,
            Err(e) => {
                tracing::warn!(error = %e, term, "Encyclopedia unavailable, using curated data only");
                None
            }
        }
    }

    async fn try_fetch(&self, term: &str) -> EnrichmentResult<Option<Article>> {
        if term.trim().is_empty() {
            return Ok(None);
        }

        let hits = self.client.search(term).await?;
        let top = match hits.into_iter().next() {
            Some(top) => top,
            None => return Ok(None),
        };
        self.client.fetch_article(&top.title).await
    }
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
