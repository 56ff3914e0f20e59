//! Keyword and header tables for each condition section.

use serde::{Deserialize, Serialize};

use crate::ExtractionStrategy;

/// Words hinting a sentence describes symptoms.
pub const SYMPTOM_KEYWORDS: &[&str] = &[
    "symptom",
    "sign",
    "manifestation",
    "feel",
    "characterized by",
    "including",
];

/// Words hinting a sentence describes prevention.
pub const PRECAUTION_KEYWORDS: &[&str] = &[
    "prevent",
    "avoid",
    "precaution",
    "risk",
    "lifestyle",
    "control",
    "reduction",
];

/// Words hinting a sentence describes treatment.
pub const MEDICATION_KEYWORDS: &[&str] = &[
    "medication",
    "treatment",
    "drug",
    "therapy",
    "prescribe",
    "management",
    "remedy",
];

/// Words hinting a sentence describes self-care.
pub const REMEDY_KEYWORDS: &[&str] = &[
    "remedy",
    "home",
    "natural",
    "supportive",
    "water",
    "rest",
    "diet",
    "herbal",
];

/// Words hinting a sentence describes causes.
pub const CAUSE_KEYWORDS: &[&str] = &[
    "cause",
    "due to",
    "result of",
    "origin",
    "linked to",
    "etiology",
];

/// Words hinting a sentence is background knowledge.
pub const KNOWLEDGE_KEYWORDS: &[&str] = &[
    "known as",
    "history",
    "discovered",
    "global",
    "impact",
    "research",
    "scientific",
    "study",
];

/// Article sections holding background knowledge.
pub const KNOWLEDGE_HEADERS: &[&str] = &["history", "epidemiology", "research"];

/// Labelled section of a condition summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionCategory {
    Causes,
    Symptoms,
    Precautions,
    Medications,
    HomeRemedies,
    DiseaseKnowledge,
}

impl SectionCategory {
    /// Every category, in display order.
    pub const ALL: [SectionCategory; 6] = [
        SectionCategory::Causes,
        SectionCategory::Symptoms,
        SectionCategory::Precautions,
        SectionCategory::Medications,
        SectionCategory::HomeRemedies,
        SectionCategory::DiseaseKnowledge,
    ];

    /// Keyword set for the keyword strategy.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Causes => CAUSE_KEYWORDS,
            Self::Symptoms => SYMPTOM_KEYWORDS,
            Self::Precautions => PRECAUTION_KEYWORDS,
            Self::Medications => MEDICATION_KEYWORDS,
            Self::HomeRemedies => REMEDY_KEYWORDS,
            Self::DiseaseKnowledge => KNOWLEDGE_KEYWORDS,
        }
    }

    /// Header phrases of the article section to prefer, if the category
    /// has one. The other categories are scattered through the prose.
    pub fn headers(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::DiseaseKnowledge => Some(KNOWLEDGE_HEADERS),
            _ => None,
        }
    }

    /// Keyword strategy over this category's keyword set.
    pub fn keyword_strategy(&self) -> ExtractionStrategy<'static> {
        ExtractionStrategy::Keywords(self.keywords())
    }

    /// Section strategy over this category's header phrases.
    pub fn section_strategy(&self) -> Option<ExtractionStrategy<'static>> {
        self.headers().map(ExtractionStrategy::Section)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Causes => "Causes",
            Self::Symptoms => "Symptoms",
            Self::Precautions => "Precautions",
            Self::Medications => "Medications",
            Self::HomeRemedies => "Home Remedies",
            Self::DiseaseKnowledge => "Disease Knowledge",
        }
    }
}
