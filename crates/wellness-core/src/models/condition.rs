//! Condition records and lookup results.

use serde::{Deserialize, Serialize};

/// Disclaimer attached to every condition lookup result.
pub const DISCLAIMER: &str = "⚠️ MEDICAL DISCLAIMER: This information is for educational purposes only and is not medical advice. Always consult a healthcare professional for diagnosis and treatment.";

/// Curated summary for one named condition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    /// Short lookup key (e.g., "flu", "kidney_stone")
    pub alias: String,
    /// Display name (e.g., "Influenza (Flu)")
    pub name: String,
    pub causes: Vec<String>,
    pub symptoms: Vec<String>,
    pub precautions: Vec<String>,
    pub medications: Vec<String>,
    pub home_remedies: Vec<String>,
    /// Background facts, rarely curated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_knowledge: Option<Vec<String>>,
}

impl ConditionRecord {
    /// Create an empty record with alias and display name.
    pub fn new(alias: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            name: name.into(),
            causes: Vec::new(),
            symptoms: Vec::new(),
            precautions: Vec::new(),
            medications: Vec::new(),
            home_remedies: Vec::new(),
            disease_knowledge: None,
        }
    }

    /// Bidirectional substring match against an already-lowercased query.
    ///
    /// "i think i have the flu" matches alias "flu", and so does "fl".
    pub fn matches_query(&self, lowered_query: &str) -> bool {
        if lowered_query.is_empty() {
            return false;
        }
        let alias = self.alias.to_lowercase();
        lowered_query.contains(&alias) || alias.contains(lowered_query)
    }
}

/// Result of a condition lookup. Produced per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConditionInfo {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_remedies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_knowledge: Option<Vec<String>>,
    pub disclaimer: String,
}

impl ConditionInfo {
    /// Result with only a title and summary.
    pub fn bare(title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            image_url: None,
            causes: None,
            symptoms: None,
            precautions: None,
            medications: None,
            home_remedies: None,
            disease_knowledge: None,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Check whether any structured section is present.
    pub fn has_sections(&self) -> bool {
        self.causes.is_some()
            || self.symptoms.is_some()
            || self.precautions.is_some()
            || self.medications.is_some()
            || self.home_remedies.is_some()
            || self.disease_knowledge.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_query_both_directions() {
        let record = ConditionRecord::new("flu", "Influenza (Flu)");
        assert!(record.matches_query("i think i have the flu"));
        assert!(record.matches_query("fl"));
        assert!(!record.matches_query("asthma"));
    }

    #[test]
    fn test_empty_query_never_matches() {
        let record = ConditionRecord::new("flu", "Influenza (Flu)");
        assert!(!record.matches_query(""));
    }

    #[test]
    fn test_bare_info_omits_sections() {
        let info = ConditionInfo::bare("xyz", "nothing");
        assert!(!info.has_sections());
        assert_eq!(info.disclaimer, DISCLAIMER);

        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("symptoms"));
        assert!(!json.contains("imageUrl"));
    }
}
