//! Health metric readings and the persisted storage blob.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Kind of health reading the user can log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    #[serde(rename = "weight")]
    Weight,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "sleep")]
    Sleep,
    #[serde(rename = "steps")]
    Steps,
    #[serde(rename = "blood_pressure_sys")]
    BloodPressureSystolic,
    #[serde(rename = "blood_pressure_dia")]
    BloodPressureDiastolic,
}

impl MetricCategory {
    /// Every category, in dashboard order.
    pub const ALL: [MetricCategory; 6] = [
        MetricCategory::Weight,
        MetricCategory::Height,
        MetricCategory::Sleep,
        MetricCategory::Steps,
        MetricCategory::BloodPressureSystolic,
        MetricCategory::BloodPressureDiastolic,
    ];

    /// Persisted key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
            Self::Sleep => "sleep",
            Self::Steps => "steps",
            Self::BloodPressureSystolic => "blood_pressure_sys",
            Self::BloodPressureDiastolic => "blood_pressure_dia",
        }
    }

    /// Unit the dashboard logs this category with.
    pub fn default_unit(&self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Height => "cm",
            Self::Sleep => "hrs",
            Self::Steps => "steps",
            Self::BloodPressureSystolic | Self::BloodPressureDiastolic => "mmHg",
        }
    }
}

impl fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MetricCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weight" => Ok(Self::Weight),
            "height" => Ok(Self::Height),
            "sleep" => Ok(Self::Sleep),
            "steps" => Ok(Self::Steps),
            "blood_pressure_sys" | "bp_sys" | "systolic" => Ok(Self::BloodPressureSystolic),
            "blood_pressure_dia" | "bp_dia" | "diastolic" => Ok(Self::BloodPressureDiastolic),
            other => Err(format!("Unknown metric category: {}", other)),
        }
    }
}

/// One logged reading. Append-only: never edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthMetricReading {
    /// Opaque unique ID
    pub id: String,
    #[serde(rename = "type")]
    pub category: MetricCategory,
    pub value: f64,
    pub unit: String,
    /// When the reading was logged (RFC 3339 on disk)
    #[serde(rename = "date")]
    pub recorded_at: DateTime<Utc>,
}

impl HealthMetricReading {
    /// Create a reading stamped with the current time.
    pub fn new(category: MetricCategory, value: f64, unit: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            value,
            unit: unit.into(),
            recorded_at: Utc::now(),
        }
    }
}

/// Per-category reading history, insertion order = chronological.
pub type MetricSnapshot = BTreeMap<MetricCategory, Vec<HealthMetricReading>>;

/// Optional user profile stored next to the metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
}

/// The whole persisted state, stored as one JSON blob.
///
/// Category keys this build does not know are carried through unchanged,
/// so a document written by a newer build survives a save.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "RawStorage")]
pub struct StorageData {
    pub metrics: MetricSnapshot,
    pub user_profile: Option<UserProfile>,
    /// Unrecognized category histories, kept verbatim
    pub unknown_metrics: BTreeMap<String, serde_json::Value>,
}

/// On-disk shape of [`StorageData`].
#[derive(Deserialize)]
struct RawStorage {
    #[serde(default)]
    metrics: BTreeMap<String, serde_json::Value>,
    #[serde(rename = "userProfile", default)]
    user_profile: Option<UserProfile>,
}

impl TryFrom<RawStorage> for StorageData {
    type Error = serde_json::Error;

    fn try_from(raw: RawStorage) -> Result<Self, Self::Error> {
        let mut metrics = MetricSnapshot::new();
        let mut unknown_metrics = BTreeMap::new();

        for (key, value) in raw.metrics {
            match MetricCategory::ALL.iter().find(|c| c.as_str() == key) {
                Some(category) => {
                    metrics.insert(*category, serde_json::from_value(value)?);
                }
                None => {
                    unknown_metrics.insert(key, value);
                }
            }
        }

        Ok(Self {
            metrics,
            user_profile: raw.user_profile,
            unknown_metrics,
        })
    }
}

impl Serialize for StorageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StorageRef {
            metrics: MetricsRef(self),
            user_profile: self.user_profile.as_ref(),
        }
        .serialize(serializer)
    }
}

#[derive(Serialize)]
struct StorageRef<'a> {
    metrics: MetricsRef<'a>,
    #[serde(rename = "userProfile", skip_serializing_if = "Option::is_none")]
    user_profile: Option<&'a UserProfile>,
}

struct MetricsRef<'a>(&'a StorageData);

impl Serialize for MetricsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let data = self.0;
        let mut map =
            serializer.serialize_map(Some(data.metrics.len() + data.unknown_metrics.len()))?;
        for (category, readings) in &data.metrics {
            map.serialize_entry(category.as_str(), readings)?;
        }
        for (key, value) in &data.unknown_metrics {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            metrics: MetricCategory::ALL
                .iter()
                .map(|c| (*c, Vec::new()))
                .collect(),
            user_profile: None,
            unknown_metrics: BTreeMap::new(),
        }
    }
}

impl StorageData {
    /// Fill in any category missing from an older blob.
    pub fn with_all_categories(mut self) -> Self {
        for category in MetricCategory::ALL {
            self.metrics.entry(category).or_default();
        }
        self
    }

    /// Append a reading to its category.
    pub fn push(&mut self, reading: HealthMetricReading) {
        self.metrics.entry(reading.category).or_default().push(reading);
    }

    /// History for one category (empty if none logged).
    pub fn history(&self, category: MetricCategory) -> &[HealthMetricReading] {
        self.metrics
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Most recent reading for a category.
    pub fn latest(&self, category: MetricCategory) -> Option<&HealthMetricReading> {
        self.history(category).last()
    }

    /// Most recent value for a category.
    pub fn latest_value(&self, category: MetricCategory) -> Option<f64> {
        self.latest(category).map(|r| r.value)
    }

    /// Stored user goal, if any.
    pub fn goal(&self) -> Option<&str> {
        self.user_profile.as_ref()?.goal.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in MetricCategory::ALL {
            assert_eq!(category.as_str().parse::<MetricCategory>(), Ok(category));
        }
        assert!("calories".parse::<MetricCategory>().is_err());
    }

    #[test]
    fn test_default_units() {
        assert_eq!(MetricCategory::Weight.default_unit(), "kg");
        assert_eq!(MetricCategory::Sleep.default_unit(), "hrs");
        assert_eq!(MetricCategory::BloodPressureDiastolic.default_unit(), "mmHg");
    }

    #[test]
    fn test_default_storage_has_every_category() {
        let data = StorageData::default();
        assert_eq!(data.metrics.len(), 6);
        assert!(data.history(MetricCategory::Steps).is_empty());
    }

    #[test]
    fn test_reading_serializes_with_legacy_keys() {
        let reading = HealthMetricReading::new(MetricCategory::BloodPressureSystolic, 118.0, "mmHg");
        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["type"], "blood_pressure_sys");
        assert_eq!(json["unit"], "mmHg");
        assert!(json["date"].is_string());
        assert_eq!(reading.id.len(), 36);
    }

    #[test]
    fn test_parse_legacy_blob_with_missing_categories() {
        let json = r#"{
            "metrics": {
                "weight": [
                    {"id": "1700000000000", "type": "weight", "value": 70.5, "unit": "kg", "date": "2024-03-01T08:30:00.000Z"}
                ]
            },
            "userProfile": {"goal": "Run a 10k"}
        }"#;
        let data: StorageData = serde_json::from_str(json).unwrap();
        let data = data.with_all_categories();

        assert_eq!(data.metrics.len(), 6);
        assert_eq!(data.latest_value(MetricCategory::Weight), Some(70.5));
        assert_eq!(data.latest(MetricCategory::Weight).unwrap().id, "1700000000000");
        assert_eq!(data.goal(), Some("Run a 10k"));
        assert!(data.history(MetricCategory::Height).is_empty());
    }

    #[test]
    fn test_unknown_category_is_kept_through_save() {
        let json = r#"{
            "metrics": {
                "weight": [
                    {"id": "a", "type": "weight", "value": 70.0, "unit": "kg", "date": "2024-03-01T08:30:00Z"}
                ],
                "calories": [{"value": 2100}]
            }
        }"#;
        let mut data: StorageData = serde_json::from_str(json).unwrap();
        assert_eq!(data.history(MetricCategory::Weight).len(), 1);
        assert!(data.unknown_metrics.contains_key("calories"));

        data.push(HealthMetricReading::new(MetricCategory::Weight, 71.0, "kg"));
        let saved = serde_json::to_value(&data).unwrap();
        assert_eq!(saved["metrics"]["calories"][0]["value"], 2100);
        assert_eq!(saved["metrics"]["weight"].as_array().unwrap().len(), 2);
        assert!(saved.get("userProfile").is_none());

        let reloaded: StorageData = serde_json::from_value(saved).unwrap();
        assert_eq!(reloaded, data);
    }

    #[test]
    fn test_malformed_known_category_is_an_error() {
        let json = r#"{"metrics": {"weight": "not a list"}}"#;
        assert!(serde_json::from_str::<StorageData>(json).is_err());
    }

    #[test]
    fn test_latest_is_last_pushed() {
        let mut data = StorageData::default();
        data.push(HealthMetricReading::new(MetricCategory::Sleep, 6.0, "hrs"));
        data.push(HealthMetricReading::new(MetricCategory::Sleep, 8.0, "hrs"));
        assert_eq!(data.latest_value(MetricCategory::Sleep), Some(8.0));
        assert_eq!(data.history(MetricCategory::Sleep).len(), 2);
    }
}
