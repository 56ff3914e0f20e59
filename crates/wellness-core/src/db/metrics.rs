//! Health metric storage.
//!
//! All readings and the user profile live in one JSON document under
//! [`STORAGE_KEY`]. Readings are append-only.

use super::{Database, DbError, DbResult};
use crate::models::{
    HealthMetricReading, LatestVitals, MetricCategory, MetricSnapshot, StorageData, UserProfile,
};

/// Key of the persisted metrics document.
pub const STORAGE_KEY: &str = "wellness_ai_data";

/// Key a malformed metrics document is moved to before it is replaced.
pub const STORAGE_BACKUP_KEY: &str = "wellness_ai_data.unreadable";

impl Database {
    /// Load the metrics document.
    ///
    /// A missing document yields empty state. A malformed one also yields
    /// empty state (logged). Category keys this build does not know are kept.
    pub fn load_storage(&self) -> DbResult<StorageData> {
        Ok(self
            .read_storage()?
            .map(|(data, _)| data)
            .unwrap_or_default())
    }

    /// Load before a write. A malformed document is copied to
    /// [`STORAGE_BACKUP_KEY`] first so the save cannot destroy it.
    fn load_storage_for_update(&self) -> DbResult<StorageData> {
        match self.read_storage()? {
            Some((data, None)) => Ok(data),
            Some((data, Some(raw))) => {
                self.set_value(STORAGE_BACKUP_KEY, &raw)?;
                tracing::warn!(
                    backup_key = STORAGE_BACKUP_KEY,
                    "Preserved unreadable metrics document"
                );
                Ok(data)
            }
            None => Ok(StorageData::default()),
        }
    }

    /// Parsed document, plus the raw text when it could not be parsed.
    fn read_storage(&self) -> DbResult<Option<(StorageData, Option<String>)>> {
        let raw = match self.get_value(STORAGE_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        match serde_json::from_str::<StorageData>(&raw) {
            Ok(data) => Ok(Some((data.with_all_categories(), None))),
            Err(e) => {
                tracing::warn!(error = %e, "Stored metrics are malformed, starting empty");
                Ok(Some((StorageData::default(), Some(raw))))
            }
        }
    }

    /// Persist the whole metrics document.
    pub fn save_storage(&self, data: &StorageData) -> DbResult<()> {
        let json = serde_json::to_string(data)?;
        self.set_value(STORAGE_KEY, &json)
    }

    /// Append a reading and persist it.
    ///
    /// A blank unit falls back to the category's default unit.
    pub fn log_metric(
        &self,
        category: MetricCategory,
        value: f64,
        unit: &str,
    ) -> DbResult<HealthMetricReading> {
        if !value.is_finite() {
            return Err(DbError::InvalidMetric(format!(
                "{} value must be a finite number, got {}",
                category, value
            )));
        }

        let unit = match unit.trim() {
            "" => category.default_unit(),
            unit => unit,
        };
        let reading = HealthMetricReading::new(category, value, unit);

        let mut data = self.load_storage_for_update()?;
        data.push(reading.clone());
        self.save_storage(&data)?;

        tracing::info!(category = %category, value, "Logged health metric");
        Ok(reading)
    }

    /// Parse free-text input and log it.
    ///
    /// Empty or non-numeric input is ignored and returns `None`.
    pub fn log_metric_input(
        &self,
        category: MetricCategory,
        raw: &str,
        unit: &str,
    ) -> DbResult<Option<HealthMetricReading>> {
        let value = match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                tracing::debug!(category = %category, "Ignoring non-numeric metric input");
                return Ok(None);
            }
        };
        self.log_metric(category, value, unit).map(Some)
    }

    /// Full history of every category.
    pub fn get_all_metrics(&self) -> DbResult<MetricSnapshot> {
        Ok(self.load_storage()?.metrics)
    }

    /// History of one category, oldest first.
    pub fn get_history(&self, category: MetricCategory) -> DbResult<Vec<HealthMetricReading>> {
        Ok(self.load_storage()?.history(category).to_vec())
    }

    /// Most recent reading of one category.
    pub fn latest(&self, category: MetricCategory) -> DbResult<Option<HealthMetricReading>> {
        Ok(self.load_storage()?.latest(category).cloned())
    }

    /// Latest value of every scored vital.
    pub fn latest_vitals(&self) -> DbResult<LatestVitals> {
        Ok(LatestVitals::from_storage(&self.load_storage()?))
    }

    /// Store the user's free-text goal.
    pub fn save_user_goal(&self, goal: &str) -> DbResult<()> {
        let mut data = self.load_storage_for_update()?;
        data.user_profile
            .get_or_insert_with(UserProfile::default)
            .goal = Some(goal.to_string());
        self.save_storage(&data)
    }

    /// The user's goal, if one was saved.
    pub fn get_user_goal(&self) -> DbResult<Option<String>> {
        Ok(self.load_storage()?.goal().map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_every_category() {
        let db = Database::open_in_memory().unwrap();
        let metrics = db.get_all_metrics().unwrap();
        assert_eq!(metrics.len(), 6);
        assert!(metrics.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_log_and_read_back() {
        let db = Database::open_in_memory().unwrap();
        let first = db.log_metric(MetricCategory::Weight, 72.5, "kg").unwrap();
        db.log_metric(MetricCategory::Weight, 71.0, "kg").unwrap();

        let history = db.get_history(MetricCategory::Weight).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], first);
        assert_eq!(db.latest(MetricCategory::Weight).unwrap().unwrap().value, 71.0);
        assert!(db.latest(MetricCategory::Height).unwrap().is_none());
    }

    #[test]
    fn test_blank_unit_uses_default() {
        let db = Database::open_in_memory().unwrap();
        let reading = db.log_metric(MetricCategory::Sleep, 7.5, "  ").unwrap();
        assert_eq!(reading.unit, "hrs");
    }

    #[test]
    fn test_non_finite_rejected() {
        let db = Database::open_in_memory().unwrap();
        let result = db.log_metric(MetricCategory::Steps, f64::NAN, "steps");
        assert!(matches!(result, Err(DbError::InvalidMetric(_))));
        assert!(db.get_history(MetricCategory::Steps).unwrap().is_empty());
    }

    #[test]
    fn test_input_parsing() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.log_metric_input(MetricCategory::Weight, "", "kg").unwrap().is_none());
        assert!(db.log_metric_input(MetricCategory::Weight, "abc", "kg").unwrap().is_none());
        assert!(db.log_metric_input(MetricCategory::Weight, "inf", "kg").unwrap().is_none());

        let reading = db
            .log_metric_input(MetricCategory::Weight, " 68.2 ", "kg")
            .unwrap()
            .unwrap();
        assert_eq!(reading.value, 68.2);
        assert_eq!(db.get_history(MetricCategory::Weight).unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_document_loads_empty() {
        let db = Database::open_in_memory().unwrap();
        db.set_value(STORAGE_KEY, "{not json").unwrap();

        let data = db.load_storage().unwrap();
        assert_eq!(data, StorageData::default());

        // Logging after a bad load keeps the old text under the backup key
        db.log_metric(MetricCategory::Height, 180.0, "cm").unwrap();
        assert_eq!(db.get_history(MetricCategory::Height).unwrap().len(), 1);
        assert_eq!(
            db.get_value(STORAGE_BACKUP_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_unknown_category_survives_logging() {
        let db = Database::open_in_memory().unwrap();
        db.set_value(
            STORAGE_KEY,
            r#"{"metrics":{"weight":[{"id":"w1","type":"weight","value":70.0,"unit":"kg","date":"2024-03-01T08:30:00Z"}],"calories":[]}}"#,
        )
        .unwrap();

        db.log_metric(MetricCategory::Weight, 71.0, "kg").unwrap();

        let history = db.get_history(MetricCategory::Weight).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, "w1");
        assert!(db.load_storage().unwrap().unknown_metrics.contains_key("calories"));
        assert!(db.get_value(STORAGE_BACKUP_KEY).unwrap().is_none());
    }

    #[test]
    fn test_goal_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.get_user_goal().unwrap().is_none());

        db.log_metric(MetricCategory::Steps, 8000.0, "steps").unwrap();
        db.save_user_goal("Walk 10k steps daily").unwrap();
        assert_eq!(db.get_user_goal().unwrap().as_deref(), Some("Walk 10k steps daily"));

        // Saving a goal keeps existing readings
        assert_eq!(db.get_history(MetricCategory::Steps).unwrap().len(), 1);
    }

    #[test]
    fn test_latest_vitals() {
        let db = Database::open_in_memory().unwrap();
        db.log_metric(MetricCategory::Weight, 70.0, "kg").unwrap();
        db.log_metric(MetricCategory::Height, 175.0, "cm").unwrap();

        let vitals = db.latest_vitals().unwrap();
        assert_eq!(vitals.weight_kg, Some(70.0));
        assert_eq!(vitals.height_cm, Some(175.0));
        assert!(vitals.sleep_hours.is_none());
    }
}
