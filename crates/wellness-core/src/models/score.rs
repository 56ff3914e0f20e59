//! Fitness score models.

use serde::{Deserialize, Serialize};

use super::{MetricCategory, StorageData};

/// Qualitative label for a fitness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreStatus {
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Fair")]
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    #[serde(rename = "Incomplete Data")]
    IncompleteData,
}

impl ScoreStatus {
    /// Label shown on the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
            Self::IncompleteData => "Incomplete Data",
        }
    }

    /// Display color token.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Excellent => "#10b981",
            Self::Good => "#0ea5e9",
            Self::Fair => "#f59e0b",
            Self::NeedsImprovement => "#ef4444",
            Self::IncompleteData => "#64748b",
        }
    }

    /// Advice sentence paired with the score.
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Excellent => "Your vitals are in the optimal range. Maintain your current routine to sustain this high performance.",
            Self::Good => "Good overall health. Focused improvements on your weakest metric could boost your score significantly.",
            Self::Fair | Self::NeedsImprovement => "Some metrics are outside the healthy range. We recommend consulting a professional and focusing on sleep and diet.",
            Self::IncompleteData => "Please log your Weight, Height, Sleep, and Blood Pressure to calculate your fitness score.",
        }
    }
}

/// Points earned per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// 10-30
    pub bmi: u32,
    /// 10-30
    pub sleep: u32,
    /// 10-40
    pub blood_pressure: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.bmi + self.sleep + self.blood_pressure
    }
}

/// Derived fitness score. Recomputed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessScore {
    /// 0 when data is incomplete, otherwise 30-100
    pub total: u32,
    pub status: ScoreStatus,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl FitnessScore {
    /// Score returned when any input is missing.
    pub fn incomplete() -> Self {
        Self {
            total: 0,
            status: ScoreStatus::IncompleteData,
            color: ScoreStatus::IncompleteData.color().to_string(),
            bmi: None,
            breakdown: None,
        }
    }

    /// BMI rounded to one decimal, as displayed.
    pub fn bmi_display(&self) -> Option<String> {
        self.bmi.map(|b| format!("{:.1}", b))
    }
}

/// Latest value of each scored vital.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LatestVitals {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub bp_systolic: Option<f64>,
    pub bp_diastolic: Option<f64>,
}

impl LatestVitals {
    /// Pull the last reading of each scored category.
    pub fn from_storage(data: &StorageData) -> Self {
        Self {
            weight_kg: data.latest_value(MetricCategory::Weight),
            height_cm: data.latest_value(MetricCategory::Height),
            sleep_hours: data.latest_value(MetricCategory::Sleep),
            bp_systolic: data.latest_value(MetricCategory::BloodPressureSystolic),
            bp_diastolic: data.latest_value(MetricCategory::BloodPressureDiastolic),
        }
    }
}
