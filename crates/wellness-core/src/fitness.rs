//! Fitness score from the latest vitals.
//!
//! Three components are summed: BMI (10-30), sleep (10-30) and blood
//! pressure (10-40). Any missing vital yields an "Incomplete Data" score;
//! there is no partial scoring.

use crate::models::{FitnessScore, LatestVitals, ScoreBreakdown, ScoreStatus};

/// Compute the score. A zero reading counts as missing.
pub fn compute_score(vitals: &LatestVitals) -> FitnessScore {
    let present = |v: Option<f64>| v.filter(|x| *x != 0.0);

    let (weight, height, sleep, sys, dia) = match (
        present(vitals.weight_kg),
        present(vitals.height_cm),
        present(vitals.sleep_hours),
        present(vitals.bp_systolic),
        present(vitals.bp_diastolic),
    ) {
        (Some(w), Some(h), Some(s), Some(sys), Some(dia)) => (w, h, s, sys, dia),
        _ => return FitnessScore::incomplete(),
    };

    let height_m = height / 100.0;
    let bmi = weight / (height_m * height_m);

    let breakdown = ScoreBreakdown {
        bmi: bmi_points(bmi),
        sleep: sleep_points(sleep),
        blood_pressure: blood_pressure_points(sys, dia),
    };
    let total = breakdown.total();
    let status = status_for(total);

    tracing::debug!(total, bmi, "Computed fitness score");

    FitnessScore {
        total,
        status,
        color: status.color().to_string(),
        bmi: Some(bmi),
        breakdown: Some(breakdown),
    }
}

/// Status label for a complete score.
pub fn status_for(total: u32) -> ScoreStatus {
    if total >= 85 {
        ScoreStatus::Excellent
    } else if total >= 70 {
        ScoreStatus::Good
    } else if total < 50 {
        ScoreStatus::NeedsImprovement
    } else {
        ScoreStatus::Fair
    }
}

fn bmi_points(bmi: f64) -> u32 {
    if (18.5..25.0).contains(&bmi) {
        30
    } else if (25.0..30.0).contains(&bmi) {
        20
    } else if bmi < 18.5 {
        15
    } else {
        10
    }
}

fn sleep_points(hours: f64) -> u32 {
    if (7.0..=9.0).contains(&hours) {
        30
    } else if hours >= 6.0 || hours <= 10.0 {
        // Always true for real numbers; the 10-point band is unreachable
        20
    } else {
        10
    }
}

fn blood_pressure_points(systolic: f64, diastolic: f64) -> u32 {
    if systolic < 120.0 && diastolic < 80.0 {
        40
    } else if systolic < 130.0 && diastolic < 80.0 {
        30
    } else if systolic < 140.0 || diastolic < 90.0 {
        20
    } else {
        10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitals(weight: f64, height: f64, sleep: f64, sys: f64, dia: f64) -> LatestVitals {
        LatestVitals {
            weight_kg: Some(weight),
            height_cm: Some(height),
            sleep_hours: Some(sleep),
            bp_systolic: Some(sys),
            bp_diastolic: Some(dia),
        }
    }

    #[test]
    fn test_perfect_score() {
        let score = compute_score(&vitals(70.0, 175.0, 8.0, 115.0, 75.0));
        assert_eq!(score.total, 100);
        assert_eq!(score.status, ScoreStatus::Excellent);
        assert_eq!(score.color, "#10b981");
        assert_eq!(score.bmi_display().as_deref(), Some("22.9"));
        assert_eq!(
            score.breakdown,
            Some(ScoreBreakdown {
                bmi: 30,
                sleep: 30,
                blood_pressure: 40
            })
        );
    }

    #[test]
    fn test_missing_vital_is_incomplete() {
        let mut partial = vitals(70.0, 175.0, 8.0, 115.0, 75.0);
        partial.bp_diastolic = None;
        let score = compute_score(&partial);
        assert_eq!(score, FitnessScore::incomplete());
        assert_eq!(compute_score(&LatestVitals::default()).total, 0);
    }

    #[test]
    fn test_zero_counts_as_missing() {
        let score = compute_score(&vitals(70.0, 0.0, 8.0, 115.0, 75.0));
        assert_eq!(score.status, ScoreStatus::IncompleteData);
        assert!(score.bmi.is_none());
    }

    #[test]
    fn test_bmi_bands() {
        assert_eq!(bmi_points(18.5), 30);
        assert_eq!(bmi_points(24.99), 30);
        assert_eq!(bmi_points(25.0), 20);
        assert_eq!(bmi_points(29.9), 20);
        assert_eq!(bmi_points(17.0), 15);
        assert_eq!(bmi_points(30.0), 10);
    }

    #[test]
    fn test_sleep_bands() {
        assert_eq!(sleep_points(7.0), 30);
        assert_eq!(sleep_points(9.0), 30);
        assert_eq!(sleep_points(4.0), 20);
        assert_eq!(sleep_points(12.0), 20);
    }

    #[test]
    fn test_blood_pressure_bands() {
        assert_eq!(blood_pressure_points(115.0, 75.0), 40);
        assert_eq!(blood_pressure_points(125.0, 75.0), 30);
        assert_eq!(blood_pressure_points(135.0, 85.0), 20);
        assert_eq!(blood_pressure_points(150.0, 85.0), 20);
        assert_eq!(blood_pressure_points(150.0, 95.0), 10);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(status_for(85), ScoreStatus::Excellent);
        assert_eq!(status_for(84), ScoreStatus::Good);
        assert_eq!(status_for(70), ScoreStatus::Good);
        assert_eq!(status_for(69), ScoreStatus::Fair);
        assert_eq!(status_for(50), ScoreStatus::Fair);
        assert_eq!(status_for(49), ScoreStatus::NeedsImprovement);
    }

    #[test]
    fn test_poor_vitals() {
        // BMI 39.2, short sleep, stage 2 hypertension
        let score = compute_score(&vitals(120.0, 175.0, 4.0, 160.0, 100.0));
        assert_eq!(score.total, 40);
        assert_eq!(score.status, ScoreStatus::NeedsImprovement);
        assert_eq!(score.color, "#ef4444");
    }
}
