//! Property tests for the fitness score.

use proptest::prelude::*;
use wellness_core::fitness::{compute_score, status_for};
use wellness_core::models::{LatestVitals, ScoreStatus};

fn reading() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(0.0)),
        8 => (1.0f64..300.0).prop_map(Some),
    ]
}

fn vitals() -> impl Strategy<Value = LatestVitals> {
    (reading(), reading(), reading(), reading(), reading()).prop_map(
        |(weight_kg, height_cm, sleep_hours, bp_systolic, bp_diastolic)| LatestVitals {
            weight_kg,
            height_cm,
            sleep_hours,
            bp_systolic,
            bp_diastolic,
        },
    )
}

fn all_present(v: &LatestVitals) -> bool {
    [v.weight_kg, v.height_cm, v.sleep_hours, v.bp_systolic, v.bp_diastolic]
        .iter()
        .all(|x| matches!(x, Some(value) if *value != 0.0))
}

proptest! {
    #[test]
    fn score_is_zero_or_in_range(v in vitals()) {
        let score = compute_score(&v);
        if all_present(&v) {
            prop_assert!((30..=100).contains(&score.total));
            prop_assert_eq!(score.status, status_for(score.total));
            prop_assert_eq!(score.breakdown.map(|b| b.total()), Some(score.total));
            prop_assert!(score.bmi.is_some());
        } else {
            prop_assert_eq!(score.total, 0);
            prop_assert_eq!(score.status, ScoreStatus::IncompleteData);
            prop_assert!(score.breakdown.is_none());
        }
        prop_assert_eq!(score.color.as_str(), score.status.color());
    }

    #[test]
    fn sleep_never_scores_lowest_band(hours in 0.1f64..24.0) {
        let score = compute_score(&LatestVitals {
            weight_kg: Some(70.0),
            height_cm: Some(175.0),
            sleep_hours: Some(hours),
            bp_systolic: Some(115.0),
            bp_diastolic: Some(75.0),
        });
        prop_assert!(score.breakdown.map(|b| b.sleep) >= Some(20));
    }
}
