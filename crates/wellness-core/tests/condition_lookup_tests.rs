//! Condition lookup integration tests through the FFI object.

use wellness_core::db::Database;
use wellness_core::enrichment::{MockEncyclopedia, NOT_FOUND_SUMMARY};
use wellness_core::models::DISCLAIMER;
use wellness_core::{WellnessConfig, WellnessCore};

const MALARIA_TEXT: &str = "Malaria is a mosquito-borne infectious disease that affects vertebrates.\n\n\
== Signs and symptoms ==\n\
Symptoms usually begin ten to fifteen days after being bitten.";

const LYME_TEXT: &str = "Lyme disease is a vector-borne disease caused by Borrelia bacteria.\n\n\
== Prevention ==\n\
Prevention includes efforts to avoid tick bites.";

fn core_with(mock: MockEncyclopedia) -> std::sync::Arc<WellnessCore> {
    let db = Database::open_in_memory().unwrap();
    WellnessCore::with_client(db, Box::new(mock), &WellnessConfig::default())
}

#[tokio::test]
async fn test_curated_condition_with_remote_summary() {
    let mock = MockEncyclopedia::new().with_article(
        "Malaria",
        MALARIA_TEXT,
        Some("https://upload.example/malaria.png"),
    );
    let core = core_with(mock);

    let info = core.lookup_condition("malaria".to_string()).await.unwrap();
    assert_eq!(info.title, "Malaria");
    assert_eq!(
        info.summary,
        "Malaria is a mosquito-borne infectious disease that affects vertebrates."
    );
    assert_eq!(info.image_url.as_deref(), Some("https://upload.example/malaria.png"));
    assert!(info.symptoms.unwrap().contains(&"Cyclical high fever".to_string()));
    assert_eq!(info.disclaimer, DISCLAIMER);
}

#[tokio::test]
async fn test_remote_only_condition() {
    let core = core_with(MockEncyclopedia::new().with_article("Lyme disease", LYME_TEXT, None));

    let info = core.lookup_condition("lyme disease".to_string()).await.unwrap();
    assert_eq!(info.title, "Lyme disease");
    assert_eq!(
        info.precautions,
        Some(vec!["Prevention includes efforts to avoid tick bites".to_string()])
    );
    assert!(info.symptoms.is_some());
    assert!(info.home_remedies.is_some());
}

#[tokio::test]
async fn test_unknown_condition() {
    let core = core_with(MockEncyclopedia::new());

    let info = core.lookup_condition("qwertyplex".to_string()).await.unwrap();
    assert_eq!(info.title, "qwertyplex");
    assert_eq!(info.summary, NOT_FOUND_SUMMARY);
    assert!(info.symptoms.is_none());
    assert!(info.causes.is_none());
    assert_eq!(info.disclaimer, DISCLAIMER);
}

#[tokio::test]
async fn test_lookup_is_recorded_in_history() {
    let core = core_with(MockEncyclopedia::offline());

    core.lookup_condition("migraine".to_string()).await.unwrap();
    let history = core.chat_history().unwrap();

    assert_eq!(history.len(), 3);
    assert_eq!(history[1].role, "user");
    assert_eq!(history[1].text, "migraine");
    let reply = &history[2];
    assert_eq!(reply.role, "bot");
    assert_eq!(reply.medical_data.as_ref().unwrap().title, "Migraine");
}

#[tokio::test]
async fn test_unreachable_encyclopedia_degrades() {
    let mut config = WellnessConfig::default();
    // Nothing listens on the discard port
    config.api_base_url = "http://127.0.0.1:9/w/api.php".to_string();
    config.request_timeout_secs = 2;

    let db = Database::open_in_memory().unwrap();
    let core = WellnessCore::from_config(db, &config).unwrap();

    let info = core.lookup_condition("eczema".to_string()).await.unwrap();
    assert_eq!(info.title, "Eczema (Atopic Dermatitis)");
    assert!(info.summary.contains("is a recognized medical condition"));

    let missing = core.lookup_condition("qwertyplex".to_string()).await.unwrap();
    assert_eq!(missing.summary, NOT_FOUND_SUMMARY);
}

#[test]
fn test_directory_lists_curated_conditions() {
    let core = core_with(MockEncyclopedia::new());
    let directory = core.disease_directory();

    assert_eq!(directory.title, "Global Health Registry");
    let all: Vec<&String> = directory.categories.iter().flat_map(|c| &c.diseases).collect();
    assert_eq!(all.len(), 27);
    assert!(all.iter().any(|d| d.as_str() == "Influenza (Flu)"));
}
