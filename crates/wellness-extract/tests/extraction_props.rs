//! Property tests for the extraction invariants: cap, uniqueness, length window.

use std::collections::HashSet;

use proptest::prelude::*;
use wellness_extract::{
    extract_section, extract_sentences, split_sentences, ExtractionConfig, SectionCategory,
};

fn sentence() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,40}",
        Just("fever and pain are common symptoms".to_string()),
        Just("treatment includes rest and water".to_string()),
        Just("== Signs and symptoms ==\nfever".to_string()),
    ]
}

fn article() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(sentence(), 0..30),
        prop::collection::vec(prop_oneof![Just(". "), Just("! "), Just("? "), Just(".\n\n")], 30),
    )
        .prop_map(|(sentences, seps)| {
            sentences
                .iter()
                .zip(seps.iter())
                .map(|(s, sep)| format!("{}{}", s, sep))
                .collect::<String>()
        })
}

fn config() -> impl Strategy<Value = ExtractionConfig> {
    (0usize..10, 0usize..60, 0usize..8).prop_map(|(min_len, extra, cap)| ExtractionConfig {
        min_len,
        max_len: min_len + extra,
        cap,
    })
}

fn assert_invariants(result: &[String], config: &ExtractionConfig) -> Result<(), TestCaseError> {
    prop_assert!(result.len() <= config.cap);
    let unique: HashSet<&String> = result.iter().collect();
    prop_assert_eq!(unique.len(), result.len());
    for s in result {
        let len = s.chars().count();
        prop_assert!(len >= config.min_len && len <= config.max_len, "{:?} outside window", s);
    }
    Ok(())
}

proptest! {
    #[test]
    fn keyword_extraction_respects_invariants(text in article(), config in config()) {
        for category in SectionCategory::ALL {
            let result = extract_sentences(&text, category.keywords(), config);
            assert_invariants(&result, &config)?;
        }
    }

    #[test]
    fn section_extraction_respects_invariants(text in article(), config in config()) {
        for headers in SectionCategory::ALL.iter().filter_map(|c| c.headers()) {
            let result = extract_section(&text, headers, config);
            assert_invariants(&result, &config)?;
        }
        let result = extract_section(&text, &["symptoms", "treatment"], config);
        assert_invariants(&result, &config)?;
    }

    #[test]
    fn every_keyword_hit_contains_a_keyword(text in article()) {
        let result = extract_sentences(&text, &["pain", "rest"], ExtractionConfig::default());
        for s in result {
            let lower = s.to_lowercase();
            prop_assert!(lower.contains("pain") || lower.contains("rest"));
        }
    }

    #[test]
    fn split_never_yields_blank_candidates(text in ".{0,200}") {
        for s in split_sentences(&text) {
            prop_assert!(!s.is_empty());
            prop_assert_eq!(s.trim(), s.as_str());
        }
    }
}
