//! Sentence splitting and the two extraction strategies.

use std::borrow::Cow;
use std::collections::HashSet;

use regex::Regex;

use crate::{ExtractionConfig, ExtractionResult, ExtractionStrategy};

/// Heading convention used by plain-text encyclopedia extracts (`== Causes ==`).
pub const DEFAULT_HEADING_PATTERN: &str = r"(?m)^[ \t]*==+[^=\n]+==+[ \t]*$";

/// Sentence terminators: a run of `.`, `!` or `?` followed by whitespace or end of text.
const SENTENCE_BOUNDARY: &str = r"[.!?]+(?:\s+|$)";

/// Compiled heading pattern marking where a section ends.
#[derive(Debug, Clone)]
pub struct SectionPattern {
    heading: Regex,
}

impl Default for SectionPattern {
    fn default() -> Self {
        Self {
            heading: Regex::new(DEFAULT_HEADING_PATTERN).expect("default heading pattern is valid"),
        }
    }
}

impl SectionPattern {
    /// Build a section pattern from a custom heading regex.
    pub fn new(pattern: &str) -> ExtractionResult<Self> {
        Ok(Self {
            heading: Regex::new(pattern)?,
        })
    }

    /// Check whether a single line is a heading.
    pub fn is_heading(&self, line: &str) -> bool {
        self.heading.is_match(line)
    }

    /// Byte offset of the first heading starting at or after `from`.
    pub fn next_heading(&self, text: &str, from: usize) -> Option<usize> {
        self.heading.find_at(text, from).map(|m| m.start())
    }

    /// Text with every heading line replaced by a sentence terminator.
    ///
    /// Keyword extraction runs on this, so text on either side of a heading
    /// always lands in separate sentences, even when the line above it has
    /// no closing punctuation.
    pub fn strip_headings<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.heading.replace_all(text, ".")
    }
}

/// Split prose into trimmed, non-empty sentence candidates.
///
/// Terminal punctuation is dropped along with the split.
pub fn split_sentences(text: &str) -> Vec<String> {
    let boundary = sentence_boundary();
    boundary
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn sentence_boundary() -> &'static Regex {
    use std::sync::OnceLock;
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(SENTENCE_BOUNDARY).expect("sentence boundary pattern is valid"))
}

/// Extractor bundling the length window, cap and heading pattern.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
    pattern: SectionPattern,
}

impl Extractor {
    /// Create an extractor with the default heading pattern.
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            pattern: SectionPattern::default(),
        }
    }

    /// Replace the heading pattern.
    pub fn with_pattern(mut self, pattern: SectionPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Run whichever strategy the caller picked.
    pub fn extract(&self, text: &str, strategy: ExtractionStrategy<'_>) -> Vec<String> {
        match strategy {
            ExtractionStrategy::Keywords(keywords) => self.extract_sentences(text, keywords),
            ExtractionStrategy::Section(headers) => self.extract_section(text, headers),
        }
    }

    /// Keep sentences containing at least one keyword (case-insensitive substring).
    ///
    /// Heading lines are dropped first.
    pub fn extract_sentences(&self, text: &str, keywords: &[&str]) -> Vec<String> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|k| k.to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Vec::new();
        }

        let text = self.pattern.strip_headings(text);
        let candidates = split_sentences(&text).into_iter().filter(|s| {
            let lower = s.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        });
        self.finish(candidates)
    }

    /// Keep every sentence between the first header phrase and the next heading.
    pub fn extract_section(&self, text: &str, headers: &[&str]) -> Vec<String> {
        match self.locate_section(text, headers) {
            Some(slice) => self.finish(split_sentences(slice).into_iter()),
            None => Vec::new(),
        }
    }

    /// Find the body text belonging to the first header phrase in `text`.
    ///
    /// When the phrase sits on a heading line the body starts on the next
    /// line; otherwise it starts at the phrase itself.
    pub fn locate_section<'t>(&self, text: &'t str, headers: &[&str]) -> Option<&'t str> {
        let start = find_first_header(text, headers)?;

        let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
        let line_end = text[start..]
            .find('\n')
            .map(|i| start + i)
            .unwrap_or(text.len());
        let body_start = if self.pattern.is_heading(&text[line_start..line_end]) {
            line_end
        } else {
            start
        };

        let body_end = self
            .pattern
            .next_heading(text, body_start)
            .unwrap_or(text.len());
        Some(&text[body_start..body_end])
    }

    /// Apply the length window, dedup and cap.
    fn finish(&self, candidates: impl Iterator<Item = String>) -> Vec<String> {
        let mut seen = HashSet::new();
        candidates
            .filter(|s| self.config.accepts_len(s))
            .filter(|s| seen.insert(s.clone()))
            .take(self.config.cap)
            .collect()
    }
}

/// Byte offset of the earliest case-insensitive occurrence of any header phrase.
fn find_first_header(text: &str, headers: &[&str]) -> Option<usize> {
    let alternatives: Vec<String> = headers
        .iter()
        .filter(|h| !h.is_empty())
        .map(|h| regex::escape(h))
        .collect();
    if alternatives.is_empty() {
        return None;
    }
    let pattern = format!("(?i){}", alternatives.join("|"));
    // Escaped literals always compile
    let re = Regex::new(&pattern).ok()?;
    re.find(text).map(|m| m.start())
}

/// Keyword-strategy extraction with an explicit config.
pub fn extract_sentences(text: &str, keywords: &[&str], config: ExtractionConfig) -> Vec<String> {
    Extractor::new(config).extract_sentences(text, keywords)
}

/// Header-strategy extraction with an explicit config and the default heading pattern.
pub fn extract_section(text: &str, headers: &[&str], config: ExtractionConfig) -> Vec<String> {
    Extractor::new(config).extract_section(text, headers)
}
