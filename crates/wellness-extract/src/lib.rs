//! Heuristic section extraction for encyclopedia prose.
//!
//! Slices free-form article text into short, topic-labelled sentence lists
//! (symptoms, causes, precautions, ...). Two strategies are available:
//!
//! - [`ExtractionStrategy::Keywords`]: keep sentences that contain any keyword.
//! - [`ExtractionStrategy::Section`]: locate a header phrase, take the text up
//!   to the next `== Heading ==` line, and keep every sentence in that slice.
//!
//! Both are substring heuristics with no notion of sentence meaning or
//! negation. A keyword such as `"pain"` also matches `"painting"`.

pub mod extraction;
pub mod keywords;

pub use extraction::*;
pub use keywords::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Invalid heading pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Default shortest sentence kept, in characters.
pub const DEFAULT_MIN_LEN: usize = 6;

/// Default longest sentence kept, in characters.
pub const DEFAULT_MAX_LEN: usize = 350;

/// Default number of sentences returned per category.
pub const DEFAULT_CAP: usize = 5;

/// Length window and cap applied to every extraction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Minimum sentence length (inclusive, in chars)
    pub min_len: usize,
    /// Maximum sentence length (inclusive, in chars)
    pub max_len: usize,
    /// Maximum number of sentences returned
    pub cap: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            max_len: DEFAULT_MAX_LEN,
            cap: DEFAULT_CAP,
        }
    }
}

impl ExtractionConfig {
    /// Same window, different cap.
    pub fn with_cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Check whether a candidate's length falls inside the window.
    pub fn accepts_len(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        len >= self.min_len && len <= self.max_len
    }
}

/// How a caller wants one category pulled out of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy<'a> {
    /// Keep sentences containing any of these keywords.
    Keywords(&'a [&'a str]),
    /// Keep every sentence under the first matching header phrase.
    Section(&'a [&'a str]),
}
