//! Frequency-based keyword extraction.
//!
//! Tokens are counted in the order they first appear, then ranked by
//! descending count with a stable sort so that ties keep first-seen order.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use precis_core::config::{DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_KEYWORD_LENGTH, ProcessorConfig};
use precis_core::{PrecisError, Result};
use regex::Regex;
use tracing::debug;

use super::StopWords;

/// Runs of word characters.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Configuration for keyword extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordExtractorConfig {
    /// Number of keywords to report.
    pub max_keywords: usize,
    /// Minimum token length in characters.
    pub min_length: usize,
}

impl Default for KeywordExtractorConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            min_length: DEFAULT_MIN_KEYWORD_LENGTH,
        }
    }
}

/// Extracts the most frequent non-stop-word tokens of a text.
///
/// # Examples
///
/// ```rust
/// use precis_text::analysis::KeywordExtractor;
///
/// let extractor = KeywordExtractor::new();
/// let keywords = extractor.extract("Le chat dort. Le chat mange dans la cuisine.");
/// assert_eq!(keywords, vec!["chat", "dort", "mange", "cuisine"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: KeywordExtractorConfig,
    stop_words: StopWords,
}

impl KeywordExtractor {
    /// Create an extractor reporting 5 keywords of at least 3 characters,
    /// ignoring the default stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with explicit settings.
    pub fn with_config(config: KeywordExtractorConfig, stop_words: StopWords) -> Result<Self> {
        if config.max_keywords == 0 {
            return Err(PrecisError::configuration(
                "Number of keywords must be greater than 0",
            ));
        }
        if config.min_length == 0 {
            return Err(PrecisError::configuration(
                "Minimum keyword length must be greater than 0",
            ));
        }
        Ok(Self { config, stop_words })
    }

    /// Create an extractor from a processor configuration.
    pub fn from_processor_config(config: &ProcessorConfig) -> Result<Self> {
        Self::with_config(
            KeywordExtractorConfig {
                max_keywords: config.max_keywords,
                min_length: config.min_keyword_length,
            },
            StopWords::from_list(&config.stop_words),
        )
    }

    /// The extractor's settings.
    pub fn config(&self) -> &KeywordExtractorConfig {
        &self.config
    }

    /// Count candidate tokens in first-seen order.
    pub fn frequencies(&self, text: &str) -> IndexMap<String, usize> {
        let lowered = text.to_lowercase();
        let mut counts: IndexMap<String, usize> = IndexMap::new();

        for token in WORD.find_iter(&lowered).map(|m| m.as_str()) {
            if token.chars().count() < self.config.min_length || self.stop_words.contains(token) {
                continue;
            }
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }

        counts
    }

    /// The most frequent tokens, most frequent first.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut ranked: Vec<(String, usize)> = self.frequencies(text).into_iter().collect();
        // Stable, so equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(self.config.max_keywords);

        debug!("Extracted {} keywords", ranked.len());
        ranked.into_iter().map(|(word, _)| word).collect()
    }
}
