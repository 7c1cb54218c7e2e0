//! Stop word filtering.

use std::collections::HashSet;

use precis_core::config::DEFAULT_STOP_WORDS;

/// An immutable set of lowercase stop words.
///
/// Built once when a keyword extractor is constructed and shared read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl StopWords {
    /// Build a stop word set from a list. Words are lowercased.
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Whether `word` is a stop word. `word` is expected to be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
