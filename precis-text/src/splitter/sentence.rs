//! Sentence splitter.
//!
//! A sentence ends right after `.`, `!` or `?` when whitespace follows. The
//! terminator stays with its sentence and the whitespace run between two
//! sentences is dropped. Text with no such boundary is a single sentence.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{SplitFunction, trimmed_pieces};

/// Terminal punctuation followed by whitespace. The terminator is always the
/// first byte of a match.
static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

/// Splits text into sentences on terminal punctuation.
///
/// Every sentence is trimmed, and whitespace-only fragments such as the one
/// left after a trailing newline are not sentences.
///
/// # Examples
///
/// ```rust
/// use precis_text::splitter::{SentenceSplitter, SplitFunction};
///
/// let sentences = SentenceSplitter::new().split("Le chat mange. Le chat dort!");
/// assert_eq!(sentences, vec!["Le chat mange.", "Le chat dort!"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    /// Create a new sentence splitter.
    pub fn new() -> Self {
        Self
    }
}

impl SplitFunction for SentenceSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut start = 0;

        for boundary in SENTENCE_BOUNDARY.find_iter(text) {
            // `.`, `!` and `?` are one byte wide
            pieces.push(&text[start..=boundary.start()]);
            start = boundary.end();
        }
        pieces.push(&text[start..]);

        let sentences = trimmed_pieces(pieces);
        debug!("Split text into {} sentences", sentences.len());
        sentences
    }

    fn name(&self) -> &str {
        "sentence_splitter"
    }
}
