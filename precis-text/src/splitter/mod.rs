//! Text splitters.
//!
//! Paragraph and sentence splitting are independent steps: the summarizer and
//! the analyzers each ask for the pieces they need instead of relying on one
//! another having run first.

pub mod paragraph;
pub mod sentence;

pub use paragraph::ParagraphSplitter;
pub use sentence::SentenceSplitter;

use std::fmt::Debug;

/// Split function trait for different splitting strategies.
///
/// Splitting never fails. Implementations return trimmed, non-empty pieces
/// in the order they appear in the input.
pub trait SplitFunction: Send + Sync + Debug {
    /// Split text using this function's strategy.
    fn split(&self, text: &str) -> Vec<String>;

    /// Get the name of this split function.
    fn name(&self) -> &str;
}

/// Split on a literal separator, dropping whitespace-only pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitBySeparator {
    separator: String,
}

impl SplitBySeparator {
    /// Create a new split by separator function.
    pub fn new<S: Into<String>>(separator: S) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// The separator this function splits on.
    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl SplitFunction for SplitBySeparator {
    fn split(&self, text: &str) -> Vec<String> {
        if self.separator.is_empty() {
            return trimmed_pieces(std::iter::once(text));
        }
        trimmed_pieces(text.split(self.separator.as_str()))
    }

    fn name(&self) -> &str {
        "split_by_separator"
    }
}

/// Trim every piece and keep the non-empty ones.
pub(crate) fn trimmed_pieces<'a, I>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToString::to_string)
        .collect()
}
