//! Complexity classification from mean sentence length.

use precis_core::Complexity;
use tracing::debug;

/// Classifies text difficulty by the average number of words per sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityAnalyzer;

impl ComplexityAnalyzer {
    /// Create a new complexity analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Mean whitespace-separated word count over `sentences`.
    ///
    /// Zero when there are no sentences.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_sentence_length(&self, sentences: &[String]) -> f64 {
        let words: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();
        words as f64 / sentences.len().max(1) as f64
    }

    /// Bucket the sentences into [`Complexity::Low`], `Medium` or `High`.
    ///
    /// A text without sentences is `Medium`.
    pub fn classify(&self, sentences: &[String]) -> Complexity {
        if sentences.is_empty() {
            return Complexity::Medium;
        }
        let avg = self.average_sentence_length(sentences);
        let complexity = Complexity::from_average_sentence_length(avg);
        debug!("Average sentence length {avg:.2} words, complexity {complexity}");
        complexity
    }
}
