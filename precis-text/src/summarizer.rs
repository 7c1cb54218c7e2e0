//! Extractive summarization.
//!
//! The summary is the leading portion of the text's sentences, kept verbatim.
//! How many sentences survive is decided by the [`CompressionRate`].

use precis_core::CompressionRate;
use tracing::debug;

/// Picks the first sentences of a text as its summary.
///
/// # Examples
///
/// ```rust
/// use precis_core::CompressionRate;
/// use precis_text::ExtractiveSummarizer;
///
/// let sentences = ["Le chat mange.", "Le chat dort.", "Le chat court."].map(String::from);
/// let rate = CompressionRate::new(0.34)?;
/// assert_eq!(ExtractiveSummarizer::new().summarize(&sentences, rate), "Le chat mange.");
/// # Ok::<(), precis_core::PrecisError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    joiner: String,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            joiner: " ".to_string(),
        }
    }
}

impl ExtractiveSummarizer {
    /// Create a summarizer that joins sentences with a single space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string placed between retained sentences.
    pub fn with_joiner<S: Into<String>>(mut self, joiner: S) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// The sentences retained for `rate`.
    ///
    /// At least one sentence is kept whenever there is one to keep.
    pub fn select<'a>(&self, sentences: &'a [String], rate: CompressionRate) -> &'a [String] {
        let keep = rate.sentences_to_keep(sentences.len()).min(sentences.len());
        &sentences[..keep]
    }

    /// Join the retained sentences into a summary.
    ///
    /// Returns an empty string when there are no sentences.
    pub fn summarize(&self, sentences: &[String], rate: CompressionRate) -> String {
        let selected = self.select(sentences, rate);
        debug!(
            "Summary keeps {} of {} sentences at rate {}",
            selected.len(),
            sentences.len(),
            rate
        );
        selected.join(&self.joiner)
    }
}
