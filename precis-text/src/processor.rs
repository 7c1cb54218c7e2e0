//! The text summarizer: paragraphs, extractive summary, and analysis in one pass.

use precis_core::config::ProcessorConfig;
use precis_core::{
    ProcessOptions, ProcessedText, Result, Sentiment, TextAnalysis, TextProcessor,
};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::analysis::{ComplexityAnalyzer, KeywordExtractor};
use crate::splitter::{ParagraphSplitter, SentenceSplitter, SplitFunction};
use crate::summarizer::ExtractiveSummarizer;

/// Produces a [`ProcessedText`] for any input text.
///
/// Processing is pure and never fails. Sentences are computed whenever either
/// summarization or analysis asks for them, so every combination of options
/// is well defined.
///
/// # Examples
///
/// ```rust
/// use precis_core::prelude::*;
/// use precis_text::TextSummarizer;
///
/// let summarizer = TextSummarizer::new();
/// let options = ProcessOptions::new().with_compression_rate(CompressionRate::new(0.34)?);
/// let result = summarizer.process("Le chat mange. Le chat dort. Le chat court.", &options);
///
/// assert_eq!(result.summary, "Le chat mange.");
/// assert_eq!(result.analysis.complexity, Complexity::Low);
/// assert_eq!(result.analysis.keywords, vec!["chat", "mange", "dort", "court"]);
/// # Ok::<(), PrecisError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextSummarizer {
    paragraph_splitter: ParagraphSplitter,
    sentence_splitter: SentenceSplitter,
    summarizer: ExtractiveSummarizer,
    complexity: ComplexityAnalyzer,
    keywords: KeywordExtractor,
}

impl TextSummarizer {
    /// Create a summarizer with default splitters and keyword settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer whose keyword extraction follows `config`.
    pub fn from_config(config: &ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            keywords: KeywordExtractor::from_processor_config(config)?,
            ..Self::default()
        })
    }

    /// Replace the paragraph splitter.
    pub fn with_paragraph_splitter(mut self, splitter: ParagraphSplitter) -> Self {
        self.paragraph_splitter = splitter;
        self
    }

    /// Replace the extractive summarizer.
    pub fn with_summarizer(mut self, summarizer: ExtractiveSummarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Replace the keyword extractor.
    pub fn with_keyword_extractor(mut self, keywords: KeywordExtractor) -> Self {
        self.keywords = keywords;
        self
    }

    /// Split `text` into paragraphs.
    pub fn paragraphs(&self, text: &str) -> Vec<String> {
        self.paragraph_splitter.split(text)
    }

    /// Split `text` into sentences.
    pub fn sentences(&self, text: &str) -> Vec<String> {
        self.sentence_splitter.split(text)
    }

    /// Analyze pre-split sentences together with the text they came from.
    pub fn analyze(&self, text: &str, sentences: &[String]) -> TextAnalysis {
        TextAnalysis {
            complexity: self.complexity.classify(sentences),
            sentiment: Sentiment::Neutral,
            keywords: self.keywords.extract(text),
        }
    }

    /// Process many texts in parallel. Results keep the input order.
    pub fn process_batch<S>(&self, texts: &[S], options: &ProcessOptions) -> Vec<ProcessedText>
    where
        S: AsRef<str> + Sync,
    {
        info!("Processing batch of {} texts", texts.len());
        texts
            .par_iter()
            .map(|text| self.process(text.as_ref(), options))
            .collect()
    }
}

impl TextProcessor for TextSummarizer {
    fn process(&self, text: &str, options: &ProcessOptions) -> ProcessedText {
        debug!(
            "Processing {} characters (summarize={}, split_paragraphs={}, analyze={})",
            text.len(),
            options.summarize,
            options.split_paragraphs,
            options.analyze
        );

        let mut result = ProcessedText::new(text);

        if options.split_paragraphs {
            result.paragraphs = self.paragraphs(text);
        }

        if options.summarize || options.analyze {
            let sentences = self.sentences(text);

            if options.summarize {
                result.summary = self.summarizer.summarize(&sentences, options.compression_rate);
            }

            if options.analyze {
                result.analysis = self.analyze(text, &sentences);
            }
        }

        result
    }

    fn name(&self) -> &'static str {
        "TextSummarizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use precis_core::{Complexity, CompressionRate};
    use pretty_assertions::assert_eq;

    fn process(text: &str) -> ProcessedText {
        TextSummarizer::new().process(text, &ProcessOptions::default())
    }

    #[test]
    fn test_empty_text() {
        let result = process("");
        assert_eq!(result.original, "");
        assert!(result.paragraphs.is_empty());
        assert_eq!(result.summary, "");
        assert_eq!(result.analysis.complexity, Complexity::Medium);
        assert_eq!(result.analysis.sentiment, Sentiment::Neutral);
        assert!(result.analysis.keywords.is_empty());
    }

    #[test]
    fn test_text_without_punctuation() {
        let result = process("Bonjour tout le monde");
        assert_eq!(result.summary, "Bonjour tout le monde");
        assert_eq!(result.paragraphs, vec!["Bonjour tout le monde"]);
        assert_eq!(result.analysis.complexity, Complexity::Low);
        assert_eq!(result.analysis.keywords, vec!["bonjour", "tout", "monde"]);
    }

    #[test]
    fn test_analysis_without_summary() {
        let summarizer = TextSummarizer::new();
        let options = ProcessOptions::new().with_summarize(false);
        let text = "Une phrase assez longue pour compter parmi les phrases moyennes du texte \
                    entier ici. Une autre phrase tout aussi longue afin de rester dans la \
                    moyenne voulue.";
        let result = summarizer.process(text, &options);

        assert_eq!(result.summary, "");
        assert_eq!(result.analysis.complexity, Complexity::Medium);
        assert_eq!(result.analysis.keywords[0], "phrase");
    }

    #[test]
    fn test_disabled_stages_keep_defaults() {
        let options = ProcessOptions::new()
            .with_summarize(false)
            .with_split_paragraphs(false)
            .with_analyze(false);
        let result = TextSummarizer::new().process("Un. Deux. Trois.", &options);
        assert_eq!(result, ProcessedText::new("Un. Deux. Trois."));
    }

    #[test]
    fn test_from_config_applies_keyword_settings() {
        let config = ProcessorConfig::new()
            .with_max_keywords(1)
            .with_stop_words(["chat"]);
        let summarizer = TextSummarizer::from_config(&config).unwrap();
        let result = summarizer.process(
            "Le chat mange. Le chat dort. Le chien court.",
            &ProcessOptions::default(),
        );
        assert_eq!(result.analysis.keywords, vec!["mange"]);
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = ProcessorConfig::new().with_compression_rate(0.0);
        assert!(TextSummarizer::from_config(&config).is_err());
    }

    #[test]
    fn test_batch_matches_single() {
        let summarizer = TextSummarizer::new();
        let options = ProcessOptions::new().with_compression_rate(CompressionRate::MEDIUM);
        let texts = vec![
            "Premier texte. Avec deux phrases.".to_string(),
            String::new(),
            "Troisième texte\n\nsur deux paragraphes.".to_string(),
        ];

        let batch = summarizer.process_batch(&texts, &options);
        assert_eq!(batch.len(), texts.len());
        for (text, result) in texts.iter().zip(&batch) {
            assert_eq!(result, &summarizer.process(text, &options));
        }
    }
}
