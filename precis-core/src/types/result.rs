//! The record returned by text processing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse difficulty bucket based on mean sentence length in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Complexity {
    /// Fewer than 10 words per sentence on average.
    Low,
    /// Between 10 and 20 words per sentence, or no sentences at all.
    #[default]
    Medium,
    /// More than 20 words per sentence on average.
    High,
}

impl Complexity {
    /// Classify an average sentence length in words.
    #[must_use]
    pub fn from_average_sentence_length(avg_words: f64) -> Self {
        if avg_words > 20.0 {
            Self::High
        } else if avg_words < 10.0 {
            Self::Low
        } else {
            Self::Medium
        }
    }

    /// English label, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// French label.
    #[must_use]
    pub fn french_label(self) -> &'static str {
        match self {
            Self::Low => "Basse",
            Self::Medium => "Moyenne",
            Self::High => "Élevée",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment placeholder. No sentiment model is run, so this is always neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    /// The only value ever produced.
    #[default]
    Neutral,
}

impl Sentiment {
    /// English label, as serialized.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        "Neutral"
    }

    /// French label.
    #[must_use]
    pub fn french_label(self) -> &'static str {
        "Neutre"
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical analysis of a text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Difficulty bucket.
    pub complexity: Complexity,
    /// Always [`Sentiment::Neutral`].
    pub sentiment: Sentiment,
    /// Most frequent tokens, most frequent first.
    pub keywords: Vec<String>,
}

/// Result of processing one text.
///
/// Stages that were disabled leave their field at its empty default:
/// an empty `summary`, no `paragraphs`, and a `Medium`/`Neutral` analysis
/// without keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessedText {
    /// Verbatim copy of the input.
    pub original: String,
    /// Retained sentences joined by a single space.
    pub summary: String,
    /// Trimmed, non-empty paragraphs in order.
    pub paragraphs: Vec<String>,
    /// Lexical analysis.
    pub analysis: TextAnalysis,
}

impl ProcessedText {
    /// Start a record for `original` with every stage at its default.
    pub fn new<S: Into<String>>(original: S) -> Self {
        Self {
            original: original.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0.0, Complexity::Low)]
    #[test_case(9.99, Complexity::Low)]
    #[test_case(10.0, Complexity::Medium)]
    #[test_case(20.0, Complexity::Medium)]
    #[test_case(20.5, Complexity::High)]
    fn test_complexity_buckets(avg: f64, expected: Complexity) {
        assert_eq!(Complexity::from_average_sentence_length(avg), expected);
    }

    #[test]
    fn test_json_shape() {
        let mut record = ProcessedText::new("Un texte.");
        record.summary = "Un texte.".to_string();
        record.paragraphs = vec!["Un texte.".to_string()];
        record.analysis.complexity = Complexity::Low;
        record.analysis.keywords = vec!["texte".to_string()];

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "original": "Un texte.",
                "summary": "Un texte.",
                "paragraphs": ["Un texte."],
                "analysis": {
                    "complexity": "Low",
                    "sentiment": "Neutral",
                    "keywords": ["texte"]
                }
            })
        );
    }

    #[test]
    fn test_french_labels() {
        assert_eq!(Complexity::High.french_label(), "Élevée");
        assert_eq!(Sentiment::Neutral.french_label(), "Neutre");
    }
}
