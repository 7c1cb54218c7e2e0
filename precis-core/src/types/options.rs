//! Processing options and the validated compression rate.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{PrecisError, Result};

/// Fraction of sentences kept in an extractive summary.
///
/// Always finite and within `(0, 1]`. Construct it with [`CompressionRate::new`]
/// at the boundary so that processing itself never has to deal with bad values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct CompressionRate(f64);

impl CompressionRate {
    /// 20%, a very short summary.
    pub const VERY_SHORT: Self = Self(0.2);
    /// 30%, a short summary. This is the default.
    pub const SHORT: Self = Self(0.3);
    /// 50%, a medium summary.
    pub const MEDIUM: Self = Self(0.5);
    /// 70%, a long summary.
    pub const LONG: Self = Self(0.7);

    /// Create a compression rate, rejecting NaN and values outside `(0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if rate.is_nan() || rate <= 0.0 || rate > 1.0 {
            return Err(PrecisError::validation(format!(
                "compression rate must be within (0, 1], got {rate}"
            )));
        }
        Ok(Self(rate))
    }

    /// The raw ratio.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Number of sentences to keep out of `sentence_count`.
    ///
    /// Never less than one, never more than `sentence_count` when it is non-zero.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn sentences_to_keep(self, sentence_count: usize) -> usize {
        let kept = (sentence_count as f64 * self.0).floor() as usize;
        kept.max(1)
    }
}

impl Default for CompressionRate {
    fn default() -> Self {
        Self::SHORT
    }
}

impl TryFrom<f64> for CompressionRate {
    type Error = PrecisError;

    fn try_from(rate: f64) -> Result<Self> {
        Self::new(rate)
    }
}

impl From<CompressionRate> for f64 {
    fn from(rate: CompressionRate) -> Self {
        rate.0
    }
}

impl fmt::Display for CompressionRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which stages to run for a single text, and how hard to compress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProcessOptions {
    /// Produce an extractive summary.
    pub summarize: bool,
    /// Split the text into paragraphs.
    pub split_paragraphs: bool,
    /// Compute complexity and keywords.
    pub analyze: bool,
    /// Fraction of sentences retained in the summary.
    pub compression_rate: CompressionRate,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            summarize: true,
            split_paragraphs: true,
            analyze: true,
            compression_rate: CompressionRate::default(),
        }
    }
}

impl ProcessOptions {
    /// Create options with every stage enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to summarize.
    pub fn with_summarize(mut self, summarize: bool) -> Self {
        self.summarize = summarize;
        self
    }

    /// Set whether to split paragraphs.
    pub fn with_split_paragraphs(mut self, split_paragraphs: bool) -> Self {
        self.split_paragraphs = split_paragraphs;
        self
    }

    /// Set whether to analyze.
    pub fn with_analyze(mut self, analyze: bool) -> Self {
        self.analyze = analyze;
        self
    }

    /// Set the compression rate.
    pub fn with_compression_rate(mut self, compression_rate: CompressionRate) -> Self {
        self.compression_rate = compression_rate;
        self
    }
}
