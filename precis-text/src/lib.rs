//! Paragraph splitting, extractive summarization, and keyword analysis.
//!
//! This crate provides the processing stages of precis and the
//! [`TextSummarizer`] that runs them together:
//!
//! - **Splitters**: paragraph and sentence splitting
//! - **Summarizer**: leading-sentence extractive summaries
//! - **Analysis**: complexity bucket and frequency-ranked keywords
//!
//! # Quick Start
//!
//! ```rust
//! use precis_text::prelude::*;
//!
//! let summarizer = TextSummarizer::new();
//! let result = summarizer.process("A.\n\nB.", &ProcessOptions::default());
//!
//! assert_eq!(result.paragraphs, vec!["A.", "B."]);
//! assert_eq!(result.summary, "A.");
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod analysis;
pub mod processor;
pub mod splitter;
pub mod summarizer;

pub use crate::analysis::{ComplexityAnalyzer, KeywordExtractor, StopWords};
pub use crate::processor::TextSummarizer;
pub use crate::splitter::{ParagraphSplitter, SentenceSplitter, SplitFunction};
pub use crate::summarizer::ExtractiveSummarizer;

/// Re-export commonly used types and traits.
pub mod prelude {
    pub use crate::analysis::{
        ComplexityAnalyzer, KeywordExtractor, KeywordExtractorConfig, StopWords,
    };
    pub use crate::processor::TextSummarizer;
    pub use crate::splitter::{ParagraphSplitter, SentenceSplitter, SplitFunction};
    pub use crate::summarizer::ExtractiveSummarizer;

    // Re-export core types
    pub use precis_core::prelude::*;
}
