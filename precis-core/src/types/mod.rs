//! Core data types.

pub mod options;
pub mod result;

pub use options::{CompressionRate, ProcessOptions};
pub use result::{Complexity, ProcessedText, Sentiment, TextAnalysis};
