//! Lexical analysis: complexity, sentiment placeholder, and keywords.

pub mod complexity;
pub mod keywords;
pub mod stopwords;

pub use complexity::ComplexityAnalyzer;
pub use keywords::{KeywordExtractor, KeywordExtractorConfig};
pub use stopwords::StopWords;
