//! Prelude module for convenient imports.
//!
//! # Examples
//!
//! ```rust
//! use precis_core::prelude::*;
//!
//! let record = ProcessedText::new("Hello, world!");
//! assert_eq!(record.analysis.sentiment, Sentiment::Neutral);
//! ```

// Re-export core error types
pub use crate::error::{PrecisError, Result};

// Re-export all data types
pub use crate::types::{
    Complexity, CompressionRate, ProcessOptions, ProcessedText, Sentiment, TextAnalysis,
};

// Re-export core traits
pub use crate::traits::TextProcessor;

// Re-export configuration types
pub use crate::config::ProcessorConfig;
