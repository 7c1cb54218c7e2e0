//! # Precis
//!
//! Extractive summarization, paragraph splitting, and lightweight keyword
//! analysis for free text.
//!
//! ## Quick Start
//!
//! ```rust
//! use precis::prelude::*;
//!
//! let summarizer = TextSummarizer::new();
//! let result = summarizer.process(
//!     "Le chat mange. Le chat dort. Le chat court.",
//!     &ProcessOptions::default(),
//! );
//!
//! assert_eq!(result.summary, "Le chat mange.");
//! assert_eq!(result.analysis.keywords[0], "chat");
//! ```
//!
//! ## Architecture
//!
//! - **precis-core**: error type, result records, options, configuration
//! - **precis-text**: splitters, summarizer, analyzers, and the `TextSummarizer`
//! - **precis** (this crate): re-exports and the `precis` command-line tool

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export all public APIs from sub-crates
pub use precis_core as core;
pub use precis_text as text;

pub mod cli;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use precis_text::prelude::*;
}

/// Version information for precis.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
