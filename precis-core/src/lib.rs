//! # Precis Core
//!
//! Core types, configuration, and error handling for the precis extractive
//! summarization toolkit.
//!
//! This crate provides the pieces shared by every processor:
//!
//! - **Data structures**: [`ProcessedText`], [`TextAnalysis`], [`Complexity`], [`Sentiment`]
//! - **Options**: [`ProcessOptions`] and the validated [`CompressionRate`]
//! - **Core trait**: [`TextProcessor`]
//! - **Configuration**: [`config::ProcessorConfig`] with JSON and environment loading
//! - **Error handling**: [`PrecisError`] and the [`Result`] alias
//!
//! ## Quick Start
//!
//! ```rust
//! use precis_core::prelude::*;
//!
//! let options = ProcessOptions::new()
//!     .with_analyze(false)
//!     .with_compression_rate(CompressionRate::new(0.5)?);
//! assert!(options.summarize);
//! # Ok::<(), PrecisError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used types and traits
pub mod prelude;

// Core modules
pub mod config;
pub mod error;
pub mod traits;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{PrecisError, Result};
pub use traits::TextProcessor;
pub use types::{
    Complexity, CompressionRate, ProcessOptions, ProcessedText, Sentiment, TextAnalysis,
};

/// Version information for the precis core library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the precis core library.
pub const NAME: &str = env!("CARGO_PKG_NAME");
