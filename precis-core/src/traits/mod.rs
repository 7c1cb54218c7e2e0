//! Core traits.

use crate::types::{ProcessOptions, ProcessedText};

/// Turns raw text into a [`ProcessedText`] record.
///
/// Implementations are pure: the same text and options always give a
/// structurally equal result, and processing never fails.
pub trait TextProcessor: Send + Sync + std::fmt::Debug {
    /// Process a single text.
    fn process(&self, text: &str, options: &ProcessOptions) -> ProcessedText;

    /// Human-readable name of this processor.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
