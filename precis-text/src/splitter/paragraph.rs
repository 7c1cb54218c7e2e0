//! Paragraph splitter.

use tracing::debug;

use super::{SplitBySeparator, SplitFunction};

/// Splits text into paragraphs.
///
/// Blank lines (`"\n\n"`) separate paragraphs. When that produces nothing,
/// single newlines are tried next. Each paragraph is trimmed and
/// whitespace-only fragments are dropped.
///
/// # Examples
///
/// ```rust
/// use precis_text::splitter::{ParagraphSplitter, SplitFunction};
///
/// let splitter = ParagraphSplitter::new();
/// assert_eq!(splitter.split("A.\n\nB."), vec!["A.", "B."]);
/// ```
#[derive(Debug, Clone)]
pub struct ParagraphSplitter {
    separators: Vec<SplitBySeparator>,
}

impl Default for ParagraphSplitter {
    fn default() -> Self {
        Self {
            separators: vec![SplitBySeparator::new("\n\n"), SplitBySeparator::new("\n")],
        }
    }
}

impl ParagraphSplitter {
    /// Create a paragraph splitter using blank lines, then single newlines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph splitter that tries `separators` in order.
    pub fn with_separators<I, S>(separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            separators: separators.into_iter().map(SplitBySeparator::new).collect(),
        }
    }
}

impl SplitFunction for ParagraphSplitter {
    fn split(&self, text: &str) -> Vec<String> {
        for separator in &self.separators {
            let paragraphs = separator.split(text);
            if !paragraphs.is_empty() {
                debug!(
                    "Split text into {} paragraphs on {:?}",
                    paragraphs.len(),
                    separator.separator()
                );
                return paragraphs;
            }
        }
        Vec::new()
    }

    fn name(&self) -> &str {
        "paragraph_splitter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blank_line_paragraphs() {
        let splitter = ParagraphSplitter::new();
        assert_eq!(splitter.split("A.\n\nB."), vec!["A.", "B."]);
    }

    #[test]
    fn test_single_line_is_one_paragraph() {
        let splitter = ParagraphSplitter::new();
        assert_eq!(
            splitter.split("Bonjour tout le monde"),
            vec!["Bonjour tout le monde"]
        );
    }

    #[test]
    fn test_lines_within_paragraph_are_kept() {
        let splitter = ParagraphSplitter::new();
        assert_eq!(
            splitter.split("line one\nline two\n\n  second  "),
            vec!["line one\nline two", "second"]
        );
    }

    #[test]
    fn test_empty_and_blank_text() {
        let splitter = ParagraphSplitter::new();
        assert!(splitter.split("").is_empty());
        assert!(splitter.split(" \n\n \n\t").is_empty());
    }

    #[test]
    fn test_custom_separators_fall_back_in_order() {
        let splitter = ParagraphSplitter::with_separators(["---", "\n"]);
        assert_eq!(splitter.split("a\nb"), vec!["a\nb"]);
        assert_eq!(splitter.split("a---b"), vec!["a", "b"]);

        let splitter = ParagraphSplitter::with_separators(["", "\n"]);
        assert_eq!(splitter.split("a\nb"), vec!["a\nb"]);
    }
}
