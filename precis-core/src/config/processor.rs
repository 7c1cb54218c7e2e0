//! Processor configuration loaded from JSON files and environment variables.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::types::{CompressionRate, ProcessOptions};
use crate::{PrecisError, Result};

/// Stop words ignored by keyword extraction unless configured otherwise.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "les", "des", "une", "est", "que", "qui", "pour", "dans", "avec", "par",
];

/// Default number of keywords reported.
pub const DEFAULT_MAX_KEYWORDS: usize = 5;

/// Default minimum keyword length in characters.
pub const DEFAULT_MIN_KEYWORD_LENGTH: usize = 3;

/// Prefix of every environment variable read by [`ProcessorConfig::apply_env_overrides`].
pub const ENV_PREFIX: &str = "PRECIS_";

/// Override keys recognized after [`ENV_PREFIX`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "SUMMARIZE",
    "SPLIT_PARAGRAPHS",
    "ANALYZE",
    "COMPRESSION_RATE",
    "MAX_KEYWORDS",
    "MIN_TEXT_LENGTH",
];

/// Configuration for a text processor.
///
/// Every field has a default, so a configuration file only needs the keys it
/// wants to change.
///
/// # Examples
///
/// ```rust
/// use precis_core::config::ProcessorConfig;
///
/// let config = ProcessorConfig::from_json_str(r#"{ "compression_rate": 0.5 }"#).unwrap();
/// assert_eq!(config.compression_rate, 0.5);
/// assert_eq!(config.max_keywords, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorConfig {
    /// Produce an extractive summary.
    pub summarize: bool,
    /// Split the text into paragraphs.
    pub split_paragraphs: bool,
    /// Compute complexity and keywords.
    pub analyze: bool,
    /// Fraction of sentences retained in the summary, within `(0, 1]`.
    pub compression_rate: f64,
    /// Number of keywords reported.
    pub max_keywords: usize,
    /// Minimum keyword length in characters.
    pub min_keyword_length: usize,
    /// Tokens never reported as keywords.
    pub stop_words: Vec<String>,
    /// Inputs with fewer characters are rejected by [`ProcessorConfig::check_input`].
    pub min_text_length: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            summarize: true,
            split_paragraphs: true,
            analyze: true,
            compression_rate: CompressionRate::default().get(),
            max_keywords: DEFAULT_MAX_KEYWORDS,
            min_keyword_length: DEFAULT_MIN_KEYWORD_LENGTH,
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
            min_text_length: 0,
        }
    }
}

impl ProcessorConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub async fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading processor configuration from {}", path.display());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            PrecisError::configuration(format!(
                "Failed to read configuration file {}: {e}",
                path.display()
            ))
        })?;

        Self::from_json_str(&content)
    }

    /// Override fields from `PRECIS_*` environment variables.
    ///
    /// Recognized variables: `PRECIS_SUMMARIZE`, `PRECIS_SPLIT_PARAGRAPHS`,
    /// `PRECIS_ANALYZE`, `PRECIS_COMPRESSION_RATE`, `PRECIS_MAX_KEYWORDS`,
    /// `PRECIS_MIN_TEXT_LENGTH`. Any other `PRECIS_*` variable is ignored
    /// with a warning.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        for key in Self::unknown_override_keys(std::env::vars().map(|(key, _)| key)) {
            warn!("Ignoring unrecognized environment variable {key}");
        }
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Keys carrying [`ENV_PREFIX`] that no override reads.
    pub fn unknown_override_keys<I>(keys: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        keys.into_iter()
            .filter(|key| {
                key.strip_prefix(ENV_PREFIX)
                    .is_some_and(|name| !OVERRIDE_KEYS.contains(&name))
            })
            .collect()
    }

    /// Override fields from an arbitrary key lookup, using the same keys as
    /// [`ProcessorConfig::apply_env_overrides`].
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };

        if let Some((key, value)) = get("SUMMARIZE") {
            self.summarize = parse_bool(&key, &value)?;
        }
        if let Some((key, value)) = get("SPLIT_PARAGRAPHS") {
            self.split_paragraphs = parse_bool(&key, &value)?;
        }
        if let Some((key, value)) = get("ANALYZE") {
            self.analyze = parse_bool(&key, &value)?;
        }
        if let Some((key, value)) = get("COMPRESSION_RATE") {
            self.compression_rate = parse_value(&key, &value)?;
        }
        if let Some((key, value)) = get("MAX_KEYWORDS") {
            self.max_keywords = parse_value(&key, &value)?;
        }
        if let Some((key, value)) = get("MIN_TEXT_LENGTH") {
            self.min_text_length = parse_value(&key, &value)?;
        }

        Ok(())
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        CompressionRate::new(self.compression_rate)
            .map_err(|e| PrecisError::configuration(e.to_string()))?;

        if self.max_keywords == 0 {
            return Err(PrecisError::configuration(
                "max_keywords must be greater than 0",
            ));
        }

        if self.min_keyword_length == 0 {
            return Err(PrecisError::configuration(
                "min_keyword_length must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Processing options described by this configuration.
    pub fn options(&self) -> Result<ProcessOptions> {
        let compression_rate = CompressionRate::new(self.compression_rate)?;
        Ok(ProcessOptions {
            summarize: self.summarize,
            split_paragraphs: self.split_paragraphs,
            analyze: self.analyze,
            compression_rate,
        })
    }

    /// Reject inputs shorter than `min_text_length` characters.
    pub fn check_input(&self, text: &str) -> Result<()> {
        let length = text.chars().count();
        if length < self.min_text_length {
            debug!(length, minimum = self.min_text_length, "Rejecting short input");
            return Err(PrecisError::InputTooShort {
                length,
                minimum: self.min_text_length,
            });
        }
        Ok(())
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
    pub fn with_compression_rate(mut self, compression_rate: f64) -> Self {
        self.compression_rate = compression_rate;
        self
    }

    /// Set the number of keywords reported.
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = max_keywords;
        self
    }

    /// Set the stop words.
    pub fn with_stop_words<I, S>(mut self, stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = stop_words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum accepted input length in characters.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PrecisError::configuration(format!(
            "{key} must be a boolean, got '{value}'"
        ))),
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        PrecisError::configuration(format!("{key} has invalid value '{value}': {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stop_words.len(), 10);
        assert_eq!(config.options().unwrap(), ProcessOptions::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ProcessorConfig::from_json_str(r#"{ "analyze": false, "max_keywords": 3 }"#).unwrap();
        assert!(!config.analyze);
        assert_eq!(config.max_keywords, 3);
        assert!(config.summarize);
        assert_eq!(config.compression_rate, 0.3);
    }

    #[test]
    fn test_invalid_json() {
        let err = ProcessorConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, PrecisError::Serialization(_)));
    }

    #[test]
    fn test_validation() {
        assert!(
            ProcessorConfig::new()
                .with_compression_rate(0.0)
                .validate()
                .is_err()
        );
        assert!(
            ProcessorConfig::new()
                .with_compression_rate(1.5)
                .validate()
                .is_err()
        );
        assert!(ProcessorConfig::new().with_max_keywords(0).validate().is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = ProcessorConfig::default();
        config
            .apply_overrides_from(lookup(&[
                ("PRECIS_SUMMARIZE", "false"),
                ("PRECIS_COMPRESSION_RATE", "0.7"),
                ("PRECIS_MIN_TEXT_LENGTH", "50"),
            ]))
            .unwrap();

        assert!(!config.summarize);
        assert_eq!(config.compression_rate, 0.7);
        assert_eq!(config.min_text_length, 50);
        assert!(config.analyze);
    }

    #[test]
    fn test_unknown_override_keys() {
        let keys = [
            "PRECIS_SUMMARIZE",
            "PRECIS_COMPRESION_RATE",
            "PRECIS_",
            "HOME",
            "precis_analyze",
            "PRECIS_MIN_TEXT_LENGTH",
        ]
        .map(String::from);

        assert_eq!(
            ProcessorConfig::unknown_override_keys(keys),
            vec!["PRECIS_COMPRESION_RATE".to_string(), "PRECIS_".to_string()]
        );
    }

    #[test]
    fn test_override_parse_errors() {
        let mut config = ProcessorConfig::default();
        let err = config
            .apply_overrides_from(lookup(&[("PRECIS_ANALYZE", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("PRECIS_ANALYZE"));

        let err = config
            .apply_overrides_from(lookup(&[("PRECIS_MAX_KEYWORDS", "-2")]))
            .unwrap_err();
        assert!(matches!(err, PrecisError::Configuration { .. }));
    }

    #[test]
    fn test_check_input_counts_characters() {
        let config = ProcessorConfig::new().with_min_text_length(5);
        assert!(config.check_input("été à").is_ok());
        assert!(matches!(
            config.check_input("abc"),
            Err(PrecisError::InputTooShort {
                length: 3,
                minimum: 5
            })
        ));
    }
}
