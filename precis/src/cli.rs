//! Command-line interface: read text, process it, print the record as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use precis_core::config::ProcessorConfig;
use precis_core::{CompressionRate, ProcessedText, TextProcessor};
use precis_text::TextSummarizer;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

/// Named compression rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 20% of sentences
    VeryShort,
    /// 30% of sentences
    Short,
    /// 50% of sentences
    Medium,
    /// 70% of sentences
    Long,
}

impl Preset {
    /// The compression rate this preset stands for.
    pub fn rate(self) -> CompressionRate {
        match self {
            Self::VeryShort => CompressionRate::VERY_SHORT,
            Self::Short => CompressionRate::SHORT,
            Self::Medium => CompressionRate::MEDIUM,
            Self::Long => CompressionRate::LONG,
        }
    }
}

/// Summarize text and report paragraphs, complexity, and keywords as JSON.
#[derive(Debug, Parser)]
#[command(name = "precis")]
#[command(version)]
pub struct Cli {
    /// File to read; standard input when omitted
    pub input: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip the summary
    #[arg(long)]
    pub no_summary: bool,

    /// Skip paragraph splitting
    #[arg(long)]
    pub no_paragraphs: bool,

    /// Skip complexity and keyword analysis
    #[arg(long)]
    pub no_analysis: bool,

    /// Fraction of sentences kept in the summary, within (0, 1]
    #[arg(long, conflicts_with = "preset")]
    pub compression_rate: Option<f64>,

    /// Named compression rate
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Reject input shorter than this many characters
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Report complexity and sentiment with French labels
    #[arg(long)]
    pub french_labels: bool,
}

impl Cli {
    /// Build the effective configuration: file, then environment, then flags.
    pub async fn resolve_config(&self) -> Result<ProcessorConfig> {
        let mut config = match &self.config {
            Some(path) => ProcessorConfig::from_json_file(path).await?,
            None => ProcessorConfig::default(),
        };
        config.apply_env_overrides()?;
        self.apply_flags(&mut config);
        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    /// Apply command-line flags on top of `config`.
    pub fn apply_flags(&self, config: &mut ProcessorConfig) {
        if self.no_summary {
            config.summarize = false;
        }
        if self.no_paragraphs {
            config.split_paragraphs = false;
        }
        if self.no_analysis {
            config.analyze = false;
        }
        if let Some(rate) = self.compression_rate {
            config.compression_rate = rate;
        }
        if let Some(preset) = self.preset {
            config.compression_rate = preset.rate().get();
        }
        if let Some(min_length) = self.min_length {
            config.min_text_length = min_length;
        }
    }

    /// Read the input text from the file argument or standard input.
    pub async fn read_input(&self) -> Result<String> {
        match &self.input {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display())),
            None => {
                let mut text = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut text)
                    .await
                    .context("Failed to read standard input")?;
                Ok(text)
            }
        }
    }
}

/// Process `text` under `config`.
pub fn process_text(text: &str, config: &ProcessorConfig) -> Result<ProcessedText> {
    config.check_input(text)?;
    let summarizer = TextSummarizer::from_config(config)?;
    let options = config.options()?;
    Ok(summarizer.process(text, &options))
}

/// JSON form of `result`, with French analysis labels when `french_labels` is set.
pub fn render(result: &ProcessedText, french_labels: bool) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(result)?;
    if french_labels {
        let analysis = &mut value["analysis"];
        analysis["complexity"] = result.analysis.complexity.french_label().into();
        analysis["sentiment"] = result.analysis.sentiment.french_label().into();
    }
    Ok(value)
}

/// Run the command line tool and return the JSON it prints.
pub async fn run(cli: &Cli) -> Result<String> {
    let config = cli.resolve_config().await?;
    let text = cli.read_input().await?;
    info!("Processing {} characters", text.chars().count());

    let result = process_text(&text, &config)?;
    let value = render(&result, cli.french_labels)?;
    let json = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}
