//! Integration tests for the configuration system.

use precis_core::config::ProcessorConfig;
use precis_core::{CompressionRate, PrecisError};
use tempfile::TempDir;
use tokio::fs;

#[tokio::test]
async fn test_load_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("precis.json");

    let config = serde_json::json!({
        "summarize": true,
        "split_paragraphs": false,
        "compression_rate": 0.5,
        "max_keywords": 3,
        "stop_words": ["the", "and"],
        "min_text_length": 50
    });
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap())
        .await
        .unwrap();

    let loaded = ProcessorConfig::from_json_file(&path).await.unwrap();
    loaded.validate().unwrap();

    assert!(!loaded.split_paragraphs);
    assert!(loaded.analyze);
    assert_eq!(loaded.max_keywords, 3);
    assert_eq!(loaded.stop_words, vec!["the".to_string(), "and".to_string()]);
    assert_eq!(loaded.min_text_length, 50);

    let options = loaded.options().unwrap();
    assert_eq!(options.compression_rate, CompressionRate::MEDIUM);
    assert!(!options.split_paragraphs);
}

#[tokio::test]
async fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = ProcessorConfig::from_json_file(temp_dir.path().join("absent.json"))
        .await
        .unwrap_err();

    assert!(matches!(err, PrecisError::Configuration { .. }));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn test_invalid_rate_in_file_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    fs::write(&path, r#"{ "compression_rate": 2.0 }"#).await.unwrap();

    let loaded = ProcessorConfig::from_json_file(&path).await.unwrap();
    assert!(loaded.validate().is_err());
    assert!(loaded.options().is_err());
}

#[test]
fn test_config_roundtrip_through_json() {
    let config = ProcessorConfig::new()
        .with_analyze(false)
        .with_stop_words(["le", "la"]);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ProcessorConfig::from_json_str(&json).unwrap(), config);
}
