use crate::config::InputTooLarge;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Unsupported format: {0}. Please use JSON, CSV, YAML, XML or TOML files")]
    UnsupportedFormat(String),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("XML element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file has no header row")]
    MissingHeader,

    #[error(transparent)]
    InputTooLarge(#[from] InputTooLarge),
}
