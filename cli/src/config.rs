use crate::units::DEFAULT_PRECISION;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub graph: GraphRange,

    #[serde(default)]
    pub wiki: WikiConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Limits {
    // Largest text input accepted by any tool
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Decimal digits kept when formatting conversion results
    #[serde(default = "default_precision")]
    pub precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GraphRange {
    #[serde(default = "default_x_min")]
    pub x_min: f64,

    #[serde(default = "default_x_max")]
    pub x_max: f64,

    #[serde(default = "default_step")]
    pub step: f64,

    // Upper bound on samples per plot
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WikiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_article_base")]
    pub article_base: String,

    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
}

/// Input rejected for exceeding `limits.max_input_bytes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Input is {len} bytes, larger than the {max} byte limit")]
pub struct InputTooLarge {
    pub len: usize,
    pub max: usize,
}

fn default_max_input_bytes() -> usize {
    1024 * 1024
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

fn default_x_min() -> f64 {
    -10.0
}

fn default_x_max() -> f64 {
    10.0
}

fn default_step() -> f64 {
    0.5
}

fn default_max_points() -> usize {
    100_000
}

fn default_endpoint() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_article_base() -> String {
    "https://en.wikipedia.org/?curid=".to_string()
}

fn default_result_limit() -> u32 {
    10
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl Default for GraphRange {
    fn default() -> Self {
        Self {
            x_min: default_x_min(),
            x_max: default_x_max(),
            step: default_step(),
            max_points: default_max_points(),
        }
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            article_base: default_article_base(),
            result_limit: default_result_limit(),
        }
    }
}

impl Limits {
    pub fn check(&self, input: &str) -> Result<(), InputTooLarge> {
        if input.len() > self.max_input_bytes {
            tracing::debug!(len = input.len(), max = self.max_input_bytes, "input over limit");
            return Err(InputTooLarge {
                len: input.len(),
                max: self.max_input_bytes,
            });
        }
        Ok(())
    }
}

impl GraphRange {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(ConfigError::Invalid {
                key: "graph.step",
                reason: format!("must be a positive number, got {}", self.step),
            });
        }
        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_min < self.x_max) {
            return Err(ConfigError::Invalid {
                key: "graph.x_min",
                reason: format!(
                    "range [{}, {}] must be finite with x_min < x_max",
                    self.x_min, self.x_max
                ),
            });
        }
        if self.max_points == 0 {
            return Err(ConfigError::Invalid {
                key: "graph.max_points",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_input_bytes == 0 {
            return Err(ConfigError::Invalid {
                key: "limits.max_input_bytes",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.display.precision > 15 {
            return Err(ConfigError::Invalid {
                key: "display.precision",
                reason: format!("at most 15 digits, got {}", self.display.precision),
            });
        }
        if self.wiki.result_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "wiki.result_limit",
                reason: "must be greater than zero".to_string(),
            });
        }
        self.graph.validate()
    }
}
