//! Configuration loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::corpus::source::DocumentSource;

/// Largest number of decimal places printed for a score.
pub const MAX_PRECISION: usize = 17;

/// Main configuration structure.
///
/// ```toml
/// [[documents]]
/// label = "Black Hole"
/// path = "docs/black_hole.txt"
///
/// [[documents]]
/// text = "Orbital resonance occurs when orbiting bodies ..."
///
/// [output]
/// format = "json"
/// precision = 6
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Documents in corpus order.
    pub documents: Vec<DocumentSource>,
    /// Report options.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Decimal places of similarity scores in the text report.
    pub precision: usize,
    /// Print the document texts before the scores.
    pub show_documents: bool,
    /// Print TF, IDF and TF-IDF vectors in the text report.
    pub show_vectors: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 4,
            show_documents: true,
            show_vectors: false,
        }
    }
}

/// Report encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Cbor,
}

impl Config {
    /// Load configuration from an explicit file path.
    ///
    /// Errors if the file does not exist.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), documents = config.documents.len(), "config loaded");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.output.precision > MAX_PRECISION {
            return Err(Error::invalid_argument(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        Ok(())
    }
}
