//! CLI implementation using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::vectorizer::corpus::source::DocumentSource;

/// Pairwise TF-IDF cosine similarity of a small set of documents.
#[derive(Parser, Debug)]
#[command(name = "tfidf-sim")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Document files, one document per file
    pub files: Vec<PathBuf>,

    /// Inline document text (repeatable)
    #[arg(short, long = "text")]
    pub texts: Vec<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Decimal places for scores in the text report
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Also print TF, IDF and TF-IDF vectors
    #[arg(long)]
    pub show_vectors: bool,

    /// Do not print the document texts
    #[arg(long)]
    pub hide_documents: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge command line options over the config file.
    ///
    /// Documents from the config come first, then files, then inline texts.
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        config
            .documents
            .extend(self.files.into_iter().map(DocumentSource::file));
        config
            .documents
            .extend(self.texts.into_iter().map(DocumentSource::inline));

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
        if self.show_vectors {
            config.output.show_vectors = true;
        }
        if self.hide_documents {
            config.output.show_documents = false;
        }
        config.validate()?;
        Ok(config)
    }
}
