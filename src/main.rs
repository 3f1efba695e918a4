//! tfidf-sim - pairwise TF-IDF cosine similarity of documents.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tf_idf_similarity::cli::Cli;
use tf_idf_similarity::report::write_report;
use tf_idf_similarity::vectorizer::corpus::source::load_all;
use tf_idf_similarity::{Result, TFIDFVectorizer};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // logs go to stderr, the report owns stdout
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let documents = load_all(&config.documents);
    tracing::info!(documents = documents.len(), "documents loaded");

    let vectorizer: TFIDFVectorizer = TFIDFVectorizer::from_documents(documents);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &vectorizer, &config.output)
}
