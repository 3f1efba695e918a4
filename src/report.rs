//! Report rendering for a finished pipeline run.

use std::fmt::Display;
use std::io::Write;

use num::Num;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::Result;
use crate::utils::term_vector::TermVector;
use crate::vectorizer::compare::Compare;
use crate::vectorizer::corpus::Document;
use crate::vectorizer::serde::TFIDFData;
use crate::vectorizer::tfidf::TFIDFEngine;
use crate::vectorizer::TFIDFVectorizer;

/// Write the report in the configured format.
pub fn write_report<W, E, C>(
    out: &mut W,
    vectorizer: &TFIDFVectorizer<E, C>,
    output: &OutputConfig,
) -> Result<()>
where
    W: Write,
    E: TFIDFEngine,
    C: Compare<f64>,
{
    match output.format {
        OutputFormat::Text => out.write_all(render_text(vectorizer, output).as_bytes())?,
        OutputFormat::Json => {
            let json = TFIDFData::from(vectorizer).to_json_pretty()?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Cbor => out.write_all(&TFIDFData::from(vectorizer).to_cbor()?)?,
    }
    out.flush()?;
    Ok(())
}

/// Plain text report
///
/// ```text
/// Documents:
/// Document 1: the cat sat
/// Document 2: the dog sat
///
/// Cosine Similarity Matrix:
/// Doc 1 vs. Doc 2: 0.0000
/// ```
pub fn render_text<E, C>(vectorizer: &TFIDFVectorizer<E, C>, output: &OutputConfig) -> String
where
    E: TFIDFEngine,
    C: Compare<f64>,
{
    let precision = output.precision;
    let documents = vectorizer.corpus.documents();
    let mut text = String::new();

    if output.show_documents {
        text.push_str("Documents:\n");
        for (i, doc) in documents.iter().enumerate() {
            text.push_str(&format!("{}: {}\n", heading(i, doc), doc.text));
        }
        text.push('\n');
    }

    if output.show_vectors {
        text.push_str("Vocabulary:\n");
        text.push_str(&vectorizer.vocabulary.iter().collect::<Vec<_>>().join(" "));
        text.push_str("\n\nTerm Frequency Vectors:\n");
        for (i, tf) in vectorizer.tf_vectors.iter().enumerate() {
            text.push_str(&format!("Document {}: {}\n", i + 1, format_vector(tf, |v| v.to_string())));
        }
        text.push_str("\nInverse Document Frequency:\n");
        for (term, idf) in vectorizer.idf.iter() {
            text.push_str(&format!("{}: {:.*}\n", term, precision, idf));
        }
        text.push_str("\nTF-IDF Vectors:\n");
        for (i, tfidf) in vectorizer.tfidf_vectors.iter().enumerate() {
            text.push_str(&format!(
                "Document {}: {}\n",
                i + 1,
                format_vector(tfidf, |v| format!("{:.*}", precision, v))
            ));
        }
        text.push('\n');
    }

    text.push_str("Cosine Similarity Matrix:\n");
    for pair in vectorizer.similarity_pairs() {
        text.push_str(&format!(
            "Doc {} vs. Doc {}: {:.*}\n",
            pair.i + 1,
            pair.j + 1,
            precision,
            pair.score
        ));
    }
    text
}

fn heading(index: usize, doc: &Document) -> String {
    if doc.label == Document::default_label(index) {
        doc.label.clone()
    } else {
        format!("Document {} ({})", index + 1, doc.label)
    }
}

fn format_vector<N, F, S>(vec: &TermVector<N>, fmt: F) -> String
where
    N: Num + Copy,
    F: Fn(N) -> S,
    S: Display,
{
    let entries: Vec<String> = vec
        .iter()
        .map(|(term, value)| format!("{}: {}", term, fmt(value)))
        .collect();
    format!("{{{}}}", entries.join(", "))
}
