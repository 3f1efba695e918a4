/// This crate computes TF-IDF document vectors and pairwise cosine similarity
/// over a small corpus of short texts.
pub mod vectorizer;
pub mod utils;
pub mod config;
pub mod cli;
pub mod error;
pub mod report;

/// TF-IDF Vectorizer
/// The top-level struct of this crate. It runs the whole pipeline over a
/// corpus, in order:
/// - tokenize every document (lowercase, whitespace split)
/// - build the sorted vocabulary
/// - raw term-frequency vector per document
/// - corpus-wide IDF table, `ln(N / df)` with `df = 0` counted as 1
/// - TF-IDF vector per document (`tf * idf`, not normalized)
///
/// and then answers pairwise cosine similarity queries.
///
/// `TFIDFVectorizer<E, C>` has the following generic parameters:
/// - `E`: TF-IDF calculation engine type (default `DefaultTFIDFEngine`)
/// - `C`: similarity implementation (default `DefaultCompare`)
///
/// Every stage is a pure function of the previous one; the vectorizer is
/// built once and never mutated.
pub use vectorizer::TFIDFVectorizer;

/// One `(i, j, score)` entry of the pairwise similarity list, `i < j`
pub use vectorizer::SimilarityPair;

/// TF-IDF Vectorizer Data Structure for Serialization
/// Everything a run produced, as plain data.
/// Can be encoded as JSON or CBOR.
pub use vectorizer::serde::TFIDFData;

/// Corpus
/// Tokenized documents and per-term document frequencies.
/// Built in one batch from the full document list.
pub use vectorizer::corpus::{Corpus, Document};

/// Document source
/// Inline text or a file; unreadable files are replaced with a placeholder text.
pub use vectorizer::corpus::source::DocumentSource;

/// Term Frequency structure
/// Occurrence count of every term of one document, plus the total count.
pub use vectorizer::token::{tokenize, TermFrequency};

/// Sorted set of the distinct terms of a corpus
pub use vectorizer::vocab::Vocabulary;

/// TF IDF Calculation Engine Trait
/// Defines how TF, IDF and TF-IDF vectors are computed.
/// `DefaultTFIDFEngine` uses raw counts and `ln(N / df)`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Similarity between two term vectors.
/// `DefaultCompare` provides dot product and cosine similarity.
pub use vectorizer::compare::{Compare, DefaultCompare};

/// Ordered term -> weight mapping used for every vector of the pipeline
pub use utils::term_vector::TermVector;

pub use error::{Error, Result};
