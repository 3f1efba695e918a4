use ::serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    utils::term_vector::TermVector,
    vectorizer::{
        compare::Compare, corpus::Document, tfidf::TFIDFEngine, vocab::Vocabulary,
        SimilarityPair, TFIDFVectorizer,
    },
};

/// Serializable result of one pipeline run
///
/// Holds everything the pipeline produced: the vocabulary, per-document TF and
/// TF-IDF vectors, the shared IDF table and the pairwise similarities.
/// Vectors are encoded as ordered `term -> weight` maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TFIDFData {
    pub documents: Vec<Document>,
    pub vocabulary: Vocabulary,
    pub tf: Vec<TermVector<u64>>,
    pub idf: TermVector<f64>,
    pub tfidf: Vec<TermVector<f64>>,
    pub similarities: Vec<SimilarityPair>,
}

impl<E, C> From<&TFIDFVectorizer<E, C>> for TFIDFData
where
    E: TFIDFEngine,
    C: Compare<f64>,
{
    fn from(vectorizer: &TFIDFVectorizer<E, C>) -> Self {
        Self {
            documents: vectorizer.corpus.documents().to_vec(),
            vocabulary: vectorizer.vocabulary.clone(),
            tf: vectorizer.tf_vectors.clone(),
            idf: vectorizer.idf.clone(),
            tfidf: vectorizer.tfidf_vectors.clone(),
            similarities: vectorizer.similarity_pairs(),
        }
    }
}

impl TFIDFData {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}
