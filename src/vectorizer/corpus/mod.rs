pub mod source;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{token::tokenize, vocab::Vocabulary};

/// One raw document and the label it is reported under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub label: String,
    pub text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Default label for the document at `index` (0-based)
    pub fn default_label(index: usize) -> String {
        format!("Document {}", index + 1)
    }
}

/// Corpus
/// The tokenized documents of one run plus the document frequency of every term.
///
/// Built once from the whole document list; there is no way to add or remove
/// documents afterwards.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    token_seqs: Vec<Vec<String>>,
    /// number of documents containing each term
    term_doc_counts: IndexMap<String, u64>,
}

impl Corpus {
    /// Tokenize every document and count document frequencies
    pub fn new(documents: Vec<Document>) -> Self {
        let mut corpus = Self {
            token_seqs: Vec::with_capacity(documents.len()),
            documents: Vec::with_capacity(documents.len()),
            term_doc_counts: IndexMap::new(),
        };
        for doc in documents {
            let tokens = tokenize(&doc.text);
            corpus.add_set(&tokens);
            corpus.token_seqs.push(tokens);
            corpus.documents.push(doc);
        }
        tracing::debug!(
            doc_num = corpus.doc_num(),
            distinct_terms = corpus.term_doc_counts.len(),
            "corpus built"
        );
        corpus
    }

    /// Build from bare texts labelled `Document 1`, `Document 2`, ...
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let documents = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(Document::default_label(i), text))
            .collect();
        Self::new(documents)
    }

    /// count each distinct term of one document once
    fn add_set(&mut self, tokens: &[String]) {
        let mut seen: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            if let Some(count) = self.term_doc_counts.get_mut(term) {
                *count += 1;
            } else {
                self.term_doc_counts.insert(term.to_string(), 1);
            }
        }
    }

    /// Number of documents (N)
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.documents.len() as u64
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of documents containing `term` at least once
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.term_doc_counts.get(term).copied().unwrap_or(0)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn token_sequences(&self) -> &[Vec<String>] {
        &self.token_seqs
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.iter().map(|d| d.label.as_str())
    }

    /// Sorted vocabulary of this corpus
    pub fn vocabulary(&self) -> Vocabulary {
        Vocabulary::from_token_sequences(&self.token_seqs)
    }
}
