use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Vocabulary
/// Every distinct term of a corpus, sorted in ascending lexicographic order.
/// All term vectors of a corpus are keyed in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    terms: Vec<String>,
}

impl Vocabulary {
    /// Union of the terms of all token sequences
    ///
    /// # Arguments
    /// * `token_seqs` - one token sequence per document
    pub fn from_token_sequences(token_seqs: &[Vec<String>]) -> Self {
        let set: BTreeSet<&str> = token_seqs
            .iter()
            .flat_map(|seq| seq.iter().map(|t| t.as_str()))
            .collect();
        Self {
            terms: set.into_iter().map(str::to_string).collect(),
        }
    }

    /// Build from arbitrary terms, sorted and deduplicated
    pub fn from_terms<I, T>(terms: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        terms.sort();
        terms.dedup();
        Self { terms }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.terms.iter().map(|t| t.as_str())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }
}
