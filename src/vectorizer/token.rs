use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Split a document into lowercase word tokens
///
/// The whole text is lowercased, then split on runs of separator characters
/// (see [`is_separator`]). Punctuation is kept as part of the token.
///
/// # Arguments
/// * `text` - raw document text
///
/// # Returns
/// * `Vec<String>` - tokens in document order
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// TermFrequency
/// Counts how often each term occurs in one document.
///
/// # Examples
/// ```
/// use tf_idf_similarity::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["rust", "fast", "rust"]);
/// assert_eq!(freq.term_count("rust"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Count a term once
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Count every term of a slice
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrences of `term`, 0 if never seen
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of counted terms
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }
}

impl<T> From<&[T]> for TermFrequency
where
    T: AsRef<str>,
{
    fn from(terms: &[T]) -> Self {
        let mut freq = TermFrequency::new();
        freq.add_terms(terms);
        freq
    }
}
