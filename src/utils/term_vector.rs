use indexmap::IndexMap;
use num::{Num, ToPrimitive};
use serde::{Deserialize, Serialize};

/// Term keyed vector
///
/// An ordered mapping from term to weight. Keys keep the order they were
/// inserted in, so every vector built from the same `Vocabulary` shares the
/// same term ordering.
///
/// `N` is the weight type (e.g. `u64` for raw counts, `f64` for IDF and TF-IDF).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermVector<N>
where
    N: Num + Copy,
{
    entries: IndexMap<String, N>,
}

impl<N> Default for TermVector<N>
where
    N: Num + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy,
{
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert a weight for a term
    /// returns the previous weight if the term was already present
    #[inline]
    pub fn insert(&mut self, term: impl Into<String>, value: N) -> Option<N> {
        self.entries.insert(term.into(), value)
    }

    /// Get the weight of a term, `None` if the term is not a key
    #[inline]
    pub fn get(&self, term: &str) -> Option<N> {
        self.entries.get(term).copied()
    }

    /// Get the weight of a term, zero if the term is not a key
    #[inline]
    pub fn value(&self, term: &str) -> N {
        self.get(term).unwrap_or_else(N::zero)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(term, weight)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, N)> + '_ {
        self.entries.iter().map(|(term, &value)| (term.as_str(), value))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|term| term.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = N> + '_ {
        self.entries.values().copied()
    }

    /// Sum of all weights
    pub fn sum(&self) -> N {
        self.values().fold(N::zero(), |acc, v| acc + v)
    }
}

impl<N> TermVector<N>
where
    N: Num + Copy + ToPrimitive,
{
    /// Euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    pub fn magnitude(&self) -> f64 {
        self.values()
            .map(|v| {
                let v = v.to_f64().unwrap_or(0.0);
                v * v
            })
            .sum::<f64>()
            .sqrt()
    }
}

impl<N, T> FromIterator<(T, N)> for TermVector<N>
where
    N: Num + Copy,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, N)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(term, value)| (term.into(), value)).collect(),
        }
    }
}
