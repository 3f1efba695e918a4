pub mod compare;
pub mod corpus;
pub mod serde;
pub mod tfidf;
pub mod token;
pub mod vocab;

use std::marker::PhantomData;

use ::serde::{Deserialize, Serialize};

use crate::{
    utils::term_vector::TermVector,
    vectorizer::{
        compare::{Compare, DefaultCompare},
        corpus::{Corpus, Document},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::TermFrequency,
        vocab::Vocabulary,
    },
};

/// Similarity of one unordered document pair, `i < j`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityPair {
    pub i: usize,
    pub j: usize,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct TFIDFVectorizer<E = DefaultTFIDFEngine, C = DefaultCompare>
where
    E: TFIDFEngine,
    C: Compare<f64>,
{
    /// Tokenized documents and their document frequencies
    pub corpus: Corpus,
    /// Sorted terms of the corpus
    pub vocabulary: Vocabulary,
    /// Raw counts, one per document
    pub tf_vectors: Vec<TermVector<u64>>,
    /// Corpus-wide IDF
    pub idf: TermVector<f64>,
    /// TF * IDF, one per document
    pub tfidf_vectors: Vec<TermVector<f64>>,
    _marker: PhantomData<(E, C)>,
}

impl<E, C> TFIDFVectorizer<E, C>
where
    E: TFIDFEngine,
    C: Compare<f64>,
{
    /// Run the whole pipeline over a corpus
    /// vocabulary -> TF -> IDF -> TF-IDF
    pub fn new(corpus: Corpus) -> Self {
        let vocabulary = corpus.vocabulary();
        tracing::debug!(vocab_size = vocabulary.len(), "vocabulary built");

        let tf_vectors: Vec<TermVector<u64>> = corpus
            .token_sequences()
            .iter()
            .map(|tokens| E::tf_vec(&TermFrequency::from(&tokens[..]), &vocabulary))
            .collect();
        let idf = E::idf_vec(&corpus, &vocabulary);
        let tfidf_vectors: Vec<TermVector<f64>> = tf_vectors
            .iter()
            .map(|tf| E::tfidf_vec(tf, &idf, &vocabulary))
            .collect();
        tracing::debug!(doc_num = tfidf_vectors.len(), "tf-idf vectors built");

        Self {
            corpus,
            vocabulary,
            tf_vectors,
            idf,
            tfidf_vectors,
            _marker: PhantomData,
        }
    }

    /// Labelled documents
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self::new(Corpus::new(documents))
    }

    /// Bare texts, labelled `Document 1`, `Document 2`, ...
    pub fn from_texts<I, T>(texts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::new(Corpus::from_texts(texts))
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.tfidf_vectors.len()
    }

    pub fn get_tf(&self, index: usize) -> Option<&TermVector<u64>> {
        self.tf_vectors.get(index)
    }

    pub fn get_tfidf(&self, index: usize) -> Option<&TermVector<f64>> {
        self.tfidf_vectors.get(index)
    }

    /// Cosine similarity of the TF-IDF vectors of documents `i` and `j`
    /// `None` if either index is out of range
    pub fn similarity(&self, i: usize, j: usize) -> Option<f64> {
        let a = self.tfidf_vectors.get(i)?;
        let b = self.tfidf_vectors.get(j)?;
        Some(C::cosine_similarity(a, b))
    }

    /// Every unordered pair `(i, j)` with `i < j`, in row-major order
    pub fn similarity_pairs(&self) -> Vec<SimilarityPair> {
        let n = self.doc_num();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let score = C::cosine_similarity(&self.tfidf_vectors[i], &self.tfidf_vectors[j]);
                pairs.push(SimilarityPair { i, j, score });
            }
        }
        tracing::debug!(pair_num = pairs.len(), "pairwise similarities computed");
        pairs
    }

    /// Upper triangle of the similarity matrix
    /// row `i` holds the scores against documents `i + 1..N`
    pub fn similarity_matrix(&self) -> Vec<Vec<f64>> {
        let n = self.doc_num();
        (0..n)
            .map(|i| {
                ((i + 1)..n)
                    .map(|j| C::cosine_similarity(&self.tfidf_vectors[i], &self.tfidf_vectors[j]))
                    .collect()
            })
            .collect()
    }

    /// The other document most similar to `index`
    /// ties resolve to the lowest index
    pub fn most_similar(&self, index: usize) -> Option<(usize, f64)> {
        let target = self.tfidf_vectors.get(index)?;
        let mut best: Option<(usize, f64)> = None;
        for (j, other) in self.tfidf_vectors.iter().enumerate() {
            if j == index {
                continue;
            }
            let score = C::cosine_similarity(target, other);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((j, score)),
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::LN_2;

    type Vectorizer = TFIDFVectorizer;

    #[test]
    fn shared_words_with_zero_idf_are_orthogonal() {
        let v = Vectorizer::from_texts(["the cat sat", "the dog sat"]);
        assert_eq!(v.vocabulary.as_slice(), &["cat", "dog", "sat", "the"]);
        assert_eq!(
            v.tf_vectors[0].iter().collect::<Vec<_>>(),
            vec![("cat", 1), ("dog", 0), ("sat", 1), ("the", 1)]
        );
        let doc1 = &v.tfidf_vectors[0];
        assert!((doc1.value("cat") - LN_2).abs() < 1e-12);
        assert_eq!(doc1.value("dog"), 0.0);
        assert_eq!(doc1.value("sat"), 0.0);
        assert_eq!(doc1.value("the"), 0.0);
        let doc2 = &v.tfidf_vectors[1];
        assert!((doc2.value("dog") - LN_2).abs() < 1e-12);
        assert_eq!(doc2.value("cat"), 0.0);

        assert_eq!(v.similarity_pairs(), vec![SimilarityPair { i: 0, j: 1, score: 0.0 }]);
    }

    #[test]
    fn empty_corpus() {
        let v = Vectorizer::from_texts(Vec::<String>::new());
        assert!(v.vocabulary.is_empty());
        assert!(v.tf_vectors.is_empty());
        assert!(v.idf.is_empty());
        assert!(v.tfidf_vectors.is_empty());
        assert!(v.similarity_pairs().is_empty());
        assert!(v.similarity_matrix().is_empty());
        assert_eq!(v.most_similar(0), None);
    }

    #[test]
    fn empty_documents_have_zero_similarity() {
        let v = Vectorizer::from_texts(["", "   "]);
        assert!(v.vocabulary.is_empty());
        assert!(v.tf_vectors.iter().all(|tf| tf.is_empty()));
        assert_eq!(v.similarity(0, 1), Some(0.0));
        assert_eq!(v.similarity(0, 0), Some(0.0));
    }

    #[test]
    fn term_in_every_document_has_zero_weight() {
        let v = Vectorizer::from_texts(["rust rust rust fast", "rust safe", "rust"]);
        assert_eq!(v.idf.value("rust"), 0.0);
        for tfidf in &v.tfidf_vectors {
            assert_eq!(tfidf.value("rust"), 0.0);
        }
        // third document carries nothing but "rust"
        assert_eq!(v.similarity(2, 0), Some(0.0));
    }

    #[test]
    fn pairs_and_matrix_agree() {
        let v = Vectorizer::from_texts([
            "black hole gravity light",
            "gravity orbit resonance",
            "neural network learning",
            "deep neural learning layers",
        ]);
        let pairs = v.similarity_pairs();
        assert_eq!(pairs.len(), 6);
        let matrix = v.similarity_matrix();
        assert_eq!(matrix.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        for p in &pairs {
            assert!(p.i < p.j);
            assert_eq!(matrix[p.i][p.j - p.i - 1], p.score);
            assert_eq!(v.similarity(p.j, p.i), Some(p.score));
        }
        assert!(v.similarity(2, 3).unwrap() > 0.0);
        assert_eq!(v.similarity(0, 2), Some(0.0));
        assert_eq!(v.similarity(0, 9), None);
    }

    #[test]
    fn most_similar_picks_best_other() {
        let v = Vectorizer::from_texts([
            "neural network learning",
            "black hole gravity",
            "deep neural learning",
            "gravity orbit",
        ]);
        assert_eq!(v.most_similar(0).map(|(j, _)| j), Some(2));
        assert_eq!(v.most_similar(1).map(|(j, _)| j), Some(3));
        let single = Vectorizer::from_texts(["alone"]);
        assert_eq!(single.most_similar(0), None);
    }

    #[test]
    fn most_similar_ties_go_to_lowest_index() {
        // every pair is orthogonal
        let v = Vectorizer::from_texts(["a", "b", "c"]);
        assert_eq!(v.most_similar(1), Some((0, 0.0)));
        assert_eq!(v.most_similar(0), Some((1, 0.0)));
        assert_eq!(v.most_similar(2), Some((0, 0.0)));
    }

    #[test]
    fn most_similar_tie_after_a_worse_candidate() {
        // doc 0 scores 0 against doc 2; docs 1 and 3 tie at 1/sqrt(2)
        let v = Vectorizer::from_texts(["z", "x", "x y", "y"]);
        let tied = v.similarity(2, 3).unwrap();
        assert_eq!(v.similarity(2, 1), Some(tied));
        assert_eq!(v.similarity(2, 0), Some(0.0));
        assert!((tied - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
        assert_eq!(v.most_similar(2), Some((1, tied)));
    }

    #[test]
    fn identical_documents() {
        let v = Vectorizer::from_texts(["alpha beta", "alpha beta", "gamma"]);
        let s = v.similarity(0, 1).unwrap();
        assert!((s - 1.0).abs() < 1e-12);
    }

    #[test]
    fn labels_are_kept() {
        let v = Vectorizer::from_documents(vec![
            Document::new("Black Hole", "a b"),
            Document::new("Deep Learning", "c d"),
        ]);
        assert_eq!(v.corpus.labels().collect::<Vec<_>>(), vec!["Black Hole", "Deep Learning"]);
    }
}
