use crate::{
    utils::term_vector::TermVector,
    vectorizer::{corpus::Corpus, token::TermFrequency, vocab::Vocabulary},
};

/// TF-IDF calculation engine
///
/// Every vector produced here is keyed by every vocabulary term, in vocabulary order.
pub trait TFIDFEngine {
    /// TFベクトル
    /// raw count of each vocabulary term in one document, 0 if absent.
    /// Terms of `freq` outside the vocabulary are ignored.
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> TermVector<u64>;

    /// IDFベクトル
    /// one score per vocabulary term, shared by the whole corpus
    ///
    /// # Arguments
    /// * `corpus` - コーパス
    /// * `vocab` - terms to score
    ///
    /// With the corpus' own vocabulary every score is finite. A vocabulary
    /// built elsewhere scored against an empty corpus gives `-inf` scores
    /// (see [`DefaultTFIDFEngine::idf_calc`]), and TF-IDF weights of those
    /// terms become NaN.
    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> TermVector<f64>;

    /// TF-IDFベクトル
    /// elementwise product of a TF vector and the IDF vector
    fn tfidf_vec(tf: &TermVector<u64>, idf: &TermVector<f64>, vocab: &Vocabulary) -> TermVector<f64>;
}

/// Default TF-IDF engine
///
/// - tf: raw count
/// - idf: `ln(N / df)`, with `df = 0` counted as 1
/// - tf-idf: `tf * idf`, not normalized
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// IDFの計算
    ///
    /// # Arguments
    /// * `doc_num` - 全ドキュメント数 (N)
    /// * `doc_freq` - number of documents containing the term
    ///
    /// # Returns
    /// * `f64` - `ln(N / df)`; 0 for a term in every document.
    ///   Not finite when `doc_num == 0`: the result is `ln(0) = -inf`.
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        // zero guard only, no +1 smoothing
        let doc_freq = if doc_freq == 0 { 1 } else { doc_freq };
        (doc_num as f64 / doc_freq as f64).ln()
    }
}

impl TFIDFEngine for DefaultTFIDFEngine {
    fn tf_vec(freq: &TermFrequency, vocab: &Vocabulary) -> TermVector<u64> {
        let mut tf_vec = TermVector::with_capacity(vocab.len());
        for term in vocab.iter() {
            tf_vec.insert(term, freq.term_count(term));
        }
        tf_vec
    }

    fn idf_vec(corpus: &Corpus, vocab: &Vocabulary) -> TermVector<f64> {
        let doc_num = corpus.doc_num();
        let mut idf_vec = TermVector::with_capacity(vocab.len());
        for term in vocab.iter() {
            let doc_freq = corpus.doc_freq(term);
            let idf = Self::idf_calc(doc_num, doc_freq);
            tracing::trace!(term, doc_freq, idf, "idf");
            idf_vec.insert(term, idf);
        }
        idf_vec
    }

    fn tfidf_vec(tf: &TermVector<u64>, idf: &TermVector<f64>, vocab: &Vocabulary) -> TermVector<f64> {
        vocab
            .iter()
            .map(|term| (term, tf.value(term) as f64 * idf.value(term)))
            .collect()
    }
}
