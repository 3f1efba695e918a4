use num::{Num, ToPrimitive};

use crate::utils::term_vector::TermVector;

pub trait Compare<N>
where
    N: Num + Copy,
{
    /// dot積
    /// d(a, b) = Σ(a_t * b_t) over the terms keyed in both vectors
    fn dot(vec: &TermVector<N>, other: &TermVector<N>) -> f64;
    /// コサイン類似度
    /// cos(θ) = Σ(a_t * b_t) / (||a|| * ||b||)
    /// ||a|| = sqrt(Σ(a_t^2)) over every term of `a`
    fn cosine_similarity(vec: &TermVector<N>, other: &TermVector<N>) -> f64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCompare;

impl<N> Compare<N> for DefaultCompare
where
    N: Num + Copy + ToPrimitive,
{
    fn dot(vec: &TermVector<N>, other: &TermVector<N>) -> f64 {
        let mut products: Vec<(&str, f64)> = vec
            .iter()
            .filter_map(|(term, a)| {
                other.get(term).map(|b| {
                    (term, a.to_f64().unwrap_or(0.0) * b.to_f64().unwrap_or(0.0))
                })
            })
            .collect();
        // sum in term order so that dot(a, b) and dot(b, a) round identically
        products.sort_by(|x, y| x.0.cmp(y.0));
        products.into_iter().map(|(_, p)| p).sum()
    }

    fn cosine_similarity(vec: &TermVector<N>, other: &TermVector<N>) -> f64 {
        let norm_a = vec.magnitude();
        let norm_b = other.magnitude();
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        Self::dot(vec, other) / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tv(entries: &[(&str, f64)]) -> TermVector<f64> {
        entries.iter().map(|&(t, v)| (t, v)).collect()
    }

    fn cos(a: &TermVector<f64>, b: &TermVector<f64>) -> f64 {
        <DefaultCompare as Compare<f64>>::cosine_similarity(a, b)
    }

    #[test]
    fn zero_vector_is_zero_similarity() {
        let zero = tv(&[("a", 0.0), ("b", 0.0)]);
        let v = tv(&[("a", 1.0), ("b", 2.0)]);
        assert_eq!(cos(&zero, &v), 0.0);
        assert_eq!(cos(&v, &zero), 0.0);
        assert_eq!(cos(&zero, &zero), 0.0);
        assert_eq!(cos(&TermVector::new(), &TermVector::new()), 0.0);
    }

    #[test]
    fn self_similarity_is_one() {
        let v = tv(&[("a", 0.3), ("b", 1.7), ("c", 0.0)]);
        assert!((cos(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dot_only_over_shared_terms() {
        let a = tv(&[("x", 2.0), ("y", 3.0)]);
        let b = tv(&[("y", 4.0), ("z", 5.0)]);
        assert_eq!(<DefaultCompare as Compare<f64>>::dot(&a, &b), 12.0);
        // magnitudes still use every term of each vector
        let expected = 12.0 / (13.0f64.sqrt() * 41.0f64.sqrt());
        assert!((cos(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_vectors() {
        let a = tv(&[("cat", 0.693), ("dog", 0.0)]);
        let b = tv(&[("cat", 0.0), ("dog", 0.693)]);
        assert_eq!(cos(&a, &b), 0.0);
    }

    #[test]
    fn works_on_counts() {
        let a: TermVector<u64> = [("a", 1u64), ("b", 1)].into_iter().collect();
        let b: TermVector<u64> = [("a", 1u64), ("b", 0)].into_iter().collect();
        let s = <DefaultCompare as Compare<u64>>::cosine_similarity(&a, &b);
        assert!((s - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn symmetric(
            a in prop::collection::btree_map("[a-h]", 0.0f64..10.0, 0..8),
            b in prop::collection::btree_map("[a-h]", 0.0f64..10.0, 0..8),
        ) {
            let a: TermVector<f64> = a.into_iter().rev().collect();
            let b: TermVector<f64> = b.into_iter().collect();
            prop_assert_eq!(cos(&a, &b), cos(&b, &a));
        }

        #[test]
        fn bounded_for_non_negative(
            a in prop::collection::vec(0.0f64..10.0, 4),
            b in prop::collection::vec(0.0f64..10.0, 4),
        ) {
            let terms = ["a", "b", "c", "d"];
            let a: TermVector<f64> = terms.iter().copied().zip(a).collect();
            let b: TermVector<f64> = terms.iter().copied().zip(b).collect();
            let s = cos(&a, &b);
            prop_assert!(s >= 0.0);
            prop_assert!(s <= 1.0 + 1e-9);
        }
    }
}
