// ============================================================
// Layer 5 — TF-IDF Vectorizer
// ============================================================
// Turns normalized text into sparse TF-IDF vectors.
//
// Fitting (once, over the normalized corpus questions):
//   - Every whitespace-separated term of two or more characters
//     becomes a feature. Single characters ("i", "s") do not.
//   - Features are numbered in lexicographic term order.
//   - idf(t) = ln((1 + n) / (1 + df(t))) + 1
//     where n is the number of documents and df(t) the number
//     of documents containing t (smoothed, never zero).
//
// Transforming (corpus rows and queries alike):
//   - weight(t) = count(t in doc) × idf(t)
//   - the vector is scaled to unit L2 length
//   - unknown terms are skipped, so a query made only of unknown
//     words becomes the all-zero vector
//
// Reference: Salton & Buckley (1988) Term-weighting approaches
//            Rust Book §8 (Hash Maps)

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::error::IndexBuildError;

/// A sparse vector: (feature index, weight) pairs sorted by index,
/// with no zero weights stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Build from (index, weight) pairs. Sorts by index and drops zeros.
    pub fn from_pairs(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(i, _)| i);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// True for the all-zero vector.
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Highest feature index, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.entries.last().map(|&(i, _)| i)
    }
}

/// Fitted TF-IDF model: vocabulary plus per-term idf weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    /// term → feature index
    vocabulary: HashMap<String, usize>,

    /// idf weight per feature index
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and idf weights from a set of documents.
    ///
    /// Fails when no document contributes a single feature.
    pub fn fit(documents: &[String]) -> Result<Self, IndexBuildError> {
        if documents.is_empty() {
            return Err(IndexBuildError::NoEntries);
        }

        // Document frequency per term; BTreeMap gives sorted feature order.
        let mut df: BTreeMap<&str, usize> = BTreeMap::new();
        for doc in documents {
            let distinct: BTreeSet<&str> = analyze(doc).collect();
            for term in distinct {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        if df.is_empty() {
            return Err(IndexBuildError::EmptyVocabulary {
                entries: documents.len(),
            });
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(df.len());
        let mut idf = Vec::with_capacity(df.len());

        for (index, (term, freq)) in df.into_iter().enumerate() {
            vocabulary.insert(term.to_string(), index);
            idf.push(((1.0 + n) / (1.0 + freq as f64)).ln() + 1.0);
        }

        Ok(Self { vocabulary, idf })
    }

    /// Fit on the documents and return their vectors, in order.
    pub fn fit_transform(documents: &[String]) -> Result<(Self, Vec<SparseVector>), IndexBuildError> {
        let vectorizer = Self::fit(documents)?;
        let rows = documents.iter().map(|d| vectorizer.transform(d)).collect();
        Ok((vectorizer, rows))
    }

    /// Project one normalized document into feature space.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in analyze(document) {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let weighted = SparseVector::from_pairs(
            counts
                .into_iter()
                .map(|(index, tf)| (index, tf * self.idf[index]))
                .collect(),
        );

        let norm = weighted.norm();
        if norm == 0.0 {
            return weighted;
        }

        SparseVector::from_pairs(weighted.entries.iter().map(|&(i, w)| (i, w / norm)).collect())
    }

    /// Number of features.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

/// Split a normalized document into feature terms.
fn analyze(document: &str) -> impl Iterator<Item = &str> {
    document
        .split_whitespace()
        .filter(|term| term.chars().count() >= 2)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    fn feature(v: &TfidfVectorizer, term: &str) -> Option<usize> {
        v.vocabulary.get(term).copied()
    }

    fn idf(v: &TfidfVectorizer, term: &str) -> f64 {
        v.idf[v.vocabulary[term]]
    }

    #[test]
    fn test_vocabulary_is_sorted_and_skips_single_chars() {
        let v = TfidfVectorizer::fit(&docs(&["refund policy", "how do i contact support"])).unwrap();
        assert_eq!(v.vocabulary_size(), 6);
        assert_eq!(feature(&v, "contact"), Some(0));
        assert_eq!(feature(&v, "support"), Some(5));
        assert_eq!(feature(&v, "i"), None);
    }

    #[test]
    fn test_idf_is_smoothed() {
        let v = TfidfVectorizer::fit(&docs(&["refund policy", "refund window"])).unwrap();
        // in both documents: ln(3/3) + 1
        assert!((idf(&v, "refund") - 1.0).abs() < 1e-12);
        // in one document: ln(3/2) + 1
        assert!((idf(&v, "policy") - (1.5f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rows_are_unit_length() {
        let (_, rows) = TfidfVectorizer::fit_transform(&docs(&["refund refund policy", "contact support"])).unwrap();
        for row in &rows {
            assert!((row.norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_unknown_terms_give_zero_vector() {
        let v = TfidfVectorizer::fit(&docs(&["refund policy"])).unwrap();
        assert!(v.transform("completely unrelated words").is_zero());
        assert!(v.transform("").is_zero());
    }

    #[test]
    fn test_term_frequency_raises_weight() {
        let v = TfidfVectorizer::fit(&docs(&["refund policy", "contact support"])).unwrap();
        let row = v.transform("refund refund policy");
        let refund = feature(&v, "refund").unwrap();
        let policy = feature(&v, "policy").unwrap();
        let weight = |i| row.entries().iter().find(|(j, _)| *j == i).unwrap().1;
        assert!(weight(refund) > weight(policy));
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let err = TfidfVectorizer::fit(&docs(&["", "a b"])).unwrap_err();
        assert!(matches!(err, IndexBuildError::EmptyVocabulary { entries: 2 }));
        assert!(matches!(TfidfVectorizer::fit(&[]), Err(IndexBuildError::NoEntries)));
    }

    #[test]
    fn test_sparse_vector_drops_zeros_and_sorts() {
        let v = SparseVector::from_pairs(vec![(3, 0.5), (1, 0.0), (0, 0.25)]);
        assert_eq!(v.entries(), &[(0, 0.25), (3, 0.5)]);
        assert_eq!(v.max_index(), Some(3));
    }
}
