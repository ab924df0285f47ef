// ============================================================
// Layer 5 — Nearest-Neighbor Model
// ============================================================
// Brute-force single nearest neighbor over the feature matrix.
//
// Metric: Euclidean distance. Rows and queries are both unit
// length (or all-zero), so ranking by Euclidean distance is the
// same as ranking by cosine similarity for non-zero vectors.
//
// Ties go to the lowest row index: the scan keeps the first row
// seen and only replaces it on a strictly smaller distance.
//
// The matrix is tiny (one row per FAQ entry), so a linear scan
// over sparse rows is all that is needed.

use crate::domain::error::QueryFailure;
use crate::ml::vectorizer::SparseVector;

/// The winning row of a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Row index, which is also the corpus entry index
    pub index: usize,
    pub distance: f64,
}

/// Fitted model: the feature matrix and its width.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    rows:      Vec<SparseVector>,
    dimension: usize,
}

impl NearestNeighbor {
    /// Store the feature matrix. `dimension` is the vocabulary size.
    pub fn fit(rows: Vec<SparseVector>, dimension: usize) -> Self {
        Self { rows, dimension }
    }

    /// Find the closest row to `query`.
    pub fn nearest(&self, query: &SparseVector) -> Result<Neighbor, QueryFailure> {
        if let Some(index) = query.max_index().filter(|&i| i >= self.dimension) {
            return Err(QueryFailure::FeatureOutOfRange {
                index,
                size: self.dimension,
            });
        }

        let mut best: Option<Neighbor> = None;
        for (index, row) in self.rows.iter().enumerate() {
            let distance = euclidean(row, query);
            if !distance.is_finite() {
                return Err(QueryFailure::NonFiniteDistance { entry: index });
            }

            match best {
                Some(b) if distance >= b.distance => {}
                _ => best = Some(Neighbor { index, distance }),
            }
        }

        best.ok_or(QueryFailure::NoCandidates)
    }
}

/// Euclidean distance between two sparse vectors with sorted indices.
pub fn euclidean(a: &SparseVector, b: &SparseVector) -> f64 {
    let (a, b) = (a.entries(), b.entries());
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;

    // Merge walk over both index lists
    while i < a.len() && j < b.len() {
        let ((ia, wa), (ib, wb)) = (a[i], b[j]);
        if ia == ib {
            sum += (wa - wb) * (wa - wb);
            i += 1;
            j += 1;
        } else if ia < ib {
            sum += wa * wa;
            i += 1;
        } else {
            sum += wb * wb;
            j += 1;
        }
    }
    sum += a[i..].iter().map(|(_, w)| w * w).sum::<f64>();
    sum += b[j..].iter().map(|(_, w)| w * w).sum::<f64>();

    sum.sqrt()
}
