//! Adjacency Model
//!
//! Fixed directed network over n participants. Entry (i, j) means
//! participant i is influenced by participant j. The model precomputes the
//! row-normalized influence weights 1/d[i] so neighbor averaging is a
//! single sparse pass; rows with no influencers carry zero weight.

use crate::error::SimError;
use crate::state::OpinionVector;

/// Immutable network topology with precomputed influence scaling.
///
/// Constructed once per experiment and read-only afterwards, so it is safe
/// to share across independent runs (parameter sweeps) without locking.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyModel {
    n: usize,
    /// Row i: indices of the participants that influence i.
    influencers: Vec<Vec<usize>>,
    /// Row i: 1/d[i], or 0.0 when participant i has no influencers.
    inv_degree: Vec<f64>,
}

impl AdjacencyModel {
    /// Build from a raw 0/1 adjacency matrix.
    ///
    /// Rejects non-square matrices, entries other than 0 or 1, and any
    /// nonzero diagonal entry (self-influence breaks the model semantics).
    pub fn from_matrix(raw: &[Vec<u8>]) -> Result<Self, SimError> {
        let n = raw.len();
        let mut influencers = Vec::with_capacity(n);

        for (i, row) in raw.iter().enumerate() {
            if row.len() != n {
                return Err(SimError::topology(format!(
                    "matrix is not square: row {} has length {}, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            let mut row_influencers = Vec::new();
            for (j, &entry) in row.iter().enumerate() {
                match entry {
                    0 => {}
                    1 if i == j => {
                        return Err(SimError::topology(format!(
                            "diagonal entry at index {} is nonzero (self-influence)",
                            i
                        )));
                    }
                    1 => row_influencers.push(j),
                    other => {
                        return Err(SimError::topology(format!(
                            "entry at ({}, {}) is {}, expected 0 or 1",
                            i, j, other
                        )));
                    }
                }
            }
            influencers.push(row_influencers);
        }

        Ok(Self::from_influencer_lists(n, influencers))
    }

    /// Build from an edge list over n participants. Edge `(i, j)` means
    /// "j influences i". Duplicate edges collapse to a single 0/1 entry.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self, SimError> {
        let mut influencers: Vec<Vec<usize>> = vec![Vec::new(); n];
        for &(i, j) in edges {
            if i >= n || j >= n {
                return Err(SimError::topology(format!(
                    "edge ({}, {}) out of range for {} participants",
                    i, j, n
                )));
            }
            if i == j {
                return Err(SimError::topology(format!(
                    "edge ({}, {}) is a self-loop",
                    i, j
                )));
            }
            if !influencers[i].contains(&j) {
                influencers[i].push(j);
            }
        }
        for row in &mut influencers {
            row.sort_unstable();
        }
        Ok(Self::from_influencer_lists(n, influencers))
    }

    /// The canonical reference topology: a cycle of n >= 3 participants,
    /// each influenced by both immediate neighbors (d[i] = 2 everywhere).
    pub fn ring(n: usize) -> Result<Self, SimError> {
        if n < 3 {
            return Err(SimError::topology(format!(
                "ring topology needs at least 3 participants, got {}",
                n
            )));
        }
        let mut edges = Vec::with_capacity(2 * n);
        for i in 0..n {
            edges.push((i, (i + 1) % n));
            edges.push((i, (i + n - 1) % n));
        }
        Self::from_edges(n, &edges)
    }

    fn from_influencer_lists(n: usize, influencers: Vec<Vec<usize>>) -> Self {
        let inv_degree = influencers
            .iter()
            .map(|row| {
                if row.is_empty() {
                    0.0
                } else {
                    1.0 / row.len() as f64
                }
            })
            .collect();
        AdjacencyModel {
            n,
            influencers,
            inv_degree,
        }
    }

    /// Number of participants in the network.
    pub fn participants(&self) -> usize {
        self.n
    }

    /// Number of influencers of participant i (the out-degree d[i]).
    pub fn degree(&self, i: usize) -> usize {
        self.influencers[i].len()
    }

    /// Influencer indices of participant i.
    pub fn influencers(&self, i: usize) -> &[usize] {
        &self.influencers[i]
    }

    /// Whether participant i has no influencers at all.
    pub fn is_isolated(&self, i: usize) -> bool {
        self.influencers[i].is_empty()
    }

    /// Mean opinion of each participant's influencers under the scaled
    /// adjacency: v[i] = sum_j A[i][j]/d[i] * u[j]. Rows with d[i] = 0
    /// contribute 0 here; the update rule drops the influence term for
    /// those participants entirely.
    pub fn neighbor_average(&self, u: &OpinionVector) -> Vec<f64> {
        debug_assert_eq!(u.len(), self.n);
        self.influencers
            .iter()
            .zip(&self.inv_degree)
            .map(|(row, &w)| row.iter().map(|&j| u[j]).sum::<f64>() * w)
            .collect()
    }
}
