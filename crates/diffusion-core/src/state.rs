//! Opinion Vector
//!
//! One opinion value per participant, each constrained to [0, 1]. Identity
//! is positional: participant i is index i. Serializes as a plain ordered
//! list of floats, which is the contract consumers (plotting, analysis)
//! rely on.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A length-n vector of opinions, every component in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpinionVector(Vec<f64>);

impl OpinionVector {
    /// Create a validated opinion vector. Every component must lie in
    /// [0, 1]; NaN fails the range check and is rejected the same way.
    pub fn new(values: Vec<f64>) -> Result<Self, SimError> {
        for (i, &v) in values.iter().enumerate() {
            if !(0.0..=1.0).contains(&v) {
                return Err(SimError::initial_state(format!(
                    "opinion {} at participant {} is outside [0, 1]",
                    v, i
                )));
            }
        }
        Ok(OpinionVector(values))
    }

    /// Fill all n participants with the same opinion value.
    pub fn uniform(n: usize, value: f64) -> Result<Self, SimError> {
        Self::new(vec![value; n])
    }

    /// Construct without the range check. Reserved for values that are in
    /// range by construction (post-clamp step output).
    pub(crate) fn from_clamped(values: Vec<f64>) -> Self {
        debug_assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
        OpinionVector(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for OpinionVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}
