//! Model Parameters
//!
//! The three scalars that shape the update rule. Immutable for the duration
//! of a run; validated on construction and re-validated defensively at
//! simulation entry.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Scalar parameters of the opinion update rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Baseline/equilibrium opinion the population reverts toward, in [0, 1].
    pub theta: f64,
    /// Reversion rate, > 0. Speed at which an unconnected participant's
    /// opinion decays toward theta.
    pub r: f64,
    /// Influence strength, > 0. Scale factor on the neighbor-average
    /// perturbation.
    pub epsilon: f64,
}

impl Params {
    /// Create a validated parameter set.
    pub fn new(theta: f64, r: f64, epsilon: f64) -> Result<Self, SimError> {
        let params = Params { theta, r, epsilon };
        params.validate()?;
        Ok(params)
    }

    /// Check the model preconditions: theta in [0, 1], r > 0, epsilon > 0,
    /// everything finite.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.theta.is_finite() || !(0.0..=1.0).contains(&self.theta) {
            return Err(SimError::parameters(format!(
                "theta must lie in [0, 1], got {}",
                self.theta
            )));
        }
        if !self.r.is_finite() || self.r <= 0.0 {
            return Err(SimError::parameters(format!(
                "reversion rate r must be > 0, got {}",
                self.r
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(SimError::parameters(format!(
                "influence strength epsilon must be > 0, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}
