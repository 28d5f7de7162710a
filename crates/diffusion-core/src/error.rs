//! Error Types
//!
//! Every failure in the engine is fatal for the run that triggered it.
//! The computation is deterministic, so retrying with identical inputs
//! cannot change the outcome; callers get one of these and stop.

use thiserror::Error;

/// Errors produced by model construction, validation, and simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Adjacency matrix or edge list does not describe a valid network
    /// (non-square shape, non-0/1 entry, self-influence, bad index).
    #[error("invalid topology: {reason}")]
    InvalidTopology { reason: String },

    /// Initial opinion vector has the wrong length or an out-of-range value.
    #[error("invalid initial state: {reason}")]
    InvalidInitialState { reason: String },

    /// Model parameters violate their preconditions
    /// (theta outside [0, 1], r <= 0, epsilon <= 0, or non-finite).
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// A computed state contained NaN or infinity. Only reachable when the
    /// preconditions above were violated; reported with the step and
    /// participant that produced the value.
    #[error("numeric anomaly at step {step}, participant {participant}: value {value}")]
    NumericAnomaly {
        step: u64,
        participant: usize,
        value: f64,
    },
}

impl SimError {
    pub(crate) fn topology(reason: impl Into<String>) -> Self {
        SimError::InvalidTopology {
            reason: reason.into(),
        }
    }

    pub(crate) fn initial_state(reason: impl Into<String>) -> Self {
        SimError::InvalidInitialState {
            reason: reason.into(),
        }
    }

    pub(crate) fn parameters(reason: impl Into<String>) -> Self {
        SimError::InvalidParameters {
            reason: reason.into(),
        }
    }
}
