//! Trajectory Driver
//!
//! Repeated application of the update operator with snapshot recording.
//! The mathematical trajectory is always the full sequence u0..uT; the
//! sampling stride only controls which states are retained, to bound
//! memory for long runs over large networks.

use tracing::debug;

use crate::error::SimError;
use crate::params::Params;
use crate::state::OpinionVector;
use crate::step::step;
use crate::topology::AdjacencyModel;

/// Run length and recording policy for one simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrajectorySpec {
    /// Number of update steps T. T = 0 yields the one-element trajectory.
    pub steps: u64,
    /// Retain every k-th state (plus step 0 and the final step).
    pub sample_every: u64,
}

impl TrajectorySpec {
    pub fn new(steps: u64) -> Self {
        TrajectorySpec {
            steps,
            sample_every: 1,
        }
    }

    pub fn with_sampling(mut self, sample_every: u64) -> Self {
        self.sample_every = sample_every.max(1);
        self
    }
}

/// Recorded states of a completed run, step indices alongside snapshots.
/// Index 0 is always the initial state; the final step is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub steps: Vec<u64>,
    pub states: Vec<OpinionVector>,
}

impl Trajectory {
    fn with_capacity(capacity: usize) -> Self {
        Trajectory {
            steps: Vec::with_capacity(capacity),
            states: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, step_index: u64, state: OpinionVector) {
        self.steps.push(step_index);
        self.states.push(state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn initial_state(&self) -> Option<&OpinionVector> {
        self.states.first()
    }

    pub fn final_state(&self) -> Option<&OpinionVector> {
        self.states.last()
    }
}

/// Drive `spec.steps` update steps from `u0`, recording per `spec`.
///
/// Inputs are re-validated at entry even when the caller already did so:
/// parameters against their preconditions, the initial vector against the
/// model's participant count and the [0, 1] range. A NaN or infinity in a
/// computed state aborts the run with the offending step and participant.
pub fn simulate(
    u0: &OpinionVector,
    model: &AdjacencyModel,
    params: &Params,
    spec: TrajectorySpec,
) -> Result<Trajectory, SimError> {
    params.validate()?;
    if u0.len() != model.participants() {
        return Err(SimError::initial_state(format!(
            "initial vector has length {}, network has {} participants",
            u0.len(),
            model.participants()
        )));
    }
    // Range re-check: OpinionVector enforces [0, 1] on construction, but
    // the driver validates defensively at entry.
    OpinionVector::new(u0.as_slice().to_vec())?;

    let sample_every = spec.sample_every.max(1);
    let capacity = (spec.steps / sample_every + 2) as usize;
    let mut trajectory = Trajectory::with_capacity(capacity);
    trajectory.push(0, u0.clone());

    debug!(
        participants = model.participants(),
        steps = spec.steps,
        sample_every,
        "starting simulation run"
    );

    let mut current = u0.clone();
    for k in 1..=spec.steps {
        let next = step(&current, model, params);
        check_finite(&next, k)?;

        if k % sample_every == 0 || k == spec.steps {
            trajectory.push(k, next.clone());
        }
        current = next;
    }

    debug!(recorded = trajectory.len(), "simulation run complete");
    Ok(trajectory)
}

/// Convenience wrapper retaining every intermediate state.
pub fn simulate_every(
    u0: &OpinionVector,
    model: &AdjacencyModel,
    params: &Params,
    steps: u64,
) -> Result<Trajectory, SimError> {
    simulate(u0, model, params, TrajectorySpec::new(steps))
}

fn check_finite(u: &OpinionVector, step_index: u64) -> Result<(), SimError> {
    for (i, &v) in u.iter().enumerate() {
        if !v.is_finite() {
            return Err(SimError::NumericAnomaly {
                step: step_index,
                participant: i,
                value: v,
            });
        }
    }
    Ok(())
}
