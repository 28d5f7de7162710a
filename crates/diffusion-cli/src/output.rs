//! Trajectory Output
//!
//! Serializes a completed run to JSON for downstream plotting and
//! analysis. Each recorded state is an ordered list of floats, one per
//! participant.

use serde::Serialize;
use std::fs;
use std::path::Path;

use diffusion_core::{OpinionVector, Params, Trajectory};

/// Default output path for trajectory documents
pub const DEFAULT_OUTPUT_PATH: &str = "output/trajectory.json";

/// Serialized form of one simulation run
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryDocument {
    pub participants: usize,
    pub parameters: Params,
    pub total_steps: u64,
    pub sample_every: u64,
    /// Step index of each recorded state
    pub recorded_steps: Vec<u64>,
    /// Recorded opinion vectors, parallel to `recorded_steps`
    pub states: Vec<OpinionVector>,
}

impl TrajectoryDocument {
    pub fn from_run(
        trajectory: &Trajectory,
        params: &Params,
        total_steps: u64,
        sample_every: u64,
    ) -> Self {
        let participants = trajectory
            .initial_state()
            .map(|u| u.len())
            .unwrap_or(0);
        TrajectoryDocument {
            participants,
            parameters: *params,
            total_steps,
            sample_every,
            recorded_steps: trajectory.steps.clone(),
            states: trajectory.states.clone(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            tracing::error!("Failed to serialize trajectory: {}", e);
            String::from("{}")
        })
    }
}

/// Write the document to the given path, creating parent directories.
pub fn write_document(doc: &TrajectoryDocument, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, doc.to_json())
}
