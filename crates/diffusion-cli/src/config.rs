//! Scenario Configuration
//!
//! Loads a simulation scenario from a TOML file so networks, parameters,
//! and initial conditions can be adjusted without recompiling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use diffusion_core::{AdjacencyModel, OpinionVector, Params, SimError};

/// Default scenario file path
pub const DEFAULT_SCENARIO_PATH: &str = "scenario.toml";

/// Top-level scenario structure
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    pub simulation: SimulationConfig,
    pub parameters: Params,
    pub network: NetworkConfig,
    pub initial: InitialConfig,
}

/// Run length, recording, and seeding
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub steps: u64,
    #[serde(default = "default_sample_every")]
    pub sample_every: u64,
    /// Seed for randomized initial conditions; unused for explicit ones.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_sample_every() -> u64 {
    1
}

fn default_seed() -> u64 {
    42
}

/// Network topology description
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NetworkConfig {
    /// Cycle of `participants` nodes, each influenced by both neighbors
    Ring { participants: usize },
    /// Explicit directed edges; `[i, j]` means j influences i
    Edges {
        participants: usize,
        edges: Vec<(usize, usize)>,
    },
}

impl NetworkConfig {
    pub fn participants(&self) -> usize {
        match self {
            NetworkConfig::Ring { participants } => *participants,
            NetworkConfig::Edges { participants, .. } => *participants,
        }
    }

    pub fn build(&self) -> Result<AdjacencyModel, SimError> {
        match self {
            NetworkConfig::Ring { participants } => AdjacencyModel::ring(*participants),
            NetworkConfig::Edges {
                participants,
                edges,
            } => AdjacencyModel::from_edges(*participants, edges),
        }
    }
}

/// Initial opinion assignment
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialConfig {
    /// One opinion per participant, listed explicitly
    Explicit { values: Vec<f64> },
    /// Every participant starts at the same value
    Uniform { value: f64 },
    /// Opinions drawn uniformly from [0, 1] with the simulation seed
    Random,
}

impl InitialConfig {
    pub fn build(&self, n: usize, seed: u64) -> Result<OpinionVector, SimError> {
        match self {
            InitialConfig::Explicit { values } => OpinionVector::new(values.clone()),
            InitialConfig::Uniform { value } => OpinionVector::uniform(n, *value),
            InitialConfig::Random => {
                let mut rng = SmallRng::seed_from_u64(seed);
                OpinionVector::new((0..n).map(|_| rng.gen::<f64>()).collect())
            }
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from the default path, or fall back to the built-in scenario
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_SCENARIO_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load scenario.toml: {}. Using defaults.", e);
            Self::default()
        })
    }
}

impl Default for ScenarioConfig {
    /// The reference ring scenario: 4 participants, theta = 0.5, r = 0.5,
    /// epsilon = 2.5, alternating polarized initial opinions.
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                steps: 100,
                sample_every: 1,
                seed: 42,
            },
            parameters: Params {
                theta: 0.5,
                r: 0.5,
                epsilon: 2.5,
            },
            network: NetworkConfig::Ring { participants: 4 },
            initial: InitialConfig::Explicit {
                values: vec![0.1, 0.9, 0.1, 0.9],
            },
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
