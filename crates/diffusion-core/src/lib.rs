//! Opinion diffusion engine: network topology, nonlinear opinion updates,
//! and trajectory recording.
//!
//! The model evolves a vector of opinions in [0, 1] over a fixed directed
//! network. Each step pulls every participant toward a baseline value and
//! perturbs them by a saturating comparison against the average opinion of
//! their influencers, then clamps back into [0, 1].

pub mod error;
pub mod params;
pub mod state;
pub mod step;
pub mod topology;
pub mod trajectory;

pub use error::SimError;
pub use params::Params;
pub use state::OpinionVector;
pub use step::step;
pub use topology::AdjacencyModel;
pub use trajectory::{simulate, simulate_every, Trajectory, TrajectorySpec};
