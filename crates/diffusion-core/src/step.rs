//! Update Operator
//!
//! Maps one opinion vector to the next. Every participant is updated from
//! the same prior-step vector (a synchronous map, never in-place), then
//! clamped independently back into [0, 1].
//!
//! For participant i with influencer average avg_i:
//!
//! ```text
//! raw_i  = u[i] + r*(theta - u[i]) + epsilon * u[i] * (1 - u[i]) * (avg_i - theta)
//! next_i = clamp(raw_i, 0, 1)
//! ```
//!
//! The factor u[i]*(1 - u[i]) vanishes at the extremes, so polarized
//! participants become progressively less responsive to their neighbors.
//! A participant with no influencers has no influence term at all and
//! evolves purely by reversion toward theta.

use crate::params::Params;
use crate::state::OpinionVector;
use crate::topology::AdjacencyModel;

/// Apply one synchronous update step. Pure: identical inputs always
/// produce the identical output vector, and `u` is never mutated.
pub fn step(u: &OpinionVector, model: &AdjacencyModel, params: &Params) -> OpinionVector {
    let averages = model.neighbor_average(u);

    let next = u
        .iter()
        .enumerate()
        .map(|(i, &u_i)| {
            let reversion = params.r * (params.theta - u_i);
            let influence = if model.is_isolated(i) {
                0.0
            } else {
                params.epsilon * u_i * (1.0 - u_i) * (averages[i] - params.theta)
            };
            (u_i + reversion + influence).clamp(0.0, 1.0)
        })
        .collect();

    OpinionVector::from_clamped(next)
}
