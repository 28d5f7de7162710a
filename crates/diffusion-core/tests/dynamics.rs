//! Dynamics verification tests
//!
//! Hand-computed reference values and the bounded/saturating properties of
//! the opinion update rule, exercised through the public interface.

use diffusion_core::{
    simulate, simulate_every, step, AdjacencyModel, OpinionVector, Params, SimError,
    TrajectorySpec,
};

/// The reference scenario: 4 participants on a ring, each influenced by
/// both neighbors, theta = 0.5, r = 0.5, epsilon = 2.5.
fn reference_scenario() -> (OpinionVector, AdjacencyModel, Params) {
    let u0 = OpinionVector::new(vec![0.1, 0.9, 0.1, 0.9]).unwrap();
    let model = AdjacencyModel::ring(4).unwrap();
    let params = Params::new(0.5, 0.5, 2.5).unwrap();
    (u0, model, params)
}

#[test]
fn test_ring_scenario_one_step_hand_computed() {
    let (u0, model, params) = reference_scenario();
    let next = step(&u0, &model, &params);

    // Participant 0: avg = (0.9 + 0.9)/2 = 0.9
    //   raw = 0.1 + 0.5*(0.5 - 0.1) + 2.5*0.1*0.9*(0.9 - 0.5) = 0.39
    // Participant 1: avg = (0.1 + 0.1)/2 = 0.1
    //   raw = 0.9 + 0.5*(0.5 - 0.9) + 2.5*0.9*0.1*(0.1 - 0.5) = 0.61
    // Participants 2 and 3 mirror 0 and 1 by symmetry.
    let expected = [0.39, 0.61, 0.39, 0.61];
    for (i, &e) in expected.iter().enumerate() {
        assert!(
            (next[i] - e).abs() < 1e-12,
            "participant {}: got {}, expected {}",
            i,
            next[i],
            e
        );
    }
}

#[test]
fn test_boundedness_over_long_run() {
    // Aggressive influence strength forces repeated boundary hits; every
    // recorded component must stay inside [0, 1].
    let u0 = OpinionVector::new(vec![0.05, 0.95, 0.5, 0.02, 0.98, 0.5]).unwrap();
    let model = AdjacencyModel::ring(6).unwrap();
    let params = Params::new(0.3, 0.9, 50.0).unwrap();

    let trajectory = simulate_every(&u0, &model, &params, 500).unwrap();
    assert_eq!(trajectory.len(), 501);
    for state in &trajectory.states {
        for &v in state.iter() {
            assert!((0.0..=1.0).contains(&v), "opinion {} escaped [0, 1]", v);
        }
    }
}

#[test]
fn test_fixed_point_at_theta() {
    // With everyone at theta the neighbor averages equal theta, both terms
    // vanish, and the state is exactly preserved.
    let model = AdjacencyModel::ring(8).unwrap();
    let params = Params::new(0.5, 0.7, 3.0).unwrap();
    let u0 = OpinionVector::uniform(8, params.theta).unwrap();

    let trajectory = simulate_every(&u0, &model, &params, 50).unwrap();
    assert_eq!(trajectory.final_state(), Some(&u0));
}

#[test]
fn test_saturation_damping_at_boundaries() {
    // At u[i] = 0 and u[i] = 1 the influence term contributes exactly zero,
    // whatever the neighbor average: the update is pure reversion.
    let model = AdjacencyModel::ring(4).unwrap();
    let params = Params::new(0.4, 0.25, 10.0).unwrap();
    let u0 = OpinionVector::new(vec![0.0, 1.0, 0.0, 1.0]).unwrap();

    let next = step(&u0, &model, &params);
    assert_eq!(next[0], 0.0 + params.r * (params.theta - 0.0));
    assert_eq!(next[1], 1.0 + params.r * (params.theta - 1.0));
}

#[test]
fn test_isolated_node_reversion() {
    // Participant 2 has no influencers: its trajectory is the pure
    // reversion map clamped to [0, 1], independent of epsilon and of
    // everyone else's opinions.
    let model = AdjacencyModel::from_edges(3, &[(0, 1), (1, 0)]).unwrap();
    let u0 = OpinionVector::new(vec![0.1, 0.9, 0.8]).unwrap();

    let weak = Params::new(0.5, 0.25, 0.001).unwrap();
    let strong = Params::new(0.5, 0.25, 75.0).unwrap();

    let run_weak = simulate_every(&u0, &model, &weak, 20).unwrap();
    let run_strong = simulate_every(&u0, &model, &strong, 20).unwrap();

    let mut expected: f64 = 0.8;
    for k in 1..=20usize {
        expected = (expected + 0.25 * (0.5 - expected)).clamp(0.0, 1.0);
        assert_eq!(run_weak.states[k][2], run_strong.states[k][2]);
        assert!((run_weak.states[k][2] - expected).abs() < 1e-12);
    }
}

#[test]
fn test_polarized_pair_converges_toward_baseline() {
    // On the reference ring the reversion term dominates over time and the
    // population contracts toward theta.
    let (u0, model, params) = reference_scenario();
    let trajectory = simulate_every(&u0, &model, &params, 200).unwrap();
    let last = trajectory.final_state().unwrap();
    for &v in last.iter() {
        assert!((v - params.theta).abs() < 1e-6);
    }
}

#[test]
fn test_rejection_nonzero_diagonal() {
    let mut raw = vec![vec![0u8; 4]; 4];
    raw[2][2] = 1;
    let err = AdjacencyModel::from_matrix(&raw).unwrap_err();
    assert!(matches!(err, SimError::InvalidTopology { .. }));
}

#[test]
fn test_rejection_out_of_range_initial_state() {
    let err = OpinionVector::new(vec![0.5, -0.1, 0.5]).unwrap_err();
    assert!(matches!(err, SimError::InvalidInitialState { .. }));
}

#[test]
fn test_rejection_zero_reversion_rate() {
    let err = Params::new(0.5, 0.0, 2.5).unwrap_err();
    assert!(matches!(err, SimError::InvalidParameters { .. }));
}

#[test]
fn test_arbitrary_directed_graph() {
    // Not a regular topology: participant 0 listens to everyone,
    // participant 3 listens to nobody.
    let model =
        AdjacencyModel::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 0), (2, 0)]).unwrap();
    let u0 = OpinionVector::new(vec![0.2, 0.6, 0.8, 1.0]).unwrap();
    let params = Params::new(0.5, 0.5, 2.5).unwrap();

    let next = step(&u0, &model, &params);

    // avg_0 = (0.6 + 0.8 + 1.0) / 3 = 0.8
    let avg0 = (0.6 + 0.8 + 1.0) / 3.0;
    let raw0 = 0.2 + 0.5 * (0.5 - 0.2) + 2.5 * 0.2 * 0.8 * (avg0 - 0.5);
    assert!((next[0] - raw0).abs() < 1e-12);

    // Participant 3 sits at the boundary with no influencers: pure reversion.
    assert_eq!(next[3], 1.0 + 0.5 * (0.5 - 1.0));
}

#[test]
fn test_sampled_run_bounded_too() {
    let (u0, model, params) = reference_scenario();
    let spec = TrajectorySpec::new(100).with_sampling(10);
    let trajectory = simulate(&u0, &model, &params, spec).unwrap();
    assert_eq!(trajectory.steps.first(), Some(&0));
    assert_eq!(trajectory.steps.last(), Some(&100));
    for state in &trajectory.states {
        for &v in state.iter() {
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
