//! End-to-end inference over a small regional system
//!
//! Exercises the full pipeline the way a caller would: build a relation
//! from regime labels, decompose, run inference, and read the results.

use approx::assert_relative_eq;
use ineq_core::{GroupPartition, NeighborRelation};
use ineq_inference::{GiniSpatial, PermutationEngine, TheilDSim};
use ineq_measures::{gini, theil_d};

/// Per-capita income for twelve regions in three regimes, with a strong
/// regime gradient.
const INCOME: [f64; 12] = [
    4.2, 5.1, 3.8, 4.9, // west
    9.5, 10.2, 11.1, 9.9, // center
    17.3, 18.0, 16.4, 17.9, // east
];

const REGIMES: [&str; 12] = [
    "west", "west", "west", "west", "center", "center", "center", "center", "east", "east",
    "east", "east",
];

#[test]
fn spatial_gini_pipeline() {
    let w = NeighborRelation::block(&REGIMES).unwrap();
    let result = GiniSpatial::new()
        .with_permutations(999)
        .with_seed(12345)
        .compute(&INCOME, &w)
        .unwrap();

    let d = &result.decomposition;

    // The decomposition agrees with the classic Gini.
    let classic = gini(&INCOME).unwrap();
    assert_eq!(d.g, classic.g);
    assert_relative_eq!(d.neighbor_sad + d.distant_sad, classic.sad, max_relative = 1e-12);

    // Pair bookkeeping: 3 regimes of 4 units.
    assert_eq!(d.n_pairs, 66);
    assert_eq!(d.n_neighbor_pairs, 18);
    assert_eq!(d.n_distant_pairs, 48);

    // A strong regime gradient concentrates inequality in distant pairs.
    assert!(d.polarization > 1.0);
    assert!(result.p_sim() <= 0.01);
    assert!(result.polarization_p_sim() <= 0.01);
    assert!(d.distant_sad > result.expected_distant_sad());
    assert!(result.z_distant_sad().unwrap() > 0.0);
    assert!(result.p_z_sim().unwrap() < 0.5);
}

#[test]
fn theil_pipeline_agrees_with_gini_story() {
    let p = GroupPartition::from_labels(&REGIMES).unwrap();
    let r = TheilDSim::new()
        .with_permutations(999)
        .with_seed(12345)
        .compute(&INCOME, &p)
        .unwrap();

    let d = theil_d(&INCOME, &p).unwrap();
    assert_eq!(r.between, d.between);

    // Most inequality is between regimes, and that is significant.
    assert!(r.between_share().unwrap() > 0.5);
    assert!(r.p_sim() <= 0.01);
}

#[test]
fn engine_is_reproducible_across_statistics() {
    let w = NeighborRelation::block(&REGIMES).unwrap();
    let engine = PermutationEngine::new().with_permutations(99).with_seed(7);

    let a = engine
        .run(&INCOME, |perm| {
            ineq_core::split_sad(perm, &w).map(|s| s.distant())
        })
        .unwrap();
    let b = engine
        .run(&INCOME, |perm| {
            ineq_core::split_sad(perm, &w).map(|s| s.distant())
        })
        .unwrap();

    assert_eq!(a.simulated(), b.simulated());
    assert_eq!(a.pseudo_p(), b.pseudo_p());
    assert!(a.pseudo_p() >= 0.01 && a.pseudo_p() <= 1.0);
}

#[test]
fn shuffled_labels_are_not_significant() {
    // Same values, but regimes interleaved so neighbors span the whole
    // range: no spatial signal to find.
    let labels = [
        "a", "b", "c", "a", "b", "c", "a", "b", "c", "a", "b", "c",
    ];
    let w = NeighborRelation::block(&labels).unwrap();
    let result = GiniSpatial::new()
        .with_permutations(999)
        .with_seed(54321)
        .compute(&INCOME, &w)
        .unwrap();

    assert!(result.p_sim() > 0.05);
}
