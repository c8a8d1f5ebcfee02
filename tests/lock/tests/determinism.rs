//! Seeded runs are reproducible; unseeded order varies.

use std::collections::BTreeSet;

use lock_tests::search_test_helpers::grid;
use mazewalk_harness::config::RunConfig;
use mazewalk_harness::fixtures;
use mazewalk_harness::runner::{run, run_seeds};
use mazewalk_search::{DepthFirstSearch, NeighborOrder, RunState, SearchPolicy};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded(seed: u64) -> RunConfig {
    RunConfig {
        seed: Some(seed),
        ..RunConfig::default()
    }
}

#[test]
fn same_seed_same_digest_n10() {
    let maze = grid(fixtures::BRANCHING);
    let first = run(&maze, &seeded(17)).unwrap().digest().unwrap();
    for _ in 1..10 {
        let again = run(&maze, &seeded(17)).unwrap().digest().unwrap();
        assert_eq!(first, again);
    }
}

#[test]
fn fixed_order_ignores_the_seed() {
    let maze = grid(fixtures::BRANCHING);
    let digests: BTreeSet<String> = (0..8)
        .map(|seed| {
            let config = RunConfig {
                shuffle_neighbors: false,
                ..seeded(seed)
            };
            run(&maze, &config).unwrap().digest().unwrap()
        })
        .collect();
    assert_eq!(digests.len(), 1);
}

#[test]
fn different_seeds_explore_in_different_orders() {
    let maze = grid(fixtures::BRANCHING);
    let orders: BTreeSet<Vec<_>> = (0..32)
        .map(|seed| run(&maze, &seeded(seed)).unwrap().explored)
        .collect();
    assert!(orders.len() > 1, "shuffling never changed the visit order");
}

#[test]
fn solve_matches_caller_supplied_rng_with_same_seed() {
    let maze = grid(fixtures::BRANCHING);
    let engine = DepthFirstSearch::new(&maze, SearchPolicy::seeded(23));

    let mut by_seed = RunState::new();
    engine.solve(&mut by_seed).unwrap();

    let mut by_rng = RunState::new();
    let unseeded = DepthFirstSearch::new(
        &maze,
        SearchPolicy {
            neighbor_order: NeighborOrder::Shuffled,
            ..SearchPolicy::default()
        },
    );
    unseeded
        .solve_with_rng(&mut by_rng, &mut StdRng::seed_from_u64(23))
        .unwrap();

    assert_eq!(by_seed.explored.as_slice(), by_rng.explored.as_slice());
    assert_eq!(by_seed.solution, by_rng.solution);
}

#[test]
fn concurrent_runs_match_sequential_runs() {
    let maze = grid(fixtures::BRANCHING);
    let seeds: Vec<u64> = (100..116).collect();
    let parallel = run_seeds(&maze, &RunConfig::default(), &seeds).unwrap();

    for (seed, report) in seeds.iter().zip(&parallel) {
        let sequential = run(&maze, &seeded(*seed)).unwrap();
        assert_eq!(
            report.digest().unwrap(),
            sequential.digest().unwrap(),
            "seed {seed}"
        );
    }
}
