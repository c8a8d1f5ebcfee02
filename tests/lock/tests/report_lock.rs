//! Run report lock tests.
//!
//! Proves:
//! 1. The digest is SHA-256 over the domain prefix and canonical bytes
//! 2. The domain prefix follows `MAZEWALK::*::V1\0`
//! 3. Counters in the JSON agree with the arrays they describe

use lock_tests::search_test_helpers::grid;
use mazewalk_harness::config::RunConfig;
use mazewalk_harness::fixtures;
use mazewalk_harness::report::{DOMAIN_RUN_REPORT, REPORT_SCHEMA_VERSION};
use mazewalk_harness::runner::run;
use serde_json::Value;
use sha2::{Digest, Sha256};

fn seeded(seed: u64) -> RunConfig {
    RunConfig {
        seed: Some(seed),
        ..RunConfig::default()
    }
}

// ---------------------------------------------------------------------------
// 1. Digest recomputed independently
// ---------------------------------------------------------------------------

#[test]
fn digest_is_domain_prefixed_sha256_of_canonical_bytes() {
    let report = run(&grid(fixtures::BRANCHING), &seeded(2)).unwrap();
    let bytes = report.canonical_bytes().unwrap();

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_RUN_REPORT);
    hasher.update(&bytes);
    let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

    assert_eq!(report.digest().unwrap(), expected);
}

#[test]
fn canonical_bytes_parse_back_to_the_same_value() {
    let report = run(&grid(fixtures::WALLED_GOAL), &seeded(8)).unwrap();
    let bytes = report.canonical_bytes().unwrap();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    let reencoded = serde_json::to_vec(&parsed).unwrap();
    assert_eq!(bytes, reencoded, "canonical form is a fixed point");
}

// ---------------------------------------------------------------------------
// 2. Domain naming
// ---------------------------------------------------------------------------

#[test]
fn domain_prefix_is_null_terminated_and_namespaced() {
    assert_eq!(DOMAIN_RUN_REPORT.last(), Some(&0));
    let text = std::str::from_utf8(&DOMAIN_RUN_REPORT[..DOMAIN_RUN_REPORT.len() - 1]).unwrap();
    assert!(text.starts_with("MAZEWALK::"), "{text}");
    assert!(text.ends_with("::V1"), "{text}");
}

// ---------------------------------------------------------------------------
// 3. JSON counters
// ---------------------------------------------------------------------------

#[test]
fn json_counters_agree_with_payload() {
    for (name, text) in fixtures::ALL {
        let maze = grid(text);
        let value = run(&maze, &seeded(3)).unwrap().to_json();

        assert_eq!(value["schema_version"], REPORT_SCHEMA_VERSION, "{name}");
        let explored = value["explored"].as_array().unwrap();
        assert_eq!(
            value["counters"]["num_explored"].as_u64(),
            Some(explored.len() as u64),
            "{name}"
        );
        assert_eq!(
            value["counters"]["open_cells"].as_u64(),
            Some(maze.open_cell_count() as u64),
            "{name}"
        );
        assert!(value["elapsed_us"].is_u64(), "{name}");

        match &value["solution"] {
            Value::Null => assert_eq!(value["outcome"], "frontier_exhausted", "{name}"),
            solution => {
                assert_eq!(value["outcome"], "goal_reached", "{name}");
                let cells = solution["cells"].as_array().unwrap();
                assert_eq!(solution["actions"].as_array().unwrap().len(), cells.len());
                assert_eq!(solution["steps"].as_u64(), Some(cells.len() as u64));
                if let Some(last) = cells.last() {
                    assert_eq!(*last, value["goal"], "{name}");
                }
            }
        }
    }
}
