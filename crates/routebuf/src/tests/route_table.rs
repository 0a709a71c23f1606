// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use routebuf_rand::RandomError;
use routebuf_rand::test_utils::{MockRandomSource, MockRandomSourceBehaviour};

use crate::error::BufferError;
use crate::route_table::RouteTable;
use crate::tests::utils::seeded;

#[test]
fn test_build_maps_exactly_the_permutation() {
    let table = RouteTable::build(&[2, 0, 3, 1]).expect("Failed to build()");

    assert_eq!(table.len(), 4);
    assert_eq!(table.as_slice(), &[2, 0, 3, 1]);
    assert_eq!(table.physical(0), Some(2));
    assert_eq!(table.physical(3), Some(1));
    assert_eq!(table.physical(4), None);
}

#[test]
fn test_build_empty_table() {
    let table = RouteTable::build(&[]).expect("Failed to build()");

    assert!(table.is_empty());
    assert_eq!(table.physical(0), None);
}

#[test]
fn test_build_rejects_non_permutations() {
    assert!(matches!(
        RouteTable::build(&[0, 0, 1]),
        Err(BufferError::InvalidPermutation)
    ));
    assert!(matches!(
        RouteTable::build(&[0, 1, 3]),
        Err(BufferError::InvalidPermutation)
    ));
}

#[test]
fn test_rebuild_replaces_routes_in_place() {
    let mut table = RouteTable::build(&[0, 1, 2]).expect("Failed to build()");

    table.rebuild(&[1, 2, 0]).expect("Failed to rebuild()");

    assert_eq!(table.as_slice(), &[1, 2, 0]);
}

#[test]
fn test_rebuild_rejects_length_mismatch_and_keeps_routes() {
    let mut table = RouteTable::build(&[0, 1, 2]).expect("Failed to build()");

    assert!(matches!(
        table.rebuild(&[1, 0]),
        Err(BufferError::InvalidPermutation)
    ));
    assert!(matches!(
        table.rebuild(&[1, 1, 0]),
        Err(BufferError::InvalidPermutation)
    ));
    assert_eq!(table.as_slice(), &[0, 1, 2]);
}

#[test]
fn test_generate_propagates_random_failure() {
    let mut rng = MockRandomSource::new(&[1], MockRandomSourceBehaviour::FailAlways);

    let result = RouteTable::generate(8, &mut rng);

    assert!(matches!(
        result,
        Err(BufferError::Random(RandomError::EntropyNotAvailable))
    ));
}

#[test]
fn test_debug_does_not_leak_routes() {
    let table = RouteTable::build(&[3, 1, 2, 0]).expect("Failed to build()");
    let debug = format!("{:?}", table);

    assert!(debug.contains("len: 4"));
    assert!(!debug.contains('3'));
}

proptest! {
    #[test]
    fn prop_generated_routes_are_overlap_free(seed in 1u64.., len in 0usize..1024) {
        let table = RouteTable::generate(len, &mut seeded(seed)).expect("Failed to generate()");

        let mut hits = vec![false; len];
        for logical in 0..len {
            let physical = table.physical(logical).expect("Failed to physical()");
            prop_assert!(!hits[physical], "physical {} routed twice", physical);
            hits[physical] = true;
        }
        prop_assert!(hits.iter().all(|&hit| hit));
    }
}
