//! End-to-end properties of the two-phase pool builder.
//!
//! Every generated set is checked for the barcode invariants: exact count,
//! distinct members, fixed length, alphabet, no adjacent repeats and pairwise
//! Hamming distance of at least two.

use std::collections::HashSet;

use bcgen_core::consts::ALPHABET;
use bcgen_core::constraints::{hamming_distance, has_adjacent_repeat};
use bcgen_core::errors::BarcodeError;
use bcgen_core::models::{GenerationRequest, Pool, Sequence};
use bcgen_generator::{
    GeneratorConfig, ParallelBatchRunner, SharedPool, TwoPhasePoolBuilder, generate_barcodes,
};
use pretty_assertions::assert_eq;
use rstest::*;

#[fixture]
fn config() -> GeneratorConfig {
    GeneratorConfig::default().with_progress(false)
}

/// Check every property by brute force, independent of the pool's own index.
fn assert_barcode_set(sequences: &[Sequence], count: usize, length: usize) {
    assert_eq!(sequences.len(), count, "wrong number of sequences");

    let distinct: HashSet<&Sequence> = sequences.iter().collect();
    assert_eq!(distinct.len(), count, "sequences are not distinct");

    for s in sequences {
        assert_eq!(s.len(), length, "{} has the wrong length", s);
        assert!(
            s.as_bytes().iter().all(|b| ALPHABET.contains(b)),
            "{} has a base outside ACGT",
            s
        );
        assert!(!has_adjacent_repeat(s.as_bytes()), "{} has a repeat", s);
    }

    for (i, a) in sequences.iter().enumerate() {
        for b in &sequences[i + 1..] {
            assert!(
                hamming_distance(a.as_bytes(), b.as_bytes()) >= 2,
                "{} and {} are too close",
                a,
                b
            );
        }
    }
}

#[rstest]
#[case(4, 3)]
#[case(1, 5)]
#[case(50, 6)]
#[case(300, 9)]
#[case(2000, 11)]
fn test_generated_sets_hold_invariants(
    config: GeneratorConfig,
    #[case] count: usize,
    #[case] length: usize,
) {
    let sequences = generate_barcodes(count, length, config.with_seed(count as u64)).unwrap();
    assert_barcode_set(&sequences, count, length);
}

#[rstest]
fn test_unseeded_run(config: GeneratorConfig) {
    let sequences = generate_barcodes(100, 8, config.with_threads(2)).unwrap();
    assert_barcode_set(&sequences, 100, 8);
}

#[rstest]
fn test_single_worker_runs_are_reproducible(config: GeneratorConfig) {
    let request = GenerationRequest::new(400, 8).unwrap();
    let run = || {
        TwoPhasePoolBuilder::new(config.clone().with_threads(1).with_seed(2024))
            .unwrap()
            .build(&request)
            .unwrap()
    };

    let first = run();
    let second = run();
    assert_eq!(first, second);
}

#[rstest]
fn test_different_seeds_give_different_sets(config: GeneratorConfig) {
    let a = generate_barcodes(50, 11, config.clone().with_threads(1).with_seed(1)).unwrap();
    let b = generate_barcodes(50, 11, config.with_threads(1).with_seed(2)).unwrap();
    assert!(a != b);
}

#[rstest]
fn test_fast_batch_alone_can_break_the_distance_invariant(config: GeneratorConfig) {
    // Without deduplication the fast batch is not a valid pool: 200 draws out
    // of the 36 repeat-free length-3 strings must collide.
    let runner = ParallelBatchRunner::new(&config.with_threads(4).with_seed(5)).unwrap();
    let first_shot = runner.run_batch(200, 3, &[]).unwrap();
    assert!(Pool::verify(&first_shot, 3).is_err());

    let (pool, dropped) = Pool::from_sequences(3, first_shot);
    assert!(dropped > 0);
    assert!(Pool::verify(pool.as_slice(), 3).is_ok());
}

#[rstest]
fn test_concurrent_strict_phase_keeps_invariants(config: GeneratorConfig) {
    // Many workers, a small space and a seeded pool: strict tasks race to
    // append neighbours of each other all the time.
    for seed in 0..10u64 {
        let seeded: Vec<Sequence> = ["ACACAC", "GTGTGT", "CACACA", "TGTGTG"]
            .iter()
            .map(|s| Sequence::try_from(*s).unwrap())
            .collect();
        let (pool, _) = Pool::from_sequences(6, seeded);
        let shared = SharedPool::new(pool);

        let runner =
            ParallelBatchRunner::new(&config.clone().with_threads(8).with_seed(seed)).unwrap();
        let appended = runner.run_strict(146, &shared).unwrap();
        assert_eq!(appended.len(), 146);

        let pool = shared.into_inner().unwrap();
        assert_barcode_set(pool.as_slice(), 150, 6);
    }
}

#[rstest]
fn test_infeasible_request_fails_fast(config: GeneratorConfig) {
    match generate_barcodes(13, 3, config.clone()) {
        Err(BarcodeError::Infeasible {
            count,
            length,
            bound,
        }) => {
            assert_eq!(count, 13);
            assert_eq!(length, 3);
            assert_eq!(bound, 12);
        }
        other => panic!("Expected Infeasible, got {:?}", other),
    }

    assert!(matches!(
        generate_barcodes(2, 1, config),
        Err(BarcodeError::Infeasible { .. })
    ));
}

#[rstest]
fn test_exhausted_space_terminates_with_error(config: GeneratorConfig) {
    // Within the capacity bound but out of reach once the strict phase has
    // painted itself into a corner; the attempt limit turns the hang into an
    // error.
    let config = config.with_seed(3).with_max_attempts(Some(20_000));
    for (count, length) in [(4usize, 2usize), (12, 3)] {
        match generate_barcodes(count, length, config.clone()) {
            Ok(sequences) => assert_barcode_set(&sequences, count, length),
            Err(e) => assert!(matches!(e, BarcodeError::AttemptsExhausted { .. })),
        }
    }
}

#[rstest]
fn test_malformed_requests(config: GeneratorConfig) {
    assert!(matches!(
        generate_barcodes(0, 11, config.clone()),
        Err(BarcodeError::InvalidCount)
    ));
    assert!(matches!(
        generate_barcodes(10, 0, config),
        Err(BarcodeError::InvalidLength)
    ));
}
