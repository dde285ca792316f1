//! Validity predicates for barcode candidates.
//!
//! A candidate is accepted when it has no two identical neighbouring bases and
//! sits at Hamming distance of at least [MIN_DISTANCE] from every sequence
//! already accepted.

use crate::consts::MIN_DISTANCE;
use crate::models::{Pool, Sequence};

///
/// True if any base equals the base right after it.
///
pub fn has_adjacent_repeat(seq: &[u8]) -> bool {
    seq.windows(2).any(|pair| pair[0] == pair[1])
}

///
/// Number of positions at which two equal-length sequences differ.
///
pub fn hamming_distance(a: &[u8], b: &[u8]) -> usize {
    debug_assert_eq!(a.len(), b.len(), "Sequences must have equal length");
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

///
/// True when `a` and `b` differ in fewer than [MIN_DISTANCE] positions.
/// Stops counting as soon as the threshold is reached.
///
pub fn too_close(a: &[u8], b: &[u8]) -> bool {
    let mut mismatches = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        if x != y {
            mismatches += 1;
            if mismatches >= MIN_DISTANCE {
                return false;
            }
        }
    }
    true
}

///
/// Check a candidate against every member of `pool`.
///
/// Returns false on the first member at distance 0 or 1, so an exact
/// duplicate is rejected here as well.
///
/// # Arguments
/// - seq: the candidate
/// - pool: sequences accepted so far
///
pub fn min_distance_ok<S: AsRef<[u8]>>(seq: &[u8], pool: &[S]) -> bool {
    !pool.iter().any(|existing| too_close(seq, existing.as_ref()))
}

///
/// Both predicates at once.
///
pub fn is_valid_candidate<S: AsRef<[u8]>>(seq: &[u8], pool: &[S]) -> bool {
    !has_adjacent_repeat(seq) && min_distance_ok(seq, pool)
}

///
/// Read access to a collection of accepted sequences, for the distance check.
///
/// Only the distance constraint is expressed here; the adjacency check does
/// not depend on the pool.
pub trait PoolView {
    fn is_far_enough(&self, candidate: &Sequence) -> bool;
}

impl PoolView for [Sequence] {
    fn is_far_enough(&self, candidate: &Sequence) -> bool {
        min_distance_ok(candidate.as_bytes(), self)
    }
}

impl PoolView for Vec<Sequence> {
    fn is_far_enough(&self, candidate: &Sequence) -> bool {
        self.as_slice().is_far_enough(candidate)
    }
}

impl PoolView for Pool {
    fn is_far_enough(&self, candidate: &Sequence) -> bool {
        !self.has_neighbour(candidate)
    }
}
