use fxhash::FxHashMap;

use crate::consts::MASK_BYTE;
use crate::constraints::{has_adjacent_repeat, hamming_distance};
use crate::errors::BarcodeError;
use crate::models::Sequence;

///
/// Pool struct, the growing set of accepted barcodes.
///
/// Members are kept in insertion order. Every member has length `length`,
/// has no adjacent repeated bases, and differs from every other member in at
/// least two positions.
///
/// Alongside the members the pool keeps a neighbour index: for each member and
/// each position `i`, the member with base `i` replaced by a mask symbol,
/// mapped to the member's position in the pool. Two sequences of the same
/// length are at distance 0 or 1 exactly when they share one of those keys, so
/// a candidate is checked with `length` lookups instead of a scan over the
/// whole pool. Members never share a key, so each key names one member.
///
#[derive(Clone, Debug)]
pub struct Pool {
    length: usize,
    members: Vec<Sequence>,
    neighbours: FxHashMap<Box<[u8]>, usize>,
}

impl Pool {
    pub fn new(length: usize) -> Self {
        Self {
            length,
            members: Vec::new(),
            neighbours: FxHashMap::default(),
        }
    }

    pub fn with_capacity(length: usize, capacity: usize) -> Self {
        let mut neighbours = FxHashMap::default();
        neighbours.reserve(capacity.saturating_mul(length));
        Self {
            length,
            members: Vec::with_capacity(capacity),
            neighbours,
        }
    }

    ///
    /// Greedily admit sequences in order, dropping any that would break the
    /// pool invariants (exact duplicates included).
    ///
    /// # Returns
    /// The pool and the number of sequences that were dropped.
    ///
    pub fn from_sequences<I>(length: usize, sequences: I) -> (Self, usize)
    where
        I: IntoIterator<Item = Sequence>,
    {
        let iter = sequences.into_iter();
        let mut pool = Pool::with_capacity(length, iter.size_hint().0);
        let mut rejected = 0;
        for seq in iter {
            if !pool.try_insert(seq) {
                rejected += 1;
            }
        }
        (pool, rejected)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.members.iter()
    }

    pub fn as_slice(&self) -> &[Sequence] {
        &self.members
    }

    ///
    /// Exact membership, answered from the neighbour index.
    ///
    pub fn contains(&self, seq: &Sequence) -> bool {
        if seq.len() != self.length || seq.is_empty() {
            return false;
        }

        // a member equal to `seq` owns the key masked at position 0
        let mut key = seq.as_bytes().to_vec();
        key[0] = MASK_BYTE;
        self.neighbours
            .get(key.as_slice())
            .is_some_and(|&idx| self.members[idx] == *seq)
    }

    ///
    /// The member at Hamming distance 0 or 1 from `seq`, if any.
    ///
    pub fn find_neighbour(&self, seq: &Sequence) -> Option<&Sequence> {
        if seq.len() != self.length || self.members.is_empty() {
            return None;
        }

        let mut key = seq.as_bytes().to_vec();
        for i in 0..key.len() {
            let base = key[i];
            key[i] = MASK_BYTE;
            if let Some(&idx) = self.neighbours.get(key.as_slice()) {
                return Some(&self.members[idx]);
            }
            key[i] = base;
        }
        None
    }

    ///
    /// True if some member is at Hamming distance 0 or 1 from `seq`.
    ///
    pub fn has_neighbour(&self, seq: &Sequence) -> bool {
        self.find_neighbour(seq).is_some()
    }

    ///
    /// Would `seq` keep every pool invariant if inserted?
    ///
    pub fn admits(&self, seq: &Sequence) -> bool {
        seq.len() == self.length && !has_adjacent_repeat(seq.as_bytes()) && !self.has_neighbour(seq)
    }

    ///
    /// Insert `seq` if the pool admits it.
    ///
    /// # Returns
    /// Whether the sequence was inserted.
    ///
    pub fn try_insert(&mut self, seq: Sequence) -> bool {
        if !self.admits(&seq) {
            return false;
        }

        let idx = self.members.len();
        let mut key = seq.as_bytes().to_vec();
        for i in 0..key.len() {
            let base = key[i];
            key[i] = MASK_BYTE;
            self.neighbours.insert(key.clone().into_boxed_slice(), idx);
            key[i] = base;
        }
        self.members.push(seq);
        true
    }

    pub fn into_vec(self) -> Vec<Sequence> {
        self.members
    }

    ///
    /// Check a finished collection against all pool invariants.
    ///
    /// Reports the first violation found, scanning in order.
    ///
    /// # Arguments
    /// - sequences: the collection to check
    /// - length: the length every member must have
    ///
    pub fn verify(sequences: &[Sequence], length: usize) -> Result<(), BarcodeError> {
        let mut pool = Pool::with_capacity(length, sequences.len());

        for seq in sequences {
            if seq.len() != length {
                return Err(BarcodeError::LengthMismatch {
                    expected: length,
                    actual: seq.len(),
                });
            }

            if has_adjacent_repeat(seq.as_bytes()) {
                return Err(BarcodeError::AdjacentRepeat {
                    sequence: seq.to_string(),
                });
            }

            if let Some(other) = pool.find_neighbour(seq) {
                let distance = hamming_distance(other.as_bytes(), seq.as_bytes());
                return Err(match distance {
                    0 => BarcodeError::Duplicate {
                        sequence: seq.to_string(),
                    },
                    _ => BarcodeError::TooClose {
                        first: other.to_string(),
                        second: seq.to_string(),
                        distance,
                    },
                });
            }

            pool.try_insert(seq.clone());
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

impl From<Pool> for Vec<Sequence> {
    fn from(pool: Pool) -> Self {
        pool.into_vec()
    }
}
