/// Symbols a barcode may contain.
pub const ALPHABET: &[u8; 4] = b"ACGT";

/// Minimum Hamming distance between any two members of a pool.
pub const MIN_DISTANCE: usize = 2;

pub const DEFAULT_NUM_SEQUENCES: usize = 22971;
pub const DEFAULT_SEQUENCE_LENGTH: usize = 11;

/// Rejected candidates tolerated per accepted sequence before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 1_000_000;

// placeholder used when building neighbour keys; never a valid base
pub const MASK_BYTE: u8 = b'N';
