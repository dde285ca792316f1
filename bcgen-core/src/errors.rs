use thiserror::Error;

#[derive(Error, Debug)]
pub enum BarcodeError {
    #[error("Number of sequences must be greater than zero")]
    InvalidCount,

    #[error("Sequence length must be greater than zero")]
    InvalidLength,

    #[error("Invalid base '{base}' at position {position}, expected one of A, C, G, T")]
    InvalidBase { base: char, position: usize },

    #[error("Sequence is empty")]
    EmptySequence,

    #[error("Sequence length mismatch: expected {expected}, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Sequence {sequence} contains adjacent repeated bases")]
    AdjacentRepeat { sequence: String },

    #[error("Sequences {first} and {second} differ in only {distance} position(s)")]
    TooClose {
        first: String,
        second: String,
        distance: usize,
    },

    #[error("Sequence {sequence} occurs more than once")]
    Duplicate { sequence: String },

    #[error(
        "Cannot generate {count} sequences of length {length}: at most {bound} can satisfy the constraints"
    )]
    Infeasible {
        count: usize,
        length: usize,
        bound: usize,
    },

    #[error("Gave up after {attempts} rejected candidates of length {length}")]
    AttemptsExhausted { attempts: u64, length: usize },

    #[error(
        "The number of sequences generated ({actual}) is not equal to the number of sequences requested ({expected})"
    )]
    CountMismatch { expected: usize, actual: usize },

    #[error("Shared pool lock was poisoned by a panicking worker")]
    PoolPoisoned,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
