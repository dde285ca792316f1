//! # bcgen-generator
//!
//! Generates sets of DNA barcodes where no two neighbouring bases are equal and
//! every pair of barcodes differs in at least two positions.
//!
//! Candidates are drawn uniformly and rejected until they pass both checks
//! ([UniqueSequenceGenerator]). Many such draws run in parallel
//! ([ParallelBatchRunner]), and [TwoPhasePoolBuilder] combines a cheap first
//! batch with a strict top-up against a shared pool to reach the exact count.
//!
//! ## Module Structure
//!
//! - [`sampler`] - unconstrained random candidates and per-task random streams
//! - [`generator`] - the rejection loop
//! - [`shared`] - the pool shared by strict-phase workers
//! - [`batch`] - fan-out over a rayon thread pool
//! - [`builder`] - the two-phase orchestration
//! - [`config`] - worker count, seed and retry limit

pub mod batch;
pub mod builder;
pub mod config;
pub mod generator;
pub mod sampler;
pub mod shared;

// Re-export commonly used types
pub use batch::ParallelBatchRunner;
pub use builder::{BuildPhase, BuildStats, TwoPhasePoolBuilder, generate_barcodes};
pub use config::GeneratorConfig;
pub use generator::UniqueSequenceGenerator;
pub use sampler::{Phase, SequenceSampler, sample_sequence, stream_rng};
pub use shared::SharedPool;
