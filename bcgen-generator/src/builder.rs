use std::fmt::{self, Display};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use bcgen_core::errors::{BarcodeError, Result};
use bcgen_core::models::{GenerationRequest, Pool, Sequence};

use crate::batch::ParallelBatchRunner;
use crate::config::GeneratorConfig;
use crate::shared::SharedPool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    Init,
    FastBatch,
    StrictFill,
    Done,
}

impl Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildPhase::Init => "init",
            BuildPhase::FastBatch => "fast batch",
            BuildPhase::StrictFill => "strict fill",
            BuildPhase::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Counts collected while building a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub requested: usize,
    pub length: usize,
    pub workers: usize,
    /// Sequences returned by the fast batch, before deduplication.
    pub fast_generated: usize,
    /// Fast-batch sequences kept after removing duplicates and near-duplicates.
    pub fast_unique: usize,
    /// Sequences left for the strict phase.
    pub remaining: usize,
    pub final_count: usize,
}

///
/// Builds a pool of exactly `count` barcodes in two phases.
///
/// The fast phase generates `count` sequences in parallel against an empty
/// snapshot, which is cheap but lets sibling tasks produce duplicates and
/// near-duplicates. Those are dropped, and the strict phase tops the pool up,
/// checking every new sequence against the full shared pool including other
/// sequences accepted in the same phase.
///
/// ```rust,no_run
/// use bcgen_core::models::GenerationRequest;
/// use bcgen_generator::{GeneratorConfig, TwoPhasePoolBuilder};
///
/// let request = GenerationRequest::new(1000, 11).unwrap();
/// let mut builder = TwoPhasePoolBuilder::new(GeneratorConfig::default().with_seed(42)).unwrap();
/// let barcodes = builder.build(&request).unwrap();
/// assert_eq!(barcodes.len(), 1000);
/// ```
pub struct TwoPhasePoolBuilder {
    runner: ParallelBatchRunner,
    phase: BuildPhase,
}

impl TwoPhasePoolBuilder {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Ok(Self {
            runner: ParallelBatchRunner::new(&config)?,
            phase: BuildPhase::Init,
        })
    }

    pub fn phase(&self) -> BuildPhase {
        self.phase
    }

    pub fn workers(&self) -> usize {
        self.runner.workers()
    }

    fn enter(&mut self, phase: BuildPhase) {
        debug!("Pool builder: {} -> {}", self.phase, phase);
        self.phase = phase;
    }

    pub fn build(&mut self, request: &GenerationRequest) -> Result<Vec<Sequence>> {
        self.build_with_stats(request).map(|(sequences, _)| sequences)
    }

    pub fn build_with_stats(
        &mut self,
        request: &GenerationRequest,
    ) -> Result<(Vec<Sequence>, BuildStats)> {
        self.enter(BuildPhase::Init);

        // re-validate, the fields are public
        let request = GenerationRequest::new(request.count, request.length)?;
        let mut stats = BuildStats {
            requested: request.count,
            length: request.length,
            workers: self.runner.workers(),
            ..Default::default()
        };

        info!(
            "Generating {} sequences of length {} with {} workers",
            request.count,
            request.length,
            self.runner.workers()
        );

        self.enter(BuildPhase::FastBatch);
        let first_shot = self.runner.run_batch(request.count, request.length, &[])?;
        stats.fast_generated = first_shot.len();

        let (pool, dropped) = Pool::from_sequences(request.length, first_shot);
        stats.fast_unique = pool.len();
        stats.remaining = request.count - pool.len();
        info!(
            "First shot sequences generated: {} ({} dropped as duplicates or near-duplicates)",
            stats.fast_unique,
            dropped
        );
        info!("Remaining {} will be generated with stricter checks", stats.remaining);

        self.enter(BuildPhase::StrictFill);
        let shared = SharedPool::new(pool);
        self.runner.run_strict(stats.remaining, &shared)?;
        let pool = shared.into_inner()?;

        self.enter(BuildPhase::Done);
        if pool.len() != request.count {
            return Err(BarcodeError::CountMismatch {
                expected: request.count,
                actual: pool.len(),
            });
        }

        let sequences = pool.into_vec();
        Pool::verify(&sequences, request.length)?;
        stats.final_count = sequences.len();
        info!("Generated {} sequences", stats.final_count);

        Ok((sequences, stats))
    }
}

///
/// Generate `count` barcodes of length `length` in one call.
///
pub fn generate_barcodes(
    count: usize,
    length: usize,
    config: GeneratorConfig,
) -> Result<Vec<Sequence>> {
    let request = GenerationRequest::new(count, length)?;
    TwoPhasePoolBuilder::new(config)?.build(&request)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn quiet() -> GeneratorConfig {
        GeneratorConfig::default().with_progress(false).with_seed(1234)
    }

    #[rstest]
    fn test_phase_transitions(quiet: GeneratorConfig) {
        let mut builder = TwoPhasePoolBuilder::new(quiet.with_threads(2)).unwrap();
        assert_eq!(builder.phase(), BuildPhase::Init);
        let request = GenerationRequest::new(30, 6).unwrap();
        builder.build(&request).unwrap();
        assert_eq!(builder.phase(), BuildPhase::Done);
    }

    #[rstest]
    fn test_stats_add_up(quiet: GeneratorConfig) {
        let mut builder = TwoPhasePoolBuilder::new(quiet.with_threads(3)).unwrap();
        let request = GenerationRequest::new(500, 8).unwrap();
        let (sequences, stats) = builder.build_with_stats(&request).unwrap();

        assert_eq!(stats.requested, 500);
        assert_eq!(stats.length, 8);
        assert_eq!(stats.workers, 3);
        assert_eq!(stats.fast_generated, 500);
        assert_eq!(stats.fast_unique + stats.remaining, 500);
        assert_eq!(stats.final_count, 500);
        assert_eq!(sequences.len(), 500);
    }

    #[rstest]
    fn test_invalid_request_fails_before_sampling(quiet: GeneratorConfig) {
        let mut builder = TwoPhasePoolBuilder::new(quiet).unwrap();
        let request = GenerationRequest {
            count: 0,
            length: 5,
        };
        assert!(matches!(
            builder.build(&request),
            Err(BarcodeError::InvalidCount)
        ));
        assert_eq!(builder.phase(), BuildPhase::Init);
    }

    #[rstest]
    fn test_generate_barcodes_single(quiet: GeneratorConfig) {
        let out = generate_barcodes(1, 5, quiet).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), 5);
    }

    #[rstest]
    fn test_stats_serialize_to_json(quiet: GeneratorConfig) {
        let mut builder = TwoPhasePoolBuilder::new(quiet.with_threads(2)).unwrap();
        let request = GenerationRequest::new(40, 6).unwrap();
        let (_, stats) = builder.build_with_stats(&request).unwrap();

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["requested"], 40);
        assert_eq!(json["final_count"], 40);

        let parsed: BuildStats = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, stats);
    }
}
