use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;

use bcgen_core::errors::{BarcodeError, Result};
use bcgen_core::models::Sequence;

use crate::config::GeneratorConfig;
use crate::generator::UniqueSequenceGenerator;
use crate::sampler::{Phase, SequenceSampler};
use crate::shared::SharedPool;

///
/// Fans generation tasks out over a fixed-size rayon thread pool.
///
/// Each task owns its random stream, derived from the configured seed and the
/// task index, so a seeded fast batch returns the same sequences in the same
/// order whatever the worker count. With a single worker tasks run in index
/// order on the calling thread, which also makes the strict phase
/// reproducible.
///
pub struct ParallelBatchRunner {
    pool: rayon::ThreadPool,
    workers: usize,
    seed: Option<u64>,
    max_attempts: Option<u64>,
    show_progress: bool,
}

impl ParallelBatchRunner {
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let workers = config.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| BarcodeError::ThreadPool(e.to_string()))?;

        Ok(Self {
            pool,
            workers,
            seed: config.seed,
            max_attempts: config.max_attempts,
            show_progress: config.show_progress,
        })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    fn progress_bar(&self, n: usize, label: &'static str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(n as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(label);
        bar
    }

    fn run_tasks<F>(&self, n: usize, label: &'static str, task: F) -> Result<Vec<Sequence>>
    where
        F: Fn(u64) -> Result<Sequence> + Sync + Send,
    {
        if n == 0 {
            return Ok(Vec::new());
        }

        let bar = self.progress_bar(n, label);
        let step = |i: usize| {
            let out = task(i as u64);
            bar.inc(1);
            out
        };

        let results = if self.workers == 1 {
            (0..n).map(step).collect::<Result<Vec<_>>>()
        } else {
            self.pool
                .install(|| (0..n).into_par_iter().map(step).collect::<Result<Vec<_>>>())
        };

        bar.finish_and_clear();
        results
    }

    ///
    /// Generate `n` sequences independently, each checked only against
    /// `snapshot`.
    ///
    /// Tasks don't see each other's output, so the result can contain
    /// duplicates and pairs at distance 1.
    ///
    /// # Arguments
    /// - n: number of sequences
    /// - length: length of every sequence
    /// - snapshot: read-only sequences every result must keep its distance from
    ///
    pub fn run_batch(
        &self,
        n: usize,
        length: usize,
        snapshot: &[Sequence],
    ) -> Result<Vec<Sequence>> {
        debug!(
            "Dispatching {} independent tasks against a snapshot of {} sequences",
            n,
            snapshot.len()
        );
        let generator = UniqueSequenceGenerator::new(length, self.max_attempts);
        self.run_tasks(n, "fast", |i| {
            let mut sampler = SequenceSampler::for_stream(self.seed, Phase::Fast, i);
            generator.generate(&mut sampler, snapshot)
        })
    }

    ///
    /// Generate `n` sequences, each accepted into the live `shared` pool.
    ///
    /// Every task appends exactly one sequence, checked against everything
    /// in the pool at the moment it is appended.
    ///
    pub fn run_strict(&self, n: usize, shared: &SharedPool) -> Result<Vec<Sequence>> {
        let length = shared.length()?;
        let seeded = shared.len()?;
        debug!("Dispatching {} strict tasks against a live pool of {} sequences", n, seeded);
        let generator = UniqueSequenceGenerator::new(length, self.max_attempts);
        self.run_tasks(n, "strict", |i| {
            let mut sampler = SequenceSampler::for_stream(self.seed, Phase::Strict, i);
            generator.generate_into(&mut sampler, shared)
        })
    }
}
