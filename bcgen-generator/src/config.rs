use bcgen_core::consts::DEFAULT_MAX_ATTEMPTS;
use bcgen_core::utils::get_thread_count;

///
/// Knobs for a generation run that don't change what is generated, only how.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Worker threads; `None` uses the detected hardware parallelism.
    pub threads: Option<usize>,
    /// Fixed seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Rejected candidates tolerated per accepted sequence; `None` retries forever.
    pub max_attempts: Option<u64>,
    pub show_progress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            threads: None,
            seed: None,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            show_progress: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn worker_count(&self) -> usize {
        get_thread_count(self.threads)
    }
}
