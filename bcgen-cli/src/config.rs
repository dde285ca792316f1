use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use bcgen_core::consts::{DEFAULT_MAX_ATTEMPTS, DEFAULT_NUM_SEQUENCES, DEFAULT_SEQUENCE_LENGTH};
use bcgen_generator::GeneratorConfig;
use bcgen_io::DEFAULT_OUTPUT_DIR;

///
/// Parameters of a `generate` run, loadable from a TOML file.
///
/// Missing keys fall back to the defaults. `max_attempts = 0` disables the
/// retry limit.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub count: usize,
    pub length: usize,
    pub output_dir: PathBuf,
    pub threads: Option<usize>,
    pub seed: Option<u64>,
    pub max_attempts: u64,
    pub gzip: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_NUM_SEQUENCES,
            length: DEFAULT_SEQUENCE_LENGTH,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            threads: None,
            seed: None,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            gzip: false,
        }
    }
}

impl RunConfig {
    pub fn from_toml(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: RunConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn generator_config(&self, show_progress: bool) -> GeneratorConfig {
        GeneratorConfig {
            threads: self.threads,
            seed: self.seed,
            max_attempts: match self.max_attempts {
                0 => None,
                n => Some(n),
            },
            show_progress,
        }
    }
}
