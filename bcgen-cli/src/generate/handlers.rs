use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use bcgen_core::models::GenerationRequest;
use bcgen_generator::TwoPhasePoolBuilder;
use bcgen_io::export_barcodes;

use crate::config::RunConfig;

/// Layer command line flags over the config file (or the defaults).
pub fn resolve_run_config(matches: &ArgMatches) -> Result<RunConfig> {
    let mut run = match matches.get_one::<String>("config") {
        Some(path) => RunConfig::from_toml(Path::new(path))?,
        None => RunConfig::default(),
    };

    if let Some(count) = matches.get_one::<usize>("count") {
        run.count = *count;
    }
    if let Some(length) = matches.get_one::<usize>("length") {
        run.length = *length;
    }
    if let Some(dir) = matches.get_one::<String>("output_dir") {
        run.output_dir = PathBuf::from(dir);
    }
    if let Some(threads) = matches.get_one::<usize>("threads") {
        run.threads = Some(*threads);
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        run.seed = Some(*seed);
    }
    if let Some(max_attempts) = matches.get_one::<u64>("max_attempts") {
        run.max_attempts = *max_attempts;
    }
    if matches.get_flag("gzip") {
        run.gzip = true;
    }

    Ok(run)
}

/// Generate barcodes and write them to a timestamped file.
///
/// # Returns
/// The path of the written file.
pub fn run_generate(matches: &ArgMatches) -> Result<PathBuf> {
    let run = resolve_run_config(matches)?;
    info!("num_sequences: {}, sequence_length: {}", run.count, run.length);

    let request =
        GenerationRequest::new(run.count, run.length).context("Invalid generation request")?;

    let show_progress = !matches.get_flag("no_progress");
    let mut builder = TwoPhasePoolBuilder::new(run.generator_config(show_progress))?;
    info!("Using {} worker threads", builder.workers());

    let (sequences, stats) = builder
        .build_with_stats(&request)
        .context("Barcode generation failed")?;

    if let Some(stats_path) = matches.get_one::<String>("stats") {
        let file = File::create(stats_path)
            .with_context(|| format!("Failed to create stats file: {}", stats_path))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &stats)?;
    }

    match export_barcodes(&run.output_dir, &sequences, run.length, run.gzip)? {
        Some(path) => {
            info!("Barcodes saved to {}", path.display());
            Ok(path)
        }
        None => anyhow::bail!("Generated barcodes are not unique, nothing was written"),
    }
}

/// Write an example config file.
pub fn run_config(matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<String>("output")
        .context("An output path is required")?;

    let example = RunConfig {
        seed: Some(42),
        ..Default::default()
    };
    std::fs::write(output, example.to_toml()?)
        .with_context(|| format!("Failed to write config file: {}", output))?;
    info!("Example configuration written to {}", output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use bcgen_core::models::Pool;
    use bcgen_generator::BuildStats;
    use bcgen_io::read_barcodes;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::build_parser;

    fn generate_matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["bcgen", "generate"];
        argv.extend_from_slice(args);
        let matches = build_parser().try_get_matches_from(argv).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        sub.clone()
    }

    #[rstest]
    fn test_defaults_without_flags() {
        let run = resolve_run_config(&generate_matches(&[])).unwrap();
        assert_eq!(run, RunConfig::default());
    }

    #[rstest]
    fn test_flags_override_config_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let config_path = tempdir.path().join("bcgen.toml");
        std::fs::write(&config_path, "count = 500\nlength = 9\nseed = 1\ngzip = true\n").unwrap();

        let run = resolve_run_config(&generate_matches(&[
            "--config",
            config_path.to_str().unwrap(),
            "--count",
            "64",
            "--max-attempts",
            "0",
        ]))
        .unwrap();

        assert_eq!(run.count, 64);
        assert_eq!(run.length, 9);
        assert_eq!(run.seed, Some(1));
        assert_eq!(run.max_attempts, 0);
        assert!(run.gzip);
    }

    #[rstest]
    fn test_run_generate_writes_valid_set() {
        let tempdir = tempfile::tempdir().unwrap();
        let out_dir = tempdir.path().join("Barcodes");
        let stats_path = tempdir.path().join("stats.json");

        let path = run_generate(&generate_matches(&[
            "-n",
            "120",
            "-l",
            "8",
            "-t",
            "2",
            "--seed",
            "5",
            "--no-progress",
            "--output-dir",
            out_dir.to_str().unwrap(),
            "--stats",
            stats_path.to_str().unwrap(),
        ]))
        .unwrap();

        assert!(path.starts_with(&out_dir));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("n=120-8nt-"));

        let barcodes = read_barcodes(&path).unwrap();
        assert_eq!(barcodes.len(), 120);
        assert!(Pool::verify(&barcodes, 8).is_ok());

        let stats: BuildStats =
            serde_json::from_reader(File::open(&stats_path).unwrap()).unwrap();
        assert_eq!(stats.final_count, 120);
        assert_eq!(stats.workers, 2);
    }

    #[rstest]
    fn test_run_generate_rejects_zero_count() {
        let tempdir = tempfile::tempdir().unwrap();
        let result = run_generate(&generate_matches(&[
            "-n",
            "0",
            "--no-progress",
            "--output-dir",
            tempdir.path().to_str().unwrap(),
        ]));
        assert!(result.is_err());
    }

    #[rstest]
    fn test_run_config_writes_parsable_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let output = tempdir.path().join("example.toml");
        let matches = build_parser()
            .try_get_matches_from(["bcgen", "config", "-o", output.to_str().unwrap()])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        run_config(sub).unwrap();
        let parsed = RunConfig::from_toml(&output).unwrap();
        assert_eq!(parsed.seed, Some(42));
    }
}
