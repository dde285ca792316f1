use clap::{Arg, ArgAction, Command, value_parser};

pub const GENERATE_CMD: &str = "generate";
pub const CONFIG_CMD: &str = "config";
pub const DEFAULT_CONFIG_OUT: &str = "bcgen.toml";

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Generate a set of DNA barcodes with no adjacent repeats and pairwise distance >= 2.")
        .long_about(
            "Generate a set of DNA barcodes with no adjacent repeated bases, where every pair of \
            barcodes differs in at least two positions.\n\n\
            Values from --config are used first; flags given on the command line override them.",
        )
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("NUMBER")
                .help("Number of barcodes to generate (default: 22971)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .value_name("NUMBER")
                .help("Length of every barcode (default: 11)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .value_name("DIR")
                .help("Directory the timestamped csv is written to (default: ./Barcodes)"),
        )
        .arg(
            Arg::new("threads")
                .short('t')
                .long("threads")
                .value_name("NUMBER")
                .help("Number of worker threads (default: all available cores)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("NUMBER")
                .help("Random seed; with --threads 1 the output is fully reproducible")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("max_attempts")
                .long("max-attempts")
                .value_name("NUMBER")
                .help("Rejected candidates allowed per barcode before giving up, 0 for no limit")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("gzip")
                .long("gzip")
                .help("Compress the output file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no_progress")
                .long("no-progress")
                .help("Hide progress bars")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stats")
                .long("stats")
                .value_name("FILE")
                .help("Write run statistics as JSON to this file"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML file with run parameters"),
        )
}

pub fn create_config_cli() -> Command {
    Command::new(CONFIG_CMD)
        .about("Write an example TOML configuration file for `generate`.")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output configuration file")
                .default_value(DEFAULT_CONFIG_OUT),
        )
}
