use clap::{Arg, Command, value_parser};

pub const CHECK_CMD: &str = "check";

pub fn create_check_cli() -> Command {
    Command::new(CHECK_CMD)
        .about("Check that a barcode file satisfies the adjacency and distance constraints.")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Barcode file, one sequence per line (.csv or .csv.gz, '-' for stdin)")
                .required(true),
        )
        .arg(
            Arg::new("length")
                .short('l')
                .long("length")
                .value_name("NUMBER")
                .help("Expected barcode length (default: length of the first barcode)")
                .value_parser(value_parser!(usize)),
        )
}
