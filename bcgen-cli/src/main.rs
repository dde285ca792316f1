mod check;
mod config;
mod generate;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "bcgen";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Generate sets of DNA barcodes with no adjacent repeated bases and a minimum pairwise Hamming distance of two.")
        .subcommand_required(true)
        .subcommand(generate::cli::create_generate_cli())
        .subcommand(generate::cli::create_config_cli())
        .subcommand(check::cli::create_check_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // GENERATE
        //
        Some((generate::cli::GENERATE_CMD, matches)) => {
            generate::handlers::run_generate(matches)?;
        }

        //
        // CONFIG
        //
        Some((generate::cli::CONFIG_CMD, matches)) => {
            generate::handlers::run_config(matches)?;
        }

        //
        // CHECK
        //
        Some((check::cli::CHECK_CMD, matches)) => {
            check::handlers::run_check(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
