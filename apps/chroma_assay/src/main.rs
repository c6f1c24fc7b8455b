use std::process::ExitCode;

use chroma_assay::cli::{self, CliArgs, Outcome};
use clap::Parser;

fn main() -> ExitCode {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Usage errors exit with status 2.
    let args = CliArgs::parse();

    match cli::run(&args) {
        Outcome::Result(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Outcome::Notification(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
    }
}
