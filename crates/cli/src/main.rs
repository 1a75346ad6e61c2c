use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Env};
use gm9_assets_cli::cli::Cli;

fn main() -> ExitCode {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    match Cli::parse().command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}
