mod app;
mod boundaries;
mod cli;
mod config;
mod confirm;
mod error;
mod input;
mod report;
mod timecode;
mod writer;

use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use crate::error::WavCueError;

fn main() -> ExitCode {
    let args = cli::Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    match app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ Error: {:#}", err);
            let code = err
                .downcast_ref::<WavCueError>()
                .map_or(1, WavCueError::exit_code);
            ExitCode::from(code)
        }
    }
}
