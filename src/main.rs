//! Multideployer CLI
//!
//! Usage: multideployer [OPTIONS]
//!
//! Reads `multideployer.yaml`, deploys every application whose release
//! changed since the last run, and records the new releases.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use multideployer::LoggingContext;

mod cli;
mod commands;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _logging = match LoggingContext::init(cli.log_level(), cli.log.as_deref()) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("multideployer: {:#}", anyhow::Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    match commands::deploy::cmd_deploy(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
