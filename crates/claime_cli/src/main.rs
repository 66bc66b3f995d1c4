//! claime-deploy CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments (including an invalid target environment)
//! - 5: IaC error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use claime_infra::DeployError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const IAC_ERROR: u8 = 5;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "claime=debug"
    } else if cli.quiet {
        "claime=warn"
    } else {
        "claime=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},warn", default_level)));

    // Logging may already be initialized; keep going either way.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let result = match cli.command {
        Commands::Synth(args) => commands::synth::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Environments => commands::environments::execute(),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<DeployError>() {
        Some(DeployError::InvalidEnvironment) => ExitCodes::INVALID_ARGS,
        Some(_) => ExitCodes::IAC_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_environment_exit_code() {
        let err = anyhow::Error::new(DeployError::InvalidEnvironment);
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_deploy_error_exit_code() {
        let err = anyhow::Error::new(DeployError::DuplicateStack("x".to_string()));
        assert_eq!(categorize_error(&err), ExitCodes::IAC_ERROR);
    }

    #[test]
    fn test_other_error_exit_code() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
