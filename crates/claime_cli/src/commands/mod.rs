//! CLI command definitions.
//!
//! Each subcommand composes the deployment for one target environment, or
//! reports what the tool knows about.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use claime_infra::{compose, DeployConfig, DeploymentApp, Environment};

pub mod environments;
pub mod list;
pub mod synth;

/// claime-deploy - compose claime-verifier infrastructure stacks
#[derive(Parser)]
#[command(name = "claime-deploy")]
#[command(version, about = "Compose claime-verifier infrastructure stacks")]
#[command(long_about = r#"
claime-deploy validates a target environment and composes the stacks
deployed for it: route53, certificate, datasource, discord and restapi.
Each stack is named {environment}-{category}.

COMMANDS:
  synth         → Write stack manifests for a target environment
  list          → Print the stacks composed for a target environment
  environments  → Print the recognized target environments

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments (including an invalid target environment)
  5 - IaC error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write stack manifests for a target environment
    Synth(synth::SynthArgs),

    /// Print the stacks composed for a target environment
    List(list::ListArgs),

    /// Print the recognized target environments
    Environments,
}

/// Arguments shared by commands that compose a deployment.
#[derive(Args)]
pub struct TargetArgs {
    /// Target environment
    #[arg(short, long, env = "CLAIME_TARGET")]
    pub target: Option<String>,

    /// Deploy configuration file (YAML)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

impl TargetArgs {
    /// Validate the target, then load the configuration and compose the app.
    ///
    /// The config file is not read when the target is invalid.
    pub fn compose(&self) -> Result<DeploymentApp> {
        Environment::validate(self.target.as_deref())?;
        let config = load_config(self.config.as_deref())?;
        Ok(compose(self.target.as_deref(), &config)?)
    }
}

fn load_config(path: Option<&Path>) -> Result<DeployConfig> {
    match path {
        Some(path) => DeployConfig::from_file(path)
            .with_context(|| format!("Failed to load deploy config {}", path.display())),
        None => Ok(DeployConfig::default()),
    }
}
