//! Synth command - Write stack manifests for a target environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use claime_infra::StackManifest;

use super::TargetArgs;

#[derive(Args)]
pub struct SynthArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Output directory for synthesized manifests
    #[arg(short, long, default_value = "cdk.out")]
    out: PathBuf,
}

pub fn execute(args: SynthArgs) -> Result<()> {
    let manifests = synth(&args.target, &args.out)?;

    println!("✅ Synthesized {} stacks into {}", manifests.len(), args.out.display());
    for manifest in &manifests {
        println!("   - {}", manifest.stack_name);
    }
    Ok(())
}

fn synth(target: &TargetArgs, out: &Path) -> Result<Vec<StackManifest>> {
    let app = target.compose()?;
    info!("Writing manifests for {}", app.environment());
    let manifests = app
        .synth(out)
        .with_context(|| format!("Failed to write manifests to {}", out.display()))?;
    Ok(manifests)
}
