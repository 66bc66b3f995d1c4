//! List command - Print the stacks composed for a target environment.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use claime_infra::{DeploymentApp, Stack};

use super::TargetArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Print manifests as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let app = args.target.compose()?;
    render(&app, args.json, &mut io::stdout().lock())
}

fn render<W: Write>(app: &DeploymentApp, json: bool, out: &mut W) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&app.manifests())?)?;
        return Ok(());
    }

    writeln!(out, "📦 Stacks for {}:", app.environment())?;
    for stack in app.stacks() {
        writeln!(
            out,
            "   {:<28} {}",
            stack.name(),
            stack.category().description()
        )?;
        for parameter in stack.required_parameters() {
            writeln!(out, "      🔑 {}", parameter)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use claime_infra::{compose, DeployConfig, StackManifest};

    fn app(target: &str) -> DeploymentApp {
        compose(Some(target), &DeployConfig::default()).unwrap()
    }

    #[test]
    fn test_list_text() {
        let mut out = Vec::new();
        render(&app("staging"), false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.starts_with("📦 Stacks for staging:"));
        let positions: Vec<_> = [
            "staging-route53",
            "staging-certificate",
            "staging-datasource",
            "staging-discord",
            "staging-restapi",
        ]
        .iter()
        .map(|name| output.find(name).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(output.contains("claime-verifier-discord-bot-token"));
        assert!(output.contains("claime-verifier-infura-key-rinkeby"));
    }

    #[test]
    fn test_list_json() {
        let mut out = Vec::new();
        render(&app("production"), true, &mut out).unwrap();

        let manifests: Vec<StackManifest> = serde_json::from_slice(&out).unwrap();
        assert_eq!(manifests.len(), 5);
        assert_eq!(manifests[0].stack_name, "production-route53");
        assert_eq!(manifests[4].stack_name, "production-restapi");
    }
}
