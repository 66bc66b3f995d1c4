//! Deployment app: stack registration and synthesis.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::category::ResourceCategory;
use crate::config::DeployConfig;
use crate::environment::{namespaced_name, Environment};
use crate::error::{DeployError, DeployResult};
use crate::stack::{Stack, StackManifest};
use crate::stacks;

/// File name of the app-level manifest written by [`DeploymentApp::synth`].
pub const APP_MANIFEST: &str = "manifest.yaml";

/// Stacks registered for a single environment, in registration order.
pub struct DeploymentApp {
    environment: Environment,
    stacks: Vec<Box<dyn Stack>>,
    names: HashSet<String>,
}

/// App-level manifest listing the synthesized stacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppManifest {
    pub environment: Environment,
    pub stacks: Vec<String>,
}

impl DeploymentApp {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            stacks: Vec::new(),
            names: HashSet::new(),
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Register a stack.
    ///
    /// Stack names are unique within an app, and every stack must target
    /// the app's environment.
    pub fn add_stack(&mut self, stack: Box<dyn Stack>) -> DeployResult<()> {
        let name = stack.name().to_string();
        if stack.environment() != self.environment {
            return Err(DeployError::EnvironmentMismatch {
                stack: name,
                expected: self.environment.to_string(),
                found: stack.environment().to_string(),
            });
        }
        if !self.names.insert(name.clone()) {
            return Err(DeployError::DuplicateStack(name));
        }
        debug!("Registering stack: {}", name);
        self.stacks.push(stack);
        Ok(())
    }

    pub fn stacks(&self) -> &[Box<dyn Stack>] {
        &self.stacks
    }

    pub fn stack_names(&self) -> Vec<&str> {
        self.stacks.iter().map(|s| s.name()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Stack> {
        self.stacks.iter().find(|s| s.name() == name).map(|s| &**s)
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn manifests(&self) -> Vec<StackManifest> {
        self.stacks.iter().map(|s| s.synthesize()).collect()
    }

    /// Write one `<name>.stack.json` per stack and an app manifest to `out_dir`.
    pub fn synth(&self, out_dir: &Path) -> DeployResult<Vec<StackManifest>> {
        info!(
            "Synthesizing {} stacks for {} into {:?}",
            self.stacks.len(),
            self.environment,
            out_dir
        );
        let manifests = self.manifests();

        // Everything is serialized before the first write.
        let mut files = Vec::with_capacity(manifests.len() + 1);
        for manifest in &manifests {
            files.push((
                format!("{}.stack.json", manifest.stack_name),
                serde_json::to_string_pretty(manifest)?,
            ));
        }
        let app_manifest = AppManifest {
            environment: self.environment,
            stacks: manifests.iter().map(|m| m.stack_name.clone()).collect(),
        };
        files.push((APP_MANIFEST.to_string(), serde_yaml::to_string(&app_manifest)?));

        fs::create_dir_all(out_dir)?;
        for (file_name, content) in &files {
            let path = out_dir.join(file_name);
            fs::write(&path, content)?;
            debug!("Wrote {:?}", path);
        }

        Ok(manifests)
    }
}

impl std::fmt::Debug for DeploymentApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeploymentApp")
            .field("environment", &self.environment)
            .field("stacks", &self.stack_names())
            .finish()
    }
}

/// Build the app for `target`.
///
/// The target is validated first, then the configured options. Nothing is
/// constructed unless both pass. On success every
/// category in [`ResourceCategory::all`] gets one stack named
/// `{env}-{category}`, in that order.
pub fn compose(target: Option<&str>, config: &DeployConfig) -> DeployResult<DeploymentApp> {
    let env = Environment::validate(target)?;
    config.validate()?;
    info!("Composing deployment for {}", env);

    let mut app = DeploymentApp::new(env);
    for category in ResourceCategory::all() {
        let name = namespaced_name(env, category.as_str());
        let stack = stacks::construct(category, name, env, config.options_for(category));
        app.add_stack(stack)?;
    }
    Ok(app)
}
