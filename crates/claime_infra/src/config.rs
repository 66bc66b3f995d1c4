//! Deploy configuration.
//!
//! Per-stack options are read from a YAML file:
//!
//! ```yaml
//! stacks:
//!   restapi:
//!     network: mainnet
//!   discord: {}
//! ```
//!
//! The target environment is never read from here; it is passed explicitly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::category::ResourceCategory;
use crate::error::{DeployError, DeployResult};
use crate::stack::StackOptions;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployConfig {
    /// Options per resource category. Missing categories get `{}`.
    #[serde(default)]
    pub stacks: BTreeMap<ResourceCategory, StackOptions>,
}

impl DeployConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &Path) -> DeployResult<Self> {
        debug!("Loading deploy config from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> DeployResult<Self> {
        // An empty file is an empty config, not a parse error.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the options the stacks interpret.
    ///
    /// `restapi.network`, when present, must be a non-empty string.
    pub fn validate(&self) -> DeployResult<()> {
        let Some(network) = self
            .stacks
            .get(&ResourceCategory::RestApi)
            .and_then(|options| options.get("network"))
        else {
            return Ok(());
        };

        let reason = match network.as_str() {
            Some(value) if value.trim().is_empty() => "must not be empty",
            Some(_) => return Ok(()),
            None => "must be a string",
        };
        Err(DeployError::InvalidOption {
            category: ResourceCategory::RestApi.to_string(),
            key: "network".to_string(),
            reason: reason.to_string(),
        })
    }

    /// Save configuration to a YAML file.
    pub fn to_file(&self, path: &Path) -> DeployResult<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn with_options(mut self, category: ResourceCategory, options: StackOptions) -> Self {
        self.stacks.insert(category, options);
        self
    }

    pub fn options_for(&self, category: ResourceCategory) -> StackOptions {
        self.stacks.get(&category).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_parse_options() {
        let config = DeployConfig::from_yaml(
            "stacks:\n  restapi:\n    network: mainnet\n  discord: {}\n",
        )
        .unwrap();

        let restapi = config.options_for(ResourceCategory::RestApi);
        assert_eq!(restapi.get("network"), Some(&json!("mainnet")));
        assert!(config.options_for(ResourceCategory::Discord).is_empty());
        assert!(config.options_for(ResourceCategory::Route53).is_empty());
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(DeployConfig::from_yaml("").unwrap(), DeployConfig::default());
        assert_eq!(DeployConfig::from_yaml("\n  \n").unwrap(), DeployConfig::default());
    }

    #[test]
    fn test_rejects_unknown_category() {
        assert!(DeployConfig::from_yaml("stacks:\n  slack: {}\n").is_err());
    }

    #[test]
    fn test_rejects_target_field() {
        assert!(DeployConfig::from_yaml("target: production\n").is_err());
    }

    #[test]
    fn test_rejects_non_string_network() {
        let err = DeployConfig::from_yaml("stacks:\n  restapi:\n    network: 5\n").unwrap_err();
        assert!(matches!(err, DeployError::InvalidOption { ref key, .. } if key == "network"));
        assert_eq!(
            err.to_string(),
            "Invalid option network for restapi stack: must be a string"
        );
    }

    #[test]
    fn test_rejects_empty_network() {
        let err = DeployConfig::from_yaml("stacks:\n  restapi:\n    network: \"\"\n").unwrap_err();
        assert!(matches!(err, DeployError::InvalidOption { .. }));
    }

    #[test]
    fn test_network_on_other_stack_is_opaque() {
        let config = DeployConfig::from_yaml("stacks:\n  datasource:\n    network: 5\n").unwrap();
        assert_eq!(config.options_for(ResourceCategory::Datasource).get("network"), Some(&json!(5)));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deploy.yaml");

        let mut options = StackOptions::new();
        options.insert("network".to_string(), json!("goerli"));
        let config = DeployConfig::new().with_options(ResourceCategory::RestApi, options);

        config.to_file(&path).unwrap();
        let loaded = DeployConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
