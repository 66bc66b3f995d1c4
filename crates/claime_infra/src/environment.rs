//! Deployment environments and resource naming.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DeployError, DeployResult};

/// Separator between the environment prefix and the resource category.
pub const NAME_SEPARATOR: char = '-';

/// Recognized deployment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Validate a target identifier.
    ///
    /// Matching is exact and case-sensitive. An absent target, an empty
    /// string, and an unrecognized identifier are all rejected with
    /// [`DeployError::InvalidEnvironment`].
    pub fn validate(candidate: Option<&str>) -> DeployResult<Self> {
        match candidate {
            Some("development") => Ok(Environment::Development),
            Some("staging") => Ok(Environment::Staging),
            Some("production") => Ok(Environment::Production),
            _ => Err(DeployError::InvalidEnvironment),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ]
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(Some(s))
    }
}

/// Derive the name of a resource category within an environment.
///
/// The result is `{env}-{category}`, e.g. `production-route53`.
pub fn namespaced_name(env: Environment, category: &str) -> String {
    format!("{}{}{}", env.as_str(), NAME_SEPARATOR, category)
}
