//! Resource categories deployed for every environment.

use serde::{Deserialize, Serialize};

use crate::environment::{namespaced_name, Environment};

/// Logical deployment units, in construction order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Route53,
    Certificate,
    Datasource,
    Discord,
    RestApi,
}

impl ResourceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceCategory::Route53 => "route53",
            ResourceCategory::Certificate => "certificate",
            ResourceCategory::Datasource => "datasource",
            ResourceCategory::Discord => "discord",
            ResourceCategory::RestApi => "restapi",
        }
    }

    /// All categories in the order their stacks are constructed.
    pub fn all() -> Vec<Self> {
        vec![
            ResourceCategory::Route53,
            ResourceCategory::Certificate,
            ResourceCategory::Datasource,
            ResourceCategory::Discord,
            ResourceCategory::RestApi,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResourceCategory::Route53 => "DNS hosted zone",
            ResourceCategory::Certificate => "TLS certificates",
            ResourceCategory::Datasource => "Claim datasource",
            ResourceCategory::Discord => "Discord bot integration",
            ResourceCategory::RestApi => "REST API",
        }
    }

    /// Name of this category's stack within `env`.
    pub fn namespaced(&self, env: Environment) -> String {
        namespaced_name(env, self.as_str())
    }
}

impl std::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
