//! The stacks deployed for every environment.

use tracing::{debug, warn};

use crate::category::ResourceCategory;
use crate::environment::Environment;
use crate::parameters::{ParameterKey, DEFAULT_NETWORK};
use crate::stack::{Stack, StackOptions, StackProps};

/// DNS hosted zone.
#[derive(Debug, Clone)]
pub struct Route53Stack {
    props: StackProps,
}

impl Route53Stack {
    pub fn new(name: impl Into<String>, env: Environment, options: StackOptions) -> Self {
        Self {
            props: StackProps::new(name, env, options),
        }
    }
}

impl Stack for Route53Stack {
    fn props(&self) -> &StackProps {
        &self.props
    }

    fn category(&self) -> ResourceCategory {
        ResourceCategory::Route53
    }
}

/// TLS certificates for the API domain.
#[derive(Debug, Clone)]
pub struct CertificateStack {
    props: StackProps,
}

impl CertificateStack {
    pub fn new(name: impl Into<String>, env: Environment, options: StackOptions) -> Self {
        Self {
            props: StackProps::new(name, env, options),
        }
    }
}

impl Stack for CertificateStack {
    fn props(&self) -> &StackProps {
        &self.props
    }

    fn category(&self) -> ResourceCategory {
        ResourceCategory::Certificate
    }
}

/// Claim datasource.
#[derive(Debug, Clone)]
pub struct DatasourceStack {
    props: StackProps,
}

impl DatasourceStack {
    pub fn new(name: impl Into<String>, env: Environment, options: StackOptions) -> Self {
        Self {
            props: StackProps::new(name, env, options),
        }
    }
}

impl Stack for DatasourceStack {
    fn props(&self) -> &StackProps {
        &self.props
    }

    fn category(&self) -> ResourceCategory {
        ResourceCategory::Datasource
    }
}

/// Discord bot integration.
#[derive(Debug, Clone)]
pub struct DiscordStack {
    props: StackProps,
}

impl DiscordStack {
    pub fn new(name: impl Into<String>, env: Environment, options: StackOptions) -> Self {
        Self {
            props: StackProps::new(name, env, options),
        }
    }
}

impl Stack for DiscordStack {
    fn props(&self) -> &StackProps {
        &self.props
    }

    fn category(&self) -> ResourceCategory {
        ResourceCategory::Discord
    }

    fn required_parameters(&self) -> Vec<ParameterKey> {
        vec![ParameterKey::DiscordPublicKey, ParameterKey::DiscordBotToken]
    }
}

/// REST API serving verified claims.
///
/// Reads the Infura endpoint for the `network` option, `rinkeby` if unset.
#[derive(Debug, Clone)]
pub struct RestApiStack {
    props: StackProps,
}

impl RestApiStack {
    pub fn new(name: impl Into<String>, env: Environment, options: StackOptions) -> Self {
        Self {
            props: StackProps::new(name, env, options),
        }
    }

    pub fn network(&self) -> &str {
        match self.props.option_str("network") {
            Some(network) if !network.trim().is_empty() => network,
            Some(_) => {
                warn!("Empty network option on {}, using {}", self.props.name, DEFAULT_NETWORK);
                DEFAULT_NETWORK
            }
            None => {
                if self.props.options.contains_key("network") {
                    warn!("Non-string network option on {}, using {}", self.props.name, DEFAULT_NETWORK);
                }
                DEFAULT_NETWORK
            }
        }
    }
}

impl Stack for RestApiStack {
    fn props(&self) -> &StackProps {
        &self.props
    }

    fn category(&self) -> ResourceCategory {
        ResourceCategory::RestApi
    }

    fn required_parameters(&self) -> Vec<ParameterKey> {
        vec![ParameterKey::infura(self.network())]
    }
}

/// Construct the stack for `category`.
pub fn construct(
    category: ResourceCategory,
    name: impl Into<String>,
    env: Environment,
    options: StackOptions,
) -> Box<dyn Stack> {
    let name = name.into();
    debug!("Constructing {} stack: {}", category, name);
    match category {
        ResourceCategory::Route53 => Box::new(Route53Stack::new(name, env, options)),
        ResourceCategory::Certificate => Box::new(CertificateStack::new(name, env, options)),
        ResourceCategory::Datasource => Box::new(DatasourceStack::new(name, env, options)),
        ResourceCategory::Discord => Box::new(DiscordStack::new(name, env, options)),
        ResourceCategory::RestApi => Box::new(RestApiStack::new(name, env, options)),
    }
}
