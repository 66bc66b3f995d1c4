//! Stack abstraction.
//!
//! A stack is an opaque unit of deployable infrastructure. The composer only
//! knows how to construct one from a name, an environment and a set of
//! options, and how to ask it for its synthesized manifest. What a stack
//! provisions internally is its own business.
//!
//! # Example
//!
//! ```rust
//! use claime_infra::{Environment, ResourceCategory, Stack, StackOptions, StackProps};
//!
//! struct MyStack {
//!     props: StackProps,
//! }
//!
//! impl Stack for MyStack {
//!     fn props(&self) -> &StackProps { &self.props }
//!     fn category(&self) -> ResourceCategory { ResourceCategory::Route53 }
//! }
//!
//! let stack = MyStack {
//!     props: StackProps::new("production-route53", Environment::Production, StackOptions::new()),
//! };
//! assert_eq!(stack.synthesize().stack_name, "production-route53");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::ResourceCategory;
use crate::environment::Environment;
use crate::parameters::ParameterKey;

/// Options passed through to a stack. Never interpreted by the composer.
pub type StackOptions = BTreeMap<String, serde_json::Value>;

/// Construction arguments shared by every stack.
#[derive(Debug, Clone, PartialEq)]
pub struct StackProps {
    pub name: String,
    pub environment: Environment,
    pub options: StackOptions,
}

impl StackProps {
    pub fn new(name: impl Into<String>, environment: Environment, options: StackOptions) -> Self {
        Self {
            name: name.into(),
            environment,
            options,
        }
    }

    /// Look up a string option.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(|v| v.as_str())
    }
}

/// A deployable unit.
pub trait Stack {
    fn props(&self) -> &StackProps;

    fn category(&self) -> ResourceCategory;

    fn name(&self) -> &str {
        &self.props().name
    }

    fn environment(&self) -> Environment {
        self.props().environment
    }

    fn options(&self) -> &StackOptions {
        &self.props().options
    }

    /// Secrets the stack's functions read at runtime.
    fn required_parameters(&self) -> Vec<ParameterKey> {
        Vec::new()
    }

    fn synthesize(&self) -> StackManifest {
        StackManifest::from_stack(self)
    }
}

/// Synthesized description of a registered stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackManifest {
    pub stack_name: String,
    pub category: ResourceCategory,
    pub environment: Environment,
    pub options: StackOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<String>,
}

impl StackManifest {
    pub fn from_stack<S: Stack + ?Sized>(stack: &S) -> Self {
        Self {
            stack_name: stack.name().to_string(),
            category: stack.category(),
            environment: stack.environment(),
            options: stack.options().clone(),
            parameters: stack
                .required_parameters()
                .iter()
                .map(ParameterKey::name)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct TestStack {
        props: StackProps,
    }

    impl Stack for TestStack {
        fn props(&self) -> &StackProps {
            &self.props
        }

        fn category(&self) -> ResourceCategory {
            ResourceCategory::Datasource
        }
    }

    #[test]
    fn test_option_str() {
        let mut options = StackOptions::new();
        options.insert("network".to_string(), json!("mainnet"));
        options.insert("retain".to_string(), json!(true));
        let props = StackProps::new("staging-datasource", Environment::Staging, options);

        assert_eq!(props.option_str("network"), Some("mainnet"));
        assert_eq!(props.option_str("retain"), None);
        assert_eq!(props.option_str("missing"), None);
    }

    #[test]
    fn test_synthesize_defaults() {
        let stack = TestStack {
            props: StackProps::new("staging-datasource", Environment::Staging, StackOptions::new()),
        };
        let manifest = stack.synthesize();

        assert_eq!(manifest.stack_name, "staging-datasource");
        assert_eq!(manifest.category, ResourceCategory::Datasource);
        assert_eq!(manifest.environment, Environment::Staging);
        assert!(manifest.options.is_empty());
        assert!(manifest.parameters.is_empty());
    }

    #[test]
    fn test_manifest_omits_empty_parameters() {
        let stack = TestStack {
            props: StackProps::new("staging-datasource", Environment::Staging, StackOptions::new()),
        };
        let value = serde_json::to_value(stack.synthesize()).unwrap();
        assert!(value.get("parameters").is_none());
        assert_eq!(value["options"], json!({}));
    }
}
