//! # claime_infra
//!
//! Deployment composition for claime-verifier.
//!
//! This crate validates a target environment, derives a namespaced name for
//! each resource category, and registers the stacks deployed for that
//! environment.
//!
//! ## Features
//!
//! - Closed set of deployment environments with strict validation
//! - Deterministic `{env}-{category}` stack naming
//! - Route53, certificate, datasource, Discord and REST API stacks
//! - SSM parameter catalog for the secrets those stacks read
//! - YAML deploy configuration for per-stack options
//! - Manifest synthesis to an output directory
//!
//! ## Example
//!
//! ```rust,no_run
//! use claime_infra::{compose, DeployConfig};
//! use std::path::Path;
//!
//! let app = compose(Some("production"), &DeployConfig::default()).unwrap();
//! assert_eq!(app.len(), 5);
//!
//! app.synth(Path::new("cdk.out")).unwrap();
//! ```

pub mod app;
pub mod category;
pub mod config;
pub mod environment;
pub mod error;
pub mod parameters;
pub mod stack;
pub mod stacks;

pub use app::{compose, AppManifest, DeploymentApp, APP_MANIFEST};
pub use category::ResourceCategory;
pub use config::DeployConfig;
pub use environment::{namespaced_name, Environment, NAME_SEPARATOR};
pub use error::{DeployError, DeployResult};
pub use parameters::{ParameterKey, DEFAULT_NETWORK, KEY_PREFIX};
pub use stack::{Stack, StackManifest, StackOptions, StackProps};
pub use stacks::{CertificateStack, DatasourceStack, DiscordStack, RestApiStack, Route53Stack};
