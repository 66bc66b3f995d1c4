//! Error types for deployment composition.

use thiserror::Error;

/// Result type alias for deployment operations.
pub type DeployResult<T> = Result<T, DeployError>;

/// Errors that can occur while composing or synthesizing a deployment.
#[derive(Error, Debug)]
pub enum DeployError {
    /// The target is absent, empty, or not a recognized environment.
    #[error("Invalid target environment")]
    InvalidEnvironment,

    #[error("Duplicate stack name: {0}")]
    DuplicateStack(String),

    #[error("Stack {stack} targets {found}, but the app targets {expected}")]
    EnvironmentMismatch {
        stack: String,
        expected: String,
        found: String,
    },

    #[error("Invalid option {key} for {category} stack: {reason}")]
    InvalidOption {
        category: String,
        key: String,
        reason: String,
    },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("YAML error")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_wrapped_errors_do_not_repeat_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err = DeployError::from(io);

        assert_eq!(err.to_string(), "IO error");
        assert_eq!(err.source().unwrap().to_string(), "missing file");
    }
}
