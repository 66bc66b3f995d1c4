//! SSM parameter names read by the deployed functions.

use serde::{Deserialize, Serialize};

/// Prefix shared by every parameter.
pub const KEY_PREFIX: &str = "claime-verifier-";

/// Network whose Infura endpoint the REST API reads by default.
pub const DEFAULT_NETWORK: &str = "rinkeby";

/// A secret stored in SSM Parameter Store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    /// Infura websocket endpoint for a network.
    InfuraKey(String),
    SlackToken,
    SlackSigningSecret,
    DiscordPublicKey,
    DiscordBotToken,
}

impl ParameterKey {
    pub fn infura(network: impl Into<String>) -> Self {
        ParameterKey::InfuraKey(network.into())
    }

    /// Full parameter name in the store.
    pub fn name(&self) -> String {
        match self {
            ParameterKey::InfuraKey(network) => format!("{}infura-key-{}", KEY_PREFIX, network),
            ParameterKey::SlackToken => format!("{}slack-token", KEY_PREFIX),
            ParameterKey::SlackSigningSecret => format!("{}slack-signingsecret", KEY_PREFIX),
            ParameterKey::DiscordPublicKey => format!("{}discord-public-key", KEY_PREFIX),
            ParameterKey::DiscordBotToken => format!("{}discord-bot-token", KEY_PREFIX),
        }
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names() {
        assert_eq!(
            ParameterKey::infura("mainnet").name(),
            "claime-verifier-infura-key-mainnet"
        );
        assert_eq!(ParameterKey::SlackToken.name(), "claime-verifier-slack-token");
        assert_eq!(
            ParameterKey::SlackSigningSecret.name(),
            "claime-verifier-slack-signingsecret"
        );
        assert_eq!(
            ParameterKey::DiscordPublicKey.name(),
            "claime-verifier-discord-public-key"
        );
        assert_eq!(
            ParameterKey::DiscordBotToken.name(),
            "claime-verifier-discord-bot-token"
        );
    }

    #[test]
    fn test_all_names_share_prefix() {
        let keys = [
            ParameterKey::infura(DEFAULT_NETWORK),
            ParameterKey::SlackToken,
            ParameterKey::DiscordBotToken,
        ];
        assert!(keys.iter().all(|k| k.name().starts_with(KEY_PREFIX)));
    }
}
