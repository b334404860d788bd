//! Configuration for the QVote client SDK
//!
//! This module handles configuration loading from TOML files and
//! environment variables, and provides structured configuration types.

use serde::{Deserialize, Serialize};

/// Top-level SDK configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ledger node and indexer endpoints
    pub ledger: LedgerConfig,

    /// Confirmation polling
    #[serde(default)]
    pub confirmation: ConfirmationConfig,

    /// Compiled contract program locations
    pub programs: ProgramsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Base URL of the ledger node REST API
    pub algod_url: String,

    /// API token for the ledger node
    #[serde(default)]
    pub algod_token: String,

    /// Base URL of the indexer REST API
    pub indexer_url: String,

    /// API token for the indexer
    #[serde(default)]
    pub indexer_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationConfig {
    /// Rounds to poll before a confirmation wait times out
    #[serde(default = "default_max_poll_rounds")]
    pub max_poll_rounds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramsConfig {
    /// Compiled voting-contract approval program
    pub vote_approval_path: String,

    /// Compiled voting-contract clear-state program
    pub vote_clear_path: String,

    /// Compiled queue-contract approval program
    pub queue_approval_path: String,

    /// Compiled queue-contract clear-state program
    pub queue_clear_path: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_max_poll_rounds() -> u64 {
    crate::confirm::MAX_POLL_ROUNDS
}

impl Default for ConfirmationConfig {
    fn default() -> Self {
        Self {
            max_poll_rounds: default_max_poll_rounds(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with `.env` entries made visible first
    pub fn from_file_with_env(path: &str) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MINIMAL: &str = r#"
[ledger]
algod_url = "http://localhost:4001"
indexer_url = "http://localhost:8980"

[programs]
vote_approval_path = "contracts/vote_approval.teal.tok"
vote_clear_path = "contracts/vote_clear.teal.tok"
queue_approval_path = "contracts/queue_approval.teal.tok"
queue_clear_path = "contracts/queue_clear.teal.tok"
"#;

    #[test]
    fn minimal_toml_gets_defaults() {
        let config: Config = toml::from_str(MINIMAL).unwrap();
        assert_eq!(config.ledger.timeout_secs, 30);
        assert_eq!(config.ledger.algod_token, "");
        assert_eq!(config.confirmation.max_poll_rounds, 999);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let toml = format!(
            "{}\n[confirmation]\nmax_poll_rounds = 12\n",
            MINIMAL.replace(
                "indexer_url = \"http://localhost:8980\"",
                "indexer_url = \"http://localhost:8980\"\ntimeout_secs = 5"
            )
        );
        let config: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config.ledger.timeout_secs, 5);
        assert_eq!(config.confirmation.max_poll_rounds, 12);
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MINIMAL.as_bytes()).unwrap();
        let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.ledger.algod_url, "http://localhost:4001");
        assert_eq!(
            config.programs.queue_clear_path,
            "contracts/queue_clear.teal.tok"
        );
    }
}
