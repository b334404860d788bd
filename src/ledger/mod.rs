//! Ledger and indexer client capabilities
//!
//! The SDK never talks to the network directly; it consumes the two traits
//! defined here. [`http::HttpLedgerClient`] and [`http::HttpIndexerClient`]
//! are the production implementations against the node / indexer REST APIs,
//! and tests substitute in-memory mocks.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::RawStateEntry;

pub mod errors;
pub mod http;

pub use errors::LedgerError;
pub use http::{HttpIndexerClient, HttpLedgerClient};

/// Account record as reported by the node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountInformation {
    /// Applications this account has created
    #[serde(rename = "created-apps", default)]
    pub created_apps: Vec<ApplicationInfo>,

    /// Per-application local state this account has opted in to
    #[serde(rename = "apps-local-state", default)]
    pub apps_local_state: Vec<ApplicationLocalState>,
}

/// A created application and its parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationInfo {
    pub id: u64,
    pub params: ApplicationParams,
}

/// Application parameters, of which only the global state matters here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationParams {
    #[serde(rename = "global-state", default)]
    pub global_state: Vec<RawStateEntry>,
}

/// Local state of one application for one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationLocalState {
    pub id: u64,
    #[serde(rename = "key-value", default)]
    pub key_value: Vec<RawStateEntry>,
}

/// Node status, reduced to the fields the SDK consumes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeStatus {
    #[serde(rename = "last-round")]
    pub last_round: u64,
}

/// Pending-transaction record for confirmation polling
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingTransactionInfo {
    /// Round the transaction was confirmed in, absent or zero while pending
    #[serde(rename = "confirmed-round", default)]
    pub confirmed_round: Option<u64>,

    /// Set when the pool rejected the transaction
    #[serde(rename = "pool-error", default)]
    pub pool_error: Option<String>,
}

/// Suggested transaction parameters fetched from the node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerParams {
    pub fee: u64,
    #[serde(rename = "last-round")]
    pub first_valid: u64,
    #[serde(rename = "genesis-id")]
    pub genesis_id: String,
    #[serde(rename = "genesis-hash")]
    pub genesis_hash: String,
}

impl LedgerParams {
    /// Validity window length for built transactions, in rounds
    pub const VALIDITY_ROUNDS: u64 = 1000;

    /// Last round a transaction built against these params stays valid
    pub fn last_valid(&self) -> u64 {
        self.first_valid + Self::VALIDITY_ROUNDS
    }
}

/// Read capability against the ledger node
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch the account record for `address`
    async fn account_information(&self, address: &str) -> Result<AccountInformation, LedgerError>;

    /// Fetch current node status
    async fn status(&self) -> Result<NodeStatus, LedgerError>;

    /// Block until the node has reached `round` (or later)
    async fn status_after_block(&self, round: u64) -> Result<NodeStatus, LedgerError>;

    /// Fetch pending-transaction info for `tx_id`
    async fn pending_transaction_information(
        &self,
        tx_id: &str,
    ) -> Result<PendingTransactionInfo, LedgerError>;

    /// Fetch suggested transaction parameters
    async fn suggested_params(&self) -> Result<LedgerParams, LedgerError>;
}

/// Read capability against the indexer
#[async_trait]
pub trait IndexerClient: Send + Sync {
    /// Look up a raw application record by ID; passthrough, no decoding
    async fn lookup_application(&self, app_id: u64) -> Result<serde_json::Value, LedgerError>;
}
