//! Error types for the ledger and indexer clients

use thiserror::Error;

/// Errors surfaced by the network-facing clients.
///
/// These propagate to callers unchanged; the SDK does not retry transient
/// transport failures, only confirmation polling loops.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("Transport error talking to {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The node answered with a non-success HTTP status
    #[error("HTTP {status} from {endpoint}: {body}")]
    Http {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl LedgerError {
    /// Endpoint path the failing request targeted
    pub fn endpoint(&self) -> &str {
        match self {
            LedgerError::Transport { endpoint, .. }
            | LedgerError::Http { endpoint, .. }
            | LedgerError::Decode { endpoint, .. } => endpoint,
        }
    }
}
