//! HTTP implementations of the ledger and indexer capabilities
//!
//! Thin reqwest wrappers over the node / indexer v2 REST APIs. The API token
//! goes in the `X-Algo-API-Token` header; every request carries the
//! configured timeout. No retries here: transient failures bubble up.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::LedgerConfig;

use super::{
    AccountInformation, IndexerClient, LedgerClient, LedgerError, LedgerParams, NodeStatus,
    PendingTransactionInfo,
};

const TOKEN_HEADER: &str = "X-Algo-API-Token";

/// Ledger node client over HTTP
#[derive(Debug, Clone)]
pub struct HttpLedgerClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpLedgerClient {
    /// Build a client from configuration. Fails only if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerError::Transport {
                endpoint: config.algod_url.clone(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.algod_url.trim_end_matches('/').to_string(),
            token: config.algod_token.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, LedgerError> {
        get_json(&self.http, &self.base_url, &self.token, path).await
    }
}

#[async_trait]
impl LedgerClient for HttpLedgerClient {
    async fn account_information(&self, address: &str) -> Result<AccountInformation, LedgerError> {
        self.get_json(&format!("/v2/accounts/{address}")).await
    }

    async fn status(&self) -> Result<NodeStatus, LedgerError> {
        self.get_json("/v2/status").await
    }

    async fn status_after_block(&self, round: u64) -> Result<NodeStatus, LedgerError> {
        self.get_json(&format!("/v2/status/wait-for-block-after/{round}"))
            .await
    }

    async fn pending_transaction_information(
        &self,
        tx_id: &str,
    ) -> Result<PendingTransactionInfo, LedgerError> {
        self.get_json(&format!("/v2/transactions/pending/{tx_id}"))
            .await
    }

    async fn suggested_params(&self) -> Result<LedgerParams, LedgerError> {
        self.get_json("/v2/transactions/params").await
    }
}

/// Indexer client over HTTP
#[derive(Debug, Clone)]
pub struct HttpIndexerClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HttpIndexerClient {
    pub fn new(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LedgerError::Transport {
                endpoint: config.indexer_url.clone(),
                source: e,
            })?;
        Ok(Self {
            http,
            base_url: config.indexer_url.trim_end_matches('/').to_string(),
            token: config.indexer_token.clone(),
        })
    }
}

#[async_trait]
impl IndexerClient for HttpIndexerClient {
    async fn lookup_application(&self, app_id: u64) -> Result<serde_json::Value, LedgerError> {
        get_json(
            &self.http,
            &self.base_url,
            &self.token,
            &format!("/v2/applications/{app_id}"),
        )
        .await
    }
}

async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    base_url: &str,
    token: &str,
    path: &str,
) -> Result<T, LedgerError> {
    let url = format!("{base_url}{path}");
    tracing::debug!(endpoint = %path, "Ledger request");

    let response = http
        .get(&url)
        .header(TOKEN_HEADER, token)
        .send()
        .await
        .map_err(|e| LedgerError::Transport {
            endpoint: path.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(endpoint = %path, status = %status, "Ledger request failed");
        return Err(LedgerError::Http {
            endpoint: path.to_string(),
            status: status.as_u16(),
            body,
        });
    }

    response.json::<T>().await.map_err(|e| LedgerError::Decode {
        endpoint: path.to_string(),
        message: e.to_string(),
    })
}
