//! Confirmation polling for submitted transactions
//!
//! After a signed transaction is broadcast, the caller waits for it to land
//! in a block. Polling follows a small state machine: `Pending` until the
//! node reports a positive confirmed round, then terminal `Confirmed`;
//! exhausting the round budget is terminal `TimedOut`, and an external
//! cancellation token produces terminal `Cancelled`. The budget only covers
//! polling; transport errors from the client propagate unchanged.

use thiserror::Error;
use tokio::sync::watch;
use tracing::Instrument;

use crate::ledger::{LedgerClient, LedgerError};
use crate::observability::CorrelationId;

/// Rounds to poll before giving up on a transaction
pub const MAX_POLL_ROUNDS: u64 = 999;

/// Where a submitted transaction is in its confirmation lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationStatus {
    /// Not yet in a block
    Pending,
    /// Included in the given round
    Confirmed(u64),
    /// Poll budget exhausted without confirmation
    TimedOut,
    /// Caller cancelled the wait
    Cancelled,
}

impl ConfirmationStatus {
    /// Terminal states end the polling loop
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ConfirmationStatus::Pending)
    }
}

/// Errors from confirmation polling
#[derive(Debug, Error)]
pub enum ConfirmationError {
    /// Poll budget exhausted without the transaction confirming
    #[error("Transaction {tx_id} not confirmed after {rounds} rounds")]
    Timeout { tx_id: String, rounds: u64 },

    /// The node pool rejected the transaction outright
    #[error("Transaction {tx_id} rejected by the pool: {reason}")]
    Rejected { tx_id: String, reason: String },

    /// Caller cancelled the wait
    #[error("Wait for transaction {tx_id} was cancelled")]
    Cancelled { tx_id: String },

    /// Network-layer failure, propagated unchanged
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Single confirmation check without waiting
pub async fn check_confirmation(
    client: &dyn LedgerClient,
    tx_id: &str,
) -> Result<ConfirmationStatus, ConfirmationError> {
    let pending = client.pending_transaction_information(tx_id).await?;
    if let Some(reason) = pending.pool_error.filter(|r| !r.is_empty()) {
        return Err(ConfirmationError::Rejected {
            tx_id: tx_id.to_string(),
            reason,
        });
    }
    match pending.confirmed_round {
        Some(round) if round > 0 => Ok(ConfirmationStatus::Confirmed(round)),
        _ => Ok(ConfirmationStatus::Pending),
    }
}

/// Wait until `tx_id` is confirmed, polling once per round for up to
/// [`MAX_POLL_ROUNDS`] rounds. Returns the confirmed round.
pub async fn wait_for_confirmation(
    client: &dyn LedgerClient,
    tx_id: &str,
) -> Result<u64, ConfirmationError> {
    wait_for_confirmation_with_budget(client, tx_id, MAX_POLL_ROUNDS).await
}

/// [`wait_for_confirmation`] with an explicit round budget
pub async fn wait_for_confirmation_with_budget(
    client: &dyn LedgerClient,
    tx_id: &str,
    max_rounds: u64,
) -> Result<u64, ConfirmationError> {
    let mut round = client.status().await?.last_round;

    for _ in 0..max_rounds {
        match check_confirmation(client, tx_id).await? {
            ConfirmationStatus::Confirmed(confirmed) => {
                tracing::info!(tx_id = %tx_id, round = confirmed, "Transaction confirmed");
                return Ok(confirmed);
            }
            _ => {
                round += 1;
                client.status_after_block(round).await?;
            }
        }
    }

    tracing::warn!(tx_id = %tx_id, rounds = max_rounds, "Confirmation budget exhausted");
    Err(ConfirmationError::Timeout {
        tx_id: tx_id.to_string(),
        rounds: max_rounds,
    })
}

/// [`wait_for_confirmation`] inside a span carrying a correlation ID, for
/// callers tracking one submission across build, broadcast and confirm.
pub async fn wait_for_confirmation_traced(
    client: &dyn LedgerClient,
    tx_id: &str,
    correlation_id: &CorrelationId,
) -> Result<u64, ConfirmationError> {
    let span =
        tracing::info_span!("confirmation", correlation_id = %correlation_id, tx_id = %tx_id);
    wait_for_confirmation(client, tx_id).instrument(span).await
}

/// [`wait_for_confirmation`] racing an external cancellation token.
///
/// The token is a `watch` channel of `bool`; sending `true` (or having set
/// it before the call) resolves the wait with [`ConfirmationError::Cancelled`].
pub async fn wait_for_confirmation_with_cancel(
    client: &dyn LedgerClient,
    tx_id: &str,
    mut cancel: watch::Receiver<bool>,
) -> Result<u64, ConfirmationError> {
    tokio::select! {
        result = wait_for_confirmation(client, tx_id) => result,
        _ = cancel_requested(&mut cancel) => {
            tracing::info!(tx_id = %tx_id, "Confirmation wait cancelled");
            Err(ConfirmationError::Cancelled { tx_id: tx_id.to_string() })
        }
    }
}

async fn cancel_requested(cancel: &mut watch::Receiver<bool>) {
    loop {
        if *cancel.borrow_and_update() {
            return;
        }
        if cancel.changed().await.is_err() {
            // sender dropped without cancelling, the token can never fire
            std::future::pending::<()>().await;
        }
    }
}
