//! Client SDK for QVote decision contracts
//!
//! A helper layer over an Algorand-style ledger node and indexer: decodes
//! on-chain global state into [`types::DecisionState`] records, batches
//! vote options for application-call argument limits, builds unsigned
//! add-option transactions and polls for confirmation. Signing, broadcast
//! and wallet handling are the caller's concern.

pub mod batch;
pub mod codec;
pub mod config;
pub mod confirm;
pub mod ledger;
pub mod observability;
pub mod programs;
pub mod state;
pub mod tx_builder;
pub mod types;

// Re-export the types most callers touch
pub use batch::{group_options, pad_batch, BatchError, BATCH_SIZE};
pub use codec::CodecError;
pub use config::Config;
pub use confirm::{wait_for_confirmation, ConfirmationError, ConfirmationStatus};
pub use ledger::{HttpIndexerClient, HttpLedgerClient, IndexerClient, LedgerClient, LedgerError};
pub use state::{decode_decision_state, read_global_state, StateError};
pub use tx_builder::{build_add_option_tx, AppCallTransaction, TxBuilderError};
pub use types::{DecisionState, VoteOption};
