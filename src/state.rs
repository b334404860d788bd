//! Decoding on-chain application state into decision records
//!
//! The node reports global state as an array of base64 key/value entries.
//! Decoding turns that array into a [`DecisionState`]: the reserved scalar
//! keys become typed fields and every `option_`-prefixed key becomes a
//! [`VoteOption`], in the array's original order. Absent applications and
//! missing required fields are typed errors, never silent `None`s.

use std::collections::HashMap;

use thiserror::Error;

use crate::codec::{self, CodecError};
use crate::ledger::{IndexerClient, LedgerClient, LedgerError};
use crate::types::{
    DecisionState, LocalStateEntry, RawStateEntry, TealValue, VoteOption,
    ASSET_COEFFICIENT_KEY, ASSET_ID_KEY, NAME_KEY, OPTION_SYM, OPTION_VALUE_DIVISOR,
    OPTION_VALUE_OFFSET, VOTING_END_KEY, VOTING_START_KEY,
};

/// Errors from state lookup and decoding
#[derive(Debug, Error)]
pub enum StateError {
    /// A state key or value failed to decode
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// A required contract field is absent or has the wrong shape
    #[error("Malformed decision state: missing required field `{field}`")]
    MalformedState { field: &'static str },

    /// The requested application is not in the account's application list
    #[error("Application {app_id} not found for this account; is the creator address correct and the decision deployed?")]
    NotFound { app_id: u64 },

    /// Network-layer failure, propagated unchanged
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Decode a raw global-state array into a [`DecisionState`].
///
/// Duplicate keys resolve last-write-wins in array order. Option entries
/// keep their relative order from the array.
pub fn decode_decision_state(entries: &[RawStateEntry]) -> Result<DecisionState, StateError> {
    let mut state: HashMap<String, TealValue> = HashMap::with_capacity(entries.len());
    // Unique keys in first-occurrence order, for option extraction
    let mut key_order: Vec<String> = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = codec::decode_base64_text(&entry.key)?;
        // The decision name is stored as text; everything else stays opaque
        let value = if key == NAME_KEY {
            codec::decode_value(&entry.value)?
        } else {
            entry.value.clone()
        };
        // duplicate keys: last value wins, position of the first stays
        if state.insert(key.clone(), value).is_none() {
            key_order.push(key);
        }
    }

    let options = key_order
        .iter()
        .filter(|key| key.starts_with(OPTION_SYM))
        .map(|key| VoteOption {
            title: key.clone(),
            value: decode_option_value(state[key.as_str()].uint),
        })
        .collect();

    Ok(DecisionState {
        decision_name: require(&state, NAME_KEY)?.bytes.clone(),
        voting_start_time: require(&state, VOTING_START_KEY)?.uint,
        voting_end_time: require(&state, VOTING_END_KEY)?.uint,
        asset_id: require(&state, ASSET_ID_KEY)?.uint,
        asset_coefficient: require(&state, ASSET_COEFFICIENT_KEY)?.uint,
        options,
    })
}

/// Recover an option tally from its shifted on-chain representation.
/// The contracts store `tally * 10 + 2^32` as a u64; invert that here.
fn decode_option_value(raw: u64) -> f64 {
    (raw as f64 - OPTION_VALUE_OFFSET as f64) / OPTION_VALUE_DIVISOR
}

fn require<'a>(
    state: &'a HashMap<String, TealValue>,
    field: &'static str,
) -> Result<&'a TealValue, StateError> {
    state.get(field).ok_or(StateError::MalformedState { field })
}

/// Fetch and decode the global state of the decision `app_id` created by
/// `address`.
pub async fn read_global_state(
    client: &dyn LedgerClient,
    address: &str,
    app_id: u64,
) -> Result<DecisionState, StateError> {
    let account = client.account_information(address).await?;
    for app in &account.created_apps {
        if app.id == app_id {
            let state = decode_decision_state(&app.params.global_state)?;
            tracing::debug!(
                app_id,
                decision = %state.decision_name,
                options = state.options.len(),
                "Decoded decision state"
            );
            return Ok(state);
        }
    }
    tracing::warn!(app_id, creator = %address, "Decision not found in created applications");
    Err(StateError::NotFound { app_id })
}

/// Fetch the local state `address` holds for `app_id`, with keys decoded
/// to text and values left opaque.
pub async fn read_local_state(
    client: &dyn LedgerClient,
    address: &str,
    app_id: u64,
) -> Result<Vec<LocalStateEntry>, StateError> {
    let account = client.account_information(address).await?;
    for local in &account.apps_local_state {
        if local.id == app_id {
            return local
                .key_value
                .iter()
                .map(|entry| {
                    Ok(LocalStateEntry {
                        key: codec::decode_base64_text(&entry.key)?,
                        value: entry.value.clone(),
                    })
                })
                .collect();
        }
    }
    Err(StateError::NotFound { app_id })
}

/// Raw application record for a queue contract, straight from the indexer
pub async fn lookup_queue_application(
    indexer: &dyn IndexerClient,
    app_id: u64,
) -> Result<serde_json::Value, StateError> {
    Ok(indexer.lookup_application(app_id).await?)
}
