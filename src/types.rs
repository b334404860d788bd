//! Common types used throughout the SDK
//!
//! Wire-level state entries as returned by the ledger node, the decoded
//! application-level decision state, and the reserved key/argument symbols
//! of the QVote contracts.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Global-state key prefix marking an option entry
pub const OPTION_SYM: &str = "option_";

/// Application argument selecting the add-option contract method
pub const ADD_OPTION_SYM: &str = "add_option";

/// Placeholder label used to pad partial option batches
pub const NULL_OPTION_SYM: &str = "null_option";

/// Reserved global-state key holding the decision name
pub const NAME_KEY: &str = "Name";

/// Reserved global-state key for the voting window start (unix seconds)
pub const VOTING_START_KEY: &str = "voting_start_time";

/// Reserved global-state key for the voting window end (unix seconds)
pub const VOTING_END_KEY: &str = "voting_end_time";

/// Reserved global-state key for the governance asset ID
pub const ASSET_ID_KEY: &str = "asset_id";

/// Reserved global-state key for the asset coefficient
pub const ASSET_COEFFICIENT_KEY: &str = "asset_coefficient";

/// Offset the contracts add to option tallies so negative credits fit in a u64
pub const OPTION_VALUE_OFFSET: u64 = 1 << 32;

/// Divisor recovering one decimal digit from the shifted on-chain tally.
/// Contract-specific fixed-point convention, kept exactly as deployed.
pub const OPTION_VALUE_DIVISOR: f64 = 10.0;

/// A single TEAL value as the node reports it: base64 bytes, a uint and a
/// type tag. Only one of `bytes`/`uint` is meaningful depending on the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TealValue {
    /// Base64-encoded byte value (decoded in-place for text fields)
    #[serde(default)]
    pub bytes: String,

    /// Unsigned integer value
    #[serde(default)]
    pub uint: u64,

    /// TEAL type tag (1 = bytes, 2 = uint)
    #[serde(rename = "type", default)]
    pub value_type: u64,
}

/// One global/local state entry in node encoding: key is base64
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStateEntry {
    pub key: String,
    pub value: TealValue,
}

/// A decoded local-state entry: key is plain text, value stays opaque
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStateEntry {
    pub key: String,
    pub value: TealValue,
}

/// One candidate option within a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteOption {
    /// Option title, including the `option_` key prefix
    pub title: String,

    /// Current tally, de-offset and scaled to one decimal place
    pub value: f64,
}

/// Decoded global state of a deployed decision application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionState {
    pub decision_name: String,

    /// Voting window start, unix seconds
    pub voting_start_time: u64,

    /// Voting window end, unix seconds
    pub voting_end_time: u64,

    /// Governance asset backing vote credits
    pub asset_id: u64,

    pub asset_coefficient: u64,

    /// Options in global-state entry order
    pub options: Vec<VoteOption>,
}

impl DecisionState {
    /// Voting window start as a UTC timestamp
    pub fn voting_start(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.voting_start_time as i64, 0).single()
    }

    /// Voting window end as a UTC timestamp
    pub fn voting_end(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.voting_end_time as i64, 0).single()
    }

    /// Whether the voting window contains `now`
    pub fn is_open_at(&self, now: DateTime<Utc>) -> bool {
        let ts = now.timestamp();
        ts >= self.voting_start_time as i64 && ts < self.voting_end_time as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voting_window_bounds() {
        let state = DecisionState {
            decision_name: "budget".to_string(),
            voting_start_time: 1_700_000_000,
            voting_end_time: 1_700_003_600,
            asset_id: 7,
            asset_coefficient: 1,
            options: vec![],
        };
        let start = state.voting_start().unwrap();
        assert!(state.is_open_at(start));
        let end = state.voting_end().unwrap();
        assert!(!state.is_open_at(end));
    }
}
