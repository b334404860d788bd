//! Unsigned application-call construction

use serde::{Deserialize, Serialize};

use crate::batch::BATCH_SIZE;
use crate::codec;
use crate::ledger::LedgerParams;
use crate::types::ADD_OPTION_SYM;

use super::TxBuilderError;

/// An unsigned no-op application call, ready for an external signer.
///
/// Constructed per call and discarded after submission; nothing in here is
/// reused across transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppCallTransaction {
    /// Creator account submitting the call
    pub sender: String,

    pub fee: u64,
    pub first_valid: u64,
    pub last_valid: u64,
    pub genesis_id: String,
    pub genesis_hash: String,

    /// Target application
    pub app_id: u64,

    /// Raw call arguments: the method marker followed by option labels
    pub app_args: Vec<Vec<u8>>,
}

/// Build a curried add-option transaction constructor.
///
/// Creator address, ledger params and the option batch are fixed up front;
/// the returned closure produces the unsigned call for any application ID.
/// The argument list leads with the `add_option` method marker, then one
/// argument per option label.
pub fn build_add_option_tx(
    creator_address: &str,
    params: &LedgerParams,
    options: &[String],
) -> Result<impl Fn(u64) -> AppCallTransaction, TxBuilderError> {
    if options.len() > BATCH_SIZE {
        return Err(TxBuilderError::TooManyArgs {
            count: options.len(),
            limit: BATCH_SIZE,
        });
    }

    let mut app_args = Vec::with_capacity(options.len() + 1);
    app_args.push(codec::encode_text(ADD_OPTION_SYM));
    app_args.extend(options.iter().map(|o| codec::encode_text(o)));

    let sender = creator_address.to_string();
    let params = params.clone();

    Ok(move |app_id: u64| AppCallTransaction {
        sender: sender.clone(),
        fee: params.fee,
        first_valid: params.first_valid,
        last_valid: params.last_valid(),
        genesis_id: params.genesis_id.clone(),
        genesis_hash: params.genesis_hash.clone(),
        app_id,
        app_args: app_args.clone(),
    })
}
