//! Transaction building for the decision contracts
//!
//! Pure construction of unsigned application calls: no signing, no
//! broadcasting, no network access. Outputs go to an external signer and
//! submission layer.

pub mod builder;
pub mod errors;

pub use builder::{build_add_option_tx, AppCallTransaction};
pub use errors::TxBuilderError;
