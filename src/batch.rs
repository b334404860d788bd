//! Option batching for application-call argument limits
//!
//! The contracts accept at most five option labels per add-option call, so
//! arbitrary option lists get sliced into runs of five and the final run is
//! padded with the null-option sentinel. Batching never mutates its input;
//! every batch is a fresh allocation.

use thiserror::Error;

use crate::types::NULL_OPTION_SYM;

/// Maximum number of option labels per application call
pub const BATCH_SIZE: usize = 5;

/// Errors from option batching
#[derive(Debug, Clone, Error)]
pub enum BatchError {
    /// Input exceeds the per-call option capacity
    #[error("Got {count} options in one batch, the contract accepts at most {BATCH_SIZE}")]
    TooManyOptions { count: usize },
}

/// Pad a partial batch to exactly [`BATCH_SIZE`] labels with the
/// null-option sentinel. Fails if the input is already over capacity.
pub fn pad_batch(options: &[String]) -> Result<Vec<String>, BatchError> {
    if options.len() > BATCH_SIZE {
        return Err(BatchError::TooManyOptions {
            count: options.len(),
        });
    }
    let mut batch = options.to_vec();
    batch.resize(BATCH_SIZE, NULL_OPTION_SYM.to_string());
    Ok(batch)
}

/// Partition option labels into consecutive batches of [`BATCH_SIZE`],
/// padding only the final partial batch. An empty input produces no batches.
pub fn group_options(options: &[String]) -> Result<Vec<Vec<String>>, BatchError> {
    let mut out = Vec::with_capacity(options.len().div_ceil(BATCH_SIZE));
    let mut chunks = options.chunks(BATCH_SIZE).peekable();
    while let Some(chunk) = chunks.next() {
        if chunks.peek().is_none() {
            out.push(pad_batch(chunk)?);
        } else {
            out.push(chunk.to_vec());
        }
    }
    Ok(out)
}
