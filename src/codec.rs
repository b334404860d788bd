//! Byte and string encoding helpers
//!
//! The ledger node reports state keys and byte values base64-encoded, and
//! application calls take their arguments as raw byte arrays. Everything in
//! here is a pure transformation with a typed error.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use thiserror::Error;

use crate::types::TealValue;

/// Errors from encoding and decoding primitives
#[derive(Debug, Clone, Error)]
pub enum CodecError {
    /// Input was not valid base64
    #[error("Invalid base64: {0}")]
    Base64(String),

    /// Decoded bytes were not valid UTF-8 text
    #[error("Decoded bytes are not valid UTF-8: {0}")]
    Utf8(String),

    /// Integer does not fit the requested fixed-width encoding
    #[error("Value {value} does not fit in {size} bytes")]
    Range { value: u64, size: usize },
}

/// Encode text as its UTF-8 bytes, no trailing null
pub fn encode_text(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Encode a small integer as a single-byte application argument
pub fn encode_uint(n: u8) -> Vec<u8> {
    vec![n]
}

/// Decode a base64 string into UTF-8 text
pub fn decode_base64_text(s: &str) -> Result<String, CodecError> {
    let bytes = BASE64
        .decode(s)
        .map_err(|e| CodecError::Base64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| CodecError::Utf8(e.to_string()))
}

/// Copy a TEAL value with its `bytes` field decoded from base64 to text.
/// `uint` and the type tag pass through unchanged.
pub fn decode_value(v: &TealValue) -> Result<TealValue, CodecError> {
    Ok(TealValue {
        bytes: decode_base64_text(&v.bytes)?,
        uint: v.uint,
        value_type: v.value_type,
    })
}

/// Big-endian encoding of `n` into exactly `size` bytes.
///
/// Fails with [`CodecError::Range`] when `n` needs more than `size` bytes;
/// high bytes are never silently truncated.
pub fn int_to_fixed_bytes(n: u64, size: usize) -> Result<Vec<u8>, CodecError> {
    let needed = if n == 0 {
        0
    } else {
        8 - n.leading_zeros() as usize / 8
    };
    if needed > size {
        return Err(CodecError::Range { value: n, size });
    }
    let be = n.to_be_bytes();
    let mut out = vec![0u8; size - needed];
    out.extend_from_slice(&be[8 - needed..]);
    Ok(out)
}
