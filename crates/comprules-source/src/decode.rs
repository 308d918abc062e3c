//! Text decoding.

use crate::error::SourceError;

const BYTE_ORDER_MARK: &[u8] = b"\xef\xbb\xbf";

/// Decode UTF-8 bytes, dropping a leading byte-order mark if present.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when the bytes are not valid UTF-8.
pub fn decode_utf8_sig(mut bytes: Vec<u8>) -> Result<String, SourceError> {
    if bytes.starts_with(BYTE_ORDER_MARK) {
        bytes.drain(..BYTE_ORDER_MARK.len());
    }
    Ok(String::from_utf8(bytes)?)
}
