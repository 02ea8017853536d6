//! Buffer checks shared by every deserializer.

use crate::error::GraphBinaryError;

/// Confirms that a buffer was supplied and holds at least one byte.
pub fn require_buffer(buf: Option<&[u8]>) -> Result<&[u8], GraphBinaryError> {
    match buf {
        None => Err(GraphBinaryError::MissingBuffer),
        Some([]) => Err(GraphBinaryError::EmptyBuffer),
        Some(buf) => Ok(buf),
    }
}

/// Returns the first `width` bytes of `buf`.
pub fn take_payload(buf: &[u8], width: usize) -> Result<&[u8], GraphBinaryError> {
    buf.get(..width)
        .ok_or_else(|| GraphBinaryError::length(width, buf.len()))
}
