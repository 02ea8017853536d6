//! The contract every GraphBinary type serializer implements.

use bytes::{Bytes, BytesMut};

use super::cursor;
use super::header::{self, HEADER_LEN, ValueFlag};
use crate::error::GraphBinaryError;
use crate::types::GValue;

/// A decoded value together with the number of bytes read from the front of
/// the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub len: usize,
}

impl<T> Decoded<T> {
    pub fn new(value: T, len: usize) -> Self {
        Self { value, len }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded { value: f(self.value), len: self.len }
    }
}

/// A serializer for one fixed-width GraphBinary type.
///
/// Implementors only describe the payload; the qualified/unqualified framing,
/// null handling and input validation are shared by the provided methods.
/// `None` stands for both an absent and an explicitly null value.
pub trait Serializer {
    /// The application type this serializer reads and writes.
    ///
    /// `Default` supplies the zero value written for null in unqualified mode.
    type Value: Copy + Default;

    /// Reserved type code written in qualified mode.
    const TYPE_CODE: u8;

    /// Payload size in bytes.
    const WIDTH: usize;

    /// Appends the big-endian payload of `value`.
    fn put_payload(buf: &mut BytesMut, value: Self::Value);

    /// Reads a value from exactly [`WIDTH`](Self::WIDTH) payload bytes.
    fn get_payload(payload: &[u8]) -> Self::Value;

    /// Whether this serializer is the one to use for a run-time value.
    fn can_be_used_for(&self, value: &GValue) -> bool;

    /// Appends the encoding of `value` to `buf`.
    ///
    /// Null in unqualified mode has no representation and is written as the
    /// zero value instead.
    fn serialize_into(&self, buf: &mut BytesMut, value: Option<Self::Value>, qualified: bool) {
        match value {
            None if qualified => header::write_header(buf, Self::TYPE_CODE, ValueFlag::Null),
            Some(v) if qualified => {
                header::write_header(buf, Self::TYPE_CODE, ValueFlag::Present);
                Self::put_payload(buf, v);
            }
            v => Self::put_payload(buf, v.unwrap_or_default()),
        }
    }

    fn serialize(&self, value: Option<Self::Value>, qualified: bool) -> Bytes {
        let mut buf = BytesMut::with_capacity(HEADER_LEN + Self::WIDTH);
        self.serialize_into(&mut buf, value, qualified);
        buf.freeze()
    }

    /// Decodes one value from the front of `buf`, leaving any trailing bytes
    /// for the caller.
    fn deserialize_prefix(
        &self,
        buf: Option<&[u8]>,
        qualified: bool,
    ) -> Result<Decoded<Option<Self::Value>>, GraphBinaryError> {
        let buf = cursor::require_buffer(buf)?;
        let (header_len, rest) = if qualified {
            match header::read_header(buf, Self::TYPE_CODE)? {
                (ValueFlag::Null, _) => return Ok(Decoded::new(None, HEADER_LEN)),
                (ValueFlag::Present, rest) => (HEADER_LEN, rest),
            }
        } else {
            (0, buf)
        };
        let payload = cursor::take_payload(rest, Self::WIDTH)?;
        Ok(Decoded::new(
            Some(Self::get_payload(payload)),
            header_len + Self::WIDTH,
        ))
    }

    /// Decodes a buffer that holds exactly one value.
    fn deserialize(
        &self,
        buf: Option<&[u8]>,
        qualified: bool,
    ) -> Result<Decoded<Option<Self::Value>>, GraphBinaryError> {
        let decoded = self.deserialize_prefix(buf, qualified)?;
        let total = buf.map_or(0, <[u8]>::len);
        if decoded.len != total {
            let header_len = if qualified { HEADER_LEN } else { 0 };
            return Err(GraphBinaryError::length(
                decoded.len - header_len,
                total - header_len,
            ));
        }
        Ok(decoded)
    }
}
