//! Type code and value flag handling for fully qualified values.

use bytes::{BufMut, BytesMut};

use super::type_code;
use crate::error::GraphBinaryError;

/// Size of the `[type_code][value_flag]` prefix.
pub const HEADER_LEN: usize = 2;

/// The value flag byte that follows a type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFlag {
    Present,
    Null,
}

impl ValueFlag {
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Present => type_code::VALUE_FLAG_NONE,
            Self::Null => type_code::VALUE_FLAG_NULL,
        }
    }
}

impl TryFrom<u8> for ValueFlag {
    type Error = GraphBinaryError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            type_code::VALUE_FLAG_NONE => Ok(Self::Present),
            type_code::VALUE_FLAG_NULL => Ok(Self::Null),
            other => Err(GraphBinaryError::UnexpectedValueFlag(other)),
        }
    }
}

/// Validates the header of a qualified value and returns its flag together
/// with the bytes that follow it.
///
/// The type code is checked before the flag's presence, so a lone wrong byte
/// reports `UnexpectedTypeCode` rather than `MissingValueFlag`.
pub fn read_header(buf: &[u8], expected: u8) -> Result<(ValueFlag, &[u8]), GraphBinaryError> {
    let (&actual, rest) = buf.split_first().ok_or(GraphBinaryError::EmptyBuffer)?;
    if actual != expected {
        return Err(GraphBinaryError::UnexpectedTypeCode { expected, actual });
    }
    let (&flag, rest) = rest.split_first().ok_or(GraphBinaryError::MissingValueFlag)?;
    Ok((ValueFlag::try_from(flag)?, rest))
}

pub fn write_header(buf: &mut BytesMut, code: u8, flag: ValueFlag) {
    buf.put_u8(code);
    buf.put_u8(flag.to_byte());
}
