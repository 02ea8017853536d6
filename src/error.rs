//! Error types for GraphBinary encoding and decoding.

/// Errors that can occur while decoding (or dispatching) GraphBinary values.
///
/// Every variant describes malformed or unsupported input. None of them are
/// transient: decoding the same bytes again fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBinaryError {
    #[error("buffer is missing")]
    MissingBuffer,

    #[error("buffer is empty")]
    EmptyBuffer,

    #[error("unexpected type code")]
    UnexpectedTypeCode { expected: u8, actual: u8 },

    #[error("value flag is missing")]
    MissingValueFlag,

    #[error("unexpected value flag 0x{0:02X}")]
    UnexpectedValueFlag(u8),

    #[error("unexpected value length: need {expected} bytes, got {actual}")]
    UnexpectedValueLength { expected: usize, actual: usize },

    #[error("unsupported type code 0x{0:02X}")]
    UnsupportedTypeCode(u8),

    #[error("unsupported value: {0}")]
    UnsupportedValue(&'static str),
}

impl GraphBinaryError {
    /// Builds an [`UnexpectedValueLength`](Self::UnexpectedValueLength) error.
    pub(crate) fn length(expected: usize, actual: usize) -> Self {
        Self::UnexpectedValueLength { expected, actual }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure_category() {
        let cases = [
            (GraphBinaryError::MissingBuffer, "buffer is missing"),
            (GraphBinaryError::EmptyBuffer, "buffer is empty"),
            (
                GraphBinaryError::UnexpectedTypeCode { expected: 0x08, actual: 0x07 },
                "unexpected type code",
            ),
            (GraphBinaryError::MissingValueFlag, "value flag is missing"),
            (GraphBinaryError::UnexpectedValueFlag(0x10), "unexpected value flag"),
            (GraphBinaryError::length(4, 0), "unexpected value length"),
            (GraphBinaryError::UnsupportedTypeCode(0x03), "unsupported type code"),
            (GraphBinaryError::UnsupportedValue("null"), "unsupported value"),
        ];
        for (err, category) in cases {
            let msg = err.to_string();
            assert!(msg.starts_with(category), "{msg:?} does not start with {category:?}");
        }
    }

    #[test]
    fn type_code_message_is_the_same_for_every_type() {
        use crate::graphbinary::{FloatSerializer, LongSerializer, Serializer};

        let float = FloatSerializer.deserialize(Some(&[0x07][..]), true).unwrap_err();
        let long = LongSerializer.deserialize(Some(&[0x01][..]), true).unwrap_err();
        assert_eq!(float, GraphBinaryError::UnexpectedTypeCode { expected: 0x08, actual: 0x07 });
        assert_eq!(long, GraphBinaryError::UnexpectedTypeCode { expected: 0x02, actual: 0x01 });
        assert_eq!(float.to_string(), long.to_string());
        assert_eq!(float.to_string(), "unexpected type code");
    }
}
