//! Dispatch over the built-in serializers by type code or by run-time value.

use std::sync::LazyLock;

use bytes::{Bytes, BytesMut};

use super::cursor;
use super::double::DoubleSerializer;
use super::float::FloatSerializer;
use super::header::{self, HEADER_LEN, ValueFlag};
use super::int::IntSerializer;
use super::long::LongSerializer;
use super::serializer::{Decoded, Serializer};
use super::type_code;
use crate::error::GraphBinaryError;
use crate::types::GValue;

/// One of the built-in serializers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnySerializer {
    Int,
    Long,
    Double,
    Float,
}

impl AnySerializer {
    pub const ALL: [Self; 4] = [Self::Int, Self::Long, Self::Double, Self::Float];

    pub const fn type_code(self) -> u8 {
        match self {
            Self::Int => IntSerializer::TYPE_CODE,
            Self::Long => LongSerializer::TYPE_CODE,
            Self::Double => DoubleSerializer::TYPE_CODE,
            Self::Float => FloatSerializer::TYPE_CODE,
        }
    }

    pub fn can_be_used_for(self, value: &GValue) -> bool {
        match self {
            Self::Int => IntSerializer.can_be_used_for(value),
            Self::Long => LongSerializer.can_be_used_for(value),
            Self::Double => DoubleSerializer.can_be_used_for(value),
            Self::Float => FloatSerializer.can_be_used_for(value),
        }
    }

    /// Appends `value` to `buf`. `GValue::Null` is written as this type's null.
    pub fn serialize_into(
        self,
        buf: &mut BytesMut,
        value: &GValue,
        qualified: bool,
    ) -> Result<(), GraphBinaryError> {
        match (self, *value) {
            (Self::Int, GValue::Null) => IntSerializer.serialize_into(buf, None, qualified),
            (Self::Long, GValue::Null) => LongSerializer.serialize_into(buf, None, qualified),
            (Self::Double, GValue::Null) => DoubleSerializer.serialize_into(buf, None, qualified),
            (Self::Float, GValue::Null) => FloatSerializer.serialize_into(buf, None, qualified),
            (Self::Int, GValue::Int(v)) => IntSerializer.serialize_into(buf, Some(v), qualified),
            (Self::Long, GValue::Long(v)) => LongSerializer.serialize_into(buf, Some(v), qualified),
            (Self::Double, GValue::Double(v)) => {
                DoubleSerializer.serialize_into(buf, Some(v), qualified)
            }
            (Self::Float, GValue::Float(v)) => {
                FloatSerializer.serialize_into(buf, Some(v), qualified)
            }
            (_, other) => return Err(GraphBinaryError::UnsupportedValue(other.type_name())),
        }
        Ok(())
    }

    pub fn serialize(self, value: &GValue, qualified: bool) -> Result<Bytes, GraphBinaryError> {
        let mut buf = BytesMut::new();
        self.serialize_into(&mut buf, value, qualified)?;
        Ok(buf.freeze())
    }

    /// Decodes one value from the front of `buf`. A qualified null decodes to
    /// `GValue::Null`.
    pub fn deserialize_prefix(
        self,
        buf: Option<&[u8]>,
        qualified: bool,
    ) -> Result<Decoded<GValue>, GraphBinaryError> {
        match self {
            Self::Int => IntSerializer.deserialize_prefix(buf, qualified).map(into_gvalue),
            Self::Long => LongSerializer.deserialize_prefix(buf, qualified).map(into_gvalue),
            Self::Double => DoubleSerializer.deserialize_prefix(buf, qualified).map(into_gvalue),
            Self::Float => FloatSerializer.deserialize_prefix(buf, qualified).map(into_gvalue),
        }
    }

    /// Decodes a buffer that holds exactly one value.
    pub fn deserialize(
        self,
        buf: Option<&[u8]>,
        qualified: bool,
    ) -> Result<Decoded<GValue>, GraphBinaryError> {
        match self {
            Self::Int => IntSerializer.deserialize(buf, qualified).map(into_gvalue),
            Self::Long => LongSerializer.deserialize(buf, qualified).map(into_gvalue),
            Self::Double => DoubleSerializer.deserialize(buf, qualified).map(into_gvalue),
            Self::Float => FloatSerializer.deserialize(buf, qualified).map(into_gvalue),
        }
    }
}

fn into_gvalue<T: Into<GValue>>(decoded: Decoded<Option<T>>) -> Decoded<GValue> {
    decoded.map(GValue::from)
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::default);

/// A read-only table from type code to serializer.
///
/// Build one with [`Registry::builder`], or use [`Registry::global`] for the
/// process-wide instance that knows every built-in type.
#[derive(Debug, Clone)]
pub struct Registry {
    by_code: [Option<AnySerializer>; 256],
    /// Registration order; decides which serializer a value is matched to.
    order: Vec<AnySerializer>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builder().with_all().build()
    }
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn serializer_for_code(&self, code: u8) -> Option<AnySerializer> {
        self.by_code[usize::from(code)]
    }

    /// The first registered serializer whose `can_be_used_for` accepts `value`.
    pub fn serializer_for_value(&self, value: &GValue) -> Option<AnySerializer> {
        self.order.iter().copied().find(|s| s.can_be_used_for(value))
    }

    /// Appends the fully qualified encoding of `value`.
    ///
    /// `GValue::Null` carries no type and is written as the unspecified null.
    pub fn serialize_into(
        &self,
        buf: &mut BytesMut,
        value: &GValue,
    ) -> Result<(), GraphBinaryError> {
        if value.is_null() {
            header::write_header(buf, type_code::UNSPECIFIED_NULL, ValueFlag::Null);
            return Ok(());
        }
        let Some(serializer) = self.serializer_for_value(value) else {
            tracing::debug!(value = %value, "no serializer registered for value");
            return Err(GraphBinaryError::UnsupportedValue(value.type_name()));
        };
        serializer.serialize_into(buf, value, true)
    }

    pub fn serialize(&self, value: &GValue) -> Result<Bytes, GraphBinaryError> {
        let mut buf = BytesMut::new();
        self.serialize_into(&mut buf, value)?;
        Ok(buf.freeze())
    }

    /// Decodes the fully qualified value at the front of `buf`.
    pub fn deserialize_prefix(&self, buf: &[u8]) -> Result<Decoded<GValue>, GraphBinaryError> {
        let buf = cursor::require_buffer(Some(buf))?;
        let code = buf[0];
        if code == type_code::UNSPECIFIED_NULL {
            return match header::read_header(buf, code)? {
                (ValueFlag::Null, _) => Ok(Decoded::new(GValue::Null, HEADER_LEN)),
                (ValueFlag::Present, _) => {
                    Err(GraphBinaryError::UnexpectedValueFlag(type_code::VALUE_FLAG_NONE))
                }
            };
        }
        let Some(serializer) = self.serializer_for_code(code) else {
            tracing::debug!(type_code = code, "no serializer registered for type code");
            return Err(GraphBinaryError::UnsupportedTypeCode(code));
        };
        let decoded = serializer.deserialize_prefix(Some(buf), true)?;
        tracing::trace!(type_code = code, len = decoded.len, "decoded value");
        Ok(decoded)
    }

    /// Decodes a buffer that holds exactly one fully qualified value.
    pub fn deserialize(&self, buf: &[u8]) -> Result<Decoded<GValue>, GraphBinaryError> {
        let decoded = self.deserialize_prefix(buf)?;
        if decoded.len != buf.len() {
            return Err(GraphBinaryError::length(
                decoded.len - HEADER_LEN,
                buf.len() - HEADER_LEN,
            ));
        }
        Ok(decoded)
    }

    /// Decodes consecutive fully qualified values until `buf` is exhausted.
    ///
    /// An empty buffer holds no values. A malformed value fails the whole
    /// sequence.
    pub fn deserialize_all(&self, buf: &[u8]) -> Result<Vec<GValue>, GraphBinaryError> {
        let mut values = Vec::new();
        let mut rest = buf;
        while !rest.is_empty() {
            let decoded = self.deserialize_prefix(rest)?;
            values.push(decoded.value);
            rest = &rest[decoded.len..];
        }
        Ok(values)
    }
}

/// Builder for a [`Registry`].
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    order: Vec<AnySerializer>,
}

impl RegistryBuilder {
    /// Registers a serializer. Registering the same one twice keeps the first
    /// position.
    pub fn with(mut self, serializer: AnySerializer) -> Self {
        if !self.order.contains(&serializer) {
            self.order.push(serializer);
        }
        self
    }

    /// Registers every built-in serializer not yet registered.
    pub fn with_all(self) -> Self {
        AnySerializer::ALL.into_iter().fold(self, Self::with)
    }

    pub fn build(self) -> Registry {
        let mut by_code = [None; 256];
        for serializer in &self.order {
            by_code[usize::from(serializer.type_code())] = Some(*serializer);
        }
        Registry { by_code, order: self.order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_are_unique() {
        for (i, a) in AnySerializer::ALL.iter().enumerate() {
            for b in &AnySerializer::ALL[i + 1..] {
                assert_ne!(a.type_code(), b.type_code(), "{a:?} and {b:?}");
            }
            assert_eq!(Registry::global().serializer_for_code(a.type_code()), Some(*a));
        }
        assert_eq!(Registry::global().serializer_for_code(0x03), None);
    }

    #[test]
    fn each_value_has_exactly_one_serializer() {
        let values = [GValue::Int(1), GValue::Long(1), GValue::Double(1.0), GValue::Float(1.0)];
        for value in values {
            let matching: Vec<_> = AnySerializer::ALL
                .into_iter()
                .filter(|s| s.can_be_used_for(&value))
                .collect();
            assert_eq!(matching.len(), 1, "{value:?} matched {matching:?}");
        }
        assert!(AnySerializer::ALL.iter().all(|s| !s.can_be_used_for(&GValue::Null)));
    }

    #[test]
    fn any_serializer_rejects_other_types() {
        assert_eq!(
            AnySerializer::Long.serialize(&GValue::Float(1.0), true),
            Err(GraphBinaryError::UnsupportedValue("float"))
        );
    }

    #[test]
    fn any_serializer_null_uses_own_type_code() {
        let bytes = AnySerializer::Float.serialize(&GValue::Null, true).unwrap();
        assert_eq!(&bytes[..], &[0x08, 0x01]);
        let bytes = AnySerializer::Long.serialize(&GValue::Null, false).unwrap();
        assert_eq!(&bytes[..], &[0x00; 8]);
        assert_eq!(
            AnySerializer::Float.deserialize(Some(&[0x08, 0x01][..]), true),
            Ok(Decoded::new(GValue::Null, 2))
        );
    }

    #[test]
    fn global_round_trips_every_type() {
        let registry = Registry::global();
        let values = [
            GValue::Int(-7),
            GValue::Long(i64::MIN),
            GValue::Double(2.5),
            GValue::Float(0.375),
            GValue::Null,
        ];
        for value in values {
            let bytes = registry.serialize(&value).unwrap();
            let decoded = registry.deserialize(&bytes).unwrap();
            assert_eq!(decoded, Decoded::new(value, bytes.len()), "{value:?}");
        }
    }

    #[test]
    fn null_is_unspecified() {
        let bytes = Registry::global().serialize(&GValue::Null).unwrap();
        assert_eq!(&bytes[..], &[0xFE, 0x01]);
    }

    #[test]
    fn unspecified_null_must_be_null() {
        let registry = Registry::global();
        assert_eq!(
            registry.deserialize(&[0xFE, 0x00]),
            Err(GraphBinaryError::UnexpectedValueFlag(0x00))
        );
        assert_eq!(registry.deserialize(&[0xFE]), Err(GraphBinaryError::MissingValueFlag));
        assert_eq!(
            registry.deserialize(&[0xFE, 0x07]),
            Err(GraphBinaryError::UnexpectedValueFlag(0x07))
        );
    }

    #[test]
    fn unknown_type_code() {
        assert_eq!(
            Registry::global().deserialize(&[0x03, 0x00]),
            Err(GraphBinaryError::UnsupportedTypeCode(0x03))
        );
        assert_eq!(Registry::global().deserialize(&[]), Err(GraphBinaryError::EmptyBuffer));
    }

    #[test]
    fn deserialize_all_walks_the_buffer() {
        let registry = Registry::global();
        let mut buf = BytesMut::new();
        for value in [GValue::Long(42), GValue::Null, GValue::Float(1.0), GValue::Int(3)] {
            registry.serialize_into(&mut buf, &value).unwrap();
        }
        assert_eq!(
            registry.deserialize_all(&buf).unwrap(),
            vec![GValue::Long(42), GValue::Null, GValue::Float(1.0), GValue::Int(3)]
        );
        assert_eq!(registry.deserialize_all(&[]).unwrap(), Vec::<GValue>::new());
    }

    #[test]
    fn deserialize_all_fails_on_truncated_tail() {
        let registry = Registry::global();
        let mut buf = BytesMut::new();
        registry.serialize_into(&mut buf, &GValue::Long(1)).unwrap();
        buf.extend_from_slice(&[0x02, 0x00, 0x00]);
        assert_eq!(
            registry.deserialize_all(&buf),
            Err(GraphBinaryError::UnexpectedValueLength { expected: 8, actual: 1 })
        );
    }

    #[test]
    fn deserialize_rejects_trailing_bytes() {
        assert_eq!(
            Registry::global().deserialize(&[0x08, 0x01, 0x00]),
            Err(GraphBinaryError::UnexpectedValueLength { expected: 0, actual: 1 })
        );
    }

    #[test]
    fn builder_limits_known_types() {
        let registry = Registry::builder().with(AnySerializer::Long).build();
        assert_eq!(registry.serializer_for_code(0x02), Some(AnySerializer::Long));
        assert_eq!(registry.serializer_for_code(0x08), None);
        assert_eq!(
            registry.serialize(&GValue::Float(1.0)),
            Err(GraphBinaryError::UnsupportedValue("float"))
        );
        assert_eq!(
            registry.deserialize(&[0x08, 0x01]),
            Err(GraphBinaryError::UnsupportedTypeCode(0x08))
        );
    }

    #[test]
    fn builder_ignores_duplicates() {
        let registry = Registry::builder()
            .with(AnySerializer::Float)
            .with(AnySerializer::Float)
            .with_all()
            .build();
        assert_eq!(registry.order.first(), Some(&AnySerializer::Float));
        assert_eq!(registry.order.len(), AnySerializer::ALL.len());
    }
}
