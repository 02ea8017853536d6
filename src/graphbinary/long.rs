//! Long: 64-bit signed integer, two's complement.
//!
//! Values are carried as `i64` on both sides of the codec, so the full range
//! `i64::MIN..=i64::MAX` round-trips without passing through a float.

use bytes::{Buf, BufMut, BytesMut};

use super::serializer::Serializer;
use super::type_code;
use crate::types::GValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongSerializer;

impl Serializer for LongSerializer {
    type Value = i64;

    const TYPE_CODE: u8 = type_code::LONG;
    const WIDTH: usize = 8;

    fn put_payload(buf: &mut BytesMut, value: i64) {
        buf.put_i64(value);
    }

    fn get_payload(mut payload: &[u8]) -> i64 {
        payload.get_i64()
    }

    fn can_be_used_for(&self, value: &GValue) -> bool {
        matches!(value, GValue::Long(_))
    }
}
