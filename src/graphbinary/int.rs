//! Int: 32-bit signed integer, two's complement.

use bytes::{Buf, BufMut, BytesMut};

use super::serializer::Serializer;
use super::type_code;
use crate::types::GValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntSerializer;

impl Serializer for IntSerializer {
    type Value = i32;

    const TYPE_CODE: u8 = type_code::INT;
    const WIDTH: usize = 4;

    fn put_payload(buf: &mut BytesMut, value: i32) {
        buf.put_i32(value);
    }

    fn get_payload(mut payload: &[u8]) -> i32 {
        payload.get_i32()
    }

    fn can_be_used_for(&self, value: &GValue) -> bool {
        matches!(value, GValue::Int(_))
    }
}
