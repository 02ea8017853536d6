//! Float: IEEE-754 binary32.

use bytes::{Buf, BufMut, BytesMut};

use super::serializer::Serializer;
use super::type_code;
use crate::types::GValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatSerializer;

impl Serializer for FloatSerializer {
    type Value = f32;

    const TYPE_CODE: u8 = type_code::FLOAT;
    const WIDTH: usize = 4;

    fn put_payload(buf: &mut BytesMut, value: f32) {
        // Every NaN goes on the wire as the canonical quiet NaN.
        if value.is_nan() {
            buf.put_u32(type_code::FLOAT_NAN_BITS);
        } else {
            buf.put_f32(value);
        }
    }

    fn get_payload(mut payload: &[u8]) -> f32 {
        payload.get_f32()
    }

    fn can_be_used_for(&self, value: &GValue) -> bool {
        matches!(value, GValue::Float(_))
    }
}
