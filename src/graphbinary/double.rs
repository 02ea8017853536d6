//! Double: IEEE-754 binary64.

use bytes::{Buf, BufMut, BytesMut};

use super::serializer::Serializer;
use super::type_code;
use crate::types::GValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleSerializer;

impl Serializer for DoubleSerializer {
    type Value = f64;

    const TYPE_CODE: u8 = type_code::DOUBLE;
    const WIDTH: usize = 8;

    fn put_payload(buf: &mut BytesMut, value: f64) {
        if value.is_nan() {
            buf.put_u64(type_code::DOUBLE_NAN_BITS);
        } else {
            buf.put_f64(value);
        }
    }

    fn get_payload(mut payload: &[u8]) -> f64 {
        payload.get_f64()
    }

    fn can_be_used_for(&self, value: &GValue) -> bool {
        matches!(value, GValue::Double(_))
    }
}
