//! GraphBinary type code and value flag constants.

// Numeric primitives
pub const INT: u8 = 0x01;
pub const LONG: u8 = 0x02;
pub const DOUBLE: u8 = 0x07;
pub const FLOAT: u8 = 0x08;

// Null of unknown type, written by polymorphic writers.
pub const UNSPECIFIED_NULL: u8 = 0xFE;

// Value flag (second byte of every qualified value)
pub const VALUE_FLAG_NONE: u8 = 0x00;
pub const VALUE_FLAG_NULL: u8 = 0x01;

// Canonical NaN bit patterns
pub const FLOAT_NAN_BITS: u32 = 0x7FC0_0000;
pub const DOUBLE_NAN_BITS: u64 = 0x7FF8_0000_0000_0000;
