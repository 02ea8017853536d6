//! GraphBinary encoding format for primitive values.
//!
//! A fully qualified value is `[type_code][value_flag][payload]`; an
//! unqualified one is the payload alone. Payloads are fixed-width and
//! big-endian.

pub mod cursor;
pub mod double;
pub mod float;
pub mod header;
pub mod int;
pub mod long;
pub mod registry;
pub mod serializer;
pub mod type_code;

pub use double::DoubleSerializer;
pub use float::FloatSerializer;
pub use int::IntSerializer;
pub use long::LongSerializer;
pub use registry::{AnySerializer, Registry, RegistryBuilder};
pub use serializer::{Decoded, Serializer};
