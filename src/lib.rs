//! GraphBinary: typed value codecs for graph-traversal protocol clients.
//!
//! This crate converts application values to and from GraphBinary, the
//! self-describing binary format used to exchange traversal requests and
//! results with a graph server. Transport, framing and composite types live
//! elsewhere and build on the serializers here.
//!
//! # Architecture
//!
//! - **`graphbinary`**: Per-type serializers, the shared `Serializer` contract
//!   and a type-code registry for polymorphic dispatch
//! - **`types`**: `GValue`, the dynamically typed value the registry handles
//! - **`error`**: `GraphBinaryError`, the decoding error taxonomy
//!
//! ```
//! use graphbinary::{FloatSerializer, Serializer};
//!
//! let bytes = FloatSerializer.serialize(Some(1.0), true);
//! assert_eq!(&bytes[..], &[0x08, 0x00, 0x3F, 0x80, 0x00, 0x00]);
//!
//! let decoded = FloatSerializer.deserialize(Some(&bytes[..]), true).unwrap();
//! assert_eq!((decoded.value, decoded.len), (Some(1.0), 6));
//! ```

pub mod error;
pub mod graphbinary;
pub mod types;

pub use error::GraphBinaryError;
pub use graphbinary::{
    AnySerializer, Decoded, DoubleSerializer, FloatSerializer, IntSerializer, LongSerializer,
    Registry, RegistryBuilder, Serializer,
};
pub use types::GValue;
