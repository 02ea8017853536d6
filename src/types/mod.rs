//! GraphBinary value types.

mod value;

pub use value::GValue;
