//! GraphBinary value types.

use std::fmt;

/// A dynamically typed GraphBinary value, as handled by the registry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GValue {
    Null,
    Int(i32),
    Long(i64),
    Double(f64),
    Float(f32),
}

impl GValue {
    /// Short name of the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Double(_) => "double",
            Self::Float(_) => "float",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<i32> for GValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for GValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for GValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for GValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl<T: Into<GValue>> From<Option<T>> for GValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl fmt::Display for GValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Long(l) => write!(f, "{l}L"),
            Self::Double(d) => write!(f, "{d}d"),
            Self::Float(v) => write!(f, "{v}f"),
        }
    }
}
