mod compare;
mod tag;


use crate::types::{Bytes, Url};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp, text_compare, TextOp};
pub use tag::{ScalarTag, ValueFamily};

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
///
/// Runtime literal representation used on the right-hand side of
/// comparisons and inside fetched attribute maps.
///
/// Null → the property's value is Option::None.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    Text(String),
    Date(DateTime<Utc>),
    Url(Url),
    Uuid(Uuid),
    Blob(Bytes),
    Null,
    List(Vec<Value>),
}

impl Value {
    /// Scalar tag of this value.
    ///
    /// A list's inner tag is taken from its first element; an empty list
    /// reports `List(Null)`.
    #[must_use]
    pub fn tag(&self) -> ScalarTag {
        match self {
            Self::Bool(_) => ScalarTag::Bool,
            Self::Int8(_) => ScalarTag::Int8,
            Self::Int16(_) => ScalarTag::Int16,
            Self::Int32(_) => ScalarTag::Int32,
            Self::Int64(_) => ScalarTag::Int64,
            Self::Uint8(_) => ScalarTag::Uint8,
            Self::Uint16(_) => ScalarTag::Uint16,
            Self::Uint32(_) => ScalarTag::Uint32,
            Self::Uint64(_) => ScalarTag::Uint64,
            Self::Float32(_) => ScalarTag::Float32,
            Self::Float64(_) => ScalarTag::Float64,
            Self::Text(_) => ScalarTag::Text,
            Self::Date(_) => ScalarTag::Date,
            Self::Url(_) => ScalarTag::Url,
            Self::Uuid(_) => ScalarTag::Uuid,
            Self::Blob(_) => ScalarTag::Blob,
            Self::Null => ScalarTag::Null,
            Self::List(items) => items
                .first()
                .map_or(ScalarTag::Null, Self::tag)
                .list(),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub fn kind_label(&self) -> &'static str {
        self.tag().label()
    }

    /// Numeric widening to f64.
    ///
    /// Only integer, unsigned, and floating variants widen; Date is
    /// excluded (see the registry note).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        use num_traits::ToPrimitive;

        match self {
            Self::Int8(v) => v.to_f64(),
            Self::Int16(v) => v.to_f64(),
            Self::Int32(v) => v.to_f64(),
            Self::Int64(v) => v.to_f64(),
            Self::Uint8(v) => v.to_f64(),
            Self::Uint16(v) => v.to_f64(),
            Self::Uint32(v) => v.to_f64(),
            Self::Uint64(v) => v.to_f64(),
            Self::Float32(v) => v.to_f64(),
            Self::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Borrow the textual form of text-family values.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            Self::Url(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Borrow the list payload, if any.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Uint8(v) => write!(f, "{v}"),
            Self::Uint16(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}"),
            Self::Uint64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Date(v) => {
                write!(f, "{:?}", v.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Self::Url(v) => write!(f, "{:?}", v.as_str()),
            Self::Uuid(v) => write!(f, "{v:?}"),
            Self::Blob(v) => write!(f, "<{} bytes>", v.len()),
            Self::Null => write!(f, "nil"),
            Self::List(items) => {
                write!(f, "{{")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
        }
    }
}
