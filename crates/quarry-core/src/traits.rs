use crate::{
    error::DecodeError,
    session::AttributeMap,
    types::{Bytes, Url},
    value::{ScalarTag, Value},
};
use chrono::{DateTime, Utc};
use std::marker::PhantomData;
use uuid::Uuid;

///
/// FieldValue
///
/// Conversion boundary for values used in query predicates.
///
/// Represents values that can appear on the *right-hand side* of
/// comparisons, plus the static tag lookup that drives default
/// comparison options. Every queryable value type maps to exactly one
/// scalar tag; an unregistered type simply has no impl and fails to
/// compile at the point of predicate construction.
///

pub trait FieldValue {
    fn tag() -> ScalarTag
    where
        Self: Sized;

    fn to_value(&self) -> Value;

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

///
/// OrderedValue
///
/// Marker for value types with a meaningful order; gates `between`,
/// `min`, and `max`.
///

pub trait OrderedValue: FieldValue {}

///
/// NumericValue
///
/// Marker for additive value types; gates `sum`, `average`, and `mode`.
///

pub trait NumericValue: OrderedValue {}

///
/// TextValue
///
/// Marker for string-shaped value types (including optional strings);
/// gates the text-only combinators.
///

pub trait TextValue: FieldValue {}

///
/// OptionalValue
///
/// Marker for optional-shaped value types; gates the nil-literal
/// comparisons so they never compete with same-type literal overloads.
///

pub trait OptionalValue: FieldValue {}

///
/// EnumValue
///
/// Raw-representable enumerations: closed enums backed by a registered
/// primitive. Tag and default comparison options delegate to `Raw`
/// through a single explicit indirection; use `raw_enum_value!` to
/// generate the delegating `FieldValue` impl.
///

pub trait EnumValue: Sized {
    type Raw: FieldValue;

    fn to_raw(&self) -> Self::Raw;

    #[must_use]
    fn from_raw(raw: Self::Raw) -> Option<Self>;
}

// ============================================================================
// ENTITY IDENTITY & DECODING
// ============================================================================

///
/// EntityKind
///
/// Declared identity facts for an entity: the backend entity name and the
/// attribute holding its stable identifier. Use the `entity!` macro to
/// implement this alongside the typed property accessors.
///

pub trait EntityKind: 'static {
    const ENTITY_NAME: &'static str;
    const ID_ATTRIBUTE: &'static str;
}

///
/// EntityValue
///
/// Runtime surface of an entity: identifier projection for identity
/// comparisons, and decoding from a fetched attribute map.
///

pub trait EntityValue: EntityKind + Sized {
    fn id_value(&self) -> Value;

    fn from_attributes(attrs: &AttributeMap) -> Result<Self, DecodeError>;
}

/// Read and convert one required attribute from a fetched row.
pub fn require_attribute<T: FieldValue>(
    attrs: &AttributeMap,
    attribute: &str,
) -> Result<T, DecodeError> {
    let value = attrs
        .get(attribute)
        .ok_or_else(|| DecodeError::MissingAttribute {
            attribute: attribute.to_string(),
        })?;

    T::from_value(value).ok_or_else(|| DecodeError::AttributeType {
        attribute: attribute.to_string(),
        expected: T::tag().label(),
        found: value.kind_label(),
    })
}

// ============================================================================
// RELATIONSHIP MARKERS
// ============================================================================

///
/// Many
///
/// Type-level marker for a to-many relationship property whose elements
/// are entities of type `E`. Never instantiated.
///

pub struct Many<E> {
    _marker: PhantomData<fn() -> E>,
}

///
/// Rel
///
/// Type-level marker for a to-one relationship property referencing an
/// entity of type `E`. Never instantiated.
///

pub struct Rel<E> {
    _marker: PhantomData<fn() -> E>,
}

// ----------------------------------------------------------------------
// FieldValue impls for registered leaf types
// ----------------------------------------------------------------------

macro_rules! impl_copy_field_value {
    ($( ($ty:ty, $variant:ident) ),+ $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn tag() -> ScalarTag {
                    ScalarTag::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }
        )+
    };
}

macro_rules! impl_numeric_markers {
    ($( $ty:ty ),+ $(,)?) => {
        $(
            impl OrderedValue for $ty {}
            impl NumericValue for $ty {}
        )+
    };
}

impl_copy_field_value! {
    (bool, Bool),
    (i8, Int8),
    (i16, Int16),
    (i32, Int32),
    (i64, Int64),
    (u8, Uint8),
    (u16, Uint16),
    (u32, Uint32),
    (u64, Uint64),
    (f32, Float32),
    (f64, Float64),
    (DateTime<Utc>, Date),
    (Uuid, Uuid),
}

impl_numeric_markers!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl OrderedValue for bool {}
impl OrderedValue for DateTime<Utc> {}
impl OrderedValue for Uuid {}

impl FieldValue for String {
    fn tag() -> ScalarTag {
        ScalarTag::Text
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl OrderedValue for String {}
impl TextValue for String {}

impl FieldValue for &str {
    fn tag() -> ScalarTag {
        ScalarTag::Text
    }

    fn to_value(&self) -> Value {
        Value::Text((*self).to_string())
    }

    fn from_value(_value: &Value) -> Option<Self> {
        None
    }
}

impl TextValue for &str {}

impl FieldValue for Url {
    fn tag() -> ScalarTag {
        ScalarTag::Url
    }

    fn to_value(&self) -> Value {
        Value::Url(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Url(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl OrderedValue for Url {}
impl TextValue for Url {}

impl FieldValue for Bytes {
    fn tag() -> ScalarTag {
        ScalarTag::Blob
    }

    fn to_value(&self) -> Value {
        Value::Blob(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Blob(v) => Some(v.clone()),
            _ => None,
        }
    }
}

// ----------------------------------------------------------------------
// Composite impls: optional-of and array-of
// ----------------------------------------------------------------------

impl<T: FieldValue> FieldValue for Option<T> {
    fn tag() -> ScalarTag {
        T::tag().optional()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: FieldValue> OptionalValue for Option<T> {}
impl<T: TextValue> TextValue for Option<T> {}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn tag() -> ScalarTag {
        T::tag().list()
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::from_value).collect(),
            _ => None,
        }
    }
}
