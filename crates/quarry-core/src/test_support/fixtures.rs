//! Test-only entity fixtures: declared schemas, decode impls, and row
//! constructors for the in-memory store.

use crate::{
    error::DecodeError,
    session::AttributeMap,
    traits::{require_attribute, EntityValue, EnumValue, FieldValue, Many, Rel},
    value::Value,
};
use uuid::Uuid;

///
/// Message
///
/// Flat fixture with text and numeric attributes.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Message {
    pub id: Uuid,
    pub text: String,
    pub views: i64,
}

crate::entity!(Message {
    name = "Message",
    id = "id",
    properties {
        id: Uuid => "id",
        text: String => "text",
        views: i64 => "views",
        tags: Vec<String> => "tags",
        subtitle: Option<String> => "subtitle",
    }
});

impl EntityValue for Message {
    fn id_value(&self) -> Value {
        Value::Uuid(self.id)
    }

    fn from_attributes(attrs: &AttributeMap) -> Result<Self, DecodeError> {
        Ok(Self {
            id: require_attribute(attrs, "id")?,
            text: require_attribute(attrs, "text")?,
            views: require_attribute(attrs, "views")?,
        })
    }
}

impl Message {
    pub(crate) fn row(id: Uuid, text: &str, views: i64) -> AttributeMap {
        AttributeMap::from([
            ("id".to_string(), Value::Uuid(id)),
            ("text".to_string(), Value::Text(text.to_string())),
            ("views".to_string(), Value::Int64(views)),
            ("tags".to_string(), Value::List(Vec::new())),
            ("subtitle".to_string(), Value::Null),
        ])
    }
}

///
/// Customer
///
/// Fixture carrying a numeric scalar collection.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Customer {
    pub id: Uuid,
    pub purchases: Vec<i64>,
}

crate::entity!(Customer {
    name = "Customer",
    id = "id",
    properties {
        id: Uuid => "id",
        purchases: Vec<i64> => "purchases",
    }
});

impl EntityValue for Customer {
    fn id_value(&self) -> Value {
        Value::Uuid(self.id)
    }

    fn from_attributes(attrs: &AttributeMap) -> Result<Self, DecodeError> {
        Ok(Self {
            id: require_attribute(attrs, "id")?,
            purchases: require_attribute(attrs, "purchases")?,
        })
    }
}

impl Customer {
    pub(crate) fn row(id: Uuid, purchases: &[i64]) -> AttributeMap {
        AttributeMap::from([
            ("id".to_string(), Value::Uuid(id)),
            (
                "purchases".to_string(),
                Value::List(purchases.iter().map(|p| Value::Int64(*p)).collect()),
            ),
        ])
    }
}

///
/// Profile / Account
///
/// Relationship fixtures for qualifier, identity, and sub-query shapes.
///

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Profile {
    pub id: Uuid,
    pub name: String,
}

crate::entity!(Profile {
    name = "Profile",
    id = "id",
    properties {
        id: Uuid => "id",
        name: String => "name",
        friends: Many<Profile> => "friends",
    }
});

impl EntityValue for Profile {
    fn id_value(&self) -> Value {
        Value::Uuid(self.id)
    }

    fn from_attributes(attrs: &AttributeMap) -> Result<Self, DecodeError> {
        Ok(Self {
            id: require_attribute(attrs, "id")?,
            name: require_attribute(attrs, "name")?,
        })
    }
}

pub(crate) struct Account;

crate::entity!(Account {
    name = "Account",
    id = "id",
    properties {
        id: Uuid => "id",
        name: String => "name",
        age: i32 => "age",
        tags: Vec<String> => "tags",
        nickname: Option<String> => "nickname",
        avatar: Option<crate::types::Url> => "avatar",
        aliases: Option<Vec<String>> => "aliases",
        status: Status => "status",
        profiles: Many<Profile> => "profiles",
        owner: Rel<Profile> => "owner",
    }
});

///
/// Status
///
/// Raw-representable enum fixture backed by Int32.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Status {
    Active,
    Archived,
}

impl EnumValue for Status {
    type Raw = i32;

    fn to_raw(&self) -> i32 {
        match self {
            Self::Active => 1,
            Self::Archived => 2,
        }
    }

    fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            1 => Some(Self::Active),
            2 => Some(Self::Archived),
            _ => None,
        }
    }
}

crate::raw_enum_value!(Status);

/// Deterministic fixture id from a small seed.
pub(crate) fn fixture_id(seed: u8) -> Uuid {
    Uuid::from_bytes([seed; 16])
}

/// Convenience check that a value round-trips through `FieldValue`.
pub(crate) fn roundtrips<T>(value: &T) -> bool
where
    T: FieldValue + PartialEq,
{
    T::from_value(&value.to_value()).as_ref() == Some(value)
}
