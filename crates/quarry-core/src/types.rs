use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

///
/// Url
///
/// Text-backed URL-like identifier.
///
/// Stored and compared as its textual form; no parsing or normalization
/// happens here. Validation belongs to the application boundary.
///

#[derive(
    Clone, Debug, Deref, Display, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct Url(String);

impl Url {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self(url)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Url {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

///
/// Bytes
///
/// Binary blob value.
///
/// Newtype over `Vec<u8>` so blob-typed properties stay distinct from
/// lists of unsigned integers in the scalar registry.
///

#[derive(Clone, Debug, Default, Deref, Eq, From, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Bytes(#[serde(with = "serde_bytes")] Vec<u8>);

impl Bytes {
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
