//! Typed Object Identifiers

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Number of raw bytes in an object identifier.
pub const OBJECT_ID_BYTES: usize = 12;

/// Number of hex characters in the textual form of an object identifier.
pub const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_BYTES * 2;

/// Identifier parsing errors.
#[derive(Debug, Error, PartialEq)]
pub enum ObjectIdError {
    #[error("identifier must be 24 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("identifier contains non-hex characters")]
    InvalidHex(#[source] hex::FromHexError),
}

/// A 12-byte identifier, rendered as 24 lowercase hex characters and tagged
/// with the record type it identifies.
pub struct TypedObjectId<T>([u8; OBJECT_ID_BYTES], PhantomData<T>);

impl<T> TypedObjectId<T> {
    pub const fn from_bytes(bytes: [u8; OBJECT_ID_BYTES]) -> Self {
        Self(bytes, PhantomData)
    }

    #[must_use]
    pub const fn into_bytes(self) -> [u8; OBJECT_ID_BYTES] {
        self.0
    }

    /// Lowercase hex form, as stored by the persistence layer.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl<T> FromStr for TypedObjectId<T> {
    type Err = ObjectIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.len() != OBJECT_ID_HEX_LEN {
            return Err(ObjectIdError::InvalidLength(value.len()));
        }

        let mut bytes = [0_u8; OBJECT_ID_BYTES];

        hex::decode_to_slice(value, &mut bytes).map_err(ObjectIdError::InvalidHex)?;

        Ok(Self::from_bytes(bytes))
    }
}

impl<T> Clone for TypedObjectId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedObjectId<T> {}

impl<T> Debug for TypedObjectId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl<T> Display for TypedObjectId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_hex())
    }
}

impl<T> PartialEq for TypedObjectId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedObjectId<T> {}

impl<T> Hash for TypedObjectId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedObjectId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedObjectId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Serialize for TypedObjectId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for TypedObjectId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;

        value.parse().map_err(de::Error::custom)
    }
}
