use crate::prelude::*;
use derive_more::{Deref, Display};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// ValueError
///

#[derive(Debug, PartialEq, ThisError)]
pub enum ValueError {
    #[error("invalid object id: {0}")]
    ObjectId(#[from] hex::FromHexError),

    #[error("invalid uuid: {0}")]
    Uuid(#[from] uuid::Error),
}

///
/// Timestamp
/// seconds and nanoseconds since the unix epoch
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("{seconds}.{nanos:09}")]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: u32,
}

impl Timestamp {
    pub const EPOCH: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    #[must_use]
    pub const fn new(seconds: i64, nanos: u32) -> Self {
        Self { seconds, nanos }
    }
}

///
/// Decimal128
/// IEEE 754-2008 decimal128 bits, stored as (low, high)
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub struct Decimal128 {
    pub low: u64,
    pub high: u64,
}

impl Decimal128 {
    #[must_use]
    pub const fn from_bits(low: u64, high: u64) -> Self {
        Self { low, high }
    }
}

///
/// ObjectId
///

#[derive(Clone, Copy, Debug, Default, Deref, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 12];
        hex::decode_to_slice(s, &mut bytes)?;

        Ok(Self(bytes))
    }
}

///
/// Uuid
///

#[derive(Clone, Copy, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Uuid(uuid::Uuid);

impl Uuid {
    pub const NIL: Self = Self(uuid::Uuid::nil());

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Uuid::from_bytes(bytes))
    }
}

impl Default for Uuid {
    fn default() -> Self {
        Self::NIL
    }
}

impl From<uuid::Uuid> for Uuid {
    fn from(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for Uuid {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(uuid::Uuid::try_parse(s)?))
    }
}

///
/// Mixed
/// the polymorphic value held by `Any` properties
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[remain::sorted]
pub enum Mixed {
    Binary(Vec<u8>),
    Bool(bool),
    Decimal128(Decimal128),
    Double(f64),
    Float(f32),
    Int(i64),
    #[default]
    Null,
    ObjectId(ObjectId),
    String(String),
    Timestamp(Timestamp),
    Uuid(Uuid),
}

impl Mixed {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The property type this value would be stored as, `None` for null.
    #[must_use]
    pub const fn property_type(&self) -> Option<PropertyType> {
        let ty = match self {
            Self::Null => return None,
            Self::Binary(_) => PropertyType::Binary,
            Self::Bool(_) => PropertyType::Bool,
            Self::Decimal128(_) => PropertyType::Decimal128,
            Self::Double(_) => PropertyType::Double,
            Self::Float(_) => PropertyType::Float,
            Self::Int(_) => PropertyType::Int,
            Self::ObjectId(_) => PropertyType::ObjectId,
            Self::String(_) => PropertyType::String,
            Self::Timestamp(_) => PropertyType::Timestamp,
            Self::Uuid(_) => PropertyType::Uuid,
        };

        Some(ty)
    }
}

///
/// TESTS
///
