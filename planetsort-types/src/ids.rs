//! Identity types for OSM entities.
//!
//! Identities are signed: editors hand out negative ids to entities that
//! have not been uploaded yet. `+x` and `-x` are different identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, ItemType};

/// Signed numeric identity of an entity within its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(i64);

impl ObjectId {
    /// Creates an object ID from a raw signed value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw signed value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the absolute magnitude of the id.
    ///
    /// Used for ordering only. Two different ids can share a magnitude,
    /// so this is never an identity comparison. `i64::MIN` maps to `2^63`.
    #[must_use]
    pub const fn positive(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Returns true for negative (not yet uploaded) ids.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        self.0 < 0
    }
}

impl From<i64> for ObjectId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|e| Error::InvalidId(format!("{s:?}: {e}")))
    }
}

/// Edit counter of an entity.
///
/// Zero means "not assigned yet". Once assigned, versions are strictly
/// positive and increase with every edit of the same (kind, id) pair.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(u32);

impl Version {
    /// The version of an entity that has not been assigned one.
    pub const UNASSIGNED: Version = Version(0);

    /// Creates a version from a raw counter.
    #[must_use]
    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    /// Returns the raw counter.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns true once a version has been assigned.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl From<u32> for Version {
    fn from(version: u32) -> Self {
        Self(version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A kind together with an identity.
///
/// Displays and parses in the compact form `n12`, `w-5`, `r7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypedId {
    pub kind: ItemType,
    pub id: ObjectId,
}

impl TypedId {
    /// Creates a typed id from a kind and an identity.
    #[must_use]
    pub const fn new(kind: ItemType, id: ObjectId) -> Self {
        Self { kind, id }
    }

    /// Parses either the compact form (`w-5`) or a bare number, in which
    /// case `default_kind` is used.
    pub fn parse_with_default(s: &str, default_kind: ItemType) -> Result<Self, Error> {
        let first = s.chars().next().ok_or(Error::Empty)?;
        if first.is_ascii_digit() || first == '-' {
            return Ok(Self::new(default_kind, s.parse()?));
        }
        s.parse()
    }
}

impl fmt::Display for TypedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.as_char(), self.id)
    }
}

impl FromStr for TypedId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let code = chars.next().ok_or(Error::Empty)?;
        let kind = ItemType::from_char(code)?;
        Ok(Self::new(kind, chars.as_str().parse()?))
    }
}
