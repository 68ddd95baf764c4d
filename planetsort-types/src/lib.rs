//! Core type definitions for PlanetSort.
//!
//! This crate defines the identity-bearing value types that the comparison
//! layer reads:
//! - [`ItemType`] — the kind discriminant (node, way, relation)
//! - [`ObjectId`] and [`Version`] — signed identity and edit counter
//! - [`TypedId`] — a (kind, identity) pair with compact `w-5` notation
//! - [`OsmObject`] — the accessor trait every comparable entity implements
//! - [`ObjectHeader`] — the minimal concrete entity (kind, id, version)
//!
//! Tags, geometry, and the rest of an entity's attributes are not modelled
//! here; only what identity/version ordering needs.

mod ids;
mod item_type;
mod object;

pub use ids::{ObjectId, TypedId, Version};
pub use item_type::ItemType;
pub use object::{ObjectHeader, OsmObject};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing identity types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown item type code: {0:?}")]
    UnknownItemType(char),

    #[error("unknown item type: {0}")]
    UnknownItemName(String),

    #[error("invalid object id: {0}")]
    InvalidId(String),

    #[error("empty identifier")]
    Empty,
}
