//! Comparison strategies for versioned OSM entities.
//!
//! This crate provides the comparators that sort, merge, and dedup passes
//! over planet-scale entity streams are built on:
//!
//! - [`EqualTypeIdVersion`] — same kind, id, and version (same edit)
//! - [`EqualTypeId`] — same kind and id (any version of one entity)
//! - [`OrderTypeIdVersion`] — kind, id, version ascending (oldest first)
//! - [`OrderTypeIdReverseVersion`] — kind, id magnitude ascending, newest
//!   version first
//!
//! The strategies are zero-sized and pure. The two equivalences satisfy
//! reflexivity, symmetry, and transitivity; the two orderings are strict
//! weak orders, with the one documented exception on
//! [`OrderTypeIdReverseVersion`] for ids that share a magnitude.
//!
//! [`Policy`] and [`StageConfig`] name the strategies for configuration,
//! and the [`check`] helpers verify a stream against them.

pub mod check;
mod config;
mod policy;

pub use check::{check_disjoint_magnitudes, check_sorted, is_sorted, magnitude_collisions};
pub use config::{Policy, StageConfig};
pub use policy::{
    EqualTypeId, EqualTypeIdVersion, ObjectEquivalence, ObjectOrder, OrderTypeIdReverseVersion,
    OrderTypeIdVersion,
};

use planetsort_types::TypedId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from policy selection and stream checks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),

    #[error("{0} is an equivalence, not an ordering")]
    NotAnOrder(Policy),

    #[error("{0} is an ordering, not an equivalence")]
    NotAnEquivalence(Policy),

    #[error("item {index} ({next}) sorts before its predecessor ({previous})")]
    OutOfOrder {
        index: usize,
        previous: TypedId,
        next: TypedId,
    },

    #[error("{first} and {second} share an id magnitude")]
    MagnitudeCollision { first: TypedId, second: TypedId },

    #[error("invalid stage configuration: {0}")]
    Config(#[from] toml::de::Error),
}
