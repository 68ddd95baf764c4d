//! Policy selection for pipeline stages.
//!
//! A stage names its ordering (and optional duplicate collapse) in TOML:
//!
//! ```toml
//! order = "order-type-id-reverse-version"
//! dedup = "equal-type-id"
//! verify = true
//! ```

use planetsort_types::OsmObject;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::check::{check_disjoint_magnitudes, check_sorted};
use crate::{
    EqualTypeId, EqualTypeIdVersion, Error, ObjectEquivalence, ObjectOrder, OrderTypeIdReverseVersion,
    OrderTypeIdVersion, Result,
};

/// Names of the comparison strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// [`EqualTypeIdVersion`]
    EqualTypeIdVersion,
    /// [`EqualTypeId`]
    EqualTypeId,
    /// [`OrderTypeIdVersion`]
    OrderTypeIdVersion,
    /// [`OrderTypeIdReverseVersion`]
    OrderTypeIdReverseVersion,
}

impl Policy {
    /// Every policy, equivalences first.
    pub const ALL: [Policy; 4] = [
        Policy::EqualTypeIdVersion,
        Policy::EqualTypeId,
        Policy::OrderTypeIdVersion,
        Policy::OrderTypeIdReverseVersion,
    ];

    /// Returns the kebab-case name used in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Policy::EqualTypeIdVersion => "equal-type-id-version",
            Policy::EqualTypeId => "equal-type-id",
            Policy::OrderTypeIdVersion => "order-type-id-version",
            Policy::OrderTypeIdReverseVersion => "order-type-id-reverse-version",
        }
    }

    /// Returns true for the two orderings.
    #[must_use]
    pub const fn is_order(self) -> bool {
        matches!(
            self,
            Policy::OrderTypeIdVersion | Policy::OrderTypeIdReverseVersion
        )
    }

    /// Returns true for the two equivalences.
    #[must_use]
    pub const fn is_equivalence(self) -> bool {
        !self.is_order()
    }

    /// Sorts `items` with the named ordering.
    ///
    /// Reverse-version ordering is not total over ids that share a
    /// magnitude, and the standard sort may panic on such input. Those
    /// streams are rejected with [`Error::MagnitudeCollision`] and left
    /// untouched.
    pub fn sort<O: OsmObject>(self, items: &mut [O]) -> Result<()> {
        match self {
            Policy::OrderTypeIdVersion => items.sort_by(OrderTypeIdVersion.sorter()),
            Policy::OrderTypeIdReverseVersion => {
                check_disjoint_magnitudes(items)?;
                items.sort_by(OrderTypeIdReverseVersion.sorter());
            }
            other => return Err(Error::NotAnOrder(other)),
        }
        Ok(())
    }

    /// Verifies `items` is sorted under the named ordering.
    ///
    /// For reverse-version ordering a stream with ids sharing a magnitude
    /// fails with [`Error::MagnitudeCollision`], since adjacent checks
    /// cannot see a group split by an incomparable id.
    pub fn check_sorted<O: OsmObject>(self, items: &[O]) -> Result<()> {
        match self {
            Policy::OrderTypeIdVersion => check_sorted(items, OrderTypeIdVersion),
            Policy::OrderTypeIdReverseVersion => {
                check_disjoint_magnitudes(items)?;
                check_sorted(items, OrderTypeIdReverseVersion)
            }
            other => Err(Error::NotAnOrder(other)),
        }
    }

    /// Collapses adjacent runs equivalent under the named equivalence,
    /// keeping the first item of each run. Returns the number removed.
    pub fn dedup<O: OsmObject>(self, items: &mut Vec<O>) -> Result<usize> {
        let before = items.len();
        match self {
            Policy::EqualTypeIdVersion => items.dedup_by(EqualTypeIdVersion.dedup_pred()),
            Policy::EqualTypeId => items.dedup_by(EqualTypeId.dedup_pred()),
            other => return Err(Error::NotAnEquivalence(other)),
        }
        Ok(before - items.len())
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Policy::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnknownPolicy(s.to_string()))
    }
}

/// Configuration of one sort stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageConfig {
    /// Ordering to sort by.
    #[serde(default = "default_order")]
    pub order: Policy,
    /// Equivalence used to collapse adjacent runs after sorting.
    #[serde(default)]
    pub dedup: Option<Policy>,
    /// Re-check the sorted output.
    #[serde(default = "default_verify")]
    pub verify: bool,
}

fn default_order() -> Policy {
    Policy::OrderTypeIdVersion
}

fn default_verify() -> bool {
    true
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            order: default_order(),
            dedup: None,
            verify: default_verify(),
        }
    }
}

impl StageConfig {
    /// Parses and validates a stage configuration from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: StageConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that `order` names an ordering and `dedup` an equivalence.
    pub fn validate(&self) -> Result<()> {
        if !self.order.is_order() {
            return Err(Error::NotAnOrder(self.order));
        }
        match self.dedup {
            Some(p) if !p.is_equivalence() => Err(Error::NotAnEquivalence(p)),
            _ => Ok(()),
        }
    }

    /// Sorts, optionally verifies, and optionally collapses `items`.
    ///
    /// Reverse-version stages reject inputs whose ids share a magnitude
    /// whether or not `verify` is set. With `verify` set, the sorted output
    /// is re-checked. Returns the number of items removed by `dedup`.
    pub fn apply<O: OsmObject>(&self, items: &mut Vec<O>) -> Result<usize> {
        self.validate()?;
        self.order.sort(items)?;
        if self.verify {
            self.order.check_sorted(items)?;
        }

        let removed = match self.dedup {
            Some(policy) => policy.dedup(items)?,
            None => 0,
        };
        debug!(
            order = %self.order,
            dedup = ?self.dedup.map(Policy::name),
            items = items.len(),
            removed,
            "applied sort stage"
        );
        Ok(removed)
    }
}
