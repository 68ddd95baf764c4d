//! Stream checks for the comparator contracts.
//!
//! External sort and merge passes trust their comparator. These helpers let
//! a pipeline verify that trust held over an actual stream.

use planetsort_types::{ItemType, ObjectId, OsmObject, TypedId};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::{Error, ObjectOrder, Result};

/// Returns true if no item sorts strictly before its predecessor.
///
/// Only adjacent pairs are compared. Under
/// [`OrderTypeIdReverseVersion`](crate::OrderTypeIdReverseVersion) this
/// is only meaningful when ids have disjoint magnitudes: `[w7 v2, w-7 v1,
/// w7 v1]` passes although the `w7` group is split.
pub fn is_sorted<O: OsmObject, R: ObjectOrder>(items: &[O], order: R) -> bool {
    items.windows(2).all(|w| !order.less(&w[1], &w[0]))
}

/// Verifies that `items` is sorted under `order`.
///
/// Fails at the first item that sorts strictly before its predecessor.
/// Has the same adjacent-pair limit as [`is_sorted`]; pair it with
/// [`check_disjoint_magnitudes`] for reverse-version streams.
pub fn check_sorted<O: OsmObject, R: ObjectOrder>(items: &[O], order: R) -> Result<()> {
    let Some(pos) = items.windows(2).position(|w| order.less(&w[1], &w[0])) else {
        return Ok(());
    };
    let index = pos + 1;
    let previous = items[pos].typed_id();
    let next = items[index].typed_id();
    warn!(index, %previous, %next, "stream out of order");
    Err(Error::OutOfOrder {
        index,
        previous,
        next,
    })
}

/// Finds distinct ids in the same kind that share a magnitude.
///
/// These are exactly the pairs that
/// [`OrderTypeIdReverseVersion`](crate::OrderTypeIdReverseVersion) cannot
/// order. Each pair is reported once, negative id first, in kind then
/// magnitude order.
pub fn magnitude_collisions<O: OsmObject>(items: &[O]) -> Vec<(TypedId, TypedId)> {
    let mut seen: BTreeMap<(ItemType, u64), (Option<ObjectId>, Option<ObjectId>)> =
        BTreeMap::new();
    for item in items {
        let id = item.id();
        let slot = seen.entry((item.kind(), item.positive_id())).or_default();
        if id.is_placeholder() {
            slot.0 = Some(id);
        } else {
            slot.1 = Some(id);
        }
    }

    let collisions: Vec<_> = seen
        .into_iter()
        .filter_map(|((kind, _), ids)| match ids {
            (Some(neg), Some(pos)) => Some((TypedId::new(kind, neg), TypedId::new(kind, pos))),
            _ => None,
        })
        .collect();

    debug!(
        items = items.len(),
        collisions = collisions.len(),
        "scanned id magnitudes"
    );
    collisions
}

/// Verifies that ids within each kind have disjoint magnitudes.
pub fn check_disjoint_magnitudes<O: OsmObject>(items: &[O]) -> Result<()> {
    match magnitude_collisions(items).into_iter().next() {
        Some((first, second)) => {
            warn!(%first, %second, "ids share a magnitude");
            Err(Error::MagnitudeCollision { first, second })
        }
        None => Ok(()),
    }
}
