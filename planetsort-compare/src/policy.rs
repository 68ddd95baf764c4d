//! Named comparison strategies over OSM entities.
//!
//! Each strategy is a zero-sized value implementing either
//! [`ObjectEquivalence`] or [`ObjectOrder`]. They are picked at the call
//! site and passed by value into sort, dedup, and set code:
//!
//! ```
//! use planetsort_compare::{ObjectOrder, OrderTypeIdReverseVersion};
//! use planetsort_types::ObjectHeader;
//!
//! let mut items = vec![ObjectHeader::way(5, 1), ObjectHeader::way(5, 3)];
//! items.sort_by(OrderTypeIdReverseVersion.sorter());
//! assert_eq!(items[0], ObjectHeader::way(5, 3));
//! ```
//!
//! All methods are generic over [`OsmObject`], which is implemented for
//! references and smart pointers by dereferencing. Comparing `&&T`,
//! `Box<T>`, `Rc<T>` or `Arc<T>` therefore runs the same logic as `T`.

use planetsort_types::OsmObject;
use std::cmp::Ordering;
use std::ops::Deref;

/// An equivalence relation over entities.
pub trait ObjectEquivalence: Copy + Default {
    /// Returns true if the two entities are equivalent.
    fn equal<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> bool;

    /// Pointer form: dereferences both operands and calls [`equal`](Self::equal).
    fn equal_deref<P>(&self, lhs: &P, rhs: &P) -> bool
    where
        P: Deref,
        P::Target: OsmObject,
    {
        self.equal(&**lhs, &**rhs)
    }

    /// A predicate for [`Vec::dedup_by`].
    fn dedup_pred<O: OsmObject>(self) -> impl FnMut(&mut O, &mut O) -> bool + Copy {
        move |a: &mut O, b: &mut O| self.equal(&*a, &*b)
    }
}

/// A strict weak ordering over entities.
pub trait ObjectOrder: Copy + Default {
    /// Returns true if `lhs` sorts strictly before `rhs`.
    fn less<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> bool;

    /// Pointer form: dereferences both operands and calls [`less`](Self::less).
    fn less_deref<P>(&self, lhs: &P, rhs: &P) -> bool
    where
        P: Deref,
        P::Target: OsmObject,
    {
        self.less(&**lhs, &**rhs)
    }

    /// Three-way comparison built from two `less` calls.
    ///
    /// Returns `Equal` when neither operand is less than the other.
    fn compare<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> Ordering {
        if self.less(lhs, rhs) {
            Ordering::Less
        } else if self.less(rhs, lhs) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// A comparison closure for [`slice::sort_by`] and friends.
    fn sorter<O: OsmObject>(self) -> impl Fn(&O, &O) -> Ordering + Copy {
        move |a: &O, b: &O| self.compare(a, b)
    }
}

/// Equal kind, id, and version.
///
/// Delegates to the entity's own `==`, so two observations of the same
/// edit compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EqualTypeIdVersion;

impl ObjectEquivalence for EqualTypeIdVersion {
    #[inline]
    fn equal<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> bool {
        lhs == rhs
    }
}

/// Equal kind and id, ignoring the version.
///
/// Groups every version of one logical entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EqualTypeId;

impl ObjectEquivalence for EqualTypeId {
    #[inline]
    fn equal<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> bool {
        lhs.kind() == rhs.kind() && lhs.id() == rhs.id()
    }
}

/// Kind, then id, then version, all ascending.
///
/// Delegates to the entity's own `<`. Oldest version of each entity first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrderTypeIdVersion;

impl ObjectOrder for OrderTypeIdVersion {
    #[inline]
    fn less<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> bool {
        lhs < rhs
    }
}

/// Kind ascending, then id by magnitude, newest version first.
///
/// Within one kind, two versions of the same id are ordered by descending
/// version. Different ids are ordered by ascending [`positive_id`], which
/// keeps every version of an entity contiguous whatever the sign of its id.
///
/// Two distinct ids with the same magnitude (`+7` and `-7`) in the same
/// kind are incomparable: neither is `less` than the other. This is only a
/// strict weak order when ids within a kind have disjoint magnitudes; see
/// [`check_disjoint_magnitudes`](crate::check_disjoint_magnitudes).
///
/// [`positive_id`]: OsmObject::positive_id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct OrderTypeIdReverseVersion;

impl ObjectOrder for OrderTypeIdReverseVersion {
    #[inline]
    fn less<O: OsmObject + ?Sized>(&self, lhs: &O, rhs: &O) -> bool {
        if lhs.kind() != rhs.kind() {
            return lhs.kind() < rhs.kind();
        }
        (lhs.id() == rhs.id() && lhs.version() > rhs.version())
            || lhs.positive_id() < rhs.positive_id()
    }
}
