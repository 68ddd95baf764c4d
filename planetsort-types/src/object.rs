use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::{ItemType, ObjectId, TypedId, Version};

/// Accessors that identity/version comparisons read from an entity.
///
/// The `Ord` supertrait is the entity's full ordering. Implementors must
/// make it compare by kind, then id, then version (all ascending), and make
/// `Eq` agree with it. The comparators delegate to these operators rather
/// than re-deriving them.
pub trait OsmObject: Ord {
    /// The entity's kind.
    fn kind(&self) -> ItemType;

    /// The entity's signed identity.
    fn id(&self) -> ObjectId;

    /// The entity's edit counter.
    fn version(&self) -> Version;

    /// The magnitude of the identity, for ordering only.
    fn positive_id(&self) -> u64 {
        self.id().positive()
    }

    /// The (kind, id) pair.
    fn typed_id(&self) -> TypedId {
        TypedId::new(self.kind(), self.id())
    }
}

// Indirect forms dereference and delegate.

impl<T: OsmObject + ?Sized> OsmObject for &T {
    fn kind(&self) -> ItemType {
        (**self).kind()
    }

    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn version(&self) -> Version {
        (**self).version()
    }

    fn positive_id(&self) -> u64 {
        (**self).positive_id()
    }
}

impl<T: OsmObject + ?Sized> OsmObject for Box<T> {
    fn kind(&self) -> ItemType {
        (**self).kind()
    }

    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn version(&self) -> Version {
        (**self).version()
    }

    fn positive_id(&self) -> u64 {
        (**self).positive_id()
    }
}

impl<T: OsmObject + ?Sized> OsmObject for Rc<T> {
    fn kind(&self) -> ItemType {
        (**self).kind()
    }

    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn version(&self) -> Version {
        (**self).version()
    }

    fn positive_id(&self) -> u64 {
        (**self).positive_id()
    }
}

impl<T: OsmObject + ?Sized> OsmObject for Arc<T> {
    fn kind(&self) -> ItemType {
        (**self).kind()
    }

    fn id(&self) -> ObjectId {
        (**self).id()
    }

    fn version(&self) -> Version {
        (**self).version()
    }

    fn positive_id(&self) -> u64 {
        (**self).positive_id()
    }
}

/// The identity part of an entity: kind, id, and version.
///
/// Field order matters: the derived `Ord` is the full ordering
/// (kind, then id, then version).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHeader {
    kind: ItemType,
    id: ObjectId,
    version: Version,
}

impl ObjectHeader {
    /// Creates a header from its components.
    #[must_use]
    pub const fn new(kind: ItemType, id: ObjectId, version: Version) -> Self {
        Self { kind, id, version }
    }

    /// Creates a node header.
    #[must_use]
    pub const fn node(id: i64, version: u32) -> Self {
        Self::new(ItemType::Node, ObjectId::new(id), Version::new(version))
    }

    /// Creates a way header.
    #[must_use]
    pub const fn way(id: i64, version: u32) -> Self {
        Self::new(ItemType::Way, ObjectId::new(id), Version::new(version))
    }

    /// Creates a relation header.
    #[must_use]
    pub const fn relation(id: i64, version: u32) -> Self {
        Self::new(ItemType::Relation, ObjectId::new(id), Version::new(version))
    }
}

impl OsmObject for ObjectHeader {
    fn kind(&self) -> ItemType {
        self.kind
    }

    fn id(&self) -> ObjectId {
        self.id
    }

    fn version(&self) -> Version {
        self.version
    }
}

impl fmt::Display for ObjectHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} v{}", self.kind.as_char(), self.id, self.version)
    }
}
