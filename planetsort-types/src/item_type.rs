use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The kind of an OSM entity.
///
/// Kinds are totally ordered by declaration order, so every node sorts
/// before every way, and every way before every relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Node,
    Way,
    Relation,
}

impl ItemType {
    /// All kinds in their sort order.
    pub const ALL: [ItemType; 3] = [ItemType::Node, ItemType::Way, ItemType::Relation];

    /// Returns the single-letter code (`n`, `w`, `r`).
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ItemType::Node => 'n',
            ItemType::Way => 'w',
            ItemType::Relation => 'r',
        }
    }

    /// Parses a single-letter code.
    pub fn from_char(c: char) -> Result<Self, Error> {
        match c {
            'n' => Ok(ItemType::Node),
            'w' => Ok(ItemType::Way),
            'r' => Ok(ItemType::Relation),
            other => Err(Error::UnknownItemType(other)),
        }
    }

    /// Returns the lowercase name (`node`, `way`, `relation`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ItemType::Node => "node",
            ItemType::Way => "way",
            ItemType::Relation => "relation",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItemType {
    type Err = Error;

    /// Accepts either the full name or the single-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(ItemType::Node),
            "way" => Ok(ItemType::Way),
            "relation" => Ok(ItemType::Relation),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::from_char(c),
                    (None, _) => Err(Error::Empty),
                    (Some(_), Some(_)) => Err(Error::UnknownItemName(s.to_string())),
                }
            }
        }
    }
}
