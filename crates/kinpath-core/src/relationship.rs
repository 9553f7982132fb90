//! Relationship records.
//!
//! A relationship is stored with a direction. Only `parent` cares about it:
//! `from_id` is the parent and `to_id` the child. Spouse and sibling records
//! are symmetric and their order is whatever the dataset author picked.

use crate::person::PersonId;
use serde::{Deserialize, Serialize};

/// The kind of relationship between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// `from_id` is a parent of `to_id`.
    Parent,

    /// The two people are married or partnered.
    Spouse,

    /// The two people are siblings.
    Sibling,

    /// A type string the loader did not recognise. Still connects the two
    /// people for traversal, but carries no label and no generation change.
    #[serde(other)]
    Unknown,
}

impl RelationshipKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Spouse => "spouse",
            Self::Sibling => "sibling",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed relationship between two people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub from_id: PersonId,
    pub to_id: PersonId,
    #[serde(rename = "type")]
    pub kind: RelationshipKind,
}

impl Relationship {
    pub fn new(from_id: PersonId, to_id: PersonId, kind: RelationshipKind) -> Self {
        Self {
            from_id,
            to_id,
            kind,
        }
    }

    /// `from` is a parent of `to`.
    pub fn parent(from: PersonId, to: PersonId) -> Self {
        Self::new(from, to, RelationshipKind::Parent)
    }

    pub fn spouse(a: PersonId, b: PersonId) -> Self {
        Self::new(a, b, RelationshipKind::Spouse)
    }

    pub fn sibling(a: PersonId, b: PersonId) -> Self {
        Self::new(a, b, RelationshipKind::Sibling)
    }

    /// Whether this record joins `a` and `b`, in either stored order.
    pub fn connects(&self, a: PersonId, b: PersonId) -> bool {
        (self.from_id == a && self.to_id == b) || (self.from_id == b && self.to_id == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from_id == self.to_id
    }
}
