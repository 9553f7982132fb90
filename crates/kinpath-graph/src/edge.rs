//! Edge semantics for the family graph.
//!
//! Relationships are stored with a direction, but a path walks them in
//! whichever direction it needs. A `Step` is a relationship read from one
//! side: the same `parent` record is `ParentOf` walking down and `ChildOf`
//! walking up.

use kinpath_core::{PersonId, Relationship, RelationshipKind};
use serde::{Deserialize, Serialize};

/// A relationship as seen when moving from one person to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Moving from a parent to their child.
    ParentOf,

    /// Moving from a child to their parent.
    ChildOf,

    /// Moving between spouses.
    SpouseOf,

    /// Moving between siblings.
    SiblingOf,

    /// No usable relationship: nothing recorded, or a kind we can't read.
    Unrelated,
}

impl Step {
    /// Reads `rel` as a move away from `from`.
    ///
    /// `rel` must connect `from` to someone; for a parent record, `from`
    /// being anything other than the stored parent means we are the child.
    pub fn from_relationship(rel: &Relationship, from: PersonId) -> Self {
        match rel.kind {
            RelationshipKind::Spouse => Self::SpouseOf,
            RelationshipKind::Sibling => Self::SiblingOf,
            RelationshipKind::Parent if rel.from_id == from => Self::ParentOf,
            RelationshipKind::Parent => Self::ChildOf,
            RelationshipKind::Unknown => Self::Unrelated,
        }
    }

    /// Human-readable label, empty when there is nothing to say.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ParentOf => "parent of",
            Self::ChildOf => "child of",
            Self::SpouseOf => "spouse of",
            Self::SiblingOf => "sibling of",
            Self::Unrelated => "",
        }
    }

    /// Change in generation level: down the tree is -1, up is +1.
    pub fn generation_delta(&self) -> i32 {
        match self {
            Self::ParentOf => -1,
            Self::ChildOf => 1,
            Self::SpouseOf | Self::SiblingOf | Self::Unrelated => 0,
        }
    }

    /// The same relationship read from the other side.
    pub fn reversed(&self) -> Self {
        match self {
            Self::ParentOf => Self::ChildOf,
            Self::ChildOf => Self::ParentOf,
            other => *other,
        }
    }

    /// Whether the move stays within one generation.
    pub fn is_lateral(&self) -> bool {
        self.generation_delta() == 0
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unrelated => "unrelated",
            other => other.label(),
        };
        write!(f, "{}", s)
    }
}

/// A simplified edge for graph export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: PersonId,
    pub target: PersonId,
    pub kind: RelationshipKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_read_from_both_sides() {
        let rel = Relationship::parent(3, 1);
        assert_eq!(Step::from_relationship(&rel, 3), Step::ParentOf);
        assert_eq!(Step::from_relationship(&rel, 1), Step::ChildOf);
    }

    #[test]
    fn test_symmetric_kinds() {
        let spouse = Relationship::spouse(1, 2);
        assert_eq!(Step::from_relationship(&spouse, 1), Step::SpouseOf);
        assert_eq!(Step::from_relationship(&spouse, 2), Step::SpouseOf);

        let sibling = Relationship::sibling(1, 4);
        assert_eq!(Step::from_relationship(&sibling, 4), Step::SiblingOf);
    }

    #[test]
    fn test_reversed_negates_delta() {
        for step in [
            Step::ParentOf,
            Step::ChildOf,
            Step::SpouseOf,
            Step::SiblingOf,
            Step::Unrelated,
        ] {
            assert_eq!(step.reversed().generation_delta(), -step.generation_delta());
        }
    }

    #[test]
    fn test_lateral_steps() {
        assert!(Step::SpouseOf.is_lateral());
        assert!(Step::SiblingOf.is_lateral());
        assert!(Step::Unrelated.is_lateral());
        assert!(!Step::ParentOf.is_lateral());
        assert!(!Step::ChildOf.is_lateral());
    }

    #[test]
    fn test_unknown_kind_has_no_label() {
        let rel = Relationship::new(1, 2, RelationshipKind::Unknown);
        let step = Step::from_relationship(&rel, 1);
        assert_eq!(step.label(), "");
        assert_eq!(step.generation_delta(), 0);
        assert_eq!(step.to_string(), "unrelated");
    }
}
