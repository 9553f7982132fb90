//! Relationship lookup by unordered pair.

use crate::edge::Step;
use kinpath_core::{PersonId, Relationship};
use std::collections::HashMap;

/// Answers "which relationship joins A and B, and what does it mean from A".
///
/// When several records join the same pair, the first one in dataset order
/// wins. Labels and generation deltas both come from `step`, so they always
/// describe the same record.
#[derive(Debug, Clone)]
pub struct RelationshipIndex<'a> {
    relationships: &'a [Relationship],

    /// Maps an unordered pair to the first record joining it.
    by_pair: HashMap<(PersonId, PersonId), usize>,
}

fn pair_key(a: PersonId, b: PersonId) -> (PersonId, PersonId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl<'a> RelationshipIndex<'a> {
    /// Indexes a relationship list.
    pub fn new(relationships: &'a [Relationship]) -> Self {
        let mut by_pair = HashMap::with_capacity(relationships.len());
        for (position, rel) in relationships.iter().enumerate() {
            by_pair
                .entry(pair_key(rel.from_id, rel.to_id))
                .or_insert(position);
        }
        Self {
            relationships,
            by_pair,
        }
    }

    /// Returns the first relationship joining `a` and `b`, in either order.
    pub fn find_edge(&self, a: PersonId, b: PersonId) -> Option<&'a Relationship> {
        let position = self.by_pair.get(&pair_key(a, b))?;
        self.relationships.get(*position)
    }

    /// Reads the relationship between `a` and `b` as a move from `a`.
    ///
    /// A person is never related to themselves, even if the data says so.
    pub fn step(&self, a: PersonId, b: PersonId) -> Step {
        if a == b {
            return Step::Unrelated;
        }
        self.find_edge(a, b)
            .map(|rel| Step::from_relationship(rel, a))
            .unwrap_or(Step::Unrelated)
    }

    /// `"parent of"`, `"child of"`, `"spouse of"`, `"sibling of"`, or empty.
    pub fn label_for(&self, a: PersonId, b: PersonId) -> &'static str {
        self.step(a, b).label()
    }

    /// -1 moving from parent to child, +1 from child to parent, else 0.
    pub fn generation_delta(&self, a: PersonId, b: PersonId) -> i32 {
        self.step(a, b).generation_delta()
    }

    pub fn relationships(&self) -> &'a [Relationship] {
        self.relationships
    }

    /// Number of distinct pairs with at least one record.
    pub fn pair_count(&self) -> usize {
        self.by_pair.len()
    }
}
