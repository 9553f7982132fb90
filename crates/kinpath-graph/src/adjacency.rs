//! Undirected adjacency for path search.

use kinpath_core::PersonId;
use std::collections::{HashMap, HashSet};

/// Neighbor lists for every person that appears in a relationship.
///
/// The lists keep first-insertion order, and that order decides which of
/// several equally short paths the search returns. Parallel relationships
/// are kept as repeated neighbors.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    neighbors: HashMap<PersonId, Vec<PersonId>>,

    /// Relationships inserted (each one adds two neighbor entries).
    edge_count: usize,

    /// Relationships the builder refused.
    skipped: usize,
}

impl AdjacencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links `a` and `b` in both directions.
    pub(crate) fn insert_edge(&mut self, a: PersonId, b: PersonId) {
        self.neighbors.entry(a).or_default().push(b);
        self.neighbors.entry(b).or_default().push(a);
        self.edge_count += 1;
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Neighbors of `id` in insertion order, empty for unknown IDs.
    pub fn neighbors(&self, id: PersonId) -> &[PersonId] {
        self.neighbors.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.neighbors.contains_key(&id)
    }

    /// Number of distinct neighbors. Parallel relationships count once.
    pub fn degree(&self, id: PersonId) -> usize {
        self.neighbors(id).iter().collect::<HashSet<_>>().len()
    }

    /// Every person with at least one neighbor.
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.neighbors.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
