//! Graph builder for the traversal graph.
//!
//! Family relationships carry a direction, but finding how two people are
//! related doesn't: a parent is one step from their child either way. The
//! builder flattens every relationship into an undirected link.

use crate::adjacency::AdjacencyIndex;
use kinpath_core::Relationship;
use tracing::{debug, warn};

/// Builds an AdjacencyIndex from relationship records.
pub struct GraphBuilder {
    adjacency: AdjacencyIndex,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            adjacency: AdjacencyIndex::new(),
        }
    }

    /// Links both ends of every relationship.
    ///
    /// Self-loops are logged and skipped. Call this as many times as needed;
    /// neighbor order follows the order relationships are added in.
    pub fn add_relationships<'r>(
        &mut self,
        relationships: impl IntoIterator<Item = &'r Relationship>,
    ) {
        for rel in relationships {
            if rel.is_self_loop() {
                warn!(
                    "Skipping self-referencing {} relationship on {}",
                    rel.kind, rel.from_id
                );
                self.adjacency.record_skip();
                continue;
            }
            self.adjacency.insert_edge(rel.from_id, rel.to_id);
        }
    }

    /// Finishes building and returns the index.
    pub fn build(self) -> AdjacencyIndex {
        debug!(
            "Built adjacency: {} people, {} links, {} skipped",
            self.adjacency.node_count(),
            self.adjacency.edge_count(),
            self.adjacency.skipped()
        );
        self.adjacency
    }

    /// One-shot build from a relationship list.
    pub fn from_relationships(relationships: &[Relationship]) -> AdjacencyIndex {
        let mut builder = Self::new();
        builder.add_relationships(relationships);
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_links_both_ways() {
        let adj = GraphBuilder::from_relationships(&[
            Relationship::parent(1, 3),
            Relationship::parent(2, 3),
            Relationship::spouse(1, 2),
        ]);

        assert_eq!(adj.neighbors(1), &[3, 2]);
        assert_eq!(adj.neighbors(3), &[1, 2]);
        assert_eq!(adj.neighbors(2), &[3, 1]);
        assert_eq!(adj.edge_count(), 3);
    }

    #[test]
    fn test_builder_skips_self_loops() {
        let adj = GraphBuilder::from_relationships(&[
            Relationship::sibling(4, 4),
            Relationship::parent(4, 5),
        ]);

        assert_eq!(adj.neighbors(4), &[5]);
        assert_eq!(adj.edge_count(), 1);
        assert_eq!(adj.skipped(), 1);
    }

    #[test]
    fn test_builder_keeps_dangling_ids() {
        // 99 is not a known person; the link is still usable for traversal.
        let adj = GraphBuilder::from_relationships(&[Relationship::parent(1, 99)]);
        assert!(adj.contains(99));
    }

    #[test]
    fn test_incremental_add() {
        let mut builder = GraphBuilder::new();
        builder.add_relationships(&[Relationship::spouse(1, 2)]);
        builder.add_relationships(&[Relationship::sibling(1, 4)]);
        let adj = builder.build();

        assert_eq!(adj.neighbors(1), &[2, 4]);
    }
}
