//! Shortest relationship paths.
//!
//! Search runs over the undirected traversal graph, so a path may walk a
//! parent record from either end. What each step means is worked out later
//! by the RelationshipIndex.

use crate::adjacency::AdjacencyIndex;
use kinpath_core::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// An ordered chain of people from a source to a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyPath(Vec<PersonId>);

impl FamilyPath {
    pub fn new(ids: Vec<PersonId>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[PersonId] {
        &self.0
    }

    /// Number of people on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of relationships walked.
    pub fn edge_count(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<PersonId> {
        self.0.first().copied()
    }

    pub fn target(&self) -> Option<PersonId> {
        self.0.last().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (PersonId, PersonId)> + '_ {
        self.0.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_vec(self) -> Vec<PersonId> {
        self.0
    }
}

impl From<Vec<PersonId>> for FamilyPath {
    fn from(ids: Vec<PersonId>) -> Self {
        Self(ids)
    }
}

/// Breadth-first shortest path search.
pub struct PathFinder;

impl PathFinder {
    /// Finds a path with the fewest relationships between two people.
    ///
    /// A source equal to the target gives the one-person path without looking
    /// at `adjacency`. Otherwise returns `None` when the target can't be
    /// reached, including when either ID has no relationships at all.
    ///
    /// When several shortest paths exist, the one returned is the first the
    /// search discovers. Neighbors are explored in adjacency order, which is
    /// relationship list order, so the choice is deterministic but carries no
    /// meaning beyond that.
    pub fn shortest_path(
        source: PersonId,
        target: PersonId,
        adjacency: &AdjacencyIndex,
    ) -> Option<FamilyPath> {
        if source == target {
            return Some(FamilyPath::new(vec![source]));
        }

        let mut queue: VecDeque<PersonId> = VecDeque::new();
        let mut visited: HashSet<PersonId> = HashSet::new();
        let mut parent: HashMap<PersonId, PersonId> = HashMap::new();

        visited.insert(source);
        queue.push_back(source);

        while let Some(current) = queue.pop_front() {
            for &next in adjacency.neighbors(current) {
                // Also rejects self-loops and repeated neighbors.
                if !visited.insert(next) {
                    continue;
                }
                parent.insert(next, current);

                if next == target {
                    let path = reconstruct(&parent, source, target);
                    debug!(
                        "Found path {} -> {} with {} steps",
                        source,
                        target,
                        path.edge_count()
                    );
                    return Some(path);
                }
                queue.push_back(next);
            }
        }

        debug!("No path from {} to {}", source, target);
        None
    }
}

/// Follows parent pointers back from `target`, then flips to source-first.
fn reconstruct(
    parent: &HashMap<PersonId, PersonId>,
    source: PersonId,
    target: PersonId,
) -> FamilyPath {
    let mut ids = vec![target];
    let mut current = target;
    while current != source {
        match parent.get(&current) {
            Some(&previous) => {
                ids.push(previous);
                current = previous;
            }
            None => break,
        }
    }
    ids.reverse();
    FamilyPath::new(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use kinpath_core::Relationship;

    fn sample() -> AdjacencyIndex {
        GraphBuilder::from_relationships(&[
            Relationship::parent(1, 2),
            Relationship::spouse(2, 3),
        ])
    }

    fn ids(path: Option<FamilyPath>) -> Option<Vec<PersonId>> {
        path.map(FamilyPath::into_vec)
    }

    #[test]
    fn test_direct_and_indirect() {
        let adj = sample();

        assert_eq!(ids(PathFinder::shortest_path(1, 2, &adj)), Some(vec![1, 2]));
        assert_eq!(ids(PathFinder::shortest_path(1, 3, &adj)), Some(vec![1, 2, 3]));
        assert_eq!(ids(PathFinder::shortest_path(3, 1, &adj)), Some(vec![3, 2, 1]));
    }

    #[test]
    fn test_same_person() {
        let adj = sample();
        assert_eq!(ids(PathFinder::shortest_path(1, 1, &adj)), Some(vec![1]));

        // Doesn't need to be in the index at all.
        let empty = AdjacencyIndex::new();
        assert_eq!(ids(PathFinder::shortest_path(42, 42, &empty)), Some(vec![42]));
    }

    #[test]
    fn test_unknown_ids() {
        let adj = sample();
        assert!(PathFinder::shortest_path(1, 999, &adj).is_none());
        assert!(PathFinder::shortest_path(999, 1, &adj).is_none());
    }

    #[test]
    fn test_disconnected_components() {
        let adj = GraphBuilder::from_relationships(&[
            Relationship::spouse(1, 2),
            Relationship::spouse(3, 4),
        ]);
        assert!(PathFinder::shortest_path(1, 4, &adj).is_none());
    }

    #[test]
    fn test_prefers_shorter_over_earlier() {
        // 1 - 2 - 3 - 4 is listed first, but 1 - 4 is direct.
        let adj = GraphBuilder::from_relationships(&[
            Relationship::sibling(1, 2),
            Relationship::sibling(2, 3),
            Relationship::sibling(3, 4),
            Relationship::spouse(1, 4),
        ]);
        assert_eq!(ids(PathFinder::shortest_path(1, 4, &adj)), Some(vec![1, 4]));
    }

    #[test]
    fn test_tie_break_follows_insertion_order() {
        // Two routes of equal length from 1 to 4: via 2 or via 3.
        let via_two_first = GraphBuilder::from_relationships(&[
            Relationship::parent(1, 2),
            Relationship::parent(1, 3),
            Relationship::parent(2, 4),
            Relationship::parent(3, 4),
        ]);
        assert_eq!(
            ids(PathFinder::shortest_path(1, 4, &via_two_first)),
            Some(vec![1, 2, 4])
        );

        let via_three_first = GraphBuilder::from_relationships(&[
            Relationship::parent(1, 3),
            Relationship::parent(1, 2),
            Relationship::parent(2, 4),
            Relationship::parent(3, 4),
        ]);
        assert_eq!(
            ids(PathFinder::shortest_path(1, 4, &via_three_first)),
            Some(vec![1, 3, 4])
        );
    }

    #[test]
    fn test_cycle_no_infinite_loop() {
        // 1 → 2 → 3 → 1, target outside the cycle
        let adj = GraphBuilder::from_relationships(&[
            Relationship::sibling(1, 2),
            Relationship::sibling(2, 3),
            Relationship::sibling(3, 1),
        ]);
        assert!(PathFinder::shortest_path(1, 5, &adj).is_none());
        assert_eq!(ids(PathFinder::shortest_path(1, 3, &adj)), Some(vec![1, 3]));
    }

    #[test]
    fn test_self_loops_and_duplicates() {
        let mut adj = AdjacencyIndex::new();
        adj.insert_edge(1, 1);
        adj.insert_edge(1, 2);
        adj.insert_edge(2, 1);
        adj.insert_edge(2, 2);
        adj.insert_edge(2, 3);

        assert_eq!(ids(PathFinder::shortest_path(1, 3, &adj)), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_path_accessors() {
        let path = FamilyPath::new(vec![7, 1, 2, 5]);

        assert_eq!(path.len(), 4);
        assert_eq!(path.edge_count(), 3);
        assert_eq!(path.source(), Some(7));
        assert_eq!(path.target(), Some(5));
        assert_eq!(
            path.steps().collect::<Vec<_>>(),
            vec![(7, 1), (1, 2), (2, 5)]
        );

        let empty = FamilyPath::default();
        assert_eq!(empty.edge_count(), 0);
        assert!(empty.source().is_none());
    }
}
