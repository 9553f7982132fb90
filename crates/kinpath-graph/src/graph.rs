//! Whole-family graph for statistics and export.
//!
//! FamilyGraph wraps petgraph and mirrors the dataset as it is stored,
//! directions included. Path search does not use it; it answers questions
//! about the family as a whole.

use crate::edge::GraphEdge;
use kinpath_core::{FamilyDataset, Person, PersonId, RelationshipKind};
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The family as a directed petgraph graph.
#[derive(Debug)]
pub struct FamilyGraph {
    graph: DiGraph<Person, RelationshipKind>,

    /// Maps person IDs to graph node indexes.
    id_index: HashMap<PersonId, NodeIndex>,

    self_id: Option<PersonId>,
}

impl FamilyGraph {
    /// Mirrors a dataset. IDs referenced only by relationships get
    /// placeholder people.
    pub fn from_dataset(dataset: &FamilyDataset) -> Self {
        let mut family = Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
            self_id: dataset.self_id(),
        };

        for person in dataset.people() {
            family.add_person(person.clone());
        }
        for rel in dataset.relationships() {
            let from = family.ensure_node(rel.from_id);
            let to = family.ensure_node(rel.to_id);
            family.graph.add_edge(from, to, rel.kind);
        }

        family
    }

    fn add_person(&mut self, person: Person) -> NodeIndex {
        let id = person.id;
        let index = self.graph.add_node(person);
        self.id_index.insert(id, index);
        index
    }

    fn ensure_node(&mut self, id: PersonId) -> NodeIndex {
        match self.id_index.get(&id) {
            Some(index) => *index,
            None => self.add_person(Person::new(id, Person::placeholder_name(id))),
        }
    }

    /// Gets a person by ID, placeholders included.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        let index = self.id_index.get(&id)?;
        self.graph.node_weight(*index)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of separate family groups, ignoring edge direction.
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    pub fn stats(&self) -> FamilyStats {
        FamilyStats {
            people: self.node_count(),
            relationships: self.edge_count(),
            components: self.component_count(),
            self_id: self.self_id,
        }
    }

    /// Returns all edges with source and target IDs for export.
    pub fn export_edges(&self) -> Vec<GraphEdge> {
        self.graph
            .edge_references()
            .filter_map(|edge_ref| {
                let source = self.graph.node_weight(edge_ref.source())?.id;
                let target = self.graph.node_weight(edge_ref.target())?.id;
                Some(GraphEdge {
                    source,
                    target,
                    kind: *edge_ref.weight(),
                })
            })
            .collect()
    }

    /// People in insertion order, placeholders last.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.graph.node_weights()
    }

    /// Graphviz rendering of the whole family.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::with_config(&self.graph, &[]))
    }
}

/// Graph statistics for the status command and `graph.info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStats {
    pub people: usize,
    pub relationships: usize,
    pub components: usize,
    pub self_id: Option<PersonId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinpath_core::Relationship;

    fn dataset() -> FamilyDataset {
        FamilyDataset::new(
            Some(1),
            vec![
                Person::new(1, "Chinmay Deo"),
                Person::new(2, "Sanjita Israni"),
                Person::new(3, "Kedar Deo"),
                Person::new(9, "Distant Cousin"),
            ],
            vec![
                Relationship::parent(3, 1),
                Relationship::spouse(1, 2),
                Relationship::sibling(9, 42),
            ],
        )
    }

    #[test]
    fn test_placeholders_for_dangling_ids() {
        let graph = FamilyGraph::from_dataset(&dataset());

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.person(42).unwrap().name, "Unknown(42)");
        assert_eq!(graph.person(3).unwrap().name, "Kedar Deo");
    }

    #[test]
    fn test_stats_counts_components() {
        let stats = FamilyGraph::from_dataset(&dataset()).stats();

        assert_eq!(
            stats,
            FamilyStats {
                people: 5,
                relationships: 3,
                components: 2,
                self_id: Some(1),
            }
        );
    }

    #[test]
    fn test_isolated_person_is_own_component() {
        let data = FamilyDataset::new(
            Some(1),
            vec![Person::new(1, "Alone"), Person::new(2, "Also Alone")],
            Vec::new(),
        );
        assert_eq!(FamilyGraph::from_dataset(&data).component_count(), 2);
    }

    #[test]
    fn test_export_edges_keep_direction() {
        let edges = FamilyGraph::from_dataset(&dataset()).export_edges();

        assert_eq!(edges.len(), 3);
        assert_eq!(
            edges[0],
            GraphEdge {
                source: 3,
                target: 1,
                kind: RelationshipKind::Parent,
            }
        );
    }

    #[test]
    fn test_dot_output() {
        let dot = FamilyGraph::from_dataset(&dataset()).to_dot();

        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("Kedar Deo"));
        assert!(dot.contains("parent"));
        assert!(dot.contains("->"));
    }
}
