//! Relationship sentences.

use crate::frame::{FrameNode, FrameStatus, RenderFrame};
use crate::index::RelationshipIndex;
use crate::layout::PathGeometry;
use crate::path::FamilyPath;
use kinpath_core::{FamilyDataset, Person, PersonId};
use std::borrow::Cow;

/// How the self person is shown.
pub const SELF_LABEL: &str = "You";

/// Shown when there is no path to describe.
pub const NO_PATH_MESSAGE: &str = "No path found.";

/// Shown before anyone has been selected.
pub const PROMPT_MESSAGE: &str = "Choose a family member to see your connection";

/// Stands in for a step whose relationship has no label.
const UNKNOWN_LABEL: &str = "?";

/// Turns paths into text like `You -(child of)-> Kedar Deo`.
pub struct PresentationFormatter<'a> {
    dataset: &'a FamilyDataset,
    index: &'a RelationshipIndex<'a>,
}

impl<'a> PresentationFormatter<'a> {
    pub fn new(dataset: &'a FamilyDataset, index: &'a RelationshipIndex<'a>) -> Self {
        Self { dataset, index }
    }

    /// The person's name, or `Unknown(<id>)`.
    pub fn name(&self, id: PersonId) -> Cow<'a, str> {
        match self.dataset.person(id) {
            Some(person) => Cow::Borrowed(person.name.as_str()),
            None => Cow::Owned(Person::placeholder_name(id)),
        }
    }

    /// Like [`name`](Self::name), but the self person is `You`.
    pub fn display_name(&self, id: PersonId) -> Cow<'a, str> {
        if self.dataset.self_id() == Some(id) {
            Cow::Borrowed(SELF_LABEL)
        } else {
            self.name(id)
        }
    }

    /// Describes a path as a chain of labelled steps.
    ///
    /// The first person is always written as `You`.
    pub fn describe(&self, path: &FamilyPath) -> String {
        match path.len() {
            0 => return NO_PATH_MESSAGE.to_string(),
            1 => return SELF_LABEL.to_string(),
            _ => {}
        }

        let mut sentence = String::from(SELF_LABEL);
        for (a, b) in path.steps() {
            let label = match self.index.label_for(a, b) {
                "" => UNKNOWN_LABEL,
                label => label,
            };
            sentence.push_str(&format!(" -({})-> {}", label, self.name(b)));
        }
        sentence
    }

    /// Pairs a path's sentence with its geometry. Empty geometry gives a
    /// clear frame.
    pub fn frame(&self, path: &FamilyPath, geometry: PathGeometry) -> RenderFrame {
        let description = self.describe(path);
        if geometry.is_empty() {
            return RenderFrame::clear(FrameStatus::NoPath, description, geometry.width);
        }

        let self_id = self.dataset.self_id();
        let nodes = geometry
            .nodes
            .iter()
            .map(|node| FrameNode {
                id: node.id,
                display_text: self.display_name(node.id).into_owned(),
                x: node.x,
                y: node.y,
                is_self: self_id == Some(node.id),
            })
            .collect();

        RenderFrame {
            status: FrameStatus::Path,
            description,
            nodes,
            edges: geometry.edges,
            width: geometry.width,
            height: geometry.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutConfig, PathLayoutEngine};
    use kinpath_core::{Relationship, RelationshipKind};

    fn dataset() -> FamilyDataset {
        FamilyDataset::new(
            Some(1),
            vec![
                Person::new(1, "Chinmay Deo"),
                Person::new(2, "Sanjita Israni"),
                Person::new(3, "Kedar Deo"),
                Person::new(4, "Nishigandha Deo"),
            ],
            vec![
                Relationship::parent(3, 1),
                Relationship::parent(4, 1),
                Relationship::spouse(1, 2),
                Relationship::spouse(3, 4),
                Relationship::new(2, 8, RelationshipKind::Unknown),
            ],
        )
    }

    #[test]
    fn test_empty_and_single() {
        let data = dataset();
        let index = RelationshipIndex::new(data.relationships());
        let formatter = PresentationFormatter::new(&data, &index);

        assert_eq!(formatter.describe(&FamilyPath::default()), "No path found.");
        assert_eq!(formatter.describe(&FamilyPath::new(vec![1])), "You");
    }

    #[test]
    fn test_multi_step_sentence() {
        let data = dataset();
        let index = RelationshipIndex::new(data.relationships());
        let formatter = PresentationFormatter::new(&data, &index);

        assert_eq!(
            formatter.describe(&FamilyPath::new(vec![1, 3, 4])),
            "You -(child of)-> Kedar Deo -(spouse of)-> Nishigandha Deo"
        );
    }

    #[test]
    fn test_unknown_person_and_label() {
        let data = dataset();
        let index = RelationshipIndex::new(data.relationships());
        let formatter = PresentationFormatter::new(&data, &index);

        assert_eq!(
            formatter.describe(&FamilyPath::new(vec![1, 2, 8])),
            "You -(spouse of)-> Sanjita Israni -(?)-> Unknown(8)"
        );
    }

    #[test]
    fn test_display_name() {
        let data = dataset();
        let index = RelationshipIndex::new(data.relationships());
        let formatter = PresentationFormatter::new(&data, &index);

        assert_eq!(formatter.display_name(1), "You");
        assert_eq!(formatter.display_name(3), "Kedar Deo");
        assert_eq!(formatter.display_name(77), "Unknown(77)");
        assert_eq!(formatter.name(1), "Chinmay Deo");
    }

    #[test]
    fn test_frame_marks_self() {
        let data = dataset();
        let index = RelationshipIndex::new(data.relationships());
        let formatter = PresentationFormatter::new(&data, &index);
        let path = FamilyPath::new(vec![1, 3]);
        let geometry =
            PathLayoutEngine::new(&index).layout(&path, 900.0, &LayoutConfig::default());

        let frame = formatter.frame(&path, geometry);
        assert_eq!(frame.status, FrameStatus::Path);
        assert_eq!(frame.description, "You -(child of)-> Kedar Deo");
        assert_eq!(frame.nodes[0].display_text, "You");
        assert!(frame.nodes[0].is_self);
        assert_eq!(frame.nodes[1].display_text, "Kedar Deo");
        assert!(!frame.nodes[1].is_self);
        assert_eq!(frame.edges[0].label, "child of");
    }
}
