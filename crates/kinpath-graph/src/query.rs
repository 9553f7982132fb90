//! Query entry point.
//!
//! A `QueryContext` is the one place that checks whether a query can run at
//! all. Everything past `QueryContext::new` can assume there is a self ID
//! and at least one person, and only has to cope with lookups that miss.

use crate::adjacency::AdjacencyIndex;
use crate::builder::GraphBuilder;
use crate::describe::{PresentationFormatter, NO_PATH_MESSAGE};
use crate::frame::{FrameStatus, RenderFrame};
use crate::index::RelationshipIndex;
use crate::layout::{
    effective_width, LayoutConfig, LayoutEntry, PathGeometry, PathLayoutEngine,
};
use crate::path::{FamilyPath, PathFinder};
use kinpath_core::{FamilyDataset, PersonId};
use thiserror::Error;
use tracing::debug;

/// Missing context: the query is abandoned before any search.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("No family data is loaded")]
    EmptyDataset,

    #[error("The family data does not say who you are (set `self_id`)")]
    MissingSelf,
}

/// Result of a selection. Not finding a path is a normal answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    Found(FamilyPath),
    NoPath,
}

impl QueryOutcome {
    pub fn path(&self) -> Option<&FamilyPath> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath => None,
        }
    }
}

/// Read-only view of one dataset, with the indexes queries need.
pub struct QueryContext<'a> {
    dataset: &'a FamilyDataset,
    self_id: PersonId,
    index: RelationshipIndex<'a>,
    adjacency: AdjacencyIndex,
}

impl<'a> QueryContext<'a> {
    /// Validates the dataset and builds the indexes.
    pub fn new(dataset: &'a FamilyDataset) -> Result<Self, QueryError> {
        if dataset.is_empty() {
            return Err(QueryError::EmptyDataset);
        }
        let self_id = dataset.self_id().ok_or(QueryError::MissingSelf)?;

        Ok(Self {
            dataset,
            self_id,
            index: RelationshipIndex::new(dataset.relationships()),
            adjacency: GraphBuilder::from_relationships(dataset.relationships()),
        })
    }

    pub fn self_id(&self) -> PersonId {
        self.self_id
    }

    pub fn dataset(&self) -> &'a FamilyDataset {
        self.dataset
    }

    pub fn index(&self) -> &RelationshipIndex<'a> {
        &self.index
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    /// Shortest path from self to `target`.
    pub fn select(&self, target: PersonId) -> QueryOutcome {
        debug!("Selecting {} from {}", target, self.self_id);
        match PathFinder::shortest_path(self.self_id, target, &self.adjacency) {
            Some(path) => QueryOutcome::Found(path),
            None => QueryOutcome::NoPath,
        }
    }

    pub fn formatter(&self) -> PresentationFormatter<'_> {
        PresentationFormatter::new(self.dataset, &self.index)
    }

    pub fn layout_engine(&self) -> PathLayoutEngine<'_> {
        PathLayoutEngine::new(&self.index)
    }

    pub fn describe(&self, outcome: &QueryOutcome) -> String {
        match outcome {
            QueryOutcome::Found(path) => self.formatter().describe(path),
            QueryOutcome::NoPath => NO_PATH_MESSAGE.to_string(),
        }
    }

    /// Builds the complete frame for an outcome.
    pub fn render(
        &self,
        outcome: &QueryOutcome,
        surface_width: f64,
        config: &LayoutConfig,
    ) -> RenderFrame {
        match outcome {
            QueryOutcome::Found(path) => {
                let entries = self.layout_engine().entries(path);
                self.render_entries(path, &entries, surface_width, config)
            }
            QueryOutcome::NoPath => RenderFrame::clear(
                FrameStatus::NoPath,
                NO_PATH_MESSAGE,
                effective_width(surface_width),
            ),
        }
    }

    /// Pixel layout of a path, without names or description.
    pub fn layout(
        &self,
        path: &FamilyPath,
        surface_width: f64,
        config: &LayoutConfig,
    ) -> PathGeometry {
        self.layout_engine().layout(path, surface_width, config)
    }

    /// Geometry pass only, for entries computed earlier.
    pub fn render_entries(
        &self,
        path: &FamilyPath,
        entries: &[LayoutEntry],
        surface_width: f64,
        config: &LayoutConfig,
    ) -> RenderFrame {
        let geometry = self
            .layout_engine()
            .geometry(entries, surface_width, config);
        self.formatter().frame(path, geometry)
    }
}
