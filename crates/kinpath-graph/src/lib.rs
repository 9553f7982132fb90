//! Kinpath Graph - Relationship search and layout
//!
//! This crate finds how the self person is related to anyone else in the
//! family and turns the answer into something drawable: a sentence and a
//! set of positioned nodes and edges.
//!
//! # Architecture
//!
//! ```text
//! Relationship[]
//!     │
//!     ├──> RelationshipIndex    who is joined to whom, and how
//!     ├──> GraphBuilder         undirected AdjacencyIndex
//!     │
//!     └──> QueryContext
//!            ├─ PathFinder             BFS, shortest FamilyPath
//!            ├─ PathLayoutEngine       levels/columns → pixels
//!            └─ PresentationFormatter  "You -(child of)-> ..."
//! ```
//!
//! # Example
//!
//! ```no_run
//! use kinpath_core::FamilyDataset;
//! use kinpath_graph::{LayoutConfig, QueryContext};
//!
//! let dataset = FamilyDataset::load("family.json").unwrap();
//! let ctx = QueryContext::new(&dataset).unwrap();
//!
//! let outcome = ctx.select(5);
//! println!("{}", ctx.describe(&outcome));
//!
//! let frame = ctx.render(&outcome, 1024.0, &LayoutConfig::default());
//! ```

mod adjacency;
mod builder;
mod describe;
mod edge;
mod frame;
mod graph;
mod index;
mod layout;
mod path;
mod query;

pub use adjacency::AdjacencyIndex;
pub use builder::GraphBuilder;
pub use describe::{PresentationFormatter, NO_PATH_MESSAGE, PROMPT_MESSAGE, SELF_LABEL};
pub use edge::{GraphEdge, Step};
pub use frame::{FrameNode, FrameStatus, RenderFrame};
pub use graph::{FamilyGraph, FamilyStats};
pub use index::RelationshipIndex;
pub use layout::{
    effective_width, LayoutConfig, LayoutEntry, PathGeometry, PathLayoutEngine, PlacedEdge,
    PlacedNode, DEFAULT_SURFACE_WIDTH,
};
pub use path::{FamilyPath, PathFinder};
pub use query::{QueryContext, QueryError, QueryOutcome};
