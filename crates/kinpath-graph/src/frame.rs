//! Render frames handed to an external renderer.
//!
//! A frame is complete: a renderer should throw away whatever it drew last
//! and draw exactly this. Frames with no nodes are explicit clears.

use crate::layout::PlacedEdge;
use kinpath_core::PersonId;
use serde::{Deserialize, Serialize};

/// Why a frame looks the way it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FrameStatus {
    /// A path was found and is drawn.
    Path,
    /// The target can't be reached from self.
    NoPath,
    /// Nothing has been selected yet.
    Prompt,
    /// The query could not run.
    Error,
}

/// A person as the renderer should draw them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameNode {
    pub id: PersonId,
    pub display_text: String,
    pub x: f64,
    pub y: f64,
    pub is_self: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrame {
    pub status: FrameStatus,
    /// The path sentence, or a message for the other statuses.
    pub description: String,
    pub nodes: Vec<FrameNode>,
    pub edges: Vec<PlacedEdge>,
    pub width: f64,
    pub height: f64,
}

impl RenderFrame {
    /// An empty frame carrying only a message.
    pub fn clear(status: FrameStatus, message: impl Into<String>, width: f64) -> Self {
        Self {
            status,
            description: message.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            width,
            height: 0.0,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
