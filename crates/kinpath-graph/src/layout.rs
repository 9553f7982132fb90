//! Generation-aware path layout.
//!
//! Layout runs in two passes:
//!
//! 1. **Semantic**: walk the path and give every person a generation level
//!    and a lateral column. Moving to a parent raises the level, moving to a
//!    child lowers it, and any move that stays in one generation opens a new
//!    column.
//! 2. **Geometry**: turn levels into rows (oldest generation on top) and
//!    columns into evenly spaced x positions on a surface of a given width.
//!
//! The geometry pass only needs the entries from the first pass, so a resize
//! can replay it without searching again.

use crate::index::RelationshipIndex;
use crate::path::FamilyPath;
use kinpath_core::PersonId;
use serde::{Deserialize, Serialize};

/// Surface width used when the caller has none to offer.
pub const DEFAULT_SURFACE_WIDTH: f64 = 900.0;

/// Endpoints closer than this (in y) count as level-aligned.
const LEVEL_TOLERANCE: f64 = 4.0;

/// How far a label on a horizontal edge is lifted above the line.
const LABEL_LIFT: f64 = 14.0;

/// How far a label on a vertical edge is pushed to the side of the line.
const LABEL_SHIFT: f64 = 48.0;

/// Fixed node and spacing sizes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub row_height: f64,
    pub min_gap: f64,
    pub vertical_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 200.0,
            row_height: 160.0,
            min_gap: 80.0,
            vertical_padding: 80.0,
        }
    }
}

/// One person's place on the path, before any pixels are involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: PersonId,
    /// Generation relative to the first person: 0 at the start, up is positive.
    pub level: i32,
    /// 1-based lateral lane.
    pub column: u32,
}

/// A person positioned on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedNode {
    pub id: PersonId,
    pub level: i32,
    pub column: u32,
    /// 0 is the top row.
    pub row: u32,
    pub x: f64,
    pub y: f64,
}

/// A connecting line between two consecutive people, with its label.
///
/// An empty label means only the line is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedEdge {
    pub from: PersonId,
    pub to: PersonId,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
}

/// Everything a renderer needs to draw a path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathGeometry {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<PlacedEdge>,
    pub width: f64,
    pub height: f64,
    pub columns: u32,
    pub min_level: i32,
    pub max_level: i32,
}

impl PathGeometry {
    /// Nothing to draw.
    pub fn empty(width: f64) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            width,
            height: 0.0,
            columns: 0,
            min_level: 0,
            max_level: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: PersonId) -> Option<&PlacedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Falls back to the default width for zero, negative or non-finite input.
pub fn effective_width(surface_width: f64) -> f64 {
    if surface_width.is_finite() && surface_width > 0.0 {
        surface_width
    } else {
        DEFAULT_SURFACE_WIDTH
    }
}

/// Lays out resolved paths using a RelationshipIndex for step semantics.
pub struct PathLayoutEngine<'a> {
    index: &'a RelationshipIndex<'a>,
}

impl<'a> PathLayoutEngine<'a> {
    pub fn new(index: &'a RelationshipIndex<'a>) -> Self {
        Self { index }
    }

    /// Semantic pass: one entry per person, in path order.
    ///
    /// Entries are never merged, even when two land on the same level and
    /// column.
    pub fn entries(&self, path: &FamilyPath) -> Vec<LayoutEntry> {
        let Some(first) = path.source() else {
            return Vec::new();
        };

        let mut level = 0;
        let mut column = 1;
        let mut entries = Vec::with_capacity(path.len());
        entries.push(LayoutEntry {
            id: first,
            level,
            column,
        });

        for (a, b) in path.steps() {
            let step = self.index.step(a, b);
            level += step.generation_delta();
            if step.is_lateral() {
                column += 1;
            }
            entries.push(LayoutEntry {
                id: b,
                level,
                column,
            });
        }

        entries
    }

    /// Geometry pass over entries produced by [`entries`](Self::entries).
    pub fn geometry(
        &self,
        entries: &[LayoutEntry],
        surface_width: f64,
        config: &LayoutConfig,
    ) -> PathGeometry {
        let width = effective_width(surface_width);
        if entries.is_empty() {
            return PathGeometry::empty(width);
        }

        let (min_level, max_level) = entries
            .iter()
            .fold((0, 0), |(lo, hi), e| (lo.min(e.level), hi.max(e.level)));
        let columns = entries.iter().map(|e| e.column).max().unwrap_or(1).max(1);

        let spacing = if columns > 1 {
            let fitted = (width - config.node_width) / f64::from(columns - 1);
            fitted.max(config.node_width + config.min_gap)
        } else {
            0.0
        };
        // Wide spacing can push start_x negative: the path then overflows the
        // surface instead of overlapping.
        let total_span = spacing * f64::from(columns - 1);
        let start_x = (width - total_span) / 2.0;

        let nodes: Vec<PlacedNode> = entries
            .iter()
            .map(|entry| {
                let row = (max_level - entry.level) as u32;
                PlacedNode {
                    id: entry.id,
                    level: entry.level,
                    column: entry.column,
                    row,
                    x: start_x + f64::from(entry.column.saturating_sub(1)) * spacing,
                    y: config.vertical_padding + f64::from(row) * config.row_height,
                }
            })
            .collect();

        let edges = nodes
            .windows(2)
            .map(|pair| self.place_edge(&pair[0], &pair[1]))
            .collect();

        let height = f64::from((max_level - min_level + 1) as u32) * config.row_height
            + 2.0 * config.vertical_padding;

        PathGeometry {
            nodes,
            edges,
            width,
            height,
            columns,
            min_level,
            max_level,
        }
    }

    /// Both passes in one go.
    pub fn layout(
        &self,
        path: &FamilyPath,
        surface_width: f64,
        config: &LayoutConfig,
    ) -> PathGeometry {
        let entries = self.entries(path);
        self.geometry(&entries, surface_width, config)
    }

    fn place_edge(&self, a: &PlacedNode, b: &PlacedNode) -> PlacedEdge {
        let mut label_x = (a.x + b.x) / 2.0;
        let mut label_y = (a.y + b.y) / 2.0;
        if (a.y - b.y).abs() < LEVEL_TOLERANCE {
            label_y -= LABEL_LIFT;
        } else {
            label_x += LABEL_SHIFT;
        }

        PlacedEdge {
            from: a.id,
            to: b.id,
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
            label: self.index.label_for(a.id, b.id).to_string(),
            label_x,
            label_y,
        }
    }
}
