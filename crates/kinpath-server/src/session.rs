//! Interactive session state.
//!
//! A session owns the dataset and remembers the last rendered path so a
//! resize only re-runs the geometry pass. A new selection replaces that
//! state entirely.

use kinpath_core::{FamilyDataset, PersonId};
use kinpath_graph::{
    effective_width, FamilyPath, FrameStatus, LayoutConfig, LayoutEntry, PathLayoutEngine,
    PresentationFormatter, QueryContext, QueryError, QueryOutcome, RelationshipIndex,
    RenderFrame, DEFAULT_SURFACE_WIDTH, PROMPT_MESSAGE,
};
use tracing::{debug, info};

/// The path and layout entries of the last successful render.
#[derive(Debug, Clone)]
struct Rendered {
    path: FamilyPath,
    entries: Vec<LayoutEntry>,
}

pub struct Session {
    dataset: FamilyDataset,
    config: LayoutConfig,
    surface_width: f64,
    last: Option<Rendered>,
}

impl Session {
    pub fn new(dataset: FamilyDataset) -> Self {
        Self {
            dataset,
            config: LayoutConfig::default(),
            surface_width: DEFAULT_SURFACE_WIDTH,
            last: None,
        }
    }

    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_surface_width(mut self, width: f64) -> Self {
        self.surface_width = width;
        self
    }

    pub fn dataset(&self) -> &FamilyDataset {
        &self.dataset
    }

    pub fn surface_width(&self) -> f64 {
        self.surface_width
    }

    pub fn set_surface_width(&mut self, width: f64) {
        self.surface_width = width;
    }

    /// Whether a path is held for resize.
    pub fn has_rendered(&self) -> bool {
        self.last.is_some()
    }

    /// Selection handler. Missing context becomes an error frame.
    pub fn select(&mut self, target: Option<PersonId>) -> RenderFrame {
        match self.try_select(target) {
            Ok(frame) => frame,
            Err(e) => {
                self.last = None;
                RenderFrame::clear(
                    FrameStatus::Error,
                    e.to_string(),
                    effective_width(self.surface_width),
                )
            }
        }
    }

    /// Like `select`, but reports missing context as an error.
    pub fn try_select(&mut self, target: Option<PersonId>) -> Result<RenderFrame, QueryError> {
        let Some(target) = target else {
            self.last = None;
            return Ok(RenderFrame::clear(
                FrameStatus::Prompt,
                PROMPT_MESSAGE,
                effective_width(self.surface_width),
            ));
        };

        let ctx = QueryContext::new(&self.dataset)?;
        let outcome = ctx.select(target);

        let frame = match &outcome {
            QueryOutcome::Found(path) => {
                let entries = ctx.layout_engine().entries(path);
                let frame = ctx.render_entries(path, &entries, self.surface_width, &self.config);
                self.last = Some(Rendered {
                    path: path.clone(),
                    entries,
                });
                frame
            }
            QueryOutcome::NoPath => {
                self.last = None;
                ctx.render(&outcome, self.surface_width, &self.config)
            }
        };

        info!("Selected {}: {}", target, frame.description);
        Ok(frame)
    }

    /// Records the new width and replays the last layout against it.
    pub fn resize(&mut self, width: f64) -> Option<RenderFrame> {
        self.set_surface_width(width);
        let last = self.last.as_ref()?;

        debug!("Resizing to {}", width);
        // Edge labels come from the pair index; no adjacency, no search.
        let index = RelationshipIndex::new(self.dataset.relationships());
        let geometry = PathLayoutEngine::new(&index).geometry(&last.entries, width, &self.config);
        Some(PresentationFormatter::new(&self.dataset, &index).frame(&last.path, geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinpath_core::{Person, Relationship};

    fn session() -> Session {
        Session::new(FamilyDataset::new(
            Some(1),
            vec![
                Person::new(1, "Dad"),
                Person::new(2, "Mom"),
                Person::new(3, "Kid"),
            ],
            vec![
                Relationship::parent(1, 3),
                Relationship::parent(2, 3),
                Relationship::spouse(1, 2),
            ],
        ))
    }

    #[test]
    fn test_nothing_selected_prompts() {
        let mut session = session();
        let frame = session.select(None);

        assert_eq!(frame.status, FrameStatus::Prompt);
        assert_eq!(frame.description, PROMPT_MESSAGE);
        assert!(frame.is_clear());
        assert!(!session.has_rendered());
    }

    #[test]
    fn test_select_then_resize() {
        let mut session = session();
        let frame = session.select(Some(3));
        assert_eq!(frame.status, FrameStatus::Path);
        assert_eq!(frame.width, 900.0);

        let resized = session.resize(1200.0).unwrap();
        assert_eq!(resized.width, 1200.0);
        assert_eq!(resized.description, frame.description);
        assert_eq!(resized.nodes.len(), frame.nodes.len());
        assert!(resized.nodes[0].x > frame.nodes[0].x);
        assert_eq!(session.surface_width(), 1200.0);
    }

    #[test]
    fn test_resize_matches_fresh_render() {
        let mut session = session();
        session.select(Some(3));
        let resized = session.resize(1400.0).unwrap();

        let mut fresh = session.with_surface_width(1400.0);
        let expected = fresh.select(Some(3));
        assert_eq!(resized, expected);
    }

    #[test]
    fn test_resize_before_render() {
        let mut session = session();
        assert!(session.resize(500.0).is_none());
        assert_eq!(session.surface_width(), 500.0);
    }

    #[test]
    fn test_no_path_drops_last_render() {
        let mut session = session();
        session.select(Some(2));
        assert!(session.has_rendered());

        let frame = session.select(Some(999));
        assert_eq!(frame.status, FrameStatus::NoPath);
        assert!(!session.has_rendered());
        assert!(session.resize(700.0).is_none());
    }

    #[test]
    fn test_missing_self_is_error_frame() {
        let mut session = Session::new(FamilyDataset::new(
            None,
            vec![Person::new(1, "Dad")],
            Vec::new(),
        ));

        assert_eq!(session.try_select(Some(1)), Err(QueryError::MissingSelf));

        let frame = session.select(Some(1));
        assert_eq!(frame.status, FrameStatus::Error);
        assert!(frame.is_clear());
    }
}
