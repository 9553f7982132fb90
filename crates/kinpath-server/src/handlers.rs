//! Request handlers for protocol methods.
//!
//! Each handler implements one method and returns a complete response.

use crate::protocol::{ResizeParams, Response, SelectParams, QUERY_ERROR};
use crate::session::Session;
use kinpath_core::PersonId;
use kinpath_graph::FamilyGraph;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Handles the graph.info method.
pub fn handle_info(session: &Session, id: Option<Value>) -> Response {
    let stats = FamilyGraph::from_dataset(session.dataset()).stats();

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct InfoResult {
        people: usize,
        relationships: usize,
        components: usize,
        self_id: Option<PersonId>,
        version: &'static str,
    }

    Response::success(
        id,
        InfoResult {
            people: stats.people,
            relationships: stats.relationships,
            components: stats.components,
            self_id: stats.self_id,
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// Handles the people.list method: everyone who can be selected.
pub fn handle_people(session: &Session, id: Option<Value>) -> Response {
    let people: Vec<_> = session.dataset().others().collect();
    Response::success(id, people)
}

/// Handles the select method.
pub fn handle_select(session: &mut Session, id: Option<Value>, params: SelectParams) -> Response {
    debug!("Select request: {:?}", params);

    // The width only sticks when the selection renders.
    let previous_width = session.surface_width();
    if let Some(width) = params.width {
        session.set_surface_width(width);
    }

    match session.try_select(params.target) {
        Ok(frame) => Response::success(id, frame),
        Err(e) => {
            session.set_surface_width(previous_width);
            Response::error(id, QUERY_ERROR, e.to_string())
        }
    }
}

/// Handles the resize method. The result is null when nothing is drawn.
pub fn handle_resize(session: &mut Session, id: Option<Value>, params: ResizeParams) -> Response {
    if !params.width.is_finite() {
        return Response::invalid_params(id, "width must be a finite number");
    }
    Response::success(id, session.resize(params.width))
}
