//! Line-delimited JSON-RPC server.
//!
//! Reads one request per line and writes one response per line. Requests
//! are handled in order, each to completion, against a single session.

use crate::handlers::{handle_info, handle_people, handle_resize, handle_select};
use crate::protocol::{Request, ResizeParams, Response, SelectParams};
use crate::session::Session;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// A JSON-RPC server bound to one session.
pub struct StdioServer {
    session: Session,
}

impl StdioServer {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Serves stdin/stdout until stdin closes.
    pub fn run_stdio(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }

    /// Serves any line source until it ends. Only a read error stops it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Serving {} people", self.session.dataset().people().len());

        // Split on raw bytes so one undecodable line can't end the session.
        for line in input.split(b'\n') {
            let line = line?;
            let response = match std::str::from_utf8(&line) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => self.process_message(text),
                Err(e) => {
                    warn!("Request line is not valid UTF-8: {}", e);
                    Response::parse_error()
                }
            };

            let json = serde_json::to_string(&response)?;
            writeln!(output, "{}", json)?;
            output.flush()?;
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Processes one JSON-RPC message and returns its response.
    pub fn process_message(&mut self, text: &str) -> Response {
        let request: Request = match serde_json::from_str(text) {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to parse request: {}", e);
                return Response::parse_error();
            }
        };

        let id = request.id.clone();
        let method = request.method.as_str();

        debug!("Processing method: {}", method);

        match method {
            "graph.info" => handle_info(&self.session, id),

            "people.list" => handle_people(&self.session, id),

            "select" => {
                let params = if request.params.is_null() {
                    Ok(SelectParams::default())
                } else {
                    serde_json::from_value::<SelectParams>(request.params)
                };
                match params {
                    Ok(params) => handle_select(&mut self.session, id, params),
                    Err(e) => Response::invalid_params(id, e),
                }
            }

            "resize" => match serde_json::from_value::<ResizeParams>(request.params) {
                Ok(params) => handle_resize(&mut self.session, id, params),
                Err(e) => Response::invalid_params(id, e),
            },

            _ => Response::method_not_found(id, method),
        }
    }
}
