//! Kinpath Server - Session state and JSON-RPC for renderers
//!
//! This crate sits between the path queries and whatever draws them. It
//! keeps the state of one interactive session and speaks a small
//! line-delimited JSON-RPC 2.0 protocol over stdio:
//!
//! - `graph.info` - family statistics
//! - `people.list` - everyone who can be selected
//! - `select` - render the path from self to a person
//! - `resize` - re-run the geometry for the last path
//!
//! Requests are handled one at a time, each to completion.

mod handlers;
mod protocol;
mod server;
mod session;

pub use protocol::{Request, ResizeParams, Response, RpcError, SelectParams};
pub use server::StdioServer;
pub use session::Session;
