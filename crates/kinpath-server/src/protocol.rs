//! JSON-RPC 2.0 message types.
//!
//! One request per line in, one response per line out. Field names follow
//! JSON-RPC 2.0; params and results use camelCase.

use kinpath_core::PersonId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const QUERY_ERROR: i32 = -32001;

/// An incoming request.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub jsonrpc: Option<String>,

    pub method: String,

    #[serde(default)]
    pub params: Value,

    #[serde(default)]
    pub id: Option<Value>,
}

/// An outgoing response. Exactly one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,

    pub id: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl Response {
    pub fn success(id: Option<Value>, result: impl Serialize) -> Self {
        match serde_json::to_value(result) {
            Ok(value) => Self {
                jsonrpc: "2.0".to_string(),
                result: Some(value),
                error: None,
                id,
            },
            Err(e) => Self::error(id, -32603, format!("Internal error: {}", e)),
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
            id,
        }
    }

    pub fn parse_error() -> Self {
        Self::error(None, PARSE_ERROR, "Parse error")
    }

    pub fn invalid_params(id: Option<Value>, detail: impl std::fmt::Display) -> Self {
        Self::error(id, INVALID_PARAMS, format!("Invalid params: {}", detail))
    }

    pub fn method_not_found(id: Option<Value>, method: &str) -> Self {
        Self::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Params for `select`. A null or absent target clears the selection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectParams {
    #[serde(default)]
    pub target: Option<PersonId>,

    #[serde(default)]
    pub width: Option<f64>,
}

/// Params for `resize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResizeParams {
    pub width: f64,
}
