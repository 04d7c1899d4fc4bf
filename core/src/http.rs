//! HTTP transport types.
//!
//! # Design
//! `HttpRequest` describes a request as plain data: built by
//! `RagClient::build_*` methods, executed by `RagClient::request`. Keeping
//! the descriptor separate from execution makes URL and body construction
//! testable without a network. `path` is relative to the client's base URL
//! and must carry its leading `/`; the executor concatenates verbatim.
//!
//! All fields use owned types (`String`, `Vec`) so descriptors can be moved
//! freely and asserted on in tests.

/// HTTP method for a request. The service only takes GET and POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// `body`, when present, is already-serialized JSON text; builders that set
/// it also add the matching `content-type` header.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A successful response after content negotiation.
///
/// The server's `content-type` header decides the variant: anything
/// containing `application/json` is parsed, everything else is returned as
/// raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(serde_json::Value),
    Text(String),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Json(_) => None,
            ApiResponse::Text(text) => Some(text),
        }
    }
}
