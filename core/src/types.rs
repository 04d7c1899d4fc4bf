//! Request DTOs for the retrieval service.
//!
//! # Design
//! Only request payloads get types; responses are returned untyped as
//! `ApiResponse`, since the client promises nothing about the server's
//! response schema. Field order on `QueryRequest` is the wire order
//! (serde serializes in declaration order).

use serde::{Deserialize, Serialize};

/// Collection targeted when the caller does not name one.
pub const DEFAULT_COLLECTION: &str = "docs";

/// Number of top-ranked results requested when the caller does not say.
pub const DEFAULT_TOP_K: usize = 4;

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    pub top_k: usize,
    pub collection: String,
}

impl QueryRequest {
    /// A query against the default collection with the default `top_k`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            top_k: DEFAULT_TOP_K,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}
