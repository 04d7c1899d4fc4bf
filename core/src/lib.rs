//! Async API client core for the retrieval/ingestion service.
//!
//! # Overview
//! Wraps the service's three endpoints (`/health`, `/ingest`, `/query`)
//! behind `RagClient`. Each operation is a `build_*` method producing a
//! plain-data `HttpRequest` plus one shared async `request` executor that
//! performs the round trip and content-negotiates the result.
//!
//! # Design
//! - `RagClient` is stateless: it holds only the base URL and a shared
//!   `reqwest::Client`.
//! - Request construction is split from execution, so URL and body shapes
//!   are testable without a network.
//! - Responses stay untyped (`ApiResponse::Json` / `ApiResponse::Text`):
//!   the server's `content-type` header decides which, nothing else.
//! - The base address comes from `RAG_API_BASE`, resolved once per process.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::RagClient;
pub use config::{base_url, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use http::{ApiResponse, HttpMethod, HttpRequest};
pub use types::{QueryRequest, DEFAULT_COLLECTION, DEFAULT_TOP_K};
