//! Async client for the retrieval service.
//!
//! # Design
//! `RagClient` holds only a base URL and a shared `reqwest::Client`; no
//! mutable state is carried between calls, so concurrent calls are
//! independent. Each endpoint is split into a `build_*` method that
//! produces an `HttpRequest` and the shared `request` executor that runs
//! the round trip, so request shapes stay testable without a network.
//! Exactly one network call happens per invocation: no retries, no
//! client-side timeout beyond the transport's defaults.

use crate::config;
use crate::error::ApiError;
use crate::http::{ApiResponse, HttpMethod, HttpRequest};
use crate::types::QueryRequest;

/// Client for the retrieval service's `/health`, `/ingest` and `/query`
/// endpoints.
#[derive(Debug, Clone)]
pub struct RagClient {
    base_url: String,
    http: reqwest::Client,
}

impl RagClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Client pointed at the process-wide configured base address
    /// (`RAG_API_BASE`, or the local default).
    pub fn from_env() -> Self {
        Self::new(config::base_url())
    }

    pub fn build_health(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "/health".to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_ingest(&self, collection: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            path: format!("/ingest?collection={}", urlencoding::encode(collection)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_query(&self, input: &QueryRequest) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: "/query".to_string(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Execute a request descriptor: one round trip against
    /// `base_url + path`.
    ///
    /// Non-2xx/3xx responses become `ApiError::Status` carrying the status
    /// code, its canonical text, and the body (best effort: an unreadable
    /// body yields an empty string). Successful responses are parsed as
    /// JSON when the `content-type` header says so, and returned as raw
    /// text otherwise.
    pub async fn request(&self, req: HttpRequest) -> Result<ApiResponse, ApiError> {
        let url = format!("{}{}", self.base_url, req.path);

        let mut builder = match req.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(ApiError::Transport)?;

        let status = response.status();
        // The transport follows redirects itself; a 3xx that still surfaces
        // here counts as ok.
        if !(status.is_success() || status.is_redirection()) {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
                body,
            });
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if is_json {
            let value = response.json().await.map_err(ApiError::Transport)?;
            Ok(ApiResponse::Json(value))
        } else {
            let text = response.text().await.map_err(ApiError::Transport)?;
            Ok(ApiResponse::Text(text))
        }
    }

    /// `GET /health`.
    pub async fn health(&self) -> Result<ApiResponse, ApiError> {
        self.request(self.build_health()).await
    }

    /// `POST /ingest?collection=<name>`. The collection name is
    /// percent-encoded into the query string.
    pub async fn ingest(&self, collection: &str) -> Result<ApiResponse, ApiError> {
        self.request(self.build_ingest(collection)).await
    }

    /// `POST /query` with a JSON body.
    pub async fn query(&self, input: &QueryRequest) -> Result<ApiResponse, ApiError> {
        self.request(self.build_query(input)?).await
    }
}
