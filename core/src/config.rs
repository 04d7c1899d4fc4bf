//! Base-address resolution.
//!
//! The service address comes from `RAG_API_BASE`, read once per process;
//! there is no way to change it afterwards. Unset or empty falls back to
//! the local development default, and trailing slashes are stripped so
//! paths can be appended verbatim.

use std::sync::OnceLock;

/// Environment variable naming the service base address.
pub const BASE_URL_ENV: &str = "RAG_API_BASE";

/// Address used when `RAG_API_BASE` is unset or empty.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

static BASE_URL: OnceLock<String> = OnceLock::new();

/// The process-wide base address. First call reads the environment; later
/// calls return the same value regardless of environment changes.
pub fn base_url() -> &'static str {
    BASE_URL.get_or_init(|| resolve(std::env::var(BASE_URL_ENV).ok()))
}

fn resolve(raw: Option<String>) -> String {
    match raw {
        Some(s) if !s.is_empty() => s.trim_end_matches('/').to_string(),
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
