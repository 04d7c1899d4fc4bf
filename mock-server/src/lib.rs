use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

/// Collection used when a request does not name one.
pub const DEFAULT_COLLECTION: &str = "docs";

/// `top_k` applied when a query does not set it.
pub const DEFAULT_TOP_K: usize = 4;

// Fixed corpus standing in for the real server's data directory:
// (file name, chunks).
const CORPUS: &[(&str, &[&str])] = &[
    (
        "overview.md",
        &[
            "Rust is a systems programming language focused on safety and speed.",
            "The borrow checker enforces aliasing and lifetime rules at compile time.",
        ],
    ),
    (
        "tooling.md",
        &[
            "Cargo is the Rust package manager and build tool.",
            "Tokio provides an asynchronous runtime for networked applications.",
            "Axum builds HTTP services on top of Tower and Hyper.",
        ],
    ),
];

/// Acknowledgment returned by `POST /ingest`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IngestAck {
    pub collection: String,
    pub files: usize,
    pub chunks: usize,
}

/// Body of `POST /query`.
#[derive(Debug, Deserialize)]
pub struct QueryReq {
    pub query: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default)]
    pub collection: Option<String>,
}

/// Result of `POST /query`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryAnswer {
    pub answer: String,
    pub contexts: Vec<String>,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

pub type Db = Arc<RwLock<HashMap<String, Vec<String>>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/health", get(health))
        .route("/ingest", post(ingest))
        .route("/query", post(query))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct IngestParams {
    #[serde(default = "default_collection")]
    collection: String,
}

async fn ingest(State(db): State<Db>, Query(params): Query<IngestParams>) -> Json<IngestAck> {
    let chunks: Vec<String> = CORPUS
        .iter()
        .flat_map(|(_, chunks)| chunks.iter().map(|c| c.to_string()))
        .collect();
    let n_chunks = chunks.len();
    db.write().await.insert(params.collection.clone(), chunks);
    Json(IngestAck {
        collection: params.collection,
        files: CORPUS.len(),
        chunks: n_chunks,
    })
}

async fn query(
    State(db): State<Db>,
    Json(req): Json<QueryReq>,
) -> Result<Json<QueryAnswer>, (StatusCode, String)> {
    let name = req.collection.unwrap_or_else(default_collection);
    let db = db.read().await;
    let chunks = db.get(&name).ok_or_else(|| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("unknown collection: {name}"),
        )
    })?;
    let contexts = search(chunks, &req.query, req.top_k);
    Ok(Json(QueryAnswer {
        answer: format!("stub answer for '{}'", req.query),
        contexts,
    }))
}

/// Rank chunks by how many query terms they contain, case-insensitively.
/// Ties keep corpus order (the sort is stable).
fn search(chunks: &[String], query: &str, top_k: usize) -> Vec<String> {
    let needles: Vec<String> = query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let mut scored: Vec<(usize, &String)> = chunks
        .iter()
        .map(|chunk| {
            let hay = chunk.to_lowercase();
            let score = needles.iter().filter(|n| hay.contains(n.as_str())).count();
            (score, chunk)
        })
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().take(top_k).map(|(_, c)| c.clone()).collect()
}
