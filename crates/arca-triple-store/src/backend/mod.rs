mod generic;
mod graphdb;

pub use generic::GenericSparqlBackend;
pub use graphdb::GraphDbBackend;

use crate::error::{Result, TripleStoreError};

/// How a statement must be submitted over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Read query: form-encoded `query` field against the query endpoint
    Query,
    /// Update: routed to the store's update endpoint
    Mutation,
}

/// Trait for triple store dialects.
///
/// Some store implementations share one HTTP endpoint for queries and
/// updates while requiring different request semantics for each, so the
/// dialect decides routing and owns the update/bulk-load calls. The
/// generic query/mutation orchestration depends only on this trait.
pub trait StoreBackend: Send + Sync {
    /// Backend name for logging and error messages
    fn name(&self) -> &'static str;

    /// Decide whether the statement text is a read query or a mutation
    fn classify(&self, text: &str) -> StatementKind;

    /// Submit a SPARQL update (the prefix header is already prepended)
    fn submit_update(&self, update: &str) -> Result<()>;

    /// Upload one chunk of raw N-Quads. Quads embed their graph, so no
    /// graph parameter is accepted.
    fn upload_nquads_chunk(&self, chunk: &str) -> Result<()>;

    /// Upload one chunk of raw Turtle, scoped to the given graph
    fn upload_turtle_chunk(&self, chunk: &str, graph: Option<&str>) -> Result<()>;
}

const MUTATION_KEYWORDS: [&str; 10] = [
    "insert", "delete", "load", "clear", "create", "drop", "copy", "move", "add", "modify",
];

/// Classify a statement by its first non-declaration keyword.
///
/// Comments are stripped, blank lines dropped, and leading PREFIX/BASE
/// declarations skipped. A body with no remaining statement classifies as
/// a read query.
pub(crate) fn classify_statement(text: &str) -> StatementKind {
    for line in text.lines() {
        let line = line.split('#').next().unwrap_or_default();
        let line = line.trim().to_ascii_lowercase();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("prefix") || line.starts_with("base") {
            continue;
        }
        return if MUTATION_KEYWORDS
            .iter()
            .any(|keyword| line.starts_with(keyword))
        {
            StatementKind::Mutation
        } else {
            StatementKind::Query
        };
    }

    StatementKind::Query
}

/// Turn a non-2xx response into a request error carrying the body.
pub(crate) fn ensure_success(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(TripleStoreError::Request {
        status: status.as_u16(),
        body,
    })
}

/// Attach basic auth when a username is configured.
pub(crate) fn apply_auth(
    request: reqwest::blocking::RequestBuilder,
    username: Option<&str>,
    password: Option<&str>,
) -> reqwest::blocking::RequestBuilder {
    match username {
        Some(username) => request.basic_auth(username, password),
        None => request,
    }
}
