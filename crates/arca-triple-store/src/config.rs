use serde::{Deserialize, Serialize};

use crate::prefix::Prefix;

/// Backend dialect for the triple store
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendType {
    /// GraphDB-style store: shared query endpoint, `/statements` for
    /// updates and raw bulk loads
    Graphdb,
    /// Any SPARQL 1.1 Protocol store (no raw bulk-load support)
    Generic,
}

/// Configuration for the triple store client
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Backend dialect to use.
    pub backend: StoreBackendType,

    /// Query endpoint URL (e.g. "http://localhost:7200/repositories/records")
    pub url: String,

    /// Optional username for HTTP basic auth
    pub username: Option<String>,

    /// Optional password for HTTP basic auth
    pub password: Option<String>,

    /// Namespace prefixes registered with the client, in declaration order.
    /// The reserved short name "base" is kept out of query headers.
    #[serde(default)]
    pub prefixes: Vec<Prefix>,

    /// Echo re-indented statements through the logging layer instead of
    /// compacting them. Defaults from the SPARQL_DEBUG environment variable.
    #[serde(default = "debug_statements_from_env")]
    pub debug_statements: bool,
}

fn debug_statements_from_env() -> bool {
    std::env::var("SPARQL_DEBUG").is_ok_and(|value| value == "1" || value == "debug")
}

impl StoreConfig {
    /// Get the statements endpoint URL used for dumps and updates
    pub fn statements_endpoint(&self) -> String {
        format!("{}/statements", self.url.trim_end_matches('/'))
    }
}
