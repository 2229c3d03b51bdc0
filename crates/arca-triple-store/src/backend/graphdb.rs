use std::sync::Arc;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::CONTENT_TYPE;

use super::{StatementKind, StoreBackend, apply_auth, classify_statement, ensure_success};
use crate::{config::StoreConfig, error::Result, prefix::PrefixTable};

/// GraphDB dialect.
///
/// Queries and updates share the repository endpoint; updates and raw
/// bulk loads go to its `/statements` sub-resource.
pub struct GraphDbBackend {
    config: StoreConfig,
    prefixes: Arc<PrefixTable>,
    http: reqwest::blocking::Client,
}

impl GraphDbBackend {
    pub fn new(config: StoreConfig, prefixes: Arc<PrefixTable>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            config,
            prefixes,
            http,
        })
    }

    /// Statements endpoint derived from the configured URL. A trailing
    /// `/sparql` path segment is dropped first: GraphDB exposes
    /// `/statements` next to the repository, not under its query path.
    fn statements_endpoint(&self) -> String {
        let base = self.config.url.trim_end_matches('/');
        let base = base.strip_suffix("/sparql").unwrap_or(base);
        format!("{base}/statements")
    }
}

impl StoreBackend for GraphDbBackend {
    fn name(&self) -> &'static str {
        "GraphDB"
    }

    fn classify(&self, text: &str) -> StatementKind {
        classify_statement(text)
    }

    fn submit_update(&self, update: &str) -> Result<()> {
        let request = self
            .http
            .post(self.statements_endpoint())
            .form(&[("update", update)]);
        let request = apply_auth(
            request,
            self.config.username.as_deref(),
            self.config.password.as_deref(),
        );
        ensure_success(request.send()?)?;
        Ok(())
    }

    fn upload_nquads_chunk(&self, chunk: &str) -> Result<()> {
        let request = self
            .http
            .post(self.statements_endpoint())
            .header(CONTENT_TYPE, "application/n-quads")
            .body(chunk.to_string());
        let request = apply_auth(
            request,
            self.config.username.as_deref(),
            self.config.password.as_deref(),
        );
        ensure_success(request.send()?)?;
        Ok(())
    }

    fn upload_turtle_chunk(&self, chunk: &str, graph: Option<&str>) -> Result<()> {
        let mut url = self.statements_endpoint();
        if let Some(graph) = graph {
            let expanded = self.prefixes.expand(graph);
            let context_value = format!("<{expanded}>");
            let context = utf8_percent_encode(&context_value, NON_ALPHANUMERIC);
            url = format!("{url}?context={context}");
        }

        let request = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "text/turtle")
            .body(chunk.to_string());
        let request = apply_auth(
            request,
            self.config.username.as_deref(),
            self.config.password.as_deref(),
        );
        ensure_success(request.send()?)?;
        Ok(())
    }
}
