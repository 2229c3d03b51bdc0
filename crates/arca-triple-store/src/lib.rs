//! Synchronous SPARQL-over-HTTP triple store client.
//!
//! The client renders loosely-typed triple tokens into SPARQL, routes
//! statements to the right endpoint per store dialect, and performs
//! chunked bulk mutation and raw serialized loads. All I/O is blocking;
//! bulk operations are sequential chunk loops with no retry or rollback.
//! A failure leaves prior chunks committed and propagates to the caller.

mod backend;
mod bulk;
mod config;
pub mod entity;
pub mod error;
pub mod id;
mod prefix;
mod progress;
mod sparql;
mod term;

use std::sync::Arc;

use reqwest::header::ACCEPT;

pub use backend::{GenericSparqlBackend, GraphDbBackend, StatementKind, StoreBackend};
use backend::{apply_auth, ensure_success};
pub use config::{StoreBackendType, StoreConfig};
use error::Result;
pub use prefix::{BASE_PREFIX, Prefix, PrefixTable};
pub use progress::{LogProgress, NoProgress, ProgressSink};
pub use sparql::{BindingValue, ResultRow};
use term::render_triple;
pub use term::{Term, Triple, to_literal};

#[cfg(test)]
mod tests;

/// Triples per INSERT DATA statement. Bulk inserts above store-specific
/// size limits are rejected or perform poorly.
const INSERT_CHUNK_SIZE: usize = 1000;

/// Predicates whose inverse is never materialized.
const INVERSE_BLACKLIST: [&str; 3] = ["rdf:type", "rdfs:label", "rdfs:comment"];

/// Options for [`TripleStoreClient::insert`].
#[derive(Debug, Clone)]
pub struct InsertOptions {
    /// Named graph receiving the triples; the default graph when absent.
    pub graph: Option<String>,
    /// Materialize a reverse edge for every non-literal, non-annotation
    /// triple, for consumers that only traverse forward edges.
    pub with_inverse: bool,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            graph: None,
            with_inverse: true,
        }
    }
}

/// SPARQL triple store client
///
/// Owns the prefix table and the HTTP connection, and delegates
/// dialect-specific routing to a [`StoreBackend`]. Safe to reuse
/// sequentially; concurrent use needs external synchronization.
pub struct TripleStoreClient {
    backend: Box<dyn StoreBackend>,
    prefixes: Arc<PrefixTable>,
    config: StoreConfig,
    http: reqwest::blocking::Client,
}

impl TripleStoreClient {
    /// Create a client for the configured store dialect.
    pub fn connect(config: StoreConfig) -> Result<Self> {
        let prefixes = Arc::new(PrefixTable::new(config.prefixes.clone()));
        let backend: Box<dyn StoreBackend> = match config.backend {
            StoreBackendType::Graphdb => Box::new(GraphDbBackend::new(
                config.clone(),
                Arc::clone(&prefixes),
            )?),
            StoreBackendType::Generic => Box::new(GenericSparqlBackend::new(config.clone())?),
        };
        let http = reqwest::blocking::Client::builder().build()?;

        tracing::info!(
            backend = %backend.name(),
            url = %config.url,
            prefixes = prefixes.iter().count(),
            "Triple store client ready"
        );

        Ok(Self {
            backend,
            prefixes,
            config,
            http,
        })
    }

    /// Registered prefixes, shared read-only with the result decoder.
    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// Run a SPARQL statement against the store.
    ///
    /// The prefix header is prepended and the dialect decides routing:
    /// mutations go to the update endpoint and return `None`, read queries
    /// return decoded rows when the response carries bindings.
    pub fn run(&self, text: &str) -> Result<Option<Vec<ResultRow>>> {
        let kind = self.backend.classify(text);
        let statement = self.prepare_statement(text);
        match kind {
            StatementKind::Mutation => {
                self.backend.submit_update(&statement)?;
                Ok(None)
            }
            StatementKind::Query => {
                let body = self.submit_query(&statement)?;
                sparql::decode_rows(&body, &self.prefixes)
            }
        }
    }

    /// Insert triples, chunked into statements of at most 1000 triples.
    ///
    /// With `with_inverse`, a reverse triple `(o, p, s)` is inserted
    /// immediately before each forward triple whose predicate is not an
    /// annotation and whose object is not a literal. The progress sink
    /// advances after every committed chunk. Not atomic: a failure aborts
    /// the remainder but leaves prior chunks committed.
    pub fn insert(
        &self,
        triples: &[Triple],
        options: &InsertOptions,
        progress: &mut dyn ProgressSink,
    ) -> Result<()> {
        let all_triples = if options.with_inverse {
            with_inverse_triples(triples)
        } else {
            triples.to_vec()
        };

        let graph_term = options
            .graph
            .as_deref()
            .and_then(|graph| Term::classify(graph, &self.prefixes).render());

        let chunks: Vec<&[Triple]> = all_triples.chunks(INSERT_CHUNK_SIZE).collect();
        progress.begin(chunks.len(), "insert");

        for chunk in chunks {
            let mut lines = Vec::with_capacity(chunk.len());
            for triple in chunk {
                if let Some(line) = render_triple(triple, &self.prefixes)? {
                    lines.push(line);
                }
            }
            if lines.is_empty() {
                progress.advance();
                continue;
            }

            let body = lines.join("\n");
            let statement = match &graph_term {
                Some(graph) => format!("INSERT DATA {{\nGRAPH {graph} {{\n{body}\n}}\n}}"),
                None => format!("INSERT DATA {{\n{body}\n}}"),
            };
            self.run(&statement)?;
            progress.advance();
        }

        progress.finish();
        Ok(())
    }

    /// Delete matching triples with a single DELETE WHERE statement.
    ///
    /// Terms may be concrete or variables, to express deletion patterns.
    pub fn delete(&self, triples: &[Triple], graph: Option<&str>) -> Result<()> {
        let mut lines = Vec::with_capacity(triples.len());
        for triple in triples {
            if let Some(line) = render_triple(triple, &self.prefixes)? {
                lines.push(line);
            }
        }
        let body = lines.join("\n");

        let graph_term = graph.and_then(|graph| Term::classify(graph, &self.prefixes).render());
        let statement = match &graph_term {
            Some(graph) => format!("DELETE WHERE {{\nGRAPH {graph} {{\n{body}\n}}\n}}"),
            None => format!("DELETE WHERE {{\n{body}\n}}"),
        };

        self.run(&statement)?;
        Ok(())
    }

    /// Dump the whole store as N-Quads text.
    pub fn dump(&self) -> Result<String> {
        let request = self
            .http
            .get(self.config.statements_endpoint())
            .header(ACCEPT, "application/n-quads");
        let request = apply_auth(
            request,
            self.config.username.as_deref(),
            self.config.password.as_deref(),
        );
        let response = ensure_success(request.send()?)?;
        Ok(response.text()?)
    }

    /// Bulk-load raw N-Quads content in 10 000-line chunks.
    ///
    /// Quads embed their graph; the dialect must support raw uploads.
    pub fn load_nquads(&self, content: &str, progress: &mut dyn ProgressSink) -> Result<()> {
        let chunks = bulk::chunk_lines(content, bulk::LINES_PER_CHUNK);
        progress.begin(chunks.len(), "load n-quads");
        for chunk in &chunks {
            self.backend.upload_nquads_chunk(chunk)?;
            progress.advance();
        }
        progress.finish();
        Ok(())
    }

    /// Bulk-load raw Turtle content into the given graph in 10 000-line
    /// chunks. `@prefix` declarations are extracted once and re-prepended
    /// to every chunk so each chunk is independently parseable.
    pub fn load_turtle(
        &self,
        content: &str,
        graph: &str,
        progress: &mut dyn ProgressSink,
    ) -> Result<()> {
        let turtle = bulk::chunk_turtle(content, bulk::LINES_PER_CHUNK);
        progress.begin(turtle.data_chunks.len(), "load turtle");
        for chunk in &turtle.data_chunks {
            let payload = format!("{}{}", turtle.declarations, chunk);
            self.backend.upload_turtle_chunk(&payload, Some(graph))?;
            progress.advance();
        }
        progress.finish();
        Ok(())
    }

    /// Prepend the prefix header and normalize whitespace. In debug mode
    /// the statement is re-indented and echoed through the logging layer
    /// instead of being compacted; semantics are unchanged.
    fn prepare_statement(&self, text: &str) -> String {
        let header = self.prefixes.sparql_header();
        if self.config.debug_statements {
            let statement = format!("{header}\n{}", dedent(text));
            tracing::debug!(statement = %statement, "prepared statement");
            statement
        } else {
            format!("{header}\n{text}")
                .lines()
                .map(str::trim)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    fn submit_query(&self, statement: &str) -> Result<String> {
        let request = self
            .http
            .post(&self.config.url)
            .form(&[("query", statement)])
            .header(ACCEPT, "application/sparql-results+json");
        let request = apply_auth(
            request,
            self.config.username.as_deref(),
            self.config.password.as_deref(),
        );
        let response = ensure_success(request.send()?)?;
        Ok(response.text()?)
    }
}

#[cfg(test)]
impl TripleStoreClient {
    pub(crate) fn from_backend_for_tests(
        backend: Box<dyn StoreBackend>,
        config: StoreConfig,
    ) -> Self {
        let prefixes = Arc::new(PrefixTable::new(config.prefixes.clone()));
        let http = reqwest::blocking::Client::new();
        Self {
            backend,
            prefixes,
            config,
            http,
        }
    }
}

/// Expand each triple with its reverse edge where applicable, the reverse
/// immediately before the forward one.
fn with_inverse_triples(triples: &[Triple]) -> Vec<Triple> {
    let mut all_triples = Vec::with_capacity(triples.len() * 2);
    for triple in triples {
        if !INVERSE_BLACKLIST.contains(&triple.predicate.as_str())
            && !triple.object.trim().is_empty()
            && !triple.object.starts_with('\'')
            && !triple.object.starts_with('"')
        {
            all_triples.push(Triple::new(
                triple.object.clone(),
                triple.predicate.clone(),
                triple.subject.clone(),
            ));
        }
        all_triples.push(triple.clone());
    }
    all_triples
}

/// Remove the common leading indentation, taken from the first non-empty
/// line.
fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .unwrap_or(0);
    text.lines()
        .map(|line| line.get(indent..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}
