use super::{StatementKind, StoreBackend, apply_auth, classify_statement, ensure_success};
use crate::{
    config::StoreConfig,
    error::{Result, TripleStoreError},
};

/// Plain SPARQL 1.1 Protocol store.
///
/// Updates go to the `/statements` endpoint; raw serialized bulk loads
/// are not part of the protocol and are reported as unsupported.
pub struct GenericSparqlBackend {
    config: StoreConfig,
    http: reqwest::blocking::Client,
}

impl GenericSparqlBackend {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self { config, http })
    }
}

impl StoreBackend for GenericSparqlBackend {
    fn name(&self) -> &'static str {
        "generic SPARQL 1.1 store"
    }

    fn classify(&self, text: &str) -> StatementKind {
        classify_statement(text)
    }

    fn submit_update(&self, update: &str) -> Result<()> {
        let request = self
            .http
            .post(self.config.statements_endpoint())
            .form(&[("update", update)]);
        let request = apply_auth(
            request,
            self.config.username.as_deref(),
            self.config.password.as_deref(),
        );
        ensure_success(request.send()?)?;
        Ok(())
    }

    fn upload_nquads_chunk(&self, _chunk: &str) -> Result<()> {
        Err(TripleStoreError::Unsupported {
            backend: self.name(),
            operation: "upload_nquads_chunk",
        })
    }

    fn upload_turtle_chunk(&self, _chunk: &str, _graph: Option<&str>) -> Result<()> {
        Err(TripleStoreError::Unsupported {
            backend: self.name(),
            operation: "upload_turtle_chunk",
        })
    }
}
