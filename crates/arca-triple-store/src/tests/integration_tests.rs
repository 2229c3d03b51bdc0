#![allow(clippy::unwrap_used)]

//! Tests against a live GraphDB repository. Gated behind
//! RUN_GRAPHDB_TESTS=1; GRAPHDB_URL points at the repository endpoint.

use super::require_graphdb;
use crate::{
    InsertOptions, NoProgress, Prefix, StoreBackendType, StoreConfig, Triple, TripleStoreClient,
};

fn live_config() -> StoreConfig {
    StoreConfig {
        backend: StoreBackendType::Graphdb,
        url: std::env::var("GRAPHDB_URL")
            .unwrap_or_else(|_| "http://localhost:7200/repositories/test".to_string()),
        username: std::env::var("GRAPHDB_USERNAME").ok(),
        password: std::env::var("GRAPHDB_PASSWORD").ok(),
        prefixes: vec![
            Prefix::new("base", "http://records.example.org/resource/"),
            Prefix::new("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
            Prefix::new("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
        ],
        debug_statements: false,
    }
}

#[test]
fn insert_query_delete_round_trip() {
    if !require_graphdb() {
        return;
    }

    let client = TripleStoreClient::connect(live_config()).unwrap();
    let subject = format!("base:{}", crate::id::mint());
    let triples = [Triple::new(
        subject.clone(),
        "rdfs:label",
        "'integration test entity'",
    )];

    client
        .insert(&triples, &InsertOptions::default(), &mut NoProgress)
        .unwrap();

    let rows = client
        .run(&format!("SELECT ?label WHERE {{ {subject} rdfs:label ?label }}"))
        .unwrap()
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0]["label"].as_str(),
        Some("integration test entity")
    );

    client
        .delete(&[Triple::new(subject.clone(), "?p", "?o")], None)
        .unwrap();

    let rows = client
        .run(&format!("SELECT ?p WHERE {{ {subject} ?p ?o }}"))
        .unwrap();
    assert!(rows.map_or(true, |rows| rows.is_empty()));
}

#[test]
fn dump_returns_nquads_text() {
    if !require_graphdb() {
        return;
    }

    let client = TripleStoreClient::connect(live_config()).unwrap();
    // A dump of an empty repository is still a successful, possibly empty body
    let _dump = client.dump().unwrap();
}
