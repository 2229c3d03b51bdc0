#![allow(clippy::unwrap_used)]

use crate::{
    Prefix, PrefixTable, Term, Triple,
    entity::describe_entity,
    error::TripleStoreError,
    id,
    term::{render_triple, to_literal},
};

fn table() -> PrefixTable {
    PrefixTable::new(vec![
        Prefix::new("base", "http://records.example.org/resource/"),
        Prefix::new("crm", "http://www.cidoc-crm.org/cidoc-crm/"),
        Prefix::new("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ])
}

#[test]
fn shorten_substitutes_registered_prefix() {
    assert_eq!(
        table().shorten("http://www.cidoc-crm.org/cidoc-crm/E21"),
        "crm:E21"
    );
}

#[test]
fn shorten_strips_brackets() {
    assert_eq!(
        table().shorten("<http://www.cidoc-crm.org/cidoc-crm/E21>"),
        "crm:E21"
    );
    // No match: input comes back bracket-stripped but otherwise unchanged
    assert_eq!(
        table().shorten("<http://other.example.org/thing>"),
        "http://other.example.org/thing"
    );
}

#[test]
fn shorten_and_expand_are_mutual_inverses() {
    let table = table();
    let long = "http://www.cidoc-crm.org/cidoc-crm/P14";
    assert_eq!(table.shorten(long), "crm:P14");
    assert_eq!(table.expand("crm:P14"), long);
}

#[test]
fn expand_is_a_noop_without_match() {
    assert_eq!(table().expand("unknown:name"), "unknown:name");
}

#[test]
fn sparql_header_excludes_base_and_keeps_order() {
    let header = table().sparql_header();
    let lines: Vec<&str> = header.lines().collect();
    assert_eq!(
        lines,
        vec![
            "PREFIX crm: <http://www.cidoc-crm.org/cidoc-crm/>",
            "PREFIX rdfs: <http://www.w3.org/2000/01/rdf-schema#>",
        ]
    );
}

#[test]
fn turtle_declaration_format() {
    let prefix = Prefix::new("crm", "http://www.cidoc-crm.org/cidoc-crm/");
    assert_eq!(
        prefix.turtle_declaration(),
        "@prefix crm: <http://www.cidoc-crm.org/cidoc-crm/> ."
    );
}

#[test]
fn classify_wraps_absolute_uris() {
    let term = Term::classify("http://example.org/thing", &table());
    assert_eq!(term.render().unwrap(), "<http://example.org/thing>");
}

#[test]
fn classify_empty_and_whitespace_as_null() {
    assert_eq!(Term::classify("", &table()), Term::Null);
    assert_eq!(Term::classify("   ", &table()), Term::Null);
    assert_eq!(Term::classify("", &table()).render(), None);
}

#[test]
fn classify_passes_language_literals_through() {
    let term = Term::classify("'Vente Drouot'@fr", &table());
    assert_eq!(term.render().unwrap(), "'Vente Drouot'@fr");
}

#[test]
fn classify_keeps_registered_prefixed_names() {
    let term = Term::classify("crm:E21", &table());
    assert_eq!(term, Term::Prefixed("crm:E21".to_string()));
}

#[test]
fn classify_wraps_unregistered_colon_tokens_as_uris() {
    let term = Term::classify("urn:uuid:1234", &table());
    assert_eq!(term.render().unwrap(), "<urn:uuid:1234>");
}

#[test]
fn classify_keeps_quoted_values_keyword_and_variables() {
    let table = table();
    assert_eq!(
        Term::classify("'a value'", &table).render().unwrap(),
        "'a value'"
    );
    assert_eq!(
        Term::classify("\"a value\"", &table).render().unwrap(),
        "\"a value\""
    );
    assert_eq!(Term::classify("a", &table), Term::Keyword);
    assert_eq!(Term::classify("?who", &table).render().unwrap(), "?who");
}

#[test]
fn classify_bracket_wrapping_is_idempotent() {
    let term = Term::classify("<urn:uuid:1234>", &table());
    assert_eq!(term.render().unwrap(), "<urn:uuid:1234>");
}

#[test]
fn literal_builder_escapes_and_trims() {
    assert_eq!(to_literal("  L'Enfant  ", None), "'L\\'Enfant'");
    assert_eq!(to_literal("back\\slash", None), "'back\\\\slash'");
    assert_eq!(to_literal("sale", Some("en")), "'sale'@en");
}

#[test]
fn render_triple_joins_encoded_terms() {
    let triple = Triple::new("base:i42", "crm:P14", "http://example.org/actor");
    let line = render_triple(&triple, &table()).unwrap().unwrap();
    assert_eq!(line, "base:i42 crm:P14 <http://example.org/actor> .");
}

#[test]
fn render_triple_drops_null_objects() {
    let triple = Triple::new("base:i42", "rdfs:comment", "");
    assert_eq!(render_triple(&triple, &table()).unwrap(), None);
}

#[test]
fn render_triple_rejects_null_subject_with_present_object() {
    let triple = Triple::new("", "crm:P14", "base:i42");
    let error = render_triple(&triple, &table()).unwrap_err();
    match error {
        TripleStoreError::TripleEncoding { triple } => assert!(triple.contains("crm:P14")),
        other => panic!("expected TripleEncoding, got {other}"),
    }
}

#[test]
fn describe_entity_without_optional_columns_yields_type_only() {
    let triples = describe_entity("base:i42", "crm:E21", None, None, None);
    assert_eq!(triples, vec![Triple::new("base:i42", "rdf:type", "crm:E21")]);
}

#[test]
fn describe_entity_builds_label_and_comment_literals() {
    let triples = describe_entity(
        "base:i42",
        "crm:E21",
        Some("Bernard d'Agesci"),
        Some("painter"),
        Some("fr"),
    );
    assert_eq!(triples.len(), 3);
    assert_eq!(
        triples[1],
        Triple::new("base:i42", "rdfs:label", "'Bernard d\\'Agesci'@fr")
    );
    assert_eq!(
        triples[2],
        Triple::new("base:i42", "rdfs:comment", "'painter'@fr")
    );
}

#[test]
fn minted_ids_are_distinct_and_prefixed() {
    let first = id::mint();
    let second = id::mint();
    assert!(first.starts_with('i'));
    assert!(second.starts_with('i'));
    assert_ne!(first, second);
}
