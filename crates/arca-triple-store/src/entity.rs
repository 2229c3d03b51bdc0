//! Triple builders for describing new entities.

use crate::term::{Triple, to_literal};

/// Build the triples introducing an entity: its class, plus label and
/// comment literals when those columns are present. Absent columns simply
/// produce no triple.
pub fn describe_entity(
    uri: &str,
    class: &str,
    label: Option<&str>,
    comment: Option<&str>,
    language: Option<&str>,
) -> Vec<Triple> {
    let mut triples = vec![Triple::new(uri, "rdf:type", class)];
    if let Some(label) = label {
        triples.push(Triple::new(uri, "rdfs:label", to_literal(label, language)));
    }
    if let Some(comment) = comment {
        triples.push(Triple::new(
            uri,
            "rdfs:comment",
            to_literal(comment, language),
        ));
    }
    triples
}
