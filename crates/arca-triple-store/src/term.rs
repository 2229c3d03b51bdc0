//! Classification and rendering of SPARQL terms from loosely-typed tokens.

use crate::{
    error::{Result, TripleStoreError},
    prefix::PrefixTable,
};

/// A subject/predicate/object statement built from raw tokens.
///
/// Tokens are classified and rendered by the client at submission time;
/// no uniqueness is enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A classified SPARQL term.
///
/// Categories are not mutually exclusive by token shape alone, so
/// [`Term::classify`] applies its checks in a fixed order, first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Absolute URI, held without angle brackets
    Uri(String),
    /// Prefixed name with a registered prefix, kept verbatim
    Prefixed(String),
    /// Fully formed literal (quoted, optionally language-tagged)
    Literal(String),
    /// Query variable (`?name`)
    Variable(String),
    /// The `a` shorthand for rdf:type
    Keyword,
    /// No value; propagates so optional columns can be skipped
    Null,
}

impl Term {
    /// Classify a raw token against the registered prefixes.
    pub fn classify(token: &str, prefixes: &PrefixTable) -> Term {
        // Tokens that trim to nothing carry no value at all
        if token.trim().is_empty() {
            return Term::Null;
        }

        // Already a language-tagged literal
        if token.starts_with('\'') && token.contains("'@") {
            return Term::Literal(token.to_string());
        }

        // A real URI
        if token.starts_with("http") {
            return Term::Uri(token.to_string());
        }

        // A name under a registered prefix
        if let Some((short, _)) = token.split_once(':')
            && prefixes.is_known(short)
        {
            return Term::Prefixed(token.to_string());
        }

        // An already quoted value
        if (token.starts_with('\'') && token.ends_with('\''))
            || (token.starts_with('"') && token.ends_with('"'))
        {
            return Term::Literal(token.to_string());
        }

        // The rdf:type shorthand
        if token == "a" {
            return Term::Keyword;
        }

        // A variable
        if token.starts_with('?') {
            return Term::Variable(token.to_string());
        }

        // Finally, it should be a URI under some other scheme; brackets
        // are stripped here and re-added at render time
        let uri = token.trim();
        let uri = uri.strip_prefix('<').unwrap_or(uri);
        let uri = uri.strip_suffix('>').unwrap_or(uri);
        Term::Uri(uri.to_string())
    }

    /// Surface syntax for this term, or `None` for [`Term::Null`].
    pub fn render(&self) -> Option<String> {
        match self {
            Term::Uri(uri) => Some(format!("<{uri}>")),
            Term::Prefixed(name) => Some(name.clone()),
            Term::Literal(text) => Some(text.clone()),
            Term::Variable(name) => Some(name.clone()),
            Term::Keyword => Some("a".to_string()),
            Term::Null => None,
        }
    }
}

/// Render a triple as a SPARQL statement line.
///
/// A Null object means an optional column was absent: the triple is dropped
/// (`Ok(None)`). A Null subject or predicate alongside a present object
/// cannot be intentional and fails with the offending triple attached.
pub(crate) fn render_triple(triple: &Triple, prefixes: &PrefixTable) -> Result<Option<String>> {
    let subject = Term::classify(&triple.subject, prefixes).render();
    let predicate = Term::classify(&triple.predicate, prefixes).render();
    let object = Term::classify(&triple.object, prefixes).render();

    match (subject, predicate, object) {
        (Some(subject), Some(predicate), Some(object)) => {
            Ok(Some(format!("{subject} {predicate} {object} .")))
        }
        (_, _, None) => Ok(None),
        _ => Err(TripleStoreError::TripleEncoding {
            triple: format!(
                "({}, {}, {})",
                triple.subject, triple.predicate, triple.object
            ),
        }),
    }
}

/// Build a single-quoted literal from a raw string, escaping backslashes
/// and single quotes, with an optional language tag.
pub fn to_literal(value: &str, language: Option<&str>) -> String {
    let escaped = value.trim().replace('\\', "\\\\").replace('\'', "\\'");
    match language {
        Some(language) => format!("'{escaped}'@{language}"),
        None => format!("'{escaped}'"),
    }
}
