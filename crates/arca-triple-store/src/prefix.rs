//! Namespace prefixes and prefix-aware URI compaction/expansion.

use serde::{Deserialize, Serialize};

/// Short name of the prefix reserved for the default namespace.
/// It is handled implicitly by the store and never declared in headers.
pub const BASE_PREFIX: &str = "base";

/// A (short name, long URI) namespace pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefix {
    pub short: String,
    pub long: String,
}

impl Prefix {
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            long: long.into(),
        }
    }

    /// SPARQL declaration line for this prefix.
    pub fn sparql_declaration(&self) -> String {
        format!("PREFIX {}: <{}>", self.short, self.long)
    }

    /// Turtle declaration line for this prefix.
    pub fn turtle_declaration(&self) -> String {
        format!("@prefix {}: <{}> .", self.short, self.long)
    }

    /// Replace the long URI by its short form, if present.
    pub fn shorten(&self, uri: &str) -> String {
        if uri.contains(&self.long) {
            strip_brackets(uri).replace(&self.long, &format!("{}:", self.short))
        } else {
            uri.to_string()
        }
    }

    /// Replace the short form by the full URI, if present.
    pub fn lengthen(&self, short_uri: &str) -> String {
        short_uri.replace(&format!("{}:", self.short), &self.long)
    }
}

fn strip_brackets(uri: &str) -> &str {
    let uri = uri.strip_prefix('<').unwrap_or(uri);
    uri.strip_suffix('>').unwrap_or(uri)
}

/// Ordered set of registered prefixes, fixed at client construction.
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    prefixes: Vec<Prefix>,
}

impl PrefixTable {
    pub fn new(prefixes: Vec<Prefix>) -> Self {
        Self { prefixes }
    }

    /// Whether the given short name is a registered prefix.
    pub fn is_known(&self, short: &str) -> bool {
        self.prefixes.iter().any(|prefix| prefix.short == short)
    }

    /// Compact a full URI to its prefixed form. Surrounding angle brackets
    /// are stripped; the first registered prefix whose long URI matches is
    /// substituted. Without a match the bare URI is returned unchanged.
    pub fn shorten(&self, uri: &str) -> String {
        let bare = strip_brackets(uri);
        for prefix in &self.prefixes {
            if bare.contains(&prefix.long) {
                return bare.replace(&prefix.long, &format!("{}:", prefix.short));
            }
        }
        bare.to_string()
    }

    /// Expand a prefixed name to its full URI. Every registered prefix is
    /// applied in sequence; unmatched input passes through unchanged.
    pub fn expand(&self, short_uri: &str) -> String {
        let mut uri = short_uri.to_string();
        for prefix in &self.prefixes {
            uri = prefix.lengthen(&uri);
        }
        uri
    }

    /// Declaration header prepended to every outgoing statement, one line
    /// per registered prefix in declaration order. The reserved `base`
    /// prefix is excluded.
    pub fn sparql_header(&self) -> String {
        self.prefixes
            .iter()
            .filter(|prefix| prefix.short != BASE_PREFIX)
            .map(Prefix::sparql_declaration)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prefix> {
        self.prefixes.iter()
    }
}
