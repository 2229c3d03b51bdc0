//! Decoding of SPARQL JSON result sets into typed rows.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TripleStoreError},
    prefix::PrefixTable,
};

const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// A decoded binding value: URIs come back compacted to their prefixed
/// form, xsd:integer literals as integers, everything else as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BindingValue {
    Text(String),
    Integer(i64),
}

impl BindingValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            BindingValue::Text(text) => Some(text),
            BindingValue::Integer(_) => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            BindingValue::Integer(value) => Some(*value),
            BindingValue::Text(_) => None,
        }
    }
}

/// One result row, keyed by column name. Created per response and handed
/// to the caller; nothing is persisted.
pub type ResultRow = HashMap<String, BindingValue>;

#[derive(Deserialize)]
struct SelectResponse {
    results: Option<SelectResults>,
}

#[derive(Deserialize)]
struct SelectResults {
    bindings: Option<Vec<HashMap<String, RawBinding>>>,
}

#[derive(Deserialize)]
struct RawBinding {
    #[serde(rename = "type")]
    kind: Option<String>,
    datatype: Option<String>,
    value: String,
}

/// Decode a response body into rows, or `None` when the body carries no
/// bindings (e.g. a mutation acknowledgement).
pub(crate) fn decode_rows(json: &str, prefixes: &PrefixTable) -> Result<Option<Vec<ResultRow>>> {
    let response: SelectResponse =
        serde_json::from_str(json).map_err(|e| TripleStoreError::Parse {
            reason: format!("Failed to parse SELECT response: {e}"),
        })?;

    let Some(bindings) = response.results.and_then(|results| results.bindings) else {
        return Ok(None);
    };

    let mut rows = Vec::with_capacity(bindings.len());
    for binding in bindings {
        let mut row = ResultRow::new();
        for (column, raw) in binding {
            row.insert(column, decode_value(raw, prefixes)?);
        }
        rows.push(row);
    }

    Ok(Some(rows))
}

fn decode_value(raw: RawBinding, prefixes: &PrefixTable) -> Result<BindingValue> {
    match raw.kind.as_deref() {
        Some("uri") => Ok(BindingValue::Text(prefixes.shorten(&raw.value))),
        Some("literal") if raw.datatype.as_deref() == Some(XSD_INTEGER) => {
            let value = raw.value.parse().map_err(|_| TripleStoreError::Parse {
                reason: format!("xsd:integer literal is not an integer: {}", raw.value),
            })?;
            Ok(BindingValue::Integer(value))
        }
        _ => Ok(BindingValue::Text(raw.value)),
    }
}
