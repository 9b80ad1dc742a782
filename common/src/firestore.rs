//! Firestore REST v1 wire format.
//!
//! The catalog lives in a managed Firestore project; the browser
//! reaches it over the REST surface (document get, collection list,
//! `:runQuery`). This module decodes the JSON envelopes into
//! [`Record`]s and builds the one query body we ever send. The HTTP
//! plumbing itself lives in the UI crate.

use chrono::{DateTime, Utc};
use serde_json::{json, Value as Json};

use crate::record::{Record, Value};
use crate::store::StoreError;

/// Decode a Firestore document object into a [`Record`].
///
/// The document id is the last path segment of the `name` field.
/// Unknown value kinds (maps, references, geo points) are skipped;
/// the catalog schema never uses them.
pub fn decode_document(doc: &Json) -> Result<Record, StoreError> {
    let name = doc
        .get("name")
        .and_then(Json::as_str)
        .ok_or_else(|| StoreError::new("document missing name"))?;
    let id = name
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| StoreError::new("document name has no id segment"))?;

    let mut record = Record::new(id);
    if let Some(fields) = doc.get("fields").and_then(Json::as_object) {
        for (field, encoded) in fields {
            if let Some(value) = decode_value(encoded) {
                record.set(field.clone(), value);
            }
        }
    }
    Ok(record)
}

fn decode_value(encoded: &Json) -> Option<Value> {
    let obj = encoded.as_object()?;
    if let Some(s) = obj.get("stringValue").and_then(Json::as_str) {
        return Some(Value::Str(s.to_string()));
    }
    // integerValue is string-encoded on the wire.
    if let Some(s) = obj.get("integerValue").and_then(Json::as_str) {
        return s.parse::<i64>().ok().map(|n| Value::Num(n as f64));
    }
    if let Some(n) = obj.get("doubleValue").and_then(Json::as_f64) {
        return Some(Value::Num(n));
    }
    if let Some(b) = obj.get("booleanValue").and_then(Json::as_bool) {
        return Some(Value::Bool(b));
    }
    if let Some(s) = obj.get("timestampValue").and_then(Json::as_str) {
        return DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|t| Value::Timestamp(t.with_timezone(&Utc)));
    }
    if let Some(arr) = obj.get("arrayValue") {
        let items = arr
            .get("values")
            .and_then(Json::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.get("stringValue").and_then(Json::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        return Some(Value::StrList(items));
    }
    None
}

/// Decode a collection-list response (`GET .../{collection}`).
/// An absent `documents` key means the collection is empty.
pub fn decode_document_list(body: &Json) -> Result<Vec<Record>, StoreError> {
    match body.get("documents").and_then(Json::as_array) {
        Some(docs) => docs.iter().map(decode_document).collect(),
        None => Ok(Vec::new()),
    }
}

/// Decode a `:runQuery` response: an array of rows, each of which may
/// or may not carry a `document` (the trailing row often holds only a
/// read time).
pub fn decode_query_results(body: &Json) -> Result<Vec<Record>, StoreError> {
    let rows = body
        .as_array()
        .ok_or_else(|| StoreError::new("runQuery response is not an array"))?;
    rows.iter()
        .filter_map(|row| row.get("document"))
        .map(decode_document)
        .collect()
}

/// Build the `:runQuery` body for a single string-equality filter.
/// Deliberately no `orderBy`: that would require a composite index on
/// the store, and the consumer treats the result as unordered anyway.
pub fn equality_query(collection: &str, field: &str, value: &str) -> Json {
    json!({
        "structuredQuery": {
            "from": [{ "collectionId": collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": field },
                    "op": "EQUAL",
                    "value": { "stringValue": value }
                }
            }
        }
    })
}
