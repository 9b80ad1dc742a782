use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// A single field value in a store document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    StrList(Vec<String>),
}

/// One document read from the remote store, keyed by an opaque
/// identifier within a named collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub id: String,
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        Record {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: Value) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// String field, if present and string-typed.
    pub fn str(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Numeric field. Accepts a numeric string as well; the store's
    /// content-management side is loose about which it writes.
    pub fn num(&self, field: &str) -> Option<f64> {
        match self.fields.get(field) {
            Some(Value::Num(n)) => Some(*n),
            Some(Value::Str(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn bool(&self, field: &str) -> bool {
        matches!(self.fields.get(field), Some(Value::Bool(true)))
    }

    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        match self.fields.get(field) {
            Some(Value::Timestamp(t)) => Some(*t),
            _ => None,
        }
    }

    pub fn str_list(&self, field: &str) -> &[String] {
        match self.fields.get(field) {
            Some(Value::StrList(items)) => items,
            _ => &[],
        }
    }

    /// Display string for a field that editors sometimes store as a
    /// number and sometimes as text (prices, mostly).
    pub fn display_str(&self, field: &str) -> Option<String> {
        match self.fields.get(field) {
            Some(Value::Str(s)) => Some(s.clone()),
            Some(Value::Num(n)) => Some(format_num(*n)),
            _ => None,
        }
    }
}

/// Format a numeric field for display: integers without a trailing
/// ".0", everything else as-is.
pub(crate) fn format_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn typed_accessors() {
        let rec = Record::new("r1")
            .with("name", Value::Str("Sparkler Gold".into()))
            .with("rating", Value::Num(4.5))
            .with("popular", Value::Bool(true))
            .with(
                "images",
                Value::StrList(vec!["a.jpg".into(), "b.jpg".into()]),
            );

        assert_eq!(rec.str("name"), Some("Sparkler Gold"));
        assert_eq!(rec.num("rating"), Some(4.5));
        assert!(rec.bool("popular"));
        assert_eq!(rec.str_list("images").len(), 2);
    }

    #[test]
    fn missing_fields_are_none_or_empty() {
        let rec = Record::new("r1");
        assert_eq!(rec.str("name"), None);
        assert_eq!(rec.num("rating"), None);
        assert!(!rec.bool("popular"));
        assert!(rec.str_list("images").is_empty());
        assert_eq!(rec.timestamp("createdAt"), None);
    }

    #[test]
    fn num_accepts_numeric_strings() {
        let rec = Record::new("r1").with("order", Value::Str("12".into()));
        assert_eq!(rec.num("order"), Some(12.0));
    }

    #[test]
    fn display_str_formats_numbers() {
        let rec = Record::new("r1")
            .with("price", Value::Num(299.0))
            .with("offerPrice", Value::Num(249.5));
        assert_eq!(rec.display_str("price").as_deref(), Some("299"));
        assert_eq!(rec.display_str("offerPrice").as_deref(), Some("249.5"));
        assert_eq!(rec.display_str("missing"), None);
    }

    #[test]
    fn timestamp_roundtrip() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let rec = Record::new("r1").with("createdAt", Value::Timestamp(t));
        assert_eq!(rec.timestamp("createdAt"), Some(t));
    }
}
