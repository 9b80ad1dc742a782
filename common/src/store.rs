use std::collections::BTreeMap;

use thiserror::Error;

use crate::record::Record;

/// Collection names in the remote catalog store.
pub mod collections {
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCTS: &str = "products";
}

/// A network or protocol failure talking to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(msg: impl Into<String>) -> Self {
        StoreError(msg.into())
    }
}

/// Read-only boundary to the remote catalog store.
///
/// Three single-shot operations, all issued fresh on every view mount.
/// `query_equals` makes no ordering promise; consumers must treat the
/// result as an unordered set.
#[allow(async_fn_in_trait)]
pub trait CatalogStore {
    async fn get_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StoreError>;

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError>;

    async fn list_all(&self, collection: &str) -> Result<Vec<Record>, StoreError>;
}

/// In-memory store. Backs unit tests and the `example-data` build of
/// the UI when no remote project is configured.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: BTreeMap<String, Vec<Record>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: &str, record: Record) {
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(record);
    }

    fn records(&self, collection: &str) -> &[Record] {
        self.collections
            .get(collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl CatalogStore for MemoryStore {
    async fn get_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StoreError> {
        Ok(self
            .records(collection)
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        Ok(self
            .records(collection)
            .iter()
            .filter(|r| r.str(field) == Some(value))
            .cloned()
            .collect())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        Ok(self.records(collection).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Value;
    use futures::executor::block_on;

    fn store() -> MemoryStore {
        let mut s = MemoryStore::new();
        s.insert(
            collections::PRODUCTS,
            Record::new("p1")
                .with("name", Value::Str("Sparkler Gold".into()))
                .with("category", Value::Str("Sparklers".into())),
        );
        s.insert(
            collections::PRODUCTS,
            Record::new("p2")
                .with("name", Value::Str("Fountain Red".into()))
                .with("category", Value::Str("Fountains".into())),
        );
        s
    }

    #[test]
    fn get_record_by_id() {
        let s = store();
        let rec = block_on(s.get_record(collections::PRODUCTS, "p1"))
            .unwrap()
            .unwrap();
        assert_eq!(rec.str("name"), Some("Sparkler Gold"));
        assert!(block_on(s.get_record(collections::PRODUCTS, "nope"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn query_equals_filters() {
        let s = store();
        let hits =
            block_on(s.query_equals(collections::PRODUCTS, "category", "Sparklers")).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "p1");
    }

    #[test]
    fn list_all_unknown_collection_is_empty() {
        let s = store();
        assert!(block_on(s.list_all("nothing")).unwrap().is_empty());
        assert_eq!(block_on(s.list_all(collections::PRODUCTS)).unwrap().len(), 2);
    }
}
