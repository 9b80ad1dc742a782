//! View-facing load operations over the catalog store.
//!
//! Each view issues exactly one load per mount (or per identifier
//! change); results commit to view state only while the load's
//! [`LoadTicket`] is still live, so a stale response can never render
//! under a newer identifier's header.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::catalog::{sort_newest_first, Category, Product};
use crate::store::{collections, CatalogStore, StoreError};

/// Terminal failure states, handled locally at the view that issued
/// the fetch. None of these retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The identifier does not resolve to a record.
    #[error("not found")]
    NotFound,
    /// The product view was entered without a prior handoff write.
    #[error("no product identifier was provided")]
    MissingIdentifier,
    /// Network or store failure.
    #[error("load failed: {0}")]
    Store(String),
}

impl From<StoreError> for LoadError {
    fn from(err: StoreError) -> Self {
        LoadError::Store(err.0)
    }
}

/// Everything the category detail view needs, loaded as a unit.
/// There is no partial-success state: either both halves are present
/// or the view stays in loading/error.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDetail {
    pub category: Category,
    /// Unordered; the store query requests no sort.
    pub products: Vec<Product>,
}

/// Fetch one category by id, then all products whose `category` field
/// equals its name. The product query is never issued when the
/// category is absent.
pub async fn load_category_detail<S: CatalogStore>(
    store: &S,
    category_id: &str,
) -> Result<CategoryDetail, LoadError> {
    let rec = store
        .get_record(collections::CATEGORIES, category_id)
        .await?
        .ok_or(LoadError::NotFound)?;
    let category = Category::from_record(&rec);

    // Equality filter only; no orderBy keeps the store free of a
    // composite-index requirement. Result order is store-defined.
    let product_recs = store
        .query_equals(collections::PRODUCTS, "category", &category.name)
        .await?;
    let products = product_recs.iter().map(Product::from_record).collect();

    Ok(CategoryDetail { category, products })
}

/// Fetch every category, newest first.
pub async fn load_categories<S: CatalogStore>(
    store: &S,
) -> Result<Vec<Category>, LoadError> {
    let recs = store.list_all(collections::CATEGORIES).await?;
    let mut categories: Vec<Category> = recs.iter().map(Category::from_record).collect();
    sort_newest_first(&mut categories);
    Ok(categories)
}

/// Fetch a single product. `None` or a blank identifier fails fast
/// with `MissingIdentifier` before any store call; an identifier that
/// is present but unknown to the store is the distinct `NotFound`.
pub async fn load_product<S: CatalogStore>(
    store: &S,
    product_id: Option<&str>,
) -> Result<Product, LoadError> {
    let id = product_id
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(LoadError::MissingIdentifier)?;
    let rec = store
        .get_record(collections::PRODUCTS, id)
        .await?
        .ok_or(LoadError::NotFound)?;
    Ok(Product::from_record(&rec))
}

/// Per-view liveness registry for in-flight loads.
///
/// Minting a ticket invalidates every ticket minted before it. A load
/// captures its ticket at invocation and checks [`LoadTicket::is_live`]
/// before committing results, so rapid re-navigation discards the
/// stale response. Single-threaded by construction; the whole UI is
/// cooperative.
#[derive(Debug, Clone, Default)]
pub struct NavigationGuard {
    current: Rc<Cell<u64>>,
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, invalidating all earlier tickets.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.current.get() + 1;
        self.current.set(generation);
        LoadTicket {
            generation,
            current: Rc::clone(&self.current),
        }
    }

    /// Invalidate every outstanding ticket without starting a load.
    /// Called on unmount.
    pub fn cancel_all(&self) {
        self.current.set(self.current.get() + 1);
    }
}

/// Liveness token for one load. See [`NavigationGuard`].
#[derive(Debug, Clone)]
pub struct LoadTicket {
    generation: u64,
    current: Rc<Cell<u64>>,
}

impl LoadTicket {
    pub fn is_live(&self) -> bool {
        self.generation == self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Value};
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn catalog() -> MemoryStore {
        let mut s = MemoryStore::new();
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        s.insert(
            collections::CATEGORIES,
            Record::new("catA")
                .with("name", Value::Str("Sparklers".into()))
                .with("createdAt", Value::Timestamp(t1)),
        );
        s.insert(
            collections::CATEGORIES,
            Record::new("catB")
                .with("name", Value::Str("Fountains".into()))
                .with("createdAt", Value::Timestamp(t2)),
        );
        s.insert(
            collections::PRODUCTS,
            Record::new("p1")
                .with("name", Value::Str("Sparkler Gold".into()))
                .with("category", Value::Str("Sparklers".into())),
        );
        s.insert(
            collections::PRODUCTS,
            Record::new("p2")
                .with("name", Value::Str("Sparkler Green".into()))
                .with("category", Value::Str("Sparklers".into())),
        );
        s.insert(
            collections::PRODUCTS,
            Record::new("p3")
                .with("name", Value::Str("Fountain Red".into()))
                .with("category", Value::Str("Fountains".into())),
        );
        s
    }

    /// Wrapper that counts store calls, to assert which operations a
    /// loader issued.
    struct CountingStore {
        inner: MemoryStore,
        gets: RefCell<u32>,
        queries: RefCell<u32>,
        lists: RefCell<u32>,
    }

    impl CountingStore {
        fn new(inner: MemoryStore) -> Self {
            CountingStore {
                inner,
                gets: RefCell::new(0),
                queries: RefCell::new(0),
                lists: RefCell::new(0),
            }
        }
    }

    impl CatalogStore for CountingStore {
        async fn get_record(
            &self,
            collection: &str,
            id: &str,
        ) -> Result<Option<Record>, StoreError> {
            *self.gets.borrow_mut() += 1;
            self.inner.get_record(collection, id).await
        }

        async fn query_equals(
            &self,
            collection: &str,
            field: &str,
            value: &str,
        ) -> Result<Vec<Record>, StoreError> {
            *self.queries.borrow_mut() += 1;
            self.inner.query_equals(collection, field, value).await
        }

        async fn list_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
            *self.lists.borrow_mut() += 1;
            self.inner.list_all(collection).await
        }
    }

    /// Store that always fails, for error-path tests.
    struct BrokenStore;

    impl CatalogStore for BrokenStore {
        async fn get_record(
            &self,
            _collection: &str,
            _id: &str,
        ) -> Result<Option<Record>, StoreError> {
            Err(StoreError::new("connection refused"))
        }

        async fn query_equals(
            &self,
            _collection: &str,
            _field: &str,
            _value: &str,
        ) -> Result<Vec<Record>, StoreError> {
            Err(StoreError::new("connection refused"))
        }

        async fn list_all(&self, _collection: &str) -> Result<Vec<Record>, StoreError> {
            Err(StoreError::new("connection refused"))
        }
    }

    #[test]
    fn category_detail_joins_products_by_name() {
        let store = catalog();
        let detail = block_on(load_category_detail(&store, "catA")).unwrap();
        assert_eq!(detail.category.name, "Sparklers");

        let mut ids: Vec<_> = detail.products.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["p1", "p2"]);
    }

    #[test]
    fn absent_category_is_not_found_and_skips_product_query() {
        let store = CountingStore::new(catalog());
        let err = block_on(load_category_detail(&store, "nope")).unwrap_err();
        assert_eq!(err, LoadError::NotFound);
        assert_eq!(*store.gets.borrow(), 1);
        assert_eq!(*store.queries.borrow(), 0);
        assert_eq!(*store.lists.borrow(), 0);
    }

    #[test]
    fn renamed_category_yields_empty_products_not_error() {
        let mut store = catalog();
        store.insert(
            collections::CATEGORIES,
            Record::new("catC").with("name", Value::Str("Rockets".into())),
        );
        let detail = block_on(load_category_detail(&store, "catC")).unwrap();
        assert!(detail.products.is_empty());
    }

    #[test]
    fn store_failure_surfaces_as_load_error() {
        let err = block_on(load_category_detail(&BrokenStore, "catA")).unwrap_err();
        assert!(matches!(err, LoadError::Store(_)));
        let err = block_on(load_categories(&BrokenStore)).unwrap_err();
        assert!(matches!(err, LoadError::Store(_)));
    }

    #[test]
    fn categories_load_newest_first() {
        let store = catalog();
        let cats = block_on(load_categories(&store)).unwrap();
        let ids: Vec<_> = cats.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["catB", "catA"]);
    }

    #[test]
    fn missing_product_identifier_fails_before_any_fetch() {
        let store = CountingStore::new(catalog());
        let err = block_on(load_product(&store, None)).unwrap_err();
        assert_eq!(err, LoadError::MissingIdentifier);
        let err = block_on(load_product(&store, Some("  "))).unwrap_err();
        assert_eq!(err, LoadError::MissingIdentifier);
        assert_eq!(*store.gets.borrow(), 0);
    }

    #[test]
    fn unknown_product_is_not_found() {
        let store = catalog();
        let err = block_on(load_product(&store, Some("p9"))).unwrap_err();
        assert_eq!(err, LoadError::NotFound);

        let product = block_on(load_product(&store, Some("p1"))).unwrap();
        assert_eq!(product.name, "Sparkler Gold");
    }

    #[test]
    fn newer_ticket_invalidates_older_loads() {
        let store = catalog();
        let guard = NavigationGuard::new();

        // Navigation to catA starts, then the user clicks through to
        // catB before catA resolves.
        let ticket_a = guard.begin();
        let ticket_b = guard.begin();

        let mut visible: Option<CategoryDetail> = None;

        // catA's response arrives late; its ticket is stale, so the
        // commit is skipped.
        let detail_a = block_on(load_category_detail(&store, "catA")).unwrap();
        if ticket_a.is_live() {
            visible = Some(detail_a);
        }
        assert!(visible.is_none());

        let detail_b = block_on(load_category_detail(&store, "catB")).unwrap();
        if ticket_b.is_live() {
            visible = Some(detail_b);
        }
        assert_eq!(visible.unwrap().category.name, "Fountains");
    }

    #[test]
    fn cancel_all_kills_outstanding_tickets() {
        let guard = NavigationGuard::new();
        let ticket = guard.begin();
        assert!(ticket.is_live());
        guard.cancel_all();
        assert!(!ticket.is_live());
    }
}
