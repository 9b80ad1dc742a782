//! Catalog store wiring for the UI.
//!
//! `Catalog::from_env()` picks the remote Firestore project configured
//! at compile time via `GLIMMER_FIRESTORE_PROJECT` (and optionally
//! `GLIMMER_FIRESTORE_API_KEY`). With the `example-data` feature and
//! no project configured, a seeded in-memory catalog serves the same
//! three operations, so the whole UI runs offline.

use dioxus::prelude::*;

use glimmer_common::firestore;
use glimmer_common::record::Record;
use glimmer_common::store::{CatalogStore, MemoryStore, StoreError};

/// The catalog backend for this session, chosen once at startup and
/// shared through context.
#[derive(Clone, Debug)]
pub enum Catalog {
    Remote(FirestoreClient),
    Memory(MemoryStore),
}

impl Catalog {
    pub fn from_env() -> Self {
        if let Some(client) = FirestoreClient::from_env() {
            return Catalog::Remote(client);
        }
        #[cfg(feature = "example-data")]
        {
            tracing::debug!("no Firestore project configured; serving example catalog");
            Catalog::Memory(example_catalog())
        }
        #[cfg(not(feature = "example-data"))]
        {
            tracing::error!("no Firestore project configured and example-data is disabled");
            Catalog::Memory(MemoryStore::new())
        }
    }
}

impl CatalogStore for Catalog {
    async fn get_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StoreError> {
        match self {
            Catalog::Remote(client) => client.get_record(collection, id).await,
            Catalog::Memory(store) => store.get_record(collection, id).await,
        }
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        match self {
            Catalog::Remote(client) => client.query_equals(collection, field, value).await,
            Catalog::Memory(store) => store.query_equals(collection, field, value).await,
        }
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        match self {
            Catalog::Remote(client) => client.list_all(collection).await,
            Catalog::Memory(store) => store.list_all(collection).await,
        }
    }
}

/// Get the session's catalog backend from context.
pub fn use_catalog() -> Catalog {
    use_context::<Catalog>()
}

// ─── Firestore REST client ───────────────────────────────────────────────────

/// Read-only client for the Firestore REST v1 surface. Only functional
/// in WASM builds; native builds get typed stubs.
#[derive(Clone, Debug)]
pub struct FirestoreClient {
    project_id: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    /// Create a client from compile-time env vars. Returns None when
    /// no project id is configured.
    pub fn from_env() -> Option<Self> {
        let project_id = option_env!("GLIMMER_FIRESTORE_PROJECT")
            .filter(|p| !p.is_empty())?
            .to_string();
        let api_key = option_env!("GLIMMER_FIRESTORE_API_KEY")
            .filter(|k| !k.is_empty())
            .map(String::from);
        Some(FirestoreClient {
            project_id,
            api_key,
        })
    }

    fn documents_url(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// Append the path (and optional query string) to the documents
    /// root, tacking the API key on when configured.
    fn url(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!("{}{}", self.documents_url(), path);
        let mut sep = '?';
        if let Some(q) = query {
            url.push(sep);
            url.push_str(q);
            sep = '&';
        }
        if let Some(key) = &self.api_key {
            url.push(sep);
            url.push_str("key=");
            url.push_str(key);
        }
        url
    }

    fn parse_body(body: &str) -> Result<serde_json::Value, StoreError> {
        serde_json::from_str(body).map_err(|e| StoreError::new(format!("invalid JSON: {e}")))
    }
}

impl CatalogStore for FirestoreClient {
    async fn get_record(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Record>, StoreError> {
        let url = self.url(&format!("/{collection}/{id}"), None);
        let (status, body) = fetch(&url, "GET", None).await?;
        if status == 404 {
            return Ok(None);
        }
        if status >= 400 {
            return Err(StoreError::new(format!(
                "HTTP {status} fetching {collection}/{id}"
            )));
        }
        let doc = Self::parse_body(&body)?;
        Ok(Some(firestore::decode_document(&doc)?))
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        let url = self.url(":runQuery", None);
        let query = firestore::equality_query(collection, field, value);
        let (status, body) = fetch(&url, "POST", Some(query.to_string())).await?;
        if status >= 400 {
            return Err(StoreError::new(format!(
                "HTTP {status} querying {collection}.{field}"
            )));
        }
        firestore::decode_query_results(&Self::parse_body(&body)?)
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Record>, StoreError> {
        // No pagination: the catalog is small and loaded up front.
        let url = self.url(&format!("/{collection}"), Some("pageSize=300"));
        let (status, body) = fetch(&url, "GET", None).await?;
        if status >= 400 {
            return Err(StoreError::new(format!(
                "HTTP {status} listing {collection}"
            )));
        }
        firestore::decode_document_list(&Self::parse_body(&body)?)
    }
}

// ─── HTTP helpers (WASM) ─────────────────────────────────────────────────────

#[cfg(target_family = "wasm")]
async fn fetch(
    url: &str,
    method: &str,
    body: Option<String>,
) -> Result<(u16, String), StoreError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    opts.set_mode(web_sys::RequestMode::Cors);

    if let Some(b) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(&b));
    }

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| StoreError::new(format!("failed to create request: {e:?}")))?;

    if method == "POST" {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| StoreError::new(format!("failed to set header: {e:?}")))?;
    }

    let window = web_sys::window().ok_or_else(|| StoreError::new("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| StoreError::new(format!("fetch failed: {e:?}")))?;

    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| StoreError::new("response is not a Response object"))?;

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| StoreError::new(format!("failed to get text: {e:?}")))?,
    )
    .await
    .map_err(|e| StoreError::new(format!("failed to read body: {e:?}")))?;

    let text_str = text
        .as_string()
        .ok_or_else(|| StoreError::new("response body is not a string"))?;

    Ok((resp.status(), text_str))
}

// Non-WASM stubs for type checking
#[cfg(not(target_family = "wasm"))]
async fn fetch(
    _url: &str,
    _method: &str,
    _body: Option<String>,
) -> Result<(u16, String), StoreError> {
    Err(StoreError::new(
        "remote catalog is only available in WASM builds",
    ))
}

// ─── Example catalog ─────────────────────────────────────────────────────────

/// Seeded catalog for development builds without a remote project.
#[cfg(feature = "example-data")]
fn example_catalog() -> MemoryStore {
    use chrono::TimeZone;
    use chrono::Utc;
    use glimmer_common::record::Value;
    use glimmer_common::store::collections;

    let ts = |y, m, d| {
        Value::Timestamp(
            Utc.with_ymd_and_hms(y, m, d, 9, 0, 0)
                .single()
                .unwrap_or_default(),
        )
    };
    let strs = |items: &[&str]| Value::StrList(items.iter().map(|s| s.to_string()).collect());

    let mut store = MemoryStore::new();

    store.insert(
        collections::CATEGORIES,
        Record::new("sparklers")
            .with("name", Value::Str("Sparklers".into()))
            .with(
                "description",
                Value::Str("Hand-dipped sparklers in gold, green and crackling finishes".into()),
            )
            .with("icon", Value::Str("sparkles".into()))
            .with("color", Value::Str("from-yellow-400 to-orange-500".into()))
            .with("image", Value::Str("/images/cat-sparklers.jpg".into()))
            .with("createdAt", ts(2025, 3, 12)),
    );
    store.insert(
        collections::CATEGORIES,
        Record::new("fountains")
            .with("name", Value::Str("Fountains".into()))
            .with(
                "description",
                Value::Str("Ground fountains with long burn times and layered colors".into()),
            )
            .with("icon", Value::Str("flame".into()))
            .with("color", Value::Str("from-red-400 to-pink-500".into()))
            .with("image", Value::Str("/images/cat-fountains.jpg".into()))
            .with("createdAt", ts(2025, 5, 2)),
    );
    store.insert(
        collections::CATEGORIES,
        Record::new("gift-boxes")
            .with("name", Value::Str("Gift Boxes".into()))
            .with(
                "description",
                Value::Str("Curated assortments for weddings and festival nights".into()),
            )
            .with("icon", Value::Str("sparkles".into()))
            .with("color", Value::Str("from-purple-400 to-blue-500".into()))
            .with("image", Value::Str("/images/cat-gift-boxes.jpg".into()))
            .with("createdAt", ts(2025, 1, 20)),
    );

    store.insert(
        collections::PRODUCTS,
        Record::new("sparkler-gold-30")
            .with("name", Value::Str("Sparkler Gold 30cm".into()))
            .with("category", Value::Str("Sparklers".into()))
            .with("price", Value::Str("₹120".into()))
            .with("offerPrice", Value::Num(99.0))
            .with("originalPrice", Value::Num(120.0))
            .with("rating", Value::Num(4.6))
            .with("popular", Value::Bool(true))
            .with(
                "description",
                Value::Str("Our signature gold sparkler, 90 seconds of steady shimmer".into()),
            )
            .with(
                "images",
                strs(&[
                    "/images/sparkler-gold-1.jpg",
                    "/images/sparkler-gold-2.jpg",
                    "/images/sparkler-gold-3.jpg",
                ]),
            )
            .with("videoUrl", Value::Str("/videos/sparkler-gold.mp4".into()))
            .with(
                "features",
                strs(&[
                    "90 second burn time",
                    "Smokeless formulation",
                    "Bamboo handle",
                ]),
            ),
    );
    store.insert(
        collections::PRODUCTS,
        Record::new("sparkler-green-15")
            .with("name", Value::Str("Sparkler Emerald 15cm".into()))
            .with("category", Value::Str("Sparklers".into()))
            .with("price", Value::Str("₹80".into()))
            .with("rating", Value::Num(4.2))
            .with("images", strs(&["/images/sparkler-green-1.jpg"]))
            .with(
                "features",
                strs(&["Deep green flame", "Child-safe length"]),
            ),
    );
    store.insert(
        collections::PRODUCTS,
        Record::new("fountain-red")
            .with("name", Value::Str("Fountain Crimson".into()))
            .with("category", Value::Str("Fountains".into()))
            .with("price", Value::Str("₹450".into()))
            .with("offerPrice", Value::Num(399.0))
            .with("originalPrice", Value::Num(450.0))
            .with("rating", Value::Num(4.8))
            .with("popular", Value::Bool(true))
            .with("images", strs(&["/images/fountain-red-1.jpg"]))
            .with("videoUrl", Value::Str("/videos/fountain-red.mp4".into()))
            .with(
                "features",
                strs(&["2 minute display", "Three color stages", "Low noise"]),
            ),
    );
    store.insert(
        collections::PRODUCTS,
        Record::new("gift-box-festival")
            .with("name", Value::Str("Festival Night Gift Box".into()))
            .with("category", Value::Str("Gift Boxes".into()))
            .with("price", Value::Str("₹1499".into()))
            .with("rating", Value::Num(4.4))
            .with("images", strs(&["/images/gift-box-1.jpg"]))
            .with(
                "features",
                strs(&["24 assorted pieces", "Reusable keepsake box"]),
            ),
    );

    store
}
