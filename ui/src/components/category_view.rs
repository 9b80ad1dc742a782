use dioxus::prelude::*;

use glimmer_common::catalog::{filter_by_name, Product};
use glimmer_common::loader::{
    load_category_detail, CategoryDetail, LoadError, NavigationGuard,
};

use super::catalog_client::use_catalog;

/// Layout flag only; the underlying data is identical in both modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ViewMode {
    Grid,
    List,
}

#[component]
pub fn CategoryView(
    category_id: ReadOnlySignal<String>,
    on_back: EventHandler<()>,
    on_product_selected: EventHandler<String>,
) -> Element {
    let catalog = use_catalog();
    let guard = use_hook(NavigationGuard::new);
    let mut detail = use_signal(|| None::<CategoryDetail>);
    let mut error = use_signal(|| None::<LoadError>);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut view_mode = use_signal(|| ViewMode::Grid);

    // Unmounting invalidates any in-flight load.
    use_drop({
        let guard = guard.clone();
        move || guard.cancel_all()
    });

    // Runs on mount and again whenever the identifier changes. The
    // ticket makes sure a stale response never renders under a newer
    // category's header.
    use_effect(move || {
        let id = category_id();
        let ticket = guard.begin();
        let catalog = catalog.clone();
        loading.set(true);
        error.set(None);
        spawn(async move {
            let result = load_category_detail(&catalog, &id).await;
            if !ticket.is_live() {
                tracing::debug!("discarding stale load for category {id}");
                return;
            }
            match result {
                Ok(loaded) => detail.set(Some(loaded)),
                Err(e) => {
                    detail.set(None);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    if *loading.read() {
        return rsx! {
            div { class: "view-state", p { "Loading category…" } }
        };
    }

    let Some(loaded) = detail.read().clone() else {
        let heading = failure_heading(error.read().as_ref());
        let detail_msg = error
            .read()
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_default();
        return rsx! {
            div { class: "view-state error",
                h2 { "{heading}" }
                if !detail_msg.is_empty() {
                    p { "{detail_msg}" }
                }
                button { onclick: move |_| on_back.call(()), "← Go Back" }
            }
        };
    };

    let category = loaded.category;
    let glyph = category.icon.glyph();
    let product_count = loaded.products.len();
    // Recomputed on every keystroke.
    let visible: Vec<Product> = filter_by_name(&loaded.products, &search.read())
        .into_iter()
        .cloned()
        .collect();

    let mode = *view_mode.read();
    let (grid_active, list_active) = match mode {
        ViewMode::Grid => ("active", ""),
        ViewMode::List => ("", "active"),
    };
    let products_class = match mode {
        ViewMode::Grid => "product-grid",
        ViewMode::List => "product-list",
    };

    rsx! {
        div { class: "category-view",
            section { class: "category-hero",
                img { class: "hero-backdrop", src: "{category.image}", alt: "{category.name}" }
                div { class: "hero-overlay",
                    button { class: "back-link", onclick: move |_| on_back.call(()),
                        "← Back to Categories"
                    }
                    div { class: "category-heading",
                        span { class: "category-glyph {category.color}", "{glyph}" }
                        div {
                            h1 { "{category.name}" }
                            p { "{category.description}" }
                        }
                    }
                    div { class: "category-badges",
                        span { class: "badge", "{product_count} Products Available" }
                        span { class: "badge", "Premium Quality" }
                        span { class: "badge", "Glimmer Brand" }
                    }
                }
            }

            section { class: "category-controls",
                input {
                    r#type: "text",
                    placeholder: "Search products...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                div { class: "view-toggle",
                    button {
                        class: "toggle-grid {grid_active}",
                        onclick: move |_| view_mode.set(ViewMode::Grid),
                        "Grid"
                    }
                    button {
                        class: "toggle-list {list_active}",
                        onclick: move |_| view_mode.set(ViewMode::List),
                        "List"
                    }
                }
            }

            section { class: "{products_class}",
                if visible.is_empty() {
                    p { class: "empty-state", "No products match your search." }
                } else {
                    {visible.into_iter().map(|product| {
                        let key = product.id.clone();
                        rsx! {
                            ProductCard {
                                key: "{key}",
                                product,
                                color: category.color.clone(),
                                on_open: on_product_selected,
                            }
                        }
                    })}
                }
            }
        }
    }
}

/// Heading for the terminal state. A store failure is not the same
/// thing as an absent category and must not claim to be.
fn failure_heading(err: Option<&LoadError>) -> &'static str {
    match err {
        Some(LoadError::Store(_)) => "Something went wrong",
        Some(LoadError::NotFound) | Some(LoadError::MissingIdentifier) | None => {
            "Category not found"
        }
    }
}

#[component]
fn ProductCard(product: Product, color: String, on_open: EventHandler<String>) -> Element {
    let product_id = product.id.clone();
    let cover = product.cover_image().unwrap_or_default().to_string();
    let price = product.price.clone().unwrap_or_default();

    rsx! {
        div { class: "product-card",
            div { class: "product-card-image",
                img { src: "{cover}", alt: "{product.name}" }
                if product.popular {
                    span { class: "badge popular {color}", "★ Popular" }
                }
            }
            div { class: "product-card-body",
                h4 { title: "{product.name}", "{product.name}" }
                div { class: "product-card-row",
                    span { class: "price", "{price}" }
                    button {
                        class: "view-details {color}",
                        onclick: move |_| on_open.call(product_id.clone()),
                        "View Details"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_failure_heading_is_not_a_not_found() {
        let err = LoadError::Store("connection refused".into());
        assert_eq!(failure_heading(Some(&err)), "Something went wrong");
        assert_eq!(failure_heading(Some(&LoadError::NotFound)), "Category not found");
        assert_eq!(failure_heading(None), "Category not found");
    }
}
