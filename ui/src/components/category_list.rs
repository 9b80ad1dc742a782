use dioxus::prelude::*;

use glimmer_common::catalog::Category;
use glimmer_common::loader::load_categories;

use super::catalog_client::use_catalog;

/// The selectable category grid on the landing page.
///
/// Fetches every category once per mount, newest first. A fetch
/// failure is logged and leaves the grid empty; there is no error
/// banner on the landing page.
#[component]
pub fn CategoryListView(on_select: EventHandler<String>) -> Element {
    let catalog = use_catalog();
    let mut categories = use_signal(Vec::<Category>::new);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        let catalog = catalog.clone();
        spawn(async move {
            match load_categories(&catalog).await {
                Ok(cats) => categories.set(cats),
                Err(e) => tracing::error!("failed to load categories: {e}"),
            }
            loading.set(false);
        });
    });

    let is_loading = *loading.read();
    let cards: Vec<Category> = categories.read().clone();

    rsx! {
        section { id: "categories", class: "category-grid-section",
            div { class: "section-heading",
                h2 { "Our Categories" }
                p {
                    "Discover our range of premium sparklers and fireworks, "
                    "crafted to make every celebration unforgettable."
                }
            }
            div { class: "category-grid",
                if is_loading {
                    p { class: "empty-state", "Loading categories..." }
                } else if cards.is_empty() {
                    p { class: "empty-state", "No categories found." }
                } else {
                    {cards.into_iter().map(|category| {
                        let category_id = category.id.clone();
                        rsx! {
                            div { class: "category-card",
                                key: "{category.id}",
                                onclick: move |_| on_select.call(category_id.clone()),
                                div { class: "category-card-image",
                                    img { src: "{category.image}", alt: "{category.name}" }
                                    div { class: "category-card-tint {category.color}" }
                                }
                                div { class: "category-card-body",
                                    h3 { "{category.name}" }
                                    p { title: "{category.description}", "{category.description}" }
                                    span { class: "explore-link", "Explore Collection →" }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
