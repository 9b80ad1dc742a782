use dioxus::prelude::*;

use super::about::AboutView;
use super::catalog_client::Catalog;
use super::category_list::CategoryListView;
use super::category_view::CategoryView;
use super::handoff;
use super::hero::Hero;
use super::product_view::ProductView;
use super::why_choose::WhyChooseUs;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/category/:id")]
    CategoryPage { id: String },
    #[route("/product")]
    ProductPage {},
    #[route("/about")]
    About {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(Catalog::from_env);

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "glimmer-app",
            header { class: "app-header",
                div { class: "header-top",
                    h1 { "GLIMMER" }
                    span { class: "tagline", "Premium Sparklers & Fireworks" }
                }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Home"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::About {}); },
                        "About Us"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: landing page. Hero, the category grid, then the
/// benefits section.
#[component]
fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        Hero {}
        CategoryListView {
            on_select: move |category_id: String| {
                nav.push(Route::CategoryPage { id: category_id });
            },
        }
        WhyChooseUs {}
    }
}

/// Route component: one category's product listing by store id.
#[component]
fn CategoryPage(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        CategoryView {
            category_id: id,
            on_back: move |_| { nav.push(Route::Home {}); },
            on_product_selected: move |product_id: String| {
                // Single-slot handoff: written here, consumed once when
                // the product view mounts.
                handoff::stash(&product_id);
                nav.push(Route::ProductPage {});
            },
        }
    }
}

/// Route component: product detail. Takes no route parameter; the
/// pending product id travels through the session handoff slot.
#[component]
fn ProductPage() -> Element {
    rsx! { ProductView {} }
}

/// Route component: the about page.
#[component]
fn About() -> Element {
    rsx! { AboutView {} }
}
