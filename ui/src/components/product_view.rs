use dioxus::prelude::*;

use glimmer_common::catalog::Product;
use glimmer_common::loader::{load_product, LoadError, NavigationGuard};
use glimmer_common::media::{
    FeatureCarousel, MediaMode, MediaState, FEATURE_ROTATE_MS,
};

use super::catalog_client::use_catalog;
use super::decor::ParticleField;
use super::handoff;
use super::timer::sleep_ms;

/// DOM id of the gallery's `<video>` element, used to push play/mute
/// state onto it.
const VIDEO_ELEMENT_ID: &str = "product-video";

#[component]
pub fn ProductView() -> Element {
    let catalog = use_catalog();
    let nav = use_navigator();
    let guard = use_hook(NavigationGuard::new);
    // The handoff slot is consumed exactly once, at mount.
    let product_id = use_hook(handoff::take);
    let mut product = use_signal(|| None::<Product>);
    let mut error = use_signal(|| None::<LoadError>);
    let mut loading = use_signal(|| true);
    let mut media = use_signal(MediaState::initial);
    let mut feature_index = use_signal(|| 0usize);
    let mut rotating = use_signal(|| false);

    use_drop({
        let guard = guard.clone();
        move || guard.cancel_all()
    });

    use_effect({
        let product_id = product_id.clone();
        move || {
            let ticket = guard.begin();
            let catalog = catalog.clone();
            let id = product_id.clone();
            spawn(async move {
                let result = load_product(&catalog, id.as_deref()).await;
                if !ticket.is_live() {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        media.set(MediaState::initial());
                        feature_index.set(0);
                        product.set(Some(loaded));
                    }
                    Err(e) => error.set(Some(e)),
                }
                loading.set(false);
            });
        }
    });

    // Rotate the feature highlight on a fixed interval while mounted.
    // The loop task dies with the component.
    use_effect(move || {
        let len = product
            .read()
            .as_ref()
            .map(|p| p.features.len())
            .unwrap_or(0);
        if len == 0 || *rotating.peek() {
            return;
        }
        rotating.set(true);
        spawn(async move {
            let mut carousel = FeatureCarousel::new(len);
            loop {
                sleep_ms(FEATURE_ROTATE_MS).await;
                feature_index.set(carousel.advance());
            }
        });
    });

    // Push play/mute state onto the video element whenever it changes.
    use_effect(move || {
        let state = *media.read();
        sync_video_element(state);
    });

    if *loading.read() {
        return rsx! {
            div { class: "view-state", p { "Loading product..." } }
        };
    }

    let Some(item) = product.read().clone() else {
        let (heading, message) = match error.read().as_ref() {
            Some(LoadError::MissingIdentifier) => (
                "No product selected",
                "Pick a product from one of our categories first.".to_string(),
            ),
            Some(LoadError::NotFound) => (
                "Product not found",
                "This product is no longer in our catalog.".to_string(),
            ),
            Some(e) => ("Something went wrong", e.to_string()),
            None => ("Product not found", String::new()),
        };
        return rsx! {
            div { class: "view-state error",
                h2 { "{heading}" }
                if !message.is_empty() {
                    p { "{message}" }
                }
                button { onclick: move |_| { nav.go_back(); }, "← Back to Home" }
            }
        };
    };

    let media_now = *media.read();
    let has_video = item.has_video();
    let showing_video = media_now.is_video() && has_video;
    let selected = media_now.selected_image.min(item.images.len().saturating_sub(1));
    let video_url = item.video_url.clone().unwrap_or_default();
    let current_image = item.images.get(selected).cloned().unwrap_or_default();
    let full_stars = item.full_stars();
    let highlight = item.features.get(*feature_index.read()).cloned();

    let (play_playing, play_muted) = match media_now.mode {
        MediaMode::Video { playing, muted } => (playing, muted),
        MediaMode::Photos => (false, true),
    };
    let (photos_active, video_active) = if showing_video {
        ("", "active")
    } else {
        ("active", "")
    };

    rsx! {
        div { class: "product-view",
            ParticleField { count: 20 }

            div { class: "product-header",
                button { onclick: move |_| { nav.go_back(); }, "← Back to Home" }
            }

            div { class: "product-columns",
                // ── Media ──
                div { class: "product-media",
                    div { class: "media-card",
                        if showing_video {
                            div { class: "media-pane",
                                video {
                                    id: VIDEO_ELEMENT_ID,
                                    src: "{video_url}",
                                }
                                div { class: "video-controls",
                                    button {
                                        onclick: move |_| media.with_mut(|m| m.toggle_play()),
                                        if play_playing { "Pause" } else { "Play" }
                                    }
                                    button {
                                        onclick: move |_| media.with_mut(|m| m.toggle_mute()),
                                        if play_muted { "Unmute" } else { "Mute" }
                                    }
                                }
                            }
                        } else {
                            div { class: "media-pane",
                                if item.images.is_empty() {
                                    div { class: "empty-state", "No images available" }
                                } else {
                                    img { src: "{current_image}", alt: "{item.name}" }
                                }
                            }
                        }
                    }

                    if has_video {
                        div { class: "media-toggle",
                            button {
                                class: "toggle-photos {photos_active}",
                                onclick: move |_| media.with_mut(|m| m.show_photos()),
                                "Photos"
                            }
                            button {
                                class: "toggle-video {video_active}",
                                onclick: move |_| media.with_mut(|m| m.show_video()),
                                "Video"
                            }
                        }
                    }

                    if !showing_video && !item.images.is_empty() {
                        div { class: "thumbnail-row",
                            {item.images.iter().enumerate().map(|(index, img)| {
                                let selected_class = if index == selected { "selected" } else { "" };
                                let ordinal = index + 1;
                                rsx! {
                                    button {
                                        key: "{index}",
                                        class: "thumbnail {selected_class}",
                                        onclick: move |_| media.with_mut(|m| m.select_image(index)),
                                        img { src: "{img}", alt: "{item.name} {ordinal}" }
                                    }
                                }
                            })}
                        }
                    }
                }

                // ── Details ──
                div { class: "product-details",
                    span { class: "badge category-badge",
                        if item.category.is_empty() { "Uncategorized" } else { "{item.category}" }
                    }
                    h1 { "{item.name}" }

                    if item.rating > 0.0 {
                        div { class: "star-row",
                            {(0..5).map(|i| {
                                let filled = if i < full_stars { "star filled" } else { "star" };
                                rsx! { span { key: "{i}", class: "{filled}", "★" } }
                            })}
                            span { class: "rating-value", {format!("{:.1}", item.rating)} }
                        }
                    }

                    div { class: "price-row",
                        if let Some(offer) = item.offer_price {
                            span { class: "offer-price", {format!("₹{offer}")} }
                        }
                        if let Some(original) = item.original_price {
                            span {
                                class: if item.offer_price.is_some() { "original-price struck" } else { "original-price" },
                                {format!("₹{original}")}
                            }
                        }
                        if item.offer_price.is_none() && item.original_price.is_none() {
                            if let Some(price) = &item.price {
                                span { class: "offer-price", "{price}" }
                            }
                        }
                    }

                    if let Some(description) = &item.description {
                        p { class: "description", "{description}" }
                    }

                    if let Some(feature) = highlight {
                        div { class: "feature-highlight",
                            span { class: "highlight-label", "Highlight" }
                            p { "{feature}" }
                        }
                    }
                }
            }
        }
    }
}

/// Apply the media state to the `<video>` element. `play()` can be
/// rejected without a user gesture on some browsers; ignored.
#[cfg(target_family = "wasm")]
fn sync_video_element(state: MediaState) {
    use wasm_bindgen::JsCast;

    let MediaMode::Video { playing, muted } = state.mode else {
        return;
    };
    let Some(video) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(VIDEO_ELEMENT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlVideoElement>().ok())
    else {
        return;
    };

    video.set_muted(muted);
    if playing {
        let _ = video.play();
    } else {
        let _ = video.pause();
    }
}

#[cfg(not(target_family = "wasm"))]
fn sync_video_element(_state: MediaState) {}
