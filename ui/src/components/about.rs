use dioxus::prelude::*;

use super::decor::AnimatedCounter;

/// The about page: brand story plus the four stat counters.
#[component]
pub fn AboutView() -> Element {
    rsx! {
        div { class: "about-view",
            section { class: "about-hero",
                h1 { "The Glimmer Story" }
                p {
                    "What started as a single workbench of hand-dipped "
                    "sparklers has grown into a catalog of fountains, gift "
                    "boxes and festival assortments, every batch still "
                    "finished and inspected by hand."
                }
            }

            section { class: "about-stats",
                div { class: "stat",
                    AnimatedCounter { target: 50, duration_ms: 2000, delay_ms: 1000, suffix: "+" }
                    span { "Sparkler Varieties" }
                }
                div { class: "stat",
                    AnimatedCounter { target: 10, duration_ms: 2000, delay_ms: 1200, suffix: "k+" }
                    span { "Happy Customers" }
                }
                div { class: "stat",
                    AnimatedCounter { target: 12, duration_ms: 2000, delay_ms: 1400, suffix: "+" }
                    span { "Years of Craft" }
                }
                div { class: "stat",
                    AnimatedCounter { target: 25, duration_ms: 2000, delay_ms: 1600, suffix: "+" }
                    span { "Safety Awards" }
                }
            }

            section { class: "about-values",
                div { class: "value-card",
                    h3 { "Safety first" }
                    p {
                        "Every formulation is tested to burn clean and "
                        "predictable before it ever reaches a shelf."
                    }
                }
                div { class: "value-card",
                    h3 { "Crafted by hand" }
                    p {
                        "Dipping, drying and packing are still done by the "
                        "same families who founded the workshop."
                    }
                }
                div { class: "value-card",
                    h3 { "Made for moments" }
                    p {
                        "From a child's first sparkler to a wedding send-off, "
                        "our catalog is built around celebrations."
                    }
                }
            }
        }
    }
}
