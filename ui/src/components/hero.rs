use dioxus::prelude::*;

use super::decor::{AnimatedCounter, ParticleField};

/// Landing hero: brand copy over the particle field, with the
/// staggered stat counters.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            ParticleField { count: 20 }
            div { class: "hero-copy",
                h1 { "Light Up Every Celebration" }
                p {
                    "Hand-crafted sparklers and fountains from the Glimmer "
                    "workshop, trusted for festival nights, weddings and "
                    "birthdays for over a decade."
                }
            }
            div { class: "hero-stats",
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
            }
        }
    }
}
