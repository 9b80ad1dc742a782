use dioxus::prelude::*;

/// One benefit card: title, copy, gradient token for the icon chip.
struct Benefit {
    glyph: &'static str,
    title: &'static str,
    copy: &'static str,
    color: &'static str,
}

const BENEFITS: [Benefit; 6] = [
    Benefit {
        glyph: "\u{1f6e1}",
        title: "Safe & Certified Products",
        copy: "Every Glimmer sparkler is certified and made with non-toxic, \
               child-friendly materials, so celebrations stay joyful.",
        color: "from-green-400 to-emerald-500",
    },
    Benefit {
        glyph: "\u{1f69a}",
        title: "Timely Delivery & Reliable Service",
        copy: "Order today, celebrate on time. We ship across the country \
               with care, right when you need it.",
        color: "from-blue-400 to-cyan-500",
    },
    Benefit {
        glyph: "\u{1f3c5}",
        title: "High-Quality Raw Materials",
        copy: "Premium compounds and wires for brighter, longer-lasting \
               sparks. No smoke, no fumes, just clean dazzling light.",
        color: "from-yellow-400 to-orange-500",
    },
    Benefit {
        glyph: "\u{1f381}",
        title: "Premium Packaging Boxes",
        copy: "Elegant, sturdy and gift-ready. Our boxes keep sparklers \
               protected whether for sale or gifting.",
        color: "from-purple-400 to-pink-500",
    },
    Benefit {
        glyph: "\u{1f570}",
        title: "Rooted in Sparkler Tradition",
        copy: "Born in the sparkler capital, Glimmer carries forward a \
               legacy of hand-twisted sparklers made for generations.",
        color: "from-red-400 to-rose-500",
    },
    Benefit {
        glyph: "\u{2728}",
        title: "Customer Satisfaction First",
        copy: "Your smile matters most. From quick replies to perfect \
               orders, we keep the experience simple and happy.",
        color: "from-indigo-400 to-purple-500",
    },
];

/// Benefits grid under the category section on the landing page.
#[component]
pub fn WhyChooseUs() -> Element {
    rsx! {
        section { class: "why-choose",
            div { class: "section-heading",
                h2 { "Why Choose Glimmer?" }
                p {
                    "With over 12 years of experience, we're your trusted "
                    "partner for all fireworks needs."
                }
            }
            div { class: "benefit-grid",
                {BENEFITS.iter().enumerate().map(|(i, benefit)| {
                    rsx! {
                        div { class: "benefit-card", key: "{i}",
                            span { class: "benefit-glyph {benefit.color}", "{benefit.glyph}" }
                            h3 { "{benefit.title}" }
                            p { "{benefit.copy}" }
                        }
                    }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn benefit_cards_are_complete_and_distinct() {
        let titles: BTreeSet<_> = BENEFITS.iter().map(|b| b.title).collect();
        assert_eq!(titles.len(), BENEFITS.len());
        for benefit in &BENEFITS {
            assert!(!benefit.title.trim().is_empty());
            assert!(!benefit.copy.trim().is_empty());
            assert!(benefit.color.starts_with("from-"));
        }
    }
}
