//! Cosmetic layer: animated counters and the floating particle field.
//!
//! Nothing above this module depends on it; swapping it for a stub
//! leaves the data and view-state logic untouched.

use dioxus::prelude::*;

use super::timer::sleep_ms;

const COUNTER_TICK_MS: u32 = 33;

const PARTICLE_COLORS: [&str; 5] = [
    "particle-yellow",
    "particle-orange",
    "particle-red",
    "particle-blue",
    "particle-purple",
];

/// Counts up from zero to `target` with ease-out-quart easing, after
/// an initial stagger delay.
#[component]
pub fn AnimatedCounter(
    target: u32,
    duration_ms: u32,
    delay_ms: u32,
    suffix: String,
) -> Element {
    let mut value = use_signal(|| 0u32);

    use_effect(move || {
        spawn(async move {
            sleep_ms(delay_ms).await;
            let steps = (duration_ms / COUNTER_TICK_MS).max(1);
            for step in 1..=steps {
                sleep_ms(COUNTER_TICK_MS).await;
                let t = step as f64 / steps as f64;
                let eased = 1.0 - (1.0 - t).powi(4);
                value.set((target as f64 * eased).round() as u32);
            }
            value.set(target);
        });
    });

    rsx! {
        span { class: "counter", "{value}{suffix}" }
    }
}

#[derive(Clone)]
struct Particle {
    left: f64,
    delay: f64,
    size: u8,
    color: &'static str,
}

impl Particle {
    fn seeded(index: usize) -> Self {
        Particle {
            left: rand_unit(index) * 100.0,
            delay: index as f64 * 0.5,
            size: if rand_unit(index + 7) > 0.5 { 2 } else { 1 },
            color: PARTICLE_COLORS[index % PARTICLE_COLORS.len()],
        }
    }
}

/// Field of upward-drifting particles behind the product page.
#[component]
pub fn ParticleField(count: usize) -> Element {
    let particles: Vec<Particle> =
        use_hook(|| (0..count).map(Particle::seeded).collect());

    rsx! {
        div { class: "particle-field",
            {particles.into_iter().enumerate().map(|(i, p)| {
                rsx! {
                    span {
                        key: "{i}",
                        class: "particle {p.color} size-{p.size}",
                        style: "left: {p.left:.1}%; animation-delay: {p.delay:.1}s;",
                    }
                }
            })}
        }
    }
}

/// Uniform value in [0, 1). Browser RNG in WASM; a deterministic
/// low-discrepancy fallback keeps native builds compiling.
fn rand_unit(seed: usize) -> f64 {
    #[cfg(target_family = "wasm")]
    {
        let _ = seed;
        js_sys::Math::random()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        (seed as f64 * 0.618_033_988_7).fract()
    }
}
