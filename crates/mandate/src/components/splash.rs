use dioxus::prelude::*;
use mandate_core::config::{CHAKRA_SPOKES, REPOSITORY_URL, SPLASH_PARTICLE_COUNT};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::platform::entropy_seed;

/// Position and timing of one floating background particle.
#[derive(Clone, Copy, PartialEq)]
struct Particle {
    left_pct: f64,
    top_pct: f64,
    duration_s: f64,
}

impl Particle {
    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {}s;",
            self.left_pct, self.top_pct, self.duration_s
        )
    }
}

fn spoke_style(index: usize) -> String {
    let degrees = index * 360 / CHAKRA_SPOKES;
    format!("transform: translateX(-50%) rotate({}deg);", degrees)
}

fn scatter_particles(seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..SPLASH_PARTICLE_COUNT)
        .map(|i| Particle {
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            duration_s: 4.0 + i as f64 * 0.5,
        })
        .collect()
}

/// Full-screen entry page.
///
/// `on_enter` fires when the reader clicks "Explore Now". The mute button is
/// cosmetic; there is no audio track behind it.
#[component]
pub fn SplashScreen(on_enter: EventHandler<()>) -> Element {
    let mut muted = use_signal(|| true);
    let particles = use_hook(|| scatter_particles(entropy_seed()));
    let mute_label = if muted() { "Unmute" } else { "Mute" };

    rsx! {
        div { class: "mn-splash",
            div { class: "mn-splash-backdrop",
                for (i, p) in particles.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: "mn-particle",
                        style: p.style(),
                    }
                }
                svg {
                    class: "mn-splash-outline",
                    "viewBox": "0 0 100 100",
                    path {
                        d: "M20,30 Q30,20 40,25 Q50,15 60,20 Q70,25 75,35 Q80,45 75,55 Q70,65 60,70 Q50,75 40,70 Q30,65 25,55 Q20,45 20,30 Z",
                        fill: "none",
                        stroke: "rgba(255, 215, 0, 0.3)",
                        "stroke-width": "0.5",
                    }
                }
            }

            div { class: "mn-splash-content",
                div { class: "mn-splash-logo",
                    div { class: "mn-chakra-ring",
                        div { class: "mn-chakra-disc",
                            div { class: "mn-chakra",
                                div { class: "mn-chakra-hub" }
                                for i in 0..CHAKRA_SPOKES {
                                    div {
                                        key: "{i}",
                                        class: "mn-chakra-spoke",
                                        style: spoke_style(i),
                                    }
                                }
                            }
                        }
                    }
                    h1 { class: "mn-splash-title mn-rise", "Indian Elections" }
                    div { class: "mn-rule mn-rule--gold mn-rise" }
                }

                h2 { class: "mn-splash-tagline mn-rise", "Shaping Tomorrow, Today" }
                p { class: "mn-splash-text mn-rise",
                    "Dive deep into the heart of democracy. Explore the numbers, understand the trends, "
                    "and witness the power of the people through comprehensive data analysis and interactive visualizations."
                }

                div { class: "mn-splash-actions mn-rise",
                    button {
                        class: "mn-btn mn-btn--saffron",
                        onclick: move |_| on_enter.call(()),
                        "Explore Now"
                    }
                    a {
                        class: "mn-btn mn-btn--glass",
                        href: REPOSITORY_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "View on GitHub"
                    }
                }

                button {
                    class: "mn-mute-toggle",
                    "aria-label": mute_label,
                    onclick: move |_| muted.set(!muted()),
                    if muted() { "🔇" } else { "🔊" }
                }
            }
        }
    }
}
