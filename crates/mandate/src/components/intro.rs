use dioxus::prelude::*;
use mandate_core::config::REPOSITORY_URL;
use mandate_core::dataset::INTRO_STATS;

/// "Unraveling the Mandate" section with the headline statistic cards.
#[component]
pub fn IntroSection() -> Element {
    rsx! {
        section { class: "mn-intro",
            div { class: "mn-container mn-center",
                h2 { class: "mn-section-title mn-rise", "Our Analysis: Unraveling the Mandate" }
                div { class: "mn-rule mn-rule--saffron mn-rise" }
                p { class: "mn-lead mn-rise",
                    "At "
                    strong { "Indian Elections Analytics" }
                    ", we believe in making complex data accessible. Our dedicated team has meticulously "
                    "analyzed election trends, voter behavior, and constituency insights to bring you a "
                    "comprehensive overview of the Indian electoral landscape."
                }

                div { class: "mn-stat-grid mn-rise",
                    for stat in INTRO_STATS {
                        div { key: "{stat.label}", class: "mn-stat",
                            div { class: "mn-stat-icon", "{stat.icon}" }
                            div { class: "mn-stat-value", "{stat.value}" }
                            div { class: "mn-stat-label", "{stat.label}" }
                        }
                    }
                }

                div { class: "mn-card mn-powered mn-rise",
                    h3 { class: "mn-card-title", "💻 Powered by Python & GitHub" }
                    p {
                        "Below, we bring you the heart of our analysis: a series of meticulously crafted, "
                        "interactive visualizations generated directly from our Python code, with the raw "
                        "data and scripts openly accessible on our GitHub repository."
                    }
                    div { class: "mn-powered-actions",
                        a {
                            class: "mn-btn mn-btn--primary",
                            href: REPOSITORY_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Explore the Code & Data on GitHub"
                        }
                        a {
                            class: "mn-btn mn-btn--outline",
                            href: REPOSITORY_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "🗄️ View Raw Data"
                        }
                    }
                }
            }
        }
    }
}
