use dioxus::prelude::*;
use mandate_core::config::REPOSITORY_URL;

use super::header::BrandMark;

const SOCIAL_LINKS: [(&str, &str, &str); 4] = [
    ("GitHub", REPOSITORY_URL, "🐙"),
    ("Email", "mailto:contact@indianelections.com", "✉️"),
    ("Twitter", "https://twitter.com/indianelections", "🐦"),
    ("LinkedIn", "https://linkedin.com/company/indianelections", "💼"),
];

const QUICK_LINKS: [&str; 4] = ["Constituency Map", "Historical Data", "Analysis", "Methodology"];

const RESOURCES: [&str; 4] = ["Source Code", "Raw Data", "API Documentation", "Research Papers"];

/// Footer with branding, links and data attribution
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "mn-footer",
            div { class: "mn-container mn-footer-grid",
                div { class: "mn-footer-brand",
                    div { class: "mn-brand",
                        BrandMark {}
                        div {
                            h3 { class: "mn-brand-title", "Indian Elections Analytics" }
                            p { class: "mn-brand-subtitle mn-muted", "Data-Driven Democracy" }
                        }
                    }
                    p { class: "mn-footer-text",
                        "Empowering citizens with transparent, accessible election data and insights. "
                        "Our mission is to strengthen democratic participation through data literacy."
                    }
                    div { class: "mn-social",
                        for (name, href, glyph) in SOCIAL_LINKS {
                            a {
                                key: "{name}",
                                class: "mn-social-link",
                                href: href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "aria-label": name,
                                "{glyph}"
                            }
                        }
                    }
                }

                div {
                    h4 { class: "mn-footer-heading", "Quick Links" }
                    ul { class: "mn-footer-list",
                        for link in QUICK_LINKS {
                            li { key: "{link}", a { href: "#visualizations", "{link}" } }
                        }
                    }
                }

                div {
                    h4 { class: "mn-footer-heading", "Resources" }
                    ul { class: "mn-footer-list",
                        for resource in RESOURCES {
                            li { key: "{resource}", a { href: REPOSITORY_URL, target: "_blank", "{resource}" } }
                        }
                    }
                }
            }

            div { class: "mn-container mn-footer-bottom",
                p { "Made with ❤️ for Indian Democracy" }
                p { class: "mn-footer-fineprint",
                    "© 2024 Indian Elections Analytics. Data sourced from Election Commission of India."
                }
            }
        }
    }
}
