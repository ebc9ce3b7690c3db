use dioxus::prelude::*;
use mandate_core::config::REPOSITORY_URL;

/// Sticky top bar with the brand mark and in-page navigation.
#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "mn-header mn-slide-down",
            div { class: "mn-container mn-header-inner",
                div { class: "mn-brand",
                    BrandMark {}
                    div {
                        h1 { class: "mn-brand-title", "Indian Elections" }
                        p { class: "mn-brand-subtitle", "Data-Driven Democracy" }
                    }
                }
                nav { class: "mn-nav",
                    a { class: "mn-nav-link", href: "#visualizations", "🗺️ Constituency Map" }
                    a { class: "mn-nav-link", href: "#visualizations", "📈 Performance" }
                    a { class: "mn-nav-link", href: "#visualizations", "📊 Analysis" }
                    a {
                        class: "mn-nav-link mn-nav-link--pill",
                        href: REPOSITORY_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "GitHub"
                    }
                }
            }
        }
    }
}

/// Tricolour roundel used in the header and footer.
#[component]
pub fn BrandMark() -> Element {
    rsx! {
        div { class: "mn-roundel",
            div { class: "mn-roundel-inner",
                div { class: "mn-roundel-dot" }
            }
        }
    }
}
