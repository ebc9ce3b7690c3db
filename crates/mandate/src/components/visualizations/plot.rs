use dioxus::logger::tracing::{debug, error};
use dioxus::prelude::*;
use serde_json::Value;

/// Waits for the Plotly bundle (loaded asynchronously from the CDN), then
/// draws the figure received over the eval channel into the target element.
///
/// Each render carries a generation number that is stamped on the element as
/// `data-gen`. A render that finds a newer stamp after waiting for Plotly
/// gives up, so an older figure can never overwrite a newer one.
const RENDER_JS: &str = r#"
const [id, raw, gen] = await dioxus.recv();
const stamp = (el) => Number((el && el.dataset.gen) || 0);
let el = document.getElementById(id);
if (el === null) {
    return "missing";
}
if (stamp(el) > gen) {
    return "stale";
}
el.dataset.gen = String(gen);
const fig = JSON.parse(raw);
for (let i = 0; i < 100 && typeof window.Plotly === "undefined"; i++) {
    await new Promise((resolve) => setTimeout(resolve, 50));
}
el = document.getElementById(id);
if (typeof window.Plotly === "undefined" || el === null) {
    return "missing";
}
if (stamp(el) !== gen) {
    return "stale";
}
await window.Plotly.react(el, fig.data, fig.layout, fig.config);
return "drawn";
"#;

/// What a single render script reported back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderOutcome {
    Drawn,
    /// A newer figure claimed the element first
    Stale,
    /// Plotly never loaded or the element is gone
    Missing,
}

impl RenderOutcome {
    fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("drawn") => RenderOutcome::Drawn,
            Some("stale") => RenderOutcome::Stale,
            _ => RenderOutcome::Missing,
        }
    }
}

fn purge_js(id: &str) -> String {
    // Ids are generated by us, but quote them through JSON anyway
    let quoted = serde_json::to_string(id).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "const el = document.getElementById({quoted}); \
         if (el !== null && window.Plotly) {{ window.Plotly.purge(el); }}"
    )
}

/// Host element for one Plotly figure.
///
/// `figure_json` is the serialized [`mandate_core::chart::Figure`]. Whenever
/// it changes the chart is redrawn in place with `Plotly.react`; the plot is
/// purged when the component unmounts.
#[component]
pub fn PlotlyChart(id: String, figure_json: String) -> Element {
    let element_id = id.clone();
    let mut generation = use_hook(|| CopyValue::new(0u64));

    use_effect(use_reactive!(|(id, figure_json)| {
        let gen = {
            let mut counter = generation.write();
            *counter += 1;
            *counter
        };
        spawn(async move {
            let eval = document::eval(RENDER_JS);
            if let Err(e) = eval.send((id.clone(), figure_json, gen)) {
                error!("Failed to send figure to chart {}: {:?}", id, e);
                return;
            }
            match eval.await.map(|value| RenderOutcome::from_value(&value)) {
                Ok(RenderOutcome::Drawn) => debug!("Rendered chart {} (gen {})", id, gen),
                Ok(RenderOutcome::Stale) => debug!("Skipped stale render {} of chart {}", gen, id),
                Ok(RenderOutcome::Missing) => error!("Plotly unavailable, chart {} not drawn", id),
                Err(e) => error!("Chart {} failed to render: {:?}", id, e),
            }
        });
    }));

    let purge_id = element_id.clone();
    use_drop(move || {
        document::eval(&purge_js(&purge_id));
    });

    rsx! {
        div { id: "{element_id}", class: "mn-plot" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_purge_quotes_element_id() {
        let js = purge_js("turnout-heatmap");
        assert!(js.contains("document.getElementById(\"turnout-heatmap\")"));
        assert!(js.contains("Plotly.purge(el)"));
    }

    #[test]
    fn test_render_script_checks_generation_after_waiting() {
        let wait = RENDER_JS.find("setTimeout").unwrap();
        let react = RENDER_JS.find("Plotly.react").unwrap();
        let recheck = RENDER_JS[wait..react].find("stamp(el) !== gen");
        assert!(recheck.is_some());
        assert!(RENDER_JS.contains("el.dataset.gen = String(gen)"));
    }

    #[test]
    fn test_render_outcome_parsing() {
        assert_eq!(RenderOutcome::from_value(&json!("drawn")), RenderOutcome::Drawn);
        assert_eq!(RenderOutcome::from_value(&json!("stale")), RenderOutcome::Stale);
        assert_eq!(RenderOutcome::from_value(&json!("missing")), RenderOutcome::Missing);
        assert_eq!(RenderOutcome::from_value(&json!(true)), RenderOutcome::Missing);
    }
}
