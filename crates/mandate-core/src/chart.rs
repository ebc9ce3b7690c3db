//! Plotly figure builders.
//!
//! Each visualization hands Plotly.js a `{data, layout, config}` triple. The
//! types here model just the subset of the Plotly schema the dashboard uses,
//! and serialise to the JSON Plotly expects. Optional fields are omitted
//! rather than sent as `null`.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::instrument;

use crate::config::SEATS_AXIS_MAX;
use crate::contests::MarginThreshold;
use crate::dataset::{ContestRecord, MapRegionResult, PartySeatSeries};
use crate::error::MandateError;
use crate::formatting::format_votes;
use crate::party::{map_code, party_color, FALLBACK_COLOR};
use crate::turnout::TurnoutMatrix;

const TITLE_COLOR: &str = "#2c3e50";
const TRANSPARENT: &str = "rgba(0,0,0,0)";

// ============================================================================
// Figure
// ============================================================================

/// A complete chart: traces, layout and interaction config.
#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

impl Figure {
    pub fn to_value(&self) -> Result<Value, MandateError> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String, MandateError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Plotly trace, tagged by its `type` field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scatter(ScatterTrace),
    Heatmap(HeatmapTrace),
    Choropleth(ChoroplethTrace),
}

/// Marker colour: one colour for the trace, or one per point.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(&'static str),
    PerPoint(Vec<&'static str>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub color: ColorSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Line {
    pub color: &'static str,
    pub width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BarTrace {
    pub x: Vec<u32>,
    pub y: Vec<&'static str>,
    pub orientation: &'static str,
    pub marker: Marker,
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<u16>,
    pub y: Vec<u32>,
    pub mode: &'static str,
    pub name: &'static str,
    pub line: Line,
    pub marker: Marker,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapTrace {
    pub z: Vec<Vec<f64>>,
    pub x: Vec<u16>,
    pub y: Vec<&'static str>,
    pub colorscale: &'static str,
    pub hoverongaps: bool,
    pub hovertemplate: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoroplethTrace {
    pub locationmode: &'static str,
    pub geojson: Value,
    pub locations: Vec<&'static str>,
    pub z: Vec<u8>,
    pub zmin: u8,
    pub zmax: u8,
    pub text: Vec<&'static str>,
    pub customdata: Vec<f64>,
    pub hovertemplate: &'static str,
    pub colorscale: Vec<(f64, &'static str)>,
    pub showscale: bool,
}

// ============================================================================
// Layout
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Font {
    pub size: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    fn chart(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: Some(Font {
                size: 18,
                color: TITLE_COLOR,
            }),
        }
    }

    fn axis(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickformat: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickmode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<u16>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickangle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub t: u32,
    pub r: u32,
    pub b: u32,
    pub l: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoAxis {
    pub range: [u32; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct GeoLayout {
    pub scope: &'static str,
    pub showland: bool,
    pub landcolor: &'static str,
    pub coastlinecolor: &'static str,
    pub projection: Value,
    pub lonaxis: GeoAxis,
    pub lataxis: GeoAxis,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    pub margin: Margin,
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<GeoLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
}

impl Layout {
    fn new(title: impl Into<String>, margin: Margin, height: u32) -> Self {
        Self {
            title: Title::chart(title),
            margin,
            height,
            xaxis: None,
            yaxis: None,
            geo: None,
            hovermode: None,
            legend: None,
            showlegend: None,
            plot_bgcolor: None,
            paper_bgcolor: None,
        }
    }

    fn transparent(mut self) -> Self {
        self.plot_bgcolor = Some(TRANSPARENT);
        self.paper_bgcolor = Some(TRANSPARENT);
        self
    }
}

/// Interaction options shared by every chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotConfig {
    pub display_mode_bar: bool,
    pub displaylogo: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: true,
            displaylogo: false,
            mode_bar_buttons_to_remove: vec!["pan2d", "lasso2d", "select2d"],
            responsive: true,
        }
    }
}

// ============================================================================
// Builders
// ============================================================================

/// Horizontal bar chart of close contests, coloured by winning party.
#[instrument(skip(records), fields(count = records.len()))]
pub fn close_contests_figure(records: &[ContestRecord], threshold: MarginThreshold) -> Figure {
    let trace = BarTrace {
        x: records.iter().map(|r| r.margin).collect(),
        y: records.iter().map(|r| r.constituency).collect(),
        orientation: "h",
        marker: Marker {
            color: ColorSpec::PerPoint(records.iter().map(|r| party_color(r.winner)).collect()),
            size: None,
        },
        text: records
            .iter()
            .map(|r| format!("{} (+{})", r.winner, format_votes(r.margin)))
            .collect(),
        textposition: "outside",
        hovertemplate: "<b>%{y}</b><br>Winner: %{text}<br>Margin: %{x:,} votes<extra></extra>",
    };

    let mut layout = Layout::new(
        format!(
            "Closest Contests (Margin < {} votes)",
            format_votes(threshold.votes())
        ),
        Margin {
            t: 50,
            r: 100,
            b: 60,
            l: 150,
        },
        bar_chart_height(records.len()),
    )
    .transparent();
    layout.xaxis = Some(Axis {
        title: Some(Title::axis("Victory Margin (Votes)")),
        tickformat: Some(",d"),
        ..Axis::default()
    });
    layout.yaxis = Some(Axis {
        title: Some(Title::axis("Constituency")),
        autorange: Some("reversed"),
        ..Axis::default()
    });
    layout.showlegend = Some(false);

    Figure {
        data: vec![Trace::Bar(trace)],
        layout,
        config: PlotConfig::default(),
    }
}

/// 40px per bar, never shorter than 400px.
pub fn bar_chart_height(bars: usize) -> u32 {
    let per_bar = u32::try_from(bars).unwrap_or(u32::MAX).saturating_mul(40);
    per_bar.max(400)
}

/// Seats won per party over time, one line per party.
#[instrument(skip_all)]
pub fn historical_figure(series: &[PartySeatSeries], years: &[u16]) -> Figure {
    let data = series
        .iter()
        .map(|s| {
            let color = party_color(s.party);
            Trace::Scatter(ScatterTrace {
                x: years.to_vec(),
                y: s.seats.to_vec(),
                mode: "lines+markers",
                name: s.party,
                line: Line { color, width: 3 },
                marker: Marker {
                    color: ColorSpec::Single(color),
                    size: Some(8),
                },
                hovertemplate: format!(
                    "<b>{}</b><br>Year: %{{x}}<br>Seats: %{{y}}<extra></extra>",
                    s.party
                ),
            })
        })
        .collect();

    let mut layout = Layout::new(
        "Seats Won by Major Parties Over Time",
        Margin {
            t: 50,
            r: 20,
            b: 80,
            l: 60,
        },
        500,
    )
    .transparent();
    layout.xaxis = Some(Axis {
        title: Some(Title::axis("Election Year")),
        tickmode: Some("array"),
        tickvals: Some(years.to_vec()),
        tickangle: Some(-45),
        ..Axis::default()
    });
    layout.yaxis = Some(Axis {
        title: Some(Title::axis("Number of Seats Won")),
        range: Some([0, SEATS_AXIS_MAX]),
        ..Axis::default()
    });
    layout.hovermode = Some("x unified");
    layout.legend = Some(Legend {
        orientation: "h",
        x: 0.5,
        y: -0.2,
        xanchor: "center",
    });

    Figure {
        data,
        layout,
        config: PlotConfig::default(),
    }
}

/// Turnout heatmap for one state.
#[instrument(skip(matrix), fields(state = matrix.state))]
pub fn turnout_figure(matrix: &TurnoutMatrix) -> Figure {
    let trace = HeatmapTrace {
        z: matrix.values.clone(),
        x: matrix.years.to_vec(),
        y: matrix.constituencies.to_vec(),
        colorscale: "Viridis",
        hoverongaps: false,
        hovertemplate: "<b>%{y}</b><br>Year: %{x}<br>Turnout: %{z:.1f}%<extra></extra>",
    };

    let mut layout = Layout::new(
        matrix.title(),
        Margin {
            t: 80,
            r: 20,
            b: 40,
            l: 150,
        },
        500,
    )
    .transparent();
    layout.xaxis = Some(Axis {
        title: Some(Title::axis("Election Year")),
        side: Some("top"),
        ..Axis::default()
    });
    layout.yaxis = Some(Axis {
        title: Some(Title::axis("Constituency")),
        autorange: Some("reversed"),
        ..Axis::default()
    });

    Figure {
        data: vec![Trace::Heatmap(trace)],
        layout,
        config: PlotConfig::default(),
    }
}

/// Choropleth of winning parties over the sample regions.
#[instrument(skip_all, fields(regions = results.len()))]
pub fn constituency_map_figure(results: &[MapRegionResult]) -> Figure {
    let trace = ChoroplethTrace {
        locationmode: "geojson-id",
        geojson: region_geojson(results),
        locations: results.iter().map(|r| r.region_id).collect(),
        z: results.iter().map(|r| map_code(r.winner)).collect(),
        zmin: 1,
        zmax: 4,
        text: results.iter().map(|r| r.label).collect(),
        customdata: results.iter().map(|r| r.vote_share).collect(),
        hovertemplate: "<b>%{text}</b><br>Vote Share: %{customdata}%<extra></extra>",
        colorscale: banded_colorscale(&[
            party_color("BJP"),
            party_color("INC"),
            party_color("AAP"),
            FALLBACK_COLOR,
        ]),
        showscale: false,
    };

    let mut layout = Layout::new(
        "Winning Party by Constituency (2019)",
        Margin {
            t: 50,
            r: 0,
            b: 0,
            l: 0,
        },
        500,
    );
    layout.geo = Some(GeoLayout {
        scope: "asia",
        showland: true,
        landcolor: "rgb(243, 243, 243)",
        coastlinecolor: "rgb(204, 204, 204)",
        projection: json!({ "type": "mercator" }),
        lonaxis: GeoAxis { range: [68, 97] },
        lataxis: GeoAxis { range: [6, 38] },
    });

    Figure {
        data: vec![Trace::Choropleth(trace)],
        layout,
        config: PlotConfig::default(),
    }
}

/// Stepped colourscale with one flat band per colour.
///
/// Plotly interpolates between stops, so each colour is pinned at both edges
/// of its band. With `n` colours over `zmin..=zmax`, code `k` normalises to
/// `(k - 1) / (n - 1)`, which always falls inside band `k - 1`.
fn banded_colorscale(colors: &[&'static str]) -> Vec<(f64, &'static str)> {
    let bands = colors.len() as f64;
    colors
        .iter()
        .enumerate()
        .flat_map(|(i, &color)| {
            [
                (i as f64 / bands, color),
                ((i + 1) as f64 / bands, color),
            ]
        })
        .collect()
}

/// Placeholder geometry: one rectangular tile per region, laid out in rows
/// of five across the subcontinent.
///
/// Feature ids match [`MapRegionResult::region_id`] so Plotly's
/// `geojson-id` location mode can join them.
pub fn region_geojson(results: &[MapRegionResult]) -> Value {
    const COLUMNS: usize = 5;
    const ORIGIN_LON: f64 = 72.0;
    const ORIGIN_LAT: f64 = 32.0;
    const TILE_LON: f64 = 4.0;
    const TILE_LAT: f64 = 5.0;

    let features: Vec<Value> = results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let west = ORIGIN_LON + (i % COLUMNS) as f64 * TILE_LON;
            let north = ORIGIN_LAT - (i / COLUMNS) as f64 * TILE_LAT;
            let (east, south) = (west + TILE_LON, north - TILE_LAT);
            json!({
                "type": "Feature",
                "id": r.region_id,
                "properties": { "name": r.label },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [west, north],
                        [east, north],
                        [east, south],
                        [west, south],
                        [west, north]
                    ]]
                }
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HISTORY_YEARS;
    use crate::contests::filter_close_contests;
    use crate::dataset::{CLOSE_CONTESTS, MAP_RESULTS, SEAT_HISTORY};
    use crate::turnout::generate_turnout_seeded;

    #[test]
    fn test_close_contests_figure_json() {
        let filtered = filter_close_contests(&CLOSE_CONTESTS, MarginThreshold::Under2k);
        let fig = close_contests_figure(&filtered, MarginThreshold::Under2k)
            .to_value()
            .unwrap();

        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "bar");
        assert_eq!(trace["orientation"], "h");
        assert_eq!(trace["y"], json!(["Chandni Chowk", "Patan"]));
        assert_eq!(trace["x"], json!([1234, 1542]));
        assert_eq!(trace["marker"]["color"], json!(["#FF9933", "#008000"]));
        assert_eq!(trace["text"][0], "BJP (+1,234)");
        assert!(trace["marker"].get("size").is_none());

        assert_eq!(
            fig["layout"]["title"]["text"],
            "Closest Contests (Margin < 2,000 votes)"
        );
        assert_eq!(fig["layout"]["yaxis"]["autorange"], "reversed");
        assert_eq!(fig["layout"]["height"], 400);
        assert_eq!(fig["layout"]["showlegend"], false);
    }

    #[test]
    fn test_bar_chart_height() {
        assert_eq!(bar_chart_height(0), 400);
        assert_eq!(bar_chart_height(10), 400);
        assert_eq!(bar_chart_height(11), 440);
    }

    #[test]
    fn test_historical_figure_has_trace_per_party() {
        let fig = historical_figure(&SEAT_HISTORY, &HISTORY_YEARS)
            .to_value()
            .unwrap();
        let data = fig["data"].as_array().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data[0]["name"], "BJP");
        assert_eq!(data[0]["mode"], "lines+markers");
        assert_eq!(data[0]["line"]["color"], "#FF9933");
        assert_eq!(data[2]["line"]["color"], "#0000FF");
        assert_eq!(
            data[1]["hovertemplate"],
            "<b>INC</b><br>Year: %{x}<br>Seats: %{y}<extra></extra>"
        );
        assert_eq!(fig["layout"]["yaxis"]["range"], json!([0, 450]));
        assert_eq!(fig["layout"]["hovermode"], "x unified");
    }

    #[test]
    fn test_turnout_figure() {
        let matrix = generate_turnout_seeded("Kerala", 1);
        let fig = turnout_figure(&matrix).to_value().unwrap();
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "heatmap");
        assert_eq!(trace["colorscale"], "Viridis");
        assert_eq!(trace["z"].as_array().unwrap().len(), 10);
        assert_eq!(trace["x"], json!([2004, 2009, 2014, 2019]));
        assert_eq!(fig["layout"]["xaxis"]["side"], "top");
        assert_eq!(
            fig["layout"]["title"]["text"],
            "Top 10 Turnout Constituencies in Kerala"
        );
    }

    #[test]
    fn test_map_figure_joins_geometry() {
        let fig = constituency_map_figure(&MAP_RESULTS).to_value().unwrap();
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["z"], json!([1, 2, 3, 1, 2, 1, 3, 2, 1, 3]));
        assert_eq!(trace["colorscale"][0], json!([0.0, "#FF9933"]));

        let features = trace["geojson"]["features"].as_array().unwrap();
        assert_eq!(features.len(), MAP_RESULTS.len());
        for (feature, location) in features.iter().zip(trace["locations"].as_array().unwrap()) {
            assert_eq!(&feature["id"], location);
        }
        assert_eq!(fig["layout"]["geo"]["lonaxis"]["range"], json!([68, 97]));
    }

    #[test]
    fn test_map_codes_land_inside_their_band() {
        let scale = banded_colorscale(&[
            party_color("BJP"),
            party_color("INC"),
            party_color("AAP"),
            FALLBACK_COLOR,
        ]);
        assert_eq!(scale.len(), 8);
        assert_eq!(scale.first(), Some(&(0.0, "#FF9933")));
        assert_eq!(scale.last(), Some(&(1.0, FALLBACK_COLOR)));

        for (party, expected) in [
            ("BJP", "#FF9933"),
            ("INC", "#008000"),
            ("AAP", "#00CED1"),
            ("JDU", FALLBACK_COLOR),
        ] {
            // Same normalisation Plotly applies with zmin = 1, zmax = 4
            let position = f64::from(map_code(party) - 1) / 3.0;
            let band = scale
                .chunks(2)
                .find(|band| band[0].0 <= position && position <= band[1].0)
                .unwrap();
            assert_eq!(band[0].1, expected, "{party} at {position}");
            assert_eq!(band[1].1, expected, "{party} at {position}");
        }
    }

    #[test]
    fn test_region_tiles_are_closed_rings() {
        let geo = region_geojson(&MAP_RESULTS);
        for feature in geo["features"].as_array().unwrap() {
            let ring = feature["geometry"]["coordinates"][0].as_array().unwrap();
            assert_eq!(ring.len(), 5);
            assert_eq!(ring.first(), ring.last());
        }
    }

    #[test]
    fn test_config_is_shared() {
        let json = historical_figure(&SEAT_HISTORY, &HISTORY_YEARS)
            .to_json()
            .unwrap();
        assert!(json.contains("\"displaylogo\":false"));
        assert!(json.contains("\"modeBarButtonsToRemove\":[\"pan2d\",\"lasso2d\",\"select2d\"]"));
    }
}
