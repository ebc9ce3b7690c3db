//! Visualization tabs.
//!
//! The chart browser shows exactly one of four visualizations. Tabs are
//! addressed by short string ids (`"map"`, `"performance"`, `"turnout"`,
//! `"contests"`); anything else resolves to the map rather than an error.

use tracing::debug;

/// One of the four chart views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisualizationTab {
    #[default]
    Map,
    Performance,
    Turnout,
    Contests,
}

impl VisualizationTab {
    /// All tabs in display order.
    pub const ALL: [VisualizationTab; 4] = [
        VisualizationTab::Map,
        VisualizationTab::Performance,
        VisualizationTab::Turnout,
        VisualizationTab::Contests,
    ];

    /// Resolves a tab id. Unknown ids fall back to [`VisualizationTab::Map`].
    pub fn from_id(id: &str) -> Self {
        match id {
            "map" => VisualizationTab::Map,
            "performance" => VisualizationTab::Performance,
            "turnout" => VisualizationTab::Turnout,
            "contests" => VisualizationTab::Contests,
            other => {
                debug!("Unknown tab id '{}', falling back to map", other);
                VisualizationTab::default()
            }
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            VisualizationTab::Map => "map",
            VisualizationTab::Performance => "performance",
            VisualizationTab::Turnout => "turnout",
            VisualizationTab::Contests => "contests",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisualizationTab::Map => "Constituency Map",
            VisualizationTab::Performance => "Historical Performance",
            VisualizationTab::Turnout => "Voter Turnout",
            VisualizationTab::Contests => "Close Contests",
        }
    }

    /// One-line caption shown under the tab bar.
    pub fn description(self) -> &'static str {
        match self {
            VisualizationTab::Map => "Interactive choropleth showing 2019 election results",
            VisualizationTab::Performance => "Long-term trends for major political parties",
            VisualizationTab::Turnout => "Participation levels across regions",
            VisualizationTab::Contests => "Razor-thin victory margins",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            VisualizationTab::Map => "🗺️",
            VisualizationTab::Performance => "📈",
            VisualizationTab::Turnout => "🔥",
            VisualizationTab::Contests => "⚔️",
        }
    }
}

/// Holds the active tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelector {
    active: VisualizationTab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> VisualizationTab {
        self.active
    }

    pub fn is_active(&self, tab: VisualizationTab) -> bool {
        self.active == tab
    }

    /// Activates `tab`. Returns `false` when it was already active.
    pub fn select(&mut self, tab: VisualizationTab) -> bool {
        if self.active == tab {
            return false;
        }
        debug!("Switching visualization {} -> {}", self.active.id(), tab.id());
        self.active = tab;
        true
    }

    /// Activates the tab named by `id`, with the same fallback as
    /// [`VisualizationTab::from_id`].
    pub fn select_id(&mut self, id: &str) -> bool {
        self.select(VisualizationTab::from_id(id))
    }
}
