use serde::{Deserialize, Serialize};

use super::chart::Dimension;

/// Page-wide layout mode for the dashboard frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    Wide,
    Centered,
}

impl Default for PageLayout {
    fn default() -> Self {
        PageLayout::Wide
    }
}

/// Presentation configuration, passed explicitly into the facade instead
/// of living in process-wide state. Serializable so the frontend can
/// persist and restore it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Page layout mode (the dashboard defaults to the wide layout).
    #[serde(default)]
    pub layout: PageLayout,

    /// Sunburst nesting order, inner circle first. Any permutation of
    /// the three dimensions; the user picks one of the six orderings.
    #[serde(default = "default_sunburst_path")]
    pub sunburst_path: [Dimension; 3],
}

fn default_sunburst_path() -> [Dimension; 3] {
    Dimension::ALL
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            layout: PageLayout::default(),
            sunburst_path: default_sunburst_path(),
        }
    }
}
