use serde::{Deserialize, Serialize};

use crate::{ActiveCurveSelector, CURVE_TABLE_RESOLUTION};

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub view: ViewConfig,
}

/// Configuration for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Which curve(s) the light panels display.
    pub selector: ActiveCurveSelector,
    /// Number of rows in the chart's curve table.
    pub chart_resolution: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            selector: ActiveCurveSelector::All,
            chart_resolution: CURVE_TABLE_RESOLUTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_all_curves_at_chart_resolution() {
        let config = AppConfig::default();
        assert_eq!(config.view.selector, ActiveCurveSelector::All);
        assert_eq!(config.view.chart_resolution, 101);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = AppConfig {
            view: ViewConfig {
                selector: ActiveCurveSelector::Single(crate::CurveKind::SCurve),
                chart_resolution: 51,
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.view.selector, config.view.selector);
        assert_eq!(restored.view.chart_resolution, 51);
    }
}
