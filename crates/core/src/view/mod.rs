use serde::{Deserialize, Serialize};

use crate::{CurveKind, CurveSample, CurveTable, ProgressUpdate, Result, RunState};

/// Which curve(s) drive the light panels: a single tab or all three side by
/// side. External configuration, never owned by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActiveCurveSelector {
    Single(CurveKind),
    All,
}

impl ActiveCurveSelector {
    /// The curves currently live for brightness display, in chart order.
    pub fn kinds(&self) -> Vec<CurveKind> {
        match self {
            ActiveCurveSelector::Single(kind) => vec![*kind],
            ActiveCurveSelector::All => CurveKind::ALL.to_vec(),
        }
    }
}

impl Default for ActiveCurveSelector {
    fn default() -> Self {
        ActiveCurveSelector::All
    }
}

/// Brightness readout for one live curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveReadout {
    pub kind: CurveKind,
    /// Raw brightness in [0, 1].
    pub intensity: f64,
    /// Rounded PWM duty cycle, 0..=100.
    pub percentage: u8,
}

/// Marker position for the chart's progress indicator, computed by direct
/// curve evaluation at the exact progress so it can never fall between table
/// rows and disappear.
pub type ChartHighlight = CurveSample;

/// Everything the rendering layer consumes for one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub run_state: RunState,
    pub progress: f64,
    pub readouts: Vec<CurveReadout>,
    pub highlight: ChartHighlight,
}

/// Turns per-tick driver snapshots into the view-model the rendering layer
/// consumes. Caches one immutable [`CurveTable`] for the chart lines.
#[derive(Debug, Clone)]
pub struct PresentationAdapter {
    selector: ActiveCurveSelector,
    table: CurveTable,
}

impl PresentationAdapter {
    /// Creates an adapter with a chart table at `resolution` sample points.
    pub fn new(selector: ActiveCurveSelector, resolution: usize) -> Result<Self> {
        Ok(Self {
            selector,
            table: CurveTable::generate(resolution)?,
        })
    }

    /// Creates an adapter with the default 101-row chart table.
    pub fn with_defaults(selector: ActiveCurveSelector) -> Self {
        Self {
            selector,
            table: CurveTable::default_resolution(),
        }
    }

    pub fn selector(&self) -> ActiveCurveSelector {
        self.selector
    }

    /// Switches the live curve selection (tabbed variant).
    pub fn select_active_curve(&mut self, selector: ActiveCurveSelector) {
        self.selector = selector;
    }

    /// The immutable chart line data.
    pub fn table(&self) -> &CurveTable {
        &self.table
    }

    /// Builds the view-model for one driver snapshot.
    pub fn view_model(&self, update: ProgressUpdate) -> ViewModel {
        let readouts = self
            .selector
            .kinds()
            .into_iter()
            .map(|kind| {
                let intensity = kind.evaluate(update.progress);
                CurveReadout {
                    kind,
                    intensity,
                    percentage: (intensity * 100.0).round() as u8,
                }
            })
            .collect();

        ViewModel {
            run_state: update.state,
            progress: update.progress,
            readouts,
            highlight: CurveSample::at(update.progress),
        }
    }
}
