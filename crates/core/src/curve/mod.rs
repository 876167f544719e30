use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Result, SoftStartError};

/// Number of rows in the default chart table, covering t = 0.00 .. 1.00 in
/// steps of 0.01.
pub const CURVE_TABLE_RESOLUTION: usize = 101;

/// Identifier for one of the three built-in brightness ramps.
///
/// The serialized tags (`linear`, `sCurve`, `logarithmic`) are part of the
/// contract with the rendering layer and must not be renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurveKind {
    Linear,
    SCurve,
    Logarithmic,
}

impl CurveKind {
    /// All curve kinds in the order the chart displays them.
    pub const ALL: [CurveKind; 3] = [
        CurveKind::Linear,
        CurveKind::SCurve,
        CurveKind::Logarithmic,
    ];

    /// Stable wire tag shared with the rendering layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::SCurve => "sCurve",
            CurveKind::Logarithmic => "logarithmic",
        }
    }

    /// Human readable heading used by the light panels.
    pub fn label(&self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear Ramp",
            CurveKind::SCurve => "S-Curve (Sigmoid)",
            CurveKind::Logarithmic => "Logarithmic",
        }
    }

    /// One-line behaviour summary shown underneath the label.
    pub fn description(&self) -> &'static str {
        match self {
            CurveKind::Linear => "Brightness increases steadily. y = x",
            CurveKind::SCurve => "Slow start, fast middle, slow finish. Ease-in-out.",
            CurveKind::Logarithmic => "Starts fast, then plateaus. y = log10(9x + 1)",
        }
    }

    /// Accent colour the chart and panel use for this curve.
    pub fn color_hex(&self) -> &'static str {
        match self {
            CurveKind::Linear => "#ef4444",
            CurveKind::SCurve => "#10b981",
            CurveKind::Logarithmic => "#3b82f6",
        }
    }

    /// Evaluates this curve at normalized time `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        match self {
            CurveKind::Linear => linear(t),
            CurveKind::SCurve => s_curve(t),
            CurveKind::Logarithmic => logarithmic(t),
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveKind {
    type Err = SoftStartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(CurveKind::Linear),
            "sCurve" => Ok(CurveKind::SCurve),
            "logarithmic" => Ok(CurveKind::Logarithmic),
            _ => Err(SoftStartError::InvalidInput(
                "curve tag must be one of `linear`, `sCurve`, `logarithmic`",
            )),
        }
    }
}

/// Clamps `t` into [0, 1]. `NaN` maps to 0.0 rather than leaking through the
/// comparison chain; `f64::clamp` would panic on it.
fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Identity ramp: brightness rises in lockstep with time.
pub fn linear(t: f64) -> f64 {
    clamp_unit(t)
}

/// Cubic ease-in-out ramp. Both pieces meet at (0.5, 0.5), so the curve is
/// continuous and smooth across the midpoint.
pub fn s_curve(t: f64) -> f64 {
    let t = clamp_unit(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Logarithmic ramp `log10(9t + 1)`, chosen so that it passes through (0, 0)
/// and (1, 1) exactly.
pub fn logarithmic(t: f64) -> f64 {
    (9.0 * clamp_unit(t) + 1.0).log10()
}

/// All three ramps evaluated at a single normalized timestamp. Rows are
/// immutable once generated; the field names double as the chart's wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub t: f64,
    pub linear: f64,
    #[serde(rename = "sCurve")]
    pub s_curve: f64,
    pub logarithmic: f64,
}

impl CurveSample {
    /// Samples every curve at `t` (clamped to [0, 1]).
    pub fn at(t: f64) -> Self {
        let t = clamp_unit(t);
        Self {
            t,
            linear: linear(t),
            s_curve: s_curve(t),
            logarithmic: logarithmic(t),
        }
    }

    /// Returns the brightness this row stores for `kind`.
    pub fn value(&self, kind: CurveKind) -> f64 {
        match kind {
            CurveKind::Linear => self.linear,
            CurveKind::SCurve => self.s_curve,
            CurveKind::Logarithmic => self.logarithmic,
        }
    }
}

/// Fixed-resolution lookup table consumed by the chart widget. Rows cover
/// [0, 1] inclusive of both endpoints in strictly ascending `t` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveTable {
    samples: Vec<CurveSample>,
}

impl CurveTable {
    /// Samples all three curves at `resolution` equally spaced points. The
    /// table is a pure function of `resolution` and can be cached for the
    /// lifetime of the process.
    pub fn generate(resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(SoftStartError::InvalidInput(
                "curve table needs at least the two endpoint samples",
            ));
        }

        let step = 1.0 / (resolution - 1) as f64;
        let samples = (0..resolution)
            .map(|i| CurveSample::at(i as f64 * step))
            .collect();
        Ok(Self { samples })
    }

    /// Generates the table at the default chart resolution.
    pub fn default_resolution() -> Self {
        // The resolution constant is >= 2, so generation cannot fail.
        Self::generate(CURVE_TABLE_RESOLUTION).expect("default resolution must be valid")
    }

    pub fn samples(&self) -> &[CurveSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
