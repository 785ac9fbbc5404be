//! Calculator configuration parameters
//!
//! Tunables for how the aggregator treats edge cases.  The breakpoint and
//! index tables are fixed and deliberately not part of this struct.
//! Values can be loaded from a JSON file (see the `aqi --config` flag).

use serde::{Deserialize, Serialize};

/// What to do with a concentration above the highest breakpoint row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AboveRangePolicy {
    /// Interpolate along the top row; the AQI may exceed 500.  Tables whose
    /// top row is below Very Hazardous (O3) are capped as under `Clamp`.
    #[default]
    Extrapolate,
    /// Cap the concentration at the top row's `high`.
    Clamp,
    /// Fail with [`Error::AboveRange`](crate::Error::AboveRange).
    Reject,
}

/// Aggregator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Policy for concentrations above the top breakpoint.
    pub above_range: AboveRangePolicy,
    /// Decimal places used by text renderers (the CLI).  Calculation never
    /// rounds.
    pub display_precision: usize,
}

impl CalculatorConfig {
    /// Default text precision, matching `AQI is 81.073`.
    pub const DEFAULT_PRECISION: usize = 3;

    /// Parse a JSON document; missing fields fall back to defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            above_range: AboveRangePolicy::Extrapolate,
            display_precision: Self::DEFAULT_PRECISION,
        }
    }
}
