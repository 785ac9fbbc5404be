//! AQI aggregation.
//!
//! Each measurement is placed in its pollutant's breakpoint row and
//! linearly mapped onto that row's index band:
//!
//! ```text
//!           (I_hi - I_lo)
//!   AQI  =  ------------- * (C - C_lo) + I_lo
//!           (C_hi - C_lo)
//! ```
//!
//! The overall result is the largest sub-index; its band and pollutant are
//! reported alongside it.  Everything here is pure and reentrant.

use log::{debug, warn};
use serde::Serialize;

use crate::breakpoints::{self, Breakpoint};
use crate::category::{Category, Index};
use crate::config::{AboveRangePolicy, CalculatorConfig};
use crate::error::{Error, Result};
use crate::pollutant::{Measurement, Pollutant};

/// Outcome of an aggregation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Dominant sub-index; not rounded.
    pub aqi: f64,
    /// Band of the dominant measurement.  `None` when no measurements were
    /// supplied.
    pub index: Option<&'static Index>,
    /// Pollutant that produced the dominant sub-index.
    pub dominant: Option<Pollutant>,
}

impl Assessment {
    /// The "no data" result returned for an empty measurement set.
    pub const EMPTY: Assessment = Assessment {
        aqi: 0.0,
        index: None,
        dominant: None,
    };

    /// True when built from zero measurements.  An empty assessment is not
    /// a "Good" reading.
    pub fn is_empty(&self) -> bool {
        self.index.is_none()
    }

    pub fn category(&self) -> Option<Category> {
        self.index.map(|idx| idx.category)
    }
}

/// Sub-index of a single measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubIndex {
    pub pollutant: Pollutant,
    /// Concentration as supplied.
    pub value: f64,
    pub aqi: f64,
    pub index: &'static Index,
}

/// Linear interpolation of `value` within `range` onto `index`'s band.
pub fn interpolate(value: f64, range: (f64, f64), index: &Index) -> f64 {
    let (c_lo, c_hi) = range;
    let (i_lo, i_hi) = (f64::from(index.low), f64::from(index.high));
    ((i_hi - i_lo) / (c_hi - c_lo)) * (value - c_lo) + i_lo
}

/// True when the table's top row is the most severe category, so values
/// past it can be extrapolated without leaving the row's band label wrong.
fn tops_out_scale(table: &[Breakpoint]) -> bool {
    table
        .last()
        .is_some_and(|row| row.category == Category::VeryHazardous)
}

/// Aggregator with a fixed [`CalculatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    config: CalculatorConfig,
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Validate and interpolate one measurement.
    pub fn sub_index(&self, m: &dyn Measurement) -> Result<SubIndex> {
        let pollutant = m.pollutant();
        let value = m.value();

        if !value.is_finite() || value < 0.0 {
            warn!("rejecting {pollutant} measurement {value}");
            return Err(Error::InvalidMeasurement { pollutant, value });
        }

        let (c_lo, c_hi) = m.range();
        let table = pollutant.table();
        let max = breakpoints::ceiling(table);
        // Values in the rounding gap above a row are capped at its `high`.
        let effective = if value > max {
            match self.config.above_range {
                AboveRangePolicy::Extrapolate if tops_out_scale(table) => value,
                // A table that stops below the last band cannot label an
                // extrapolated AQI, so it is capped at its top row instead.
                AboveRangePolicy::Extrapolate | AboveRangePolicy::Clamp => max,
                AboveRangePolicy::Reject => {
                    warn!("{pollutant} measurement {value} above top breakpoint {max}");
                    return Err(Error::AboveRange {
                        pollutant,
                        value,
                        max,
                    });
                }
            }
        } else {
            value.min(c_hi)
        };

        let index = m.category().index()?;
        let aqi = interpolate(effective, (c_lo, c_hi), index);
        if !aqi.is_finite() {
            warn!("{pollutant} measurement {value} overflows the index");
            return Err(Error::InvalidMeasurement { pollutant, value });
        }
        debug!(
            "{pollutant} {value} {} -> sub-index {aqi:.3} ({index})",
            pollutant.unit()
        );

        Ok(SubIndex {
            pollutant,
            value,
            aqi,
            index,
        })
    }

    /// Sub-index of every measurement, in input order.  Fails on the first
    /// invalid measurement.
    pub fn breakdown(&self, measurements: &[&dyn Measurement]) -> Result<Vec<SubIndex>> {
        measurements.iter().map(|m| self.sub_index(*m)).collect()
    }

    /// Largest sub-index across `measurements`.
    ///
    /// Ties keep the earlier measurement.  An empty slice yields
    /// [`Assessment::EMPTY`].
    pub fn calculate(&self, measurements: &[&dyn Measurement]) -> Result<Assessment> {
        let mut best: Option<SubIndex> = None;

        for m in measurements {
            let sub = self.sub_index(*m)?;
            if best.as_ref().is_none_or(|b| sub.aqi > b.aqi) {
                best = Some(sub);
            }
        }

        Ok(best.map_or(Assessment::EMPTY, |b| Assessment {
            aqi: b.aqi,
            index: Some(b.index),
            dominant: Some(b.pollutant),
        }))
    }
}

/// [`Calculator::calculate`] with the default configuration.
pub fn calculate(measurements: &[&dyn Measurement]) -> Result<Assessment> {
    Calculator::default().calculate(measurements)
}
