//! Unified error types for AQI calculation.
//!
//! A single `Error` enum that every fallible operation returns, so callers
//! of [`calculate`](crate::calculate) and the CLI handle one type.

use core::fmt;

use crate::category::Category;
use crate::pollutant::Pollutant;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A concentration was negative, infinite or not a number.
    InvalidMeasurement { pollutant: Pollutant, value: f64 },
    /// A classifier produced a category with no entry in the index table.
    UnknownCategory(Category),
    /// A concentration exceeded the top breakpoint under
    /// [`AboveRangePolicy::Reject`](crate::config::AboveRangePolicy::Reject).
    AboveRange {
        pollutant: Pollutant,
        value: f64,
        max: f64,
    },
    /// A pollutant name did not match any supported kind.
    UnknownPollutant(String),
    /// A `<pollutant>=<value>` string was malformed; `input` is the text as given.
    InvalidReading { input: String, reason: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMeasurement { pollutant, value } => {
                write!(
                    f,
                    "measurement for {pollutant} must be a finite value of at least 0 (got {value})"
                )
            }
            Self::UnknownCategory(c) => write!(f, "could not find index for category {c:?}"),
            Self::AboveRange {
                pollutant,
                value,
                max,
            } => write!(
                f,
                "measurement for {pollutant} is above the highest breakpoint ({value} > {max} {})",
                pollutant.unit()
            ),
            Self::UnknownPollutant(name) => write!(f, "unknown pollutant '{name}'"),
            Self::InvalidReading { input, reason } => {
                write!(f, "invalid measurement '{input}': {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
