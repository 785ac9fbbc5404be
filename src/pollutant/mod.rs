//! Pollutant classifiers — one type per pollutant kind and the shared
//! [`Measurement`] contract the aggregator consumes.
//!
//! Every classifier is a newtype over its raw concentration.  The lookup
//! into the pollutant's breakpoint table is provided by the trait, so each
//! kind only supplies its [`Pollutant`] tag and value.

pub mod co;
pub mod no2;
pub mod o3;
pub mod pm10;
pub mod pm25;
pub mod so2;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::breakpoints::{self, Breakpoint};
use crate::category::Category;
use crate::error::Error;

pub use co::Co;
pub use no2::No2;
pub use o3::O3;
pub use pm10::Pm10;
pub use pm25::Pm25;
pub use so2::So2;

// ───────────────────────────────────────────────────────────────
// Pollutant kind
// ───────────────────────────────────────────────────────────────

/// Supported pollutant kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25,
    Pm10,
    Co,
    So2,
    No2,
    O3,
}

impl Pollutant {
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::O3,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::Co => "CO",
            Self::So2 => "SO2",
            Self::No2 => "NO2",
            Self::O3 => "O3",
        }
    }

    /// Concentration unit the breakpoint table is expressed in.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Pm25 | Self::Pm10 => "µg/m³",
            Self::Co | Self::O3 => "ppm",
            Self::So2 | Self::No2 => "ppb",
        }
    }

    /// Averaging period of the concentration, in hours.
    pub fn averaging_hours(self) -> u8 {
        match self {
            Self::Pm25 | Self::Pm10 => 24,
            Self::Co | Self::O3 => 8,
            Self::So2 | Self::No2 => 1,
        }
    }

    /// Breakpoint table for this kind.
    pub fn table(self) -> &'static [Breakpoint] {
        match self {
            Self::Pm25 => &pm25::TABLE,
            Self::Pm10 => &pm10::TABLE,
            Self::Co => &co::TABLE,
            Self::So2 => &so2::TABLE,
            Self::No2 => &no2::TABLE,
            Self::O3 => &o3::TABLE,
        }
    }

    /// Wrap a concentration in a data-driven [`Reading`].
    pub fn reading(self, value: f64) -> Reading {
        Reading {
            pollutant: self,
            value,
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pollutant {
    type Err = Error;

    /// Case-insensitive; accepts `pm2.5`, `pm2_5` and `pm25` for PM2.5.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pm25" | "pm2.5" | "pm2_5" => Ok(Self::Pm25),
            "pm10" => Ok(Self::Pm10),
            "co" => Ok(Self::Co),
            "so2" => Ok(Self::So2),
            "no2" => Ok(Self::No2),
            "o3" => Ok(Self::O3),
            _ => Err(Error::UnknownPollutant(s.to_string())),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Measurement contract
// ───────────────────────────────────────────────────────────────

/// A single concentration that can be placed in a breakpoint table.
///
/// Implementors supply [`pollutant`](Self::pollutant) and
/// [`value`](Self::value); the table lookup is shared.
pub trait Measurement {
    fn pollutant(&self) -> Pollutant;

    /// Raw concentration, in [`Pollutant::unit`].
    fn value(&self) -> f64;

    /// Breakpoint row the value falls in.
    fn breakpoint(&self) -> &'static Breakpoint {
        breakpoints::lookup(self.pollutant().table(), self.value())
    }

    /// `(low, high)` concentration bounds of the row.
    fn range(&self) -> (f64, f64) {
        self.breakpoint().range()
    }

    fn category(&self) -> Category {
        self.breakpoint().category
    }
}

/// Pollutant chosen at runtime (CLI flags, config files).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub pollutant: Pollutant,
    pub value: f64,
}

impl Measurement for Reading {
    fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    fn value(&self) -> f64 {
        self.value
    }
}

impl FromStr for Reading {
    type Err = Error;

    /// Parses `<pollutant>=<value>`, e.g. `pm10=160`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| Error::InvalidReading {
            input: s.to_string(),
            reason,
        };
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected <pollutant>=<value>"))?;
        let pollutant: Pollutant = name.parse()?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid("value is not a number"))?;
        Ok(pollutant.reading(value))
    }
}
