//! Fine particulate matter (PM2.5), 24-hour average in µg/m³.
//!
//! The hazardous band is split at 350.4 µg/m³; concentrations above
//! 500.4 extend the top row.

use serde::{Deserialize, Serialize};

use super::{Measurement, Pollutant};
use crate::breakpoints::Breakpoint;
use crate::category::Category;

pub static TABLE: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.0, Category::Good),
    Breakpoint::new(12.1, 35.4, Category::Moderate),
    Breakpoint::new(35.5, 55.4, Category::UnhealthyForSensitiveGroups),
    Breakpoint::new(55.5, 150.4, Category::Unhealthy),
    Breakpoint::new(150.5, 250.4, Category::VeryUnhealthy),
    Breakpoint::new(250.5, 350.4, Category::Hazardous),
    Breakpoint::new(350.5, 500.4, Category::VeryHazardous),
];

/// PM2.5 concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pm25(pub f64);

impl Measurement for Pm25 {
    fn pollutant(&self) -> Pollutant {
        Pollutant::Pm25
    }

    fn value(&self) -> f64 {
        self.0
    }
}
