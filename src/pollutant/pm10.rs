//! Coarse particulate matter (PM10), 24-hour average in µg/m³.

use serde::{Deserialize, Serialize};

use super::{Measurement, Pollutant};
use crate::breakpoints::Breakpoint;
use crate::category::Category;

pub static TABLE: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 54.0, Category::Good),
    Breakpoint::new(55.0, 154.0, Category::Moderate),
    Breakpoint::new(155.0, 254.0, Category::UnhealthyForSensitiveGroups),
    Breakpoint::new(255.0, 354.0, Category::Unhealthy),
    Breakpoint::new(355.0, 424.0, Category::VeryUnhealthy),
    Breakpoint::new(425.0, 504.0, Category::Hazardous),
    Breakpoint::new(505.0, 604.0, Category::VeryHazardous),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pm10(pub f64);

impl Measurement for Pm10 {
    fn pollutant(&self) -> Pollutant {
        Pollutant::Pm10
    }

    fn value(&self) -> f64 {
        self.0
    }
}
