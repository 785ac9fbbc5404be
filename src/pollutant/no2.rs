//! Nitrogen dioxide (NO2), 1-hour average in ppb.

use serde::{Deserialize, Serialize};

use super::{Measurement, Pollutant};
use crate::breakpoints::Breakpoint;
use crate::category::Category;

pub static TABLE: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 53.0, Category::Good),
    Breakpoint::new(54.0, 100.0, Category::Moderate),
    Breakpoint::new(101.0, 360.0, Category::UnhealthyForSensitiveGroups),
    Breakpoint::new(361.0, 649.0, Category::Unhealthy),
    Breakpoint::new(650.0, 1249.0, Category::VeryUnhealthy),
    Breakpoint::new(1250.0, 1649.0, Category::Hazardous),
    Breakpoint::new(1650.0, 2049.0, Category::VeryHazardous),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct No2(pub f64);

impl Measurement for No2 {
    fn pollutant(&self) -> Pollutant {
        Pollutant::No2
    }

    fn value(&self) -> f64 {
        self.0
    }
}
