//! Carbon monoxide (CO), 8-hour average in ppm.
//!
//! CO has an explicit very-hazardous row (40.5–50.4 ppm) above the
//! hazardous one.

use serde::{Deserialize, Serialize};

use super::{Measurement, Pollutant};
use crate::breakpoints::Breakpoint;
use crate::category::Category;

pub static TABLE: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 4.4, Category::Good),
    Breakpoint::new(4.5, 9.4, Category::Moderate),
    Breakpoint::new(9.5, 12.4, Category::UnhealthyForSensitiveGroups),
    Breakpoint::new(12.5, 15.4, Category::Unhealthy),
    Breakpoint::new(15.5, 30.4, Category::VeryUnhealthy),
    Breakpoint::new(30.5, 40.4, Category::Hazardous),
    Breakpoint::new(40.5, 50.4, Category::VeryHazardous),
];

/// CO concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Co(pub f64);

impl Measurement for Co {
    fn pollutant(&self) -> Pollutant {
        Pollutant::Co
    }

    fn value(&self) -> f64 {
        self.0
    }
}
