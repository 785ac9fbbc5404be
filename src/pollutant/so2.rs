//! Sulfur dioxide (SO2), 1-hour average in ppb.

use serde::{Deserialize, Serialize};

use super::{Measurement, Pollutant};
use crate::breakpoints::Breakpoint;
use crate::category::Category;

pub static TABLE: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 35.0, Category::Good),
    Breakpoint::new(36.0, 75.0, Category::Moderate),
    Breakpoint::new(76.0, 185.0, Category::UnhealthyForSensitiveGroups),
    Breakpoint::new(186.0, 304.0, Category::Unhealthy),
    Breakpoint::new(305.0, 604.0, Category::VeryUnhealthy),
    Breakpoint::new(605.0, 804.0, Category::Hazardous),
    Breakpoint::new(805.0, 1004.0, Category::VeryHazardous),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct So2(pub f64);

impl Measurement for So2 {
    fn pollutant(&self) -> Pollutant {
        Pollutant::So2
    }

    fn value(&self) -> f64 {
        self.0
    }
}
