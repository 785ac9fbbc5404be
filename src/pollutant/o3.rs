//! Ozone (O3), 8-hour average in ppm.
//!
//! The 8-hour table stops at Very Unhealthy (0.200 ppm); higher
//! concentrations stay in that row like every other open-ended top row.

use serde::{Deserialize, Serialize};

use super::{Measurement, Pollutant};
use crate::breakpoints::Breakpoint;
use crate::category::Category;

pub static TABLE: [Breakpoint; 5] = [
    Breakpoint::new(0.0, 0.054, Category::Good),
    Breakpoint::new(0.055, 0.070, Category::Moderate),
    Breakpoint::new(0.071, 0.085, Category::UnhealthyForSensitiveGroups),
    Breakpoint::new(0.086, 0.105, Category::Unhealthy),
    Breakpoint::new(0.106, 0.200, Category::VeryUnhealthy),
];

/// O3 concentration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct O3(pub f64);

impl Measurement for O3 {
    fn pollutant(&self) -> Pollutant {
        Pollutant::O3
    }

    fn value(&self) -> f64 {
        self.0
    }
}
