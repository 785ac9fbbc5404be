//! EPA Air Quality Index calculation.
//!
//! Converts pollutant concentrations into an AQI value and severity band
//! using the piecewise-linear breakpoint method.  Construct one classifier
//! per measurement and hand them to [`calculate`]:
//!
//! ```
//! use airindex::{calculate, Category, Pm25, Pm10};
//!
//! let result = calculate(&[&Pm25(26.4), &Pm10(40.0)]).unwrap();
//! assert_eq!(result.category(), Some(Category::Moderate));
//! println!("AQI is {:.3}", result.aqi);
//! ```
//!
//! Everything is pure; the only shared data are `static` tables.

#![deny(unused_must_use)]

pub mod breakpoints;
pub mod calculator;
pub mod category;
pub mod cli;
pub mod config;
pub mod pollutant;

mod error;

pub use calculator::{Assessment, Calculator, SubIndex, calculate};
pub use category::{Category, INDEXES, Index, Rgb};
pub use config::{AboveRangePolicy, CalculatorConfig};
pub use error::{Error, Result};
pub use pollutant::{Co, Measurement, No2, O3, Pm10, Pm25, Pollutant, Reading, So2};
