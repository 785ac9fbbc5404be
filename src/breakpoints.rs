//! Breakpoint tables and sub-range lookup.
//!
//! A table is an ordered slice of [`Breakpoint`] rows, one per category,
//! with strictly increasing concentration bounds.  Published EPA tables
//! leave a rounding gap between rows (12.0 → 12.1); a value that lands in
//! such a gap belongs to the lower row, the same as truncating it to the
//! table's precision.  The top row is open-ended: any value above it is
//! still classified there.

use serde::Serialize;

use crate::category::Category;

/// One concentration sub-range of a pollutant's breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    /// Lowest concentration of the row (inclusive).
    pub low: f64,
    /// Highest concentration of the row (inclusive).
    pub high: f64,
    pub category: Category,
}

impl Breakpoint {
    pub const fn new(low: f64, high: f64, category: Category) -> Self {
        Self {
            low,
            high,
            category,
        }
    }

    /// `(low, high)` bounds.
    pub const fn range(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Return the row for `value`.
///
/// Last row whose `low` is at or below the value; the first row if none.
/// Tables are non-empty by construction (see the `pollutant` module).
pub fn lookup(table: &'static [Breakpoint], value: f64) -> &'static Breakpoint {
    table
        .iter()
        .rev()
        .find(|row| value >= row.low)
        .unwrap_or(&table[0])
}

/// Highest concentration covered by the table's explicit rows.
pub fn ceiling(table: &[Breakpoint]) -> f64 {
    table.last().map_or(0.0, |row| row.high)
}

/// Structural check: non-empty, starts at zero, rows ordered and
/// categories strictly increasing.
pub fn is_well_formed(table: &[Breakpoint]) -> bool {
    let Some(first) = table.first() else {
        return false;
    };
    if first.low != 0.0 {
        return false;
    }
    table.iter().all(|row| row.low < row.high)
        && table
            .windows(2)
            .all(|pair| pair[0].high < pair[1].low && pair[0].category < pair[1].category)
}
