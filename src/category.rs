//! Severity categories and their AQI index metadata.
//!
//! Each [`Category`] is bound to exactly one [`Index`]: display name,
//! colour, health advisory and the sub-index range it spans on the
//! standardised 0–500 scale.  The index table is a `static` and is never
//! mutated.
//!
//! ```text
//!   0 ─ 50 ─ 100 ─ 150 ─ 200 ─── 300 ─── 400 ─── 500
//!   Good Mod  USG   Unh   V.Unh   Haz     V.Haz
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Discrete severity level, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    /// Upper half of the hazardous band (AQI 401–500).
    VeryHazardous,
}

impl Category {
    /// All categories in order from best to worst, for iteration.
    pub const ALL: [Category; 7] = [
        Category::Good,
        Category::Moderate,
        Category::UnhealthyForSensitiveGroups,
        Category::Unhealthy,
        Category::VeryUnhealthy,
        Category::Hazardous,
        Category::VeryHazardous,
    ];

    /// Index metadata for this category.
    pub fn index(self) -> Result<&'static Index> {
        find_index(&INDEXES, self)
    }
}

/// 8-bit display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form for HTML/terminal renderers.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Metadata for one AQI band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Index {
    pub category: Category,
    pub name: &'static str,
    pub color: Rgb,
    pub advisory: &'static str,
    /// Lowest sub-index of the band (inclusive).
    pub low: u16,
    /// Highest sub-index of the band (inclusive).
    pub high: u16,
}

impl Index {
    /// Band containing the given AQI value.
    ///
    /// The value is truncated to an integer first, so 50.7 is still Good.
    /// Negative values map to the lowest band and values past 500 to the
    /// highest.  NaN has no band.
    pub fn for_aqi(aqi: f64) -> Option<&'static Index> {
        if aqi.is_nan() {
            return None;
        }
        let truncated = aqi.floor();
        INDEXES
            .iter()
            .find(|idx| truncated <= f64::from(idx.high))
            .or(INDEXES.last())
    }

    /// True if `aqi` (truncated) falls inside this band.
    pub fn contains(&self, aqi: f64) -> bool {
        let truncated = aqi.floor();
        truncated >= f64::from(self.low) && truncated <= f64::from(self.high)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ---------------------------------------------------------------------------
// Index table
// ---------------------------------------------------------------------------

const HAZARDOUS_ADVISORY: &str = "Health emergency: the entire population is affected.";

/// EPA index bands in severity order.
pub static INDEXES: [Index; 7] = [
    Index {
        category: Category::Good,
        name: "Good",
        color: Rgb::new(0, 228, 0),
        advisory: "Air quality is satisfactory with little or no risk.",
        low: 0,
        high: 50,
    },
    Index {
        category: Category::Moderate,
        name: "Moderate",
        color: Rgb::new(255, 255, 0),
        advisory: "Acceptable quality. Sensitive individuals may experience minor effects.",
        low: 51,
        high: 100,
    },
    Index {
        category: Category::UnhealthyForSensitiveGroups,
        name: "Unhealthy for Sensitive Groups",
        color: Rgb::new(255, 126, 0),
        advisory: "Sensitive groups (children, elderly) may experience health effects.",
        low: 101,
        high: 150,
    },
    Index {
        category: Category::Unhealthy,
        name: "Unhealthy",
        color: Rgb::new(255, 0, 0),
        advisory: "Everyone may begin to experience health effects.",
        low: 151,
        high: 200,
    },
    Index {
        category: Category::VeryUnhealthy,
        name: "Very Unhealthy",
        color: Rgb::new(153, 0, 76),
        advisory: "Health alert: serious effects for the entire population.",
        low: 201,
        high: 300,
    },
    Index {
        category: Category::Hazardous,
        name: "Hazardous",
        color: Rgb::new(125, 0, 35),
        advisory: HAZARDOUS_ADVISORY,
        low: 301,
        high: 400,
    },
    Index {
        category: Category::VeryHazardous,
        name: "Very Hazardous",
        color: Rgb::new(125, 0, 35),
        advisory: HAZARDOUS_ADVISORY,
        low: 401,
        high: 500,
    },
];

fn find_index(table: &'static [Index], category: Category) -> Result<&'static Index> {
    table
        .iter()
        .find(|idx| idx.category == category)
        .ok_or(Error::UnknownCategory(category))
}
