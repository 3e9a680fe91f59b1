use serde::{Deserialize, Serialize};
use std::fmt;
use crate::constants::*;

/// One storm observation. The category is derived from the wind speed when the record is
/// built and cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StormFields")]
pub struct StormRecord {
    year: i32,
    month: String,
    name: String,
    wind_speed_knots: i32,
    central_pressure: i32,
    category: u8,
}

#[derive(Deserialize)]
struct StormFields {
    year: i32,
    month: String,
    name: String,
    wind_speed_knots: i32,
    central_pressure: i32,
}

impl From<StormFields> for StormRecord {
    fn from(fields: StormFields) -> Self {
        Self::new(
            fields.year,
            fields.month,
            fields.central_pressure,
            fields.wind_speed_knots,
            fields.name,
        )
    }
}

impl StormRecord {
    /// Argument order follows the catalog line layout: year, month, pressure, speed, name.
    pub fn new(
        year: i32,
        month: impl Into<String>,
        central_pressure: i32,
        wind_speed_knots: i32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month: month.into(),
            name: name.into(),
            wind_speed_knots,
            central_pressure,
            category: classify(wind_speed_knots),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wind_speed_knots(&self) -> i32 {
        self.wind_speed_knots
    }

    pub fn central_pressure(&self) -> i32 {
        self.central_pressure
    }

    pub fn category(&self) -> u8 {
        self.category
    }

    pub fn compare_year_to(&self, other: &Self) -> i32 {
        self.year.saturating_sub(other.year)
    }

    /// Case-insensitive name comparison. Returns the difference between the first pair of
    /// lowercase characters that differ, or the length difference when one name is a prefix
    /// of the other.
    pub fn compare_name_to(&self, other: &Self) -> i32 {
        let mut left = self.name.chars().flat_map(char::to_lowercase);
        let mut right = other.name.chars().flat_map(char::to_lowercase);
        loop {
            match (left.next(), right.next()) {
                (Some(a), Some(b)) if a != b => return a as i32 - b as i32,
                (Some(_), Some(_)) => continue,
                (Some(_), None) => return 1 + left.by_ref().count() as i32,
                (None, Some(_)) => return -(1 + right.by_ref().count() as i32),
                (None, None) => return 0,
            }
        }
    }

    pub fn compare_pressure_to(&self, other: &Self) -> i32 {
        self.central_pressure.saturating_sub(other.central_pressure)
    }

    pub fn compare_speed_to(&self, other: &Self) -> i32 {
        self.wind_speed_knots.saturating_sub(other.wind_speed_knots)
    }

    pub fn compare_category_to(&self, other: &Self) -> i32 {
        self.category as i32 - other.category as i32
    }
}

/// Saffir-Simpson category for a sustained wind speed in knots. Speeds below hurricane
/// strength, negative ones included, are category 0.
pub fn classify(knots: i32) -> u8 {
    if knots < CATEGORY_1_MIN_KNOTS {
        0
    } else if knots < CATEGORY_2_MIN_KNOTS {
        1
    } else if knots < CATEGORY_3_MIN_KNOTS {
        2
    } else if knots < CATEGORY_4_MIN_KNOTS {
        3
    } else if knots < CATEGORY_5_MIN_KNOTS {
        4
    } else {
        MAX_CATEGORY
    }
}

impl fmt::Display for StormRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<yw$} {:<mw$} {:<nw$} {:<cw$} {:>kw$} {:>pw$} ",
            self.year,
            self.month,
            self.name,
            self.category,
            self.wind_speed_knots,
            self.central_pressure,
            yw = YEAR_COLUMN_WIDTH,
            mw = MONTH_COLUMN_WIDTH,
            nw = NAME_COLUMN_WIDTH,
            cw = CATEGORY_COLUMN_WIDTH,
            kw = KNOTS_COLUMN_WIDTH,
            pw = PRESSURE_COLUMN_WIDTH,
        )
    }
}
