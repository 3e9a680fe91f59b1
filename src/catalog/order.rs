use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::catalog::record::StormRecord;

/// The orderings the catalog can be sorted by. Each maps to one comparator and one sort
/// algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Year ascending
    Year,
    /// Name ascending, ignoring case
    Name,
    /// Category descending
    Category,
    /// Central pressure descending
    Pressure,
    /// Wind speed ascending
    Speed,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Year,
        SortKey::Name,
        SortKey::Category,
        SortKey::Pressure,
        SortKey::Speed,
    ];

    pub fn comparator(self) -> fn(&StormRecord, &StormRecord) -> Ordering {
        match self {
            SortKey::Year => by_year,
            SortKey::Name => by_name,
            SortKey::Category => by_category_desc,
            SortKey::Pressure => by_pressure_desc,
            SortKey::Speed => by_speed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Year => "year",
            SortKey::Name => "name",
            SortKey::Category => "category",
            SortKey::Pressure => "pressure",
            SortKey::Speed => "speed",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn by_year(a: &StormRecord, b: &StormRecord) -> Ordering {
    a.compare_year_to(b).cmp(&0)
}

pub fn by_name(a: &StormRecord, b: &StormRecord) -> Ordering {
    a.compare_name_to(b).cmp(&0)
}

pub fn by_category_desc(a: &StormRecord, b: &StormRecord) -> Ordering {
    b.compare_category_to(a).cmp(&0)
}

pub fn by_pressure_desc(a: &StormRecord, b: &StormRecord) -> Ordering {
    b.compare_pressure_to(a).cmp(&0)
}

pub fn by_speed(a: &StormRecord, b: &StormRecord) -> Ordering {
    a.compare_speed_to(b).cmp(&0)
}

/// Whether `records` is already in `key` order. Adjacent equal keys are allowed.
pub fn is_sorted_by(records: &[StormRecord], key: SortKey) -> bool {
    let cmp = key.comparator();
    records.windows(2).all(|pair| cmp(&pair[0], &pair[1]) != Ordering::Greater)
}
