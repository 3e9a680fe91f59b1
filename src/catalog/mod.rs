pub mod error;
pub mod order;
pub mod parser;
pub mod record;
pub mod search;
pub mod sort;
pub mod stats;


pub use error::{CatalogError, CatalogResult};
pub use order::SortKey;
pub use record::{classify, StormRecord};
pub use search::NameMatch;
pub use stats::CatalogSummary;

use std::path::Path;
use tracing::debug;

/// An ordered, in-memory collection of storm records and every operation the organizer
/// offers over it. Sorts reorder the collection in place; searches and aggregates read it.
#[derive(Debug, Clone, Default)]
pub struct StormCatalog {
    records: Vec<StormRecord>,
    name_match: NameMatch,
}

impl StormCatalog {
    pub fn new(records: Vec<StormRecord>) -> Self {
        Self {
            records,
            name_match: NameMatch::default(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let records = parser::load_file(&path)?;
        debug!("Loaded {} records from {}", records.len(), path.as_ref().display());
        Ok(Self::new(records))
    }

    pub fn parse(content: &str) -> CatalogResult<Self> {
        Ok(Self::new(parser::parse_str(content)?))
    }

    pub fn with_name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn name_match(&self) -> NameMatch {
        self.name_match
    }

    pub fn set_name_match(&mut self, name_match: NameMatch) {
        self.name_match = name_match;
    }

    pub fn records(&self) -> &[StormRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<StormRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ---- sorting ----

    pub fn sort_by(&mut self, key: SortKey) {
        match key {
            SortKey::Year => self.sort_years(),
            SortKey::Name => self.sort_names(),
            SortKey::Category => self.sort_categories(),
            SortKey::Pressure => self.sort_pressures(),
            SortKey::Speed => self.sort_wind_speeds(),
        }
    }

    /// Year ascending, selection sort.
    pub fn sort_years(&mut self) {
        sort::selection_sort_by(&mut self.records, order::by_year);
        debug!("Sorted {} records by year", self.records.len());
    }

    /// Name ascending ignoring case, insertion sort.
    pub fn sort_names(&mut self) {
        sort::insertion_sort_by(&mut self.records, order::by_name);
        debug!("Sorted {} records by name", self.records.len());
    }

    /// Category descending, selection sort.
    pub fn sort_categories(&mut self) {
        sort::selection_sort_by(&mut self.records, order::by_category_desc);
        debug!("Sorted {} records by category", self.records.len());
    }

    /// Pressure descending, two-phase merge sort.
    pub fn sort_pressures(&mut self) {
        sort::two_phase_merge_sort_by(&mut self.records, order::by_pressure_desc);
        debug!("Sorted {} records by pressure", self.records.len());
    }

    /// Pressure descending over `[start, end)` only, selection sort.
    pub fn sort_pressures_range(&mut self, start: usize, end: usize) -> CatalogResult<()> {
        if start > end || end > self.records.len() {
            return Err(self.invalid_range(start, end));
        }
        sort::selection_sort_range_by(&mut self.records, start..end, order::by_pressure_desc);
        debug!("Sorted records {}..{} by pressure", start, end);
        Ok(())
    }

    /// Wind speed ascending, recursive merge sort.
    pub fn sort_wind_speeds(&mut self) {
        sort::merge_sort_by(&mut self.records, order::by_speed);
        debug!("Sorted {} records by wind speed", self.records.len());
    }

    /// Wind speed ascending over the inclusive range `[low, high]`, recursive merge sort.
    pub fn sort_wind_speeds_range(&mut self, low: usize, high: usize) -> CatalogResult<()> {
        if low > high || high >= self.records.len() {
            return Err(self.invalid_range(low, high));
        }
        sort::merge_sort_range_by(&mut self.records, low, high, order::by_speed);
        debug!("Sorted records {}..={} by wind speed", low, high);
        Ok(())
    }

    fn invalid_range(&self, start: usize, end: usize) -> CatalogError {
        CatalogError::InvalidRange {
            start,
            end,
            len: self.records.len(),
        }
    }

    // ---- searching ----

    /// Every record from `year`, in current catalog order.
    pub fn search_year(&self, year: i32) -> Vec<StormRecord> {
        let matches = search::sequential_search(&self.records, |record| record.year() == year);
        debug!("Year {} matched {} records", year, matches.len());
        matches
    }

    /// Sorts the catalog by name, then returns every record named `name`.
    pub fn search_name(&mut self, name: &str) -> Vec<StormRecord> {
        self.sort_names();
        self.search_sorted_name(name)
    }

    /// Binary search by name without sorting first. The catalog must already be in name
    /// order; otherwise the result is unspecified.
    pub fn search_sorted_name(&self, name: &str) -> Vec<StormRecord> {
        let mode = self.name_match;
        let run = search::binary_search_run(&self.records, |record| {
            mode.compare(record.name(), name)
        });
        debug!("Name '{}' matched {} records ({:?})", name, run.len(), mode);
        self.records[run].to_vec()
    }

    // ---- aggregates ----

    pub fn max_wind_speed(&self) -> CatalogResult<i32> {
        stats::max_of(&self.records, StormRecord::wind_speed_knots)
    }

    pub fn min_wind_speed(&self) -> CatalogResult<i32> {
        stats::min_of(&self.records, StormRecord::wind_speed_knots)
    }

    pub fn max_pressure(&self) -> CatalogResult<i32> {
        stats::max_of(&self.records, StormRecord::central_pressure)
    }

    pub fn min_pressure(&self) -> CatalogResult<i32> {
        stats::min_of(&self.records, StormRecord::central_pressure)
    }

    pub fn average_wind_speed(&self) -> CatalogResult<f64> {
        stats::mean_of(&self.records, |record| record.wind_speed_knots() as f64)
    }

    pub fn average_pressure(&self) -> CatalogResult<f64> {
        stats::mean_of(&self.records, |record| record.central_pressure() as f64)
    }

    pub fn average_category(&self) -> CatalogResult<f64> {
        stats::mean_of(&self.records, |record| record.category() as f64)
    }

    pub fn summary(&self) -> CatalogResult<CatalogSummary> {
        Ok(CatalogSummary {
            record_count: self.records.len(),
            max_wind_speed: self.max_wind_speed()?,
            min_wind_speed: self.min_wind_speed()?,
            max_pressure: self.max_pressure()?,
            min_pressure: self.min_pressure()?,
            average_wind_speed: self.average_wind_speed()?,
            average_pressure: self.average_pressure()?,
            average_category: self.average_category()?,
        })
    }
}
