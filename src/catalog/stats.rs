use serde::{Deserialize, Serialize};

use crate::catalog::error::{CatalogError, CatalogResult};

pub fn max_of<T, F>(items: &[T], field: F) -> CatalogResult<i32>
where
    F: Fn(&T) -> i32,
{
    items.iter().map(field).max().ok_or(CatalogError::EmptyCatalog)
}

pub fn min_of<T, F>(items: &[T], field: F) -> CatalogResult<i32>
where
    F: Fn(&T) -> i32,
{
    items.iter().map(field).min().ok_or(CatalogError::EmptyCatalog)
}

/// Arithmetic mean of `field`, accumulated in `f64`.
pub fn mean_of<T, F>(items: &[T], field: F) -> CatalogResult<f64>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    let sum: f64 = items.iter().map(field).sum();
    Ok(sum / items.len() as f64)
}

/// Every aggregate the catalog reports, computed in one go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub record_count: usize,
    pub max_wind_speed: i32,
    pub min_wind_speed: i32,
    pub max_pressure: i32,
    pub min_pressure: i32,
    pub average_wind_speed: f64,
    pub average_pressure: f64,
    pub average_category: f64,
}
