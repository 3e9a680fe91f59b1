//! Text rendering for records and aggregate results.

use std::io::{self, Write};

use crate::catalog::{CatalogResult, StormCatalog, StormRecord};
use crate::constants::*;

pub fn header() -> String {
    format!(
        "{:<yw$} {:<mw$} {:<nw$} {:<cw$} {:<kw$} {:<pw$} ",
        "Year",
        "Mon.",
        "Name",
        "Cat.",
        "Knots",
        "Pressure",
        yw = YEAR_COLUMN_WIDTH,
        mw = MONTH_COLUMN_WIDTH,
        nw = NAME_COLUMN_WIDTH,
        cw = CATEGORY_COLUMN_WIDTH,
        kw = KNOTS_COLUMN_WIDTH,
        pw = PRESSURE_COLUMN_WIDTH,
    )
}

/// Writes a header followed by one row per record, or the empty-result line.
pub fn write_records<W: Write>(out: &mut W, records: &[StormRecord]) -> io::Result<()> {
    if records.is_empty() {
        writeln!(out, "\n{}", EMPTY_RESULT_MESSAGE)?;
        return Ok(());
    }
    writeln!(out, "\n{}", header())?;
    for record in records {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

pub fn extremes(catalog: &StormCatalog) -> CatalogResult<String> {
    Ok(format!(
        "Maximum wind speed is {} knots and minimum wind speed is {} knots.\n\
         Maximum pressure is {} and minimum pressure is {}.",
        catalog.max_wind_speed()?,
        catalog.min_wind_speed()?,
        catalog.max_pressure()?,
        catalog.min_pressure()?,
    ))
}

pub fn averages(catalog: &StormCatalog) -> CatalogResult<String> {
    Ok(format!(
        "Average wind speed is {:5.2} knots.\n\
         Average pressure is {:5.2}.\n\
         Average category is {:5.2}.",
        catalog.average_wind_speed()?,
        catalog.average_pressure()?,
        catalog.average_category()?,
    ))
}

/// Writes a rendered aggregate, or the error message when the catalog has nothing to
/// aggregate.
pub fn write_aggregate<W: Write>(out: &mut W, rendered: CatalogResult<String>) -> io::Result<()> {
    match rendered {
        Ok(text) => writeln!(out, "{}", text),
        Err(e) => writeln!(out, "{}", e),
    }
}

/// Writes the catalog summary as pretty JSON. An empty catalog gets the error message, as
/// the text aggregates do.
pub fn write_summary_json<W: Write>(out: &mut W, catalog: &StormCatalog) -> io::Result<()> {
    match catalog.summary() {
        Ok(summary) => {
            serde_json::to_writer_pretty(&mut *out, &summary)?;
            writeln!(out)
        }
        Err(e) => writeln!(out, "{}", e),
    }
}
