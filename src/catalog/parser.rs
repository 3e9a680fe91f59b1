use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::record::StormRecord;

/// Parses one catalog line: `year month pressure speed name...`.
///
/// Returns `Ok(None)` for blank lines. The name is whatever follows the fourth field with
/// everything except ASCII letters removed, so `"  Ione (2)"` becomes `"Ione"`.
pub fn parse_line(line: &str, line_number: usize) -> CatalogResult<Option<StormRecord>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let mut rest = trimmed;
    let year = parse_int(take_field(&mut rest, "year", line_number)?, "year", line_number)?;
    let month = take_field(&mut rest, "month", line_number)?.to_string();
    let pressure = parse_int(take_field(&mut rest, "pressure", line_number)?, "pressure", line_number)?;
    let speed = parse_int(take_field(&mut rest, "speed", line_number)?, "speed", line_number)?;

    let name: String = rest.chars().filter(char::is_ascii_alphabetic).collect();

    Ok(Some(StormRecord::new(year, month, pressure, speed, name)))
}

/// Splits the next whitespace-delimited field off the front of `rest`.
fn take_field<'a>(rest: &mut &'a str, label: &str, line_number: usize) -> CatalogResult<&'a str> {
    let remaining: &'a str = (*rest).trim_start();
    if remaining.is_empty() {
        return Err(CatalogError::Parse {
            line: line_number,
            reason: format!("missing {} field", label),
        });
    }
    let end = remaining.find(char::is_whitespace).unwrap_or(remaining.len());
    let (field, tail) = remaining.split_at(end);
    *rest = tail;
    Ok(field)
}

fn parse_int(field: &str, label: &str, line_number: usize) -> CatalogResult<i32> {
    field.parse().map_err(|_| CatalogError::Parse {
        line: line_number,
        reason: format!("{} '{}' is not an integer", label, field),
    })
}

pub fn read_records<R: BufRead>(reader: R) -> CatalogResult<Vec<StormRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_line(&line, index + 1)? {
            records.push(record);
        }
    }
    Ok(records)
}

pub fn parse_str(content: &str) -> CatalogResult<Vec<StormRecord>> {
    read_records(content.as_bytes())
}

pub fn load_file<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<StormRecord>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}
