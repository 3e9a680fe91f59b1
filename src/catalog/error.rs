use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog line that could not be turned into a record. `line` is 1-based.
    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Catalog is empty; no aggregate can be computed")]
    EmptyCatalog,

    #[error("Invalid range {start}..{end} for a catalog of {len} records")]
    InvalidRange { start: usize, end: usize, len: usize },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
