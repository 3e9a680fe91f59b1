// Record collection engine: records, comparators, sorts, searches, aggregates
pub mod catalog;

// Constants shared by the engine, the reports and the CLI
pub mod constants;

// Collaborators around the engine
pub mod cli;
pub mod config;
pub mod report;
pub mod session;
pub mod utils;

// Re-export main types for convenience
pub use catalog::{CatalogError, CatalogSummary, NameMatch, SortKey, StormCatalog, StormRecord};
pub use config::Config;
