//! Output stage: everything that turns a `CsvDocument` into files.
pub mod rust;
pub mod schema;
