use csv::{ReaderBuilder, Trim};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::RawTable;

/// How the CSV text is split into cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    /// Lines starting with this byte are skipped.
    pub comment: Option<u8>,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            comment: Some(b'#'),
        }
    }
}

impl Dialect {
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(Error::InvalidDelimiter(delimiter));
        }
        Ok(Self {
            delimiter: delimiter as u8,
            ..Self::default()
        })
    }
}

/// Read the whole CSV text into a `RawTable`.
///
/// The first record is the header row. It must have at least two
/// columns (key + data), none of them blank or repeated. Ragged rows are
/// rejected by the csv reader itself.
pub fn read_csv(text: &str, dialect: &Dialect) -> Result<RawTable> {
    info!(bytes = text.len(), "reading CSV");

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(dialect.delimiter)
        .comment(dialect.comment)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(Error::EmptyInput);
    }
    if headers.len() < 2 {
        return Err(Error::NoDataColumns(headers.len()));
    }

    let mut seen = HashSet::new();
    for (column, header) in headers.iter().enumerate() {
        if header.is_empty() {
            return Err(Error::BlankHeader { column });
        }
        if !seen.insert(header.as_str()) {
            return Err(Error::DuplicateHeader(header.clone()));
        }
    }
    debug!(?headers, "header row");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!(columns = headers.len(), rows = rows.len(), "CSV read");
    Ok(RawTable { headers, rows })
}
