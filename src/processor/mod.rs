//! The functional core: turns a `RawTable` into a typed, validated
//! `CsvDocument` ready for the writers.
pub mod ident;
pub mod infer;

use std::collections::HashMap;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{Column, CsvDocument, Entry, RawTable};

/// Constant names the writer emits itself.
pub const RESERVED_CONSTS: &[&str] = &["ALL", "NAMES"];

/// Prelude names the generated module uses unqualified.
pub const RESERVED_TYPES: &[&str] = &["Option", "Some", "None", "Result", "Ok", "Err"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Module (output file stem); converted to snake_case.
    pub module: String,
    /// Record type; derived from `module` when `None`.
    pub type_name: Option<String>,
    /// Recorded in the generated header.
    pub source: String,
}

impl Options {
    pub fn new(module: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            type_name: None,
            source: source.into(),
        }
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}

fn invalid(text: &str) -> Error {
    Error::InvalidIdentifier {
        text: text.to_string(),
    }
}

/// Runs every processing pass and returns a read-only structure for writers.
pub fn run(raw: &RawTable, options: &Options) -> Result<CsvDocument> {
    let module =
        ident::snake_case(&options.module).ok_or_else(|| invalid(&options.module))?;
    let type_name = match &options.type_name {
        Some(name) => ident::pascal_case(name).ok_or_else(|| invalid(name))?,
        None => ident::singular_type_name(&module).ok_or_else(|| invalid(&module))?,
    };
    if RESERVED_TYPES.contains(&type_name.as_str()) {
        return Err(Error::ReservedTypeName(type_name));
    }
    info!(%module, %type_name, "processing table");

    let (key_header, data_headers) = raw
        .headers
        .split_first()
        .filter(|(_, rest)| !rest.is_empty())
        .ok_or(Error::NoDataColumns(raw.headers.len()))?;

    let columns = build_columns(raw, data_headers)?;
    let entries = build_entries(raw, &columns)?;

    info!(
        columns = columns.len(),
        entries = entries.len(),
        "table processed"
    );

    Ok(CsvDocument {
        module,
        type_name,
        source: options.source.clone(),
        key_header: key_header.clone(),
        columns,
        entries,
    })
}

fn build_columns(raw: &RawTable, data_headers: &[String]) -> Result<Vec<Column>> {
    let mut fields: HashMap<String, &str> = HashMap::new();
    let mut columns = Vec::with_capacity(data_headers.len());

    for (i, header) in data_headers.iter().enumerate() {
        let field = ident::snake_case(header).ok_or_else(|| invalid(header))?;
        if let Some(first) = fields.insert(field.clone(), header) {
            return Err(Error::DuplicateField {
                first: first.to_string(),
                second: header.clone(),
                field,
            });
        }

        // +1: column 0 is the key
        let (ty, optional) =
            infer::infer_column(raw.rows.iter().map(|row| row[i + 1].as_str()));
        debug!(%header, %field, %ty, optional, "column inferred");

        columns.push(Column {
            header: header.clone(),
            field,
            ty,
            optional,
        });
    }
    Ok(columns)
}

fn build_entries(raw: &RawTable, columns: &[Column]) -> Result<Vec<Entry>> {
    let mut idents: HashMap<String, &str> = HashMap::new();
    let mut entries = Vec::with_capacity(raw.rows.len());

    for (row_idx, row) in raw.rows.iter().enumerate() {
        let name = &row[0];
        if name.is_empty() {
            return Err(Error::MissingKey { row: row_idx + 1 });
        }
        let ident = ident::screaming_snake(name).ok_or_else(|| invalid(name))?;
        if RESERVED_CONSTS.contains(&ident.as_str()) {
            return Err(Error::ReservedEntry(name.clone()));
        }
        if let Some(first) = idents.insert(ident.clone(), name) {
            return Err(Error::DuplicateEntry {
                first: first.to_string(),
                second: name.clone(),
                ident,
            });
        }

        let values = columns
            .iter()
            .zip(&row[1..])
            .map(|(column, cell)| infer::convert(cell, column.ty))
            .collect();
        debug!(%name, %ident, "entry built");

        entries.push(Entry {
            name: name.clone(),
            ident,
            values,
        });
    }
    Ok(entries)
}
