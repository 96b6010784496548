use serde::Serialize;
use std::fmt;

/// Table exactly as it comes out of the CSV reader.
///
/// Cells are trimmed strings; every row has `headers.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Rust type a column is rendered as.
///
/// Variants are ordered from narrowest to widest; inference only ever
/// widens a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Bool,
    I32,
    I64,
    F32,
    Str,
}

impl ScalarType {
    pub const fn rust_name(self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::I32 => "i32",
            ScalarType::I64 => "i64",
            ScalarType::F32 => "f32",
            ScalarType::Str => "&'static str",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rust_name())
    }
}

/// One data column (everything but the key column).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Header text as written in the CSV.
    pub header: String,
    /// snake_case struct field.
    pub field: String,
    #[serde(rename = "type")]
    pub ty: ScalarType,
    /// At least one cell was empty; rendered as `Option<ty>`.
    pub optional: bool,
}

impl Column {
    pub fn rust_type(&self) -> String {
        if self.optional {
            format!("Option<{}>", self.ty)
        } else {
            self.ty.rust_name().to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f32),
    Str(String),
    Missing,
}

/// One CSV row, typed.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Raw key cell, e.g. `Heavy Strike`.
    pub name: String,
    /// SCREAMING_SNAKE constant, e.g. `HEAVY_STRIKE`.
    pub ident: String,
    /// One value per `CsvDocument::columns`, same order.
    pub values: Vec<Value>,
}

/// Fully processed table handed to `writer`.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    pub module: String,
    pub type_name: String,
    /// Where the table came from; only used in the generated header.
    pub source: String,
    pub key_header: String,
    pub columns: Vec<Column>,
    pub entries: Vec<Entry>,
}
