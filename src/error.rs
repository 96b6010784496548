use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input has no header row")]
    EmptyInput,

    #[error("header of column {column} is blank")]
    BlankHeader { column: usize },

    #[error("duplicate header `{0}`")]
    DuplicateHeader(String),

    #[error("table needs a key column and at least one data column, got {0} column(s)")]
    NoDataColumns(usize),

    #[error("delimiter `{0}` is not a single ASCII character")]
    InvalidDelimiter(char),

    #[error("row {row} has an empty key cell")]
    MissingKey { row: usize },

    #[error("`{text}` does not yield a valid identifier")]
    InvalidIdentifier { text: String },

    #[error("headers `{first}` and `{second}` both map to field `{field}`")]
    DuplicateField {
        first: String,
        second: String,
        field: String,
    },

    #[error("entries `{first}` and `{second}` both map to constant `{ident}`")]
    DuplicateEntry {
        first: String,
        second: String,
        ident: String,
    },

    #[error("entry `{0}` maps to a reserved constant name")]
    ReservedEntry(String),

    #[error("type name `{0}` would shadow a prelude item used by the generated code")]
    ReservedTypeName(String),
}

pub type Result<T> = std::result::Result<T, Error>;
