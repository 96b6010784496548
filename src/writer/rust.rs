//! Emit a Rust module for one processed CSV table.
//!
//! Layout of the generated file: header, record struct, `const fn new`,
//! one `const` per row, then `ALL`, `NAMES` and `get`.

use std::fmt::{self, Write};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{Column, CsvDocument, Entry, ScalarType, Value};

const INDENT: &str = "    ";

/// Render the whole module. Output only depends on `doc`.
pub fn render(doc: &CsvDocument) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_header(&mut out, doc)?;
    write_struct(&mut out, doc)?;
    write_constructor(&mut out, doc)?;
    for entry in &doc.entries {
        write_entry(&mut out, doc, entry)?;
    }
    write_tables(&mut out, doc)?;
    write_lookup_fn(&mut out, doc)?;
    Ok(out)
}

/// Write `<out_dir>/<module>.rs` and return its path.
pub fn emit(doc: &CsvDocument, out_dir: &Path) -> io::Result<PathBuf> {
    let text = render(doc).map_err(io::Error::other)?;
    let path = out_dir.join(format!("{}.rs", doc.module));
    fs::write(&path, text)?;
    Ok(path)
}

fn write_header(out: &mut impl Write, doc: &CsvDocument) -> fmt::Result {
    writeln!(
        out,
        "//! Auto-generated from `{}` by csvgen.",
        comment_text(&doc.source)
    )?;
    writeln!(out, "//! Do not edit manually - regenerate with csvgen.")?;
    writeln!(out)
}

fn write_struct(out: &mut impl Write, doc: &CsvDocument) -> fmt::Result {
    writeln!(out, "#[derive(Debug, Clone, Copy, PartialEq)]")?;
    writeln!(out, "pub struct {} {{", doc.type_name)?;
    for column in &doc.columns {
        writeln!(
            out,
            "{INDENT}/// CSV column `{}`.",
            comment_text(&column.header)
        )?;
        writeln!(out, "{INDENT}pub {}: {},", column.field, column.rust_type())?;
    }
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_constructor(out: &mut impl Write, doc: &CsvDocument) -> fmt::Result {
    let params: Vec<String> = doc
        .columns
        .iter()
        .map(|c| format!("{}: {}", c.field, c.rust_type()))
        .collect();

    writeln!(out, "impl {} {{", doc.type_name)?;
    if doc.columns.len() > 7 {
        writeln!(out, "{INDENT}#[allow(clippy::too_many_arguments)]")?;
    }
    writeln!(out, "{INDENT}pub const fn new({}) -> Self {{", params.join(", "))?;
    writeln!(out, "{INDENT}{INDENT}Self {{")?;
    for column in &doc.columns {
        writeln!(out, "{INDENT}{INDENT}{INDENT}{},", column.field)?;
    }
    writeln!(out, "{INDENT}{INDENT}}}")?;
    writeln!(out, "{INDENT}}}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn write_entry(out: &mut impl Write, doc: &CsvDocument, entry: &Entry) -> fmt::Result {
    writeln!(
        out,
        "pub const {}: {} = {} {{",
        entry.ident, doc.type_name, doc.type_name
    )?;
    for (column, value) in doc.columns.iter().zip(&entry.values) {
        writeln!(out, "{INDENT}{}: {},", column.field, literal(column, value))?;
    }
    writeln!(out, "}};")?;
    writeln!(out)
}

fn write_tables(out: &mut impl Write, doc: &CsvDocument) -> fmt::Result {
    let idents: Vec<String> = doc.entries.iter().map(|e| e.ident.clone()).collect();
    write_slice(out, "ALL", &doc.type_name, &idents)?;
    writeln!(out)?;

    let names: Vec<String> = doc
        .entries
        .iter()
        .map(|e| format!("\"{}\"", escape_str(&e.name)))
        .collect();
    write_slice(out, "NAMES", "&str", &names)?;
    writeln!(out)
}

fn write_slice(
    out: &mut impl Write,
    name: &str,
    ty: &str,
    items: &[String],
) -> fmt::Result {
    if items.is_empty() {
        return writeln!(out, "pub static {name}: &[{ty}] = &[];");
    }
    writeln!(out, "pub static {name}: &[{ty}] = &[")?;
    for item in items {
        writeln!(out, "{INDENT}{item},")?;
    }
    writeln!(out, "];")
}

fn write_lookup_fn(out: &mut impl Write, doc: &CsvDocument) -> fmt::Result {
    writeln!(
        out,
        "/// Look up an entry by its `{}` cell.",
        comment_text(&doc.key_header)
    )?;
    writeln!(
        out,
        "pub fn get(name: &str) -> Option<&'static {}> {{",
        doc.type_name
    )?;
    writeln!(
        out,
        "{INDENT}NAMES.iter().position(|n| *n == name).map(|i| &ALL[i])"
    )?;
    writeln!(out, "}}")
}

/// Rust literal for one cell.
fn literal(column: &Column, value: &Value) -> String {
    let scalar = match value {
        Value::Missing => return "None".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        // `{:?}` keeps the `.0` on whole numbers: 5.0, 0.7, 1e20
        Value::Float(f) => format!("{f:?}"),
        Value::Str(s) if column.ty == ScalarType::Str => format!("\"{}\"", escape_str(s)),
        // a numeric column never holds text after inference
        Value::Str(s) => s.clone(),
    };
    if column.optional {
        format!("Some({scalar})")
    } else {
        scalar
    }
}

/// Flatten text for a single-line `//` comment: control characters
/// (embedded newlines in quoted headers) become spaces.
fn comment_text(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Escape a string for use inside a Rust string literal.
fn escape_str(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
