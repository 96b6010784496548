//! Column type inference.
//!
//! Each non-empty cell is classified on its own, then the column takes the
//! widest class seen. Empty cells only make the column optional.

use crate::model::{ScalarType, Value};

/// Narrowest type that can hold `cell` (already trimmed, non-empty).
fn classify(cell: &str) -> ScalarType {
    if cell == "true" || cell == "false" {
        ScalarType::Bool
    } else if cell.parse::<i32>().is_ok() {
        ScalarType::I32
    } else if cell.parse::<i64>().is_ok() {
        ScalarType::I64
    } else if cell.parse::<f32>().is_ok_and(f32::is_finite) {
        ScalarType::F32
    } else {
        ScalarType::Str
    }
}

/// Join two cell classes. `bool` only mixes with itself; anything else
/// mixed with it falls back to a string.
fn widen(a: ScalarType, b: ScalarType) -> ScalarType {
    match (a, b) {
        (x, y) if x == y => x,
        (ScalarType::Bool, _) | (_, ScalarType::Bool) => ScalarType::Str,
        (x, y) => x.max(y),
    }
}

/// Returns the column type and whether any cell was empty.
pub fn infer_column<'a, I>(cells: I) -> (ScalarType, bool)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut ty: Option<ScalarType> = None;
    let mut optional = false;

    for cell in cells {
        if cell.is_empty() {
            optional = true;
            continue;
        }
        let class = classify(cell);
        ty = Some(match ty {
            Some(current) => widen(current, class),
            None => class,
        });
    }

    // nothing but blanks: keep it as text
    (ty.unwrap_or(ScalarType::Str), optional)
}

/// Convert a cell into a typed value. `ty` must come from `infer_column`
/// over a set of cells that includes this one.
pub fn convert(cell: &str, ty: ScalarType) -> Value {
    if cell.is_empty() {
        return Value::Missing;
    }
    match ty {
        ScalarType::Bool => Value::Bool(cell == "true"),
        ScalarType::I32 | ScalarType::I64 => {
            cell.parse().map_or_else(|_| Value::Str(cell.to_string()), Value::Int)
        }
        ScalarType::F32 => cell
            .parse()
            .map_or_else(|_| Value::Str(cell.to_string()), Value::Float),
        ScalarType::Str => Value::Str(cell.to_string()),
    }
}
