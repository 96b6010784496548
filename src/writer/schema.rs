//! JSON description of the inferred table layout.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::{Column, CsvDocument};

#[derive(Debug, Serialize)]
struct Schema<'a> {
    module: &'a str,
    #[serde(rename = "type")]
    type_name: &'a str,
    source: &'a str,
    key: &'a str,
    columns: &'a [Column],
    entries: usize,
}

pub fn render(doc: &CsvDocument) -> serde_json::Result<String> {
    let schema = Schema {
        module: &doc.module,
        type_name: &doc.type_name,
        source: &doc.source,
        key: &doc.key_header,
        columns: &doc.columns,
        entries: doc.entries.len(),
    };
    serde_json::to_string_pretty(&schema)
}

/// Write `<out_dir>/<module>.schema.json` and return its path.
pub fn emit(doc: &CsvDocument, out_dir: &Path) -> io::Result<PathBuf> {
    let text = render(doc)?;
    let path = out_dir.join(format!("{}.schema.json", doc.module));
    fs::write(&path, text + "\n")?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScalarType;
    use serde_json::{Value, json};

    #[test]
    fn test_schema_shape() {
        let doc = CsvDocument {
            module: "spells".into(),
            type_name: "Spell".into(),
            source: "data/spells.csv".into(),
            key_header: "Name".into(),
            columns: vec![Column {
                header: "Range".into(),
                field: "range".into(),
                ty: ScalarType::F32,
                optional: true,
            }],
            entries: vec![],
        };

        let parsed: Value = serde_json::from_str(&render(&doc).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({
                "module": "spells",
                "type": "Spell",
                "source": "data/spells.csv",
                "key": "Name",
                "columns": [
                    { "header": "Range", "field": "range", "type": "f32", "optional": true }
                ],
                "entries": 0
            })
        );
    }
}
