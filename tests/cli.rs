//! Runs the pipeline against real files in a temp directory.

use std::fs;

use assert_cmd::Command;
use csvgen::cli::Cli;
use csvgen::run_with;
use predicates::str::contains;
use tempfile::tempdir;

fn cli(input: &std::path::Path, output: &std::path::Path) -> Cli {
    Cli {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        name: None,
        type_name: None,
        delimiter: ',',
        schema: false,
    }
}

#[test]
fn writes_module_named_after_input() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("generated");

    let written = run_with(&cli("data/spells.csv".as_ref(), &out)).unwrap();

    assert_eq!(written, vec![out.join("spells.rs")]);
    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text, fs::read_to_string("src/spells.rs").unwrap());
}

#[test]
fn schema_and_overrides() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("items.tsv");
    fs::write(&input, "Item\tWeight\tStackable\nArrow\t0.1\ttrue\n").unwrap();

    let mut args = cli(&input, dir.path());
    args.name = Some("Loot Table".into());
    args.type_name = Some("loot".into());
    args.delimiter = '\t';
    args.schema = true;

    let written = run_with(&args).unwrap();
    assert_eq!(
        written,
        vec![
            dir.path().join("loot_table.rs"),
            dir.path().join("loot_table.schema.json")
        ]
    );

    let module = fs::read_to_string(&written[0]).unwrap();
    let arrow = "pub const ARROW: Loot = Loot {\n    weight: 0.1,\n    stackable: true,\n};";
    assert!(module.contains(arrow));

    let schema = fs::read_to_string(&written[1]).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&schema).unwrap();
    assert_eq!(schema["type"], "Loot");
    assert_eq!(schema["key"], "Item");
    assert_eq!(schema["entries"], 1);
    assert_eq!(schema["columns"][1]["type"], "bool");
}

#[test]
fn missing_input_is_reported() {
    let dir = tempdir().unwrap();
    let err = run_with(&cli(&dir.path().join("nope.csv"), dir.path())).unwrap_err();
    assert!(err.to_string().starts_with("Reading "), "got {err}");
}

#[test]
fn binary_exits_non_zero_on_bad_table() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "Name,Cost\nFireball,15,1\n").unwrap();

    Command::cargo_bin("csvgen")
        .unwrap()
        .arg(&input)
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(contains("Parsing"));
}

#[test]
fn binary_generates_module() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("csvgen")
        .unwrap()
        .arg("tests/fixtures/Example.csv")
        .arg(dir.path())
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("example.rs")).unwrap();
    assert!(text.contains("pub struct Example {"));
    assert!(text.contains("pub const FROSTBOLT: Example = Example {"));
}
