pub mod cli;
pub mod combat;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
// generator output; `cargo fmt` must not drift it from `data/spells.csv`
#[rustfmt::skip]
pub mod spells;
pub mod writer;

pub use error::{Error, Result};

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;

/// CSV text in, generated Rust source out. No filesystem access.
pub fn generate(
    csv_text: &str,
    dialect: &parser::Dialect,
    options: &processor::Options,
) -> anyhow::Result<String> {
    let raw = parser::read_csv(csv_text, dialect).with_context(|| "Reading CSV")?;
    let doc = processor::run(&raw, options).with_context(|| "Processing table")?;
    let source = writer::rust::render(&doc).with_context(|| "Rendering Rust module")?;
    Ok(source)
}

fn module_name(cli: &cli::Cli) -> anyhow::Result<String> {
    if let Some(name) = &cli.name {
        return Ok(name.clone());
    }
    cli.input
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .with_context(|| {
            format!(
                "Cannot derive a module name from {}",
                cli.input.display()
            )
        })
}

fn source_label(input: &Path) -> String {
    input.display().to_string().replace('\\', "/")
}

pub fn run() -> anyhow::Result<()> {
    run_with(&cli::Cli::parse()).map(|_| ())
}

/// Runs the whole pipeline for already-parsed arguments and returns the
/// paths of every file written.
pub fn run_with(args: &cli::Cli) -> anyhow::Result<Vec<PathBuf>> {
    // 1. ── Read ───────────────────────────────────────────────────────
    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let dialect = parser::Dialect::with_delimiter(args.delimiter)?;
    let raw = parser::read_csv(&text, &dialect)
        .with_context(|| format!("Parsing {}", args.input.display()))?;

    // 2. ── Process ────────────────────────────────────────────────────
    let mut options =
        processor::Options::new(module_name(args)?, source_label(&args.input));
    options.type_name = args.type_name.clone();
    let doc = processor::run(&raw, &options).with_context(|| "Processing table")?;

    // 3. ── Write outputs ──────────────────────────────────────────────
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Creating {}", args.output.display()))?;

    let rust_path = writer::rust::emit(&doc, &args.output)
        .with_context(|| "Writing Rust module")?;
    let mut written = vec![rust_path];
    if args.schema {
        let schema_path = writer::schema::emit(&doc, &args.output)
            .with_context(|| "Writing schema")?;
        written.push(schema_path);
    }

    for path in &written {
        info!(path = %path.display(), "wrote");
    }
    Ok(written)
}
