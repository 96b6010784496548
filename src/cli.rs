use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .csv table; the first column names each generated constant
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
    /// Module name (output file stem); defaults to the input file stem
    #[arg(long)]
    pub name: Option<String>,
    /// Record type name; defaults to the module name without a plural `s`
    #[arg(long)]
    pub type_name: Option<String>,
    /// Field delimiter
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
    /// Also write `<name>.schema.json` describing the inferred columns
    #[arg(long)]
    pub schema: bool,
}
