//! Command-line front end: read a delimited text file and print it to
//! stdout as a bordered ASCII table.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use eyre::{Result, WrapErr};
use log::debug;

use tabfmt::render_table;

/// Converts a .tsv or .csv file to an ASCII table and prints the result
/// to stdout.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a text file containing tab- or comma-separated table data
    filepath: PathBuf,

    /// Delimiter, one character or the escape `\t` (determined
    /// automatically for .tsv and .csv files)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: char,

    /// Desired table width in characters
    #[arg(short, long, default_value_t = 150)]
    width: usize,
}

/// Accepts a single-character delimiter, with `\t` spelling a tab.
fn parse_delimiter(raw: &str) -> Result<char, String> {
    if raw == "\\t" {
        return Ok('\t');
    }
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(delimiter), None) => Ok(delimiter),
        _ => Err(format!("delimiter must be a single character, got {raw:?}")),
    }
}

/// A `.csv` extension means comma and `.tsv` means tab, regardless of the
/// `--delimiter` flag; any other path keeps the flag's value.
fn delimiter_for(path: &Path, fallback: char) -> char {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => ',',
        Some("tsv") => '\t',
        _ => fallback,
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let delimiter = delimiter_for(&cli.filepath, cli.delimiter);
    debug!(
        "rendering {} with delimiter {delimiter:?} and width {}",
        cli.filepath.display(),
        cli.width
    );

    let contents = fs::read_to_string(&cli.filepath)
        .wrap_err_with(|| format!("failed to read {}", cli.filepath.display()))?;
    let lines: Vec<&str> = contents.lines().collect();
    debug!("read {} lines", lines.len());

    println!("{}", render_table(&lines, delimiter, cli.width));
    Ok(())
}
