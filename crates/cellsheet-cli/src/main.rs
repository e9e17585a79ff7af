//! cellsheet CLI - query CSV files by spreadsheet address

use anyhow::{Context, Result};
use cellsheet::prelude::*;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellsheet")]
#[command(
    author,
    version,
    about = "Read CSV data by spreadsheet address (R14, P3-15, 9-11)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    read: ReadArgs,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

/// CSV tokenizer settings
#[derive(Args, Debug)]
struct ReadArgs {
    /// Field delimiter
    #[arg(short, long, default_value = ",", global = true)]
    delimiter: char,

    /// Quote character
    #[arg(long, default_value = "\"", global = true)]
    quote: char,

    /// Trim whitespace around fields
    #[arg(long, global = true)]
    trim: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the value of one cell (e.g. R14)
    Cell {
        /// Input CSV file
        input: PathBuf,

        /// Cell address: column letters followed by a row number
        address: String,
    },

    /// Print a column or part of it (e.g. P, P4, P3-15)
    Column {
        /// Input CSV file
        input: PathBuf,

        /// Column range: letters, optional start row, optional "-end" row
        range: String,

        /// Keep empty values at the end of the column
        #[arg(long)]
        keep_empty_tail: bool,
    },

    /// Print one or more rows keyed by column letter (e.g. 9, 9-11)
    Row {
        /// Input CSV file
        input: PathBuf,

        /// Row number or "start-end" range
        rows: String,

        /// First column letter
        #[arg(long, default_value = "A")]
        from: String,

        /// Last column letter (default: end of row)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the size of a CSV file in rows and columns
    Info {
        /// Input CSV file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = read_options(&cli.read)?;

    match cli.command {
        Commands::Cell { input, address } => show_cell(&input, &options, &address, cli.json),
        Commands::Column {
            input,
            range,
            keep_empty_tail,
        } => show_column(&input, &options, &range, !keep_empty_tail, cli.json),
        Commands::Row {
            input,
            rows,
            from,
            to,
        } => show_rows(&input, &options, &rows, &from, to.as_deref(), cli.json),
        Commands::Info { input } => show_info(&input, &options, cli.json),
    }
}

/// Log to stderr, filtered by RUST_LOG or the -v count
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn read_options(args: &ReadArgs) -> Result<CsvReadOptions> {
    Ok(CsvReadOptions::default()
        .with_delimiter(single_byte(args.delimiter, "delimiter")?)
        .with_quote(single_byte(args.quote, "quote")?)
        .with_trim(args.trim))
}

fn single_byte(c: char, what: &str) -> Result<u8> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .with_context(|| format!("{} must be a single ASCII character, got '{}'", what, c))
}

fn open(input: &Path, options: &CsvReadOptions) -> Result<Worksheet> {
    Worksheet::open_with_options(input, options)
        .with_context(|| format!("Failed to open '{}'", input.display()))
}

fn show_cell(input: &Path, options: &CsvReadOptions, address: &str, json: bool) -> Result<()> {
    let sheet = open(input, options)?;
    let value = sheet
        .cell(address)
        .with_context(|| format!("Failed to read cell '{}'", address))?;

    if json {
        print_json(&value)
    } else {
        write_out(&format!("{}\n", value))
    }
}

fn show_column(
    input: &Path,
    options: &CsvReadOptions,
    range: &str,
    trim_empty_tail: bool,
    json: bool,
) -> Result<()> {
    let sheet = open(input, options)?;
    let data = sheet
        .column_data(range, trim_empty_tail)
        .with_context(|| format!("Failed to read column '{}'", range))?;

    if json {
        print_json(&data)
    } else {
        write_out(&format_column(&data))
    }
}

fn show_rows(
    input: &Path,
    options: &CsvReadOptions,
    rows: &str,
    from: &str,
    to: Option<&str>,
    json: bool,
) -> Result<()> {
    let sheet = open(input, options)?;
    let data = sheet
        .row_data(rows, from, to)
        .with_context(|| format!("Failed to read rows '{}'", rows))?;

    if json {
        print_json(&data)
    } else {
        write_out(&format_rows(&data))
    }
}

fn show_info(input: &Path, options: &CsvReadOptions, json: bool) -> Result<()> {
    let sheet = open(input, options)?;
    let last_column = sheet.columns().last_letter().unwrap_or("-");

    if json {
        return print_json(&serde_json::json!({
            "file": input.display().to_string(),
            "rows": sheet.row_count(),
            "columns": sheet.column_count(),
            "last_column": sheet.columns().last_letter(),
        }));
    }

    write_out(&format!(
        "File: {}\nRows: {}\nColumns: {} (A..{})\n",
        input.display(),
        sheet.row_count(),
        sheet.column_count(),
        last_column
    ))
}

/// One `row<TAB>value` line per entry
fn format_column(data: &BTreeMap<u32, String>) -> String {
    data.iter()
        .map(|(row, value)| format!("{}\t{}\n", row, value))
        .collect()
}

/// One line per row: `row<TAB>LETTER=value<TAB>...`
fn format_rows(data: &BTreeMap<u32, RowValues>) -> String {
    let mut out = String::new();
    for (row, values) in data {
        out.push_str(&row.to_string());
        for (letter, value) in values.iter() {
            out.push('\t');
            out.push_str(letter);
            out.push('=');
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    write_out(&format!("{}\n", text))
}

fn write_out(text: &str) -> Result<()> {
    io::stdout()
        .write_all(text.as_bytes())
        .context("Failed to write to stdout")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_cell_command() {
        let cli = Cli::try_parse_from(["cellsheet", "cell", "reels.csv", "C2"]).unwrap();

        match cli.command {
            Commands::Cell { input, address } => {
                assert_eq!(input, PathBuf::from("reels.csv"));
                assert_eq!(address, "C2");
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(!cli.json);
        assert_eq!(cli.read.delimiter, ',');
    }

    #[test]
    fn test_parse_column_command() {
        let cli = Cli::try_parse_from([
            "cellsheet",
            "column",
            "reels.csv",
            "P3-15",
            "--keep-empty-tail",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(matches!(
            cli.command,
            Commands::Column { ref range, keep_empty_tail: true, .. } if range == "P3-15"
        ));
    }

    #[test]
    fn test_parse_row_command() {
        let cli = Cli::try_parse_from([
            "cellsheet", "row", "reels.csv", "9-11", "--from", "P", "--to", "U", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Row { rows, from, to, .. } => {
                assert_eq!(rows, "9-11");
                assert_eq!(from, "P");
                assert_eq!(to.as_deref(), Some("U"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_row_defaults_to_column_a() {
        let cli = Cli::try_parse_from(["cellsheet", "row", "reels.csv", "9"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Row { ref from, to: None, .. } if from == "A"
        ));
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["cellsheet", "cell", "reels.csv"]).is_err());
        assert!(Cli::try_parse_from(["cellsheet"]).is_err());
    }

    #[test]
    fn test_read_options() {
        let cli = Cli::try_parse_from([
            "cellsheet", "info", "data.tsv", "--delimiter", ";", "--trim",
        ])
        .unwrap();
        let options = read_options(&cli.read).unwrap();

        assert_eq!(options.delimiter, b';');
        assert_eq!(options.quote, b'"');
        assert!(options.trim);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert!(single_byte('§', "delimiter").is_err());
        assert_eq!(single_byte('\t', "delimiter").unwrap(), b'\t');
    }

    #[test]
    fn test_format_column() {
        let data: BTreeMap<u32, String> =
            [(3, "H1".to_string()), (4, String::new())].into_iter().collect();
        assert_eq!(format_column(&data), "3\tH1\n4\t\n");
    }

    #[test]
    fn test_format_rows() {
        let mut data = BTreeMap::new();
        data.insert(9, [("P", "H3"), ("U", "60")].into_iter().collect::<RowValues>());
        data.insert(10, [("P", "H3"), ("U", "25")].into_iter().collect::<RowValues>());

        assert_eq!(format_rows(&data), "9\tP=H3\tU=60\n10\tP=H3\tU=25\n");
    }

    #[test]
    fn test_json_shapes() {
        let mut data = BTreeMap::new();
        data.insert(9, [("P", "H3"), ("U", "60")].into_iter().collect::<RowValues>());

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({ "9": { "P": "H3", "U": "60" } }));
    }
}
