//! Csvcheck CLI - validate a CSV file and compute basic stats.
//!
//! ```bash
//! csvcheck people.csv                        # default columns, age in 'edad'
//! csvcheck people.csv --columns id,name,age --age-col age
//! csvcheck people.csv --json                 # machine-readable result
//! ```
//!
//! Exit codes: 0 = clean, 1 = row-level validation errors, 2 = hard failure
//! (missing file, undecodable content, empty file, missing columns).

use clap::Parser;
use csvcheck::{validate_csv, ValidationResult};
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csvcheck")]
#[command(about = "Validate a CSV file and compute basic stats (age average)", long_about = None)]
struct Cli {
    /// Path to the CSV file
    file: PathBuf,

    /// Comma-separated expected columns
    #[arg(long, default_value = "id,nombre,edad,ciudad")]
    columns: String,

    /// Age column name
    #[arg(long = "age-col", default_value = "edad")]
    age_col: String,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let expected: HashSet<String> = cli
        .columns
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    let result = match validate_csv(&cli.file, &expected, &cli.age_col) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            return 2;
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Error: {}", e);
                return 2;
            }
        }
        return if result.errors.is_empty() { 0 } else { 1 };
    }

    report(&result, &cli.age_col)
}

fn report(result: &ValidationResult, age_col: &str) -> i32 {
    println!("✅ Encoding used: {}", result.encoding_used);
    println!("📄 Rows: {}", result.total_rows);

    if !result.errors.is_empty() {
        println!("\nErrors found:");
        for e in &result.errors {
            println!(" - {}", e);
        }
        return 1;
    }

    // avg_age is always set when the error list is empty
    if let Some(avg) = result.avg_age {
        println!("📊 Avg {}: {:.1}", age_col, avg);
    }
    println!("✔️ No errors found");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_exit_codes() {
        let clean = ValidationResult {
            total_rows: 1,
            avg_age: Some(23.0),
            errors: vec![],
            encoding_used: "utf-8".into(),
        };
        let dirty = ValidationResult {
            total_rows: 1,
            avg_age: None,
            errors: vec!["Row 1: Missing columns".into()],
            encoding_used: "utf-8".into(),
        };
        assert_eq!(report(&clean, "edad"), 0);
        assert_eq!(report(&dirty, "edad"), 1);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["csvcheck", "people.csv"]);
        assert_eq!(cli.columns, "id,nombre,edad,ciudad");
        assert_eq!(cli.age_col, "edad");
        assert!(!cli.json);
    }
}
