//! SeeedBOM CLI - KiCad XML netlist to Seeed Fusion PCBA BOM from the command line.

use clap::Parser;
use seeedbom::{BomOptions, BomReport, SeeedBomCore};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seeedbom")]
#[command(about = "Generate a Seeed Fusion PCBA BOM from a KiCad XML netlist", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the KiCad XML netlist export
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file name without extension; the BOM is written to <OUTPUT>.csv
    #[arg(value_name = "OUTPUT")]
    output: String,
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let exit_code = handle_convert(&cli.input, &cli.output);

    process::exit(exit_code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for the missing-part warning
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn handle_convert(input: &Path, slug: &str) -> i32 {
    match SeeedBomCore::convert(input, slug, BomOptions::default()) {
        Ok(report) => {
            output_unresolved(&report);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_unresolved(report: &BomReport) {
    if !report.has_unresolved() {
        return;
    }
    let refs: Vec<&str> = report.unresolved.iter().map(|r| r.as_str()).collect();
    println!("** Warning **: there were parts with missing SKU/MPN");
    println!("{}", refs.join(", "));
}
