//! Simple BOM example: convert a netlist and print the resulting rows.

use seeedbom::prelude::*;
use std::path::Path;

fn main() -> Result<(), SeeedBomError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/fixtures/seeed_demo.xml".to_string());
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_bom [path/to/netlist.xml]");
        std::process::exit(1);
    }

    let slug = path.with_extension("").to_string_lossy().into_owned();
    let report = SeeedBomCore::convert(path, &slug, BomOptions::default())?;

    println!("BOM written to: {}", report.output.display());
    println!("Parts: {}", report.bom.groups.len());
    println!();

    for row in report.rows() {
        println!(
            "  {:>3} x {:<24} {}",
            row.quantity,
            row.part,
            row.designators
        );
    }

    if report.has_unresolved() {
        println!("\nMissing SKU/MPN:");
        for reference in &report.unresolved {
            println!("  - {}", reference);
        }
    }

    Ok(())
}
