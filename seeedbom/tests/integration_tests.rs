//! Integration tests for SeeedBOM conversion

use seeedbom::prelude::*;
use seeedbom::{parse_netlist, HEADER};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn slug_in(dir: &Path, name: &str) -> String {
    dir.join(name).to_string_lossy().into_owned()
}

#[test]
fn test_convert_simple_board() {
    let dir = tempfile::tempdir().unwrap();
    let slug = slug_in(dir.path(), "simple");

    let report = SeeedBomCore::convert(
        &fixture_path("simple_board.xml"),
        &slug,
        BomOptions::default(),
    )
    .expect("Should convert");

    assert_eq!(report.output, dir.path().join("simple.csv"));
    assert_eq!(report.unresolved, vec![RefDes::from("D1")]);

    let csv = fs::read_to_string(&report.output).unwrap();
    assert_eq!(
        csv,
        "Part/Designator,Manufacture Part Number/Seeed SKU,Quantity,Link\r\n\
         \"C1,C2\",X,2,L\r\n\
         A1,Y,1,seeed OPL\r\n"
    );
}

#[test]
fn test_convert_seeed_demo() {
    let dir = tempfile::tempdir().unwrap();
    let slug = slug_in(dir.path(), "ble_node");

    let report = SeeedBomCore::convert(
        &fixture_path("seeed_demo.xml"),
        &slug,
        BomOptions::default(),
    )
    .expect("Should convert");

    let rows = report.rows();
    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.designators.as_str(), r.part.as_str(), r.quantity))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("A1,A4", "318020010", 2),
            ("J1", "B4B-PH-K-S(LF)(SN)", 1),
            ("D1", "CYBLE-014008-00", 1),
            ("C1,C2,C10", "RHA0J471MCN1GS", 3),
        ]
    );

    // SEED_SKU beats MPN on A4, empty SEED_SKU falls through on D1
    assert_eq!(rows[0].link.as_deref(), Some("seeed OPL"));
    assert_eq!(rows[1].link, None);
    assert!(rows[2]
        .link
        .as_deref()
        .is_some_and(|l| l.contains("CYBLE-014008-00")));

    assert_eq!(
        report.unresolved,
        vec![RefDes::from("R7"), RefDes::from("TP1")]
    );
}

#[test]
fn test_every_component_accounted_for() {
    let netlist = parse_netlist(&fixture_path("seeed_demo.xml")).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let report = SeeedBomCore::convert(
        &fixture_path("seeed_demo.xml"),
        &slug_in(dir.path(), "count"),
        BomOptions::default(),
    )
    .unwrap();

    assert_eq!(report.total_components(), netlist.components.len());
    let quantities: usize = report.rows().iter().map(|r| r.quantity).sum();
    assert_eq!(quantities + report.unresolved.len(), netlist.components.len());
}

#[test]
fn test_output_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let slug = slug_in(dir.path(), "bom");
    let output = dir.path().join("bom.csv");
    fs::write(&output, "stale content that is much longer than the real BOM\n".repeat(50)).unwrap();

    SeeedBomCore::convert(&fixture_path("simple_board.xml"), &slug, BomOptions::default())
        .unwrap();
    let first = fs::read_to_string(&output).unwrap();
    SeeedBomCore::convert(&fixture_path("simple_board.xml"), &slug, BomOptions::default())
        .unwrap();
    let second = fs::read_to_string(&output).unwrap();

    assert!(!first.contains("stale"));
    assert_eq!(first, second);
    assert_eq!(second.lines().count(), 3);
}

#[test]
fn test_custom_options() {
    let dir = tempfile::tempdir().unwrap();
    let options = BomOptions {
        opl_link: "OPL".to_string(),
        delimiter: b';',
    };

    let report = SeeedBomCore::convert(
        &fixture_path("simple_board.xml"),
        &slug_in(dir.path(), "custom"),
        options,
    )
    .unwrap();

    let csv = fs::read_to_string(&report.output).unwrap();
    assert!(csv.starts_with(&HEADER.join(";")));
    assert!(csv.contains("C1,C2;X;2;L\r\n"));
    assert!(csv.contains("A1;Y;1;OPL\r\n"));
}

#[test]
fn test_parse_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let slug = slug_in(dir.path(), "broken");

    let result = SeeedBomCore::convert(
        &fixture_path("malformed.xml"),
        &slug,
        BomOptions::default(),
    );

    assert!(matches!(result, Err(SeeedBomError::Parse(_))));
    assert!(!dir.path().join("broken.csv").exists());
}

#[test]
fn test_unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let slug = slug_in(&dir.path().join("missing_dir"), "bom");

    let result = SeeedBomCore::convert(
        &fixture_path("simple_board.xml"),
        &slug,
        BomOptions::default(),
    );

    assert!(matches!(result, Err(SeeedBomError::Io(_))));
}
