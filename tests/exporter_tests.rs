// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use groseri::{cli, commands::exporter, dataset, kpi};
use tempfile::tempdir;

#[test]
fn export_sales_round_trips_through_ingestion() {
    let ds = dataset::load(None);
    let dir = tempdir().unwrap();
    // name the file like the sheet so the export re-ingests as sales data
    let out = dir.path().join("sales data.csv");
    let out_str = out.to_string_lossy().to_string();

    let matches =
        cli::build_cli().get_matches_from(["groseri", "export", "sales", "--out", &out_str]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&ds, export_m).unwrap();

    let reloaded = dataset::load(Some(dir.path()));
    assert!(reloaded.warnings.is_empty());
    assert_eq!(reloaded.sales.len(), ds.sales.len());
    assert_eq!(kpi::total_sales(&reloaded.sales), kpi::total_sales(&ds.sales));
    assert_eq!(reloaded.sales, ds.sales);
}

#[test]
fn export_sales_writes_the_processed_header_row() {
    let ds = dataset::load(None);
    let dir = tempdir().unwrap();
    let out = dir.path().join("processed.csv");
    let out_str = out.to_string_lossy().to_string();

    let matches =
        cli::build_cli().get_matches_from(["groseri", "export", "sales", "--out", &out_str]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&ds, export_m).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, exporter::SALES_EXPORT_HEADERS);
    assert_eq!(rdr.records().count(), 9);
}

#[test]
fn export_expiry_carries_days_and_status_for_the_given_date() {
    let ds = dataset::load(None);
    let dir = tempdir().unwrap();
    let out = dir.path().join("expiry.csv");
    let out_str = out.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "groseri", "export", "expiry", "--out", &out_str, "--as-of", "2025-10-01",
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(&ds, export_m).unwrap();

    let mut rdr = csv::Reader::from_path(&out).unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    // 2025-09-25 is six days gone; 2025-10-15 is two weeks out
    assert_eq!(&rows[0][4], "-6");
    assert_eq!(&rows[0][5], "Expired");
    assert_eq!(&rows[1][4], "14");
    assert_eq!(&rows[1][5], "Almost expired");
}

#[test]
fn export_expiry_rejects_a_malformed_reference_date() {
    let ds = dataset::load(None);
    let dir = tempdir().unwrap();
    let out = dir.path().join("expiry.csv");
    let out_str = out.to_string_lossy().to_string();

    let matches = cli::build_cli().get_matches_from([
        "groseri", "export", "expiry", "--out", &out_str, "--as-of", "bulan depan",
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    assert!(exporter::handle(&ds, export_m).is_err());
    assert!(!out.exists());
}
