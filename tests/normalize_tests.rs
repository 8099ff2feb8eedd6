// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use groseri::commands::exporter;
use groseri::dataset;
use groseri::kpi;
use groseri::normalize::{RawTable, normalize_sales};
use rust_decimal::Decimal;

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

#[test]
fn total_recomputed_from_qty_times_price_when_column_absent() {
    let t = table(
        &["Tanggal", "Produk", "Qty", "Harga"],
        &[&["2025-06-01", "Kopi Sachet", "3", "2500"]],
    );
    let mut warnings = Vec::new();
    let recs = normalize_sales(&t, &mut warnings);
    assert_eq!(recs[0].total, Some(Decimal::from(7500)));
}

#[test]
fn total_recomputed_when_column_is_entirely_blank() {
    let t = table(
        &["Tanggal", "Produk", "Qty", "Harga", "Total"],
        &[
            &["2025-06-01", "Kopi Sachet", "3", "2500", ""],
            &["2025-06-02", "Gula 1kg", "2", "15000", ""],
        ],
    );
    let mut warnings = Vec::new();
    let recs = normalize_sales(&t, &mut warnings);
    assert_eq!(recs[0].total, Some(Decimal::from(7500)));
    assert_eq!(recs[1].total, Some(Decimal::from(30_000)));
}

#[test]
fn supplied_total_wins_over_recomputation() {
    // A partially filled Total column is taken at face value.
    let t = table(
        &["Tanggal", "Produk", "Qty", "Harga", "Total"],
        &[
            &["2025-06-01", "Kopi Sachet", "3", "2500", "9999"],
            &["2025-06-02", "Gula 1kg", "2", "15000", ""],
        ],
    );
    let mut warnings = Vec::new();
    let recs = normalize_sales(&t, &mut warnings);
    assert_eq!(recs[0].total, Some(Decimal::from(9999)));
    assert_eq!(recs[1].total, None);
}

#[test]
fn recomputed_total_is_undefined_when_an_operand_is() {
    let t = table(
        &["Tanggal", "Produk", "Qty", "Harga"],
        &[&["2025-06-01", "Kopi Sachet", "tiga", "2500"]],
    );
    let mut warnings = Vec::new();
    let recs = normalize_sales(&t, &mut warnings);
    assert_eq!(recs[0].qty, None);
    assert_eq!(recs[0].total, None);
}

#[test]
fn unparsable_cells_degrade_without_dropping_the_row() {
    let t = table(
        &["Tanggal", "Produk", "Qty", "Harga", "Total", "Stok_Awal", "Sisa_Stok"],
        &[&["kemarin", "Kopi Sachet", "x", "2500", "7500", "n/a", "90"]],
    );
    let mut warnings = Vec::new();
    let recs = normalize_sales(&t, &mut warnings);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].date, None);
    assert_eq!(recs[0].year, None);
    assert_eq!(recs[0].qty, None);
    assert_eq!(recs[0].opening_stock, None);
    // defined neighbours survive untouched
    assert_eq!(recs[0].total, Some(Decimal::from(7500)));
    assert_eq!(recs[0].remaining_stock, Some(Decimal::from(90)));
    assert!(warnings.is_empty());
}

#[test]
fn short_rows_are_padded_with_undefined() {
    let t = table(
        &["Tanggal", "Produk", "Qty", "Harga"],
        &[&["2025-06-01", "Kopi Sachet"]],
    );
    let mut warnings = Vec::new();
    let recs = normalize_sales(&t, &mut warnings);
    assert_eq!(recs[0].product.as_deref(), Some("Kopi Sachet"));
    assert_eq!(recs[0].qty, None);
}

#[test]
fn normalization_is_idempotent_over_its_own_export_format() {
    let first = dataset::sample_sales();
    let trends = kpi::trends(&first);

    let exported = RawTable {
        headers: exporter::SALES_EXPORT_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows: first
            .iter()
            .zip(trends)
            .map(|(rec, trend)| exporter::sales_row(rec, trend))
            .collect(),
    };

    let mut warnings = Vec::new();
    let second = normalize_sales(&exported, &mut warnings);
    assert!(warnings.is_empty());
    assert_eq!(first, second);
}
