// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;

use crate::dataset::{EXPIRY_SHEET, IngestWarning, SALES_SHEET};
use crate::models::{ExpiryLot, PricingEntry, PromotionEntry, SalesRecord};
use crate::utils::{coerce_date, coerce_num};

/// A sheet as read from disk: header row plus untyped string cells.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Case-insensitive header lookup. Extra columns are simply never
    /// looked up, which is how they get ignored.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    }
}

fn require(
    table: &RawTable,
    sheet: &'static str,
    column: &'static str,
    warnings: &mut Vec<IngestWarning>,
) -> Option<usize> {
    let idx = table.column(column);
    if idx.is_none() {
        warnings.push(IngestWarning::MissingColumn { sheet, column });
    }
    idx
}

fn cell<'a>(row: &'a [String], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).map(String::as_str).unwrap_or("")
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

/// Column indices for the sales sheet, resolved once per table so the
/// per-row loop never repeats presence checks.
struct SalesColumns {
    date: Option<usize>,
    product: Option<usize>,
    qty: Option<usize>,
    unit_price: Option<usize>,
    total: Option<usize>,
    opening_stock: Option<usize>,
    remaining_stock: Option<usize>,
}

impl SalesColumns {
    fn map(table: &RawTable, warnings: &mut Vec<IngestWarning>) -> Self {
        Self {
            date: require(table, SALES_SHEET, "Tanggal", warnings),
            product: require(table, SALES_SHEET, "Produk", warnings),
            qty: table.column("Qty"),
            unit_price: table.column("Harga"),
            total: table.column("Total"),
            opening_stock: table.column("Stok_Awal"),
            remaining_stock: table.column("Sisa_Stok"),
        }
    }
}

/// Normalize the sales sheet. Rows are always retained; any cell that does
/// not coerce stays undefined for that field only.
pub fn normalize_sales(table: &RawTable, warnings: &mut Vec<IngestWarning>) -> Vec<SalesRecord> {
    let cols = SalesColumns::map(table, warnings);
    let mut records: Vec<SalesRecord> = table
        .rows
        .iter()
        .map(|row| {
            let date = coerce_date(cell(row, cols.date));
            SalesRecord {
                date,
                product: non_empty(cell(row, cols.product)),
                qty: coerce_num(cell(row, cols.qty)),
                unit_price: coerce_num(cell(row, cols.unit_price)),
                total: coerce_num(cell(row, cols.total)),
                opening_stock: coerce_num(cell(row, cols.opening_stock)),
                remaining_stock: coerce_num(cell(row, cols.remaining_stock)),
                year: date.map(|d| d.year()),
            }
        })
        .collect();

    // The sheet may omit Total (or carry it empty throughout); derive it
    // from Qty x Harga. A partially filled Total column is kept as-is.
    if cols.total.is_none() || records.iter().all(|r| r.total.is_none()) {
        for r in &mut records {
            r.total = r.qty.zip(r.unit_price).map(|(q, p)| q * p);
        }
    }
    records
}

pub fn normalize_expiry(table: &RawTable, warnings: &mut Vec<IngestWarning>) -> Vec<ExpiryLot> {
    let product = table.column("Produk");
    let batch = table.column("Batch_No");
    let expiry = require(table, EXPIRY_SHEET, "Exp_Date", warnings);
    let qty = table.column("Qty_Stok");
    table
        .rows
        .iter()
        .map(|row| ExpiryLot {
            product: non_empty(cell(row, product)),
            batch: non_empty(cell(row, batch)),
            expiry_date: coerce_date(cell(row, expiry)),
            qty: coerce_num(cell(row, qty)),
        })
        .collect()
}

pub fn normalize_pricing(table: &RawTable) -> Vec<PricingEntry> {
    let product = table.column("Produk");
    let purchase = table.column("Harga_Beli");
    let sale = table.column("Harga_Jual");
    table
        .rows
        .iter()
        .map(|row| PricingEntry {
            product: non_empty(cell(row, product)),
            purchase_price: coerce_num(cell(row, purchase)),
            sale_price: coerce_num(cell(row, sale)),
        })
        .collect()
}

pub fn normalize_promo(table: &RawTable) -> Vec<PromotionEntry> {
    let label = table.column("Promosi");
    let target = table.column("Target_Sales");
    let actual = table.column("Actual_Sales");
    let cost = table.column("Biaya_Promosi");
    table
        .rows
        .iter()
        .map(|row| PromotionEntry {
            label: non_empty(cell(row, label)),
            target_sales: coerce_num(cell(row, target)),
            actual_sales: coerce_num(cell(row, actual)),
            cost: coerce_num(cell(row, cost)),
        })
        .collect()
}
