// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use csv::ReaderBuilder;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{ExpiryLot, PricingEntry, PromotionEntry, SalesRecord};
use crate::normalize::{self, RawTable};
use crate::utils::coerce_date;

pub const SALES_SHEET: &str = "Sales Data";
pub const EXPIRY_SHEET: &str = "Expiry Data";
pub const PRICING_SHEET: &str = "Pricing Data";
pub const PROMO_SHEET: &str = "Promo Data";

/// Non-fatal ingestion problems. Each one degrades to sample data or to
/// undefined values; none of them stops the pipeline.
#[derive(Debug, Error)]
pub enum IngestWarning {
    #[error("could not read data directory {}: {reason}; using sample data", .path.display())]
    UnreadableDir { path: PathBuf, reason: String },
    #[error(
        "could not read '{sheet}' from {}: {reason}; using sample data for that sheet",
        .path.display()
    )]
    UnreadableSheet {
        sheet: &'static str,
        path: PathBuf,
        reason: String,
    },
    #[error("'{sheet}' has no '{column}' column; its values are treated as undefined")]
    MissingColumn {
        sheet: &'static str,
        column: &'static str,
    },
}

/// The four normalized tables for one run. Rebuilt from scratch on every
/// invocation; nothing persists between runs.
#[derive(Debug)]
pub struct Dataset {
    pub sales: Vec<SalesRecord>,
    pub expiry: Vec<ExpiryLot>,
    pub pricing: Vec<PricingEntry>,
    pub promo: Vec<PromotionEntry>,
    pub warnings: Vec<IngestWarning>,
}

/// Load the four sheets from `dir`, falling back to the bundled sample
/// table for any sheet that is absent or unreadable. With no directory at
/// all, the whole sample dataset is used.
pub fn load(dir: Option<&Path>) -> Dataset {
    let mut warnings = Vec::new();
    let files = match dir {
        Some(d) => match sheet_files(d) {
            Ok(files) => files,
            Err(e) => {
                warnings.push(IngestWarning::UnreadableDir {
                    path: d.to_path_buf(),
                    reason: e.to_string(),
                });
                Vec::new()
            }
        },
        None => Vec::new(),
    };

    let sales = match read_sheet(&files, SALES_SHEET, &mut warnings) {
        Some(t) => normalize::normalize_sales(&t, &mut warnings),
        None => sample_sales(),
    };
    let expiry = match read_sheet(&files, EXPIRY_SHEET, &mut warnings) {
        Some(t) => normalize::normalize_expiry(&t, &mut warnings),
        None => sample_expiry(),
    };
    let pricing = match read_sheet(&files, PRICING_SHEET, &mut warnings) {
        Some(t) => normalize::normalize_pricing(&t),
        None => sample_pricing(),
    };
    let promo = match read_sheet(&files, PROMO_SHEET, &mut warnings) {
        Some(t) => normalize::normalize_promo(&t),
        None => sample_promo(),
    };

    Dataset {
        sales,
        expiry,
        pricing,
        promo,
        warnings,
    }
}

/// All CSV files in the directory, keyed by normalized stem.
fn sheet_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
        let path = entry?.path();
        if path.extension().is_none_or(|e| !e.eq_ignore_ascii_case("csv")) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            files.push((normalized_name(stem), path));
        }
    }
    Ok(files)
}

/// Sheet names match case-insensitively, with spaces and underscores
/// interchangeable ("Sales_Data" == "sales data").
fn normalized_name(name: &str) -> String {
    name.trim().to_lowercase().replace('_', " ")
}

fn read_sheet(
    files: &[(String, PathBuf)],
    sheet: &'static str,
    warnings: &mut Vec<IngestWarning>,
) -> Option<RawTable> {
    let wanted = normalized_name(sheet);
    let path = files.iter().find(|(stem, _)| *stem == wanted).map(|(_, p)| p)?;
    match read_table(path) {
        Ok(table) => Some(table),
        Err(e) => {
            warnings.push(IngestWarning::UnreadableSheet {
                sheet,
                path: path.clone(),
                reason: e.to_string(),
            });
            None
        }
    }
}

fn read_table(path: &Path) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("open CSV {}", path.display()))?;
    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut rows = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        rows.push(rec.iter().map(|c| c.to_string()).collect());
    }
    Ok(RawTable { headers, rows })
}

// Sample tables, matching the demo workbook row for row. Line totals and
// remaining stock are derived the same way the workbook derives them.

fn sales_row(date: &str, product: &str, qty: i64, price: i64, opening: i64) -> SalesRecord {
    let date = coerce_date(date);
    let qty_d = Decimal::from(qty);
    let price_d = Decimal::from(price);
    SalesRecord {
        date,
        product: Some(product.to_string()),
        qty: Some(qty_d),
        unit_price: Some(price_d),
        total: Some(qty_d * price_d),
        opening_stock: Some(Decimal::from(opening)),
        remaining_stock: Some(Decimal::from(opening - qty)),
        year: date.map(|d| d.year()),
    }
}

pub fn sample_sales() -> Vec<SalesRecord> {
    [
        ("2025-06-05", "Susu UHT 1L", 20, 15000, 100),
        ("2025-06-12", "Indomie Ayam", 50, 3000, 200),
        ("2025-06-25", "Teh Botol", 30, 5000, 150),
        ("2025-07-10", "Susu UHT 1L", 25, 15000, 100),
        ("2025-07-18", "Indomie Ayam", 80, 3000, 200),
        ("2025-08-05", "Teh Botol", 60, 5000, 150),
        ("2025-08-20", "Susu UHT 1L", 40, 15000, 100),
        ("2025-09-10", "Indomie Ayam", 150, 3000, 200),
        ("2025-09-15", "Susu UHT 1L", 70, 15000, 100),
    ]
    .into_iter()
    .map(|(date, product, qty, price, opening)| sales_row(date, product, qty, price, opening))
    .collect()
}

pub fn sample_expiry() -> Vec<ExpiryLot> {
    [
        ("Yogurt Cup", "YG202509", "2025-09-25", 100),
        ("Yogurt Cup", "YG202510", "2025-10-15", 200),
    ]
    .into_iter()
    .map(|(product, batch, expiry, qty)| ExpiryLot {
        product: Some(product.to_string()),
        batch: Some(batch.to_string()),
        expiry_date: coerce_date(expiry),
        qty: Some(Decimal::from(qty)),
    })
    .collect()
}

pub fn sample_pricing() -> Vec<PricingEntry> {
    vec![PricingEntry {
        product: Some("Beras 5kg".to_string()),
        purchase_price: Some(Decimal::from(60_000)),
        sale_price: Some(Decimal::from(72_000)),
    }]
}

pub fn sample_promo() -> Vec<PromotionEntry> {
    vec![PromotionEntry {
        label: Some("Susu UHT 1L".to_string()),
        target_sales: Some(Decimal::from(100_000_000_i64)),
        actual_sales: Some(Decimal::from(115_000_000_i64)),
        cost: Some(Decimal::from(10_000_000_i64)),
    }]
}
