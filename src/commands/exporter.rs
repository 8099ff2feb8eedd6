// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::kpi;
use crate::models::SalesRecord;
use crate::utils::parse_date;

pub const SALES_EXPORT_HEADERS: [&str; 9] = [
    "Tanggal",
    "Produk",
    "Qty",
    "Harga",
    "Total",
    "Stok_Awal",
    "Sisa_Stok",
    "Year",
    "Trend_vs_Juni",
];

pub const EXPIRY_EXPORT_HEADERS: [&str; 6] = [
    "Produk",
    "Batch_No",
    "Exp_Date",
    "Qty_Stok",
    "Days_to_Expiry",
    "Status",
];

pub fn handle(ds: &Dataset, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("sales", sub)) => export_sales(ds, sub),
        Some(("expiry", sub)) => export_expiry(ds, sub),
        _ => Ok(()),
    }
}

/// One sales export row. Undefined cells become empty strings so they
/// coerce back to undefined when the file is re-ingested.
pub fn sales_row(rec: &SalesRecord, trend: Option<Decimal>) -> Vec<String> {
    vec![
        rec.date.map(|d| d.to_string()).unwrap_or_default(),
        rec.product.clone().unwrap_or_default(),
        cell(rec.qty),
        cell(rec.unit_price),
        cell(rec.total),
        cell(rec.opening_stock),
        cell(rec.remaining_stock),
        rec.year.map(|y| y.to_string()).unwrap_or_default(),
        cell(trend),
    ]
}

fn cell(v: Option<Decimal>) -> String {
    v.map(|d| d.to_string()).unwrap_or_default()
}

fn export_sales(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let trends = kpi::trends(&ds.sales);

    let mut wtr = csv::Writer::from_path(out).with_context(|| format!("create {}", out))?;
    wtr.write_record(SALES_EXPORT_HEADERS)?;
    for (rec, trend) in ds.sales.iter().zip(trends) {
        wtr.write_record(sales_row(rec, trend))?;
    }
    wtr.flush()?;
    println!("Exported processed sales data to {}", out);
    Ok(())
}

fn export_expiry(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub.get_one::<String>("out").unwrap();
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    let mut wtr = csv::Writer::from_path(out).with_context(|| format!("create {}", out))?;
    wtr.write_record(EXPIRY_EXPORT_HEADERS)?;
    for lot in &ds.expiry {
        let days = kpi::days_to_expiry(lot, as_of);
        wtr.write_record([
            lot.product.clone().unwrap_or_default(),
            lot.batch.clone().unwrap_or_default(),
            lot.expiry_date.map(|d| d.to_string()).unwrap_or_default(),
            cell(lot.qty),
            days.map(|d| d.to_string()).unwrap_or_default(),
            days.map(|d| kpi::expiry_status(d).to_string())
                .unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    println!("Exported expiry data to {}", out);
    Ok(())
}
