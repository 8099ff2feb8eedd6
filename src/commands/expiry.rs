// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dataset::Dataset;
use crate::kpi;
use crate::utils::{
    fmt_opt_date, fmt_opt_num, fmt_opt_text, maybe_print_json, parse_date, pretty_table,
};

pub fn handle(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };

    let mut data = Vec::new();
    for lot in &ds.expiry {
        let days = kpi::days_to_expiry(lot, as_of);
        data.push(vec![
            fmt_opt_text(&lot.product),
            fmt_opt_text(&lot.batch),
            fmt_opt_date(lot.expiry_date),
            fmt_opt_num(lot.qty),
            days.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            days.map(|d| kpi::expiry_status(d).to_string())
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &[
                    "Produk",
                    "Batch_No",
                    "Exp_Date",
                    "Qty_Stok",
                    "Days to Expiry",
                    "Status"
                ],
                data
            )
        );
    }
    Ok(())
}
