// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dataset::Dataset;
use crate::kpi;
use crate::utils::{maybe_print_json, pretty_table};

/// The monthly series behind the dashboard's trend chart, as a table.
pub fn handle(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let monthly = kpi::monthly_totals(&ds.sales);
    let mut data = Vec::new();
    for ((month, product), total) in &monthly {
        data.push(vec![
            month.clone(),
            product.clone(),
            total.normalize().to_string(),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Produk", "Total"], data));
    }
    Ok(())
}
