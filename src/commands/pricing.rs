// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dataset::Dataset;
use crate::kpi;
use crate::utils::{fmt_opt_num, fmt_opt_text, fmt_pct, maybe_print_json, pretty_table};

pub fn handle(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut data = Vec::new();
    for entry in &ds.pricing {
        data.push(vec![
            fmt_opt_text(&entry.product),
            fmt_opt_num(entry.purchase_price),
            fmt_opt_num(entry.sale_price),
            fmt_pct(kpi::margin(entry)),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Produk", "Harga_Beli", "Harga_Jual", "Margin"], data)
        );
    }
    Ok(())
}
