// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::kpi;
use crate::utils::{
    fmt_opt_date, fmt_opt_num, fmt_opt_text, fmt_pct, maybe_print_json, pretty_table,
};

pub fn handle(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let low_only = sub.get_flag("low-stock-only");
    let cutoff = Decimal::from(*sub.get_one::<i64>("cutoff").unwrap());

    let trends = kpi::trends(&ds.sales);
    let mut rows: Vec<_> = ds.sales.iter().zip(trends).collect();
    rows.sort_by(|(a, _), (b, _)| a.product.cmp(&b.product).then(a.date.cmp(&b.date)));

    let mut data = Vec::new();
    for (rec, trend) in rows {
        if low_only && !kpi::is_low_stock(rec, cutoff) {
            continue;
        }
        data.push(vec![
            fmt_opt_date(rec.date),
            fmt_opt_text(&rec.product),
            fmt_opt_num(rec.qty),
            fmt_opt_num(rec.unit_price),
            fmt_opt_num(rec.total),
            fmt_opt_num(rec.remaining_stock),
            fmt_pct(trend),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &[
                    "Tanggal",
                    "Produk",
                    "Qty",
                    "Harga",
                    "Total",
                    "Sisa_Stok",
                    "Trend vs Juni"
                ],
                data
            )
        );
    }
    Ok(())
}
