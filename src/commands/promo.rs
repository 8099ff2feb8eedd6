// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::dataset::Dataset;
use crate::kpi;
use crate::utils::{fmt_opt_money, fmt_opt_text, fmt_pct, maybe_print_json, pretty_table};

/// Target vs. actual per promotion, with the shortfall/overshoot and ROI.
pub fn handle(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut data = Vec::new();
    for promo in &ds.promo {
        let diff = promo
            .actual_sales
            .zip(promo.target_sales)
            .map(|(a, t)| a - t);
        let status = match diff {
            Some(d) if d >= Decimal::ZERO => "Achieved",
            Some(_) => "Missed",
            None => "-",
        };
        data.push(vec![
            fmt_opt_text(&promo.label),
            fmt_opt_money(promo.target_sales),
            fmt_opt_money(promo.actual_sales),
            fmt_opt_money(diff),
            fmt_pct(kpi::roi(promo)),
            status.to_string(),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &[
                    "Promosi",
                    "Target_Sales",
                    "Actual_Sales",
                    "Difference",
                    "ROI",
                    "Status"
                ],
                data
            )
        );
    }
    Ok(())
}
