// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dataset::Dataset;
use crate::kpi::{self, Thresholds};
use crate::models::Tier;
use crate::utils::{fmt_money, fmt_pct, maybe_print_json, parse_date, pretty_table};

pub fn handle(ds: &Dataset, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let as_of = match sub.get_one::<String>("as-of") {
        Some(s) => parse_date(s)?,
        None => chrono::Utc::now().date_naive(),
    };
    let thresholds = Thresholds::default();

    let attainment = kpi::sales_attainment(&ds.promo);
    let actual = kpi::total_actual_sales(&ds.promo);
    let total_sales = kpi::total_sales(&ds.sales);
    let margin = kpi::average_margin(&ds.pricing);
    let roi = kpi::average_roi(&ds.promo);
    let stock = kpi::stock_availability(&ds.sales);
    let at_risk = kpi::expiring_quantity(&ds.expiry, as_of);

    let data = vec![
        card(
            "Sales attainment",
            format!("{} (actual {})", fmt_pct(attainment), fmt_money(&actual)),
            kpi::classify(attainment, thresholds.attainment),
        ),
        card(
            "Total sales",
            fmt_money(&total_sales),
            kpi::classify(Some(total_sales), thresholds.total_sales),
        ),
        card(
            "Average margin",
            fmt_pct(margin),
            kpi::classify(margin, thresholds.margin),
        ),
        card(
            "Average promo ROI",
            fmt_pct(roi),
            kpi::classify(roi, thresholds.roi),
        ),
        card(
            "Stock availability",
            fmt_pct(stock),
            kpi::classify(stock, thresholds.stock),
        ),
        card(
            "Expiry risk",
            format!("{} units", at_risk.normalize()),
            kpi::classify_reverse(Some(at_risk), thresholds.expiry_units),
        ),
    ];

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["KPI", "Value", "Status"], data));
    }
    Ok(())
}

fn card(name: &str, value: String, tier: Tier) -> Vec<String> {
    vec![name.to_string(), value, format!("{} {}", tier.glyph(), tier)]
}
