// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{ExpiryLot, ExpiryStatus, PricingEntry, PromotionEntry, SalesRecord, Tier};

/// Month whose line totals form the per-product baseline.
pub const BASELINE_MONTH: u32 = 6;

/// Days ahead of the reference date in which a lot counts toward expiry
/// risk (and classifies as almost expired).
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

/// Green/yellow breakpoints for one KPI. `green` is the stronger bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub green: Decimal,
    pub yellow: Decimal,
}

/// Classification bands for every KPI. Passed into the classification
/// call sites rather than read from globals, so tests can vary them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    pub attainment: Band,
    pub total_sales: Band,
    pub margin: Band,
    pub roi: Band,
    pub stock: Band,
    /// Reversed polarity: fewer units at risk is better.
    pub expiry_units: Band,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            attainment: Band {
                green: Decimal::ONE,
                yellow: Decimal::new(8, 1),
            },
            total_sales: Band {
                green: Decimal::from(100_000_000_i64),
                yellow: Decimal::from(50_000_000_i64),
            },
            margin: Band {
                green: Decimal::new(20, 2),
                yellow: Decimal::new(15, 2),
            },
            roi: Band {
                green: Decimal::ONE,
                yellow: Decimal::new(5, 1),
            },
            stock: Band {
                green: Decimal::new(7, 1),
                yellow: Decimal::new(4, 1),
            },
            expiry_units: Band {
                green: Decimal::ONE_HUNDRED,
                yellow: Decimal::from(500),
            },
        }
    }
}

/// Higher-is-better classification. Undefined is `Unknown`, never `Risk`.
pub fn classify(value: Option<Decimal>, band: Band) -> Tier {
    match value {
        None => Tier::Unknown,
        Some(v) if v >= band.green => Tier::Good,
        Some(v) if v >= band.yellow => Tier::Watch,
        Some(_) => Tier::Risk,
    }
}

/// Lower-is-better variant, used for expiry risk.
pub fn classify_reverse(value: Option<Decimal>, band: Band) -> Tier {
    match value {
        None => Tier::Unknown,
        Some(v) if v <= band.green => Tier::Good,
        Some(v) if v <= band.yellow => Tier::Watch,
        Some(_) => Tier::Risk,
    }
}

/// Sum of defined June line totals per (product, year). The pair key is an
/// exact, case-sensitive match. A group whose June rows all lack totals
/// keeps a zero baseline, which `trend_vs_june` treats as no baseline.
pub fn june_baselines(sales: &[SalesRecord]) -> HashMap<(String, i32), Decimal> {
    let mut baselines = HashMap::new();
    for rec in sales {
        let (Some(date), Some(product), Some(year)) = (rec.date, rec.product.as_ref(), rec.year)
        else {
            continue;
        };
        if date.month() != BASELINE_MONTH {
            continue;
        }
        let entry = baselines
            .entry((product.clone(), year))
            .or_insert(Decimal::ZERO);
        if let Some(total) = rec.total {
            *entry += total;
        }
    }
    baselines
}

/// Growth of one record against its own (product, year) June baseline:
/// total / baseline - 1. Undefined without a nonzero baseline or a total.
pub fn trend_vs_june(
    rec: &SalesRecord,
    baselines: &HashMap<(String, i32), Decimal>,
) -> Option<Decimal> {
    let baseline = *baselines.get(&(rec.product.clone()?, rec.year?))?;
    if baseline.is_zero() {
        return None;
    }
    Some(rec.total? / baseline - Decimal::ONE)
}

/// Trend for every record, index-aligned with the input slice.
pub fn trends(sales: &[SalesRecord]) -> Vec<Option<Decimal>> {
    let baselines = june_baselines(sales);
    sales.iter().map(|r| trend_vs_june(r, &baselines)).collect()
}

fn mean(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    let mut sum = Decimal::ZERO;
    let mut n = 0u32;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 { None } else { Some(sum / Decimal::from(n)) }
}

pub fn total_actual_sales(promos: &[PromotionEntry]) -> Decimal {
    promos.iter().filter_map(|p| p.actual_sales).sum()
}

/// Promotion attainment: total actual over total target. Undefined when the
/// target sum is zero or nothing defines it.
pub fn sales_attainment(promos: &[PromotionEntry]) -> Option<Decimal> {
    let target: Decimal = promos.iter().filter_map(|p| p.target_sales).sum();
    if target.is_zero() {
        return None;
    }
    Some(total_actual_sales(promos) / target)
}

/// Absolute-sum sales KPI: total of defined line totals. Classified against
/// `Thresholds::total_sales` rather than an attainment ratio.
pub fn total_sales(sales: &[SalesRecord]) -> Decimal {
    sales.iter().filter_map(|r| r.total).sum()
}

/// Fractional margin of one product: (sale - purchase) / sale.
pub fn margin(entry: &PricingEntry) -> Option<Decimal> {
    let sale = entry.sale_price?;
    if sale.is_zero() {
        return None;
    }
    Some((sale - entry.purchase_price?) / sale)
}

pub fn average_margin(pricing: &[PricingEntry]) -> Option<Decimal> {
    mean(pricing.iter().filter_map(margin))
}

/// ROI of one promotion: (actual - target) / cost. Only rows with a
/// positive cost qualify.
pub fn roi(entry: &PromotionEntry) -> Option<Decimal> {
    let cost = entry.cost?;
    if cost <= Decimal::ZERO {
        return None;
    }
    Some((entry.actual_sales? - entry.target_sales?) / cost)
}

pub fn average_roi(promos: &[PromotionEntry]) -> Option<Decimal> {
    mean(promos.iter().filter_map(roi))
}

/// Remaining over opening stock across all sales rows.
pub fn stock_availability(sales: &[SalesRecord]) -> Option<Decimal> {
    let opening: Decimal = sales.iter().filter_map(|r| r.opening_stock).sum();
    if opening.is_zero() {
        return None;
    }
    let remaining: Decimal = sales.iter().filter_map(|r| r.remaining_stock).sum();
    Some(remaining / opening)
}

/// Whole days from the reference date to the lot's expiry date.
pub fn days_to_expiry(lot: &ExpiryLot, as_of: NaiveDate) -> Option<i64> {
    Some((lot.expiry_date? - as_of).num_days())
}

pub fn expiry_status(days: i64) -> ExpiryStatus {
    if days < 0 {
        ExpiryStatus::Expired
    } else if days <= EXPIRY_WINDOW_DAYS {
        ExpiryStatus::AlmostExpired
    } else {
        ExpiryStatus::Ok
    }
}

/// Units in lots expiring within the risk window, already-expired lots
/// included. Lots without a readable expiry date are left out.
pub fn expiring_quantity(lots: &[ExpiryLot], as_of: NaiveDate) -> Decimal {
    let horizon = as_of + Duration::days(EXPIRY_WINDOW_DAYS);
    lots.iter()
        .filter(|l| l.expiry_date.is_some_and(|d| d <= horizon))
        .filter_map(|l| l.qty)
        .sum()
}

/// Line-total sums keyed by (YYYY-MM, product) — the monthly trend series.
pub fn monthly_totals(sales: &[SalesRecord]) -> BTreeMap<(String, String), Decimal> {
    let mut monthly = BTreeMap::new();
    for rec in sales {
        let (Some(date), Some(product), Some(total)) = (rec.date, rec.product.as_ref(), rec.total)
        else {
            continue;
        };
        *monthly
            .entry((date.format("%Y-%m").to_string(), product.clone()))
            .or_insert(Decimal::ZERO) += total;
    }
    monthly
}

/// Low-stock test for the detail view. Undefined remaining stock never
/// counts as low.
pub fn is_low_stock(rec: &SalesRecord, cutoff: Decimal) -> bool {
    rec.remaining_stock.is_some_and(|s| s <= cutoff)
}
