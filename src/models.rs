// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One sales line from the "Sales Data" sheet. Every field that came out of
/// a spreadsheet cell is optional: a cell that fails coercion stays `None`
/// and flows through downstream formulas instead of failing the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: Option<NaiveDate>,
    pub product: Option<String>,
    pub qty: Option<Decimal>,
    pub unit_price: Option<Decimal>,
    pub total: Option<Decimal>,
    pub opening_stock: Option<Decimal>,
    pub remaining_stock: Option<Decimal>,
    /// Calendar year of `date`, kept for June-baseline grouping.
    pub year: Option<i32>,
}

/// One batch from the "Expiry Data" sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryLot {
    pub product: Option<String>,
    pub batch: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub qty: Option<Decimal>,
}

/// Purchase/sale price pair from the "Pricing Data" sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingEntry {
    pub product: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub sale_price: Option<Decimal>,
}

/// Target vs. actual for one promotion from the "Promo Data" sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionEntry {
    pub label: Option<String>,
    pub target_sales: Option<Decimal>,
    pub actual_sales: Option<Decimal>,
    pub cost: Option<Decimal>,
}

/// Traffic-light classification of a metric against its band. An undefined
/// metric is `Unknown`, never `Risk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Watch,
    Risk,
    Unknown,
}

impl Tier {
    pub fn glyph(self) -> &'static str {
        match self {
            Tier::Good => "\u{1F7E2}",
            Tier::Watch => "\u{1F7E1}",
            Tier::Risk => "\u{1F534}",
            Tier::Unknown => "\u{26AA}",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::Good => "good",
            Tier::Watch => "watch",
            Tier::Risk => "risk",
            Tier::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Freshness of a lot relative to the reference date. Recomputed on every
/// evaluation; nothing is stored, so a lot drifts through
/// OK -> Almost expired -> Expired as the reference date advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryStatus {
    Expired,
    AlmostExpired,
    Ok,
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::AlmostExpired => "Almost expired",
            ExpiryStatus::Ok => "OK",
        };
        f.write_str(s)
    }
}
