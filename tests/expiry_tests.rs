// Copyright (c) 2025 Groseri.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDate};
use groseri::kpi::{self, Thresholds};
use groseri::models::{ExpiryLot, ExpiryStatus, Tier};
use rust_decimal::Decimal;

fn lot(expiry: Option<NaiveDate>, qty: i64) -> ExpiryLot {
    ExpiryLot {
        product: Some("Yogurt Cup".to_string()),
        batch: Some("YG202509".to_string()),
        expiry_date: expiry,
        qty: Some(Decimal::from(qty)),
    }
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
}

#[test]
fn status_boundaries_at_the_thirty_day_window() {
    let cases = [
        (-1, ExpiryStatus::Expired),
        (0, ExpiryStatus::AlmostExpired),
        (30, ExpiryStatus::AlmostExpired),
        (31, ExpiryStatus::Ok),
    ];
    for (offset, expected) in cases {
        let l = lot(Some(as_of() + Duration::days(offset)), 10);
        let days = kpi::days_to_expiry(&l, as_of()).unwrap();
        assert_eq!(days, offset);
        assert_eq!(kpi::expiry_status(days), expected, "offset {offset}");
    }
}

#[test]
fn days_to_expiry_is_undefined_without_a_date() {
    assert_eq!(kpi::days_to_expiry(&lot(None, 10), as_of()), None);
}

#[test]
fn expiring_quantity_counts_the_window_and_expired_lots() {
    let lots = vec![
        lot(Some(as_of() - Duration::days(3)), 40), // already expired
        lot(Some(as_of() + Duration::days(30)), 100),
        lot(Some(as_of() + Duration::days(31)), 999), // outside the window
        lot(None, 777),                               // unreadable date
    ];
    assert_eq!(kpi::expiring_quantity(&lots, as_of()), Decimal::from(140));
}

#[test]
fn expiry_risk_classifies_with_reversed_polarity() {
    let band = Thresholds::default().expiry_units;
    let tier_for = |units: i64| kpi::classify_reverse(Some(Decimal::from(units)), band);
    assert_eq!(tier_for(0), Tier::Good);
    assert_eq!(tier_for(100), Tier::Good);
    assert_eq!(tier_for(101), Tier::Watch);
    assert_eq!(tier_for(500), Tier::Watch);
    assert_eq!(tier_for(501), Tier::Risk);
}

#[test]
fn a_lot_drifts_through_statuses_as_the_reference_date_advances() {
    let l = lot(Some(NaiveDate::from_ymd_opt(2025, 9, 25).unwrap()), 100);
    let status_on = |date: NaiveDate| {
        kpi::expiry_status(kpi::days_to_expiry(&l, date).unwrap())
    };
    assert_eq!(
        status_on(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()),
        ExpiryStatus::Ok
    );
    assert_eq!(
        status_on(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()),
        ExpiryStatus::AlmostExpired
    );
    assert_eq!(
        status_on(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()),
        ExpiryStatus::Expired
    );
}
