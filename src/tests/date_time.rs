// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

use crate::tests::*;

#[test]
fn date_time_epoch() {
    let epoch = DateTime::epoch();
    assert_eq!(epoch.ticks(), 0);
    assert!(epoch.is_null());
    assert_eq!(DateTime::null(), epoch);
}

#[test]
fn date_time_ticks_round_trip() {
    let now = DateTime::now();
    let ticks = now.checked_ticks();
    assert_eq!(DateTime::from(ticks), now);
}

#[test]
fn date_time_ymd() {
    // 1601-01-02 is exactly one day of ticks after the epoch
    let dt = DateTime::ymd(1601, 1, 2);
    assert_eq!(dt.ticks(), 24 * 3600 * 10_000_000);
}

#[test]
fn date_time_endtimes() {
    // Beyond the endtimes, checked ticks clamp to i64::MAX
    let endtimes = DateTime::endtimes();
    assert_eq!(endtimes.checked_ticks(), DateTime::endtimes_ticks());
    assert_eq!(DateTime::from(i64::MAX), endtimes);
}

#[test]
fn date_time_ordering() {
    assert!(DateTime::ymd(2001, 1, 1) < DateTime::ymd(2002, 1, 1));
}
