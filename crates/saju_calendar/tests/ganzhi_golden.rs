//! Golden-value tests for ganzhi conversion.
//!
//! Validates year/day anchors against known sexagenary dates and checks
//! the cycle-level properties (periodicity, bijection, daily advance).

use std::collections::HashSet;

use saju_base::{Branch, Stem};
use saju_calendar::{CalendarError, day_ganzhi, month_ganzhi, pillars_for_date, year_ganzhi};

/// 1984 is the anchor year of the current cycle: Gap-Ja.
#[test]
fn anchor_1984_gap_ja() {
    let p = year_ganzhi(1984);
    assert_eq!(p.stem, Stem::Gap);
    assert_eq!(p.branch, Branch::Ja);
}

/// The anchor's successor advances one step in the sequence.
#[test]
fn anchor_successor_1985_eul_chuk() {
    let p = year_ganzhi(1985);
    assert_eq!(p.stem, Stem::Eul);
    assert_eq!(p.branch, Branch::Chuk);
}

/// Known years across the cycle.
#[test]
fn known_years() {
    // 2020 Gyeong-Ja (metal rat)
    let p = year_ganzhi(2020);
    assert_eq!((p.stem, p.branch), (Stem::Gyeong, Branch::Ja));
    // 1998 Mu-In (earth tiger)
    let p = year_ganzhi(1998);
    assert_eq!((p.stem, p.branch), (Stem::Mu, Branch::In));
    // 2025 Eul-Sa (wood snake)
    let p = year_ganzhi(2025);
    assert_eq!((p.stem, p.branch), (Stem::Eul, Branch::Sa));
}

/// Yearly ganzhi repeats with period 60 and never earlier.
#[test]
fn year_bijection_over_60() {
    let mut seen = HashSet::new();
    for y in 1984..2044 {
        let p = year_ganzhi(y);
        assert!(seen.insert(p.cycle_index()), "repeat before 60 years at {y}");
    }
    assert_eq!(seen.len(), 60);
    assert_eq!(year_ganzhi(1984), year_ganzhi(2044));
}

/// 2000-01-01 is Mu-O, the documented day anchor.
#[test]
fn day_anchor() {
    let p = day_ganzhi(2000, 1, 1).unwrap();
    assert_eq!((p.stem, p.branch), (Stem::Mu, Branch::O));
}

/// Known day pairs around the anchor.
#[test]
fn known_days() {
    // 2000-01-02 advances one step: Gi-Mi
    let p = day_ganzhi(2000, 1, 2).unwrap();
    assert_eq!((p.stem, p.branch), (Stem::Gi, Branch::Mi));
    // 60 days before the anchor: 1999-11-02 is also Mu-O
    let p = day_ganzhi(1999, 11, 2).unwrap();
    assert_eq!((p.stem, p.branch), (Stem::Mu, Branch::O));
}

/// The day pair changes on every calendar day across a month boundary.
#[test]
fn day_changes_across_boundaries() {
    let feb28 = day_ganzhi(2023, 2, 28).unwrap();
    let mar01 = day_ganzhi(2023, 3, 1).unwrap();
    assert_ne!(feb28, mar01);
    assert_eq!((feb28.cycle_index() + 1) % 60, mar01.cycle_index());
}

/// Any 60 consecutive days produce 60 distinct pairs.
#[test]
fn day_bijection_over_60() {
    let mut seen = HashSet::new();
    // 2024-01-01 .. 2024-02-29 (60 days, leap year)
    for day in 1..=31 {
        seen.insert(day_ganzhi(2024, 1, day).unwrap().cycle_index());
    }
    for day in 1..=29 {
        seen.insert(day_ganzhi(2024, 2, day).unwrap().cycle_index());
    }
    assert_eq!(seen.len(), 60);
}

/// Simplified month mode: fixed branch table, five-tigers stem.
#[test]
fn month_table_mode() {
    // Gap-Jin year 2024: Feb is the In month with stem Byeong
    let feb = month_ganzhi(2024, 2).unwrap();
    assert_eq!((feb.stem, feb.branch), (Stem::Byeong, Branch::In));
    // and December wraps to the Ja branch
    assert_eq!(month_ganzhi(2024, 12).unwrap().branch, Branch::Ja);
}

/// Input validation is explicit, never a silent wrap.
#[test]
fn validation_is_explicit() {
    assert_eq!(day_ganzhi(2024, 13, 1), Err(CalendarError::InvalidMonth(13)));
    assert_eq!(day_ganzhi(2023, 2, 29), Err(CalendarError::InvalidDay(29)));
    assert_eq!(month_ganzhi(2024, 0), Err(CalendarError::InvalidMonth(0)));
    assert!(pillars_for_date(2024, 6, 31).is_err());
}

/// Pillars assemble the three independent conversions.
#[test]
fn pillars_for_known_date() {
    let (y, m, d) = pillars_for_date(2000, 1, 1).unwrap();
    assert_eq!((y.stem, y.branch), (Stem::Gyeong, Branch::Jin));
    assert_eq!(m.branch, Branch::Chuk);
    assert_eq!((d.stem, d.branch), (Stem::Mu, Branch::O));
}
