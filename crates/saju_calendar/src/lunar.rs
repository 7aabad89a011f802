//! Approximate lunar-day estimation.
//!
//! A mean-synodic-period estimator: days elapsed since a reference new
//! moon, folded by 29.53 days. Good to within a day or two of the true
//! lunar date, which is all the empty-day table needs; exact lunisolar
//! conversion is an external almanac concern.

use crate::error::CalendarError;
use crate::ganzhi::{julian_day_number, validate_date};

/// Mean synodic month in days.
const SYNODIC_MONTH: f64 = 29.530_588_853;

/// JDN of the reference new moon: 2000-01-06.
const NEW_MOON_EPOCH_JDN: i64 = 2_451_550;

/// Approximate lunar day (1..=30) for a Gregorian date.
///
/// Day 1 is the day of the mean new moon. The estimate drifts by up to
/// ±2 days from the true lunisolar calendar; callers needing exact
/// conversion must use a proper almanac.
pub fn approximate_lunar_day(year: i32, month: u32, day: u32) -> Result<u8, CalendarError> {
    validate_date(year, month, day)?;
    let jdn = julian_day_number(year, month, day);
    let elapsed = (jdn - NEW_MOON_EPOCH_JDN) as f64;
    let phase = elapsed.rem_euclid(SYNODIC_MONTH);
    // phase in [0, 29.53) → day 1..=30
    Ok(phase.floor() as u8 + 1)
}
