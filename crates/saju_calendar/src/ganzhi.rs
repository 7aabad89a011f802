//! Ganzhi (sexagenary) conversion for years, months, and days.
//!
//! All three conversions are pure cycle-offset arithmetic over fixed
//! anchors:
//! - years: CE 1984 = Gap-Ja (cycle index 0), period 60
//! - days: 2000-01-01 = Mu-O (cycle index 54), period 60
//! - months: simplified table mode keyed by solar month number (see
//!   [`month_ganzhi`] for the precision caveat)

use saju_base::{Branch, FourPillars, GanzhiPair, Stem};

use crate::error::CalendarError;

/// Year offset anchoring the cycle: (year - 4) mod 60 = cycle index,
/// so CE 1984 resolves to Gap-Ja.
const YEAR_CYCLE_OFFSET: i64 = 4;

/// Day offset anchoring the cycle: (jdn + 49) mod 60 = cycle index,
/// so 2000-01-01 (JDN 2451545) resolves to Mu-O (index 54).
const DAY_CYCLE_OFFSET: i64 = 49;

/// Earliest supported year. The Julian-day conversion assumes the
/// Gregorian calendar; proleptic dates are out of scope.
pub const MIN_YEAR: i32 = 1583;

/// Yearly ganzhi for a CE year.
///
/// Stem index = (year - 4) mod 10, branch index = (year - 4) mod 12.
/// Anchors: 1984 = Gap-Ja, 1985 = Eul-Chuk; repeats with period 60.
pub fn year_ganzhi(year: i32) -> GanzhiPair {
    let offset = (year as i64 - YEAR_CYCLE_OFFSET).rem_euclid(60) as u8;
    GanzhiPair::from_cycle_index(offset)
}

/// Days in a Gregorian month, honoring leap years.
const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Validate a Gregorian date, reporting the first out-of-range field.
pub(crate) fn validate_date(year: i32, month: u32, day: u32) -> Result<(), CalendarError> {
    if year < MIN_YEAR {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(CalendarError::InvalidDay(day));
    }
    Ok(())
}

/// Gregorian date to Julian day number (integer, noon-based).
///
/// Fliegel-Van Flandern integer form; valid for all Gregorian dates.
pub(crate) fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;
    let a = (m - 14).div_euclid(12);
    (1461 * (y + 4800 + a)).div_euclid(4) + (367 * (m - 2 - 12 * a)).div_euclid(12)
        - (3 * (y + 4900 + a).div_euclid(100)).div_euclid(4)
        + d
        - 32075
}

/// Daily ganzhi for a Gregorian date.
///
/// Cycle index = (JDN + 49) mod 60; changes on every calendar day and
/// repeats with period exactly 60. Out-of-range month or day is an
/// explicit [`CalendarError`], never silently wrapped.
pub fn day_ganzhi(year: i32, month: u32, day: u32) -> Result<GanzhiPair, CalendarError> {
    validate_date(year, month, day)?;
    let jdn = julian_day_number(year, month, day);
    let idx = (jdn + DAY_CYCLE_OFFSET).rem_euclid(60) as u8;
    Ok(GanzhiPair::from_cycle_index(idx))
}

/// Starting month-stem index for the In month, keyed by the yearly
/// stem's five-group (the "five tigers" table):
/// Gap/Gi years start at Byeong, Eul/Gyeong at Mu, Byeong/Sin at
/// Gyeong, Jeong/Im at Im, Mu/Gye at Gap.
const MONTH_STEM_START: [u8; 5] = [2, 4, 6, 8, 0];

/// Monthly ganzhi in simplified table mode.
///
/// The branch comes from a fixed 12-entry table keyed by solar month
/// number: month 1 = Chuk, month 2 = In, ..., month 12 = Ja (branch
/// index = month mod 12). The stem derives from the yearly stem via the
/// five-tigers offset table.
///
/// This mode deliberately approximates the true solar-term month
/// boundaries: a saju month actually begins at a solar term (the In
/// month at ipchun, around February 4), so dates within 1-2 days of a
/// term transition may be assigned to the neighboring month. Callers
/// needing term-exact boundaries must consult a solar-term almanac.
pub fn month_ganzhi(year: i32, month: u32) -> Result<GanzhiPair, CalendarError> {
    if year < MIN_YEAR {
        return Err(CalendarError::YearOutOfRange(year));
    }
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    let branch = Branch::from_index((month % 12) as u8);
    // Months counted from the In month (offset 0) in branch order.
    let months_from_in = (branch.index() + 10) % 12;
    let year_stem = year_ganzhi(year).stem;
    let start = MONTH_STEM_START[(year_stem.index() % 5) as usize];
    let stem = Stem::from_index((start + months_from_in) % 10);
    Ok(GanzhiPair { stem, branch })
}

/// Year, month, and day pillars for a Gregorian date (hour omitted).
pub fn pillars_for_date(
    year: i32,
    month: u32,
    day: u32,
) -> Result<(GanzhiPair, GanzhiPair, GanzhiPair), CalendarError> {
    let d = day_ganzhi(year, month, day)?;
    let m = month_ganzhi(year, month)?;
    Ok((year_ganzhi(year), m, d))
}

/// Assembled [`FourPillars`] for a Gregorian date. The hour pillar is
/// not derivable from a date alone and stays `None`.
pub fn four_pillars_for_date(
    year: i32,
    month: u32,
    day: u32,
) -> Result<FourPillars, CalendarError> {
    let (y, m, d) = pillars_for_date(year, month, day)?;
    Ok(FourPillars {
        year: y,
        month: m,
        day: d,
        hour: None,
    })
}
