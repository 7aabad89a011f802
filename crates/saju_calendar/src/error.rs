//! Error types for calendar conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Gregorian input validation.
///
/// Out-of-range input is always reported, never clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the valid range for the given year and month.
    InvalidDay(u32),
    /// Year before the Gregorian reform (proleptic dates unsupported).
    YearOutOfRange(i32),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m} (expected 1-12)"),
            Self::InvalidDay(d) => write!(f, "invalid day of month: {d}"),
            Self::YearOutOfRange(y) => write!(f, "year out of range: {y} (expected 1583 or later)"),
        }
    }
}

impl Error for CalendarError {}
