//! Gregorian-to-ganzhi conversion.
//!
//! This crate provides:
//! - yearly, monthly (simplified table mode), and daily sexagenary pairs
//! - year/month/day pillar assembly for a date
//! - an approximate lunar-day estimator for the empty-day table
//!
//! All conversions are total over valid Gregorian dates; out-of-range
//! input is an explicit [`CalendarError`], never clamped.

pub mod error;
pub mod ganzhi;
pub mod lunar;

pub use error::CalendarError;
pub use ganzhi::{
    MIN_YEAR, day_ganzhi, four_pillars_for_date, month_ganzhi, pillars_for_date, year_ganzhi,
};
pub use lunar::approximate_lunar_day;
