//! Four pillars: the year/month/day/hour ganzhi pairs of a moment.

use crate::ganzhi::GanzhiPair;
use crate::stem::Stem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Year, month, day, and optional hour pillars describing a birth or
/// target moment. The day pillar's stem is the day master, the anchor
/// for every ten-god and special-day computation about that person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FourPillars {
    pub year: GanzhiPair,
    pub month: GanzhiPair,
    pub day: GanzhiPair,
    pub hour: Option<GanzhiPair>,
}

impl FourPillars {
    /// The day master: the stem of the day pillar.
    pub const fn day_master(&self) -> Stem {
        self.day.stem
    }
}
