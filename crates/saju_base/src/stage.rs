//! Twelve-stage life-cycle labels and solar-term input triple.
//!
//! Both are produced by external collaborators (a twelve-stage engine and a
//! solar-term almanac) and consumed here as opaque values: the scorer never
//! computes them, it only matches them against authored rule sets.

use crate::element::FiveElement;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 12 life-cycle energy stages (sibiunseong) of a branch relative to a
/// day master's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TwelveStage {
    Birth,
    Bath,
    Capping,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Burial,
    Extinction,
    Gestation,
    Nurture,
}

/// All 12 stages in cycle order (index 0 = Birth).
pub const ALL_STAGES: [TwelveStage; 12] = [
    TwelveStage::Birth,
    TwelveStage::Bath,
    TwelveStage::Capping,
    TwelveStage::Office,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sickness,
    TwelveStage::Death,
    TwelveStage::Burial,
    TwelveStage::Extinction,
    TwelveStage::Gestation,
    TwelveStage::Nurture,
];

impl TwelveStage {
    /// English label of the stage.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "Birth",
            Self::Bath => "Bath",
            Self::Capping => "Capping",
            Self::Office => "Office",
            Self::Peak => "Peak",
            Self::Decline => "Decline",
            Self::Sickness => "Sickness",
            Self::Death => "Death",
            Self::Burial => "Burial",
            Self::Extinction => "Extinction",
            Self::Gestation => "Gestation",
            Self::Nurture => "Nurture",
        }
    }

    /// Korean romanization.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Birth => "jangsaeng",
            Self::Bath => "mokyok",
            Self::Capping => "gwandae",
            Self::Office => "geonrok",
            Self::Peak => "jewang",
            Self::Decline => "soe",
            Self::Sickness => "byeong",
            Self::Death => "sa",
            Self::Burial => "myo",
            Self::Extinction => "jeol",
            Self::Gestation => "tae",
            Self::Nurture => "yang",
        }
    }

    /// 0-based index (Birth=0 .. Nurture=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Birth => 0,
            Self::Bath => 1,
            Self::Capping => 2,
            Self::Office => 3,
            Self::Peak => 4,
            Self::Decline => 5,
            Self::Sickness => 6,
            Self::Death => 7,
            Self::Burial => 8,
            Self::Extinction => 9,
            Self::Gestation => 10,
            Self::Nurture => 11,
        }
    }
}

/// One candidate month's solar-term facts, supplied by an external
/// almanac: the term's name, its five-element affinity, and whether the
/// month sits within a day or two of a term boundary.
// Serialize only: the name is a static almanac label, not borrowed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SolarTerm {
    pub name: &'static str,
    pub element: FiveElement,
    pub near_boundary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STAGES.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_STAGES {
            assert!(!s.name().is_empty());
            assert!(!s.korean().is_empty());
        }
    }
}
