//! The 10 heavenly stems (cheongan).
//!
//! Each stem carries a five-element affinity and a yin/yang polarity.
//! Even indices are yang, odd indices are yin; elements pair up in
//! production-cycle order (Gap/Eul wood, Byeong/Jeong fire, ...).

use crate::element::{FiveElement, Polarity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in cycle order (index 0 = Gap).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// Korean romanization of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Hanja character of the stem.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// 0-based cycle index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Five-element affinity: consecutive index pairs share an element.
    pub const fn element(self) -> FiveElement {
        FiveElement::from_index(self.index() / 2)
    }

    /// Even indices are yang, odd are yin.
    pub const fn polarity(self) -> Polarity {
        if self.index() % 2 == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    /// Stem from a 0-based cycle index (mod 10).
    pub const fn from_index(idx: u8) -> Stem {
        ALL_STEMS[(idx % 10) as usize]
    }

    /// Case-insensitive parse of a romanized stem name.
    /// Unrecognized text yields `None`, never an error.
    pub fn from_name(name: &str) -> Option<Stem> {
        ALL_STEMS
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn element_pairs() {
        assert_eq!(Stem::Gap.element(), FiveElement::Wood);
        assert_eq!(Stem::Eul.element(), FiveElement::Wood);
        assert_eq!(Stem::Byeong.element(), FiveElement::Fire);
        assert_eq!(Stem::Mu.element(), FiveElement::Earth);
        assert_eq!(Stem::Gyeong.element(), FiveElement::Metal);
        assert_eq!(Stem::Sin.element(), FiveElement::Metal);
        assert_eq!(Stem::Gye.element(), FiveElement::Water);
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 {
                Polarity::Yang
            } else {
                Polarity::Yin
            };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Stem::from_index(0), Stem::Gap);
        assert_eq!(Stem::from_index(9), Stem::Gye);
        assert_eq!(Stem::from_index(10), Stem::Gap);
        assert_eq!(Stem::from_index(23), Stem::Jeong);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Stem::from_name("gap"), Some(Stem::Gap));
        assert_eq!(Stem::from_name("GYEONG"), Some(Stem::Gyeong));
        assert_eq!(Stem::from_name("zeta"), None);
    }

    #[test]
    fn hanja_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.hanja().is_empty());
        }
    }
}
