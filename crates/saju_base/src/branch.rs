//! The 12 earthly branches (jiji) and their hidden stems.
//!
//! Each branch carries a five-element affinity, a zodiac animal, and an
//! ordered list of 1-3 hidden stems (jijanggan) with day-count dominance
//! weights. The hidden-stem table follows the mainstream school
//! (residual, middle, principal; weights sum to 30 days per branch).

use crate::element::FiveElement;
use crate::stem::Stem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in cycle order (index 0 = Ja).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// Korean romanization of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Hanja character of the branch.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    /// 0-based cycle index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Five-element affinity of the branch.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Ja | Self::Hae => FiveElement::Water,
            Self::In | Self::Myo => FiveElement::Wood,
            Self::Sa | Self::O => FiveElement::Fire,
            Self::Sin | Self::Yu => FiveElement::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => FiveElement::Earth,
        }
    }

    /// Hidden stems in residual → middle → principal order, with day-count
    /// weights summing to 30. The principal (dominant) stem is last.
    pub const fn hidden_stems(self) -> &'static [(Stem, u8)] {
        match self {
            Self::Ja => &[(Stem::Im, 10), (Stem::Gye, 20)],
            Self::Chuk => &[(Stem::Gye, 9), (Stem::Sin, 3), (Stem::Gi, 18)],
            Self::In => &[(Stem::Mu, 7), (Stem::Byeong, 7), (Stem::Gap, 16)],
            Self::Myo => &[(Stem::Gap, 10), (Stem::Eul, 20)],
            Self::Jin => &[(Stem::Eul, 9), (Stem::Gye, 3), (Stem::Mu, 18)],
            Self::Sa => &[(Stem::Mu, 7), (Stem::Gyeong, 7), (Stem::Byeong, 16)],
            Self::O => &[(Stem::Byeong, 10), (Stem::Gi, 9), (Stem::Jeong, 11)],
            Self::Mi => &[(Stem::Jeong, 9), (Stem::Eul, 3), (Stem::Gi, 18)],
            Self::Sin => &[(Stem::Mu, 7), (Stem::Im, 7), (Stem::Gyeong, 16)],
            Self::Yu => &[(Stem::Gyeong, 10), (Stem::Sin, 20)],
            Self::Sul => &[(Stem::Sin, 9), (Stem::Jeong, 3), (Stem::Mu, 18)],
            Self::Hae => &[(Stem::Mu, 7), (Stem::Gap, 7), (Stem::Im, 16)],
        }
    }

    /// The principal (dominant) hidden stem.
    pub const fn principal_stem(self) -> Stem {
        let hidden = self.hidden_stems();
        hidden[hidden.len() - 1].0
    }

    /// Branch from a 0-based cycle index (mod 12).
    pub const fn from_index(idx: u8) -> Branch {
        ALL_BRANCHES[(idx % 12) as usize]
    }

    /// Case-insensitive parse of a romanized branch name.
    /// Unrecognized text yields `None`, never an error.
    pub fn from_name(name: &str) -> Option<Branch> {
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn element_distribution() {
        // 2 of each pure element, 4 earth
        let earths = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == FiveElement::Earth)
            .count();
        assert_eq!(earths, 4);
        let waters = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == FiveElement::Water)
            .count();
        assert_eq!(waters, 2);
    }

    #[test]
    fn hidden_stem_counts() {
        for b in ALL_BRANCHES {
            let n = b.hidden_stems().len();
            assert!((1..=3).contains(&n), "{} has {} hidden stems", b.name(), n);
        }
    }

    #[test]
    fn hidden_stem_weights_sum_to_30() {
        for b in ALL_BRANCHES {
            let total: u32 = b.hidden_stems().iter().map(|(_, w)| *w as u32).sum();
            assert_eq!(total, 30, "weights of {} sum to {}", b.name(), total);
        }
    }

    #[test]
    fn principal_stem_matches_branch_element() {
        // The dominant hidden stem carries the branch's own element.
        for b in ALL_BRANCHES {
            assert_eq!(
                b.principal_stem().element(),
                b.element(),
                "principal stem of {}",
                b.name()
            );
        }
    }

    #[test]
    fn jin_hidden_stems() {
        // Jin (Dragon) hides Eul, Gye, Mu in mainstream school ordering.
        let hidden: Vec<Stem> = Branch::Jin.hidden_stems().iter().map(|(s, _)| *s).collect();
        assert_eq!(hidden, vec![Stem::Eul, Stem::Gye, Stem::Mu]);
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Branch::from_index(0), Branch::Ja);
        assert_eq!(Branch::from_index(11), Branch::Hae);
        assert_eq!(Branch::from_index(12), Branch::Ja);
        assert_eq!(Branch::from_index(30), Branch::O);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Branch::from_name("ja"), Some(Branch::Ja));
        assert_eq!(Branch::from_name("HAE"), Some(Branch::Hae));
        assert_eq!(Branch::from_name("ox"), None);
    }
}
