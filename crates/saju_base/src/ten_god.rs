//! The ten gods (sipsin): relational labels of a stem against a day master.
//!
//! Five element-relation categories crossed with polarity match give
//! exactly 10 labels. The mapping function itself lives in
//! `saju_relations`; this module only defines the label vocabulary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five element-relation categories between a day master and another
/// stem, before the polarity split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TenGodCategory {
    /// Same element.
    Peer,
    /// Element the day master produces.
    Output,
    /// Element the day master destroys.
    Wealth,
    /// Element that destroys the day master.
    Control,
    /// Element that produces the day master.
    Resource,
}

/// The 10 relational labels (sipsin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TenGod {
    /// Peer, matching polarity (bigyeon).
    Friend,
    /// Peer, differing polarity (geopjae).
    RobWealth,
    /// Output, matching polarity (siksin).
    EatingGod,
    /// Output, differing polarity (sanggwan).
    HurtingOfficer,
    /// Wealth, matching polarity (pyeonjae).
    IndirectWealth,
    /// Wealth, differing polarity (jeongjae).
    DirectWealth,
    /// Control, matching polarity (pyeongwan).
    SeventhKiller,
    /// Control, differing polarity (jeonggwan).
    DirectOfficer,
    /// Resource, matching polarity (pyeonin).
    IndirectResource,
    /// Resource, differing polarity (jeongin).
    DirectResource,
}

/// All 10 labels.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SeventhKiller,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// English label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SeventhKiller => "Seventh Killer",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Korean romanization.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Friend => "bigyeon",
            Self::RobWealth => "geopjae",
            Self::EatingGod => "siksin",
            Self::HurtingOfficer => "sanggwan",
            Self::IndirectWealth => "pyeonjae",
            Self::DirectWealth => "jeongjae",
            Self::SeventhKiller => "pyeongwan",
            Self::DirectOfficer => "jeonggwan",
            Self::IndirectResource => "pyeonin",
            Self::DirectResource => "jeongin",
        }
    }

    /// The element-relation category this label belongs to.
    pub const fn category(self) -> TenGodCategory {
        match self {
            Self::Friend | Self::RobWealth => TenGodCategory::Peer,
            Self::EatingGod | Self::HurtingOfficer => TenGodCategory::Output,
            Self::IndirectWealth | Self::DirectWealth => TenGodCategory::Wealth,
            Self::SeventhKiller | Self::DirectOfficer => TenGodCategory::Control,
            Self::IndirectResource | Self::DirectResource => TenGodCategory::Resource,
        }
    }

    /// Both labels of a category: (matching polarity, differing polarity).
    pub const fn pair_of(category: TenGodCategory) -> (TenGod, TenGod) {
        match category {
            TenGodCategory::Peer => (Self::Friend, Self::RobWealth),
            TenGodCategory::Output => (Self::EatingGod, Self::HurtingOfficer),
            TenGodCategory::Wealth => (Self::IndirectWealth, Self::DirectWealth),
            TenGodCategory::Control => (Self::SeventhKiller, Self::DirectOfficer),
            TenGodCategory::Resource => (Self::IndirectResource, Self::DirectResource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_labels() {
        assert_eq!(ALL_TEN_GODS.len(), 10);
    }

    #[test]
    fn two_labels_per_category() {
        for g in ALL_TEN_GODS {
            let (same, diff) = TenGod::pair_of(g.category());
            assert!(g == same || g == diff);
        }
    }

    #[test]
    fn names_nonempty() {
        for g in ALL_TEN_GODS {
            assert!(!g.name().is_empty());
            assert!(!g.korean().is_empty());
        }
    }
}
