//! The five elements (ohaeng) and yin/yang polarity.
//!
//! Two cyclic orders underlie every relational rule in the system:
//! - production (sangsaeng): Wood → Fire → Earth → Metal → Water → Wood
//! - destruction (sanggeuk): Wood → Earth → Water → Fire → Metal → Wood

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The five elements in production-cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All five elements in production-cycle order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Korean romanization.
    pub const fn korean(self) -> &'static str {
        match self {
            Self::Wood => "mok",
            Self::Fire => "hwa",
            Self::Earth => "to",
            Self::Metal => "geum",
            Self::Water => "su",
        }
    }

    /// 0-based index in production-cycle order (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Element from a 0-based production-cycle index (mod 5).
    pub const fn from_index(idx: u8) -> FiveElement {
        ALL_ELEMENTS[(idx % 5) as usize]
    }

    /// The element this one produces (next in the production cycle).
    pub const fn produces(self) -> FiveElement {
        Self::from_index(self.index() + 1)
    }

    /// The element this one destroys (two steps ahead in the production cycle).
    pub const fn destroys(self) -> FiveElement {
        Self::from_index(self.index() + 2)
    }

    /// True iff `self` produces `other`.
    pub fn produces_other(self, other: FiveElement) -> bool {
        self.produces() == other
    }

    /// True iff `self` destroys `other`.
    pub fn destroys_other(self, other: FiveElement) -> bool {
        self.destroys() == other
    }

    /// Case-insensitive parse of an English element name.
    pub fn from_name(name: &str) -> Option<FiveElement> {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }
}

/// Yin/yang polarity of a stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}
