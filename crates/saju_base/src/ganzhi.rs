//! Sexagenary (ganzhi) pairs: the 60-unit stem/branch cycle.
//!
//! Only 60 of the 120 stem×branch combinations occur: a pair is valid iff
//! its stem and branch indices have equal parity. Position `p` in the
//! 60-cycle satisfies `p ≡ stem_index (mod 10)` and `p ≡ branch_index
//! (mod 12)` simultaneously.

use crate::branch::Branch;
use crate::stem::Stem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One sexagenary unit: a heavenly stem paired with an earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GanzhiPair {
    pub stem: Stem,
    pub branch: Branch,
}

impl GanzhiPair {
    /// Build the pair at a given position in the 60-cycle (mod 60).
    /// Position 0 = Gap-Ja.
    pub const fn from_cycle_index(position: u8) -> GanzhiPair {
        let p = position % 60;
        GanzhiPair {
            stem: Stem::from_index(p % 10),
            branch: Branch::from_index(p % 12),
        }
    }

    /// Position of this pair in the 60-cycle (0 = Gap-Ja .. 59 = Gye-Hae).
    ///
    /// Solves `p ≡ stem (mod 10)`, `p ≡ branch (mod 12)` by CRT. Only
    /// meaningful for valid pairs; use [`GanzhiPair::is_valid`] to check.
    pub const fn cycle_index(self) -> u8 {
        // p = stem + 10k with p mod 12 = branch; 10k ≡ branch - stem (mod 12)
        // scanning k in 0..6 is simpler than the closed form and still const.
        let s = self.stem.index();
        let b = self.branch.index();
        let mut k = 0u8;
        while k < 6 {
            let p = s + 10 * k;
            if p % 12 == b {
                return p;
            }
            k += 1;
        }
        // Unreachable for valid pairs; invalid pairs report 60 as a sentinel.
        60
    }

    /// A pair is valid iff stem and branch indices share parity.
    pub const fn is_valid(self) -> bool {
        self.stem.index() % 2 == self.branch.index() % 2
    }

    /// Combined romanized name, e.g. "Gap-Ja".
    pub fn name(self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Combined hanja, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}
