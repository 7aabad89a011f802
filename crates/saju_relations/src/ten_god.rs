//! Ten-god mapping: classify any stem against a day master.
//!
//! The relation between the two stems' elements along the production/
//! destruction cycle picks one of five categories; the polarity match
//! splits each category into two labels, for exactly 10. The same
//! mapper serves the event scorer (day master vs. a candidate month's
//! stem) and compatibility scoring (two people's day masters); which
//! labels count as harmonious between two people is the caller's
//! semantic table, not decided here.

use saju_base::{FiveElement, Stem, TenGod, TenGodCategory};

/// Element-relation category of `other` as seen from the day master.
pub fn ten_god_category(day_master: FiveElement, other: FiveElement) -> TenGodCategory {
    if day_master == other {
        TenGodCategory::Peer
    } else if day_master.produces_other(other) {
        TenGodCategory::Output
    } else if day_master.destroys_other(other) {
        TenGodCategory::Wealth
    } else if other.destroys_other(day_master) {
        TenGodCategory::Control
    } else {
        // The five-element cycle leaves exactly one remaining relation.
        TenGodCategory::Resource
    }
}

/// The ten-god label of `other` relative to `day_master`.
///
/// Comparing a stem with itself always yields [`TenGod::Friend`].
pub fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let category = ten_god_category(day_master.element(), other.element());
    let (same_polarity, diff_polarity) = TenGod::pair_of(category);
    if day_master.polarity() == other.polarity() {
        same_polarity
    } else {
        diff_polarity
    }
}
