//! Relationship compatibility between two profiles.
//!
//! Reuses the calendar, relation analyzer, and ten-god mapper directly,
//! never the event scorer. Which ten-god labels count as harmonious
//! between two people is the caller's decision: the semantic table
//! arrives as a [`TenGodAffinity`] rather than being authored here.

use saju_base::{Branch, Stem, TenGod};
use saju_calendar::{CalendarError, day_ganzhi, year_ganzhi};
use saju_relations::{clash, punishment, six_harmony, ten_god, triple_harmony_full};

use crate::result::ScoringResult;

/// Weight per branch harmony across the two profiles.
const HARMONY_WEIGHT: i32 = 6;
/// Penalty per branch clash.
const CLASH_WEIGHT: i32 = 6;
/// Penalty per branch punishment.
const PUNISHMENT_WEIGHT: i32 = 4;
/// Bonus when the combined branches complete a samhap triad.
const TRIAD_WEIGHT: i32 = 8;

/// Caller-supplied semantic table: a signed weight per ten-god label,
/// applied to each direction of the day-master relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenGodAffinity {
    weights: [i32; 10],
}

impl TenGodAffinity {
    /// All-zero table: day-master relations contribute nothing.
    pub const fn neutral() -> TenGodAffinity {
        TenGodAffinity { weights: [0; 10] }
    }

    /// Build a table from explicit (label, weight) entries; unlisted
    /// labels weigh zero.
    pub fn from_entries(entries: &[(TenGod, i32)]) -> TenGodAffinity {
        let mut table = Self::neutral();
        for &(god, w) in entries {
            table.weights[index_of(god)] = w;
        }
        table
    }

    /// Weight of one label.
    pub const fn weight(&self, god: TenGod) -> i32 {
        self.weights[index_of(god)]
    }
}

const fn index_of(god: TenGod) -> usize {
    match god {
        TenGod::Friend => 0,
        TenGod::RobWealth => 1,
        TenGod::EatingGod => 2,
        TenGod::HurtingOfficer => 3,
        TenGod::IndirectWealth => 4,
        TenGod::DirectWealth => 5,
        TenGod::SeventhKiller => 6,
        TenGod::DirectOfficer => 7,
        TenGod::IndirectResource => 8,
        TenGod::DirectResource => 9,
    }
}

/// The slice of a profile that compatibility reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatProfile {
    pub day_master: Stem,
    pub year_branch: Branch,
    pub day_branch: Branch,
}

impl CompatProfile {
    /// Derive a profile from a Gregorian birth date.
    pub fn from_birth_date(year: i32, month: u32, day: u32) -> Result<CompatProfile, CalendarError> {
        let day_pair = day_ganzhi(year, month, day)?;
        Ok(CompatProfile {
            day_master: day_pair.stem,
            year_branch: year_ganzhi(year).branch,
            day_branch: day_pair.branch,
        })
    }
}

/// Composite compatibility score for two profiles.
///
/// Base 50, day-master ten-god weights from the supplied table in both
/// directions, then pairwise branch checks across the profiles' year
/// and day branches, then a combined-triad bonus.
pub fn compatibility(
    a: &CompatProfile,
    b: &CompatProfile,
    affinity: &TenGodAffinity,
) -> ScoringResult {
    let mut result = ScoringResult::neutral(50);

    for (mine, theirs, who) in [(a, b, "first"), (b, a, "second")] {
        let god = ten_god(mine.day_master, theirs.day_master);
        let w = affinity.weight(god);
        result.score += w;
        if w > 0 {
            result.reasons.push(format!(
                "Day masters relate as {} toward the {} person",
                god.name(),
                who
            ));
        } else if w < 0 {
            result.cautions.push(format!(
                "Day masters relate as {} toward the {} person",
                god.name(),
                who
            ));
        }
    }

    let pairs = [
        (a.year_branch, b.year_branch, "year"),
        (a.day_branch, b.day_branch, "day"),
        (a.year_branch, b.day_branch, "year/day"),
        (a.day_branch, b.year_branch, "day/year"),
    ];
    for (x, y, label) in pairs {
        if six_harmony(x, y) {
            result.score += HARMONY_WEIGHT;
            result.reasons.push(format!(
                "{} and {} form a six harmony ({} branches)",
                x.name(),
                y.name(),
                label
            ));
        }
        if clash(x, y) {
            result.score -= CLASH_WEIGHT;
            result.cautions.push(format!(
                "{} and {} clash ({} branches)",
                x.name(),
                y.name(),
                label
            ));
        }
        if punishment(x, y) {
            result.score -= PUNISHMENT_WEIGHT;
            result.cautions.push(format!(
                "{} and {} form a punishment ({} branches)",
                x.name(),
                y.name(),
                label
            ));
        }
    }

    let combined = [a.year_branch, a.day_branch, b.year_branch, b.day_branch];
    if let Some(element) = triple_harmony_full(&combined) {
        result.score += TRIAD_WEIGHT;
        result.reasons.push(format!(
            "Combined branches complete a {} triad",
            element.name()
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::FiveElement;

    fn affinity() -> TenGodAffinity {
        TenGodAffinity::from_entries(&[
            (TenGod::DirectWealth, 8),
            (TenGod::DirectOfficer, 8),
            (TenGod::Friend, 3),
            (TenGod::SeventhKiller, -6),
            (TenGod::RobWealth, -4),
        ])
    }

    #[test]
    fn neutral_table_harmonious_branches() {
        let a = CompatProfile {
            day_master: Stem::Gap,
            year_branch: Branch::Ja,
            day_branch: Branch::In,
        };
        let b = CompatProfile {
            day_master: Stem::Gap,
            year_branch: Branch::Chuk,
            day_branch: Branch::Hae,
        };
        // Ja-Chuk and In-Hae are six harmonies; cross pairs are not.
        let r = compatibility(&a, &b, &TenGodAffinity::neutral());
        assert_eq!(r.score, 50 + 2 * HARMONY_WEIGHT);
        assert_eq!(r.reasons.len(), 2);
        assert!(r.cautions.is_empty());
    }

    #[test]
    fn clashing_branches_lower_score() {
        let a = CompatProfile {
            day_master: Stem::Gap,
            year_branch: Branch::Ja,
            day_branch: Branch::Myo,
        };
        let b = CompatProfile {
            day_master: Stem::Gap,
            year_branch: Branch::O,
            day_branch: Branch::Yu,
        };
        // Cross pairs include the Ja-O and Myo-Yu clashes.
        let r = compatibility(&a, &b, &TenGodAffinity::neutral());
        assert!(r.score < 50);
        assert!(r.cautions.iter().any(|c| c.contains("clash")));
    }

    #[test]
    fn day_master_weights_apply_both_directions() {
        let a = CompatProfile {
            day_master: Stem::Gap, // yang wood
            year_branch: Branch::In,
            day_branch: Branch::O,
        };
        let b = CompatProfile {
            day_master: Stem::Gi, // yin earth: Gap→Gi DirectWealth, Gi→Gap DirectOfficer
            year_branch: Branch::Chuk,
            day_branch: Branch::Mi,
        };
        let r = compatibility(&a, &b, &affinity());
        // Branch pairs: In-Chuk, O-Mi (harmony), In-Mi, O-Chuk.
        // O-Chuk: punishment? no. In-Mi? no. Chuk-Mi not crossed here.
        let branch_part = HARMONY_WEIGHT;
        assert_eq!(r.score, 50 + 8 + 8 + branch_part);
    }

    #[test]
    fn combined_triad_bonus() {
        let a = CompatProfile {
            day_master: Stem::Im,
            year_branch: Branch::Sin,
            day_branch: Branch::Ja,
        };
        let b = CompatProfile {
            day_master: Stem::Gye,
            year_branch: Branch::Jin,
            day_branch: Branch::Chuk,
        };
        let r = compatibility(&a, &b, &TenGodAffinity::neutral());
        assert!(
            r.reasons
                .iter()
                .any(|m| m.contains(FiveElement::Water.name()))
        );
    }

    #[test]
    fn profile_from_birth_date() {
        let p = CompatProfile::from_birth_date(2000, 1, 1).unwrap();
        assert_eq!(p.day_master, Stem::Mu);
        assert_eq!(p.day_branch, Branch::O);
        assert_eq!(p.year_branch, Branch::Jin); // 2000 = Gyeong-Jin
        assert!(CompatProfile::from_birth_date(2000, 2, 30).is_err());
    }
}
