//! Shinsal (special star) predicates: pure anchor-table lookups.
//!
//! Each predicate checks a candidate symbol against a fixed 10- or
//! 12-entry table keyed by the day stem or by the year branch's samhap
//! group. All predicates return plain `bool`; there is nothing to fail.

use saju_base::{Branch, Stem};

use crate::harmony::{TriadGroup, triad_group};

/// Nobility star (cheoneulgwiin): up to two favored branches per day
/// stem. The classical couplet table: Gap/Mu/Gyeong → Chuk+Mi,
/// Eul/Gi → Ja+Sin, Byeong/Jeong → Hae+Yu, Sin → In+O, Im/Gye → Sa+Myo.
pub const fn nobility_branches(day_stem: Stem) -> &'static [Branch] {
    match day_stem {
        Stem::Gap | Stem::Mu | Stem::Gyeong => &[Branch::Chuk, Branch::Mi],
        Stem::Eul | Stem::Gi => &[Branch::Ja, Branch::Sin],
        Stem::Byeong | Stem::Jeong => &[Branch::Hae, Branch::Yu],
        Stem::Sin => &[Branch::In, Branch::O],
        Stem::Im | Stem::Gye => &[Branch::Sa, Branch::Myo],
    }
}

/// True iff `candidate` is a nobility-star branch for the day stem.
pub fn nobility_star(day_stem: Stem, candidate: Branch) -> bool {
    nobility_branches(day_stem).contains(&candidate)
}

/// Travel star (yeongma): the single station branch of the year
/// branch's samhap group.
pub const fn travel_branch(group: TriadGroup) -> Branch {
    match group {
        TriadGroup::Water => Branch::In,
        TriadGroup::Fire => Branch::Sin,
        TriadGroup::Metal => Branch::Hae,
        TriadGroup::Wood => Branch::Sa,
    }
}

/// True iff `candidate` is the travel-star branch for the year branch.
pub fn travel_star(year_branch: Branch, candidate: Branch) -> bool {
    travel_branch(triad_group(year_branch)) == candidate
}

/// Romance star (dohwa): the bath-stage branch of the samhap group.
pub const fn romance_branch(group: TriadGroup) -> Branch {
    match group {
        TriadGroup::Water => Branch::Yu,
        TriadGroup::Fire => Branch::Myo,
        TriadGroup::Metal => Branch::O,
        TriadGroup::Wood => Branch::Ja,
    }
}

/// True iff `candidate` is the romance-star branch for the year branch.
pub fn romance_star(year_branch: Branch, candidate: Branch) -> bool {
    romance_branch(triad_group(year_branch)) == candidate
}

/// Robust-fortune branch (geonrok): the one peak-vitality branch per
/// day stem.
pub const fn robust_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Gap => Branch::In,
        Stem::Eul => Branch::Myo,
        Stem::Byeong | Stem::Mu => Branch::Sa,
        Stem::Jeong | Stem::Gi => Branch::O,
        Stem::Gyeong => Branch::Sin,
        Stem::Sin => Branch::Yu,
        Stem::Im => Branch::Hae,
        Stem::Gye => Branch::Ja,
    }
}

/// True iff `candidate` is the robust-fortune branch for the day stem.
pub fn robust_day(day_stem: Stem, candidate: Branch) -> bool {
    robust_branch(day_stem) == candidate
}

/// Three-disaster years (samjae): the three consecutive year branches
/// tabulated for the birth year's samhap group.
pub const fn three_disaster_branches(group: TriadGroup) -> [Branch; 3] {
    match group {
        TriadGroup::Water => [Branch::In, Branch::Myo, Branch::Jin],
        TriadGroup::Fire => [Branch::Sin, Branch::Yu, Branch::Sul],
        TriadGroup::Metal => [Branch::Hae, Branch::Ja, Branch::Chuk],
        TriadGroup::Wood => [Branch::Sa, Branch::O, Branch::Mi],
    }
}

/// True iff `candidate_year_branch` falls in the three-disaster span
/// for someone born in a `birth_year_branch` year.
pub fn three_disaster_year(birth_year_branch: Branch, candidate_year_branch: Branch) -> bool {
    three_disaster_branches(triad_group(birth_year_branch)).contains(&candidate_year_branch)
}

/// The six "no-spirits" lunar days.
const EMPTY_DAYS: [u8; 6] = [9, 10, 19, 20, 29, 30];

/// True iff the approximated lunar day is one of the six no-spirits
/// days. The lunar day is an estimate (mean synodic fold); exact
/// lunisolar conversion is an external collaborator concern.
pub fn empty_day(lunar_day: u8) -> bool {
    EMPTY_DAYS.contains(&lunar_day)
}
