//! Branch relationship predicates: harmonies, clashes, punishments, triads.
//!
//! Every two-argument predicate is argument-order symmetric and total
//! over the `Branch` enum. Parsing foreign symbol text degrades to
//! `None` at the `Branch::from_name` boundary, so one bad symbol never
//! aborts an analysis run.

use saju_base::{Branch, FiveElement};

/// The six harmony (yukhap) pairs.
const SIX_HARMONY_PAIRS: [(Branch, Branch); 6] = [
    (Branch::Ja, Branch::Chuk),
    (Branch::In, Branch::Hae),
    (Branch::Myo, Branch::Sul),
    (Branch::Jin, Branch::Yu),
    (Branch::Sa, Branch::Sin),
    (Branch::O, Branch::Mi),
];

/// True iff the unordered pair is one of the six harmony pairs.
pub fn six_harmony(a: Branch, b: Branch) -> bool {
    SIX_HARMONY_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// True iff the unordered pair is one of the six clash (chung) pairs.
///
/// Clash pairs sit directly opposite on the branch wheel: index
/// distance 6 mod 12 (Ja-O, Chuk-Mi, In-Sin, Myo-Yu, Jin-Sul, Sa-Hae).
pub fn clash(a: Branch, b: Branch) -> bool {
    (a.index() + 6) % 12 == b.index()
}

/// The punishment (hyeong) pairs: the ungrateful group In-Sa-Sin, the
/// bullying group Chuk-Sul-Mi, the rude pair Ja-Myo, and the four
/// self-punishing branches.
const PUNISHMENT_PAIRS: [(Branch, Branch); 11] = [
    (Branch::In, Branch::Sa),
    (Branch::Sa, Branch::Sin),
    (Branch::In, Branch::Sin),
    (Branch::Chuk, Branch::Sul),
    (Branch::Sul, Branch::Mi),
    (Branch::Chuk, Branch::Mi),
    (Branch::Ja, Branch::Myo),
    (Branch::Jin, Branch::Jin),
    (Branch::O, Branch::O),
    (Branch::Yu, Branch::Yu),
    (Branch::Hae, Branch::Hae),
];

/// True iff the unordered pair is one of the fixed punishment pairs.
pub fn punishment(a: Branch, b: Branch) -> bool {
    PUNISHMENT_PAIRS
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

/// The four triple-harmony (samhap) groups and their resulting elements.
const TRIADS: [([Branch; 3], FiveElement); 4] = [
    ([Branch::Sin, Branch::Ja, Branch::Jin], FiveElement::Water),
    ([Branch::In, Branch::O, Branch::Sul], FiveElement::Fire),
    ([Branch::Sa, Branch::Yu, Branch::Chuk], FiveElement::Metal),
    ([Branch::Hae, Branch::Myo, Branch::Mi], FiveElement::Wood),
];

/// Triad group membership, used by the shinsal station tables: every
/// branch belongs to exactly one samhap group, named by its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriadGroup {
    Water,
    Fire,
    Metal,
    Wood,
}

impl TriadGroup {
    /// The element the full triad produces.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Water => FiveElement::Water,
            Self::Fire => FiveElement::Fire,
            Self::Metal => FiveElement::Metal,
            Self::Wood => FiveElement::Wood,
        }
    }
}

/// The samhap group a branch belongs to.
pub const fn triad_group(branch: Branch) -> TriadGroup {
    match branch {
        Branch::Sin | Branch::Ja | Branch::Jin => TriadGroup::Water,
        Branch::In | Branch::O | Branch::Sul => TriadGroup::Fire,
        Branch::Sa | Branch::Yu | Branch::Chuk => TriadGroup::Metal,
        Branch::Hae | Branch::Myo | Branch::Mi => TriadGroup::Wood,
    }
}

/// Count distinct members of one triad present in the branch set.
fn triad_members_present(triad: &[Branch; 3], branches: &[Branch]) -> usize {
    triad.iter().filter(|m| branches.contains(m)).count()
}

/// Resulting element when all three members of a samhap group are
/// present; `None` otherwise, even for a differently composed
/// three-branch set.
pub fn triple_harmony_full(branches: &[Branch]) -> Option<FiveElement> {
    TRIADS
        .iter()
        .find(|(triad, _)| triad_members_present(triad, branches) == 3)
        .map(|&(_, element)| element)
}

/// True iff the set contains at least two members of one samhap group.
pub fn triple_harmony_partial(branches: &[Branch]) -> bool {
    TRIADS
        .iter()
        .any(|(triad, _)| triad_members_present(triad, branches) >= 2)
}

/// Hidden stems of a branch (re-exported convenience over the base
/// table): the fixed ordered 1-3 stem list with dominance weights.
pub const fn hidden_stems(branch: Branch) -> &'static [(saju_base::Stem, u8)] {
    branch.hidden_stems()
}
