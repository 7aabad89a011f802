//! Integration tests for the relation analyzer and ten-god mapper,
//! exercising the cross-module properties the scorer relies on.

use std::collections::HashSet;

use saju_base::{ALL_BRANCHES, ALL_STEMS, Branch, FiveElement, Stem, TenGod};
use saju_relations::{
    clash, punishment, six_harmony, ten_god, ten_god_category, triple_harmony_full,
    triple_harmony_partial,
};

/// Every two-argument predicate is symmetric over all 144 pairs.
#[test]
fn predicates_symmetric() {
    for a in ALL_BRANCHES {
        for b in ALL_BRANCHES {
            assert_eq!(six_harmony(a, b), six_harmony(b, a));
            assert_eq!(clash(a, b), clash(b, a));
            assert_eq!(punishment(a, b), punishment(b, a));
        }
    }
}

/// Harmony and clash never coincide on the same pair.
#[test]
fn harmony_and_clash_disjoint() {
    for a in ALL_BRANCHES {
        for b in ALL_BRANCHES {
            assert!(!(six_harmony(a, b) && clash(a, b)), "{} {}", a.name(), b.name());
        }
    }
}

/// The designated water triad is full; every 2-subset is partial only.
#[test]
fn triad_exclusivity() {
    let triad = [Branch::Sin, Branch::Ja, Branch::Jin];
    assert_eq!(triple_harmony_full(&triad), Some(FiveElement::Water));
    for skip in 0..3 {
        let subset: Vec<Branch> = triad
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, b)| *b)
            .collect();
        assert_eq!(triple_harmony_full(&subset), None);
        assert!(triple_harmony_partial(&subset));
    }
}

/// A mixed three-branch set that is no triad yields none.
#[test]
fn non_triad_three_branches() {
    assert_eq!(
        triple_harmony_full(&[Branch::Ja, Branch::O, Branch::Myo]),
        None
    );
}

/// Ten-god totality: self → Friend, all labels reachable, every
/// combination mapped.
#[test]
fn ten_god_totality() {
    let mut reached = HashSet::new();
    for dm in ALL_STEMS {
        assert_eq!(ten_god(dm, dm), TenGod::Friend);
        for other in ALL_STEMS {
            reached.insert(ten_god(dm, other));
        }
    }
    assert_eq!(reached.len(), 10);
}

/// Ten gods split evenly: each label covers exactly 10 of the 100 pairs.
#[test]
fn ten_god_even_split() {
    let mut counts = std::collections::HashMap::new();
    for dm in ALL_STEMS {
        for other in ALL_STEMS {
            *counts.entry(ten_god(dm, other)).or_insert(0u32) += 1;
        }
    }
    for (god, n) in counts {
        assert_eq!(n, 10, "{}", god.name());
    }
}

/// The category mapper agrees with the stem-level mapper, so callers
/// holding only an element (luck pillars, compatibility) stay
/// consistent with the stem path.
#[test]
fn category_consistency() {
    for dm in ALL_STEMS {
        for other in ALL_STEMS {
            assert_eq!(
                ten_god(dm, other).category(),
                ten_god_category(dm.element(), other.element())
            );
        }
    }
}

/// Unknown symbol text degrades to None at the parse boundary instead
/// of aborting analysis.
#[test]
fn foreign_symbols_degrade_gracefully() {
    assert_eq!(Stem::from_name("quux"), None);
    assert_eq!(Branch::from_name("mesha"), None);
    // and a good symbol next to it still parses
    assert_eq!(Branch::from_name("ja"), Some(Branch::Ja));
}
