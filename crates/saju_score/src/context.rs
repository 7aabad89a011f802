//! Scoring inputs: one candidate month's facts bound to one profile and
//! one event-type rule record.

use saju_base::{Branch, FiveElement, GanzhiPair, SolarTerm, Stem, TwelveStage};

use crate::conditions::{EventConditions, EventType};

/// One candidate month's calendrical facts.
///
/// `stage` and `solar_term` come from external collaborators and are
/// optional; absence simply withholds their contribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthContext {
    pub stem: Stem,
    pub branch: Branch,
    /// The element the month expresses (conventionally the branch's).
    pub element: FiveElement,
    pub stage: Option<TwelveStage>,
    pub solar_term: Option<SolarTerm>,
}

impl MonthContext {
    /// Month facts from a ganzhi pair, element taken from the branch,
    /// with no optional collaborator input.
    pub const fn from_pair(pair: GanzhiPair) -> MonthContext {
        MonthContext {
            stem: pair.stem,
            branch: pair.branch,
            element: pair.branch.element(),
            stage: None,
            solar_term: None,
        }
    }
}

/// A multi-year luck-pillar window (inclusive age range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuckPillar {
    pub start_age: u32,
    pub end_age: u32,
    pub branch: Branch,
    pub element: FiveElement,
}

impl LuckPillar {
    /// True iff `age` falls inside this window (inclusive ends).
    pub const fn contains(&self, age: u32) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// Everything one scoring pass reads: constructed fresh per
/// (profile, event, candidate month) query and discarded after.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringContext {
    pub day_master: Stem,
    pub event: EventType,
    pub conditions: &'static EventConditions,
    pub month: MonthContext,
    /// Profile's current age, needed only for luck-pillar windows.
    pub current_age: Option<u32>,
    pub beneficial_elements: Vec<FiveElement>,
    pub detrimental_elements: Vec<FiveElement>,
    pub luck_pillars: Vec<LuckPillar>,
}

impl ScoringContext {
    /// Context with the authored rule record for `event` and every
    /// optional input absent.
    pub fn new(day_master: Stem, event: EventType, month: MonthContext) -> ScoringContext {
        ScoringContext {
            day_master,
            event,
            conditions: EventConditions::for_event(event),
            month,
            current_age: None,
            beneficial_elements: Vec::new(),
            detrimental_elements: Vec::new(),
            luck_pillars: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_from_pair_uses_branch_element() {
        let pair = GanzhiPair::from_cycle_index(0); // Gap-Ja
        let m = MonthContext::from_pair(pair);
        assert_eq!(m.element, FiveElement::Water);
        assert_eq!(m.stage, None);
        assert_eq!(m.solar_term, None);
    }

    #[test]
    fn luck_pillar_window_inclusive() {
        let lp = LuckPillar {
            start_age: 24,
            end_age: 33,
            branch: Branch::O,
            element: FiveElement::Fire,
        };
        assert!(lp.contains(24));
        assert!(lp.contains(33));
        assert!(!lp.contains(23));
        assert!(!lp.contains(34));
    }

    #[test]
    fn new_context_has_no_optional_input() {
        let ctx = ScoringContext::new(
            Stem::Gap,
            EventType::Career,
            MonthContext::from_pair(GanzhiPair::from_cycle_index(10)),
        );
        assert_eq!(ctx.current_age, None);
        assert!(ctx.beneficial_elements.is_empty());
        assert!(ctx.luck_pillars.is_empty());
        assert_eq!(ctx.conditions, EventConditions::for_event(EventType::Career));
    }
}
