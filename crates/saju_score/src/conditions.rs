//! Authored per-event rule data.
//!
//! For each event type, four label sets (favorable/avoid ten gods,
//! favorable/avoid stages) plus a favorable-elements set. Static data
//! constructed at compile time, immutable for the process lifetime.
//!
//! The same label may appear in both a favorable and an avoid set; both
//! effects fire. That permissive behavior is intentional and preserved.

use saju_base::{FiveElement, TenGod, TwelveStage};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The six supported life-decision categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventType {
    Marriage,
    Career,
    Investment,
    Relocation,
    Study,
    Health,
}

/// All six event types.
pub const ALL_EVENT_TYPES: [EventType; 6] = [
    EventType::Marriage,
    EventType::Career,
    EventType::Investment,
    EventType::Relocation,
    EventType::Study,
    EventType::Health,
];

impl EventType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::Career => "career",
            Self::Investment => "investment",
            Self::Relocation => "relocation",
            Self::Study => "study",
            Self::Health => "health",
        }
    }

    /// Case-insensitive parse of an event-type name.
    pub fn from_name(name: &str) -> Option<EventType> {
        ALL_EVENT_TYPES
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }
}

/// The rule sets consulted by the scorer for one event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventConditions {
    pub favorable_gods: &'static [TenGod],
    pub avoid_gods: &'static [TenGod],
    pub favorable_stages: &'static [TwelveStage],
    pub avoid_stages: &'static [TwelveStage],
    pub favorable_elements: &'static [FiveElement],
}

impl EventConditions {
    /// Conditions with every set empty; contributes nothing to a score.
    pub const EMPTY: EventConditions = EventConditions {
        favorable_gods: &[],
        avoid_gods: &[],
        favorable_stages: &[],
        avoid_stages: &[],
        favorable_elements: &[],
    };

    /// The authored rule record for an event type.
    pub const fn for_event(event: EventType) -> &'static EventConditions {
        match event {
            EventType::Marriage => &MARRIAGE,
            EventType::Career => &CAREER,
            EventType::Investment => &INVESTMENT,
            EventType::Relocation => &RELOCATION,
            EventType::Study => &STUDY,
            EventType::Health => &HEALTH,
        }
    }
}

const MARRIAGE: EventConditions = EventConditions {
    favorable_gods: &[
        TenGod::DirectOfficer,
        TenGod::DirectWealth,
        TenGod::DirectResource,
        TenGod::EatingGod,
    ],
    avoid_gods: &[TenGod::SeventhKiller, TenGod::HurtingOfficer, TenGod::RobWealth],
    favorable_stages: &[
        TwelveStage::Birth,
        TwelveStage::Capping,
        TwelveStage::Office,
        TwelveStage::Peak,
    ],
    avoid_stages: &[
        TwelveStage::Sickness,
        TwelveStage::Death,
        TwelveStage::Burial,
        TwelveStage::Extinction,
    ],
    favorable_elements: &[FiveElement::Fire, FiveElement::Earth],
};

const CAREER: EventConditions = EventConditions {
    favorable_gods: &[
        TenGod::DirectOfficer,
        TenGod::SeventhKiller,
        TenGod::DirectResource,
        TenGod::IndirectResource,
    ],
    avoid_gods: &[TenGod::HurtingOfficer, TenGod::RobWealth],
    favorable_stages: &[
        TwelveStage::Birth,
        TwelveStage::Capping,
        TwelveStage::Office,
        TwelveStage::Peak,
    ],
    avoid_stages: &[
        TwelveStage::Decline,
        TwelveStage::Sickness,
        TwelveStage::Death,
        TwelveStage::Extinction,
    ],
    favorable_elements: &[FiveElement::Metal, FiveElement::Wood],
};

const INVESTMENT: EventConditions = EventConditions {
    favorable_gods: &[
        TenGod::DirectWealth,
        TenGod::IndirectWealth,
        TenGod::EatingGod,
    ],
    avoid_gods: &[TenGod::RobWealth, TenGod::SeventhKiller],
    favorable_stages: &[TwelveStage::Birth, TwelveStage::Office, TwelveStage::Peak],
    avoid_stages: &[
        TwelveStage::Death,
        TwelveStage::Burial,
        TwelveStage::Extinction,
    ],
    favorable_elements: &[FiveElement::Metal, FiveElement::Earth],
};

const RELOCATION: EventConditions = EventConditions {
    favorable_gods: &[
        TenGod::DirectResource,
        TenGod::IndirectResource,
        TenGod::EatingGod,
    ],
    avoid_gods: &[TenGod::SeventhKiller, TenGod::HurtingOfficer],
    favorable_stages: &[
        TwelveStage::Birth,
        TwelveStage::Capping,
        TwelveStage::Office,
    ],
    avoid_stages: &[TwelveStage::Burial, TwelveStage::Extinction],
    favorable_elements: &[FiveElement::Wood, FiveElement::Fire],
};

const STUDY: EventConditions = EventConditions {
    favorable_gods: &[
        TenGod::DirectResource,
        TenGod::IndirectResource,
        TenGod::EatingGod,
    ],
    avoid_gods: &[TenGod::DirectWealth, TenGod::IndirectWealth],
    favorable_stages: &[
        TwelveStage::Birth,
        TwelveStage::Capping,
        TwelveStage::Office,
        TwelveStage::Gestation,
    ],
    avoid_stages: &[TwelveStage::Bath, TwelveStage::Death, TwelveStage::Extinction],
    favorable_elements: &[FiveElement::Water, FiveElement::Wood],
};

const HEALTH: EventConditions = EventConditions {
    favorable_gods: &[TenGod::DirectResource, TenGod::EatingGod, TenGod::Friend],
    avoid_gods: &[TenGod::SeventhKiller, TenGod::HurtingOfficer],
    favorable_stages: &[
        TwelveStage::Birth,
        TwelveStage::Office,
        TwelveStage::Peak,
        TwelveStage::Nurture,
    ],
    avoid_stages: &[
        TwelveStage::Sickness,
        TwelveStage::Death,
        TwelveStage::Burial,
        TwelveStage::Extinction,
    ],
    favorable_elements: &[FiveElement::Earth, FiveElement::Water],
};

/// Traditionally associated (event type, month element) pairings that
/// earn a small fixed bonus.
pub const EVENT_ELEMENT_PAIRINGS: [(EventType, FiveElement); 12] = [
    (EventType::Marriage, FiveElement::Fire),
    (EventType::Marriage, FiveElement::Earth),
    (EventType::Career, FiveElement::Metal),
    (EventType::Career, FiveElement::Wood),
    (EventType::Investment, FiveElement::Metal),
    (EventType::Investment, FiveElement::Earth),
    (EventType::Relocation, FiveElement::Wood),
    (EventType::Relocation, FiveElement::Fire),
    (EventType::Study, FiveElement::Water),
    (EventType::Study, FiveElement::Wood),
    (EventType::Health, FiveElement::Earth),
    (EventType::Health, FiveElement::Water),
];

/// True iff the (event, month element) pairing is traditionally favored.
pub fn traditional_pairing(event: EventType, element: FiveElement) -> bool {
    EVENT_ELEMENT_PAIRINGS
        .iter()
        .any(|&(e, el)| e == event && el == element)
}
