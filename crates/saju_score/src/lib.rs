//! Event favorability scoring and relationship compatibility.
//!
//! The scorer folds one candidate month's calendrical signals (ten god,
//! twelve-stage label, element alignments, solar term, luck pillar,
//! traditional pairings) into a single integer around a neutral 50,
//! with itemized reason and caution lists. The compatibility module
//! reuses only the leaf crates (calendar, relations) to compare two
//! profiles.

pub mod compat;
pub mod conditions;
pub mod context;
pub mod result;
pub mod scorer;

pub use compat::{CompatProfile, TenGodAffinity, compatibility};
pub use conditions::{ALL_EVENT_TYPES, EventConditions, EventType, traditional_pairing};
pub use context::{LuckPillar, MonthContext, ScoringContext};
pub use result::ScoringResult;
pub use scorer::{BASE_SCORE, EventScorer, score_month};
