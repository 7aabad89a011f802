//! Scoring output: a numeric favorability estimate with itemized,
//! human-auditable reasoning.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one scoring pass. Immutable once produced.
///
/// The total has no enforced ceiling or floor: 50 is neutral and only
/// relative ordering across candidate months is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoringResult {
    pub score: i32,
    /// Positive contributions, in evaluation order.
    pub reasons: Vec<String>,
    /// Negative contributions, in evaluation order.
    pub cautions: Vec<String>,
}

impl ScoringResult {
    /// A neutral result with no contributions.
    pub const fn neutral(base: i32) -> ScoringResult {
        ScoringResult {
            score: base,
            reasons: Vec::new(),
            cautions: Vec::new(),
        }
    }
}
