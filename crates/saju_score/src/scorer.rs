//! The event scorer: a single-pass weighted accumulation.
//!
//! No internal state machine. Construction takes an immutable scoring
//! context; `calculate` folds a dozen independent calendrical signals
//! into one integer and two ordered reason lists. Invoking it twice on
//! the same scorer yields identical output. Evaluation order affects
//! only the message sequence, never the total.

use saju_base::TenGod;
use saju_relations::{ten_god, ten_god_category};

use crate::conditions::traditional_pairing;
use crate::context::ScoringContext;
use crate::result::ScoringResult;

/// Neutral starting score.
pub const BASE_SCORE: i32 = 50;
/// Bonus/penalty for a ten-god match.
pub const TEN_GOD_WEIGHT: i32 = 10;
/// Bonus/penalty for a twelve-stage match.
pub const STAGE_WEIGHT: i32 = 8;
/// Bonus/penalty for a beneficial/detrimental element match.
pub const ELEMENT_WEIGHT: i32 = 10;
/// Bonus for a solar-term element in the favorable set.
pub const SOLAR_TERM_WEIGHT: i32 = 5;
/// Bonus for a reinforcing luck-pillar window.
pub const LUCK_PILLAR_WEIGHT: i32 = 5;
/// Bonus for a traditional (event, month element) pairing.
pub const PAIRING_WEIGHT: i32 = 3;

/// Stateless-per-call scorer over one immutable context.
///
/// Owns its own reason buffers via the cached result; multiple scorer
/// instances may be evaluated concurrently with no coordination.
#[derive(Debug, Clone)]
pub struct EventScorer {
    context: ScoringContext,
    last: Option<ScoringResult>,
}

impl EventScorer {
    pub fn new(context: ScoringContext) -> EventScorer {
        EventScorer {
            context,
            last: None,
        }
    }

    /// The context this scorer evaluates.
    pub fn context(&self) -> &ScoringContext {
        &self.context
    }

    /// Defensive copy of the most recent result, if any.
    pub fn last_result(&self) -> Option<ScoringResult> {
        self.last.clone()
    }

    /// Run the weighted accumulation and return a fresh result.
    ///
    /// Pure in the context: repeated calls return byte-identical
    /// output. Every optional input is individually skippable and
    /// absence only withholds its contribution.
    pub fn calculate(&mut self) -> ScoringResult {
        let result = score_month(&self.context);
        self.last = Some(result.clone());
        result
    }
}

/// The accumulation itself, usable without a scorer instance.
pub fn score_month(ctx: &ScoringContext) -> ScoringResult {
    let mut result = ScoringResult::neutral(BASE_SCORE);
    let conditions = ctx.conditions;

    // 1. Month ten-god against the favorable/avoid sets. Each fires at
    // most once per call; both may fire if the sets overlap.
    let month_god = ten_god(ctx.day_master, ctx.month.stem);
    if conditions.favorable_gods.contains(&month_god) {
        result.score += TEN_GOD_WEIGHT;
        result
            .reasons
            .push(format!("Favorable ten god this month: {}", month_god.name()));
    }
    if conditions.avoid_gods.contains(&month_god) {
        result.score -= TEN_GOD_WEIGHT;
        result
            .cautions
            .push(format!("Ten god to avoid this month: {}", month_god.name()));
    }

    // 2. Twelve-stage label, when the collaborator supplied one.
    if let Some(stage) = ctx.month.stage {
        if conditions.favorable_stages.contains(&stage) {
            result.score += STAGE_WEIGHT;
            result
                .reasons
                .push(format!("Favorable life-cycle stage: {}", stage.name()));
        }
        if conditions.avoid_stages.contains(&stage) {
            result.score -= STAGE_WEIGHT;
            result
                .cautions
                .push(format!("Life-cycle stage to avoid: {}", stage.name()));
        }
    }

    // 3. Caller-supplied beneficial/detrimental element sets.
    // Independent checks; both fire when the caller's sets overlap.
    if ctx.beneficial_elements.contains(&ctx.month.element) {
        result.score += ELEMENT_WEIGHT;
        result
            .reasons
            .push(format!("Beneficial element: {}", ctx.month.element.name()));
    }
    if ctx.detrimental_elements.contains(&ctx.month.element) {
        result.score -= ELEMENT_WEIGHT;
        result
            .cautions
            .push(format!("Detrimental element: {}", ctx.month.element.name()));
    }

    // 4. Solar term, when supplied and aligned with the event's
    // favorable elements.
    if let Some(term) = ctx.month.solar_term {
        if conditions.favorable_elements.contains(&term.element) {
            result.score += SOLAR_TERM_WEIGHT;
            result.reasons.push(format!(
                "Solar term {} carries favorable {}",
                term.name,
                term.element.name()
            ));
        }
    }

    // 5. Luck pillar: the current age must fall inside exactly one
    // window, and that window's element must imply a favorable ten-god
    // category for this event.
    if let Some(age) = ctx.current_age {
        let mut active = ctx.luck_pillars.iter().filter(|lp| lp.contains(age));
        if let (Some(pillar), None) = (active.next(), active.next()) {
            let category = ten_god_category(ctx.day_master.element(), pillar.element);
            let (same, diff) = TenGod::pair_of(category);
            if conditions.favorable_gods.contains(&same)
                || conditions.favorable_gods.contains(&diff)
            {
                result.score += LUCK_PILLAR_WEIGHT;
                result.reasons.push(format!(
                    "Luck pillar (ages {}-{}) reinforces a favorable influence",
                    pillar.start_age, pillar.end_age
                ));
            }
        }
    }

    // 6. Traditional (event, month element) pairing.
    if traditional_pairing(ctx.event, ctx.month.element) {
        result.score += PAIRING_WEIGHT;
        result.reasons.push(format!(
            "{} month is traditionally associated with {}",
            ctx.month.element.name(),
            ctx.event.name()
        ));
    }

    result
}
