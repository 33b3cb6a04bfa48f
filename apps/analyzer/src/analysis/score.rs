use serde::{Deserialize, Serialize};

use crate::analysis::matcher::MatchResult;

/// Constants for the heuristic ATS score.
///
/// `score = min(base + variety_bonus × categories + min(per_keyword_bonus × keywords,
/// count_bonus_cap), cap)`, then clamped to 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub base: u32,
    pub variety_bonus: u32,
    pub per_keyword_bonus: u32,
    pub count_bonus_cap: u32,
    pub cap: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 70,
            variety_bonus: 5,
            per_keyword_bonus: 2,
            count_bonus_cap: 15,
            cap: 98,
        }
    }
}

/// Converts match statistics into a bounded, deterministic score.
/// Breadth across categories is rewarded more than raw repetition.
pub fn compose_score(matches: &MatchResult, weights: &ScoreWeights) -> u32 {
    let categories = matches.non_empty_categories() as u32;
    let keywords = matches.total() as u32;

    let variety = weights.variety_bonus.saturating_mul(categories);
    let count = weights
        .per_keyword_bonus
        .saturating_mul(keywords)
        .min(weights.count_bonus_cap);

    weights
        .base
        .saturating_add(variety)
        .saturating_add(count)
        .min(weights.cap)
        .min(100)
}
