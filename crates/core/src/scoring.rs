use crate::{rank_value, Card};
use serde::{Deserialize, Serialize};

/// Fixed draw score for either joker; not derived from rank ordering.
pub const JOKER_BASE_SCORE: i64 = 22;

/// A miss still pays half the base score, so no draw is a total loss.
pub const MISS_FACTOR: f64 = 0.5;

pub fn base_score(card: &Card) -> i64 {
    if card.is_joker() {
        JOKER_BASE_SCORE
    } else {
        rank_value(card.rank).max(2)
    }
}

/// Per-draw score breakdown, kept explicit so the embedding layer can show
/// the arithmetic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrawScore {
    pub base: i64,
    pub hit: bool,
    pub multiplier: f64,
    pub flat_bonus: i64,
}

impl DrawScore {
    pub fn total(&self) -> i64 {
        let scored = if self.hit {
            self.base as f64 * self.multiplier
        } else {
            self.base as f64 * MISS_FACTOR
        };
        (scored + self.flat_bonus as f64).floor() as i64
    }
}
