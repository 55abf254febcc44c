use serde::{Deserialize, Serialize};

/// Boss rounds recur every fifth round.
pub fn is_boss_round(round: u32) -> bool {
    round > 0 && round % 5 == 0
}

/// Cyclic index into the boss table for a boss round, `None` otherwise.
pub fn boss_index_for_round(round: u32, table_len: usize) -> Option<usize> {
    if !is_boss_round(round) || table_len == 0 {
        return None;
    }
    Some(((round / 5 - 1) as usize) % table_len)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BossEffect {
    /// Removes the listed bets from the catalog for the round.
    #[serde(rename_all = "camelCase")]
    DisableBets { bet_ids: Vec<String> },
    /// Overrides (does not add to) the aggregated flat bonus.
    ReduceFlatBonus { value: i64 },
    /// Scales the final per-draw multiplier sum.
    ReduceMultipliers { value: f64 },
    /// Subtracts from bank on each missed draw.
    BankDrain { value: i64 },
    /// Zeroes interest at round finalization; also halves the flat bonus
    /// during draws (the Accountant does both).
    NoInterest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossDef {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Scales the computed round target on boss rounds.
    pub target_multiplier: f64,
    #[serde(default)]
    pub effect: Option<BossEffect>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boss_rounds_are_multiples_of_five() {
        assert!(!is_boss_round(0));
        assert!(!is_boss_round(4));
        assert!(is_boss_round(5));
        assert!(!is_boss_round(6));
        assert!(is_boss_round(10));
    }

    #[test]
    fn boss_table_cycles() {
        assert_eq!(boss_index_for_round(5, 5), Some(0));
        assert_eq!(boss_index_for_round(10, 5), Some(1));
        assert_eq!(boss_index_for_round(25, 5), Some(4));
        assert_eq!(boss_index_for_round(30, 5), Some(0));
        assert_eq!(boss_index_for_round(7, 5), None);
        assert_eq!(boss_index_for_round(5, 0), None);
    }
}
