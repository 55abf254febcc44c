//! Aggregation over owned relics. Every function here is a pure fold over
//! the owned collection, recomputed on demand; the collection itself is the
//! single source of truth.

use crate::{BonusCondition, OwnedUpgrade, Rarity, UpgradeEffect};
use std::collections::{HashMap, HashSet};

pub const RED_SYNERGY_TAG: &str = "red-synergy";
pub const BLACK_SYNERGY_TAG: &str = "black-synergy";
pub const INTEREST_SYNERGY_TAG: &str = "interest-synergy";

pub const GAMBLER_SET: &str = "gambler";
pub const BANKER_SET: &str = "banker";

/// Pieces required before a transformation set completes. Three copies of
/// the same piece also complete a set; only the count is checked.
pub const TRANSFORMATION_SET_SIZE: usize = 3;

const GAMBLER_SET_BET_BONUS: f64 = 2.0;
const BANKER_SET_INTEREST_BONUS: f64 = 0.08;

pub fn extra_draws(owned: &[OwnedUpgrade]) -> i64 {
    owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::ExtraDraws { value } => *value,
            _ => 0,
        })
        .sum()
}

/// Flat bonus contributed by relics alone; deck modifiers and boss
/// overrides are applied by the round engine.
pub fn flat_bonus(owned: &[OwnedUpgrade]) -> i64 {
    owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::FlatBonus { value } => *value,
            _ => 0,
        })
        .sum()
}

pub fn global_multiplier(owned: &[OwnedUpgrade]) -> f64 {
    owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::GlobalMultiplier { value } => *value,
            _ => 0.0,
        })
        .sum()
}

/// Total synergy contribution for one tag: each carried
/// `synergyMultiplier` is worth its per-item value times the number of
/// owned relics bearing the tag, the carrier included.
pub fn synergy_total(owned: &[OwnedUpgrade], tag: &str) -> f64 {
    let tagged = owned.iter().filter(|upgrade| upgrade.has_tag(tag)).count() as f64;
    owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::SynergyMultiplier { tag: t, value } if t == tag => value * tagged,
            _ => 0.0,
        })
        .sum()
}

/// Set ids with at least [`TRANSFORMATION_SET_SIZE`] owned pieces.
pub fn completed_sets(owned: &[OwnedUpgrade]) -> HashSet<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for upgrade in owned {
        for effect in &upgrade.template.effects {
            if let UpgradeEffect::Transformation { set, .. } = effect {
                *counts.entry(set.as_str()).or_insert(0) += 1;
            }
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= TRANSFORMATION_SET_SIZE)
        .map(|(set, _)| set.to_string())
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformationBonuses {
    pub bet_multipliers: HashMap<String, f64>,
    pub interest: f64,
}

/// Fixed bonuses per completed set; never scaled by extra pieces.
pub fn transformation_bonuses(completed: &HashSet<String>) -> TransformationBonuses {
    let mut bonuses = TransformationBonuses::default();
    for set in completed {
        match set.as_str() {
            GAMBLER_SET => {
                for bet_id in ["special-joker", "special-ace"] {
                    *bonuses.bet_multipliers.entry(bet_id.to_string()).or_insert(0.0) +=
                        GAMBLER_SET_BET_BONUS;
                }
            }
            BANKER_SET => bonuses.interest += BANKER_SET_INTEREST_BONUS,
            _ => {}
        }
    }
    bonuses
}

/// Per-bet multiplier bonuses: direct `betMultiplier` sums, then color
/// synergies, then transformation-set bonuses.
pub fn bet_bonus_map(owned: &[OwnedUpgrade]) -> HashMap<String, f64> {
    let mut map: HashMap<String, f64> = HashMap::new();
    for upgrade in owned {
        for effect in &upgrade.template.effects {
            if let UpgradeEffect::BetMultiplier { bet_id, value } = effect {
                *map.entry(bet_id.clone()).or_insert(0.0) += value;
            }
        }
    }

    let red = synergy_total(owned, RED_SYNERGY_TAG);
    if red != 0.0 {
        *map.entry("color-red".to_string()).or_insert(0.0) += red;
    }
    let black = synergy_total(owned, BLACK_SYNERGY_TAG);
    if black != 0.0 {
        *map.entry("color-black".to_string()).or_insert(0.0) += black;
    }

    let transform = transformation_bonuses(&completed_sets(owned));
    for (bet_id, bonus) in transform.bet_multipliers {
        *map.entry(bet_id).or_insert(0.0) += bonus;
    }

    map
}

/// Interest-rate bonus from relics: direct rates plus interest synergy plus
/// the banker set. The base rate and deck modifier are added by the caller.
pub fn interest_bonus(owned: &[OwnedUpgrade]) -> f64 {
    let direct: f64 = owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::InterestRate { value } => *value,
            _ => 0.0,
        })
        .sum();
    direct
        + synergy_total(owned, INTEREST_SYNERGY_TAG)
        + transformation_bonuses(&completed_sets(owned)).interest
}

/// Live combo contribution: counter relics scale with the current streak.
pub fn combo_bonus(owned: &[OwnedUpgrade], streak: u32) -> f64 {
    owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::ComboCounter { value, .. } => value * streak as f64,
            _ => 0.0,
        })
        .sum()
}

/// Comeback bonus: extra multiplier on a hit that follows a miss.
pub fn comeback_multiplier(owned: &[OwnedUpgrade]) -> f64 {
    owned
        .iter()
        .flat_map(|upgrade| &upgrade.template.effects)
        .map(|effect| match effect {
            UpgradeEffect::ConditionalBonus {
                condition: BonusCondition::OnMiss,
                multiplier: Some(value),
                ..
            } => *value,
            _ => 0.0,
        })
        .sum()
}

/// Bank delta from conditional relics for one resolved draw. Rewards pay on
/// hits; penalties fire per each relic's declared condition.
pub fn conditional_bank_delta(owned: &[OwnedUpgrade], hit: bool) -> i64 {
    let mut delta = 0;
    for upgrade in owned {
        for effect in &upgrade.template.effects {
            if let UpgradeEffect::ConditionalBonus {
                condition,
                bank_reward,
                bank_penalty,
                ..
            } = effect
            {
                match condition {
                    BonusCondition::OnHit if hit => {
                        delta += bank_reward.unwrap_or(0);
                        delta -= bank_penalty.unwrap_or(0);
                    }
                    BonusCondition::OnMiss if !hit => {
                        delta -= bank_penalty.unwrap_or(0);
                    }
                    _ => {}
                }
            }
        }
    }
    delta
}

/// Rarity pressure input for the round-target formula.
pub fn rarity_score(owned: &[OwnedUpgrade]) -> i64 {
    owned
        .iter()
        .map(|upgrade| match upgrade.template.rarity {
            Rarity::Legendary => 6,
            Rarity::Rare => 3,
            Rarity::Uncommon => 1,
            Rarity::Common => 0,
        })
        .sum()
}
