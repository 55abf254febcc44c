use crate::Rarity;
use serde::{Deserialize, Serialize};

/// Round-target formula constants:
/// `max(floor, floor((base * growth^(r-1) + momentum*(r-1)) * pressure))`
/// where `pressure = 1 + rarity_pressure_step * rarityScore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRule {
    pub base: f64,
    pub growth: f64,
    pub momentum_per_round: f64,
    pub rarity_pressure_step: f64,
    pub floor: i64,
}

impl TargetRule {
    pub fn target_for(&self, round: u32, rarity_score: i64, boss_multiplier: Option<f64>) -> i64 {
        let completed = round.saturating_sub(1) as f64;
        let exponential = self.base * self.growth.powf(completed);
        let momentum = completed * self.momentum_per_round;
        let pressure = 1.0 + rarity_score as f64 * self.rarity_pressure_step;
        let mut target = ((exponential + momentum) * pressure).floor() as i64;
        target = target.max(self.floor);
        if let Some(mult) = boss_multiplier {
            target = (target as f64 * mult).floor() as i64;
        }
        target
    }
}

/// Per-rarity shop weight, scaled by round number. Growing rarities use
/// `base + per_round * (r-1)`, shrinking ones `max(floor, base - per_round
/// * (r-1))`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RarityWeightRule {
    pub base: f64,
    pub per_round: f64,
    pub floor: f64,
}

impl RarityWeightRule {
    pub fn weight_at(&self, round: u32) -> f64 {
        let factor = round.saturating_sub(1) as f64;
        (self.base + self.per_round * factor).max(self.floor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopRule {
    pub base_slots: u32,
    pub max_slots: u32,
    pub slot_growth_every: u32,
    /// Templates at or under this cost qualify for the guaranteed slot.
    pub cheap_cost_cap: i64,
    pub common: RarityWeightRule,
    pub uncommon: RarityWeightRule,
    pub rare: RarityWeightRule,
    pub legendary: RarityWeightRule,
}

impl ShopRule {
    pub fn slot_count(&self, round: u32) -> usize {
        let growth = round.saturating_sub(1) / self.slot_growth_every.max(1);
        (self.base_slots + growth).min(self.max_slots) as usize
    }

    pub fn rarity_weight(&self, rarity: Rarity, round: u32) -> f64 {
        match rarity {
            Rarity::Common => self.common.weight_at(round),
            Rarity::Uncommon => self.uncommon.weight_at(round),
            Rarity::Rare => self.rare.weight_at(round),
            Rarity::Legendary => self.legendary.weight_at(round),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    /// Draw allowance per round before deck and relic bonuses.
    pub base_draws: i64,
    /// Interest rate applied to the post-round bank before bonuses.
    pub base_interest: f64,
    /// Guaranteed points per unused draw when cashing out early.
    pub guaranteed_draw_value: i64,
    pub target: TargetRule,
    pub shop: ShopRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_draws: 5,
            base_interest: 0.05,
            guaranteed_draw_value: 12,
            target: TargetRule {
                base: 30.0,
                growth: 1.55,
                momentum_per_round: 6.0,
                rarity_pressure_step: 0.03,
                floor: 25,
            },
            shop: ShopRule {
                base_slots: 6,
                max_slots: 8,
                slot_growth_every: 3,
                cheap_cost_cap: 120,
                common: RarityWeightRule {
                    base: 46.0,
                    per_round: -3.5,
                    floor: 12.0,
                },
                uncommon: RarityWeightRule {
                    base: 28.0,
                    per_round: -1.2,
                    floor: 18.0,
                },
                rare: RarityWeightRule {
                    base: 18.0,
                    per_round: 1.5,
                    floor: 0.0,
                },
                legendary: RarityWeightRule {
                    base: 8.0,
                    per_round: 2.5,
                    floor: 0.0,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_one_target_is_thirty() {
        let config = GameConfig::default();
        assert_eq!(config.target.target_for(1, 0, None), 30);
    }

    #[test]
    fn target_growth_and_floor() {
        let config = GameConfig::default();
        let r2 = config.target.target_for(2, 0, None);
        // floor(30 * 1.55 + 6) = 52
        assert_eq!(r2, 52);
        assert!(config.target.target_for(3, 0, None) > r2);
        let floored = TargetRule {
            base: 1.0,
            growth: 1.0,
            momentum_per_round: 0.0,
            rarity_pressure_step: 0.0,
            floor: 25,
        };
        assert_eq!(floored.target_for(1, 0, None), 25);
    }

    #[test]
    fn rarity_pressure_raises_targets() {
        let config = GameConfig::default();
        assert!(config.target.target_for(4, 12, None) > config.target.target_for(4, 0, None));
    }

    #[test]
    fn boss_multiplier_scales_target() {
        let config = GameConfig::default();
        let plain = config.target.target_for(5, 0, None);
        let boss = config.target.target_for(5, 0, Some(1.3));
        assert_eq!(boss, (plain as f64 * 1.3).floor() as i64);
    }

    #[test]
    fn shop_slots_grow_every_three_rounds_capped_at_eight() {
        let shop = GameConfig::default().shop;
        assert_eq!(shop.slot_count(1), 6);
        assert_eq!(shop.slot_count(3), 6);
        assert_eq!(shop.slot_count(4), 7);
        assert_eq!(shop.slot_count(7), 8);
        assert_eq!(shop.slot_count(30), 8);
    }

    #[test]
    fn rarity_weights_shift_with_rounds() {
        let shop = GameConfig::default().shop;
        assert!(shop.rarity_weight(Rarity::Common, 10) < shop.rarity_weight(Rarity::Common, 1));
        assert!(
            shop.rarity_weight(Rarity::Legendary, 10) > shop.rarity_weight(Rarity::Legendary, 1)
        );
        // Shrinking weights respect their floors.
        assert_eq!(shop.rarity_weight(Rarity::Common, 50), 12.0);
        assert_eq!(shop.rarity_weight(Rarity::Uncommon, 50), 18.0);
    }
}
