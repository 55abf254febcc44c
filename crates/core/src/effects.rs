use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BonusCondition {
    OnHit,
    OnMiss,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ComboDecay {
    OnMiss,
    PerRound,
}

/// One relic may carry several of these. Folding over owned relics is the
/// only way derived bonuses are ever computed; nothing is cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UpgradeEffect {
    ExtraDraws {
        value: i64,
    },
    #[serde(rename_all = "camelCase")]
    BetMultiplier {
        bet_id: String,
        value: f64,
    },
    FlatBonus {
        value: i64,
    },
    InterestRate {
        value: f64,
    },
    /// Contributes `value` per owned relic carrying `tag`, the carrier
    /// itself included.
    SynergyMultiplier {
        tag: String,
        value: f64,
    },
    /// Set membership; completion is a count threshold, the piece number is
    /// display-only.
    Transformation {
        set: String,
        piece: u8,
    },
    #[serde(rename_all = "camelCase")]
    ConditionalBonus {
        condition: BonusCondition,
        #[serde(default)]
        multiplier: Option<f64>,
        #[serde(default)]
        flat_bonus: Option<i64>,
        #[serde(default)]
        bank_reward: Option<i64>,
        #[serde(default)]
        bank_penalty: Option<i64>,
    },
    ComboCounter {
        value: f64,
        decay: ComboDecay,
    },
    GlobalMultiplier {
        value: f64,
    },
}

/// Shop template. Static catalog data; never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpgradeDef {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub cost: i64,
    pub icon: String,
    pub effects: Vec<UpgradeEffect>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A purchased relic: the template it came from plus the unique shop offer
/// id it was bought under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedUpgrade {
    pub offer_id: String,
    pub purchased_at_round: u32,
    #[serde(flatten)]
    pub template: UpgradeDef,
}

impl OwnedUpgrade {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.template.tags.iter().any(|candidate| candidate == tag)
    }
}
