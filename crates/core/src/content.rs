use crate::{boss_index_for_round, BetDef, BossDef, BossEffect, DeckKind, UpgradeDef};
use serde::{Deserialize, Serialize};

/// Starting-condition tweaks carried by a deck preset. All default to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckModifiers {
    pub extra_draws: i64,
    pub flat_bonus: i64,
    pub interest_bonus: f64,
    pub starting_bank: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeckRequirement {
    pub best_round: u32,
    pub label: String,
}

/// Immutable deck template; `kind` names the pure construction recipe.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub modifiers: DeckModifiers,
    pub kind: DeckKind,
    #[serde(default)]
    pub requirement: Option<DeckRequirement>,
}

/// Static game content: the wager catalog, the boss table, the relic
/// templates and the deck presets. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub bets: Vec<BetDef>,
    pub bosses: Vec<BossDef>,
    pub upgrades: Vec<UpgradeDef>,
    pub decks: Vec<DeckPreset>,
}

impl Content {
    pub fn bet_by_id(&self, id: &str) -> Option<&BetDef> {
        self.bets.iter().find(|bet| bet.id == id)
    }

    pub fn upgrade_by_id(&self, id: &str) -> Option<&UpgradeDef> {
        self.upgrades.iter().find(|upgrade| upgrade.id == id)
    }

    pub fn deck_by_id(&self, id: &str) -> Option<&DeckPreset> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    /// Boss modifier for the round, selected cyclically on boss rounds.
    pub fn boss_for_round(&self, round: u32) -> Option<&BossDef> {
        boss_index_for_round(round, self.bosses.len()).map(|idx| &self.bosses[idx])
    }

    /// The wager catalog for a round, with boss-disabled bets filtered out.
    pub fn available_bets(&self, round: u32) -> Vec<&BetDef> {
        let disabled: &[String] = match self.boss_for_round(round).and_then(|boss| boss.effect.as_ref()) {
            Some(BossEffect::DisableBets { bet_ids }) => bet_ids,
            _ => &[],
        };
        self.bets
            .iter()
            .filter(|bet| !disabled.contains(&bet.id))
            .collect()
    }

    pub fn bet_disabled(&self, round: u32, bet_id: &str) -> bool {
        matches!(
            self.boss_for_round(round).and_then(|boss| boss.effect.as_ref()),
            Some(BossEffect::DisableBets { bet_ids }) if bet_ids.iter().any(|id| id == bet_id)
        )
    }
}
