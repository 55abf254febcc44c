use crate::{
    BetCategory, Card, DeckKind, DeckModifiers, GamePhase, OwnedUpgrade, RoundOutcome, ShopOffer,
};
use serde::{Deserialize, Serialize};

/// Persisted run shape. Every field is defaultable so partial or older
/// blobs hydrate; the storage mechanics live outside this crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavedRun {
    pub deck: Vec<Card>,
    pub bank: i64,
    pub round_number: u32,
    pub round_score: i64,
    pub round_target: Option<i64>,
    /// Missing value hydrates to the base allowance for the active
    /// deck and relics.
    pub draws_remaining: Option<i64>,
    pub round_outcome: Option<RoundOutcome>,
    pub game_phase: Option<GamePhase>,
    pub selected_bet_id: Option<String>,
    pub owned_upgrades: Vec<OwnedUpgrade>,
    pub target_achieved: bool,
    pub current_shop_choices: Vec<ShopOffer>,
    pub purchased_shop_ids: Vec<String>,
    pub active_deck_id: Option<String>,
    pub deck_kind: Option<DeckKind>,
    pub deck_modifiers: DeckModifiers,
    pub locked_bet_category: Option<BetCategory>,
    pub require_bet_change_after_hit: bool,
    pub combo_streak: u32,
    pub last_bet_hit: Option<bool>,
}
