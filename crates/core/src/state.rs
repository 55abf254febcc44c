use crate::BetCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum GamePhase {
    Menu,
    Gameplay,
    ShopTransition,
    Shop,
    GameOver,
}

impl Default for GamePhase {
    fn default() -> Self {
        GamePhase::Menu
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RoundOutcome {
    Active,
    Won,
    Lost,
}

impl Default for RoundOutcome {
    fn default() -> Self {
        RoundOutcome::Active
    }
}

/// A phase the run will move to once the presentation layer has lingered
/// for `delay_ms`. The engine transitions instantly when asked; the delay
/// is a pacing hint only, and pending entries are dropped on reset so a
/// stale timer can never fire into the wrong phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingPhase {
    pub phase: GamePhase,
    pub delay_ms: u32,
}

/// Mutable per-run state. Created at run start, mutated by the round engine
/// on every draw, reset on new run or next round.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    pub round_number: u32,
    pub round_score: i64,
    pub round_target: i64,
    pub draws_remaining: i64,
    pub outcome: RoundOutcome,
    pub bank: i64,
    pub selected_bet_id: Option<String>,
    pub combo_streak: u32,
    pub last_bet_hit: Option<bool>,
    pub locked_bet_category: Option<BetCategory>,
    pub require_bet_change_after_hit: bool,
    /// Sticky within a round once the cumulative score reaches the target.
    pub target_achieved: bool,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            round_number: 1,
            round_score: 0,
            round_target: 0,
            draws_remaining: 0,
            outcome: RoundOutcome::Active,
            bank: 0,
            selected_bet_id: None,
            combo_streak: 0,
            last_bet_hit: None,
            locked_bet_category: None,
            require_bet_change_after_hit: false,
            target_achieved: false,
            phase: GamePhase::Menu,
        }
    }
}

impl GameState {
    pub fn clear_category_lock(&mut self) {
        self.locked_bet_category = None;
        self.require_bet_change_after_hit = false;
    }
}
