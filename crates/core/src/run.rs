use crate::{
    BetCategory, Content, Deck, DeckModifiers, GameConfig, GamePhase, GameState, OwnedUpgrade,
    PendingPhase, RngState, ShopState,
};
use thiserror::Error;

mod draw;
mod round;
mod shop;
mod state;

pub use draw::DrawResolution;

/// Pacing hints for the presentation layer, in milliseconds. The engine
/// itself transitions instantly; see [`PendingPhase`].
pub const SHOP_TRANSITION_DELAY_MS: u32 = 1100;
pub const GAME_OVER_DELAY_MS: u32 = 600;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(GamePhase),
    #[error("round is not active")]
    RoundNotActive,
    #[error("no bet selected")]
    NoBetSelected,
    #[error("unknown bet {0}")]
    UnknownBet(String),
    #[error("bet {0} is disabled this round")]
    BetDisabled(String),
    #[error("pick a different bet category after a hit")]
    BetCategoryLocked(BetCategory),
    #[error("no draws left")]
    NoDrawsLeft,
    #[error("round target not reached")]
    TargetNotReached,
    #[error("no unused draws to convert")]
    NothingToConvert,
    #[error("shop not available")]
    ShopNotAvailable,
    #[error("unknown shop offer {0}")]
    UnknownOffer(String),
    #[error("not enough bank: cost {cost}, bank {bank}")]
    NotEnoughBank { cost: i64, bank: i64 },
    #[error("unknown deck {0}")]
    UnknownDeck(String),
    #[error("deck {0} is locked")]
    DeckLocked(String),
}

/// A full run: static rules and content, the RNG stream, the live deck,
/// owned relics and the per-round state.
#[derive(Debug)]
pub struct RunState {
    pub config: GameConfig,
    pub content: Content,
    pub rng: RngState,
    pub deck: Deck,
    pub active_deck_id: String,
    pub deck_modifiers: DeckModifiers,
    pub owned: Vec<OwnedUpgrade>,
    pub state: GameState,
    pub shop: Option<ShopState>,
    pub purchased_shop_ids: Vec<String>,
    pub pending: Option<PendingPhase>,
}
