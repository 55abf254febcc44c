use crate::{Card, GamePhase};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        target: i64,
        draws: i64,
        boss: Option<String>,
    },
    DrawResolved {
        card: Card,
        bet_id: String,
        hit: bool,
        score: i64,
        multiplier: f64,
        streak: u32,
    },
    TargetReached {
        score: i64,
        target: i64,
    },
    BankAdjusted {
        delta: i64,
        bank: i64,
    },
    DrawsConverted {
        draws: i64,
        points: i64,
    },
    RoundWon {
        score: i64,
        interest: i64,
        bank: i64,
    },
    RoundLost {
        score: i64,
        target: i64,
    },
    ShopEntered {
        round: u32,
        offers: usize,
    },
    UpgradePurchased {
        id: String,
        cost: i64,
        bank: i64,
    },
    PhaseChanged {
        phase: GamePhase,
    },
    BestRoundImproved {
        round: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
