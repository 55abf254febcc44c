//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod bets;
pub mod bosses;
pub mod cards;
pub mod config;
pub mod content;
pub mod deck;
pub mod effects;
pub mod events;
pub mod profile;
pub mod rng;
pub mod run;
pub mod save;
pub mod scoring;
pub mod shop;
pub mod state;
pub mod upgrades;

pub use bets::*;
pub use bosses::*;
pub use cards::*;
pub use config::*;
pub use content::*;
pub use deck::*;
pub use effects::*;
pub use events::*;
pub use profile::*;
pub use rng::*;
pub use run::*;
pub use save::*;
pub use scoring::*;
pub use shop::*;
pub use state::*;
pub use upgrades::*;
