use crate::{Card, JokerColor, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};

/// Pure deck-construction recipe. Each variant rebuilds the same multiset of
/// cards on every call; presets share no mutable state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeckKind {
    Standard,
    HighRoller,
    ProbabilityBender,
    Minimalist,
    Chaos,
}

impl DeckKind {
    pub fn build(self) -> Vec<Card> {
        match self {
            DeckKind::Standard => build_standard(),
            DeckKind::HighRoller => build_high_roller(),
            DeckKind::ProbabilityBender => build_probability_bender(),
            DeckKind::Minimalist => build_minimalist(),
            DeckKind::Chaos => build_chaos(),
        }
    }
}

fn build_standard() -> Vec<Card> {
    let mut deck = Vec::with_capacity(54);
    for suit in Suit::STANDARD {
        for rank in Rank::STANDARD {
            deck.push(Card::standard(suit, rank));
        }
    }
    deck.push(Card::joker(JokerColor::Red, "joker-red"));
    deck.push(Card::joker(JokerColor::Black, "joker-black"));
    deck
}

fn build_high_roller() -> Vec<Card> {
    let premium = [
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
    let mut deck = Vec::with_capacity(43);
    for suit in Suit::STANDARD {
        for rank in premium {
            deck.push(Card::standard(suit, rank));
        }
    }
    let mut variant = 0;
    for suit in [Suit::Spades, Suit::Hearts] {
        for rank in [Rank::Jack, Rank::Queen, Rank::King, Rank::Ace] {
            deck.push(Card::standard_variant(suit, rank, variant));
            variant += 1;
        }
    }
    deck.push(Card::joker(JokerColor::Red, "joker-red-high"));
    deck.push(Card::joker(JokerColor::Black, "joker-black-high"));
    deck.push(Card::joker(JokerColor::Black, "joker-black-high-2"));
    deck
}

fn build_probability_bender() -> Vec<Card> {
    let mut deck = build_standard();
    let mut variant = 0;
    for suit in [Suit::Hearts, Suit::Diamonds] {
        for rank in [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six] {
            deck.push(Card::standard_variant(suit, rank, variant));
            variant += 1;
        }
    }
    for suit in [Suit::Spades, Suit::Clubs] {
        for rank in [Rank::Nine, Rank::Ten, Rank::Jack] {
            deck.push(Card::standard_variant(suit, rank, variant));
            variant += 1;
        }
    }
    deck.push(Card::joker(JokerColor::Red, "joker-red-pb"));
    deck.push(Card::joker(JokerColor::Red, "joker-red-pb-2"));
    deck.push(Card::joker(JokerColor::Black, "joker-black-pb"));
    deck
}

fn build_minimalist() -> Vec<Card> {
    let premium = [
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];
    let mut deck = Vec::with_capacity(26);
    for suit in Suit::STANDARD {
        for rank in premium {
            deck.push(Card::standard(suit, rank));
        }
    }
    deck.push(Card::joker(JokerColor::Red, "joker-red-mini"));
    deck.push(Card::joker(JokerColor::Black, "joker-black-mini"));
    deck
}

fn build_chaos() -> Vec<Card> {
    let mut deck = Vec::with_capacity(110);
    for suit in Suit::STANDARD {
        for rank in Rank::STANDARD {
            deck.push(Card::standard(suit, rank));
            deck.push(Card::standard_variant(suit, rank, 1));
        }
    }
    for i in 0..6 {
        let color = if i % 2 == 0 {
            JokerColor::Red
        } else {
            JokerColor::Black
        };
        deck.push(Card::joker(color, format!("joker-chaos-{i}")));
    }
    deck
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub kind: DeckKind,
    pub draw: Vec<Card>,
}

impl Deck {
    /// Build and shuffle a fresh draw pile for the given recipe.
    pub fn fresh(kind: DeckKind, rng: &mut RngState) -> Self {
        let mut draw = kind.build();
        rng.shuffle(&mut draw);
        Self { kind, draw }
    }

    /// Pop the next card. Discards are not tracked; an exhausted pile is
    /// refilled by reshuffling a freshly built deck for the active recipe.
    pub fn draw_one(&mut self, rng: &mut RngState) -> Card {
        loop {
            if let Some(card) = self.draw.pop() {
                return card;
            }
            self.draw = self.kind.build();
            rng.shuffle(&mut self.draw);
        }
    }

    pub fn remaining(&self) -> usize {
        self.draw.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn composition(cards: &[Card]) -> BTreeMap<(String, String), usize> {
        let mut map = BTreeMap::new();
        for card in cards {
            *map.entry((card.rank.label().to_string(), card.suit.symbol().to_string()))
                .or_insert(0) += 1;
        }
        map
    }

    #[test]
    fn deck_sizes_match_presets() {
        assert_eq!(DeckKind::Standard.build().len(), 54);
        assert_eq!(DeckKind::HighRoller.build().len(), 43);
        assert_eq!(DeckKind::ProbabilityBender.build().len(), 73);
        assert_eq!(DeckKind::Minimalist.build().len(), 26);
        assert_eq!(DeckKind::Chaos.build().len(), 110);
    }

    #[test]
    fn builders_are_reproducible() {
        for kind in [
            DeckKind::Standard,
            DeckKind::HighRoller,
            DeckKind::ProbabilityBender,
            DeckKind::Minimalist,
            DeckKind::Chaos,
        ] {
            assert_eq!(composition(&kind.build()), composition(&kind.build()));
        }
    }

    #[test]
    fn card_ids_unique_within_deck() {
        for kind in [
            DeckKind::Standard,
            DeckKind::HighRoller,
            DeckKind::ProbabilityBender,
            DeckKind::Minimalist,
            DeckKind::Chaos,
        ] {
            let deck = kind.build();
            let mut ids: Vec<&str> = deck.iter().map(|card| card.id.as_str()).collect();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(before, ids.len(), "duplicate ids in {kind:?}");
        }
    }

    #[test]
    fn shuffle_preserves_multiset() {
        let mut rng = RngState::from_seed(3);
        let built = DeckKind::Standard.build();
        let deck = Deck::fresh(DeckKind::Standard, &mut rng);
        assert_eq!(composition(&built), composition(&deck.draw));
    }

    #[test]
    fn exhausted_pile_refills_from_recipe() {
        let mut rng = RngState::from_seed(5);
        let mut deck = Deck::fresh(DeckKind::Minimalist, &mut rng);
        for _ in 0..26 {
            deck.draw_one(&mut rng);
        }
        assert_eq!(deck.remaining(), 0);
        deck.draw_one(&mut rng);
        assert_eq!(deck.remaining(), 25);
    }

    #[test]
    fn standard_deck_has_one_joker_per_color() {
        let deck = DeckKind::Standard.build();
        let reds = deck
            .iter()
            .filter(|card| card.joker_color == Some(JokerColor::Red))
            .count();
        let blacks = deck
            .iter()
            .filter(|card| card.joker_color == Some(JokerColor::Black))
            .count();
        assert_eq!((reds, blacks), (1, 1));
    }
}
