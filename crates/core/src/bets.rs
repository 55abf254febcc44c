use crate::{rank_value, Card, Rank, Suit};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BetCategory {
    Color,
    Suit,
    RankType,
    Value,
    Special,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Low,
    Medium,
    High,
    Extreme,
}

/// Boolean predicate over a drawn card. Every variant is total over the full
/// card space, jokers included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BetKind {
    RedCard,
    BlackCard,
    #[serde(rename_all = "camelCase")]
    ExactSuit {
        suit: Suit,
    },
    FaceCard,
    NumberCard,
    /// Rank value 9 or above; jokers count as high.
    HighValue,
    /// Rank value 2 through 6; jokers never count as low.
    LowValue,
    ExactAce,
    AnyJoker,
}

impl BetKind {
    pub fn matches(self, card: &Card) -> bool {
        match self {
            BetKind::RedCard => card.suit.is_red(),
            BetKind::BlackCard => card.suit.is_black(),
            BetKind::ExactSuit { suit } => card.suit == suit,
            BetKind::FaceCard => card.rank.is_face(),
            BetKind::NumberCard => card.rank.is_number(),
            BetKind::HighValue => card.is_joker() || rank_value(card.rank) >= 9,
            BetKind::LowValue => {
                if card.is_joker() {
                    return false;
                }
                let value = rank_value(card.rank);
                (2..=6).contains(&value)
            }
            BetKind::ExactAce => card.rank == Rank::Ace,
            BetKind::AnyJoker => card.rank == Rank::Joker,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetDef {
    pub id: String,
    pub category: BetCategory,
    pub label: String,
    pub description: String,
    pub base_multiplier: f64,
    pub risk: Risk,
    #[serde(flatten)]
    pub kind: BetKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JokerColor;

    fn joker() -> Card {
        Card::joker(JokerColor::Red, "joker-red")
    }

    #[test]
    fn color_bets_split_the_standard_suits() {
        for suit in Suit::STANDARD {
            let card = Card::standard(suit, Rank::Five);
            assert_ne!(
                BetKind::RedCard.matches(&card),
                BetKind::BlackCard.matches(&card)
            );
        }
    }

    #[test]
    fn joker_is_high_but_never_low() {
        assert!(BetKind::HighValue.matches(&joker()));
        assert!(!BetKind::LowValue.matches(&joker()));
        assert!(BetKind::AnyJoker.matches(&joker()));
        assert!(!BetKind::FaceCard.matches(&joker()));
        assert!(!BetKind::NumberCard.matches(&joker()));
    }

    #[test]
    fn value_band_edges() {
        assert!(BetKind::HighValue.matches(&Card::standard(Suit::Clubs, Rank::Nine)));
        assert!(!BetKind::HighValue.matches(&Card::standard(Suit::Clubs, Rank::Eight)));
        assert!(BetKind::LowValue.matches(&Card::standard(Suit::Clubs, Rank::Six)));
        assert!(!BetKind::LowValue.matches(&Card::standard(Suit::Clubs, Rank::Seven)));
        // Ace scores 11: high, not low, despite its label.
        assert!(BetKind::HighValue.matches(&Card::standard(Suit::Clubs, Rank::Ace)));
        assert!(!BetKind::LowValue.matches(&Card::standard(Suit::Clubs, Rank::Ace)));
    }

    #[test]
    fn exact_suit_ignores_jokers() {
        let bet = BetKind::ExactSuit { suit: Suit::Hearts };
        assert!(bet.matches(&Card::standard(Suit::Hearts, Rank::Two)));
        assert!(!bet.matches(&joker()));
    }
}
