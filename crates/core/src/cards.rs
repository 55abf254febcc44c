use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    Joker,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    pub fn is_black(self) -> bool {
        matches!(self, Suit::Spades | Suit::Clubs)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Diamonds => "D",
            Suit::Clubs => "C",
            Suit::Joker => "J",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    pub const STANDARD: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    pub fn is_number(self) -> bool {
        !matches!(self, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King | Rank::Joker)
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Joker => "Joker",
        }
    }
}

/// Ordinal value used for value bets and draw base score. Aces rank above
/// face cards here; this is a scoring order, not a trick-taking order.
pub fn rank_value(rank: Rank) -> i64 {
    match rank {
        Rank::Two => 2,
        Rank::Three => 3,
        Rank::Four => 4,
        Rank::Five => 5,
        Rank::Six => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine => 9,
        Rank::Ten => 10,
        Rank::Ace => 11,
        Rank::Jack => 12,
        Rank::Queen => 13,
        Rank::King => 14,
        Rank::Joker => 0,
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JokerColor {
    Red,
    Black,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Unique within one deck instance; duplicate cards carry a variant
    /// suffix so removal-by-identity stays unambiguous.
    pub id: String,
    #[serde(default)]
    pub joker_color: Option<JokerColor>,
}

impl Card {
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            id: format!("{}{}", rank.label(), suit.symbol()),
            joker_color: None,
        }
    }

    pub fn standard_variant(suit: Suit, rank: Rank, variant: u32) -> Self {
        Self {
            suit,
            rank,
            id: format!("{}{}-{}", rank.label(), suit.symbol(), variant),
            joker_color: None,
        }
    }

    pub fn joker(color: JokerColor, id: impl Into<String>) -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank::Joker,
            id: id.into(),
            joker_color: Some(color),
        }
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker && self.rank == Rank::Joker
    }
}
