//! Card domain types for Literature.
//!
//! A Literature deck is a standard 52-card deck with all four 8s removed.
//! Each suit therefore splits into two six-rank sets: the lower set (2-7)
//! and the higher set (9-A). Rank 8 is unrepresentable by construction.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::LitError;

/// One of the four card suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts (H).
    Hearts,
    /// Diamonds (D).
    Diamonds,
    /// Clubs (C).
    Clubs,
    /// Spades (S).
    Spades,
}

impl Suit {
    /// All four suits, in display order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The single-character wire code for this suit.
    pub fn code(&self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    /// Parse a suit from its single-character wire code.
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A playable card rank. There is no `Eight` variant: 8s are out of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 9
    Nine,
    /// 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// All twelve playable ranks, lower set first.
    pub const ALL: [Rank; 12] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The wire code for this rank (`"2"` .. `"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    pub fn code(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a rank from its wire code. `"8"` is rejected: no set contains it.
    pub fn from_code(s: &str) -> Option<Self> {
        Rank::ALL.iter().copied().find(|r| r.code() == s)
    }

    /// Which six-rank range this rank belongs to.
    ///
    /// Every playable rank is in exactly one range.
    pub fn range(&self) -> RankRange {
        match self {
            Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six | Rank::Seven => {
                RankRange::Lower
            }
            _ => RankRange::Higher,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the two six-rank sets per suit: lower (2-7) or higher (9-A).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RankRange {
    /// Ranks 2 through 7.
    Lower,
    /// Ranks 9 through Ace.
    Higher,
}

impl RankRange {
    /// Both ranges, lower first.
    pub const ALL: [RankRange; 2] = [RankRange::Lower, RankRange::Higher];

    /// The order offset into [`Rank::ALL`] (0 for lower, 6 for higher).
    pub fn offset(&self) -> usize {
        match self {
            RankRange::Lower => 0,
            RankRange::Higher => 6,
        }
    }

    /// The six canonical ranks of this range, in enumeration order.
    pub fn ranks(&self) -> [Rank; 6] {
        let o = self.offset();
        [
            Rank::ALL[o],
            Rank::ALL[o + 1],
            Rank::ALL[o + 2],
            Rank::ALL[o + 3],
            Rank::ALL[o + 4],
            Rank::ALL[o + 5],
        ]
    }
}

/// A single playing card, identified by rank and suit.
///
/// The wire form is the rank code followed by the suit code (`"7H"`, `"10S"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The card's rank.
    pub rank: Rank,
    /// The card's suit.
    pub suit: Suit,
}

impl Card {
    /// Create a card from rank and suit.
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = LitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit_char = chars
            .next_back()
            .ok_or_else(|| LitError::InvalidCard(s.to_string()))?;
        let suit = Suit::from_code(suit_char).ok_or_else(|| LitError::InvalidCard(s.to_string()))?;
        let rank = Rank::from_code(chars.as_str()).ok_or_else(|| LitError::InvalidCard(s.to_string()))?;
        Ok(Card { rank, suit })
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
