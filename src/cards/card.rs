/// A card in the standard 52-card deck.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a deck sorted by rank then suit
/// Ts
/// 35
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (u8::from(c.rank) - 2) * 4 + u8::from(c.suit)
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4 + 2),
            suit: Suit::from(n % 4),
        }
    }
}

/// str isomorphism, rank then suit: "As", "Td", "7c"
impl From<&str> for Card {
    fn from(s: &str) -> Self {
        let (rank, suit) = s.split_at(1);
        Self {
            rank: Rank::from(rank),
            suit: Suit::from(suit),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl crate::Arbitrary for Card {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..52u8))
    }
}


use super::rank::Rank;
use super::suit::Suit;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
