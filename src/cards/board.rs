use super::card::Card;
use serde::Deserialize;
use serde::Serialize;

/// Community cards in reveal order, up to the five of a full river.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board(Vec<Card>);

impl Board {
    pub const RIVER: usize = 5;

    pub fn empty() -> Self {
        Self(Vec::with_capacity(Self::RIVER))
    }
    pub fn push(&mut self, card: Card) {
        assert!(self.0.len() < Self::RIVER);
        self.0.push(card);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        assert!(cards.len() <= Self::RIVER);
        Self(cards)
    }
}

/// str isomorphism, "5c 6d 7s 8h 9c"
impl From<&str> for Board {
    fn from(s: &str) -> Self {
        Self::from(s.split_whitespace().map(Card::from).collect::<Vec<Card>>())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.0.iter() {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}
