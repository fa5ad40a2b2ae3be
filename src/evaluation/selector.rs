use super::error::ShowdownError;
use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::cards::suit::Suit;

/// A precomputed view of the cards a hole shares with the board.
///
/// Built fresh for every evaluation and discarded after use. One pass over
/// the combined cards fills two frequency tables (per rank, per suit) and
/// two presence masks (which ranks, which ranks per suit); every category
/// finder reads these instead of rescanning the cards.
#[derive(Debug, Clone)]
pub struct Selector {
    cards: Vec<Card>,
    rank_counts: [u8; 13],
    suit_counts: [u8; 4],
    rank_bits: u16,
    suit_bits: [u16; 4],
}

impl Selector {
    /// Concatenates board then hole. A card appearing twice across the
    /// combined set is corrupt caller input and is rejected, never tolerated.
    pub fn new(board: &Board, hole: &Hole) -> Result<Self, ShowdownError> {
        let (a, b) = hole.cards();
        let mut cards = Vec::with_capacity(board.len() + 2);
        cards.extend_from_slice(board.cards());
        cards.push(a);
        cards.push(b);
        let mut seen = 0u64;
        for card in cards.iter().copied() {
            let bit = 1u64 << u8::from(card);
            if seen & bit != 0 {
                return Err(ShowdownError::CardOverlap(card));
            }
            seen |= bit;
        }
        Ok(Self::from_cards(cards))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn rank_counts(&self) -> &[u8; 13] {
        &self.rank_counts
    }
    pub fn suit_counts(&self) -> &[u8; 4] {
        &self.suit_counts
    }
    pub fn rank_bits(&self) -> u16 {
        self.rank_bits
    }
    pub fn suit_bits(&self, suit: Suit) -> u16 {
        self.suit_bits[u8::from(suit) as usize]
    }

    /// cards are distinct by the time we get here
    fn from_cards(cards: Vec<Card>) -> Self {
        let mut rank_counts = [0u8; 13];
        let mut suit_counts = [0u8; 4];
        let mut rank_bits = 0u16;
        let mut suit_bits = [0u16; 4];
        for card in cards.iter() {
            let rank = (u8::from(card.rank()) - 2) as usize;
            let suit = u8::from(card.suit()) as usize;
            rank_counts[rank] += 1;
            suit_counts[suit] += 1;
            rank_bits |= u16::from(card.rank());
            suit_bits[suit] |= u16::from(card.rank());
        }
        debug_assert!(rank_counts.iter().sum::<u8>() as usize == cards.len());
        debug_assert!(suit_counts.iter().sum::<u8>() as usize == cards.len());
        Self {
            cards,
            rank_counts,
            suit_counts,
            rank_bits,
            suit_bits,
        }
    }
}

/// seven distinct cards, as if a full river had been dealt
impl crate::Arbitrary for Selector {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let mut seen = 0u64;
        let mut cards = Vec::with_capacity(7);
        while cards.len() < 7 {
            let n = rng.random_range(0..52u8);
            let bit = 1u64 << n;
            if seen & bit == 0 {
                seen |= bit;
                cards.push(Card::from(n));
            }
        }
        Self::from_cards(cards)
    }
}
