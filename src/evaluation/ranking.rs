use crate::cards::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// A hand's category, with the ranks that define it.
///
/// Variants are declared weakest to strongest so the derived order is the
/// category priority; ties within a category fall through to the embedded
/// ranks and then to the Kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    ThreeOfAKind(Rank),    // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers, all of the flush suit
    FullHouse(Rank, Rank), // 0 kickers
    FourOfAKind(Rank),     // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::ThreeOfAKind(_) => 2,
            Ranking::TwoPair(_, _) | Ranking::FourOfAKind(_) => 1,
            _ => 0,
        }
    }

    /// ranks NOT consumed by the category itself, as a bitmask.
    /// kicker selection intersects this with the ranks actually held.
    pub fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::ThreeOfAKind(hi)
            | Ranking::FourOfAKind(hi) => !(u16::from(hi)),
            Ranking::Flush(..)
            | Ranking::FullHouse(..)
            | Ranking::Straight(..)
            | Ranking::StraightFlush(..) => unreachable!(),
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::ThreeOfAKind(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::FourOfAKind(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_outrank_in_order() {
        let ladder = [
            Ranking::HighCard(Rank::Ace),
            Ranking::OnePair(Rank::Two),
            Ranking::TwoPair(Rank::Three, Rank::Two),
            Ranking::ThreeOfAKind(Rank::Two),
            Ranking::Straight(Rank::Six),
            Ranking::Flush(Rank::Seven),
            Ranking::FullHouse(Rank::Two, Rank::Three),
            Ranking::FourOfAKind(Rank::Two),
            Ranking::StraightFlush(Rank::Six),
        ];
        for pair in ladder.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn full_house_beats_flush() {
        assert!(Ranking::FullHouse(Rank::Two, Rank::Three) > Ranking::Flush(Rank::Ace));
    }

    #[test]
    fn ranks_break_ties_within_category() {
        assert!(Ranking::TwoPair(Rank::Ace, Rank::King) > Ranking::TwoPair(Rank::Ace, Rank::Queen));
        assert!(Ranking::FullHouse(Rank::King, Rank::Ace) > Ranking::FullHouse(Rank::Queen, Rank::Ace));
        assert!(Ranking::Straight(Rank::Six) > Ranking::Straight(Rank::Five));
    }
}
