use super::kicks::Kickers;
use super::ranking::Ranking;
use super::selector::Selector;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;

/// A-5-4-3-2, the one straight where the Ace plays low.
const WHEEL: u16 = 0b1000000001111;
const WHEEL_HIGH: Rank = Rank::Five;

/// Searches a Selector for the best category it holds.
///
/// Categories are probed from strongest to weakest and the first hit decides:
/// the probe order IS the category priority, so the finders below must never
/// run in any other order. High card terminates the chain infallibly, which
/// makes "no category matched" structurally impossible.
pub struct Evaluator<'a>(&'a Selector);

impl<'a> From<&'a Selector> for Evaluator<'a> {
    fn from(selector: &'a Selector) -> Self {
        Self(selector)
    }
}

impl Evaluator<'_> {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_four_oak())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_three_oak())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_one_pair())
            .unwrap_or_else(|| self.find_high_card())
    }

    pub fn find_kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::default(),
            n => match ranking {
                Ranking::Flush(hi) => match self.find_suit_of_flush() {
                    Some(suit) => self.take_highest(self.0.suit_bits(suit) & !u16::from(hi), n),
                    None => unreachable!("a Flush ranking implies a flushing suit"),
                },
                _ => self.take_highest(self.0.rank_bits() & ranking.mask(), n),
            },
        }
    }

    ///

    fn find_high_card(&self) -> Ranking {
        Ranking::HighCard(Rank::from(self.0.rank_bits()))
    }
    fn find_one_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_two_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_three_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::ThreeOfAKind)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_four_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::FourOfAKind)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.find_rank_of_straight(self.0.rank_bits())
            .map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush()
            .map(|suit| Ranking::Flush(Rank::from(self.0.suit_bits(suit))))
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            self.find_rank_of_straight(self.0.suit_bits(suit))
                .map(Ranking::StraightFlush)
        })
    }

    ///

    /// top rank of the highest run of five. the wheel only plays
    /// when no ordinary run exists, and it is always Five-high.
    fn find_rank_of_straight(&self, ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == WHEEL & ranks {
            Some(WHEEL_HIGH)
        } else {
            None
        }
    }
    /// at most one suit can flush in seven cards
    fn find_suit_of_flush(&self) -> Option<Suit> {
        self.0
            .suit_counts()
            .iter()
            .position(|&n| n >= 5)
            .map(|i| Suit::from(i as u8))
    }
    /// highest rank held at least n times, skipping one rank if asked.
    /// the skip searches ABOVE as well as below, so a pair ranked over
    /// the trips still completes a full house.
    fn find_rank_of_n_oak(&self, n: u8, skip: Option<Rank>) -> Option<Rank> {
        self.0
            .rank_counts()
            .iter()
            .enumerate()
            .rev()
            .map(|(i, &count)| (Rank::from(i as u8 + 2), count))
            .filter(|&(rank, _)| Some(rank) != skip)
            .find(|&(_, count)| count >= n)
            .map(|(rank, _)| rank)
    }
    fn take_highest(&self, pool: u16, n: usize) -> Kickers {
        Kickers::from(
            (0u8..13)
                .rev()
                .map(|i| 1u16 << i)
                .filter(|&bit| pool & bit != 0)
                .take(n)
                .map(Rank::from)
                .collect::<Vec<Rank>>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::board::Board;
    use crate::cards::hole::Hole;

    fn eval(board: &str, hole: &str) -> (Ranking, Kickers) {
        let selector = Selector::new(&Board::from(board), &Hole::from(hole)).unwrap();
        let evaluator = Evaluator::from(&selector);
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        (ranking, kickers)
    }

    #[test]
    fn high_card() {
        let (ranking, kickers) = eval("2c 7d 9s Jh 3d", "Ah Kd");
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Jack, Rank::Nine, Rank::Seven])
        );
    }

    #[test]
    fn one_pair() {
        let (ranking, kickers) = eval("As 7d 9s Jh 3d", "Ah Kd");
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn two_pair() {
        let (ranking, kickers) = eval("As 7d 9s Jh 3d", "Ah Jd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::Jack));
        assert_eq!(kickers, Kickers::from(vec![Rank::Nine]));
    }

    #[test]
    fn three_pair_keeps_two_highest() {
        let (ranking, kickers) = eval("As Kh 9d 9s 3d", "Ah Kd");
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Nine]));
    }

    #[test]
    fn three_oak() {
        let (ranking, kickers) = eval("As 7d 9s Jh 3d", "Ah Ad");
        assert_eq!(ranking, Ranking::ThreeOfAKind(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::Jack, Rank::Nine]));
    }

    #[test]
    fn straight_over_pair() {
        let (ranking, kickers) = eval("5c 6d 7s 8h 2c", "9c 2d");
        assert_eq!(ranking, Ranking::Straight(Rank::Nine));
        assert!(kickers.is_empty());
    }

    #[test]
    fn wheel_straight() {
        let (ranking, _) = eval("Ac 2d 3s 4h 9c", "5s Kd");
        assert_eq!(ranking, Ranking::Straight(Rank::Five));
    }

    #[test]
    fn six_card_run_takes_the_top() {
        let (ranking, _) = eval("As 2s 3h 4d 5c", "6s 9d");
        assert_eq!(ranking, Ranking::Straight(Rank::Six));
    }

    #[test]
    fn flush() {
        let (ranking, kickers) = eval("4h 8h Qh 2h 7s", "Ah 9c");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::Queen, Rank::Eight, Rank::Four, Rank::Two])
        );
    }

    #[test]
    fn flush_over_straight() {
        let (ranking, kickers) = eval("4h 6h 7h 8h Ts", "9h 5c");
        assert_eq!(ranking, Ranking::Flush(Rank::Nine));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::Eight, Rank::Seven, Rank::Six, Rank::Four])
        );
    }

    #[test]
    fn flush_kickers_stay_in_suit() {
        let (ranking, kickers) = eval("2h 4h 8h Qh Ks", "Ah 9c");
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::Queen, Rank::Eight, Rank::Four, Rank::Two])
        );
    }

    #[test]
    fn full_house() {
        let (ranking, kickers) = eval("2s 2h 3c 3s 9d", "2d Kc");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert!(kickers.is_empty());
    }

    #[test]
    fn full_house_from_two_trips() {
        let (ranking, _) = eval("As Ah Kd Kc 2s", "Ad Ks");
        assert_eq!(ranking, Ranking::FullHouse(Rank::Ace, Rank::King));
    }

    #[test]
    fn full_house_pair_above_trips() {
        let (ranking, _) = eval("As Ah Kd Kc Ks", "2d 3c");
        assert_eq!(ranking, Ranking::FullHouse(Rank::King, Rank::Ace));
    }

    #[test]
    fn four_oak_over_full_house() {
        let (ranking, kickers) = eval("As Ah Ad Ac Ks", "Kh Qd");
        assert_eq!(ranking, Ranking::FourOfAKind(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let (ranking, kickers) = eval("Ts Js Qs Ks 2d", "As 9h");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Ace));
        assert!(kickers.is_empty());
    }

    #[test]
    fn wheel_straight_flush_over_pair() {
        let (ranking, _) = eval("Ah 2h 3h 4h 9s", "5h 9d");
        assert_eq!(ranking, Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn flush_without_run_is_no_straight_flush() {
        let (ranking, _) = eval("2h 4h 6h 8h Ts", "Th 9c");
        assert_eq!(ranking, Ranking::Flush(Rank::Ten));
    }

    #[test]
    fn quads_kicker_is_best_remaining() {
        let (ranking, kickers) = eval("2s 2h 2d 2c 7s", "9h Qd");
        assert_eq!(ranking, Ranking::FourOfAKind(Rank::Two));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }
}
