use super::card::Card;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

/// A player's two private hole cards.
///
/// The two cards must be distinct; handing out the same card twice is a
/// dealing bug upstream of this crate, not a recoverable input.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> (Card, Card) {
        (self.0, self.1)
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b);
        Self(a, b)
    }
}

/// str isomorphism, "As Kh"
impl From<&str> for Hole {
    fn from(s: &str) -> Self {
        let (a, b) = s
            .split_whitespace()
            .map(Card::from)
            .collect_tuple()
            .expect("exactly two cards");
        Self::from((a, b))
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
