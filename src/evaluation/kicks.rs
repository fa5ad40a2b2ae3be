use crate::cards::rank::Rank;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;

/// A hand's tie-breaking side ranks, highest first.
///
/// Two hands of equal Ranking compare kicker by kicker until one side wins;
/// hands of the same category always carry the same number of kickers.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Vec<Rank> isomorphism, descending
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        debug_assert!(ranks.windows(2).all(|w| w[0] > w[1]));
        Self(ranks)
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl Ord for Kickers {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.cmp(b))
            .find(|&x| x != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}
impl PartialOrd for Kickers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{} ", rank)?;
        }
        Ok(())
    }
}
