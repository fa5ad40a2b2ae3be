/// A hand's full strength: its category plus tie-breaking kickers.
///
/// Strengths are totally ordered: category first, then the ranks embedded
/// in the category, then kickers compared highest-first. Equal Strengths
/// mean a genuine tie and a split pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn new(ranking: Ranking, kickers: Kickers) -> Self {
        Self { ranking, kickers }
    }
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> &Kickers {
        &self.kickers
    }
}

impl From<&Selector> for Strength {
    fn from(selector: &Selector) -> Self {
        let evaluator = Evaluator::from(selector);
        let ranking = evaluator.find_ranking();
        let kickers = evaluator.find_kickers(ranking);
        Self { ranking, kickers }
    }
}

impl Ord for Strength {
    fn cmp(&self, other: &Self) -> Ordering {
        Ordering::Equal
            .then_with(|| self.ranking.cmp(&other.ranking))
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}
impl PartialOrd for Strength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<18}{}", self.ranking, self.kickers)
    }
}


use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use super::selector::Selector;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;
