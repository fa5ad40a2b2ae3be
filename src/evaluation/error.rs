use crate::cards::card::Card;
use thiserror::Error;

/// Caller-input validation failures.
///
/// All of these are detected eagerly, before any combination is extracted,
/// and the computation is deterministic: a bad input always fails the same
/// way. No partial results are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowdownError {
    #[error("card {0} dealt twice across board and hole")]
    CardOverlap(Card),

    #[error("winners are determined on a river board of 5 cards, got {0}")]
    InvalidBoard(usize),

    #[error("need at least 2 holes to determine a winner, got {0}")]
    InsufficientPlayers(usize),
}
