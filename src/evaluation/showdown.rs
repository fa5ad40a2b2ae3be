use super::error::ShowdownError;
use super::selector::Selector;
use super::strength::Strength;
use crate::cards::board::Board;
use crate::cards::hole::Hole;

/// Best five-card strength a hole makes with the board.
///
/// Accepts any board from preflop to river; the seven-card case is the one
/// winner determination cares about.
pub fn strength(board: &Board, hole: &Hole) -> Result<Strength, ShowdownError> {
    Selector::new(board, hole).map(|selector| Strength::from(&selector))
}

/// Indices of every hole whose strength ties for the best at the river.
///
/// Pure and stateless: safe to call concurrently on disjoint inputs, and
/// calling it twice on the same input returns the same answer. Returns more
/// than one index exactly when the pot splits.
pub fn winners(board: &Board, holes: &[Hole]) -> Result<Vec<usize>, ShowdownError> {
    if board.len() != Board::RIVER {
        return Err(ShowdownError::InvalidBoard(board.len()));
    }
    if holes.len() < 2 {
        return Err(ShowdownError::InsufficientPlayers(holes.len()));
    }
    let strengths = holes
        .iter()
        .map(|hole| strength(board, hole))
        .collect::<Result<Vec<Strength>, ShowdownError>>()?;
    for (hole, strength) in holes.iter().zip(strengths.iter()) {
        log::debug!("{} | {} makes {}", board, hole, strength);
    }
    let best = strengths.iter().max();
    Ok(strengths
        .iter()
        .enumerate()
        .filter(|(_, strength)| Some(*strength) == best)
        .map(|(i, _)| i)
        .collect())
}
