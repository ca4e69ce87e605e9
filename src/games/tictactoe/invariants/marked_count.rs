//! Marked-count invariant: the counter matches the occupied squares.

use super::super::{Board, Square};
use super::Invariant;

/// Invariant: the incrementally kept mark counter equals the number of
/// occupied squares.
pub struct MarkedCountInvariant;

impl Invariant<Board> for MarkedCountInvariant {
    fn holds(board: &Board) -> bool {
        let occupied = board
            .squares()
            .iter()
            .filter(|&&square| square != Square::Empty)
            .count();
        occupied == board.marked_count()
    }

    fn description() -> &'static str {
        "Mark counter equals the number of occupied squares"
    }
}
