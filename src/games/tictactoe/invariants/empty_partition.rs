//! Empty cells and marks partition the board.

use super::super::Board;
use super::Invariant;

/// Invariant: every square is either listed by `empty_cells()` or counted
/// as marked, never both.
pub struct EmptyCellsPartitionInvariant;

impl Invariant<Board> for EmptyCellsPartitionInvariant {
    fn holds(board: &Board) -> bool {
        board.empty_cells().len() + board.marked_count() == 9
    }

    fn description() -> &'static str {
        "Empty cells plus marked squares cover the board exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_holds() {
        let board: Board = "XOXOXXOXO".parse().expect("valid board");
        assert!(board.empty_cells().is_empty());
        assert!(EmptyCellsPartitionInvariant::holds(&board));
    }
}
