//! Uniform random choice among empty cells.

use super::super::{Board, Position};
use rand::Rng;

/// Picks one of `board`'s empty cells uniformly at random.
///
/// The index is drawn from `[0, n)` where `n` is the number of empty cells,
/// indexing [`Board::empty_cells`] in row-major order. Returns `None` on a
/// full board.
pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    let cells = board.empty_cells();
    if cells.is_empty() {
        return None;
    }
    Some(cells[rng.gen_range(0..cells.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::mock::StepRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_source_picks_first_empty_cell() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(pick(&Board::new(), &mut rng), Some(Position::TopLeft));

        let board: Board = "XO. ... ...".parse().expect("valid board");
        assert_eq!(pick(&board, &mut rng), Some(Position::TopRight));
    }

    #[test]
    fn test_only_empty_cells_are_picked() {
        let board: Board = "XOX .O. X.O".parse().expect("valid board");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let pos = pick(&board, &mut rng).expect("board has empty cells");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_every_empty_cell_is_reachable() {
        let board: Board = "X.. .O. ...".parse().expect("valid board");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(pick(&board, &mut rng).expect("board has empty cells"));
        }
        assert_eq!(seen.len(), board.empty_cells().len());
    }

    #[test]
    fn test_full_board_has_no_pick() {
        let board: Board = "XOXXOOOXX".parse().expect("valid board");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pick(&board, &mut rng), None);
    }
}
