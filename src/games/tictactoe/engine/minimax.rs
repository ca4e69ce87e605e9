//! Exhaustive minimax over the remaining game tree.
//!
//! Scores are always from player one's point of view: player one is the
//! maximizer and player two the minimizer, whichever side the engine plays.
//! No pruning or memoization; every reachable position below the root is
//! evaluated on its own copy of the board.

use super::super::{Board, Player, Position};

/// Score of a board player one has won.
pub const PLAYER_ONE_WINS: i8 = 1;
/// Score of a board player two has won.
pub const PLAYER_TWO_WINS: i8 = -1;
/// Score of a full board with no winner.
pub const DRAW: i8 = 0;

/// Searches `board` with the given side to move.
///
/// Returns the best score and the move reaching it. Among equally good
/// moves the first one in row-major order wins, since only a strictly
/// better score replaces the running best. Terminal boards return no move.
pub fn minimax(board: &Board, maximizing: bool) -> (i8, Option<Position>) {
    match board.winner() {
        Some(Player::One) => return (PLAYER_ONE_WINS, None),
        Some(Player::Two) => return (PLAYER_TWO_WINS, None),
        None if board.is_full() => return (DRAW, None),
        None => {}
    }

    let (player, mut best_score) = if maximizing {
        (Player::One, i8::MIN)
    } else {
        (Player::Two, i8::MAX)
    };
    let mut best_move = None;

    for pos in board.empty_cells() {
        let mut branch = *board;
        branch.mark(pos, player);
        let (score, _) = minimax(&branch, !maximizing);

        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(pos);
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().expect("valid board")
    }

    #[test]
    fn test_terminal_scores() {
        assert_eq!(minimax(&board("XXX OO. ..."), false), (PLAYER_ONE_WINS, None));
        assert_eq!(minimax(&board("OOO XX. X.."), true), (PLAYER_TWO_WINS, None));
        assert_eq!(minimax(&board("XOX OXX OXO"), true), (DRAW, None));
    }

    #[test]
    fn test_maximizer_completes_top_row() {
        let board = board("XX. OO. ...");
        assert_eq!(minimax(&board, true), (PLAYER_ONE_WINS, Some(Position::TopRight)));
    }

    #[test]
    fn test_minimizer_completes_middle_row() {
        let board = board("XX. OO. X..");
        assert_eq!(
            minimax(&board, false),
            (PLAYER_TWO_WINS, Some(Position::MiddleRight))
        );
    }

    #[test]
    fn test_minimizer_blocks_when_it_cannot_win() {
        // X threatens the top row, O has nothing of its own.
        let board = board("XX. .O. ...");
        let (_, best) = minimax(&board, false);
        assert_eq!(best, Some(Position::TopRight));
    }

    #[test]
    fn test_ties_keep_first_cell_in_row_major_order() {
        // Every opening draws under perfect play, so the first cell is kept.
        assert_eq!(minimax(&Board::new(), false), (DRAW, Some(Position::TopLeft)));
    }

    #[test]
    fn test_single_empty_cell() {
        // X O X / X O O / O X .
        let board = board("XOX XOO OX.");
        assert_eq!(minimax(&board, true), (DRAW, Some(Position::BottomRight)));
    }

    #[test]
    fn test_search_does_not_mutate_input() {
        let original = board("X.. .O. ...");
        let before = original;
        let _ = minimax(&original, true);
        assert_eq!(original, before);
    }
}
