//! The 3x3 board and its queries.

use super::invariants::{BoardInvariants, InvariantSet};
use super::position::Position;
use super::rules::{self, WinningLine};
use super::types::{GameStatus, Player, Square};
use serde::Serialize;
use std::str::FromStr;

/// 3x3 tic-tac-toe board.
///
/// A small value type: copying it yields a fully independent board, which
/// is how the search explores hypothetical moves. The mark counter is kept
/// in step with the squares on every [`Board::mark`] and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Number of occupied squares.
    marked: u8,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            marked: 0,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// The square must be empty; callers check with [`Board::is_empty`]
    /// first. Marking an occupied square is a logic error.
    pub fn mark(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "{} is already marked", pos.label());
        self.squares[pos.to_index()] = Square::Occupied(player);
        self.marked += 1;
        debug_assert!(BoardInvariants::check_all(self).is_ok());
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// All empty positions in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of occupied squares.
    pub fn marked_count(&self) -> usize {
        usize::from(self.marked)
    }

    /// Whether all nine squares are marked.
    pub fn is_full(&self) -> bool {
        self.marked == 9
    }

    /// Whether no square is marked yet.
    pub fn is_empty_board(&self) -> bool {
        self.marked == 0
    }

    /// Owner of the first complete line, scanning columns, rows, then diagonals.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// The first complete line in scan order, with its owner.
    pub fn winning_line(&self) -> Option<(WinningLine, Player)> {
        rules::find_winning_line(self)
    }

    /// Whether the game on this board has ended (won or full).
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// In progress, won, or drawn.
    pub fn status(&self) -> GameStatus {
        rules::status(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.symbol())?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Failure to read a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// The text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongCellCount(#[error(not(source))] usize),

    /// A cell character was not X, O, or an empty marker.
    #[display("Unexpected cell character {:?}", _0)]
    UnexpectedCharacter(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads nine cells: `X`/`x`, `O`/`o`, or `.`/`_`/`-` for empty.
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongCellCount(cells.len()));
        }

        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            match cell {
                'X' | 'x' => board.mark(pos, Player::One),
                'O' | 'o' => board.mark(pos, Player::Two),
                '.' | '_' | '-' => {}
                other => return Err(BoardParseError::UnexpectedCharacter(other)),
            }
        }
        Ok(board)
    }
}
