//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// One of the eight lines that win the game.
///
/// [`WinningLine::ALL`] lists them in scan order: columns, then rows,
/// then the main and anti diagonals. The first complete line in that
/// order is the one reported, so renderers always draw the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinningLine {
    /// A vertical line, column 0-2.
    Column(u8),
    /// A horizontal line, row 0-2.
    Row(u8),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinningLine {
    /// All lines in scan order.
    pub const ALL: [WinningLine; 8] = [
        WinningLine::Column(0),
        WinningLine::Column(1),
        WinningLine::Column(2),
        WinningLine::Row(0),
        WinningLine::Row(1),
        WinningLine::Row(2),
        WinningLine::MainDiagonal,
        WinningLine::AntiDiagonal,
    ];

    /// The three cells making up this line.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinningLine::Column(0) => [TopLeft, MiddleLeft, BottomLeft],
            WinningLine::Column(1) => [TopCenter, Center, BottomCenter],
            WinningLine::Column(_) => [TopRight, MiddleRight, BottomRight],
            WinningLine::Row(0) => [TopLeft, TopCenter, TopRight],
            WinningLine::Row(1) => [MiddleLeft, Center, MiddleRight],
            WinningLine::Row(_) => [BottomLeft, BottomCenter, BottomRight],
            WinningLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinningLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Human-readable name of the line.
    pub fn label(self) -> String {
        match self {
            WinningLine::Column(col) => format!("column {}", col),
            WinningLine::Row(row) => format!("row {}", row),
            WinningLine::MainDiagonal => "main diagonal".to_string(),
            WinningLine::AntiDiagonal => "anti-diagonal".to_string(),
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Finds the first complete line in scan order and its owner.
pub fn find_winning_line(board: &Board) -> Option<(WinningLine, Player)> {
    WinningLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let player = board.get(a).player()?;
        let owned = Square::Occupied(player);
        (board.get(b) == owned && board.get(c) == owned).then_some((line, player))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_winning_line(board).map(|(_, player)| player)
}
