//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search and the orchestrator share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, status};
pub use win::{WinningLine, check_winner, find_winning_line};
