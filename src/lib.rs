//! Tic-tac-toe with an automated opponent.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, mark bookkeeping, and terminal-state queries
//! - **DecisionEngine**: picks moves at random or by exhaustive minimax
//! - **Game**: a session that applies moves, passes turns, and tracks the phase
//! - **EngineConfig**: TOML-backed settings for the engine and session
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Board, DecisionEngine, Difficulty, Player, Position};
//!
//! let board: Board = "XX. OO. X..".parse()?;
//! let engine = DecisionEngine::new(Difficulty::Optimal, Player::Two);
//! let pos = engine.decide(&board, &mut rand::thread_rng())?;
//! assert_eq!(pos, Position::MiddleRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Decision, DecisionEngine, Difficulty, EngineError, Evaluation, Game,
    GameMode, GamePhase, GameStatus, Move, MoveError, Player, Position, Square, WinningLine,
};

// Crate-level exports - Search internals and invariants
pub use games::tictactoe::engine::minimax::{DRAW, PLAYER_ONE_WINS, PLAYER_TWO_WINS, minimax};
pub use games::tictactoe::invariants::{
    BoardInvariants, EmptyCellsPartitionInvariant, Invariant, InvariantSet, InvariantViolation,
    MarkedCountInvariant,
};
