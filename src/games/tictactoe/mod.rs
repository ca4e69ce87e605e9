//! Tic-tac-toe: board model, rules, and the automated opponent.

mod action;
mod board;
pub mod engine;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardParseError};
pub use engine::{DecisionEngine, Decision, Difficulty, EngineError, Evaluation};
pub use game::{Game, GameMode, GamePhase};
pub use position::Position;
pub use rules::WinningLine;
pub use types::{GameStatus, Player, Square};
