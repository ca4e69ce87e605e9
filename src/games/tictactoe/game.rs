//! Game session: one board, one engine, turn order and phase.

use super::action::{Move, MoveError};
use super::engine::{DecisionEngine, Difficulty};
use super::rules::WinningLine;
use super::{Board, GameStatus, Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who plays player two.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// The engine plays its side.
    #[default]
    Ai,
    /// Two humans share the board.
    Pvp,
}

impl GameMode {
    /// Toggles between `Ai` and `Pvp`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ai => Self::Pvp,
            Self::Pvp => Self::Ai,
        }
    }
}

/// Lifecycle of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No mark placed yet.
    NotStarted,
    /// At least one mark, no result yet.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// The board filled up without a line.
    Drawn,
}

impl GamePhase {
    /// Whether no more moves are accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won(_) | GamePhase::Drawn)
    }
}

/// A game in progress.
///
/// Applies human or engine moves to the board, passes the turn, and
/// advances the phase from the board's terminal queries after every move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: DecisionEngine,
    to_move: Player,
    mode: GameMode,
    phase: GamePhase,
    initial_engine: DecisionEngine,
    initial_mode: GameMode,
}

impl Game {
    /// Creates a new game; player one moves first.
    #[instrument]
    pub fn new(engine: DecisionEngine, mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            engine,
            to_move: Player::One,
            mode,
            phase: GamePhase::NotStarted,
            initial_engine: engine,
            initial_mode: mode,
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The engine.
    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    /// The engine, for changing its difficulty.
    pub fn engine_mut(&mut self) -> &mut DecisionEngine {
        &mut self.engine
    }

    /// Shorthand for switching the engine's strategy.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.engine.set_difficulty(difficulty);
    }

    /// The player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Board status: in progress, won, or drawn.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// The line to highlight once a player has won.
    pub fn winning_line(&self) -> Option<(WinningLine, Player)> {
        self.board.winning_line()
    }

    /// Whether the engine should move now.
    pub fn is_engine_turn(&self) -> bool {
        self.mode == GameMode::Ai && !self.is_over() && self.to_move == self.engine.identity()
    }

    /// Marks `pos` for the player to move and passes the turn.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or the square is occupied.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mov = Move::new(self.to_move, pos);
        self.board.mark(pos, self.to_move);
        self.update_phase();
        self.next_turn();

        debug!(%mov, phase = ?self.phase, "Move applied");
        Ok(mov)
    }

    /// Lets the engine choose a square and plays it for the player to move.
    ///
    /// # Errors
    ///
    /// Fails if the game is over or the engine cannot move.
    #[instrument(skip(self, rng))]
    pub fn play_engine_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = self.engine.decide(&self.board, rng)?;
        self.play(pos)
    }

    /// Switches between playing the engine and two-player mode.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        info!(mode = %self.mode, "Game mode changed");
    }

    /// Starts over on a fresh board with the original mode and engine settings.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.initial_engine, self.initial_mode);
        info!("Game reset");
    }

    fn next_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    fn update_phase(&mut self) {
        self.phase = match self.board.status() {
            GameStatus::Won(player) => GamePhase::Won(player),
            GameStatus::Draw => GamePhase::Drawn,
            GameStatus::InProgress if self.board.is_empty_board() => GamePhase::NotStarted,
            GameStatus::InProgress => GamePhase::InProgress,
        };
        if self.phase.is_terminal() {
            info!(phase = ?self.phase, "Game over");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DecisionEngine::default(), GameMode::default())
    }
}
