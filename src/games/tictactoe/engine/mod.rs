//! Automated opponent: random or exhaustive-minimax move selection.

pub mod minimax;
pub mod random;

use super::{Board, Player, Position};
use derive_new::new;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How the engine chooses its moves.
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
pub enum Difficulty {
    /// Uniformly random among empty cells.
    Random,
    /// Full minimax search; never loses.
    #[default]
    Optimal,
}

/// How a chosen move was judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    /// Picked at random; no score.
    Random,
    /// Minimax score from player one's point of view (+1, 0, -1).
    Score(i8),
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evaluation::Random => f.write_str("random"),
            Evaluation::Score(score) => write!(f, "{:+}", score),
        }
    }
}

/// A move chosen by the engine together with its evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct Decision {
    /// Where to mark.
    position: Position,
    /// Why.
    evaluation: Evaluation,
}

impl Decision {
    /// The chosen cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The evaluation behind the choice.
    pub fn evaluation(&self) -> Evaluation {
        self.evaluation
    }
}

/// Why the engine could not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// Every square is already marked.
    #[display("No empty squares left to play")]
    NoMovesAvailable,

    /// The board already has a winner.
    #[display("Game already won by player {}", _0)]
    GameAlreadyWon(#[error(not(source))] Player),
}

/// The automated opponent.
///
/// Holds only its difficulty and the side it plays; every decision is
/// computed fresh from the board it is handed, and that board is never
/// mutated.
///
/// The optimal strategy always searches with player one maximizing and
/// player two minimizing, rooted at a minimizing ply. `identity` tells the
/// orchestrator when the engine moves but does not steer the search, so an
/// engine configured as player one still picks player two's best reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecisionEngine {
    difficulty: Difficulty,
    identity: Player,
}

impl DecisionEngine {
    /// Creates an engine with the given strategy, playing as `identity`.
    pub fn new(difficulty: Difficulty, identity: Player) -> Self {
        Self {
            difficulty,
            identity,
        }
    }

    /// Current strategy.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switches strategy; takes effect on the next decision.
    #[instrument(skip(self), fields(from = %self.difficulty))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(to = %difficulty, "Changing engine difficulty");
        self.difficulty = difficulty;
    }

    /// The side this engine plays.
    pub fn identity(&self) -> Player {
        self.identity
    }

    /// Chooses the next move on `board`.
    ///
    /// `rng` is only consulted by [`Difficulty::Random`].
    ///
    /// # Errors
    ///
    /// Fails if the board is already won or full.
    pub fn decide<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Position, EngineError> {
        self.evaluate(board, rng).map(|decision| decision.position())
    }

    /// Chooses the next move on `board` and reports its evaluation.
    ///
    /// # Errors
    ///
    /// Fails if the board is already won or full.
    #[instrument(
        skip(self, board, rng),
        fields(difficulty = %self.difficulty, marked = board.marked_count())
    )]
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Decision, EngineError> {
        if let Some(winner) = board.winner() {
            return Err(EngineError::GameAlreadyWon(winner));
        }

        let decision = match self.difficulty {
            Difficulty::Random => random::pick(board, rng)
                .map(|position| Decision::new(position, Evaluation::Random)),
            Difficulty::Optimal => {
                let (score, best) = minimax::minimax(board, false);
                best.map(|position| Decision::new(position, Evaluation::Score(score)))
            }
        }
        .ok_or(EngineError::NoMovesAvailable)?;

        info!(
            position = %decision.position(),
            eval = %decision.evaluation(),
            "Engine chose a square"
        );
        Ok(decision)
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new(Difficulty::default(), Player::Two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_default_engine() {
        let engine = DecisionEngine::default();
        assert_eq!(engine.difficulty(), Difficulty::Optimal);
        assert_eq!(engine.identity(), Player::Two);
    }

    #[test]
    fn test_difficulty_parses() {
        assert_eq!("random".parse::<Difficulty>().ok(), Some(Difficulty::Random));
        assert_eq!("Optimal".parse::<Difficulty>().ok(), Some(Difficulty::Optimal));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_set_difficulty() {
        let mut engine = DecisionEngine::default();
        engine.set_difficulty(Difficulty::Random);
        assert_eq!(engine.difficulty(), Difficulty::Random);
    }

    #[test]
    fn test_optimal_reports_score() {
        let engine = DecisionEngine::default();
        let board: Board = "XX. OO. X..".parse().expect("valid board");
        let decision = engine
            .evaluate(&board, &mut StepRng::new(0, 0))
            .expect("moves remain");
        assert_eq!(decision.position(), Position::MiddleRight);
        assert_eq!(decision.evaluation(), Evaluation::Score(-1));
        assert_eq!(decision.evaluation().to_string(), "-1");
    }

    #[test]
    fn test_refuses_finished_boards() {
        let engine = DecisionEngine::default();
        let mut rng = StepRng::new(0, 0);

        let won: Board = "XXX OO. ...".parse().expect("valid board");
        assert_eq!(
            engine.decide(&won, &mut rng),
            Err(EngineError::GameAlreadyWon(Player::One))
        );

        let drawn: Board = "XOX OXX OXO".parse().expect("valid board");
        assert_eq!(
            engine.decide(&drawn, &mut rng),
            Err(EngineError::NoMovesAvailable)
        );
    }
}
