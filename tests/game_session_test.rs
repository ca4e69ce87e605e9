//! Tests for the game session and its phase machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_minimax::{
    DecisionEngine, Difficulty, EngineConfig, Game, GameMode, GamePhase, MoveError, Player,
    Position,
};

#[test]
fn test_phase_machine_to_draw() {
    let mut game = Game::new(DecisionEngine::default(), GameMode::Pvp);
    assert_eq!(game.phase(), GamePhase::NotStarted);

    // X O X / X O O / O X X
    let moves = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];
    for (turn, pos) in moves.into_iter().enumerate() {
        let mov = game.play(pos).expect("legal move");
        assert_eq!(mov.player(), if turn % 2 == 0 { Player::One } else { Player::Two });
        if turn < 8 {
            assert_eq!(game.phase(), GamePhase::InProgress);
        }
    }

    assert_eq!(game.phase(), GamePhase::Drawn);
    assert!(game.is_over());
    assert_eq!(game.play(Position::Center), Err(MoveError::GameOver));
}

#[test]
fn test_engine_never_loses_a_session() {
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let human = DecisionEngine::new(Difficulty::Random, Player::One);
        let mut game = Game::default();

        while !game.is_over() {
            if game.is_engine_turn() {
                game.play_engine_turn(&mut rng).expect("engine moves");
            } else {
                let pos = human.decide(game.board(), &mut rng).expect("moves remain");
                game.play(pos).expect("legal move");
            }
        }

        assert_ne!(game.phase(), GamePhase::Won(Player::One), "seed {}", seed);
    }
}

#[test]
fn test_pvp_mode_never_hands_turn_to_engine() {
    let mut game = Game::new(DecisionEngine::default(), GameMode::Pvp);
    game.play(Position::Center).expect("legal move");
    assert_eq!(game.to_move(), Player::Two);
    assert!(!game.is_engine_turn());

    game.toggle_mode();
    assert!(game.is_engine_turn());
}

#[test]
fn test_engine_turn_after_game_over_is_rejected() {
    let mut game = Game::new(DecisionEngine::default(), GameMode::Pvp);
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::MiddleLeft,
        Position::TopRight,
        Position::BottomLeft,
    ] {
        game.play(pos).expect("legal move");
    }
    assert_eq!(game.phase(), GamePhase::Won(Player::One));

    let mut rng = ChaCha8Rng::seed_from_u64(0);
    assert_eq!(game.play_engine_turn(&mut rng), Err(MoveError::GameOver));
}

#[test]
fn test_config_builds_session() {
    let config = EngineConfig::default()
        .with_difficulty(Difficulty::Random)
        .with_mode(GameMode::Pvp);
    let game = config.game();
    assert_eq!(game.mode(), GameMode::Pvp);
    assert_eq!(game.engine().difficulty(), Difficulty::Random);
    assert_eq!(game.engine().identity(), Player::Two);
}
