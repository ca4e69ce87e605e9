//! tictactoe_minimax - terminal front end
//!
//! Plays a game on stdin/stdout, or prints the engine's move for a board.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use std::path::Path;
use tictactoe_minimax::{
    Board, DecisionEngine, Difficulty, EngineConfig, Game, GameMode, GamePhase, Player, Position,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            mode,
            identity,
            seed,
        } => {
            let config = load_config(&config, difficulty, mode, identity, seed)?;
            run_play(&config)
        }
        Command::BestMove {
            board,
            difficulty,
            seed,
            json,
        } => run_best_move(&board, difficulty, seed, json),
    }
}

/// Builds the game settings from the config file and command-line overrides.
#[instrument(skip(config_path))]
fn load_config(
    config_path: &Path,
    difficulty: Option<Difficulty>,
    mode: Option<GameMode>,
    identity: Option<Player>,
    seed: Option<u64>,
) -> Result<EngineConfig> {
    let mut config = if config_path.exists() {
        EngineConfig::from_file(config_path)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        EngineConfig::default()
    };

    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if let Some(identity) = identity {
        config = config.with_identity(identity);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    Ok(config)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Runs the interactive game loop.
#[instrument(skip(config))]
fn run_play(config: &EngineConfig) -> Result<()> {
    let mut game = config.game();
    let mut rng = make_rng(*config.seed());
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    print_help();
    render(&game);

    loop {
        if game.is_engine_turn() {
            let mov = game.play_engine_turn(&mut rng)?;
            println!("\nEngine plays {}", mov.position());
            render(&game);
            continue;
        }

        print!("> ");
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "h" | "help" => print_help(),
            "g" => {
                game.toggle_mode();
                println!("Mode: {}", game.mode());
            }
            "r" => {
                game.reset();
                render(&game);
            }
            "0" => {
                game.set_difficulty(Difficulty::Random);
                println!("Engine: {}", Difficulty::Random);
            }
            "1" => {
                game.set_difficulty(Difficulty::Optimal);
                println!("Engine: {}", Difficulty::Optimal);
            }
            input => match Position::parse(input) {
                Some(pos) => match game.play(pos) {
                    Ok(_) => render(&game),
                    Err(e) => println!("{}", e),
                },
                None => {
                    warn!(input, "Unrecognized input");
                    println!("Unrecognized input {:?}; type h for help", input);
                }
            },
        }
    }

    info!("Leaving game");
    Ok(())
}

fn print_help() {
    println!("Enter a square as row,col (0-2) or a name like center or top-left.");
    println!("  g  toggle engine / two-player mode");
    println!("  r  reset the game");
    println!("  0  random engine");
    println!("  1  optimal engine");
    println!("  q  quit");
}

fn render(game: &Game) {
    println!("\n{}\n", game.board());
    match game.phase() {
        GamePhase::Won(player) => {
            let line = game
                .winning_line()
                .map(|(line, _)| line.label())
                .unwrap_or_default();
            println!("{} wins on {}. Press r to play again.", player.symbol(), line);
        }
        GamePhase::Drawn => println!("Draw. Press r to play again."),
        GamePhase::NotStarted | GamePhase::InProgress => {
            println!("{} to move ({} mode)", game.to_move().symbol(), game.mode())
        }
    }
}

/// Prints the engine's choice for a single board.
#[instrument]
fn run_best_move(board: &str, difficulty: Difficulty, seed: Option<u64>, json: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let engine = DecisionEngine::new(difficulty, Player::Two);
    let decision = engine.evaluate(&board, &mut make_rng(seed))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{}\n", board);
        println!(
            "Best move: {} (eval {})",
            decision.position(),
            decision.evaluation()
        );
    }
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,tictactoe_minimax=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
