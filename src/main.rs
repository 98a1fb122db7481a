//! Console front end: play tic-tac-toe against the AI in a terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tictactoe_minimax::{AiPlayer, Game, GameError, Level, Phase, Player, Position, Ui, View};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a minimax AI.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_minimax")]
#[command(about = "Play tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
struct Cli {
    /// AI strength: blind, novice, or master
    #[arg(short, long, default_value = "master")]
    level: String,

    /// Seed for the AI's randomness (reproducible blind/novice play)
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final state as JSON when the game ends
    #[arg(long)]
    json: bool,
}

/// Line-oriented front end; placements and view changes become messages.
struct ConsoleUi;

impl Ui for ConsoleUi {
    fn insert_at(&mut self, pos: Position, mark: Player) {
        println!("{:?} plays {}", mark, pos);
    }

    fn switch_view_to(&mut self, view: View) {
        match view {
            View::Human => println!("Your turn."),
            View::Robot => println!("Thinking..."),
            View::Won => println!("You won!"),
            View::Lost => println!("You lost."),
            View::Draw => println!("It's a draw."),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let level: Level = cli.level.parse().map_err(|_| {
        anyhow::anyhow!(
            "unknown level {:?} (expected blind, novice, or master)",
            cli.level
        )
    })?;

    let ai = match cli.seed {
        Some(seed) => AiPlayer::with_seed(level, seed),
        None => AiPlayer::new(level),
    };

    let mut game = Game::new(ai, ConsoleUi);
    game.start()?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while game.phase() == Phase::Running {
        println!("\n{}\n", game.current_state().board().display());
        print!("Your move (1-9): ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            anyhow::bail!("input closed before the game ended");
        };
        let line = line.context("reading move")?;

        let Some(pos) = parse_cell(line.trim()) else {
            println!("Enter a cell number from 1 to 9.");
            continue;
        };

        match game.play(pos) {
            Ok(()) => {}
            Err(err @ (GameError::Move(_) | GameError::OutOfTurn(_))) => {
                println!("{err}");
            }
            Err(err) => return Err(err.into()),
        }
    }

    println!("\n{}", game.current_state().board().display());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(game.current_state())?);
    }

    Ok(())
}

/// Parses a 1-based cell number into a board position.
fn parse_cell(input: &str) -> Option<Position> {
    let n: usize = input.parse().ok()?;
    Position::from_index(n.checked_sub(1)?)
}
