use anyhow::{bail, Context, Result};
use clap::Parser;

use chess_rules::{Game, GameConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play moves on a chess position and report the result", long_about = None)]
struct Args {
    /// Starting position as FEN (defaults to the standard start)
    #[arg(long)]
    fen: Option<String>,

    /// Moves in coordinate form, e.g. e2e4 e7e5 g1f3 or e7e8q
    moves: Vec<String>,

    /// Print the final game snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Print a perft divide of the final position to the given depth
    #[arg(long, value_name = "DEPTH")]
    perft: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .init();

    let config = match &args.fen {
        Some(fen) => GameConfig::from_fen(fen.as_str()),
        None => GameConfig::standard(),
    };
    let mut game = Game::with_config(config).context("invalid starting position")?;

    for text in &args.moves {
        if game.is_game_over() {
            bail!("game is already over, cannot play {text}");
        }
        game.make_move_uci(text)
            .with_context(|| format!("cannot play {text} in {}", game.fen()))?;
    }

    if let Some(depth) = args.perft {
        let mut divide = game.position().divide(depth);
        divide.sort();
        let total: u64 = divide.iter().map(|(_, nodes)| nodes).sum();
        for (mv, nodes) in divide {
            println!("{mv}: {nodes}");
        }
        println!("\nNodes searched: {total}");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        return Ok(());
    }

    println!("{}", game.fen());
    if !game.history().is_empty() {
        println!("{}", game.pgn());
    }
    if let Some(termination) = game.termination() {
        println!("{} ({}) {}", termination, game.result(), game.result().pgn_token());
    }

    Ok(())
}
