//! Command-line runner for the War engine.
//!
//! Thin presentation layer: starts a game against the remote deck
//! provider, plays rounds on a display-delay cadence and prints each
//! round's reveal and winner. Optionally appends a JSONL round history.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wargame_engine::game::Game;
use wargame_engine::logger::{RoundLogger, RoundRecord};
use wargame_engine::provider::{HttpDeckProvider, DEFAULT_BASE_URL};

#[derive(Debug, Parser)]
#[command(name = "wargame", about = "Play War against a remote shuffled deck")]
struct Cli {
    /// Number of players (2-4)
    #[arg(long, default_value_t = 2)]
    players: usize,
    /// Deck provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// RNG seed for reproducible draws and tie-breaks
    #[arg(long)]
    seed: Option<u64>,
    /// Display delay between rounds, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,
    /// Append round history to this JSONL file
    #[arg(long)]
    log: Option<PathBuf>,
    /// Safety cap on the number of rounds played
    #[arg(long, default_value_t = 1000)]
    max_rounds: u32,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let provider = HttpDeckProvider::with_base_url(&cli.base_url);
    let mut game = match cli.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    tracing::info!(players = cli.players, base_url = %cli.base_url, "starting game");
    game.start_new_game(&provider, cli.players).await?;
    println!(
        "Dealt {} cards to {} players (deck {})",
        game.total_dealt(),
        game.players().len(),
        game.deck_id().unwrap_or("?"),
    );

    let mut logger = match &cli.log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    for round in 1..=cli.max_rounds {
        if !game.play_round() {
            println!("No playable round left; stopping.");
            break;
        }

        println!("Round {round}:");
        for d in game.drawn_cards() {
            println!("  {} reveals {} ({})", d.player_name, d.card.code, d.card.value);
        }
        let winner = game.current_round_winner().unwrap_or("?").to_string();
        println!("  -> {winner} takes the round");

        if let Some(logger) = logger.as_mut() {
            let record = RoundRecord {
                round_id: logger.next_id(),
                drawn: game.drawn_cards().to_vec(),
                winner: winner.clone(),
                game_over: game.is_game_over(),
                ts: None,
            };
            logger.write(&record)?;
        }

        if game.is_game_over() {
            println!("\nGame over: {} wins the game!", game.overall_winner().unwrap_or("?"));
            for p in game.players() {
                println!("  {}: {} rounds won, {} cards left", p.name(), p.rounds_won(), p.pile().len());
            }
            return Ok(());
        }

        tokio::time::sleep(Duration::from_millis(cli.delay_ms)).await;
        game.settle_round();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_game_rules() {
        let cli = Cli::parse_from(["wargame"]);
        assert_eq!(cli.players, 2);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.delay_ms, 500);
        assert!(cli.seed.is_none());
        assert!(cli.log.is_none());
    }

    #[test]
    fn flags_are_parsed() {
        let cli = Cli::parse_from([
            "wargame",
            "--players",
            "4",
            "--seed",
            "42",
            "--delay-ms",
            "0",
            "--log",
            "rounds.jsonl",
        ]);
        assert_eq!(cli.players, 4);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.delay_ms, 0);
        assert_eq!(cli.log.as_deref().map(|p| p.to_str()), Some(Some("rounds.jsonl")));
    }
}
