//! # wargame-engine: War Card Game Core
//!
//! Round-resolution engine for the card game War, played by 2-4 simulated
//! players against a remote shuffled deck. Deals piles from an external
//! deck provider, plays rounds (simultaneous reveal, deterministic
//! tie-break, pile redistribution) and tracks the game lifecycle up to a
//! fixed win threshold.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation with provider codes and rank mapping
//! - [`provider`] - Deck provider boundary (trait + HTTP implementation)
//! - [`deck`] - Deck acquisition and pile dealing
//! - [`player`] - Player piles and win counters
//! - [`round`] - Round resolution and the tie-break chain
//! - [`game`] - Game aggregate and lifecycle state machine
//! - [`logger`] - Round history logging and RoundRecord serialization
//! - [`errors`] - Error types for dealing and round resolution
//!
//! ## Quick Start
//!
//! ```no_run
//! use wargame_engine::game::Game;
//! use wargame_engine::provider::HttpDeckProvider;
//!
//! # async fn play() -> Result<(), wargame_engine::errors::DealError> {
//! let provider = HttpDeckProvider::new();
//! let mut game = Game::new();
//! game.start_new_game(&provider, 2).await?;
//!
//! while game.play_round() {
//!     if let Some(winner) = game.current_round_winner() {
//!         println!("Round winner: {winner}");
//!     }
//!     if game.is_game_over() {
//!         break;
//!     }
//!     game.settle_round();
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Draws and tie-breaks come from the game's own RNG, which tests can
//! seed:
//!
//! ```rust
//! use wargame_engine::game::Game;
//!
//! // Same seed produces the same draw sequence over identical piles
//! let game1 = Game::with_seed(42);
//! let game2 = Game::with_seed(42);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod provider;
pub mod round;
