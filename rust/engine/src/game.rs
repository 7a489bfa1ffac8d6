use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, warn};

use crate::deck::acquire_and_deal;
use crate::errors::{DealError, RoundError};
use crate::player::{Player, WIN_THRESHOLD};
use crate::provider::DeckProvider;
use crate::round::{resolve_round, DrawnCard, RoundOutcome};

/// Default number of players after construction or restart.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No players, no deck; entry state and the landing state of `restart`
    NotStarted,
    /// Deck acquisition in flight; reverts to NotStarted on failure
    Dealing,
    /// Rounds may be played
    InProgress,
    /// A round just resolved; transient display fields are populated until
    /// the presentation layer settles the round
    RoundResolved,
    /// Terminal for play; only `restart` is accepted
    GameOver,
}

/// Aggregate root for one game of War.
///
/// Holds the players, the transient per-round display snapshot and the
/// lifecycle phase. All mutation goes through `&mut self`, so a `Game` has
/// exactly one writer at a time by construction; the caller sequences
/// `play_round` calls (the presentation layer disables its trigger during
/// the round display delay).
#[derive(Debug)]
pub struct Game {
    phase: Phase,
    players: Vec<Player>,
    deck_id: Option<String>,
    drawn_cards: Vec<DrawnCard>,
    current_round_winner: Option<String>,
    overall_winner: Option<String>,
    player_count: usize,
    win_threshold: u32,
    total_dealt: usize,
    rng: ChaCha20Rng,
}

impl Game {
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_os_rng())
    }

    /// Deterministic construction for tests; gameplay draws and tie-breaks
    /// come from this seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha20Rng) -> Self {
        Self {
            phase: Phase::NotStarted,
            players: Vec::new(),
            deck_id: None,
            drawn_cards: Vec::new(),
            current_round_winner: None,
            overall_winner: None,
            player_count: DEFAULT_PLAYER_COUNT,
            win_threshold: WIN_THRESHOLD,
            total_dealt: 0,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }
    pub fn deck_id(&self) -> Option<&str> {
        self.deck_id.as_deref()
    }
    pub fn drawn_cards(&self) -> &[DrawnCard] {
        &self.drawn_cards
    }
    pub fn current_round_winner(&self) -> Option<&str> {
        self.current_round_winner.as_deref()
    }
    pub fn overall_winner(&self) -> Option<&str> {
        self.overall_winner.as_deref()
    }
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }
    /// Configured player count; reverts to the default on restart.
    pub fn player_count(&self) -> usize {
        self.player_count
    }
    /// Cards dealt into piles at game start; with the transient drawn
    /// snapshot already redistributed, pile sizes always sum to this.
    pub fn total_dealt(&self) -> usize {
        self.total_dealt
    }

    /// Starts a fresh game against `provider` with `player_count` players
    /// (2-4).
    ///
    /// Passes through `Dealing` while the acquisition is in flight. On any
    /// [`DealError`] the game reverts to `NotStarted` with no partial
    /// player list installed.
    pub async fn start_new_game(
        &mut self,
        provider: &dyn DeckProvider,
        player_count: usize,
    ) -> Result<(), DealError> {
        self.reset_tables();
        self.phase = Phase::Dealing;

        match acquire_and_deal(provider, player_count).await {
            Ok(deal) => {
                debug!(deck_id = %deal.deck_id, players = deal.players.len(), "game started");
                self.deck_id = Some(deal.deck_id);
                self.players = deal.players;
                self.total_dealt = deal.total_dealt;
                self.player_count = player_count;
                self.phase = Phase::InProgress;
                Ok(())
            }
            Err(err) => {
                self.phase = Phase::NotStarted;
                Err(err)
            }
        }
    }

    /// Plays one round, if the game allows it.
    ///
    /// Returns `true` when a round was resolved. After `GameOver` this is
    /// a no-op, as it is before the game starts. A round with fewer than 2
    /// players holding cards is skipped silently (logged at warn level),
    /// matching the upstream behavior.
    pub fn play_round(&mut self) -> bool {
        match self.phase {
            Phase::InProgress => {}
            Phase::GameOver => return false,
            _ => {
                debug!(phase = ?self.phase, "play_round ignored outside InProgress");
                return false;
            }
        }

        match resolve_round(&mut self.players, self.win_threshold, &mut self.rng) {
            Ok(RoundOutcome::Resolved { winner, drawn }) => {
                self.drawn_cards = drawn;
                self.current_round_winner = Some(winner);
                self.phase = Phase::RoundResolved;
                true
            }
            Ok(RoundOutcome::GameOver { winner, drawn }) => {
                self.drawn_cards = drawn;
                self.current_round_winner = Some(winner.clone());
                self.overall_winner = Some(winner);
                self.phase = Phase::GameOver;
                true
            }
            Err(RoundError::InsufficientPlayers) => {
                warn!("round skipped: fewer than 2 players hold cards");
                false
            }
        }
    }

    /// Clears the transient round display snapshot once the presentation
    /// layer has shown it; `RoundResolved` returns to `InProgress`.
    pub fn settle_round(&mut self) {
        if self.phase == Phase::RoundResolved {
            self.drawn_cards.clear();
            self.current_round_winner = None;
            self.phase = Phase::InProgress;
        }
    }

    /// Resets to the initial empty state from any phase. Player count
    /// configuration returns to the default of 2.
    pub fn restart(&mut self) {
        self.reset_tables();
        self.player_count = DEFAULT_PLAYER_COUNT;
        self.phase = Phase::NotStarted;
    }

    fn reset_tables(&mut self) {
        self.players.clear();
        self.deck_id = None;
        self.drawn_cards.clear();
        self.current_round_winner = None;
        self.overall_winner = None;
        self.total_dealt = 0;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
