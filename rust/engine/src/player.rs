use crate::cards::Card;
use serde::{Deserialize, Serialize};

/// Number of round wins required to win the game outright.
pub const WIN_THRESHOLD: u32 = 10;

/// Represents a War player with an ordered pile of cards and a win counter.
/// A player whose pile runs empty stays in the game (and keeps any rounds
/// won) but no longer participates in draws.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier, assigned positionally at deal time
    id: usize,
    /// Display name ("Player 1".."Player N")
    name: String,
    /// Current pile; order is irrelevant to play, removal is by card code
    pile: Vec<Card>,
    /// Rounds won so far, monotonically non-decreasing within a game
    rounds_won: u32,
}

impl Player {
    pub fn new(id: usize, name: impl Into<String>, pile: Vec<Card>) -> Self {
        Self {
            id,
            name: name.into(),
            pile,
            rounds_won: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn pile(&self) -> &[Card] {
        &self.pile
    }
    pub fn pile_mut(&mut self) -> &mut Vec<Card> {
        &mut self.pile
    }
    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// Whether the player holds at least one card and may draw this round.
    pub fn can_draw(&self) -> bool {
        !self.pile.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.pile.push(card);
    }

    /// Removes the first card whose code matches, by identity rather than
    /// position. Returns the removed card, or `None` if no card matches.
    pub fn remove_by_code(&mut self, code: &str) -> Option<Card> {
        let pos = self.pile.iter().position(|c| c.code == code)?;
        Some(self.pile.remove(pos))
    }

    pub fn record_win(&mut self) {
        self.rounds_won += 1;
    }
}
