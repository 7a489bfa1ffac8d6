#![allow(dead_code)]

use async_trait::async_trait;

use wargame_engine::cards::Card;
use wargame_engine::errors::ProviderError;
use wargame_engine::provider::{DeckProvider, DeckSession, DrawResponse};

const RANK_TOKENS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "JACK", "QUEEN", "KING", "ACE",
];

/// Builds `n` cards with unique codes and rank tokens cycling through the
/// standard thirteen, in a fixed delivery order.
pub fn scripted_cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("C{:03}", i), RANK_TOKENS[i % RANK_TOKENS.len()]))
        .collect()
}

/// Scripted deck provider: serves a fixed card sequence and can be told to
/// fail at each step of the acquisition.
pub struct StubDeckProvider {
    pub cards: Vec<Card>,
    /// Transport-level failure on the shuffle request
    pub fail_shuffle: bool,
    /// Shuffle responds but with success=false
    pub reject_shuffle: bool,
    /// Draw response arrives without a cards field
    pub omit_cards: bool,
}

impl StubDeckProvider {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self {
            cards,
            fail_shuffle: false,
            reject_shuffle: false,
            omit_cards: false,
        }
    }
}

#[async_trait]
impl DeckProvider for StubDeckProvider {
    async fn new_shuffled_deck(&self) -> Result<DeckSession, ProviderError> {
        if self.fail_shuffle {
            return Err(ProviderError::Rejected);
        }
        Ok(DeckSession {
            deck_id: "stub-deck".to_string(),
            remaining: self.cards.len() as u32,
            success: !self.reject_shuffle,
        })
    }

    async fn draw_cards(&self, deck_id: &str, _count: usize) -> Result<DrawResponse, ProviderError> {
        if self.omit_cards {
            return Ok(DrawResponse {
                cards: None,
                deck_id: Some(deck_id.to_string()),
                remaining: Some(0),
                success: Some(true),
            });
        }
        Ok(DrawResponse {
            cards: Some(self.cards.clone()),
            deck_id: Some(deck_id.to_string()),
            remaining: Some(0),
            success: Some(true),
        })
    }
}
