use async_trait::async_trait;
use serde::Deserialize;

use crate::cards::Card;
use crate::errors::ProviderError;

/// Base URL of the public deck-of-cards REST service.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api/deck";

/// Handle to a freshly shuffled remote deck.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckSession {
    pub deck_id: String,
    pub remaining: u32,
    pub success: bool,
}

/// Raw draw response. `cards` is optional on the wire; its absence is a
/// malformed payload, which the dealing layer reports as such.
#[derive(Debug, Deserialize)]
pub struct DrawResponse {
    #[serde(default)]
    pub cards: Option<Vec<Card>>,
    #[serde(default)]
    pub deck_id: Option<String>,
    #[serde(default)]
    pub remaining: Option<u32>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// External collaborator that hands out shuffled decks and draws cards
/// from them. The engine only ever consumes these two operations; tests
/// substitute a scripted implementation.
#[async_trait]
pub trait DeckProvider: Send + Sync {
    async fn new_shuffled_deck(&self) -> Result<DeckSession, ProviderError>;
    async fn draw_cards(&self, deck_id: &str, count: usize) -> Result<DrawResponse, ProviderError>;
}

/// HTTP implementation of [`DeckProvider`] over the deckofcardsapi-style
/// REST surface.
pub struct HttpDeckProvider {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDeckProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDeckProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeckProvider for HttpDeckProvider {
    async fn new_shuffled_deck(&self) -> Result<DeckSession, ProviderError> {
        let url = format!("{}/new/shuffle/", self.base_url);
        let session = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<DeckSession>()
            .await?;
        Ok(session)
    }

    async fn draw_cards(&self, deck_id: &str, count: usize) -> Result<DrawResponse, ProviderError> {
        let url = format!("{}/{}/draw/?count={}", self.base_url, deck_id, count);
        let response = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<DrawResponse>()
            .await?;
        Ok(response)
    }
}

/// Static face-image URL for a card code. Presentation layers fetch and
/// cache these; the engine only guarantees the code is stable.
pub fn card_image_url(code: &str) -> String {
    format!("https://deckofcardsapi.com/static/img/{code}.png")
}
