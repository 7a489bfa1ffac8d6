use tracing::debug;

use crate::errors::DealError;
use crate::player::Player;
use crate::provider::DeckProvider;

/// Cards in one standard deck.
pub const DECK_SIZE: usize = 52;

/// Result of a successful deal: the remote deck handle plus the freshly
/// built players.
#[derive(Debug)]
pub struct Deal {
    pub deck_id: String,
    pub players: Vec<Player>,
    /// Cards actually dealt into piles (remainder cards are dropped)
    pub total_dealt: usize,
}

/// Acquires a shuffled deck from the provider and deals it into
/// `player_count` piles.
///
/// The draw request is always `player_count * 52` cards regardless of how
/// many the session actually holds; whatever comes back is split into
/// `player_count` contiguous chunks of `total / player_count` cards in
/// delivery order, and any remainder is dropped. Players are named
/// positionally ("Player 1".."Player N") and start with zero wins.
pub async fn acquire_and_deal(
    provider: &dyn DeckProvider,
    player_count: usize,
) -> Result<Deal, DealError> {
    if !(2..=4).contains(&player_count) {
        return Err(DealError::InvalidPlayerCount {
            count: player_count,
        });
    }

    let session = provider.new_shuffled_deck().await?;
    if !session.success {
        return Err(DealError::ProviderUnavailable {
            reason: "shuffle request not successful".to_string(),
        });
    }

    let response = provider
        .draw_cards(&session.deck_id, player_count * DECK_SIZE)
        .await?;
    let cards = response.cards.ok_or_else(|| DealError::MalformedResponse {
        reason: "draw response missing cards".to_string(),
    })?;
    if cards.is_empty() {
        return Err(DealError::ProviderUnavailable {
            reason: "deck provider returned no cards".to_string(),
        });
    }

    let per_player = cards.len() / player_count;
    if per_player == 0 {
        return Err(DealError::ProviderUnavailable {
            reason: format!(
                "only {} cards for {} players",
                cards.len(),
                player_count
            ),
        });
    }
    let total_dealt = per_player * player_count;
    debug!(
        deck_id = %session.deck_id,
        received = cards.len(),
        per_player,
        dropped = cards.len() - total_dealt,
        "dealing piles"
    );

    let players = cards
        .chunks(per_player)
        .take(player_count)
        .enumerate()
        .map(|(i, chunk)| Player::new(i, format!("Player {}", i + 1), chunk.to_vec()))
        .collect();

    Ok(Deal {
        deck_id: session.deck_id,
        players,
        total_dealt,
    })
}
