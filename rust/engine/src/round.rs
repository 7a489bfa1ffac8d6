use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::RoundError;
use crate::player::Player;

/// One player's revealed card for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCard {
    pub player_id: usize,
    pub player_name: String,
    pub card: Card,
}

/// Outcome of a resolved round. `GameOver` also carries the final draw so
/// a presentation layer can still render the last battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Resolved {
        winner: String,
        drawn: Vec<DrawnCard>,
    },
    GameOver {
        winner: String,
        drawn: Vec<DrawnCard>,
    },
}

impl RoundOutcome {
    pub fn winner(&self) -> &str {
        match self {
            RoundOutcome::Resolved { winner, .. } | RoundOutcome::GameOver { winner, .. } => winner,
        }
    }

    pub fn drawn(&self) -> &[DrawnCard] {
        match self {
            RoundOutcome::Resolved { drawn, .. } | RoundOutcome::GameOver { drawn, .. } => drawn,
        }
    }
}

struct Draw {
    player: usize,
    card: Card,
    /// Pile size before this round's draw is removed; tie-break input
    pile_before: usize,
}

/// Plays one round of War across `players`.
///
/// Every player holding cards reveals one card picked uniformly at random
/// from their pile. The winner is decided by the tie-break chain, in
/// order: highest numeric rank, then largest pre-draw pile among the
/// rank-tied, then uniform random among those still tied. All revealed
/// cards move to the winner's pile and the winner's `rounds_won`
/// increments by one. Reaching `win_threshold` wins ends the game.
///
/// # Errors
///
/// Returns [`RoundError::InsufficientPlayers`] when fewer than 2 players
/// hold cards; no state is touched in that case.
pub fn resolve_round(
    players: &mut [Player],
    win_threshold: u32,
    rng: &mut impl Rng,
) -> Result<RoundOutcome, RoundError> {
    let participants: Vec<usize> = players
        .iter()
        .enumerate()
        .filter(|(_, p)| p.can_draw())
        .map(|(i, _)| i)
        .collect();
    if participants.len() < 2 {
        return Err(RoundError::InsufficientPlayers);
    }

    // Reveal one random card per eligible player. Cards stay in their
    // piles until the winner is fixed.
    let mut draws = Vec::with_capacity(participants.len());
    for &i in &participants {
        let pile = players[i].pile();
        let pick = rng.random_range(0..pile.len());
        draws.push(Draw {
            player: i,
            card: pile[pick].clone(),
            pile_before: pile.len(),
        });
    }

    let winner = pick_winner(&draws, rng);

    // Redistribute: append every revealed card to the winner's pile, then
    // remove each original from its owner by code. The winner's own card
    // sits ahead of the appended copies, so first-match removal deletes
    // the original and leaves exactly one.
    for draw in &draws {
        players[winner].add_card(draw.card.clone());
    }
    for draw in &draws {
        let _ = players[draw.player].remove_by_code(&draw.card.code);
    }
    players[winner].record_win();

    let winner_name = players[winner].name().to_string();
    let drawn = draws
        .into_iter()
        .map(|d| DrawnCard {
            player_id: players[d.player].id(),
            player_name: players[d.player].name().to_string(),
            card: d.card,
        })
        .collect();

    if players[winner].rounds_won() >= win_threshold {
        Ok(RoundOutcome::GameOver {
            winner: winner_name,
            drawn,
        })
    } else {
        Ok(RoundOutcome::Resolved {
            winner: winner_name,
            drawn,
        })
    }
}

/// Tie-break chain: rank, then pre-draw pile size, then uniform random.
fn pick_winner(draws: &[Draw], rng: &mut impl Rng) -> usize {
    let top_rank = draws
        .iter()
        .map(|d| d.card.numeric_value())
        .max()
        .unwrap_or(0);
    let mut candidates: Vec<&Draw> = draws
        .iter()
        .filter(|d| d.card.numeric_value() == top_rank)
        .collect();

    if candidates.len() > 1 {
        let top_pile = candidates.iter().map(|d| d.pile_before).max().unwrap_or(0);
        candidates.retain(|d| d.pile_before == top_pile);
    }

    if candidates.len() == 1 {
        candidates[0].player
    } else {
        candidates[rng.random_range(0..candidates.len())].player
    }
}
