use thiserror::Error;

/// Errors raised by the external deck provider boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("deck request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("deck provider rejected the request")]
    Rejected,
}

/// Errors raised while acquiring a deck and dealing piles. Every deal
/// error leaves the game in `NotStarted`; no partial player list is ever
/// installed.
#[derive(Debug, Error)]
pub enum DealError {
    #[error("player count {count} out of range (2-4)")]
    InvalidPlayerCount { count: usize },
    #[error("deck provider unavailable: {reason}")]
    ProviderUnavailable { reason: String },
    #[error("malformed deck response: {reason}")]
    MalformedResponse { reason: String },
}

impl From<ProviderError> for DealError {
    fn from(err: ProviderError) -> Self {
        DealError::ProviderUnavailable {
            reason: err.to_string(),
        }
    }
}

/// Errors raised while resolving a round.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("fewer than 2 players hold cards")]
    InsufficientPlayers,
}
