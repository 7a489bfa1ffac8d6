use serde::{Deserialize, Serialize};

/// Represents a single playing card as delivered by the deck provider.
/// Cards are immutable once created and are identified by their `code`
/// (rank+suit, e.g. `"AS"` for the ace of spades), which is unique within
/// a deck session and stable enough to key image lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Unique rank+suit identifier within a deck session (e.g. "KH")
    pub code: String,
    /// Rank token as reported by the provider ("2".."10", "JACK", "QUEEN", "KING", "ACE")
    pub value: String,
    /// Suit name, informational only (never used for ordering)
    #[serde(default)]
    pub suit: Option<String>,
    /// Provider-hosted card face image URL
    #[serde(default)]
    pub image: Option<String>,
}

impl Card {
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        let code = code.into();
        debug_assert!(!code.is_empty(), "card code must be non-empty");
        Self {
            code,
            value: value.into(),
            suit: None,
            image: None,
        }
    }

    /// Maps the rank token to its numeric value for round comparison.
    ///
    /// "2".."10" map to their literal value, JACK is 11, QUEEN 12, KING 13
    /// and ACE 14. Unknown tokens map to 0 rather than failing; the deck
    /// provider is trusted, so an unexpected token only loses the round.
    pub fn numeric_value(&self) -> u8 {
        match self.value.as_str() {
            "JACK" => 11,
            "QUEEN" => 12,
            "KING" => 13,
            "ACE" => 14,
            v => match v.parse::<u8>() {
                Ok(n @ 2..=10) => n,
                _ => 0,
            },
        }
    }
}

// Two cards with the same code are the same card; pile removal matches
// on code only.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Card {}
