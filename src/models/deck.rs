//! Deck is a named set of cards
use super::Card;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            name: "My Deck".to_string(),
            cards: Vec::new(),
        }
    }
}

impl Deck {
    /// Cards with text on at least one side, in deck order.
    pub fn studyable_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.flashcard.has_content())
            .cloned()
            .collect()
    }
}
