//! Flashcard is a pair <front, back>. Only text is used on either side
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// True when at least one side has non-blank text. Blank cards are kept in
    /// the deck but never studied.
    pub fn has_content(&self) -> bool {
        !self.front.trim().is_empty() || !self.back.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flashcard_creation() {
        let card = Flashcard::new("hello", "cześć");

        assert_eq!(card.front, "hello");
        assert_eq!(card.back, "cześć");
    }

    #[test]
    fn test_has_content() {
        assert!(Flashcard::new("hello", "").has_content());
        assert!(Flashcard::new("  ", "cześć").has_content());
        assert!(!Flashcard::new(" \t", "\n").has_content());
        assert!(!Flashcard::default().has_content());
    }
}
