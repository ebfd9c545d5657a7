//! A stored card: content plus the scheduling state the study flow updates.
use super::{ConfidenceRating, Flashcard, ReviewSchedule, ReviewUpdate};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub deck_name: String,
    #[serde(flatten)]
    pub flashcard: Flashcard,
    #[serde(flatten)]
    pub schedule: ReviewSchedule,
    #[serde(default)]
    pub confidence_level: Option<ConfidenceRating>,
    #[serde(default)]
    pub study_count: u32,
}

impl Card {
    /// A card that has never been studied.
    pub fn new(id: i64, deck_name: impl Into<String>, flashcard: Flashcard) -> Self {
        Self {
            id,
            deck_name: deck_name.into(),
            flashcard,
            schedule: ReviewSchedule::default(),
            confidence_level: None,
            study_count: 0,
        }
    }

    /// Copies a persisted rating back onto the in-memory card.
    pub fn apply_update(&mut self, update: &ReviewUpdate) {
        self.schedule.last_studied = Some(update.last_studied);
        self.schedule.next_review_date = Some(update.next_review_date.clone());
        self.schedule.review_interval = update.review_interval;
        self.confidence_level = update.confidence_level;
        self.study_count = update.study_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_new_card_is_unscheduled() {
        let card = Card::new(1, "Polish", Flashcard::new("tak", "yes"));
        assert_eq!(card.schedule.next_review_date, None);
        assert_eq!(card.schedule.review_interval, 0.0);
        assert_eq!(card.study_count, 0);
    }

    #[test]
    fn test_apply_update() {
        let mut card = Card::new(7, "Polish", Flashcard::new("nie", "no"));
        let studied = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        card.apply_update(&ReviewUpdate {
            card_id: 7,
            confidence_level: Some(ConfidenceRating::Good),
            last_studied: studied,
            next_review_date: "2024-01-04T00:00:00.000Z".to_string(),
            review_interval: 3.0,
            study_count: 1,
        });

        assert_eq!(card.schedule.last_studied, Some(studied));
        assert_eq!(
            card.schedule.next_review_date.as_deref(),
            Some("2024-01-04T00:00:00.000Z")
        );
        assert_eq!(card.schedule.review_interval, 3.0);
        assert_eq!(card.confidence_level, Some(ConfidenceRating::Good));
        assert_eq!(card.study_count, 1);
    }

    #[test]
    fn test_deserialize_flat_json_with_missing_schedule() {
        let card: Card = serde_json::from_str(r#"{"front": "dom", "back": "house"}"#).unwrap();
        assert_eq!(card.flashcard, Flashcard::new("dom", "house"));
        assert_eq!(card.schedule, ReviewSchedule::default());
    }
}
