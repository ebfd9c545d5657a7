//! Study session: one pass through a set of cards, rating each once.
//!
//! Every rating recomputes the card's schedule, updates the in-memory copy,
//! advances to the next card and then hands the new fields to the store.

use super::{Card, Clock, ConfidenceRating, ReviewUpdate, SessionStats, scheduler};
use crate::database::{ReviewStore, StoreError};

pub struct StudySession {
    pub deck_name: String,
    pub cards: Vec<Card>,
    pub current_index: usize,
    pub show_answer: bool,
    pub stats: SessionStats,
}

impl StudySession {
    /// Blank cards are dropped; pass due cards only to study what is due.
    pub fn new(deck_name: impl Into<String>, cards: Vec<Card>) -> Self {
        let cards = cards
            .into_iter()
            .filter(|card| card.flashcard.has_content())
            .collect();

        Self {
            deck_name: deck_name.into(),
            cards,
            current_index: 0,
            show_answer: false,
            stats: SessionStats::default(),
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current_index)
    }

    pub fn reveal_answer(&mut self) {
        self.show_answer = true;
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.cards.len()
    }

    pub fn total_count(&self) -> usize {
        self.cards.len()
    }

    /// Position of the current card as a share of the session, 1-based.
    pub fn progress_percent(&self) -> f64 {
        if self.cards.is_empty() {
            return 100.0;
        }
        let position = (self.current_index + 1).min(self.cards.len());
        position as f64 * 100.0 / self.cards.len() as f64
    }

    /// Rates the current card. Returns `Ok(None)` once the session is over.
    ///
    /// The session moves on even if the store rejects the update; the error is
    /// returned so the caller can decide whether to continue.
    pub fn rate_current_card(
        &mut self,
        rating: ConfidenceRating,
        clock: &dyn Clock,
        store: &dyn ReviewStore,
    ) -> Result<Option<ReviewUpdate>, StoreError> {
        let Some(card) = self.cards.get_mut(self.current_index) else {
            return Ok(None);
        };

        let now = clock.now();
        let outcome =
            scheduler::compute_next_review(Some(rating), card.schedule.review_interval, now);

        let update = ReviewUpdate::from_outcome(card, Some(rating), &outcome, now);
        card.apply_update(&update);

        self.stats.record(rating);
        self.current_index += 1;
        self.show_answer = false;

        if let Err(err) = store.save_review(&update) {
            log::error!("Failed to save rating for card {}: {err}", update.card_id);
            return Err(err);
        }

        Ok(Some(update))
    }

    pub fn summary(&self) -> String {
        let performance = self.stats.performance();
        let mut lines = vec![format!(
            "{}: {} cards studied. {}",
            self.deck_name,
            self.stats.total(),
            performance.message()
        )];
        for rating in ConfidenceRating::ALL {
            let count = self.stats.count(rating);
            if count > 0 {
                lines.push(format!(
                    "  {:<6} {:>3} ({}%)",
                    rating.label(),
                    count,
                    self.stats.percent(rating)
                ));
            }
        }
        lines.join("\n")
    }
}
