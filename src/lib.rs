pub mod config;
pub mod database;
pub mod export;
pub mod models;

pub use config::Config;
pub use database::{Database, ReviewStore, StoreError};
pub use models::{
    Card, Clock, ConfidenceRating, Deck, FixedClock, Flashcard, ReviewOutcome, ReviewSchedule,
    ReviewUpdate, SessionStats, StudySession, SystemClock,
};
pub use models::due::{is_due, select_due_cards};
pub use models::scheduler::{compute_next_review, compute_next_review_for_label};
