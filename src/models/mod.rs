pub mod card;
pub mod clock;
pub mod deck;
pub mod due;
pub mod flashcard;
pub mod rating;
pub mod review_data;
pub mod scheduler;
pub mod session_stats;
pub mod study_session;

pub use card::Card;
pub use clock::{Clock, FixedClock, SystemClock};
pub use deck::Deck;
pub use flashcard::Flashcard;
pub use rating::ConfidenceRating;
pub use review_data::{ReviewSchedule, ReviewUpdate};
pub use scheduler::ReviewOutcome;
pub use session_stats::{Performance, SessionStats};
pub use study_session::StudySession;
