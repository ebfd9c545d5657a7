use super::{Card, ConfidenceRating, ReviewOutcome};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Scheduling fields stored with every card.
///
/// `next_review_date` is kept as the stored ISO 8601 string so that values
/// written by other clients round-trip untouched; it is parsed when read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewSchedule {
    pub last_studied: Option<DateTime<Utc>>,
    pub next_review_date: Option<String>,
    /// Days, may be fractional. Zero for a card that was never studied.
    #[serde(deserialize_with = "non_negative_interval")]
    pub review_interval: f64,
}

/// Clamps an interval to `>= 0`; NaN becomes 0.
pub fn clamp_interval(days: f64) -> f64 {
    days.max(0.0)
}

fn non_negative_interval<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_interval)
}

/// Fields written back to storage after a rating, keyed by card id.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewUpdate {
    pub card_id: i64,
    pub confidence_level: Option<ConfidenceRating>,
    pub last_studied: DateTime<Utc>,
    pub next_review_date: String,
    pub review_interval: f64,
    pub study_count: u32,
}

impl ReviewUpdate {
    /// Update for `card` after it was rated at `now`. An unrecognized rating
    /// is passed as `None` and leaves no confidence level.
    pub fn from_outcome(
        card: &Card,
        rating: Option<ConfidenceRating>,
        outcome: &ReviewOutcome,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            card_id: card.id,
            confidence_level: rating,
            last_studied: now,
            next_review_date: outcome.next_review_date_string(),
            review_interval: outcome.new_interval_days,
            study_count: card.study_count.saturating_add(1),
        }
    }
}
