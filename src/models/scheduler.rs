//! Fixed-multiplier interval scheduler.
//!
//! Each rating maps the current interval (in days) to a new one:
//! - again: 0.1 regardless of the current interval
//! - hard: current * 1.2, at least 1
//! - good: current * 2.5, at least 3
//! - easy: current * 3, at least 7
//! - unrecognized: 1
//!
//! The next review is `now` plus the whole days of the new interval, so the
//! fractional `again` interval lands on `now` and the card is due at once.

use super::ConfidenceRating;
use chrono::{DateTime, NaiveDate, SecondsFormat, TimeDelta, Utc};

const AGAIN_INTERVAL: f64 = 0.1;
const DEFAULT_INTERVAL: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReviewOutcome {
    pub next_review_timestamp: DateTime<Utc>,
    pub new_interval_days: f64,
}

impl ReviewOutcome {
    /// ISO 8601 with millisecond precision, e.g. `2024-01-04T00:00:00.000Z`.
    pub fn next_review_date_string(&self) -> String {
        self.next_review_timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// New interval in days for a rating. `None` stands for a label outside the
/// four known ratings.
pub fn next_interval(rating: Option<ConfidenceRating>, current_interval_days: f64) -> f64 {
    match rating {
        Some(ConfidenceRating::Again) => AGAIN_INTERVAL,
        Some(ConfidenceRating::Hard) => (current_interval_days * 1.2).max(1.0),
        Some(ConfidenceRating::Good) => (current_interval_days * 2.5).max(3.0),
        Some(ConfidenceRating::Easy) => (current_interval_days * 3.0).max(7.0),
        None => DEFAULT_INTERVAL,
    }
}

/// Computes the new interval and the instant the card becomes due again.
pub fn compute_next_review(
    rating: Option<ConfidenceRating>,
    current_interval_days: f64,
    now: DateTime<Utc>,
) -> ReviewOutcome {
    let new_interval_days = next_interval(rating, current_interval_days);

    ReviewOutcome {
        next_review_timestamp: add_whole_days(now, new_interval_days),
        new_interval_days,
    }
}

/// Same as [`compute_next_review`] for a raw label such as `"good"`.
pub fn compute_next_review_for_label(
    label: &str,
    current_interval_days: f64,
    now: DateTime<Utc>,
) -> ReviewOutcome {
    compute_next_review(
        ConfidenceRating::from_label(label),
        current_interval_days,
        now,
    )
}

/// Latest next review date written: the last millisecond of year 9999.
/// Later instants need the extended `+YYYYY` year form, which RFC 3339
/// parsers (including ours) reject.
pub fn latest_review_date() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|date| date.and_hms_milli_opt(23, 59, 59, 999))
        .map(|latest| latest.and_utc())
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

// Clamped to `latest_review_date` so long easy streaks never overflow.
fn add_whole_days(now: DateTime<Utc>, interval_days: f64) -> DateTime<Utc> {
    let days = interval_days.floor();
    if days <= 0.0 {
        return now;
    }

    let latest = latest_review_date().max(now);
    TimeDelta::try_days(days.min(i64::MAX as f64) as i64)
        .and_then(|delta| now.checked_add_signed(delta))
        .map_or(latest, |next| next.min(latest))
}
