//! Selection of cards that are due for review.
//!
//! A card with no next review date has never been scheduled and is always due.
//! A stored date that cannot be parsed makes the card not due; it is logged
//! and skipped so one bad row never aborts the selection.

use super::{Card, ReviewSchedule};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// `%.f` also matches a missing fraction, `%#z` an offset without minutes.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a stored next review date.
///
/// RFC 3339 is tried first, then ISO 8601 variants other clients write: a
/// space separator, an hour-only offset (`+00`), no offset, or a bare date.
/// Values without an offset are read as UTC; a bare date means midnight.
pub fn parse_review_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(raw, format).ok())
        .map(|date| date.with_timezone(&Utc))
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// Due when unscheduled, or when `now` is at or past the next review date.
pub fn is_due(schedule: &ReviewSchedule, now: DateTime<Utc>) -> bool {
    let Some(raw) = schedule.next_review_date.as_deref() else {
        return true;
    };

    match parse_review_date(raw) {
        Some(review_date) => now >= review_date,
        None => {
            log::warn!("Ignoring card with malformed next review date {raw:?}");
            false
        }
    }
}

/// Due cards in input order.
pub fn select_due_cards(cards: &[Card], now: DateTime<Utc>) -> Vec<Card> {
    cards
        .iter()
        .filter(|card| is_due(&card.schedule, now))
        .cloned()
        .collect()
}

/// Whole days until the card is due, rounded up; 0 once due.
pub fn days_left(schedule: &ReviewSchedule, now: DateTime<Utc>) -> i64 {
    let Some(review_date) = schedule
        .next_review_date
        .as_deref()
        .and_then(parse_review_date)
    else {
        return 0;
    };

    let millis = (review_date - now).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Flashcard;
    use chrono::{TimeDelta, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn card(id: i64, next_review_date: Option<&str>) -> Card {
        let mut card = Card::new(id, "Test Deck", Flashcard::new("front", "back"));
        card.schedule.next_review_date = next_review_date.map(str::to_string);
        card
    }

    #[test]
    fn test_unscheduled_is_due() {
        let mut schedule = ReviewSchedule::default();
        schedule.review_interval = 30.0;
        schedule.last_studied = Some(now() + TimeDelta::days(5));
        assert!(is_due(&schedule, now()));
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let schedule = ReviewSchedule {
            next_review_date: Some("2024-01-01T12:00:00.000Z".to_string()),
            ..Default::default()
        };
        assert!(is_due(&schedule, now()));
    }

    #[test]
    fn test_future_date_is_not_due() {
        let schedule = ReviewSchedule {
            next_review_date: Some("2024-01-02T12:00:00.000Z".to_string()),
            ..Default::default()
        };
        assert!(!is_due(&schedule, now()));
    }

    #[test]
    fn test_offset_dates_compare_as_instants() {
        // 13:00 at +02:00 is 11:00 UTC
        let schedule = ReviewSchedule {
            next_review_date: Some("2024-01-01T13:00:00+02:00".to_string()),
            ..Default::default()
        };
        assert!(is_due(&schedule, now()));
    }

    #[test]
    fn test_other_iso_forms_are_parsed() {
        let jan_first = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for raw in [
            "2024-01-01",
            "2024-01-01T00:00:00",
            "2024-01-01T00:00:00.000",
            "2024-01-01 00:00:00",
            "2024-01-01 00:00:00+00",
            "2024-01-01 00:00:00+00:00",
            "2024-01-01 00:00:00.123+00",
            "2024-01-01T02:00:00+02",
            "2024-01-01T00:00:00Z",
        ] {
            let parsed = parse_review_date(raw);
            assert!(parsed.is_some(), "{raw}");
            assert_eq!(parsed.unwrap().date_naive(), jan_first.date_naive(), "{raw}");

            let schedule = ReviewSchedule {
                next_review_date: Some(raw.to_string()),
                ..Default::default()
            };
            assert!(is_due(&schedule, now()), "{raw}");
        }

        assert_eq!(parse_review_date("2024-01-01"), Some(jan_first));
        assert_eq!(parse_review_date("2024-01-01T00:00:00"), Some(jan_first));
        assert_eq!(parse_review_date("2024-01-01 00:00:00+00"), Some(jan_first));
    }

    #[test]
    fn test_malformed_date_is_not_due() {
        let schedule = ReviewSchedule {
            next_review_date: Some("not a date".to_string()),
            ..Default::default()
        };
        assert!(!is_due(&schedule, now()));
    }

    #[test]
    fn test_select_empty() {
        assert!(select_due_cards(&[], now()).is_empty());
    }

    #[test]
    fn test_select_preserves_order() {
        let cards = vec![
            card(1, None),
            card(2, Some("2024-01-05T00:00:00.000Z")),
            card(3, Some("2023-12-31T00:00:00.000Z")),
        ];

        let due: Vec<i64> = select_due_cards(&cards, now()).iter().map(|c| c.id).collect();
        assert_eq!(due, vec![1, 3]);
    }

    #[test]
    fn test_select_skips_malformed_card_only() {
        let cards = vec![card(1, Some("garbage")), card(2, None), card(2, None)];

        let due = select_due_cards(&cards, now());
        assert_eq!(due.len(), 2);
        assert!(due.iter().all(|c| c.id == 2));
    }

    #[test]
    fn test_select_all_due_returns_full_copy() {
        let cards = vec![card(3, None), card(1, None), card(2, None)];
        assert_eq!(select_due_cards(&cards, now()), cards);
    }

    #[test]
    fn test_days_left() {
        let mut schedule = ReviewSchedule::default();
        assert_eq!(days_left(&schedule, now()), 0);

        schedule.next_review_date = Some("2024-01-02T13:00:00.000Z".to_string());
        assert_eq!(days_left(&schedule, now()), 2);

        schedule.next_review_date = Some("2024-01-02T12:00:00.000Z".to_string());
        assert_eq!(days_left(&schedule, now()), 1);

        schedule.next_review_date = Some("2023-12-25T00:00:00.000Z".to_string());
        assert_eq!(days_left(&schedule, now()), 0);
    }

    #[test]
    fn test_days_left_rounds_up_sub_second() {
        let schedule = ReviewSchedule {
            next_review_date: Some("2024-01-01T12:00:00.500Z".to_string()),
            ..Default::default()
        };
        assert!(!is_due(&schedule, now()));
        assert_eq!(days_left(&schedule, now()), 1);
    }
}
