//! Database operations for the flashcard store
//!
//! Handles SQLite initialization and CRUD for decks and cards, including the
//! scheduling fields written after every rating.

use super::{StoreError, StoreResult};
use crate::models::review_data::clamp_interval;
use crate::models::{Card, ConfidenceRating, Deck, Flashcard, ReviewSchedule, ReviewUpdate};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;

const CARD_COLUMNS: &str = "id, deck_name, front, back, last_studied, next_review_date,
     review_interval, confidence_level, study_count";

/// Opens (or creates) the database file and ensures the schema exists
pub fn init_database(path: impl AsRef<Path>) -> StoreResult<Connection> {
    let path = path.as_ref();
    let conn = Connection::open(path)?;
    init_schema(&conn)?;
    log::debug!("Opened card store at {}", path.display());
    Ok(conn)
}

/// Creates tables for decks and cards if missing
pub fn init_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS decks (
            name TEXT PRIMARY KEY
        );

        CREATE TABLE IF NOT EXISTS cards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            deck_name TEXT NOT NULL,
            front TEXT NOT NULL DEFAULT '',
            back TEXT NOT NULL DEFAULT '',
            last_studied TEXT,
            next_review_date TEXT,
            review_interval REAL NOT NULL DEFAULT 0,
            confidence_level TEXT,
            study_count INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY (deck_name) REFERENCES decks(name) ON DELETE CASCADE
        );",
    )?;
    Ok(())
}

/// Creates a new deck
pub fn new_deck(name: &str, conn: &Connection) -> StoreResult<()> {
    conn.execute("INSERT INTO decks (name) VALUES (?1)", params![name])?;
    log::info!("Deck '{name}' created");
    Ok(())
}

/// Retrieves all deck names, sorted
pub fn get_all_decks(conn: &Connection) -> StoreResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM decks ORDER BY name")?;
    let decks = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<String>>>()?;
    Ok(decks)
}

/// Deletes a deck together with its cards
pub fn delete_deck(name: &str, conn: &Connection) -> StoreResult<()> {
    conn.execute("DELETE FROM cards WHERE deck_name = ?1", params![name])?;
    let removed = conn.execute("DELETE FROM decks WHERE name = ?1", params![name])?;
    if removed == 0 {
        return Err(StoreError::NotFound(format!("deck '{name}'")));
    }
    log::info!("Deck '{name}' deleted");
    Ok(())
}

/// Adds an unscheduled card to a deck and returns its id
pub fn add_card(deck_name: &str, flashcard: &Flashcard, conn: &Connection) -> StoreResult<i64> {
    ensure_deck_exists(deck_name, conn)?;
    conn.execute(
        "INSERT INTO cards (deck_name, front, back) VALUES (?1, ?2, ?3)",
        params![deck_name, flashcard.front, flashcard.back],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replaces the text of a card, keeping its schedule
pub fn update_card_content(card_id: i64, flashcard: &Flashcard, conn: &Connection) -> StoreResult<()> {
    let changed = conn.execute(
        "UPDATE cards SET front = ?1, back = ?2 WHERE id = ?3",
        params![flashcard.front, flashcard.back, card_id],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound(format!("card {card_id}")));
    }
    Ok(())
}

pub fn delete_card(card_id: i64, conn: &Connection) -> StoreResult<()> {
    let removed = conn.execute("DELETE FROM cards WHERE id = ?1", params![card_id])?;
    if removed == 0 {
        return Err(StoreError::NotFound(format!("card {card_id}")));
    }
    Ok(())
}

pub fn get_card(card_id: i64, conn: &Connection) -> StoreResult<Card> {
    let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?1");
    conn.query_row(&sql, params![card_id], card_from_row)
        .optional()?
        .ok_or_else(|| StoreError::NotFound(format!("card {card_id}")))
}

/// Retrieves every card of a deck in insertion order
pub fn get_cards_for_deck(deck_name: &str, conn: &Connection) -> StoreResult<Vec<Card>> {
    let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE deck_name = ?1 ORDER BY id");
    let mut stmt = conn.prepare(&sql)?;
    let cards = stmt
        .query_map(params![deck_name], card_from_row)?
        .collect::<rusqlite::Result<Vec<Card>>>()?;
    Ok(cards)
}

/// Loads a deck with all of its cards
pub fn load_deck(deck_name: &str, conn: &Connection) -> StoreResult<Deck> {
    ensure_deck_exists(deck_name, conn)?;
    Ok(Deck {
        name: deck_name.to_string(),
        cards: get_cards_for_deck(deck_name, conn)?,
    })
}

/// Inserts an imported deck, creating it if needed. Card ids from the file
/// are ignored; scheduling fields are kept, negative intervals stored as 0.
pub fn import_deck(deck: &Deck, conn: &mut Connection) -> StoreResult<usize> {
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT OR IGNORE INTO decks (name) VALUES (?1)",
        params![deck.name],
    )?;
    for card in &deck.cards {
        tx.execute(
            "INSERT INTO cards (deck_name, front, back, last_studied, next_review_date,
                 review_interval, confidence_level, study_count)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                deck.name,
                card.flashcard.front,
                card.flashcard.back,
                card.schedule.last_studied.map(format_timestamp),
                card.schedule.next_review_date,
                clamp_interval(card.schedule.review_interval),
                card.confidence_level.map(ConfidenceRating::label),
                card.study_count,
            ],
        )?;
    }
    tx.commit()?;
    log::info!("Imported {} cards into '{}'", deck.cards.len(), deck.name);
    Ok(deck.cards.len())
}

/// Writes the scheduling fields produced by a rating
pub fn update_review(update: &ReviewUpdate, conn: &Connection) -> StoreResult<()> {
    let changed = conn.execute(
        "UPDATE cards
         SET confidence_level = ?1, last_studied = ?2, next_review_date = ?3,
             review_interval = ?4, study_count = ?5
         WHERE id = ?6",
        params![
            update.confidence_level.map(ConfidenceRating::label),
            format_timestamp(update.last_studied),
            update.next_review_date,
            update.review_interval,
            update.study_count,
            update.card_id,
        ],
    )?;
    if changed == 0 {
        return Err(StoreError::NotFound(format!("card {}", update.card_id)));
    }
    log::debug!(
        "Card {} next review {} (interval {} days)",
        update.card_id,
        update.next_review_date,
        update.review_interval
    );
    Ok(())
}

fn ensure_deck_exists(deck_name: &str, conn: &Connection) -> StoreResult<()> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM decks WHERE name = ?1",
            params![deck_name],
            |row| row.get(0),
        )
        .optional()?;
    exists
        .map(|_| ())
        .ok_or_else(|| StoreError::NotFound(format!("deck '{deck_name}'")))
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn card_from_row(row: &Row<'_>) -> rusqlite::Result<Card> {
    let last_studied: Option<String> = row.get(4)?;
    let confidence_level: Option<String> = row.get(7)?;

    Ok(Card {
        id: row.get(0)?,
        deck_name: row.get(1)?,
        flashcard: Flashcard {
            front: row.get(2)?,
            back: row.get(3)?,
        },
        schedule: ReviewSchedule {
            // informational only, an unreadable value is dropped
            last_studied: last_studied
                .as_deref()
                .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
                .map(|date| date.with_timezone(&Utc)),
            next_review_date: row.get(5)?,
            review_interval: clamp_interval(row.get(6)?),
        },
        confidence_level: confidence_level.as_deref().and_then(ConfidenceRating::from_label),
        study_count: row.get(8)?,
    })
}
