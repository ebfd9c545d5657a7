//! JSON import/export for decks, scheduling state included.

use crate::models::Deck;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes a deck as pretty JSON to the given path.
pub fn export_json_to_path(deck: &Deck, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(deck)?;
    fs::write(path, json_string)?;
    log::info!(
        "Deck '{}' exported to '{}' ({} cards)",
        deck.name,
        path.display(),
        deck.cards.len()
    );
    Ok(())
}

/// Reads a deck from a JSON file. Cards without scheduling fields come back
/// unscheduled.
pub fn import_json(path: impl AsRef<Path>) -> Result<Deck, ExportError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let deck: Deck = serde_json::from_str(&contents)?;

    log::info!("Deck '{}' imported from '{}'", deck.name, path.display());
    Ok(deck)
}
