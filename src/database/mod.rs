//! SQLite-backed card store.

pub mod db;

use crate::models::ReviewUpdate;
use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persists the scheduling fields produced by a rating. Concurrent writers for
/// the same card are not reconciled; the last write wins.
pub trait ReviewStore {
    fn save_review(&self, update: &ReviewUpdate) -> StoreResult<()>;
}

/// Owns the connection used by the study flow.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: db::init_database(path)?,
        })
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        db::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

impl ReviewStore for Database {
    fn save_review(&self, update: &ReviewUpdate) -> StoreResult<()> {
        db::update_review(update, &self.conn)
    }
}
