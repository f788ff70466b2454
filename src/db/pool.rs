//! SQLite connection handle (lightweight, explicitly injected).
//!
//! The store handle is passed down by the caller instead of living in
//! module-level state, so embedders and tests choose where the data lives.

use rusqlite::{Connection, Result};
use std::path::Path;

use crate::config::Config;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Open the database configured for this installation.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        Self::new(&cfg.database)
    }

    /// Throwaway in-memory database, used by tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", "ON")?;
        Ok(Self { conn })
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}
