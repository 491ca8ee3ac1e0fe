// src/db/mod.rs

//! SQLite access layer for the pantry service
//!
//! Connections always run with `PRAGMA foreign_keys = ON` so the
//! recipe -> ingredient cascade is enforced on every code path.

pub mod models;
pub mod schema;
mod store;

pub use store::{NewRecipe, RecipeChanges, RecipeRecord, RecipeStore, SqliteStore};

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

/// Open a connection with foreign key enforcement enabled
pub fn open(db_path: impl AsRef<Path>) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    Ok(conn)
}

/// Create the database if needed and bring the schema up to date
pub fn init(db_path: impl AsRef<Path>) -> Result<()> {
    let conn = open(db_path)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Run `f` inside a transaction, committing on success
pub fn transaction<T>(
    conn: &mut Connection,
    f: impl FnOnce(&rusqlite::Transaction) -> Result<T>,
) -> Result<T> {
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}
