// src/error.rs
//! Error types for the pantry service

use std::collections::BTreeMap;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while handling a recipe request
#[derive(Error, Debug)]
pub enum Error {
    /// Payload failed field-level validation (maps to 400)
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    /// Id did not resolve to a record (maps to 404)
    #[error("{0} not found")]
    NotFound(String),

    /// Database failure (maps to 500)
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// I/O failure (maps to 500)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
