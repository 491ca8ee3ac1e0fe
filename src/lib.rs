// src/lib.rs

//! Pantry Recipe Service
//!
//! A small CRUD web service exposing recipes with nested ingredients,
//! backed by SQLite.
//!
//! # Architecture
//!
//! - Database-first: all state lives in SQLite, schema managed by a
//!   versioned migration
//! - Repository seam: HTTP handlers depend on the `RecipeStore` trait,
//!   not on SQLite directly
//! - Cascade ownership: deleting a recipe deletes its ingredients in the
//!   same statement via foreign keys

pub mod db;
mod error;
pub mod server;

pub use error::{Error, Result};
