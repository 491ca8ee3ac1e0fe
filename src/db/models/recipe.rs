// src/db/models/recipe.rs

//! Recipe model - the parent record owning a set of ingredients

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// A Recipe row. `id` is `None` until the row has been inserted.
#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

impl Recipe {
    /// Create a new Recipe that has not been persisted yet
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: None,
            name,
            description,
        }
    }

    /// Insert this recipe into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO recipes (name, description) VALUES (?1, ?2)",
            params![&self.name, &self.description],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find a recipe by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, description FROM recipes WHERE id = ?1")?;

        let recipe = stmt.query_row([id], Self::from_row).optional()?;

        Ok(recipe)
    }

    /// List all recipes, newest first
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, description FROM recipes ORDER BY id DESC")?;

        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// List recipes whose name contains `needle`, newest first.
    ///
    /// INSTR is case-sensitive, unlike LIKE, which matches the search
    /// contract of the API.
    pub fn search_by_name(conn: &Connection, needle: &str) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, description FROM recipes
             WHERE INSTR(name, ?1) > 0 ORDER BY id DESC",
        )?;

        let recipes = stmt
            .query_map([needle], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(recipes)
    }

    /// Persist the current name and description
    pub fn update(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "UPDATE recipes SET name = ?1, description = ?2 WHERE id = ?3",
            params![&self.name, &self.description, &self.id],
        )?;
        Ok(())
    }

    /// Delete a recipe by ID. Returns false when no such row existed.
    ///
    /// Ingredients go with it via ON DELETE CASCADE.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let affected = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(affected > 0)
    }

    /// Convert a database row to a Recipe
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }
}
