// src/db/models/ingredient.rs

//! Ingredient model - child record belonging to exactly one recipe

use crate::error::Result;
use rusqlite::{Connection, Row, params};

/// An Ingredient row. Cannot exist without a parent recipe.
#[derive(Debug, Clone)]
pub struct Ingredient {
    pub id: Option<i64>,
    pub name: String,
    pub recipe_id: i64,
}

impl Ingredient {
    /// Create a new Ingredient that has not been persisted yet
    pub fn new(name: String, recipe_id: i64) -> Self {
        Self {
            id: None,
            name,
            recipe_id,
        }
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (name, recipe_id) VALUES (?1, ?2)",
            params![&self.name, &self.recipe_id],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Find all ingredients for a recipe, in insertion order
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, recipe_id FROM ingredients WHERE recipe_id = ?1 ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Delete all ingredients for a recipe, returning how many were removed
    pub fn delete_by_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let affected = conn.execute("DELETE FROM ingredients WHERE recipe_id = ?1", [recipe_id])?;
        Ok(affected)
    }

    /// Convert a database row to an Ingredient
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            recipe_id: row.get(2)?,
        })
    }
}
