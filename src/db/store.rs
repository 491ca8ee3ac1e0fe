// src/db/store.rs

//! Repository interface over the recipe tables
//!
//! HTTP handlers depend on `RecipeStore`, not on SQLite directly, so the
//! request layer never sees a connection. `SqliteStore` is the only
//! implementation; it opens a short-lived connection per operation and
//! wraps multi-row writes in a transaction.

use crate::db;
use crate::db::models::{Ingredient, Recipe};
use crate::error::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use tracing::debug;

/// A recipe row together with its ingredient names, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Validated input for creating a recipe
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Validated input for a partial update
#[derive(Debug, Clone, Default)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    /// `Some` replaces the full ingredient set; `None` leaves it untouched
    pub ingredients: Option<Vec<String>>,
}

/// Storage operations for the recipe resource
pub trait RecipeStore {
    /// Load one recipe with its ingredients
    fn find_by_id(&self, id: i64) -> Result<Option<RecipeRecord>>;

    /// List recipes newest first, optionally filtered to names containing
    /// `name_filter` as a case-sensitive substring
    fn list(&self, name_filter: Option<&str>) -> Result<Vec<RecipeRecord>>;

    /// Persist a recipe and its ingredients in one transaction
    fn create(&self, new: NewRecipe) -> Result<RecipeRecord>;

    /// Apply a partial update. A supplied ingredients list replaces the
    /// prior set entirely. Returns `None` when the id does not exist.
    fn update(&self, id: i64, changes: RecipeChanges) -> Result<Option<RecipeRecord>>;

    /// Delete a recipe and, by cascade, its ingredients. Returns false
    /// when the id does not exist.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// SQLite-backed store
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn connect(&self) -> Result<Connection> {
        db::open(&self.db_path)
    }

    fn load_records(conn: &Connection, recipes: Vec<Recipe>) -> Result<Vec<RecipeRecord>> {
        let mut records = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            // Rows loaded from the database always carry an id
            let Some(id) = recipe.id else { continue };
            let ingredients = Ingredient::find_by_recipe(conn, id)?
                .into_iter()
                .map(|ingredient| ingredient.name)
                .collect();
            records.push(RecipeRecord {
                id,
                name: recipe.name,
                description: recipe.description,
                ingredients,
            });
        }
        Ok(records)
    }
}

impl RecipeStore for SqliteStore {
    fn find_by_id(&self, id: i64) -> Result<Option<RecipeRecord>> {
        let conn = self.connect()?;
        let Some(recipe) = Recipe::find_by_id(&conn, id)? else {
            return Ok(None);
        };
        let mut records = Self::load_records(&conn, vec![recipe])?;
        Ok(records.pop())
    }

    fn list(&self, name_filter: Option<&str>) -> Result<Vec<RecipeRecord>> {
        let conn = self.connect()?;
        let recipes = match name_filter {
            Some(needle) if !needle.is_empty() => Recipe::search_by_name(&conn, needle)?,
            _ => Recipe::list_all(&conn)?,
        };
        Self::load_records(&conn, recipes)
    }

    fn create(&self, new: NewRecipe) -> Result<RecipeRecord> {
        let mut conn = self.connect()?;
        db::transaction(&mut conn, |tx| {
            let mut recipe = Recipe::new(new.name, new.description);
            let id = recipe.insert(tx)?;

            let mut names = Vec::with_capacity(new.ingredients.len());
            for name in new.ingredients {
                let mut ingredient = Ingredient::new(name, id);
                ingredient.insert(tx)?;
                names.push(ingredient.name);
            }

            debug!("Created recipe {} with {} ingredients", id, names.len());
            Ok(RecipeRecord {
                id,
                name: recipe.name,
                description: recipe.description,
                ingredients: names,
            })
        })
    }

    fn update(&self, id: i64, changes: RecipeChanges) -> Result<Option<RecipeRecord>> {
        let mut conn = self.connect()?;
        db::transaction(&mut conn, |tx| {
            let Some(mut recipe) = Recipe::find_by_id(tx, id)? else {
                return Ok(None);
            };

            if let Some(name) = changes.name {
                recipe.name = name;
            }
            if let Some(description) = changes.description {
                recipe.description = description;
            }
            recipe.update(tx)?;

            // A present ingredients key replaces the whole set; an absent
            // key leaves the existing ingredients alone
            if let Some(names) = changes.ingredients {
                let removed = Ingredient::delete_by_recipe(tx, id)?;
                debug!("Replaced {} ingredients on recipe {}", removed, id);
                for name in names {
                    let mut ingredient = Ingredient::new(name, id);
                    ingredient.insert(tx)?;
                }
            }

            let ingredients = Ingredient::find_by_recipe(tx, id)?
                .into_iter()
                .map(|ingredient| ingredient.name)
                .collect();
            Ok(Some(RecipeRecord {
                id,
                name: recipe.name,
                description: recipe.description,
                ingredients,
            }))
        })
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.connect()?;
        Recipe::delete(&conn, id)
    }
}
