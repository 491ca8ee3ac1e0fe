// src/server/payload.rs

//! Request/response bodies and field-level validation for the recipe API
//!
//! Payload fields are all optional at the serde level so that a missing
//! field produces a per-field validation message instead of a bare
//! deserialization failure. Wrong-type fields are still rejected by serde
//! at extraction time.

use crate::db::{NewRecipe, RecipeChanges, RecipeRecord};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const REQUIRED: &str = "this field is required";
const BLANK: &str = "this field may not be blank";

/// Incoming ingredient object
#[derive(Debug, Deserialize)]
pub struct IngredientPayload {
    pub name: Option<String>,
}

/// Incoming recipe object, for both create and partial update
#[derive(Debug, Deserialize)]
pub struct RecipePayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<IngredientPayload>>,
}

/// Outgoing ingredient object
#[derive(Debug, Serialize)]
pub struct IngredientBody {
    pub name: String,
}

/// Outgoing recipe object. `id` is output-only.
#[derive(Debug, Serialize)]
pub struct RecipeBody {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub ingredients: Vec<IngredientBody>,
}

impl From<RecipeRecord> for RecipeBody {
    fn from(record: RecipeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            ingredients: record
                .ingredients
                .into_iter()
                .map(|name| IngredientBody { name })
                .collect(),
        }
    }
}

/// Validate a create payload. `name` and `description` are required and
/// non-blank; an absent `ingredients` key means an empty list.
pub fn validate_create(payload: RecipePayload) -> Result<NewRecipe> {
    let mut fields = BTreeMap::new();

    let name = require(&mut fields, "name", payload.name);
    let description = require(&mut fields, "description", payload.description);
    let ingredients =
        collect_ingredients(&mut fields, payload.ingredients).unwrap_or_default();

    match (name, description) {
        (Some(name), Some(description)) if fields.is_empty() => Ok(NewRecipe {
            name,
            description,
            ingredients,
        }),
        _ => Err(Error::Validation(fields)),
    }
}

/// Validate a partial update payload. Absent fields stay untouched;
/// supplied fields must be non-blank.
pub fn validate_update(payload: RecipePayload) -> Result<RecipeChanges> {
    let mut fields = BTreeMap::new();

    if matches!(payload.name.as_deref(), Some("")) {
        fields.insert("name".to_string(), BLANK.to_string());
    }
    if matches!(payload.description.as_deref(), Some("")) {
        fields.insert("description".to_string(), BLANK.to_string());
    }
    let ingredients = collect_ingredients(&mut fields, payload.ingredients);

    if !fields.is_empty() {
        return Err(Error::Validation(fields));
    }

    Ok(RecipeChanges {
        name: payload.name,
        description: payload.description,
        ingredients,
    })
}

fn require(
    fields: &mut BTreeMap<String, String>,
    key: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        Some(_) => {
            fields.insert(key.to_string(), BLANK.to_string());
            None
        }
        None => {
            fields.insert(key.to_string(), REQUIRED.to_string());
            None
        }
    }
}

fn collect_ingredients(
    fields: &mut BTreeMap<String, String>,
    items: Option<Vec<IngredientPayload>>,
) -> Option<Vec<String>> {
    let items = items?;
    let mut names = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item.name {
            Some(name) if !name.is_empty() => names.push(name),
            Some(_) => {
                fields.insert(format!("ingredients[{index}].name"), BLANK.to_string());
            }
            None => {
                fields.insert(format!("ingredients[{index}].name"), REQUIRED.to_string());
            }
        }
    }
    Some(names)
}
