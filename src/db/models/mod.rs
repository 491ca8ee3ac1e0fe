// src/db/models/mod.rs

//! Data models for the recipe database tables
//!
//! Rust structs that correspond one-to-one with database tables, with
//! methods for creating, reading, updating, and deleting rows.

mod ingredient;
mod recipe;

pub use ingredient::Ingredient;
pub use recipe::Recipe;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema;
    use rusqlite::Connection;
    use tempfile::NamedTempFile;

    fn create_test_db() -> (NamedTempFile, Connection) {
        let temp_file = NamedTempFile::new().unwrap();
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute("PRAGMA foreign_keys = ON", []).unwrap();
        schema::migrate(&conn).unwrap();
        (temp_file, conn)
    }

    #[test]
    fn test_recipe_crud() {
        let (_temp, conn) = create_test_db();

        // Create a recipe
        let mut recipe = Recipe::new("Pizza".to_string(), "Put in the oven".to_string());
        let id = recipe.insert(&conn).unwrap();
        assert!(id > 0);
        assert_eq!(recipe.id, Some(id));

        // Find by ID
        let found = Recipe::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(found.name, "Pizza");
        assert_eq!(found.description, "Put in the oven");

        // Update
        let mut changed = found.clone();
        changed.name = "Pizza 2".to_string();
        changed.update(&conn).unwrap();
        let reloaded = Recipe::find_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(reloaded.name, "Pizza 2");
        assert_eq!(reloaded.description, "Put in the oven");

        // List all
        let all = Recipe::list_all(&conn).unwrap();
        assert_eq!(all.len(), 1);

        // Delete
        let deleted = Recipe::delete(&conn, id).unwrap();
        assert!(deleted);
        let gone = Recipe::find_by_id(&conn, id).unwrap();
        assert!(gone.is_none());
    }

    #[test]
    fn test_recipe_delete_missing_returns_false() {
        let (_temp, conn) = create_test_db();

        let deleted = Recipe::delete(&conn, 99).unwrap();
        assert!(!deleted);
    }

    #[test]
    fn test_recipe_list_newest_first() {
        let (_temp, conn) = create_test_db();

        let mut first = Recipe::new("Soup".to_string(), "Simmer".to_string());
        let first_id = first.insert(&conn).unwrap();
        let mut second = Recipe::new("Salad".to_string(), "Toss".to_string());
        let second_id = second.insert(&conn).unwrap();

        let all = Recipe::list_all(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, Some(second_id));
        assert_eq!(all[1].id, Some(first_id));
    }

    #[test]
    fn test_ingredient_crud() {
        let (_temp, conn) = create_test_db();

        // Parent recipe first (foreign key requirement)
        let mut recipe = Recipe::new("Pizza".to_string(), "Put in the oven".to_string());
        let recipe_id = recipe.insert(&conn).unwrap();

        let mut dough = Ingredient::new("dough".to_string(), recipe_id);
        let id = dough.insert(&conn).unwrap();
        assert!(id > 0);

        let mut cheese = Ingredient::new("cheese".to_string(), recipe_id);
        cheese.insert(&conn).unwrap();

        // Find by recipe, insertion order
        let ingredients = Ingredient::find_by_recipe(&conn, recipe_id).unwrap();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0].name, "dough");
        assert_eq!(ingredients[1].name, "cheese");

        // Delete by recipe
        let removed = Ingredient::delete_by_recipe(&conn, recipe_id).unwrap();
        assert_eq!(removed, 2);
        let remaining = Ingredient::find_by_recipe(&conn, recipe_id).unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_ingredient_requires_parent() {
        let (_temp, conn) = create_test_db();

        let mut orphan = Ingredient::new("cheese".to_string(), 99);
        let result = orphan.insert(&conn);
        assert!(result.is_err());
    }

    #[test]
    fn test_cascade_delete() {
        let (_temp, conn) = create_test_db();

        let mut recipe = Recipe::new("Pizza".to_string(), "Put in the oven".to_string());
        let recipe_id = recipe.insert(&conn).unwrap();

        let mut ingredient = Ingredient::new("cheese".to_string(), recipe_id);
        ingredient.insert(&conn).unwrap();

        // Delete the recipe - ingredients should be cascade deleted
        Recipe::delete(&conn, recipe_id).unwrap();

        let ingredients = Ingredient::find_by_recipe(&conn, recipe_id).unwrap();
        assert!(ingredients.is_empty());
    }

    #[test]
    fn test_search_is_substring() {
        let (_temp, conn) = create_test_db();

        let mut pizza = Recipe::new("Pizza".to_string(), "Oven".to_string());
        pizza.insert(&conn).unwrap();
        let mut pie = Recipe::new("Apple Pizza Pie".to_string(), "Bake".to_string());
        pie.insert(&conn).unwrap();
        let mut soup = Recipe::new("Soup".to_string(), "Simmer".to_string());
        soup.insert(&conn).unwrap();

        // Unanchored substring match
        let hits = Recipe::search_by_name(&conn, "Piz").unwrap();
        assert_eq!(hits.len(), 2);

        let hits = Recipe::search_by_name(&conn, "Pizza Pie").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Apple Pizza Pie");
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let (_temp, conn) = create_test_db();

        let mut pizza = Recipe::new("Pizza".to_string(), "Oven".to_string());
        pizza.insert(&conn).unwrap();

        let hits = Recipe::search_by_name(&conn, "piz").unwrap();
        assert!(hits.is_empty());

        let hits = Recipe::search_by_name(&conn, "Piz").unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let (_temp, conn) = create_test_db();

        let mut pizza = Recipe::new("Pizza".to_string(), "Oven".to_string());
        pizza.insert(&conn).unwrap();

        let hits = Recipe::search_by_name(&conn, "thisdoesnotexist").unwrap();
        assert!(hits.is_empty());
    }
}
