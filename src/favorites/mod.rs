mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};

use log::{debug, info, warn};

use crate::error::StoreError;
use crate::model::{FavoriteRecord, RecipeSummary};

/// Key the favorites list is stored under unless configured otherwise.
pub const FAVORITES_KEY: &str = "recipe-favorites";

/// A user's favorite recipes, kept as one JSON array under a single key.
///
/// Reads fail soft to an empty list and writes report failure as `false`;
/// nothing here returns an error. Every change rewrites the whole list.
pub struct Favorites<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Favorites {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All favorites in the order they were added.
    pub fn list(&self) -> Vec<FavoriteRecord> {
        match self.load() {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!("Error retrieving favorites: {}", e);
                Vec::new()
            }
        }
    }

    pub fn has(&self, id: u64) -> bool {
        self.list().iter().any(|favorite| favorite.id == id)
    }

    /// Adds `recipe` unless a favorite with the same id exists.
    ///
    /// Only the summary fields are kept. Returns `false` when the recipe was
    /// already a favorite or the list could not be saved.
    pub fn add<R: AsRef<RecipeSummary>>(&self, recipe: &R) -> bool {
        let recipe = recipe.as_ref();
        let mut favorites = self.list();
        if favorites.iter().any(|favorite| favorite.id == recipe.id) {
            debug!("Recipe {} is already a favorite", recipe.id);
            return false;
        }

        favorites.push(recipe.clone());
        match self.save(&favorites) {
            Ok(()) => {
                info!("Added recipe {} to favorites", recipe.id);
                true
            }
            Err(e) => {
                warn!("Error adding favorite {}: {}", recipe.id, e);
                false
            }
        }
    }

    /// Drops every favorite with this id. Returns `false` only if saving fails.
    pub fn remove(&self, id: u64) -> bool {
        let favorites: Vec<FavoriteRecord> = self
            .list()
            .into_iter()
            .filter(|favorite| favorite.id != id)
            .collect();
        match self.save(&favorites) {
            Ok(()) => {
                info!("Removed recipe {} from favorites", id);
                true
            }
            Err(e) => {
                warn!("Error removing favorite {}: {}", id, e);
                false
            }
        }
    }

    pub fn toggle<R: AsRef<RecipeSummary>>(&self, recipe: &R) -> bool {
        let id = recipe.as_ref().id;
        if self.has(id) {
            self.remove(id)
        } else {
            self.add(recipe)
        }
    }

    /// Favorites whose title contains `term`, ignoring case.
    ///
    /// A blank term matches everything.
    pub fn matching(&self, term: &str) -> Vec<FavoriteRecord> {
        let term = term.trim().to_lowercase();
        let favorites = self.list();
        if term.is_empty() {
            return favorites;
        }
        favorites
            .into_iter()
            .filter(|favorite| favorite.title.to_lowercase().contains(&term))
            .collect()
    }

    /// Deletes the stored list entirely.
    pub fn clear(&self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => {
                info!("Cleared favorites");
                true
            }
            Err(e) => {
                warn!("Error clearing favorites: {}", e);
                false
            }
        }
    }

    fn load(&self) -> Result<Vec<FavoriteRecord>, StoreError> {
        match self.store.get(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, favorites: &[FavoriteRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeDetail;

    struct FailingStore {
        contents: Option<String>,
    }

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.contents.clone())
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn recipe(id: u64, title: &str) -> RecipeSummary {
        RecipeSummary {
            id,
            title: title.to_string(),
            image: format!("https://img.example.com/{}.jpg", id),
            ready_in_minutes: 30,
            servings: 2,
            summary: "<b>Tasty</b>".to_string(),
        }
    }

    #[test]
    fn test_add_then_has() {
        let favorites = Favorites::new(MemoryStore::new());
        let pasta = recipe(1, "Pasta");

        assert!(!favorites.has(1));
        assert!(favorites.add(&pasta));
        assert!(favorites.has(1));
    }

    #[test]
    fn test_add_twice_does_not_duplicate() {
        let favorites = Favorites::new(MemoryStore::new());
        let pasta = recipe(1, "Pasta");

        assert!(favorites.add(&pasta));
        assert!(!favorites.add(&pasta));
        assert_eq!(favorites.list().len(), 1);
    }

    #[test]
    fn test_add_preserves_order() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add(&recipe(3, "C"));
        favorites.add(&recipe(1, "A"));
        favorites.add(&recipe(2, "B"));

        let ids: Vec<u64> = favorites.list().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_remove_keeps_survivor_order() {
        let favorites = Favorites::new(MemoryStore::new());
        for (id, title) in [(1, "A"), (2, "B"), (3, "C")] {
            favorites.add(&recipe(id, title));
        }

        assert!(favorites.remove(2));
        assert!(!favorites.has(2));
        let ids: Vec<u64> = favorites.list().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // removing something that is not there still succeeds
        assert!(favorites.remove(42));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let favorites = Favorites::new(MemoryStore::new());
        let pasta = recipe(1, "Pasta");

        assert!(favorites.toggle(&pasta));
        assert!(favorites.has(1));
        assert!(favorites.toggle(&pasta));
        assert!(!favorites.has(1));
    }

    #[test]
    fn test_add_detail_keeps_only_summary_fields() {
        let store = MemoryStore::new();
        let favorites = Favorites::new(&store);
        let detail = RecipeDetail {
            info: recipe(9, "Stew"),
            instructions: Some("Simmer for hours.".to_string()),
            ..Default::default()
        };

        assert!(favorites.add(&detail));

        let raw = store.get(FAVORITES_KEY).unwrap().unwrap();
        let stored: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        let mut fields: Vec<&str> = stored[0]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        fields.sort();
        assert_eq!(
            fields,
            vec!["id", "image", "readyInMinutes", "servings", "summary", "title"]
        );
        assert_eq!(favorites.list()[0], detail.info);
    }

    #[test]
    fn test_corrupt_data_reads_as_empty() {
        let store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{not json").unwrap();
        let favorites = Favorites::new(&store);

        assert!(favorites.list().is_empty());
        assert!(!favorites.has(1));
    }

    #[test]
    fn test_persist_failure_reports_false() {
        let existing = serde_json::to_string(&vec![recipe(1, "Pasta")]).unwrap();
        let favorites = Favorites::new(FailingStore {
            contents: Some(existing),
        });

        assert!(!favorites.add(&recipe(2, "Soup")));
        assert!(!favorites.remove(1));
        assert!(!favorites.toggle(&recipe(1, "Pasta")));
        assert!(!favorites.clear());
        assert!(favorites.has(1));
    }

    #[test]
    fn test_matching_filters_by_title() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add(&recipe(1, "Tomato and Basil Pasta"));
        favorites.add(&recipe(2, "Chicken Enchilada Casserole"));
        favorites.add(&recipe(3, "Sage Browned Butter Pasta"));

        let titles: Vec<String> = favorites
            .matching("PASTA")
            .into_iter()
            .map(|f| f.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Tomato and Basil Pasta", "Sage Browned Butter Pasta"]
        );
        assert_eq!(favorites.matching("  ").len(), 3);
        assert!(favorites.matching("sushi").is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let favorites = Favorites::new(MemoryStore::new());
        favorites.add(&recipe(1, "Pasta"));
        assert!(favorites.clear());
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let favorites = Favorites::with_key(&store, "other-list");
        favorites.add(&recipe(1, "Pasta"));
        assert!(store.get("other-list").unwrap().is_some());
        assert!(store.get(FAVORITES_KEY).unwrap().is_none());
    }
}
