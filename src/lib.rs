pub mod builder;
pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod fallback;
pub mod favorites;
pub mod instructions;
pub mod markup;
pub mod model;
pub mod pagination;
pub mod source;

pub use builder::RecipeSourceBuilder;
pub use catalog::{FallbackReason, Fetched, RecipeCatalog};
pub use config::{BrowserConfig, FavoritesConfig};
pub use error::{BrowserError, CatalogError, StoreError};
pub use favorites::{Favorites, FileStore, KeyValueStore, MemoryStore};
pub use model::{FavoriteRecord, RecipeDetail, RecipeSummary, SearchResultPage};
pub use pagination::{window, PageToken, Pager};
pub use source::{RecipeSource, POPULAR_SEARCHES};

use log::debug;

/// Serializes tests that read or modify process environment variables.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Search recipes using configuration from `recipe-browser.toml` and the environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fetched = recipe_browser::search_recipes("pasta", 1).await?;
/// for recipe in &fetched.data().results {
///     println!("{}", recipe.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(
    query: &str,
    page: usize,
) -> Result<Fetched<SearchResultPage>, BrowserError> {
    let source = RecipeSource::builder()
        .from_config(BrowserConfig::load()?)
        .build()?;
    Ok(source.search_page(query, page).await)
}

/// Fetch one recipe using configuration from `recipe-browser.toml` and the environment
pub async fn recipe_details(id: u64) -> Result<Fetched<RecipeDetail>, BrowserError> {
    let source = RecipeSource::builder()
        .from_config(BrowserConfig::load()?)
        .build()?;
    Ok(source.get_details(id).await)
}

/// Open the file-backed favorites list described by `config`
pub fn open_favorites(config: &FavoritesConfig) -> Result<Favorites<FileStore>, BrowserError> {
    debug!("Opening favorites in {}", config.data_dir.display());
    let store = FileStore::open(&config.data_dir)?;
    Ok(Favorites::with_key(store, config.key.clone()))
}
