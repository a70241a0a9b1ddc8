use log::{info, warn};
use std::time::Duration;

use crate::catalog::{OfflineCatalog, RecipeCatalog, SpoonacularCatalog};
use crate::config::BrowserConfig;
use crate::{BrowserError, RecipeSource};

/// Builder for configuring a [`RecipeSource`]
#[derive(Default)]
pub struct RecipeSourceBuilder {
    config: BrowserConfig,
    catalog: Option<Box<dyn RecipeCatalog>>,
    offline: bool,
}

impl RecipeSourceBuilder {
    /// Start from loaded configuration instead of defaults
    ///
    /// # Example
    /// ```
    /// use recipe_browser::{BrowserConfig, RecipeSource};
    ///
    /// let builder = RecipeSource::builder().from_config(BrowserConfig::default());
    /// ```
    pub fn from_config(mut self, config: BrowserConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the Spoonacular API key
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeSource;
    ///
    /// let builder = RecipeSource::builder().api_key("your-api-key");
    /// ```
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Point the client at another catalog endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeSource;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeSource::builder()
    ///     .api_key("your-api-key")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config.timeout = duration.as_secs().max(1);
        self
    }

    /// Set the default number of results per page
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.config.page_size = page_size;
        self
    }

    /// Use a custom catalog implementation
    pub fn catalog(mut self, catalog: Box<dyn RecipeCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Never contact the network; every request is served from fallback data
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Build the source
    ///
    /// Catalog selection, first match wins: an explicit `catalog()`, then
    /// `offline()`, then Spoonacular when an API key is known (builder,
    /// config, or `SPOONACULAR_API_KEY`), otherwise the offline catalog.
    ///
    /// # Errors
    /// Returns `BrowserError` if:
    /// - the page size is zero
    /// - the HTTP client cannot be constructed
    ///
    /// # Example
    /// ```
    /// # use recipe_browser::RecipeSource;
    /// let source = RecipeSource::builder().offline().build().unwrap();
    /// assert_eq!(source.catalog_name(), "offline");
    /// ```
    pub fn build(self) -> Result<RecipeSource, BrowserError> {
        if self.config.page_size == 0 {
            return Err(BrowserError::BuilderError(
                "Page size must be greater than zero".to_string(),
            ));
        }

        let catalog: Box<dyn RecipeCatalog> = match self.catalog {
            Some(catalog) => catalog,
            None if self.offline => Box::new(OfflineCatalog),
            None => {
                let has_key = self.config.api_key.is_some()
                    || std::env::var("SPOONACULAR_API_KEY").is_ok();
                if has_key {
                    Box::new(SpoonacularCatalog::new(&self.config)?)
                } else {
                    warn!("No Spoonacular API key configured, serving fallback recipes only");
                    Box::new(OfflineCatalog)
                }
            }
        };

        info!(
            "Using '{}' catalog with {} results per page",
            catalog.catalog_name(),
            self.config.page_size
        );
        Ok(RecipeSource::new(catalog, self.config.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_api_key_uses_spoonacular() {
        let source = RecipeSource::builder()
            .api_key("test-key")
            .base_url("http://localhost:9")
            .timeout(Duration::from_secs(5))
            .page_size(12)
            .build()
            .unwrap();
        assert_eq!(source.catalog_name(), "spoonacular");
        assert_eq!(source.page_size(), 12);
    }

    #[test]
    fn test_api_key_from_environment_uses_spoonacular() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("SPOONACULAR_API_KEY", "env-key");
        let result = RecipeSource::builder().base_url("http://localhost:9").build();
        std::env::remove_var("SPOONACULAR_API_KEY");

        assert_eq!(result.unwrap().catalog_name(), "spoonacular");
    }

    #[test]
    fn test_no_api_key_falls_back_to_offline() {
        let _guard = crate::ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var("SPOONACULAR_API_KEY");
        let source = RecipeSource::builder().build().unwrap();
        assert_eq!(source.catalog_name(), "offline");
    }

    #[test]
    fn test_offline_wins_over_api_key() {
        let source = RecipeSource::builder()
            .api_key("test-key")
            .offline()
            .build()
            .unwrap();
        assert_eq!(source.catalog_name(), "offline");
    }

    #[test]
    fn test_explicit_catalog_wins() {
        let source = RecipeSource::builder()
            .offline()
            .catalog(Box::new(SpoonacularCatalog::with_base_url(
                "k".to_string(),
                "http://localhost:9".to_string(),
            )))
            .build()
            .unwrap();
        assert_eq!(source.catalog_name(), "spoonacular");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = RecipeSource::builder().offline().page_size(0).build();
        assert!(matches!(result, Err(BrowserError::BuilderError(_))));
    }

    #[test]
    fn test_from_config() {
        let config = BrowserConfig {
            page_size: 4,
            ..Default::default()
        };
        let source = RecipeSource::builder()
            .from_config(config)
            .offline()
            .build()
            .unwrap();
        assert_eq!(source.page_size(), 4);
    }
}
