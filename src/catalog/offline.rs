use async_trait::async_trait;

use crate::catalog::RecipeCatalog;
use crate::error::CatalogError;
use crate::model::{RecipeDetail, SearchResultPage};

/// Stand-in catalog for setups without an API key; every call is unavailable.
#[derive(Debug, Clone, Default)]
pub struct OfflineCatalog;

const NO_API_KEY: &str = "no API key configured";

#[async_trait]
impl RecipeCatalog for OfflineCatalog {
    fn catalog_name(&self) -> &str {
        "offline"
    }

    async fn search(
        &self,
        _query: &str,
        _number: usize,
        _offset: usize,
    ) -> Result<SearchResultPage, CatalogError> {
        Err(CatalogError::Unavailable(NO_API_KEY.to_string()))
    }

    async fn recipe_information(&self, _id: u64) -> Result<RecipeDetail, CatalogError> {
        Err(CatalogError::Unavailable(NO_API_KEY.to_string()))
    }
}
