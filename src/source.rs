use log::{debug, info, warn};

use crate::builder::RecipeSourceBuilder;
use crate::catalog::{FallbackReason, Fetched, RecipeCatalog};
use crate::fallback;
use crate::model::{RecipeDetail, SearchResultPage};

/// Suggested searches offered before the user has typed anything.
pub const POPULAR_SEARCHES: [&str; 5] = ["pasta", "chicken", "vegetarian", "dessert", "quick dinner"];

/// Reads recipes from a catalog, degrading to the fallback dataset instead of
/// failing.
///
/// Neither operation returns an error: every failure path produces a
/// well-formed result tagged as [`Fetched::Degraded`].
pub struct RecipeSource {
    catalog: Box<dyn RecipeCatalog>,
    page_size: usize,
}

impl RecipeSource {
    pub fn new(catalog: Box<dyn RecipeCatalog>, page_size: usize) -> Self {
        RecipeSource {
            catalog,
            page_size: page_size.max(1),
        }
    }

    /// Creates a new builder for configuring a source
    pub fn builder() -> RecipeSourceBuilder {
        RecipeSourceBuilder::default()
    }

    /// Default page size for [`RecipeSource::search_page`].
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn catalog_name(&self) -> &str {
        self.catalog.catalog_name()
    }

    /// Searches with the configured page size.
    pub async fn search_page(&self, query: &str, page: usize) -> Fetched<SearchResultPage> {
        self.search(query, page, self.page_size).await
    }

    /// Fetches page `page` (1-based) of results for `query`.
    ///
    /// A blank query lists the fallback dataset without contacting the
    /// catalog. When the catalog fails, the fallback dataset is filtered by
    /// title and paginated the same way. Page 0 is treated as page 1 and a
    /// page size of 0 as 1.
    pub async fn search(
        &self,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Fetched<SearchResultPage> {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let offset = (page - 1).saturating_mul(page_size);
        let query = query.trim();

        if query.is_empty() {
            info!("Empty query, listing fallback recipes");
            return Fetched::Degraded {
                data: fallback::page(None, offset, page_size),
                reason: FallbackReason::EmptyQuery,
            };
        }

        debug!(
            "Searching {} for {:?} (page {}, {} per page)",
            self.catalog.catalog_name(),
            query,
            page,
            page_size
        );

        match self.catalog.search(query, page_size, offset).await {
            Ok(results) => Fetched::Live(results),
            Err(e) => {
                warn!("Recipe search failed, using fallback data: {}", e);
                Fetched::Degraded {
                    data: fallback::page(Some(query), offset, page_size),
                    reason: FallbackReason::Catalog(e),
                }
            }
        }
    }

    /// Fetches one recipe with ingredients, instructions and nutrition.
    ///
    /// On failure the fixed placeholder recipe is returned, whatever `id` was
    /// asked for.
    pub async fn get_details(&self, id: u64) -> Fetched<RecipeDetail> {
        debug!("Fetching recipe {} from {}", id, self.catalog.catalog_name());

        match self.catalog.recipe_information(id).await {
            Ok(detail) => Fetched::Live(detail),
            Err(e) => {
                warn!("Recipe details request failed, using fallback data: {}", e);
                Fetched::Degraded {
                    data: fallback::details(),
                    reason: FallbackReason::Catalog(e),
                }
            }
        }
    }
}
