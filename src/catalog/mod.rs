mod offline;
mod spoonacular;

pub use offline::OfflineCatalog;
pub use spoonacular::{SpoonacularCatalog, DEFAULT_BASE_URL};

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::model::{RecipeDetail, SearchResultPage};

/// A remote, read-only recipe catalog.
#[async_trait]
pub trait RecipeCatalog: Send + Sync {
    /// Get the catalog name (e.g., "spoonacular")
    fn catalog_name(&self) -> &str;

    /// Search recipes matching `query`, returning `number` results from `offset`
    async fn search(
        &self,
        query: &str,
        number: usize,
        offset: usize,
    ) -> Result<SearchResultPage, CatalogError>;

    /// Fetch one recipe with ingredients, instructions and nutrition
    async fn recipe_information(&self, id: u64) -> Result<RecipeDetail, CatalogError>;
}

/// Why a result came from the fallback dataset instead of the catalog.
#[derive(Debug)]
pub enum FallbackReason {
    /// Blank queries are answered locally without asking the catalog
    EmptyQuery,
    /// The catalog call failed
    Catalog(CatalogError),
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::EmptyQuery => write!(f, "empty query"),
            FallbackReason::Catalog(e) => write!(f, "{}", e),
        }
    }
}

/// Outcome of a catalog-backed read: live data, or fallback data and the reason.
#[derive(Debug)]
pub enum Fetched<T> {
    Live(T),
    Degraded { data: T, reason: FallbackReason },
}

impl<T> Fetched<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Fetched::Live(_))
    }

    pub fn data(&self) -> &T {
        match self {
            Fetched::Live(data) | Fetched::Degraded { data, .. } => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fetched::Live(data) | Fetched::Degraded { data, .. } => data,
        }
    }

    pub fn reason(&self) -> Option<&FallbackReason> {
        match self {
            Fetched::Live(_) => None,
            Fetched::Degraded { reason, .. } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_accessors() {
        let live = Fetched::Live(3);
        assert!(live.is_live());
        assert!(live.reason().is_none());
        assert_eq!(live.into_inner(), 3);

        let degraded = Fetched::Degraded {
            data: 4,
            reason: FallbackReason::EmptyQuery,
        };
        assert!(!degraded.is_live());
        assert_eq!(*degraded.data(), 4);
        assert_eq!(degraded.reason().unwrap().to_string(), "empty query");
    }

    #[test]
    fn test_reason_display_wraps_catalog_error() {
        let reason = FallbackReason::Catalog(CatalogError::Status {
            status: 402,
            body: "quota".to_string(),
        });
        assert_eq!(reason.to_string(), "Catalog returned HTTP 402: quota");
    }
}
