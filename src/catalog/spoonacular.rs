use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::catalog::RecipeCatalog;
use crate::config::BrowserConfig;
use crate::error::{BrowserError, CatalogError};
use crate::model::{RecipeDetail, SearchResultPage};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Client for the Spoonacular recipe API.
pub struct SpoonacularCatalog {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularCatalog {
    /// Create a catalog client from configuration
    ///
    /// The API key comes from the config first, then from `SPOONACULAR_API_KEY`.
    pub fn new(config: &BrowserConfig) -> Result<Self, BrowserError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or_else(|| {
                BrowserError::BuilderError(
                    "SPOONACULAR_API_KEY not found in config or environment".to_string(),
                )
            })?;

        Self::with_options(
            api_key,
            config.base_url.clone(),
            Duration::from_secs(config.timeout),
        )
    }

    pub fn with_options(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, BrowserError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(SpoonacularCatalog {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularCatalog {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let body = success_body(response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

async fn success_body(response: Response) -> Result<String, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.text().await?)
}

#[async_trait]
impl RecipeCatalog for SpoonacularCatalog {
    fn catalog_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(
        &self,
        query: &str,
        number: usize,
        offset: usize,
    ) -> Result<SearchResultPage, CatalogError> {
        let params = [
            ("query", query.to_string()),
            ("number", number.to_string()),
            ("offset", offset.to_string()),
            ("addRecipeInformation", "true".to_string()),
        ];
        let page: SearchResultPage = self.get_json("/recipes/complexSearch", &params).await?;
        Ok(page.normalized(number))
    }

    async fn recipe_information(&self, id: u64) -> Result<RecipeDetail, CatalogError> {
        let params = [("includeNutrition", "true".to_string())];
        self.get_json(&format!("/recipes/{}/information", id), &params)
            .await
    }
}
