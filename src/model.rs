use serde::{Deserialize, Deserializer, Serialize};

use crate::instructions;
use crate::markup::strip_tags;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A recipe as it appears in search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Catalog-assigned identifier, the recipe's identity
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Image URL
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ready_in_minutes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub servings: u32,
    /// Short description; may contain HTML markup
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}

/// What gets persisted for a favorite: the summary fields and nothing else.
pub type FavoriteRecord = RecipeSummary;

impl RecipeSummary {
    /// Summary with markup removed, cut to `max_chars` characters.
    ///
    /// Longer summaries get a trailing `...`.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let text = strip_tags(&self.summary);
        if text.chars().count() > max_chars {
            let cut: String = text.chars().take(max_chars).collect();
            format!("{}...", cut)
        } else {
            text
        }
    }
}

impl AsRef<RecipeSummary> for RecipeSummary {
    fn as_ref(&self) -> &RecipeSummary {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: u64,
    /// The ingredient line as written in the recipe, e.g. "2 cloves garlic, minced"
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

impl Nutrient {
    /// Amount rounded to the nearest whole unit, as shown to users.
    pub fn rounded_amount(&self) -> i64 {
        self.amount.round() as i64
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrients: Vec<Nutrient>,
}

/// A full recipe: the summary fields plus ingredients, instructions and nutrition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(flatten)]
    pub info: RecipeSummary,
    /// Free-text instructions; may contain HTML markup
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl RecipeDetail {
    /// Instructions split into discrete steps, or `None` when there are none.
    pub fn steps(&self) -> Option<Vec<String>> {
        instructions::normalize(self.instructions.as_deref())
    }

    /// The first `n` nutrients in catalog order.
    pub fn top_nutrients(&self, n: usize) -> &[Nutrient] {
        match &self.nutrition {
            Some(nutrition) => &nutrition.nutrients[..n.min(nutrition.nutrients.len())],
            None => &[],
        }
    }
}

impl AsRef<RecipeSummary> for RecipeDetail {
    fn as_ref(&self) -> &RecipeSummary {
        &self.info
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RecipeSummary>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: usize,
    /// Page size the page was produced with
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: usize,
}

impl SearchResultPage {
    /// Repairs a page decoded from the catalog so that `number > 0` and
    /// `results.len() <= number` hold.
    pub fn normalized(mut self, requested_size: usize) -> Self {
        if self.number == 0 {
            self.number = requested_size.max(1);
        }
        self.results.truncate(self.number);
        self
    }

    /// Number of pages needed for `total_results` at `page_size` per page.
    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.total_results.div_ceil(page_size)
    }
}
