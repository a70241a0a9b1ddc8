//! Plain-text rendering for the command line.

use std::fmt::Write;

use crate::model::{RecipeDetail, RecipeSummary};
use crate::pagination::{PageToken, Pager};

/// Characters of summary shown under each result.
pub const EXCERPT_CHARS: usize = 100;

/// One result entry: title line, excerpt, then time and servings.
pub fn recipe_card(recipe: &RecipeSummary, favorite: bool) -> String {
    let marker = if favorite { "♥" } else { " " };
    format!(
        "{} {} (#{})\n    {}\n    {} min · {} servings",
        marker,
        recipe.title,
        recipe.id,
        recipe.excerpt(EXCERPT_CHARS),
        recipe.ready_in_minutes,
        recipe.servings
    )
}

/// A list of recipes, or `empty_message` when there are none.
pub fn recipe_list<F>(recipes: &[RecipeSummary], is_favorite: F, empty_message: &str) -> String
where
    F: Fn(u64) -> bool,
{
    if recipes.is_empty() {
        return empty_message.to_string();
    }
    recipes
        .iter()
        .map(|recipe| recipe_card(recipe, is_favorite(recipe.id)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Header line for a result listing, e.g. `Results for "pasta" (17 recipes found)`.
pub fn results_header(query: &str, total_results: usize) -> String {
    match total_results {
        0 => format!("Results for \"{}\"", query),
        1 => format!("Results for \"{}\" (1 recipe found)", query),
        n => format!("Results for \"{}\" ({} recipes found)", query, n),
    }
}

/// Page control line such as `‹ 1 ... 4 [5] 6 ... 20 ›`; empty for one page.
pub fn page_controls(pager: &Pager) -> String {
    if !pager.is_visible() {
        return String::new();
    }

    let mut parts = Vec::new();
    if pager.previous().is_some() {
        parts.push("‹".to_string());
    }
    for token in pager.tokens() {
        parts.push(match token {
            PageToken::Page(n) if n == pager.current => format!("[{}]", n),
            other => other.to_string(),
        });
    }
    if pager.next().is_some() {
        parts.push("›".to_string());
    }
    parts.join(" ")
}

/// Full recipe view: header, ingredients, steps and up to `nutrients` nutrients.
pub fn recipe_detail(detail: &RecipeDetail, favorite: bool, nutrients: usize) -> String {
    let info = &detail.info;
    let mut out = String::new();

    let _ = writeln!(out, "{} (#{})", info.title, info.id);
    let _ = writeln!(
        out,
        "{} minutes · {} servings · {}",
        info.ready_in_minutes,
        info.servings,
        if favorite { "Saved" } else { "Not saved" }
    );
    if !info.image.is_empty() {
        let _ = writeln!(out, "{}", info.image);
    }

    let about = info.excerpt(usize::MAX);
    if !about.is_empty() {
        let _ = writeln!(out, "\nAbout this recipe\n{}", about);
    }

    let _ = writeln!(out, "\nIngredients");
    if detail.extended_ingredients.is_empty() {
        let _ = writeln!(out, "No ingredient list available for this recipe.");
    }
    for ingredient in &detail.extended_ingredients {
        let _ = writeln!(out, "  • {}", ingredient.original);
    }

    let _ = writeln!(out, "\nInstructions");
    match detail.steps() {
        Some(steps) if !steps.is_empty() => {
            for (i, step) in steps.iter().enumerate() {
                let _ = writeln!(out, "  {}. {}", i + 1, step);
            }
        }
        _ => {
            let _ = writeln!(out, "No detailed instructions available for this recipe.");
        }
    }

    let _ = writeln!(out, "\nNutrition Facts");
    let top = detail.top_nutrients(nutrients);
    if top.is_empty() {
        let _ = writeln!(out, "No nutrition information available for this recipe.");
    }
    for nutrient in top {
        let _ = writeln!(
            out,
            "  {:<20} {} {}",
            nutrient.name,
            nutrient.rounded_amount(),
            nutrient.unit
        );
    }

    out.trim_end().to_string()
}
