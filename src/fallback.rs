//! Fixed recipes served when the catalog cannot be reached.

use crate::model::{Ingredient, Nutrient, Nutrition, RecipeDetail, RecipeSummary, SearchResultPage};

// (id, title, image id, ready in minutes, servings, summary)
const RECIPES: [(u64, &str, u64, u32, u32, &str); 8] = [
    (
        716429,
        "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
        716429,
        45,
        2,
        "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs might be just the main course you are searching for. This recipe makes 2 servings with 636 calories, 21g of protein, and 20g of fat each.",
    ),
    (
        715538,
        "What to make for dinner tonight?? Bruschetta Style Pork & Pasta",
        715538,
        35,
        4,
        "What to make for dinner tonight?? Bruschetta Style Pork & Pasta might be a good recipe to expand your main course recipe box. This recipe makes 4 servings with 693 calories, 47g of protein, and 33g of fat each.",
    ),
    (
        662744,
        "Simple Macaroni and Cheese",
        662744,
        45,
        2,
        "Simple Macaroni and Cheese is a delicious and traditional dish that combines elbow macaroni with a rich and creamy cheese sauce.",
    ),
    (
        663559,
        "Tomato and Basil Pasta",
        663559,
        35,
        4,
        "Tomato and Basil Pasta is a simple Italian dish featuring fresh tomatoes, aromatic basil, and al dente pasta for a light and flavorful meal.",
    ),
    (
        640819,
        "Crispy Salmon with Creamed Spinach",
        640819,
        30,
        2,
        "Crispy Salmon with Creamed Spinach pairs perfectly seared salmon fillets with rich, creamy spinach for a delicious and nutritious dinner option.",
    ),
    (
        1697583,
        "Roasted Vegetable Quinoa Bowl",
        1697583,
        40,
        4,
        "This Roasted Vegetable Quinoa Bowl combines protein-rich quinoa with seasonal roasted vegetables and a tangy dressing for a wholesome meal.",
    ),
    (
        638038,
        "Chicken Enchilada Casserole",
        638038,
        55,
        6,
        "Chicken Enchilada Casserole is a family-friendly dish featuring layers of tortillas, seasoned chicken, beans, and cheese baked to perfection.",
    ),
    (
        659681,
        "Sage Browned Butter Pasta",
        659681,
        25,
        2,
        "Sage Browned Butter Pasta combines the nutty flavor of browned butter with aromatic sage for a simple yet sophisticated pasta dish.",
    ),
];

const DETAIL_INSTRUCTIONS: &str = "Bring a large pot of salted water to a boil. Add pasta and cook according to package directions. Drain, reserving 1/2 cup of the pasta cooking water. Meanwhile, heat oil in a large skillet over medium heat. Add scallions and garlic and cook until soft and fragrant, about 2 minutes. Add cauliflower, salt, and pepper and cook until cauliflower begins to soften, about 5 minutes. Add breadcrumbs and cook until lightly toasted, about 3 minutes. Add pasta and reserved cooking water to the skillet and toss to combine. Serve hot.";

const DETAIL_INGREDIENTS: [(u64, &str); 8] = [
    (11677, "2 medium scallions, thinly sliced"),
    (11215, "2 cloves garlic, minced"),
    (11135, "1 head cauliflower, cut into small florets"),
    (1002047, "1 teaspoon salt"),
    (1002030, "1/2 teaspoon black pepper"),
    (18079, "1/3 cup breadcrumbs"),
    (20420, "8 ounces pasta"),
    (4053, "2 tablespoons olive oil"),
];

const DETAIL_NUTRIENTS: [(&str, f64, &str); 5] = [
    ("Calories", 636.0, "kcal"),
    ("Fat", 20.0, "g"),
    ("Carbohydrates", 93.0, "g"),
    ("Protein", 21.0, "g"),
    ("Sodium", 1051.0, "mg"),
];

fn image_url(image_id: u64) -> String {
    format!("https://spoonacular.com/recipeImages/{}-556x370.jpg", image_id)
}

/// The full fallback dataset, in display order.
pub fn recipes() -> Vec<RecipeSummary> {
    RECIPES
        .iter()
        .map(
            |&(id, title, image_id, ready_in_minutes, servings, summary)| RecipeSummary {
                id,
                title: title.to_string(),
                image: image_url(image_id),
                ready_in_minutes,
                servings,
                summary: summary.to_string(),
            },
        )
        .collect()
}

/// Placeholder detail record returned for any id when details are unavailable.
pub fn details() -> RecipeDetail {
    let info = recipes().swap_remove(0);
    RecipeDetail {
        info,
        instructions: Some(DETAIL_INSTRUCTIONS.to_string()),
        extended_ingredients: DETAIL_INGREDIENTS
            .iter()
            .map(|&(id, original)| Ingredient {
                id,
                original: original.to_string(),
            })
            .collect(),
        nutrition: Some(Nutrition {
            nutrients: DETAIL_NUTRIENTS
                .iter()
                .map(|&(name, amount, unit)| Nutrient {
                    name: name.to_string(),
                    amount,
                    unit: unit.to_string(),
                })
                .collect(),
        }),
    }
}

/// One page of the fallback dataset.
///
/// With a non-blank `query`, only recipes whose title contains it (ignoring
/// case) are considered. `total_results` is the count before slicing, and an
/// offset past the end yields an empty page.
pub fn page(query: Option<&str>, offset: usize, number: usize) -> SearchResultPage {
    let matching: Vec<RecipeSummary> = match query.map(|q| q.trim().to_lowercase()) {
        Some(needle) if !needle.is_empty() => recipes()
            .into_iter()
            .filter(|recipe| recipe.title.to_lowercase().contains(&needle))
            .collect(),
        _ => recipes(),
    };

    let total_results = matching.len();
    let results = matching.into_iter().skip(offset).take(number).collect();

    SearchResultPage {
        results,
        total_results,
        offset,
        number,
    }
}
