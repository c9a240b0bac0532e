//! Search filters and deterministic cache key derivation

use serde::{Deserialize, Serialize};

/// Filter combination for a recipe search.
///
/// The same triple always derives the same cache key, so identical searches
/// land on the same cache slot regardless of which request produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Ordered ingredient names; order is preserved into the cache key
    ingredients: Vec<String>,
    diet: Option<String>,
    meal_type: Option<String>,
}

impl SearchFilters {
    /// Creates filters from raw query parameters.
    ///
    /// An absent or empty ingredients string means "no filter" and is kept
    /// as an empty list, never rejected.
    pub fn from_params(
        ingredients: Option<&str>,
        diet: Option<&str>,
        meal_type: Option<&str>,
    ) -> Self {
        let ingredients = ingredients
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            ingredients,
            diet: normalize(diet),
            meal_type: normalize(meal_type),
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Comma-joined ingredient list as forwarded to the upstream provider.
    /// Empty when no ingredients were given.
    pub fn ingredients_param(&self) -> String {
        self.ingredients.join(",")
    }

    pub fn diet_param(&self) -> &str {
        self.diet.as_deref().unwrap_or_default()
    }

    pub fn meal_type_param(&self) -> &str {
        self.meal_type.as_deref().unwrap_or_default()
    }

    /// Derives the cache key for this filter combination.
    ///
    /// Pure function of the three fields: `<ingredients>_<diet>_<mealType>`
    /// with absent fields rendered as empty strings.
    pub fn cache_key(&self) -> String {
        format!(
            "{}_{}_{}",
            self.ingredients_param(),
            self.diet_param(),
            self.meal_type_param()
        )
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}
